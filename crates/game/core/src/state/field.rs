use std::fmt;

use super::team::Team;
use super::unit::{Unit, UnitId};

/// Which of the two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// A unit addressed across the whole battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitRef {
    pub side: Side,
    pub unit: UnitId,
}

impl UnitRef {
    pub const fn new(side: Side, unit: UnitId) -> Self {
        Self { side, unit }
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side, self.unit)
    }
}

/// Both teams, indexed by [`Side`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battlefield {
    teams: [Team; 2],
}

impl Battlefield {
    pub fn new(first: Team, second: Team) -> Self {
        Self {
            teams: [first, second],
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.teams[side.index()]
    }

    pub fn get(&self, target: UnitRef) -> Option<&Unit> {
        self.team(target.side).unit(target.unit)
    }

    pub fn get_mut(&mut self, target: UnitRef) -> Option<&mut Unit> {
        self.team_mut(target.side).unit_mut(target.unit)
    }

    /// Looks up a unit that is known to exist.
    ///
    /// # Panics
    ///
    /// Panics if `target` does not name a unit of its team. Engine code only
    /// builds references after resolving them through [`Battlefield::get`].
    pub fn unit(&self, target: UnitRef) -> &Unit {
        match self.get(target) {
            Some(unit) => unit,
            None => unreachable_unit(target),
        }
    }

    /// Mutable counterpart of [`Battlefield::unit`].
    ///
    /// # Panics
    ///
    /// Panics if `target` does not name a unit of its team.
    pub fn unit_mut(&mut self, target: UnitRef) -> &mut Unit {
        match self.get_mut(target) {
            Some(unit) => unit,
            None => unreachable_unit(target),
        }
    }
}

#[cold]
fn unreachable_unit(target: UnitRef) -> ! {
    panic!("unit {target} is not part of the battlefield")
}

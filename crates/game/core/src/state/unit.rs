use std::fmt;

use crate::combat::AffinityTable;

/// Index of a unit inside its owning [`crate::state::Team`].
///
/// The leader always sits at index 0; creatures follow in roster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u8);

impl UnitId {
    pub const LEADER: Self = Self(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_leader(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability set a unit belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Leader,
    Creature,
}

/// Commands a unit may issue on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum UnitAction {
    Attack,
    Shoot,
    UseSkill,
    Invoke,
    Pass,
    Surrender,
}

impl UnitKind {
    /// Actions available to this kind of unit, in menu order.
    pub const fn available_actions(self) -> &'static [UnitAction] {
        match self {
            Self::Leader => &[
                UnitAction::Attack,
                UnitAction::Shoot,
                UnitAction::UseSkill,
                UnitAction::Invoke,
                UnitAction::Pass,
                UnitAction::Surrender,
            ],
            Self::Creature => &[
                UnitAction::Attack,
                UnitAction::UseSkill,
                UnitAction::Invoke,
                UnitAction::Pass,
            ],
        }
    }

    pub fn can(self, action: UnitAction) -> bool {
        self.available_actions().contains(&action)
    }
}

/// The five combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub strength: u32,
    pub skill: u32,
    pub magic: u32,
    pub speed: u32,
    pub luck: u32,
}

impl Stats {
    pub const fn new(strength: u32, skill: u32, magic: u32, speed: u32, luck: u32) -> Self {
        Self {
            strength,
            skill,
            magic,
            speed,
            luck,
        }
    }
}

/// Integer resource meter (HP or MP) clamped to `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Adds up to `amount`, returning how much was actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }
}

impl fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

/// A combatant: the team leader or one of its creatures.
///
/// Definitions come fully materialized from the loading layer. The engine only
/// touches HP and MP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    name: String,
    kind: UnitKind,
    hp: ResourceMeter,
    mp: ResourceMeter,
    stats: Stats,
    affinities: AffinityTable,
    skills: Vec<String>,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitKind, max_hp: u32, max_mp: u32, stats: Stats) -> Self {
        Self {
            name: name.into(),
            kind,
            hp: ResourceMeter::full(max_hp),
            mp: ResourceMeter::full(max_mp),
            stats,
            affinities: AffinityTable::default(),
            skills: Vec::new(),
        }
    }

    pub fn leader(name: impl Into<String>, max_hp: u32, max_mp: u32, stats: Stats) -> Self {
        Self::new(name, UnitKind::Leader, max_hp, max_mp, stats)
    }

    pub fn creature(name: impl Into<String>, max_hp: u32, max_mp: u32, stats: Stats) -> Self {
        Self::new(name, UnitKind::Creature, max_hp, max_mp, stats)
    }

    #[must_use]
    pub fn with_affinities(mut self, affinities: AffinityTable) -> Self {
        self.affinities = affinities;
        self
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_leader(&self) -> bool {
        self.kind == UnitKind::Leader
    }

    pub fn is_creature(&self) -> bool {
        self.kind == UnitKind::Creature
    }

    pub fn hp(&self) -> ResourceMeter {
        self.hp
    }

    pub fn mp(&self) -> ResourceMeter {
        self.mp
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn affinities(&self) -> &AffinityTable {
        &self.affinities
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn knows_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|skill| skill == name)
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    pub fn available_actions(&self) -> &'static [UnitAction] {
        self.kind.available_actions()
    }

    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.deplete(amount)
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    pub fn set_hp(&mut self, value: u32) {
        self.hp.set(value);
    }

    pub fn knock_out(&mut self) {
        self.hp.set(0);
    }

    /// Debits `cost` MP. Returns `false` and leaves MP untouched when short.
    pub fn spend_mp(&mut self, cost: u32) -> bool {
        if self.mp.current < cost {
            return false;
        }
        self.mp.deplete(cost);
        true
    }
}

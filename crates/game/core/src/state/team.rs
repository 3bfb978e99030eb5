use crate::config::{BOARD_SLOTS, LEADER_SLOT};
use crate::error::{ErrorSeverity, GameError};

use super::unit::{Unit, UnitId, UnitKind};

/// Errors raised while building a team or moving creatures between board and reserve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("{name} is not a leader")]
    NotALeader { name: String },

    #[error("{name} is not a creature")]
    NotACreature { name: String },

    #[error("roster holds {count} creatures, more than a team can index")]
    RosterTooLarge { count: usize },

    #[error("board slot {slot} is not a creature slot")]
    InvalidSlot { slot: usize },

    #[error("unit {unit} does not belong to this team")]
    UnknownUnit { unit: UnitId },

    #[error("unit {unit} is not in reserve")]
    NotInReserve { unit: UnitId },

    #[error("unit {unit} is not on the board")]
    NotOnBoard { unit: UnitId },
}

impl GameError for TeamError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotALeader { .. } | Self::NotACreature { .. } | Self::RosterTooLarge { .. } => {
                ErrorSeverity::Fatal
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotALeader { .. } => "TEAM_NOT_A_LEADER",
            Self::NotACreature { .. } => "TEAM_NOT_A_CREATURE",
            Self::RosterTooLarge { .. } => "TEAM_ROSTER_TOO_LARGE",
            Self::InvalidSlot { .. } => "TEAM_INVALID_SLOT",
            Self::UnknownUnit { .. } => "TEAM_UNKNOWN_UNIT",
            Self::NotInReserve { .. } => "TEAM_NOT_IN_RESERVE",
            Self::NotOnBoard { .. } => "TEAM_NOT_ON_BOARD",
        }
    }
}

/// One side's roster and its placement.
///
/// The team is the single source of truth for where each creature is: either
/// on a board slot or in the reserve list, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    player: String,
    units: Vec<Unit>,
    board: [Option<UnitId>; BOARD_SLOTS],
    reserve: Vec<UnitId>,
    skill_uses: u32,
}

impl Team {
    /// Builds a team with the leader on its slot and every creature in reserve.
    ///
    /// Call [`Team::deploy`] to fill the board.
    pub fn new(player: impl Into<String>, leader: Unit, creatures: Vec<Unit>) -> Result<Self, TeamError> {
        if leader.kind() != UnitKind::Leader {
            return Err(TeamError::NotALeader {
                name: leader.name().to_owned(),
            });
        }
        if let Some(stray) = creatures.iter().find(|unit| unit.kind() != UnitKind::Creature) {
            return Err(TeamError::NotACreature {
                name: stray.name().to_owned(),
            });
        }
        if creatures.len() >= u8::MAX as usize {
            return Err(TeamError::RosterTooLarge {
                count: creatures.len(),
            });
        }

        let reserve = (1..=creatures.len()).map(|index| UnitId(index as u8)).collect();
        let mut units = Vec::with_capacity(creatures.len() + 1);
        units.push(leader);
        units.extend(creatures);

        let mut board = [None; BOARD_SLOTS];
        board[LEADER_SLOT] = Some(UnitId::LEADER);

        Ok(Self {
            player: player.into(),
            units,
            board,
            reserve,
            skill_uses: 0,
        })
    }

    /// Resets placement: leader on slot 0, the first creatures in roster
    /// order on slots 1..=3, everything else in reserve.
    pub fn deploy(&mut self) {
        self.board = [None; BOARD_SLOTS];
        self.board[LEADER_SLOT] = Some(UnitId::LEADER);
        self.reserve.clear();

        let mut slots = (0..BOARD_SLOTS).filter(|&slot| slot != LEADER_SLOT);
        for id in self.creature_ids() {
            match slots.next() {
                Some(slot) => self.board[slot] = Some(id),
                None => self.reserve.push(id),
            }
        }
    }

    // ========================================================================
    // Roster access
    // ========================================================================

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn leader(&self) -> &Unit {
        &self.units[UnitId::LEADER.index()]
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.index())
    }

    /// Every unit with its id, leader first.
    pub fn units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (UnitId(index as u8), unit))
    }

    pub fn creature_ids(&self) -> impl Iterator<Item = UnitId> + use<> {
        (1..self.units.len()).map(|index| UnitId(index as u8))
    }

    pub fn find_by_name(&self, name: &str) -> Option<UnitId> {
        self.units()
            .find(|(_, unit)| unit.name() == name)
            .map(|(id, _)| id)
    }

    // ========================================================================
    // Placement
    // ========================================================================

    pub fn board(&self) -> &[Option<UnitId>; BOARD_SLOTS] {
        &self.board
    }

    pub fn occupant(&self, slot: usize) -> Option<UnitId> {
        self.board.get(slot).copied().flatten()
    }

    pub fn slot_of(&self, id: UnitId) -> Option<usize> {
        self.board.iter().position(|entry| *entry == Some(id))
    }

    pub fn is_on_board(&self, id: UnitId) -> bool {
        self.slot_of(id).is_some()
    }

    pub fn reserve(&self) -> &[UnitId] {
        &self.reserve
    }

    pub fn in_reserve(&self, id: UnitId) -> bool {
        self.reserve.contains(&id)
    }

    /// Occupied board slots in slot order.
    pub fn on_board(&self) -> impl Iterator<Item = (usize, UnitId)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|id| (slot, id)))
    }

    /// Living units on the board in slot order.
    pub fn alive_on_board(&self) -> impl Iterator<Item = (usize, UnitId)> + '_ {
        self.on_board()
            .filter(|(_, id)| self.unit(*id).is_some_and(Unit::is_alive))
    }

    pub fn alive_on_board_count(&self) -> usize {
        self.alive_on_board().count()
    }

    pub fn has_alive_on_board(&self) -> bool {
        self.alive_on_board().next().is_some()
    }

    /// Creature slots (1..=3) with no occupant.
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_SLOTS).filter(|&slot| slot != LEADER_SLOT && self.board[slot].is_none())
    }

    /// Moves every fallen creature on the board into reserve.
    ///
    /// Returns the evicted ids in slot order. The leader never leaves its slot.
    pub fn evict_fallen(&mut self) -> Vec<UnitId> {
        let mut evicted = Vec::new();
        for slot in 0..BOARD_SLOTS {
            let Some(id) = self.board[slot] else { continue };
            if id.is_leader() || self.unit(id).is_some_and(Unit::is_alive) {
                continue;
            }
            self.board[slot] = None;
            self.reserve.push(id);
            evicted.push(id);
        }
        evicted
    }

    /// Checks that `creature` could be placed on `slot` without mutating anything.
    pub fn check_placement(&self, slot: usize, creature: UnitId) -> Result<(), TeamError> {
        if slot == LEADER_SLOT || slot >= BOARD_SLOTS {
            return Err(TeamError::InvalidSlot { slot });
        }
        self.check_in_reserve(creature)
    }

    /// Puts a reserve creature on `slot`. An existing occupant goes to the back
    /// of the reserve and is returned.
    pub fn place(&mut self, slot: usize, creature: UnitId) -> Result<Option<UnitId>, TeamError> {
        self.check_placement(slot, creature)?;

        self.reserve.retain(|id| *id != creature);
        let displaced = self.board[slot].replace(creature);
        if let Some(previous) = displaced {
            self.reserve.push(previous);
        }
        Ok(displaced)
    }

    /// Swaps an on-board creature for a reserve creature, returning the shared slot.
    pub fn swap_out(&mut self, summoner: UnitId, creature: UnitId) -> Result<usize, TeamError> {
        let slot = self
            .slot_of(summoner)
            .ok_or(TeamError::NotOnBoard { unit: summoner })?;
        self.place(slot, creature)?;
        Ok(slot)
    }

    fn check_in_reserve(&self, creature: UnitId) -> Result<(), TeamError> {
        if self.unit(creature).is_none() {
            return Err(TeamError::UnknownUnit { unit: creature });
        }
        if !self.in_reserve(creature) {
            return Err(TeamError::NotInReserve { unit: creature });
        }
        Ok(())
    }

    // ========================================================================
    // Skill usage
    // ========================================================================

    /// Skills executed by this team so far; drives multi-hit cycling.
    pub fn skill_uses(&self) -> u32 {
        self.skill_uses
    }

    pub fn record_skill_use(&mut self) {
        self.skill_uses = self.skill_uses.saturating_add(1);
    }
}

//! Read-only target queries used by front ends to build choice lists.

use crate::config::{BOARD_SLOTS, LEADER_SLOT};
use crate::state::{Unit, UnitAction, UnitId, UnitRef};

use super::BattleEngine;

impl BattleEngine {
    /// Living units on the opposing board, in slot order.
    pub fn enemy_targets(&self) -> Vec<UnitRef> {
        let side = self.active.opponent();
        self.opponent_team()
            .map(|team| {
                team.alive_on_board()
                    .map(|(_, id)| UnitRef::new(side, id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Living units on the active board, in slot order.
    pub fn ally_targets(&self) -> Vec<UnitRef> {
        let side = self.active;
        self.active_team()
            .map(|team| {
                team.alive_on_board()
                    .map(|(_, id)| UnitRef::new(side, id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fallen units of the active team: board first in slot order, then reserve.
    pub fn fallen_allies(&self) -> Vec<UnitRef> {
        let side = self.active;
        let Some(team) = self.active_team() else {
            return Vec::new();
        };
        let fallen = |id: &UnitId| team.unit(*id).is_some_and(|unit| !unit.is_alive());

        team.on_board()
            .map(|(_, id)| id)
            .chain(team.reserve().iter().copied())
            .filter(fallen)
            .map(|id| UnitRef::new(side, id))
            .collect()
    }

    /// Reserve creatures of the active team in roster order.
    pub fn reserve_creatures(&self, alive_only: bool) -> Vec<UnitRef> {
        let side = self.active;
        let Some(team) = self.active_team() else {
            return Vec::new();
        };
        team.creature_ids()
            .filter(|id| team.in_reserve(*id))
            .filter(|id| !alive_only || team.unit(*id).is_some_and(Unit::is_alive))
            .map(|id| UnitRef::new(side, id))
            .collect()
    }

    /// Creature slots of the active board with their current occupant.
    pub fn summon_slots(&self) -> Vec<(usize, Option<UnitId>)> {
        let Some(team) = self.active_team() else {
            return Vec::new();
        };
        (0..BOARD_SLOTS)
            .filter(|&slot| slot != LEADER_SLOT)
            .map(|slot| (slot, team.occupant(slot)))
            .collect()
    }

    /// Actions the current actor may take; empty outside an active turn.
    pub fn available_actions(&self) -> &'static [UnitAction] {
        let actor = self
            .current_actor()
            .and_then(|actor| self.field.as_ref()?.get(actor));
        match actor {
            Some(unit) => unit.available_actions(),
            None => &[],
        }
    }

    /// Looks a unit up by display name on either side of the field.
    pub fn find_unit(&self, name: &str) -> Option<UnitRef> {
        let field = self.field.as_ref()?;
        [self.active, self.active.opponent()]
            .into_iter()
            .find_map(|side| {
                field
                    .team(side)
                    .find_by_name(name)
                    .map(|id| UnitRef::new(side, id))
            })
    }
}

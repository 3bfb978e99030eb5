//! Action order for the team holding the initiative.

use arrayvec::ArrayVec;

use crate::config::BOARD_SLOTS;
use crate::state::{Team, UnitId};

/// Queue of the active team's living on-board units; the head acts next.
///
/// The queue never owns placement. It only holds ids and is reconciled
/// against the [`Team`] after every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ActionOrder {
    queue: ArrayVec<UnitId, BOARD_SLOTS>,
}

impl ActionOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the order for `team` from scratch.
    pub fn for_team(team: &Team) -> Self {
        let mut order = Self::new();
        order.rebuild(team);
        order
    }

    pub fn head(&self) -> Option<UnitId> {
        self.queue.first().copied()
    }

    pub fn as_slice(&self) -> &[UnitId] {
        &self.queue
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.queue.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Living on-board units by descending speed, ties by ascending slot.
    pub fn rebuild(&mut self, team: &Team) {
        let mut ranked: ArrayVec<(u32, usize, UnitId), BOARD_SLOTS> = team
            .alive_on_board()
            .filter_map(|(slot, id)| team.unit(id).map(|unit| (unit.stats().speed, slot, id)))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        self.queue = ranked.into_iter().map(|(_, _, id)| id).collect();
    }

    /// Moves the head to the back.
    pub fn advance(&mut self) {
        if !self.queue.is_empty() {
            self.queue.rotate_left(1);
        }
    }

    /// Records a summon: `new` takes `old`'s queue position when `old` was
    /// queued, otherwise it joins at the back.
    pub fn patch_for_summon(&mut self, old: Option<UnitId>, new: UnitId) {
        if let Some(position) = old.and_then(|old| self.queue.iter().position(|id| *id == old)) {
            self.queue[position] = new;
            return;
        }
        if !self.queue.contains(&new) && self.queue.try_push(new).is_err() {
            tracing::warn!(unit = %new, "action order full, summoned unit not queued");
        }
    }

    /// Re-syncs with `team` after deaths and placement changes.
    ///
    /// A missing or fallen head triggers a full rebuild. Otherwise stale
    /// entries are dropped and unqueued living units are appended in slot
    /// order, keeping the survivors' relative order.
    pub fn reconcile(&mut self, team: &Team) {
        let head_ready = self.head().is_some_and(|head| is_ready(team, head));
        if !head_ready {
            self.rebuild(team);
            return;
        }

        self.queue.retain(|id| is_ready(team, *id));
        for (_, id) in team.alive_on_board() {
            if !self.queue.contains(&id) && self.queue.try_push(id).is_err() {
                break;
            }
        }
    }
}

fn is_ready(team: &Team, id: UnitId) -> bool {
    team.is_on_board(id) && team.unit(id).is_some_and(|unit| unit.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Stats, Unit};

    fn unit(name: &str, speed: u32) -> Unit {
        Unit::creature(name, 20, 10, Stats::new(5, 5, 5, speed, 5))
    }

    /// Leader speed 10; creatures C1..C5 with the given speeds.
    fn team(speeds: &[u32]) -> Team {
        let leader = Unit::leader("Flynn", 50, 20, Stats::new(5, 5, 5, 10, 5));
        let creatures = speeds
            .iter()
            .enumerate()
            .map(|(i, speed)| unit(&format!("C{}", i + 1), *speed))
            .collect();
        let mut team = Team::new("J1", leader, creatures).expect("valid team");
        team.deploy();
        team
    }

    #[test]
    fn rebuild_sorts_by_speed_then_slot() {
        let team = team(&[12, 10, 3]);
        let order = ActionOrder::for_team(&team);
        assert_eq!(
            order.as_slice(),
            &[UnitId(1), UnitId::LEADER, UnitId(2), UnitId(3)]
        );
    }

    #[test]
    fn rebuild_skips_fallen_leader() {
        let mut team = team(&[1]);
        team.unit_mut(UnitId::LEADER).unwrap().knock_out();
        let order = ActionOrder::for_team(&team);
        assert_eq!(order.as_slice(), &[UnitId(1)]);
    }

    #[test]
    fn advance_rotates_head_to_back() {
        let team = team(&[12, 3]);
        let mut order = ActionOrder::for_team(&team);
        order.advance();
        assert_eq!(order.as_slice(), &[UnitId::LEADER, UnitId(2), UnitId(1)]);
    }

    #[test]
    fn summon_into_occupied_slot_replaces_in_place() {
        let mut team = team(&[12, 3, 1, 40]);
        let mut order = ActionOrder::for_team(&team);

        let displaced = team.place(2, UnitId(4)).unwrap();
        order.patch_for_summon(displaced, UnitId(4));

        assert_eq!(
            order.as_slice(),
            &[UnitId(1), UnitId::LEADER, UnitId(4), UnitId(3)]
        );
    }

    #[test]
    fn summon_into_empty_slot_appends() {
        let mut team = team(&[12, 3, 1, 40]);
        team.unit_mut(UnitId(3)).unwrap().knock_out();
        team.evict_fallen();
        let mut order = ActionOrder::for_team(&team);

        let displaced = team.place(3, UnitId(4)).unwrap();
        order.patch_for_summon(displaced, UnitId(4));

        assert_eq!(
            order.as_slice(),
            &[UnitId(1), UnitId::LEADER, UnitId(2), UnitId(4)]
        );
    }

    #[test]
    fn reconcile_drops_dead_and_keeps_relative_order() {
        let mut team = team(&[12, 3, 1]);
        let mut order = ActionOrder::for_team(&team);
        team.unit_mut(UnitId(2)).unwrap().knock_out();
        team.evict_fallen();

        order.reconcile(&team);
        assert_eq!(order.as_slice(), &[UnitId(1), UnitId::LEADER, UnitId(3)]);
    }

    #[test]
    fn reconcile_rebuilds_when_head_falls() {
        let mut team = team(&[12, 3, 1]);
        let mut order = ActionOrder::for_team(&team);
        order.advance();
        order.advance();
        // Queue is now [C2, C3, C1, Leader]; kill the head.
        team.unit_mut(UnitId(2)).unwrap().knock_out();
        team.evict_fallen();

        order.reconcile(&team);
        assert_eq!(order.as_slice(), &[UnitId(1), UnitId::LEADER, UnitId(3)]);
    }
}

//! Post-action bookkeeping: eviction, win detection and initiative hand-off.

use crate::log::BattleEvent;
use crate::state::Side;

use super::{ActionOutcome, BattleEngine, BattlePhase, MatchEnd, MatchResult};

impl BattleEngine {
    /// Gives `side` a fresh budget of one full turn per living board unit and
    /// rebuilds its action order.
    pub(super) fn begin_initiative(&mut self, side: Side) {
        let Some(field) = self.field.as_ref() else {
            return;
        };
        self.phase = BattlePhase::TeamSwitch;
        self.active = side;

        let team = field.team(side);
        let full = u32::try_from(team.alive_on_board_count()).unwrap_or(u32::MAX);
        self.turns.reset(full);
        self.order.rebuild(team);
        self.phase = BattlePhase::ActiveTurn;

        tracing::info!(
            player = team.player(),
            full_turns = full,
            order = ?self.order.as_slice(),
            "initiative begins"
        );
    }

    /// Finishes an accepted action and returns the completed outcome.
    pub(super) fn conclude(&mut self, mut outcome: ActionOutcome) -> ActionOutcome {
        let consumed = outcome.turns;
        if consumed.full_consumed > 0 || consumed.blinking_consumed > 0 {
            outcome.log.push(BattleEvent::TurnsConsumed {
                full: consumed.full_consumed,
                blinking: consumed.blinking_consumed,
            });
        }
        if consumed.blinking_gained > 0 {
            outcome.log.push(BattleEvent::TurnsGained {
                blinking: consumed.blinking_gained,
            });
        }

        let Some(field) = self.field.as_mut() else {
            return outcome;
        };
        for side in [Side::First, Side::Second] {
            let evicted = field.team_mut(side).evict_fallen();
            if !evicted.is_empty() {
                tracing::debug!(%side, ?evicted, "fallen creatures moved to reserve");
            }
        }

        if let Some(result) = self.detect_defeat() {
            outcome.log.push(BattleEvent::Winner {
                player: result.player.clone(),
            });
            outcome.finished = Some(self.finish(result));
            return outcome;
        }

        if self.turns.is_exhausted() {
            let next = self.active.opponent();
            self.begin_initiative(next);
            if let Some(team) = self.active_team() {
                outcome.log.push(BattleEvent::InitiativePassed {
                    player: team.player().to_owned(),
                });
            }
        } else if let Some(field) = self.field.as_ref() {
            self.order.advance();
            self.order.reconcile(field.team(self.active));
        }

        tracing::debug!(
            budget = %self.turns.budget(),
            order = ?self.order.as_slice(),
            "action settled"
        );
        outcome
    }

    /// A team with no living unit on the board loses. If both are wiped out
    /// at once, the acting team wins.
    pub(super) fn detect_defeat(&self) -> Option<MatchResult> {
        let field = self.field.as_ref()?;
        let active_standing = field.team(self.active).has_alive_on_board();
        let opponent_standing = field.team(self.active.opponent()).has_alive_on_board();

        let winner = match (active_standing, opponent_standing) {
            (true, true) => return None,
            (_, false) => self.active,
            (false, true) => self.active.opponent(),
        };
        Some(MatchResult {
            winner,
            player: field.team(winner).player().to_owned(),
            reason: MatchEnd::Defeat,
        })
    }

    pub(super) fn finish(&mut self, result: MatchResult) -> MatchResult {
        tracing::info!(
            winner = %result.player,
            reason = %result.reason,
            "match finished"
        );
        self.phase = BattlePhase::Finished;
        self.order = Default::default();
        self.result = Some(result.clone());
        result
    }
}

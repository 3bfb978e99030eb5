//! Per-command resolution. Every check runs before the first mutation.

use crate::combat::AttackKind;
use crate::log::BattleEvent;
use crate::skill::{Skill, SkillAudience, SkillContext, land_hits};
use crate::state::{Battlefield, Side, UnitAction, UnitId, UnitRef};
use crate::turn::TurnCost;

use super::{ActionOutcome, BattleEngine, CommandError, MatchEnd, MatchResult};

impl BattleEngine {
    pub(super) fn resolve_attack(
        &mut self,
        actor: UnitId,
        target: UnitRef,
    ) -> Result<ActionOutcome, CommandError> {
        self.resolve_strike(actor, target, UnitAction::Attack, AttackKind::Melee)
    }

    pub(super) fn resolve_shoot(
        &mut self,
        actor: UnitId,
        target: UnitRef,
    ) -> Result<ActionOutcome, CommandError> {
        self.resolve_strike(actor, target, UnitAction::Shoot, AttackKind::Ranged)
    }

    fn resolve_strike(
        &mut self,
        actor: UnitId,
        target: UnitRef,
        action: UnitAction,
        kind: AttackKind,
    ) -> Result<ActionOutcome, CommandError> {
        let user = self.require_actor(actor, action)?;
        let field = self.field.as_mut().ok_or(CommandError::NotStarted)?;
        require_living_on_board(field, target, user.side.opponent())?;

        let mut ctx = SkillContext::new(field, user, target, &mut self.turns, &self.config.damage);
        let (affinity, dealt) = land_hits(&mut ctx, kind, 1);
        let turns = ctx.turns.settle(TurnCost::from_affinity(affinity));

        let mut outcome = ActionOutcome::new(Some(user));
        outcome.log = ctx.take_events();
        outcome.affinity = Some(affinity);
        outcome.damage_dealt = dealt;
        outcome.turns = turns;

        tracing::debug!(%user, %target, %affinity, dealt, ?kind, "strike resolved");
        Ok(self.conclude(outcome))
    }

    pub(super) fn resolve_skill(
        &mut self,
        actor: UnitId,
        target: UnitRef,
        skill: &Skill,
        slot: Option<usize>,
    ) -> Result<ActionOutcome, CommandError> {
        let user = self.require_actor(actor, UnitAction::UseSkill)?;
        let field = self.field.as_mut().ok_or(CommandError::NotStarted)?;

        let caster = field.unit(user);
        if !caster.knows_skill(&skill.name) {
            return Err(CommandError::SkillNotKnown {
                unit: caster.name().to_owned(),
                skill: skill.name.clone(),
            });
        }
        if caster.mp().current < skill.cost {
            return Err(CommandError::InsufficientMp {
                unit: caster.name().to_owned(),
                needed: skill.cost,
                available: caster.mp().current,
            });
        }

        let placement = match skill.audience() {
            SkillAudience::Enemy => {
                require_living_on_board(field, target, user.side.opponent())?;
                None
            }
            SkillAudience::Ally => {
                require_living_on_board(field, target, user.side)?;
                None
            }
            SkillAudience::AnyAlly => {
                require_member(field, target, user.side)?;
                None
            }
            SkillAudience::Reserve => {
                require_member(field, target, user.side)?;
                let slot = slot.ok_or(CommandError::MissingSlot)?;
                let team = field.team(user.side);
                if field.unit(target).is_creature() {
                    team.check_placement(slot, target.unit)?;
                }
                Some(slot)
            }
        };

        let mut ctx = SkillContext::new(field, user, target, &mut self.turns, &self.config.damage);
        skill.pre_validate(&ctx)?;

        let paid = ctx.user_mut().spend_mp(skill.cost);
        debug_assert!(paid, "MP shortfall must be rejected before pre-validation");
        let result = skill.apply(&mut ctx);
        let log = ctx.take_events();

        let mut outcome = ActionOutcome::new(Some(user));
        outcome.log = log;
        outcome.affinity = result.affinity;
        outcome.damage_dealt = result.damage_dealt;
        outcome.turns = result.turns;

        if let (Some(summoned), Some(slot)) = (result.summon, placement) {
            self.place_summon(summoned, slot, &mut outcome)?;
        }

        tracing::debug!(
            %user,
            %target,
            skill = %skill.name,
            affinity = ?outcome.affinity,
            dealt = outcome.damage_dealt,
            "skill resolved"
        );
        Ok(self.conclude(outcome))
    }

    pub(super) fn resolve_invoke(
        &mut self,
        summoner: UnitId,
        creature: UnitId,
        slot: Option<usize>,
    ) -> Result<ActionOutcome, CommandError> {
        let user = self.require_actor(summoner, UnitAction::Invoke)?;
        let field = self.field.as_mut().ok_or(CommandError::NotStarted)?;
        let summoned = UnitRef::new(user.side, creature);

        let unit = field
            .get(summoned)
            .ok_or(CommandError::UnknownUnit { unit: summoned })?;
        if !unit.is_creature() {
            return Err(CommandError::NotACreature {
                unit: unit.name().to_owned(),
            });
        }
        if !unit.is_alive() {
            return Err(CommandError::CreatureFallen {
                unit: unit.name().to_owned(),
            });
        }

        let team = field.team_mut(user.side);
        let displaced = if summoner.is_leader() {
            let slot = slot.ok_or(CommandError::MissingSlot)?;
            team.place(slot, creature)?
        } else {
            team.swap_out(summoner, creature)?;
            Some(summoner)
        };
        self.order.patch_for_summon(displaced, creature);

        let mut outcome = ActionOutcome::new(Some(user));
        outcome.summoned = Some(summoned);
        outcome.log.push(BattleEvent::Summoned {
            unit: field.unit(summoned).name().to_owned(),
        });
        if let Some(previous) = displaced {
            outcome.log.push(BattleEvent::Withdrawn {
                unit: field.unit(UnitRef::new(user.side, previous)).name().to_owned(),
            });
        }
        outcome.turns = self.turns.settle(TurnCost::Yield);

        tracing::debug!(%user, %summoned, ?displaced, "invocation resolved");
        Ok(self.conclude(outcome))
    }

    pub(super) fn resolve_pass(&mut self) -> Result<ActionOutcome, CommandError> {
        let field = self.field.as_ref().ok_or(CommandError::NotStarted)?;
        let actor = self.order.head().ok_or(CommandError::NoActor)?;
        let user = UnitRef::new(self.active, actor);

        let mut outcome = ActionOutcome::new(Some(user));
        outcome.log.push(BattleEvent::Passed {
            unit: field.unit(user).name().to_owned(),
        });
        outcome.turns = self.turns.settle(TurnCost::Yield);

        Ok(self.conclude(outcome))
    }

    pub(super) fn resolve_surrender(&mut self, side: Side) -> Result<ActionOutcome, CommandError> {
        let field = self.field.as_ref().ok_or(CommandError::NotStarted)?;
        let winner = side.opponent();
        let result = MatchResult {
            winner,
            player: field.team(winner).player().to_owned(),
            reason: MatchEnd::Surrender,
        };

        let mut outcome = ActionOutcome::default();
        outcome.log.push(BattleEvent::Surrendered {
            player: field.team(side).player().to_owned(),
        });
        outcome.log.push(BattleEvent::Winner {
            player: result.player.clone(),
        });
        outcome.finished = Some(self.finish(result));
        Ok(outcome)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// The acting unit must head the action order and be allowed `action`.
    fn require_actor(&self, actor: UnitId, action: UnitAction) -> Result<UnitRef, CommandError> {
        let field = self.field.as_ref().ok_or(CommandError::NotStarted)?;
        let current = self.order.head().ok_or(CommandError::NoActor)?;
        let user = UnitRef::new(self.active, actor);

        let unit = field
            .get(user)
            .ok_or(CommandError::UnknownUnit { unit: user })?;
        if actor != current {
            return Err(CommandError::ActorNotCurrent { actor, current });
        }
        if !unit.kind().can(action) {
            return Err(CommandError::ActionNotAllowed {
                unit: unit.name().to_owned(),
                action,
            });
        }
        Ok(user)
    }

    /// Moves a skill-summoned creature onto `slot` and patches the action order.
    fn place_summon(
        &mut self,
        summoned: UnitRef,
        slot: usize,
        outcome: &mut ActionOutcome,
    ) -> Result<(), CommandError> {
        let field = self.field.as_mut().ok_or(CommandError::NotStarted)?;
        let displaced = field.team_mut(summoned.side).place(slot, summoned.unit)?;
        if summoned.side == self.active {
            self.order.patch_for_summon(displaced, summoned.unit);
        }

        outcome.summoned = Some(summoned);
        if let Some(previous) = displaced {
            outcome.log.push(BattleEvent::Withdrawn {
                unit: field
                    .unit(UnitRef::new(summoned.side, previous))
                    .name()
                    .to_owned(),
            });
        }
        Ok(())
    }
}

/// `target` must be a unit of `side`.
fn require_member(field: &Battlefield, target: UnitRef, side: Side) -> Result<(), CommandError> {
    let unit = field
        .get(target)
        .ok_or(CommandError::UnknownUnit { unit: target })?;
    if target.side != side {
        return Err(CommandError::WrongSide {
            target: unit.name().to_owned(),
            expected: side,
        });
    }
    Ok(())
}

/// `target` must be a living unit on `side`'s board.
fn require_living_on_board(
    field: &Battlefield,
    target: UnitRef,
    side: Side,
) -> Result<(), CommandError> {
    require_member(field, target, side)?;
    let unit = field.unit(target);
    if !field.team(side).is_on_board(target.unit) {
        return Err(CommandError::TargetNotOnBoard {
            target: unit.name().to_owned(),
        });
    }
    if !unit.is_alive() {
        return Err(CommandError::TargetFallen {
            target: unit.name().to_owned(),
        });
    }
    Ok(())
}

use crate::log::BattleEvent;
use crate::turn::TurnCost;

use super::{Skill, SkillBehavior, SkillContext, SkillOutcome, SkillRejection};

/// Summons a reserve creature, fully healing it first if it has fallen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvitationSkill;

impl SkillBehavior for InvitationSkill {
    fn pre_validate(&self, _skill: &Skill, ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        require_creature(ctx)
    }

    fn apply(&self, _skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        ctx.emit(BattleEvent::Summoned {
            unit: ctx.target_name(),
        });

        if !ctx.target().is_alive() {
            let max = ctx.target().hp().maximum;
            ctx.target_mut().set_hp(max);
            ctx.emit(BattleEvent::Revives {
                user: ctx.user_name(),
                target: ctx.target_name(),
            });
            ctx.emit(BattleEvent::Restores {
                target: ctx.target_name(),
                amount: max,
            });
            ctx.emit_hp(ctx.target);
        }

        summon(ctx)
    }
}

/// Summons a living reserve creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SabbatmaSkill;

impl SkillBehavior for SabbatmaSkill {
    fn pre_validate(&self, _skill: &Skill, ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        require_creature(ctx)?;
        if !ctx.target().is_alive() {
            return Err(SkillRejection::FallenCreature {
                target: ctx.target_name(),
            });
        }
        Ok(())
    }

    fn apply(&self, _skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        ctx.emit(BattleEvent::Summoned {
            unit: ctx.target_name(),
        });
        summon(ctx)
    }
}

fn require_creature(ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
    if !ctx.target().is_creature() {
        return Err(SkillRejection::NotACreature {
            target: ctx.target_name(),
        });
    }
    Ok(())
}

/// Marks the target for placement; the engine owns the board.
fn summon(ctx: &mut SkillContext<'_>) -> SkillOutcome {
    ctx.record_use();
    SkillOutcome {
        summon: Some(ctx.target),
        turns: ctx.turns.settle(TurnCost::Support),
        ..SkillOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DamageParams;
    use crate::skill::SkillCategory;
    use crate::state::{Battlefield, Side, Stats, Team, Unit, UnitId, UnitRef};
    use crate::turn::TurnTracker;

    const BENCHED: UnitRef = UnitRef::new(Side::First, UnitId(4));

    fn field(benched_hp: u32) -> Battlefield {
        let leader = Unit::leader("Flynn", 50, 50, Stats::default());
        let creatures = ["Pixie", "Angel", "Jack Frost", "Cu Chulainn"]
            .into_iter()
            .map(|name| Unit::creature(name, 40, 10, Stats::default()))
            .collect();
        let mut first = Team::new("J1", leader, creatures).unwrap();
        first.deploy();
        first.unit_mut(UnitId(4)).unwrap().set_hp(benched_hp);
        let mut second = Team::new("J2", Unit::leader("Walter", 50, 50, Stats::default()), Vec::new()).unwrap();
        second.deploy();
        Battlefield::new(first, second)
    }

    fn context<'a>(
        field: &'a mut Battlefield,
        turns: &'a mut TurnTracker,
        params: &'a DamageParams,
        target: UnitRef,
    ) -> SkillContext<'a> {
        SkillContext::new(field, UnitRef::new(Side::First, UnitId::LEADER), target, turns, params)
    }

    #[test]
    fn invitation_revives_fallen_creature_and_marks_summon() {
        let mut field = field(0);
        let mut turns = TurnTracker::new(2);
        let params = DamageParams::default();
        let skill = Skill::new("Invitation", SkillCategory::Special);

        let outcome = {
            let mut ctx = context(&mut field, &mut turns, &params, BENCHED);
            assert!(skill.pre_validate(&ctx).is_ok());
            skill.apply(&mut ctx)
        };

        assert_eq!(outcome.summon, Some(BENCHED));
        assert_eq!(field.get(BENCHED).unwrap().hp().current, 40);
    }

    #[test]
    fn invitation_rejects_the_leader() {
        let mut field = field(40);
        let mut turns = TurnTracker::new(2);
        let params = DamageParams::default();
        let skill = Skill::new("Invitation", SkillCategory::Special);
        let ctx = context(&mut field, &mut turns, &params, UnitRef::new(Side::First, UnitId::LEADER));

        assert!(matches!(skill.pre_validate(&ctx), Err(SkillRejection::NotACreature { .. })));
    }

    #[test]
    fn sabbatma_refuses_fallen_creature() {
        let mut field = field(0);
        let mut turns = TurnTracker::new(2);
        let params = DamageParams::default();
        let skill = Skill::new("Sabbatma", SkillCategory::Special);
        let ctx = context(&mut field, &mut turns, &params, BENCHED);

        assert!(matches!(skill.pre_validate(&ctx), Err(SkillRejection::FallenCreature { .. })));
    }

    #[test]
    fn sabbatma_summons_without_healing() {
        let mut field = field(12);
        let mut turns = TurnTracker::new(2);
        let params = DamageParams::default();
        let skill = Skill::new("Sabbatma", SkillCategory::Special);

        let outcome = skill.apply(&mut context(&mut field, &mut turns, &params, BENCHED));

        assert_eq!(outcome.summon, Some(BENCHED));
        assert_eq!(field.get(BENCHED).unwrap().hp().current, 12);
        assert_eq!(field.team(Side::First).skill_uses(), 1);
    }
}

use crate::log::BattleEvent;
use crate::turn::TurnCost;

use super::{Skill, SkillBehavior, SkillContext, SkillOutcome};

/// Support, ailment and passive skills: no battlefield effect beyond the cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialSkill;

impl SkillBehavior for SpecialSkill {
    fn apply(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        ctx.emit(BattleEvent::UsesSkill {
            user: ctx.user_name(),
            skill: skill.name.clone(),
        });
        ctx.record_use();
        SkillOutcome {
            turns: ctx.turns.settle(TurnCost::Support),
            ..SkillOutcome::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DamageParams;
    use crate::skill::SkillCategory;
    use crate::state::{Battlefield, Side, Stats, Team, Unit, UnitId, UnitRef};
    use crate::turn::{TurnBudget, TurnTracker};

    #[test]
    fn only_spends_a_turn_and_counts_usage() {
        let leader = |name: &str| Unit::leader(name, 30, 30, Stats::default());
        let mut first = Team::new("J1", leader("Flynn"), Vec::new()).unwrap();
        let mut second = Team::new("J2", leader("Walter"), Vec::new()).unwrap();
        first.deploy();
        second.deploy();
        let mut field = Battlefield::new(first, second);
        let before = field.clone();
        let mut turns = TurnTracker::new(1);
        let params = DamageParams::default();
        let user = UnitRef::new(Side::First, UnitId::LEADER);

        let skill = Skill::new("Tarukaja", SkillCategory::Support);
        skill.apply(&mut SkillContext::new(&mut field, user, user, &mut turns, &params));

        assert_eq!(turns.budget(), TurnBudget::new(0, 0));
        assert_eq!(field.team(Side::First).skill_uses(), 1);
        assert_eq!(field.team(Side::Second), before.team(Side::Second));
        assert_eq!(field.get(user), before.get(user));
    }
}

use crate::log::BattleEvent;
use crate::turn::TurnCost;

use super::{Skill, SkillBehavior, SkillContext, SkillOutcome, SkillRejection};

/// Percentage heal on a living ally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealSkill;

impl HealSkill {
    /// # Formula
    ///
    /// ```text
    /// amount = floor(max_hp × power / 100)
    /// ```
    pub fn amount(max_hp: u32, power: u32) -> u32 {
        let amount = u64::from(max_hp) * u64::from(power) / 100;
        u32::try_from(amount).unwrap_or(u32::MAX)
    }
}

impl SkillBehavior for HealSkill {
    fn pre_validate(&self, _skill: &Skill, ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        if !ctx.target().is_alive() {
            return Err(SkillRejection::TargetFallen {
                target: ctx.target_name(),
            });
        }
        Ok(())
    }

    fn apply(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        let amount = Self::amount(ctx.target().hp().maximum, skill.power);

        ctx.emit(BattleEvent::Heals {
            user: ctx.user_name(),
            target: ctx.target_name(),
        });
        ctx.target_mut().heal(amount);
        ctx.emit(BattleEvent::Restores {
            target: ctx.target_name(),
            amount,
        });
        ctx.emit_hp(ctx.target);

        ctx.record_use();
        SkillOutcome {
            turns: ctx.turns.settle(TurnCost::Support),
            ..SkillOutcome::default()
        }
    }
}

/// How much HP a revival brings back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevivalStrength {
    /// Half of max HP, rounded down.
    Half,
    /// All of it.
    Full,
}

/// Brings a fallen ally back. Fails on a living target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevivalSkill {
    pub strength: RevivalStrength,
}

impl RevivalSkill {
    pub const fn new(strength: RevivalStrength) -> Self {
        Self { strength }
    }

    pub const fn restored_hp(&self, max_hp: u32) -> u32 {
        match self.strength {
            RevivalStrength::Full => max_hp,
            RevivalStrength::Half => max_hp / 2,
        }
    }
}

impl SkillBehavior for RevivalSkill {
    fn pre_validate(&self, _skill: &Skill, ctx: &SkillContext<'_>) -> Result<(), SkillRejection> {
        if ctx.target().is_alive() {
            return Err(SkillRejection::TargetAlive {
                target: ctx.target_name(),
            });
        }
        Ok(())
    }

    fn apply(&self, _skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        let amount = self.restored_hp(ctx.target().hp().maximum);

        ctx.target_mut().set_hp(amount);
        ctx.emit(BattleEvent::Revives {
            user: ctx.user_name(),
            target: ctx.target_name(),
        });
        ctx.emit(BattleEvent::Restores {
            target: ctx.target_name(),
            amount,
        });
        ctx.emit_hp(ctx.target);

        ctx.record_use();
        SkillOutcome {
            turns: ctx.turns.settle(TurnCost::Support),
            ..SkillOutcome::default()
        }
    }
}

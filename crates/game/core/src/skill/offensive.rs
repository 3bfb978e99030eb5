use crate::combat::{
    Affinity, AttackKind, DamageOutcome, Element, InstantKillOutcome, apply_affinity, base_damage,
    classify, resolve_instant_kill,
};
use crate::log::BattleEvent;
use crate::turn::TurnCost;

use super::{Skill, SkillBehavior, SkillContext, SkillOutcome};

/// Elemental damage skill. Light and Dark kill instantly instead of dealing damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffensiveSkill {
    pub element: Element,
}

impl OffensiveSkill {
    pub const fn new(element: Element) -> Self {
        Self { element }
    }

    fn strike(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        let hits = skill.hits.resolve(ctx.user_team().skill_uses());
        let kind = AttackKind::Skill {
            element: self.element,
            power: skill.power,
        };
        let (affinity, dealt) = land_hits(ctx, kind, hits);

        ctx.record_use();
        let turns = ctx.turns.settle(TurnCost::from_affinity(affinity));

        SkillOutcome {
            affinity: Some(affinity),
            damage_dealt: dealt,
            summon: None,
            turns,
        }
    }

    fn instant_kill(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        let (attacker, target) = (ctx.user_name(), ctx.target_name());
        let affinity = classify(ctx.target().affinities(), self.element);
        let outcome = resolve_instant_kill(
            ctx.user().stats().luck,
            skill.power,
            ctx.target().stats().luck,
            affinity,
        );

        ctx.emit(BattleEvent::Strikes {
            attacker: attacker.clone(),
            target: target.clone(),
            element: self.element,
        });
        if affinity == Affinity::Repel {
            ctx.emit(BattleEvent::RepelsLethal {
                target: target.clone(),
                attacker: attacker.clone(),
            });
        } else {
            emit_reaction(ctx, affinity, &attacker, &target);
        }

        let cost = match outcome {
            InstantKillOutcome::Killed => {
                ctx.target_mut().knock_out();
                ctx.emit(BattleEvent::Eliminated { unit: target });
                ctx.emit_hp(ctx.target);
                TurnCost::from_affinity(affinity)
            }
            InstantKillOutcome::Backfired => {
                ctx.user_mut().knock_out();
                ctx.emit(BattleEvent::Eliminated { unit: attacker });
                ctx.emit_hp(ctx.user);
                TurnCost::Backfire
            }
            InstantKillOutcome::Blocked => TurnCost::Null,
            InstantKillOutcome::Missed => {
                ctx.emit(BattleEvent::Missed { attacker });
                ctx.emit_hp(ctx.target);
                if affinity == Affinity::Drain {
                    TurnCost::Backfire
                } else {
                    TurnCost::Miss
                }
            }
        };

        ctx.record_use();
        let turns = ctx.turns.settle(cost);

        SkillOutcome {
            affinity: Some(affinity),
            damage_dealt: 0,
            summon: None,
            turns,
        }
    }
}

impl SkillBehavior for OffensiveSkill {
    fn apply(&self, skill: &Skill, ctx: &mut SkillContext<'_>) -> SkillOutcome {
        if self.element.is_instant_kill() {
            self.instant_kill(skill, ctx)
        } else {
            self.strike(skill, ctx)
        }
    }
}

/// Lands `hits` hits of `kind` from the context user on the target and logs them.
///
/// Repel sends each hit back at the user, Drain heals the target, Null
/// absorbs it. Returns the target's affinity and the damage the target took.
/// Settling turns is left to the caller.
pub(crate) fn land_hits(ctx: &mut SkillContext<'_>, kind: AttackKind, hits: u32) -> (Affinity, u32) {
    let (attacker, target) = (ctx.user_name(), ctx.target_name());
    let element = kind.element();
    let affinity = classify(ctx.target().affinities(), element);
    let base = base_damage(ctx.user().stats(), kind, ctx.params);

    let mut dealt = 0u32;
    for _ in 0..hits {
        ctx.emit(BattleEvent::Strikes {
            attacker: attacker.clone(),
            target: target.clone(),
            element,
        });
        match apply_affinity(base, affinity, ctx.params) {
            DamageOutcome::Hit { amount } => {
                emit_reaction(ctx, affinity, &attacker, &target);
                ctx.target_mut().take_damage(amount);
                ctx.emit(BattleEvent::Damaged {
                    target: target.clone(),
                    amount,
                });
                dealt = dealt.saturating_add(amount);
            }
            DamageOutcome::Blocked => emit_reaction(ctx, affinity, &attacker, &target),
            DamageOutcome::Repelled { amount } => {
                ctx.emit(BattleEvent::Repels {
                    target: target.clone(),
                    attacker: attacker.clone(),
                    amount,
                });
                ctx.user_mut().take_damage(amount);
            }
            DamageOutcome::Drained { amount } => {
                ctx.emit(BattleEvent::Absorbs {
                    target: target.clone(),
                    amount,
                });
                ctx.target_mut().heal(amount);
            }
        }
    }

    let closing = if affinity == Affinity::Repel {
        ctx.user
    } else {
        ctx.target
    };
    ctx.emit_hp(closing);

    (affinity, dealt)
}

/// Weak/Resist/Null reaction line, if the affinity has one.
fn emit_reaction(
    ctx: &mut SkillContext<'_>,
    affinity: Affinity,
    attacker: &str,
    target: &str,
) {
    let (target, attacker) = (target.to_owned(), attacker.to_owned());
    let event = match affinity {
        Affinity::Weak => BattleEvent::WeakTo { target, attacker },
        Affinity::Resist => BattleEvent::Resists { target, attacker },
        Affinity::Null => BattleEvent::Blocks { target, attacker },
        _ => return,
    };
    ctx.emit(event);
}

//! Automatic command selection for headless matches.

use pressturn_content::{SkillCatalog, usable_skills};
use pressturn_core::{Affinity, BattleEngine, Command, SkillKind};

/// Picks the next command for the current actor.
///
/// An affordable offensive skill that hits a weakness goes first. Otherwise
/// the actor attacks the first living enemy, and passes when there is none.
pub fn choose<'a>(engine: &BattleEngine, skills: &'a SkillCatalog) -> Command<'a> {
    let (Some(actor), Some(field)) = (engine.current_actor(), engine.field()) else {
        return Command::Pass;
    };
    let Some(unit) = field.get(actor) else {
        return Command::Pass;
    };
    let enemies = engine.enemy_targets();

    for skill in usable_skills(unit, skills) {
        let SkillKind::Offensive(offensive) = skill.kind else {
            continue;
        };
        let weak = enemies.iter().copied().find(|&target| {
            field
                .get(target)
                .is_some_and(|enemy| enemy.affinities().get(offensive.element) == Affinity::Weak)
        });
        if let Some(target) = weak {
            return Command::UseSkill {
                actor: actor.unit,
                target,
                skill,
                slot: None,
            };
        }
    }

    match enemies.first() {
        Some(&target) => Command::Attack {
            actor: actor.unit,
            target,
        },
        None => Command::Pass,
    }
}

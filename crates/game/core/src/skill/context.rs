//! Execution context, outcome and rejection types shared by every skill.

use crate::combat::Affinity;
use crate::config::DamageParams;
use crate::error::{ErrorSeverity, GameError};
use crate::log::BattleEvent;
use crate::state::{Battlefield, Team, Unit, UnitRef};
use crate::turn::{TurnConsumption, TurnTracker};

/// Everything a skill may read or mutate while it executes.
///
/// `user` and `target` are resolved by the engine before the context is built.
pub struct SkillContext<'a> {
    pub field: &'a mut Battlefield,
    pub user: UnitRef,
    pub target: UnitRef,
    pub turns: &'a mut TurnTracker,
    pub params: &'a DamageParams,
    events: Vec<BattleEvent>,
}

impl<'a> SkillContext<'a> {
    pub fn new(
        field: &'a mut Battlefield,
        user: UnitRef,
        target: UnitRef,
        turns: &'a mut TurnTracker,
        params: &'a DamageParams,
    ) -> Self {
        Self {
            field,
            user,
            target,
            turns,
            params,
            events: Vec::new(),
        }
    }

    pub fn user(&self) -> &Unit {
        self.field.unit(self.user)
    }

    pub fn user_mut(&mut self) -> &mut Unit {
        self.field.unit_mut(self.user)
    }

    pub fn target(&self) -> &Unit {
        self.field.unit(self.target)
    }

    pub fn target_mut(&mut self) -> &mut Unit {
        self.field.unit_mut(self.target)
    }

    pub fn user_team(&self) -> &Team {
        self.field.team(self.user.side)
    }

    pub fn user_name(&self) -> String {
        self.user().name().to_owned()
    }

    pub fn target_name(&self) -> String {
        self.target().name().to_owned()
    }

    /// Counts one skill use for the user's team.
    pub fn record_use(&mut self) {
        self.field.team_mut(self.user.side).record_skill_use();
    }

    pub fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Emits the closing HP line for `unit`.
    pub fn emit_hp(&mut self, unit: UnitRef) {
        let unit = self.field.unit(unit);
        let event = BattleEvent::HpRemaining {
            unit: unit.name().to_owned(),
            hp: unit.hp(),
        };
        self.events.push(event);
    }

    /// Hands over the accumulated log.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Structured result of a successful skill execution.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SkillOutcome {
    /// Target affinity for offensive skills.
    pub affinity: Option<Affinity>,
    /// Sum of damage inflicted on the target.
    pub damage_dealt: u32,
    /// Creature the caller must now place on the board.
    pub summon: Option<UnitRef>,
    pub turns: TurnConsumption,
}

/// A skill refused its target during pre-validation. Nothing was mutated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillRejection {
    #[error("{target} is already alive")]
    TargetAlive { target: String },

    #[error("{target} has fallen")]
    TargetFallen { target: String },

    #[error("only creatures can be summoned, {target} is not one")]
    NotACreature { target: String },

    #[error("{target} cannot be summoned while fallen")]
    FallenCreature { target: String },
}

impl GameError for SkillRejection {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetAlive { .. } => "SKILL_TARGET_ALIVE",
            Self::TargetFallen { .. } => "SKILL_TARGET_FALLEN",
            Self::NotACreature { .. } => "SKILL_NOT_A_CREATURE",
            Self::FallenCreature { .. } => "SKILL_FALLEN_CREATURE",
        }
    }
}

//! Rejections surfaced by the engine's per-action entry points.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillRejection;
use crate::state::{Side, TeamError, UnitAction, UnitId, UnitRef};

/// Why a command was refused. A rejected command never mutates the battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("battle has not been initialized")]
    NotStarted,

    #[error("match is already over")]
    MatchFinished,

    #[error("no unit is left to act")]
    NoActor,

    #[error("unit {actor} is not next in the action order (current: {current})")]
    ActorNotCurrent { actor: UnitId, current: UnitId },

    #[error("unit {unit} does not exist")]
    UnknownUnit { unit: UnitRef },

    #[error("{unit} cannot {action}")]
    ActionNotAllowed { unit: String, action: UnitAction },

    #[error("{target} belongs to the wrong side (expected {expected})")]
    WrongSide { target: String, expected: Side },

    #[error("{target} is not on the board")]
    TargetNotOnBoard { target: String },

    #[error("{target} has fallen")]
    TargetFallen { target: String },

    #[error("{unit} does not know {skill}")]
    SkillNotKnown { unit: String, skill: String },

    #[error("{unit} needs {needed} MP but has {available}")]
    InsufficientMp {
        unit: String,
        needed: u32,
        available: u32,
    },

    #[error("a board slot must be chosen")]
    MissingSlot,

    #[error("{unit} is not a creature")]
    NotACreature { unit: String },

    #[error("{unit} has fallen and cannot be invoked")]
    CreatureFallen { unit: String },

    #[error(transparent)]
    Placement(#[from] TeamError),

    #[error(transparent)]
    Skill(#[from] SkillRejection),
}

impl GameError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotStarted | Self::MatchFinished => ErrorSeverity::Validation,
            Self::NoActor => ErrorSeverity::Internal,
            Self::InsufficientMp { .. } | Self::MissingSlot => ErrorSeverity::Recoverable,
            Self::Placement(err) => err.severity(),
            Self::Skill(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotStarted => "COMMAND_NOT_STARTED",
            Self::MatchFinished => "COMMAND_MATCH_FINISHED",
            Self::NoActor => "COMMAND_NO_ACTOR",
            Self::ActorNotCurrent { .. } => "COMMAND_ACTOR_NOT_CURRENT",
            Self::UnknownUnit { .. } => "COMMAND_UNKNOWN_UNIT",
            Self::ActionNotAllowed { .. } => "COMMAND_ACTION_NOT_ALLOWED",
            Self::WrongSide { .. } => "COMMAND_WRONG_SIDE",
            Self::TargetNotOnBoard { .. } => "COMMAND_TARGET_NOT_ON_BOARD",
            Self::TargetFallen { .. } => "COMMAND_TARGET_FALLEN",
            Self::SkillNotKnown { .. } => "COMMAND_SKILL_NOT_KNOWN",
            Self::InsufficientMp { .. } => "COMMAND_INSUFFICIENT_MP",
            Self::MissingSlot => "COMMAND_MISSING_SLOT",
            Self::NotACreature { .. } => "COMMAND_NOT_A_CREATURE",
            Self::CreatureFallen { .. } => "COMMAND_CREATURE_FALLEN",
            Self::Placement(err) => err.error_code(),
            Self::Skill(err) => err.error_code(),
        }
    }
}

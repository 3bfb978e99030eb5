//! Common error infrastructure for pressturn-core.
//!
//! Domain errors (`TeamError`, `SkillRejection`, `CommandError`) live next to
//! the code that raises them and share the classification defined here.
//!
//! Nothing in the engine is fatal to the process: a rejected command leaves
//! the battle untouched and the caller may simply issue another one.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same command may succeed later or with another choice
/// - **Validation**: the command is malformed for the current state
/// - **Internal**: engine state disagrees with itself
/// - **Fatal**: inputs were unusable to begin with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: insufficient MP, reviving a unit that is still alive.
    Recoverable,

    /// Examples: unknown unit, target on the wrong side, leader slot chosen.
    Validation,

    /// Examples: action order names a unit the team does not have.
    Internal,

    /// Examples: a team built without a leader.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all pressturn-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable `SCREAMING_SNAKE` code per variant from `error_code`
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_recoverable_is_recoverable() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}

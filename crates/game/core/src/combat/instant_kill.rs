//! Light/Dark instant-kill checks.

use super::affinity::Affinity;

/// Result of an instant-kill attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstantKillOutcome {
    /// Target drops to 0 HP.
    Killed,
    /// Luck check failed, or the target drains the element.
    Missed,
    /// Null: the attempt never lands.
    Blocked,
    /// Repel: the user drops to 0 HP instead.
    Backfired,
}

impl InstantKillOutcome {
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Killed)
    }
}

/// Resolves an instant-kill attempt against a target's affinity.
///
/// # Formula
///
/// ```text
/// Weak    → always kills
/// Neutral → kills if user_luck + power ≥ target_luck
/// Resist  → kills if user_luck + power ≥ 2 × target_luck
/// Null    → blocked
/// Repel   → user is killed
/// Drain   → never kills
/// ```
pub fn resolve_instant_kill(
    user_luck: u32,
    power: u32,
    target_luck: u32,
    affinity: Affinity,
) -> InstantKillOutcome {
    let roll = u64::from(user_luck) + u64::from(power);
    let threshold = u64::from(target_luck);

    let lands = |needed: u64| {
        if roll >= needed {
            InstantKillOutcome::Killed
        } else {
            InstantKillOutcome::Missed
        }
    };

    match affinity {
        Affinity::Weak => InstantKillOutcome::Killed,
        Affinity::Neutral => lands(threshold),
        Affinity::Resist => lands(threshold * 2),
        Affinity::Null => InstantKillOutcome::Blocked,
        Affinity::Repel => InstantKillOutcome::Backfired,
        Affinity::Drain => InstantKillOutcome::Missed,
    }
}

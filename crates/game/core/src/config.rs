//! Board layout constants and tunable battle parameters.

/// Number of board slots per team, leader slot included.
pub const BOARD_SLOTS: usize = 4;

/// Board slot permanently held by the team leader.
pub const LEADER_SLOT: usize = 0;

/// Damage formula parameters.
///
/// Defaults reproduce the classic press-turn numbers; loaders may override
/// them from a config file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageParams {
    /// Stat modifier for basic melee attacks (scales strength).
    pub melee_modifier: f64,
    /// Stat modifier for ranged attacks (scales skill).
    pub ranged_modifier: f64,
    /// Global multiplier applied after the stat modifier.
    pub damage_multiplier: f64,
    /// Multiplier applied on a weakness hit.
    pub weak_multiplier: f64,
    /// Multiplier applied on a resisted hit.
    pub resist_multiplier: f64,
}

impl DamageParams {
    pub const MELEE_MODIFIER: f64 = 54.0;
    pub const RANGED_MODIFIER: f64 = 80.0;
    pub const DAMAGE_MULTIPLIER: f64 = 0.0114;
    pub const WEAK_MULTIPLIER: f64 = 1.5;
    pub const RESIST_MULTIPLIER: f64 = 0.5;

    pub const fn new() -> Self {
        Self {
            melee_modifier: Self::MELEE_MODIFIER,
            ranged_modifier: Self::RANGED_MODIFIER,
            damage_multiplier: Self::DAMAGE_MULTIPLIER,
            weak_multiplier: Self::WEAK_MULTIPLIER,
            resist_multiplier: Self::RESIST_MULTIPLIER,
        }
    }
}

impl Default for DamageParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine-wide configuration handed to [`crate::BattleEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub damage: DamageParams,
}

impl BattleConfig {
    pub const fn new() -> Self {
        Self {
            damage: DamageParams::new(),
        }
    }
}

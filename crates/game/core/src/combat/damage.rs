//! Damage calculation.

use crate::config::DamageParams;
use crate::state::Stats;

use super::affinity::{Affinity, Element};

/// Source of a damaging hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackKind {
    /// Basic weapon attack, scales with strength.
    Melee,
    /// Leader-only gun attack, scales with skill.
    Ranged,
    /// Offensive skill of the given element and power.
    Skill { element: Element, power: u32 },
}

impl AttackKind {
    /// Element checked against the target's affinity table.
    pub const fn element(self) -> Element {
        match self {
            Self::Melee => Element::Phys,
            Self::Ranged => Element::Gun,
            Self::Skill { element, .. } => element,
        }
    }
}

/// Unrounded damage before affinity.
///
/// # Formula
///
/// ```text
/// melee  = strength × melee_modifier × damage_multiplier
/// ranged = skill × ranged_modifier × damage_multiplier
/// skill  = sqrt(driving_stat × power)
/// ```
///
/// The driving stat is strength for Phys, skill for Gun, magic otherwise.
pub fn base_damage(attacker: &Stats, kind: AttackKind, params: &DamageParams) -> f64 {
    match kind {
        AttackKind::Melee => {
            f64::from(attacker.strength) * params.melee_modifier * params.damage_multiplier
        }
        AttackKind::Ranged => {
            f64::from(attacker.skill) * params.ranged_modifier * params.damage_multiplier
        }
        AttackKind::Skill { element, power } => {
            (f64::from(element.driving_stat(attacker)) * f64::from(power)).sqrt()
        }
    }
}

/// Floored base damage, the figure reported for an unmodified hit.
pub fn raw_damage(attacker: &Stats, kind: AttackKind, params: &DamageParams) -> u32 {
    to_points(base_damage(attacker, kind, params))
}

/// What a single hit does once the target's affinity is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target loses `amount` HP.
    Hit { amount: u32 },
    /// Null: nothing reaches the target.
    Blocked,
    /// Repel: the attacker takes `amount`.
    Repelled { amount: u32 },
    /// Drain: the target recovers `amount`.
    Drained { amount: u32 },
}

impl DamageOutcome {
    pub const fn amount(self) -> u32 {
        match self {
            Self::Hit { amount } | Self::Repelled { amount } | Self::Drained { amount } => amount,
            Self::Blocked => 0,
        }
    }
}

/// Applies the affinity modifier to an unrounded base.
///
/// # Formula
///
/// ```text
/// Neutral = floor(base)
/// Weak    = floor(base × weak_multiplier)
/// Resist  = floor(base × resist_multiplier)
/// Null    = 0
/// Repel   = floor(base), redirected at the attacker
/// Drain   = floor(base), restored to the target
/// ```
pub fn apply_affinity(base: f64, affinity: Affinity, params: &DamageParams) -> DamageOutcome {
    match affinity {
        Affinity::Neutral => DamageOutcome::Hit {
            amount: to_points(base),
        },
        Affinity::Weak => DamageOutcome::Hit {
            amount: to_points(base * params.weak_multiplier),
        },
        Affinity::Resist => DamageOutcome::Hit {
            amount: to_points(base * params.resist_multiplier),
        },
        Affinity::Null => DamageOutcome::Blocked,
        Affinity::Repel => DamageOutcome::Repelled {
            amount: to_points(base),
        },
        Affinity::Drain => DamageOutcome::Drained {
            amount: to_points(base),
        },
    }
}

/// Computes one hit of `kind` from `attacker` against a target with `affinity`.
pub fn resolve_hit(
    attacker: &Stats,
    kind: AttackKind,
    affinity: Affinity,
    params: &DamageParams,
) -> DamageOutcome {
    apply_affinity(base_damage(attacker, kind, params), affinity, params)
}

fn to_points(value: f64) -> u32 {
    // `as` saturates: NaN and negatives become 0, overflow becomes u32::MAX.
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DamageParams {
        DamageParams::default()
    }

    #[test]
    fn melee_with_ten_strength_deals_six() {
        let stats = Stats::new(10, 0, 0, 0, 0);
        assert_eq!(raw_damage(&stats, AttackKind::Melee, &params()), 6);
    }

    #[test]
    fn ranged_scales_skill() {
        let stats = Stats::new(0, 10, 0, 0, 0);
        // 10 × 80 × 0.0114 = 9.12
        assert_eq!(raw_damage(&stats, AttackKind::Ranged, &params()), 9);
    }

    #[test]
    fn skill_damage_is_root_of_stat_times_power() {
        let stats = Stats::new(0, 0, 16, 0, 0);
        let kind = AttackKind::Skill {
            element: Element::Fire,
            power: 25,
        };
        assert_eq!(raw_damage(&stats, kind, &params()), 20);
    }

    #[test]
    fn weak_floors_after_multiplier() {
        // floor(6.84 × 1.5) = 10, not floor(6) × 1.5 = 9
        assert_eq!(
            apply_affinity(6.84, Affinity::Weak, &params()),
            DamageOutcome::Hit { amount: 10 }
        );
        assert_eq!(
            apply_affinity(6.84, Affinity::Resist, &params()),
            DamageOutcome::Hit { amount: 3 }
        );
    }

    #[test]
    fn null_repel_and_drain_branches() {
        assert_eq!(apply_affinity(9.9, Affinity::Null, &params()), DamageOutcome::Blocked);
        assert_eq!(
            apply_affinity(9.9, Affinity::Repel, &params()),
            DamageOutcome::Repelled { amount: 9 }
        );
        assert_eq!(
            apply_affinity(9.9, Affinity::Drain, &params()),
            DamageOutcome::Drained { amount: 9 }
        );
    }

    #[test]
    fn basic_attacks_check_phys_and_gun() {
        assert_eq!(AttackKind::Melee.element(), Element::Phys);
        assert_eq!(AttackKind::Ranged.element(), Element::Gun);
    }
}

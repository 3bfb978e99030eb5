//! Affinity and damage calculator.
//!
//! Pure functions with no internal state: affinity classification, damage
//! formulas and instant-kill checks. Callers apply the results to units.

mod affinity;
mod damage;
mod instant_kill;

pub use affinity::{Affinity, AffinityTable, Element, classify};
pub use damage::{
    AttackKind, DamageOutcome, apply_affinity, base_damage, raw_damage, resolve_hit,
};
pub use instant_kill::{InstantKillOutcome, resolve_instant_kill};

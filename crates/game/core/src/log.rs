//! Structured combat log.
//!
//! Each [`BattleEvent`] renders as one human-readable line. Rendering is left
//! to the caller; the engine only guarantees order and content.

use std::fmt;

use crate::combat::Element;
use crate::state::ResourceMeter;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An attack or offensive skill is launched.
    Strikes {
        attacker: String,
        target: String,
        element: Element,
    },
    WeakTo { target: String, attacker: String },
    Resists { target: String, attacker: String },
    Blocks { target: String, attacker: String },
    /// A repelled hit of `amount` lands on the attacker.
    Repels {
        target: String,
        attacker: String,
        amount: u32,
    },
    /// A repelled instant kill.
    RepelsLethal { target: String, attacker: String },
    Absorbs { target: String, amount: u32 },
    Damaged { target: String, amount: u32 },
    Eliminated { unit: String },
    Missed { attacker: String },
    HpRemaining { unit: String, hp: ResourceMeter },
    Heals { user: String, target: String },
    Revives { user: String, target: String },
    Restores { target: String, amount: u32 },
    UsesSkill { user: String, skill: String },
    Summoned { unit: String },
    Withdrawn { unit: String },
    Passed { unit: String },
    Surrendered { player: String },
    TurnsConsumed { full: u32, blinking: u32 },
    TurnsGained { blinking: u32 },
    InitiativePassed { player: String },
    Winner { player: String },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strikes {
                attacker,
                target,
                element,
            } => write!(f, "{attacker} {} {target}", element.attack_verb()),
            Self::WeakTo { target, attacker } => {
                write!(f, "{target} is weak to {attacker}'s attack")
            }
            Self::Resists { target, attacker } => {
                write!(f, "{target} resists {attacker}'s attack")
            }
            Self::Blocks { target, attacker } => {
                write!(f, "{target} blocks {attacker}'s attack")
            }
            Self::Repels {
                target,
                attacker,
                amount,
            } => write!(f, "{target} repels {amount} damage to {attacker}"),
            Self::RepelsLethal { target, attacker } => {
                write!(f, "{target} repels the attack back at {attacker}")
            }
            Self::Absorbs { target, amount } => write!(f, "{target} absorbs {amount} damage"),
            Self::Damaged { target, amount } => write!(f, "{target} takes {amount} damage"),
            Self::Eliminated { unit } => write!(f, "{unit} has been eliminated"),
            Self::Missed { attacker } => write!(f, "{attacker} missed the attack"),
            Self::HpRemaining { unit, hp } => write!(f, "{unit} ends with HP:{hp}"),
            Self::Heals { user, target } => write!(f, "{user} heals {target}"),
            Self::Revives { user, target } => write!(f, "{user} revives {target}"),
            Self::Restores { target, amount } => write!(f, "{target} recovers {amount} HP"),
            Self::UsesSkill { user, skill } => write!(f, "{user} uses {skill}"),
            Self::Summoned { unit } => write!(f, "{unit} has been summoned"),
            Self::Withdrawn { unit } => write!(f, "{unit} returns to the reserve"),
            Self::Passed { unit } => write!(f, "{unit} passes the turn"),
            Self::Surrendered { player } => write!(f, "{player} surrenders"),
            Self::TurnsConsumed { full, blinking } => write!(
                f,
                "Consumed {full} Full Turn(s) and {blinking} Blinking Turn(s)"
            ),
            Self::TurnsGained { blinking } => write!(f, "Gained {blinking} Blinking Turn(s)"),
            Self::InitiativePassed { player } => write!(f, "Initiative passes to {player}"),
            Self::Winner { player } => write!(f, "Winner: {player}"),
        }
    }
}

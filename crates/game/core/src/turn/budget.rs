//! Full/blinking turn budget and its settlement rules.

use std::fmt;

use crate::combat::Affinity;

/// Turn currencies held by the team with the initiative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnBudget {
    pub full: u32,
    pub blinking: u32,
}

impl TurnBudget {
    pub const fn new(full: u32, blinking: u32) -> Self {
        Self { full, blinking }
    }

    pub const fn total(&self) -> u32 {
        self.full + self.blinking
    }

    pub const fn is_exhausted(&self) -> bool {
        self.full == 0 && self.blinking == 0
    }
}

impl fmt::Display for TurnBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "full {} / blinking {}", self.full, self.blinking)
    }
}

/// Cost rule applied when an action settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TurnCost {
    /// Neutral or resisted hit.
    Standard,
    /// Weakness exploited: a full turn becomes a blinking turn.
    Weak,
    /// Blocked hit: up to two turns.
    Null,
    /// Repel or Drain: the whole budget.
    Backfire,
    /// Failed instant kill.
    Miss,
    /// Heal, revival, summon-by-skill or any other non-offensive skill.
    Support,
    /// Invoke or pass: a full turn is refunded as a blinking turn.
    Yield,
}

impl TurnCost {
    pub const fn from_affinity(affinity: Affinity) -> Self {
        match affinity {
            Affinity::Neutral | Affinity::Resist => Self::Standard,
            Affinity::Weak => Self::Weak,
            Affinity::Null => Self::Null,
            Affinity::Repel | Affinity::Drain => Self::Backfire,
        }
    }
}

/// What a settlement took from and gave to the budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnConsumption {
    pub full_consumed: u32,
    pub blinking_consumed: u32,
    pub blinking_gained: u32,
}

impl TurnConsumption {
    pub const fn new(full_consumed: u32, blinking_consumed: u32, blinking_gained: u32) -> Self {
        Self {
            full_consumed,
            blinking_consumed,
            blinking_gained,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.full_consumed == 0 && self.blinking_consumed == 0 && self.blinking_gained == 0
    }
}

/// Owns the active team's [`TurnBudget`].
///
/// Every turn-consuming operation goes through [`TurnTracker::settle`]; no
/// other component writes the budget.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TurnTracker {
    budget: TurnBudget,
}

impl TurnTracker {
    pub const fn new(full: u32) -> Self {
        Self {
            budget: TurnBudget::new(full, 0),
        }
    }

    /// Starts a fresh initiative with `full` turns and no blinking turns.
    pub fn reset(&mut self, full: u32) {
        self.budget = TurnBudget::new(full, 0);
    }

    pub const fn budget(&self) -> TurnBudget {
        self.budget
    }

    pub const fn is_exhausted(&self) -> bool {
        self.budget.is_exhausted()
    }

    /// Applies `cost` and reports what changed.
    pub fn settle(&mut self, cost: TurnCost) -> TurnConsumption {
        let consumption = match cost {
            TurnCost::Backfire => self.consume_all(),
            TurnCost::Null => self.consume_blocked(),
            TurnCost::Weak => self.consume_weak(),
            TurnCost::Standard | TurnCost::Miss | TurnCost::Support => self.consume_one(false),
            TurnCost::Yield => self.consume_one(true),
        };

        tracing::debug!(
            cost = %cost,
            full = consumption.full_consumed,
            blinking = consumption.blinking_consumed,
            gained = consumption.blinking_gained,
            remaining = %self.budget,
            "settled turn cost"
        );

        consumption
    }

    fn consume_all(&mut self) -> TurnConsumption {
        let consumed = TurnConsumption::new(self.budget.full, self.budget.blinking, 0);
        self.budget = TurnBudget::default();
        consumed
    }

    fn consume_blocked(&mut self) -> TurnConsumption {
        let budget = &mut self.budget;
        match budget.blinking {
            2.. => {
                budget.blinking -= 2;
                TurnConsumption::new(0, 2, 0)
            }
            1 => {
                budget.blinking = 0;
                if budget.full > 0 {
                    budget.full -= 1;
                    TurnConsumption::new(1, 1, 0)
                } else {
                    TurnConsumption::new(0, 1, 0)
                }
            }
            0 => {
                let spent = budget.full.min(2);
                budget.full -= spent;
                TurnConsumption::new(spent, 0, 0)
            }
        }
    }

    fn consume_weak(&mut self) -> TurnConsumption {
        let budget = &mut self.budget;
        if budget.full > 0 {
            budget.full -= 1;
            budget.blinking += 1;
            TurnConsumption::new(1, 0, 1)
        } else if budget.blinking > 0 {
            budget.blinking -= 1;
            TurnConsumption::new(0, 1, 0)
        } else {
            TurnConsumption::default()
        }
    }

    /// Spends one blinking turn if any, otherwise one full turn. With
    /// `refund`, spending a full turn hands back a blinking turn.
    fn consume_one(&mut self, refund: bool) -> TurnConsumption {
        let budget = &mut self.budget;
        if budget.blinking > 0 {
            budget.blinking -= 1;
            TurnConsumption::new(0, 1, 0)
        } else if budget.full > 0 {
            budget.full -= 1;
            if refund {
                budget.blinking += 1;
                TurnConsumption::new(1, 0, 1)
            } else {
                TurnConsumption::new(1, 0, 0)
            }
        } else {
            TurnConsumption::default()
        }
    }
}

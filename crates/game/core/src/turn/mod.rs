//! Turn economy and action order.
//!
//! [`TurnTracker`] settles the two-currency budget of the team holding the
//! initiative; [`ActionOrder`] decides which of its units acts next.

mod budget;
mod order;

pub use budget::{TurnBudget, TurnConsumption, TurnCost, TurnTracker};
pub use order::ActionOrder;

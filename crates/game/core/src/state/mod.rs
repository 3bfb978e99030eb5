//! Battle state: units, teams and the two-sided battlefield.
//!
//! [`Team`] owns its units and is authoritative for board and reserve
//! placement. Everything else (action order, skill targets) refers to units
//! through [`UnitId`] / [`UnitRef`] handles and is reconciled against the team.

mod field;
mod team;
mod unit;

pub use field::{Battlefield, Side, UnitRef};
pub use team::{Team, TeamError};
pub use unit::{ResourceMeter, Stats, Unit, UnitAction, UnitId, UnitKind};

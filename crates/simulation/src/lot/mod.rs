//! The lot registry.
//!
//! A lot is a fixed grid of floors and rows; every (floor, row) cell holds
//! at most `spots_per_row` vehicles, keyed by plate. [`ParkingLot`] owns
//! every parked vehicle and answers park, leave, duration, cost and
//! availability queries.
//!
//! ## Hardening over a plain nested map
//! - Out-of-range floors and rows are rejected instead of silently creating
//!   empty cells.
//! - A plate can be parked in at most one spot at a time.
//! - A plate index answers leave and duration lookups without scanning
//!   every floor and row.

pub mod address;
pub mod error;
pub mod registry;

#[cfg(test)]
mod tests_properties;
#[cfg(test)]
mod tests_registry;

pub use address::*;
pub use error::*;
pub use registry::*;

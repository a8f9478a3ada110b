//! Vehicles and hourly pricing.
//!
//! Every vehicle is one of three kinds (bike, car, truck). The kind is the
//! only thing that distinguishes them: it picks the per-hour rate from a
//! [`PricingTable`] and the label used in status messages.
//!
//! ## Reference rates
//! - Bike: 1 per hour
//! - Car: 2 per hour
//! - Truck: 5 per hour

pub mod pricing;
pub mod types;

#[cfg(test)]
mod tests_pricing;

pub use pricing::*;
pub use types::*;

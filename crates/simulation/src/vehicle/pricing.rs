//! Per-hour rates and the flat linear cost formula.

use serde::{Deserialize, Serialize};

use super::types::VehicleType;

// =============================================================================
// Constants
// =============================================================================

pub const BIKE_RATE_PER_HOUR: f64 = 1.0;
pub const CAR_RATE_PER_HOUR: f64 = 2.0;
pub const TRUCK_RATE_PER_HOUR: f64 = 5.0;

/// Reference rate for a vehicle kind, ignoring any configured overrides.
pub fn default_rate(kind: VehicleType) -> f64 {
    match kind {
        VehicleType::Bike => BIKE_RATE_PER_HOUR,
        VehicleType::Car => CAR_RATE_PER_HOUR,
        VehicleType::Truck => TRUCK_RATE_PER_HOUR,
    }
}

// =============================================================================
// PricingTable
// =============================================================================

/// Rate per hour for each vehicle kind.
///
/// Cost is `hours * rate` with no rounding, no minimum charge and no
/// currency type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub bike: f64,
    pub car: f64,
    pub truck: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            bike: BIKE_RATE_PER_HOUR,
            car: CAR_RATE_PER_HOUR,
            truck: TRUCK_RATE_PER_HOUR,
        }
    }
}

impl PricingTable {
    pub fn rate(&self, kind: VehicleType) -> f64 {
        match kind {
            VehicleType::Bike => self.bike,
            VehicleType::Car => self.car,
            VehicleType::Truck => self.truck,
        }
    }

    pub fn cost(&self, kind: VehicleType, hours: f64) -> f64 {
        hours * self.rate(kind)
    }

    /// Every (kind, rate) pair, in `VehicleType::ALL` order.
    pub fn rates(&self) -> [(VehicleType, f64); 3] {
        VehicleType::ALL.map(|kind| (kind, self.rate(kind)))
    }
}

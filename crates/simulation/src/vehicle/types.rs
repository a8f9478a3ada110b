//! Vehicle kinds, plates, and the vehicle record stored in the lot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::SimTime;

use super::pricing::PricingTable;

// =============================================================================
// VehicleType
// =============================================================================

/// The closed set of vehicle kinds the lot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Bike,
    Car,
    Truck,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Car, VehicleType::Truck];

    /// Two-letter plate prefix used by generated traffic (`BB`, `CC`, `TR`).
    pub fn plate_prefix(self) -> &'static str {
        match self {
            VehicleType::Bike => "BB",
            VehicleType::Car => "CC",
            VehicleType::Truck => "TR",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleType::Bike => "Bike",
            VehicleType::Car => "Car",
            VehicleType::Truck => "Truck",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Plate
// =============================================================================

/// Number plate; the identity key of a vehicle across the whole lot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Plate {
    fn from(plate: &str) -> Self {
        Self(plate.to_string())
    }
}

impl From<String> for Plate {
    fn from(plate: String) -> Self {
        Self(plate)
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle as known to the lot.
///
/// The arrival time starts unset and must be stamped with
/// [`Vehicle::set_parked_time`] before the vehicle can be parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    plate: Plate,
    kind: VehicleType,
    #[serde(default)]
    arrival: Option<SimTime>,
}

impl Vehicle {
    pub fn new(plate: impl Into<Plate>, kind: VehicleType) -> Self {
        Self {
            plate: plate.into(),
            kind,
            arrival: None,
        }
    }

    pub fn bike(plate: impl Into<Plate>) -> Self {
        Self::new(plate, VehicleType::Bike)
    }

    pub fn car(plate: impl Into<Plate>) -> Self {
        Self::new(plate, VehicleType::Car)
    }

    pub fn truck(plate: impl Into<Plate>) -> Self {
        Self::new(plate, VehicleType::Truck)
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn kind(&self) -> VehicleType {
        self.kind
    }

    pub fn arrival(&self) -> Option<SimTime> {
        self.arrival
    }

    /// Stamp the arrival time. Calling it again overwrites the previous stamp.
    pub fn set_parked_time(&mut self, now: SimTime) {
        self.arrival = Some(now);
    }

    /// Builder form of [`Vehicle::set_parked_time`].
    pub fn parked_at(mut self, now: SimTime) -> Self {
        self.set_parked_time(now);
        self
    }

    /// Cost of staying `hours` at this vehicle's rate.
    pub fn calculate_cost(&self, hours: f64, pricing: &PricingTable) -> f64 {
        pricing.cost(self.kind, hours)
    }
}

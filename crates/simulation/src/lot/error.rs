// ---------------------------------------------------------------------------
// ParkingError: why a registry operation was refused
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vehicle::Plate;

use super::address::SpotAddress;

/// Errors returned by [`ParkingLot`](super::ParkingLot) operations.
///
/// A refused operation never mutates the lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkingError {
    /// The (floor, row) cell does not exist in this lot.
    OutOfBounds { floor: u32, row: u32 },
    /// The floor does not exist in this lot.
    FloorOutOfBounds { floor: u32 },
    /// Every spot in the cell is taken.
    RowFull { floor: u32, row: u32, capacity: u32 },
    /// No vehicle with this plate is parked anywhere in the lot.
    NotFound { plate: Plate },
    /// The plate is already parked at `address`.
    AlreadyParked { plate: Plate, address: SpotAddress },
    /// The vehicle was handed over without an arrival stamp.
    ArrivalNotSet { plate: Plate },
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingError::OutOfBounds { floor, row } => {
                write!(f, "No such spot: floor {floor}, row {row}")
            }
            ParkingError::FloorOutOfBounds { floor } => write!(f, "No such floor: {floor}"),
            ParkingError::RowFull {
                floor,
                row,
                capacity,
            } => write!(
                f,
                "Floor {floor}, row {row} is already full ({capacity} spots)"
            ),
            ParkingError::NotFound { plate } => write!(f, "Vehicle {plate} not found"),
            ParkingError::AlreadyParked { plate, address } => {
                write!(f, "Vehicle {plate} is already parked at {address}")
            }
            ParkingError::ArrivalNotSet { plate } => {
                write!(f, "Vehicle {plate} has no arrival time")
            }
        }
    }
}

impl std::error::Error for ParkingError {}

use serde::{Deserialize, Serialize};

use crate::vehicle::{Plate, Vehicle};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ParkingCommand {
    /// Stamp the vehicle's arrival with the current clock and park it.
    Park {
        vehicle: Vehicle,
        floor: u32,
        row: u32,
    },
    /// Release whichever parked vehicle carries this vehicle's plate.
    Leave {
        vehicle: Vehicle,
    },
    ReportAvailable {
        floor: u32,
    },
    Clear,
    SetPaused {
        paused: bool,
    },
}

impl ParkingCommand {
    /// Plate the command acts on, for Park and Leave.
    pub fn plate(&self) -> Option<&Plate> {
        match self {
            ParkingCommand::Park { vehicle, .. } | ParkingCommand::Leave { vehicle } => {
                Some(vehicle.plate())
            }
            ParkingCommand::ReportAvailable { .. }
            | ParkingCommand::Clear
            | ParkingCommand::SetPaused { .. } => None,
        }
    }
}

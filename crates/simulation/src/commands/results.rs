use serde::{Deserialize, Serialize};

use crate::lot::{LeaveReceipt, ParkReceipt, ParkingError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CommandResult {
    Parked(ParkReceipt),
    Left(LeaveReceipt),
    Available { floor: u32, spots: u32 },
    Cleared { removed: usize },
    ClockPaused { paused: bool },
    Error(ParkingError),
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, CommandResult::Error(_))
    }

    pub fn error(&self) -> Option<&ParkingError> {
        match self {
            CommandResult::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Bill of a successful leave.
    pub fn cost(&self) -> Option<f64> {
        match self {
            CommandResult::Left(receipt) => Some(receipt.cost),
            _ => None,
        }
    }
}

impl From<Result<ParkReceipt, ParkingError>> for CommandResult {
    fn from(result: Result<ParkReceipt, ParkingError>) -> Self {
        result.map_or_else(CommandResult::Error, CommandResult::Parked)
    }
}

impl From<Result<LeaveReceipt, ParkingError>> for CommandResult {
    fn from(result: Result<LeaveReceipt, ParkingError>) -> Self {
        result.map_or_else(CommandResult::Error, CommandResult::Left)
    }
}

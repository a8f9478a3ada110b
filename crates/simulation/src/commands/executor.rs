//! Command executor system. Drains due entries from the [`CommandQueue`]
//! each fixed-update tick and applies them to the [`ParkingLot`], recording
//! results in the [`CommandResultLog`] and [`LotStats`].

use bevy::prelude::*;

use crate::clock::ParkingClock;
use crate::lot::ParkingLot;
use crate::stats::LotStats;

use super::result_log::CommandResultLog;
use super::{CommandQueue, CommandResult, ParkingCommand};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains every command that is due and executes them in order.
pub fn execute_queued_commands(
    mut queue: ResMut<CommandQueue>,
    mut log: ResMut<CommandResultLog>,
    mut lot: ResMut<ParkingLot>,
    mut clock: ResMut<ParkingClock>,
    mut stats: ResMut<LotStats>,
) {
    let due = queue.drain_due(clock.now());
    for queued in due {
        let result = execute_single(&queued.command, &mut lot, &mut clock);
        stats.record(&result);
        log.push(clock.now(), queued.command, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Apply one command. Park stamps the arrival with the current clock first.
pub fn execute_single(
    command: &ParkingCommand,
    lot: &mut ParkingLot,
    clock: &mut ParkingClock,
) -> CommandResult {
    match command {
        ParkingCommand::Park {
            vehicle,
            floor,
            row,
        } => {
            let vehicle = vehicle.clone().parked_at(clock.now());
            lot.park(vehicle, *floor, *row).into()
        }
        ParkingCommand::Leave { vehicle } => lot.leave(vehicle, clock.now()).into(),
        ParkingCommand::ReportAvailable { floor } => match lot.available_spots(*floor) {
            Ok(spots) => {
                info!("Available spots on floor {}: {}", floor, spots);
                CommandResult::Available {
                    floor: *floor,
                    spots,
                }
            }
            Err(e) => CommandResult::Error(e),
        },
        ParkingCommand::Clear => {
            let removed = lot.clear();
            info!("Lot cleared, {} vehicles removed", removed);
            CommandResult::Cleared { removed }
        }
        ParkingCommand::SetPaused { paused } => {
            clock.paused = *paused;
            CommandResult::ClockPaused { paused: *paused }
        }
    }
}

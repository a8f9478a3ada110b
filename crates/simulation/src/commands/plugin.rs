//! Plugin that wires up the command subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_commands;
use super::result_log::CommandResultLog;
use super::CommandQueue;
use crate::SimulationSet;

/// Registers the command queue, result log, and executor system.
pub struct ParkingCommandsPlugin;

impl Plugin for ParkingCommandsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandQueue>();
        app.init_resource::<CommandResultLog>();

        app.add_systems(
            FixedUpdate,
            execute_queued_commands.in_set(SimulationSet::Simulation),
        );
    }
}

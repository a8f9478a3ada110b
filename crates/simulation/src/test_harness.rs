//! # TestLot: headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.
//!
//! Time advances manually: every `tick()` moves real time forward by exactly
//! one fixed timestep, so each tick runs `FixedUpdate` exactly once and the
//! parking clock advances by exactly one simulated minute.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::clock::{ParkingClock, SimTime};
use crate::commands::{
    CommandQueue, CommandResult, CommandResultLog, CommandSource, ParkingCommand,
};
use crate::config::{LotConfig, FIXED_TIMESTEP_MS};
use crate::invariant_checks::LotInvariantViolations;
use crate::lot::ParkingLot;
use crate::stats::LotStats;
use crate::traffic::{TrafficRng, TrafficSettings};
use crate::vehicle::{Plate, Vehicle};
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up the lot, then queue commands and call
/// `tick()` to advance the simulation and assert on the resulting state.
pub struct TestLot {
    app: App,
}

impl Default for TestLot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLot {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// The reference lot: 3 floors, 10 rows, 20 spots per row.
    pub fn new() -> Self {
        Self::with_config(LotConfig::default())
    }

    pub fn with_config(config: LotConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            FIXED_TIMESTEP_MS,
        )));

        // Insert the config BEFORE SimulationPlugin so the lot is built from it.
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute. No fixed tick runs yet.
        app.update();

        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Park a vehicle directly, stamped with the current clock.
    pub fn with_parked(mut self, vehicle: Vehicle, floor: u32, row: u32) -> Self {
        let now = self.now();
        {
            let mut lot = self.app.world_mut().resource_mut::<ParkingLot>();
            if let Err(e) = lot.park(vehicle.parked_at(now), floor, row) {
                panic!("TestLot::with_parked failed: {e}");
            }
        }
        self
    }

    /// Enable random traffic with a fixed seed.
    pub fn with_traffic(mut self, seed: u64, settings: TrafficSettings) -> Self {
        let world = self.app.world_mut();
        world.insert_resource(TrafficSettings {
            enabled: true,
            ..settings
        });
        world.insert_resource(TrafficRng::from_seed_u64(seed));
        self
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Queue a command to run on the next tick.
    pub fn queue(&mut self, command: ParkingCommand) {
        let now = self.now();
        self.queue_at(now, command);
    }

    /// Queue a command to run once the clock reaches `at`.
    pub fn queue_at(&mut self, at: SimTime, command: ParkingCommand) {
        self.app
            .world_mut()
            .resource_mut::<CommandQueue>()
            .push(at, CommandSource::Operator, command);
    }

    /// Queue a command, tick once, and return its result.
    pub fn run(&mut self, command: ParkingCommand) -> CommandResult {
        self.queue(command.clone());
        self.tick(1);
        self.log()
            .latest_for(&command)
            .map(|entry| entry.result.clone())
            .unwrap_or_else(|| panic!("command {command:?} did not execute"))
    }

    pub fn park(&mut self, vehicle: Vehicle, floor: u32, row: u32) -> CommandResult {
        self.run(ParkingCommand::Park {
            vehicle,
            floor,
            row,
        })
    }

    pub fn leave(&mut self, vehicle: Vehicle) -> CommandResult {
        self.run(ParkingCommand::Leave { vehicle })
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance by `n` fixed ticks (one simulated minute each).
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Advance by whole simulated hours.
    pub fn tick_hours(&mut self, hours: u32) {
        self.tick(hours * 60);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn lot(&self) -> &ParkingLot {
        self.resource::<ParkingLot>()
    }

    pub fn clock(&self) -> &ParkingClock {
        self.resource::<ParkingClock>()
    }

    pub fn now(&self) -> SimTime {
        self.clock().now()
    }

    pub fn stats(&self) -> &LotStats {
        self.resource::<LotStats>()
    }

    pub fn log(&self) -> &CommandResultLog {
        self.resource::<CommandResultLog>()
    }

    /// Park and Leave results logged for `plate`, oldest first.
    pub fn results_for(&self, plate: &str) -> Vec<CommandResult> {
        let plate = Plate::new(plate);
        self.log().results_for(&plate).cloned().collect()
    }

    pub fn violations(&self) -> &LotInvariantViolations {
        self.resource::<LotInvariantViolations>()
    }

    /// Free spots on `floor`, panicking on an out-of-range floor.
    pub fn available(&self, floor: u32) -> u32 {
        match self.lot().available_spots(floor) {
            Ok(spots) => spots,
            Err(e) => panic!("available({floor}): {e}"),
        }
    }
}

use bevy::prelude::*;

pub mod clock;
pub mod commands;
pub mod config;
pub mod invariant_checks;
pub mod lot;
pub mod simulation_sets;
pub mod stats;
pub mod traffic;
pub mod vehicle;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn tick_counter(mut counter: ResMut<TickCounter>) {
    counter.0 += 1;
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(simulation_sets::SimulationSetsPlugin);

        app.init_resource::<TickCounter>()
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        app.add_plugins((
            lot::LotPlugin,
            clock::ClockPlugin,
            commands::ParkingCommandsPlugin,
            traffic::TrafficPlugin,
            stats::StatsPlugin,
            invariant_checks::InvariantChecksPlugin,
        ));
    }
}

//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! Every system in `FixedUpdate` belongs to one of these sets, so the order
//! in which a tick advances the clock, applies commands and reports on the
//! lot is explicit rather than left to the scheduler.
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Advance the parking clock, generate random traffic.
//! * **Simulation** – Execute due parking commands against the lot.
//! * **PostSim** – Statistics and invariant checks. These only *read* the lot.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}

pub struct SimulationSetsPlugin;

impl Plugin for SimulationSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );
    }
}

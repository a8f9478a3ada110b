use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use simulation::config::{LotConfig, FIXED_TIMESTEP_MS};
use simulation::traffic::{TrafficRng, TrafficSettings};

mod demo;

fn main() {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Every frame is one fixed tick, so the demo runs as fast as the CPU allows.
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            FIXED_TIMESTEP_MS,
        )));

    // Config must be in place before SimulationPlugin builds the lot.
    if let Ok(path) = std::env::var("PARKINGLOT_CONFIG") {
        match LotConfig::load(&path) {
            Ok(config) => {
                info!("Loaded lot config from {}", path);
                app.insert_resource(config);
            }
            Err(e) => warn!("Failed to load lot config from {}: {}, using defaults", path, e),
        }
    }

    if let Ok(raw) = std::env::var("PARKINGLOT_TRAFFIC_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => {
                info!("Random traffic enabled with seed {}", seed);
                app.insert_resource(TrafficSettings {
                    enabled: true,
                    ..default()
                })
                .insert_resource(TrafficRng::from_seed_u64(seed));
            }
            Err(e) => warn!("Ignoring PARKINGLOT_TRAFFIC_SEED={:?}: {}", raw, e),
        }
    }

    app.add_plugins((simulation::SimulationPlugin, demo::DemoPlugin));

    app.run();
}

//! Simulated time.
//!
//! Billing never reads the wall clock. Every fixed tick advances the
//! [`ParkingClock`] by [`MINUTES_PER_TICK`] simulated minutes, and arrival
//! stamps and parking durations are measured against it.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{FIXED_TIMESTEP_MS, MINUTES_PER_TICK};
use crate::SimulationSet;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

// =============================================================================
// SimTime
// =============================================================================

/// A point in simulated time, in whole minutes since the simulation started.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub const fn from_minutes(minutes: u64) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u64) -> Self {
        Self(hours * MINUTES_PER_HOUR)
    }

    pub const fn minutes(self) -> u64 {
        self.0
    }

    pub const fn plus_minutes(self, minutes: u64) -> Self {
        Self(self.0 + minutes)
    }

    /// Fractional hours from `earlier` to `self`; zero if `earlier` is later.
    pub fn hours_since(self, earlier: SimTime) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / MINUTES_PER_HOUR as f64
    }
}

// =============================================================================
// Resource: ParkingClock
// =============================================================================

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkingClock {
    pub minutes: u64,
    pub paused: bool,
}

impl ParkingClock {
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.minutes += MINUTES_PER_TICK;
    }

    pub fn now(&self) -> SimTime {
        SimTime(self.minutes)
    }

    pub fn day(&self) -> u64 {
        self.minutes / MINUTES_PER_DAY + 1
    }

    pub fn formatted(&self) -> String {
        let minute_of_day = self.minutes % MINUTES_PER_DAY;
        format!(
            "Day {} {:02}:{:02}",
            self.day(),
            minute_of_day / MINUTES_PER_HOUR,
            minute_of_day % MINUTES_PER_HOUR
        )
    }
}

pub fn tick_parking_clock(mut clock: ResMut<ParkingClock>) {
    clock.tick();
}

pub fn configure_fixed_timestep(mut time: ResMut<Time<Fixed>>) {
    time.set_timestep(Duration::from_millis(FIXED_TIMESTEP_MS));
}

// =============================================================================
// Plugin
// =============================================================================

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParkingClock>()
            .add_systems(Startup, configure_fixed_timestep)
            .add_systems(
                FixedUpdate,
                tick_parking_clock.in_set(SimulationSet::PreSim),
            );
    }
}

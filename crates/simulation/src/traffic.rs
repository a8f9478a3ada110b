//! Seeded random traffic.
//!
//! When enabled, each tick may queue one arrival (a random vehicle at a
//! random cell) and one departure (a random parked plate). All randomness
//! comes from [`TrafficRng`], so identical seeds produce identical command
//! streams. Plates in [`ReservedPlates`] are never parked or removed by
//! traffic, so scripted vehicles can share the lot with it.

use std::collections::BTreeSet;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::clock::{ParkingClock, SimTime};
use crate::commands::{CommandQueue, CommandSource, ParkingCommand, QueuedCommand};
use crate::lot::{LotLayout, ParkingLot};
use crate::vehicle::{Plate, Vehicle, VehicleType};
use crate::SimulationSet;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

// =============================================================================
// Resources
// =============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSettings {
    pub enabled: bool,
    /// Probability per tick that a new vehicle asks to park.
    pub arrival_chance: f64,
    /// Probability per tick that a parked vehicle leaves.
    pub departure_chance: f64,
}

impl Default for TrafficSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            arrival_chance: 0.3,
            departure_chance: 0.2,
        }
    }
}

/// Deterministic RNG for generated traffic.
#[derive(Resource)]
pub struct TrafficRng(pub ChaCha8Rng);

impl Default for TrafficRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl TrafficRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Plates held back from generated traffic.
#[derive(Resource, Debug, Clone, Default)]
pub struct ReservedPlates(BTreeSet<Plate>);

impl ReservedPlates {
    pub fn insert(&mut self, plate: Plate) {
        self.0.insert(plate);
    }

    pub fn contains(&self, plate: &Plate) -> bool {
        self.0.contains(plate)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Plate> for ReservedPlates {
    fn from_iter<I: IntoIterator<Item = Plate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Pure generation functions
// =============================================================================

/// Clamp a configured chance into `[0, 1]`. NaN and infinities mean never.
fn probability(chance: f64) -> f64 {
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// A vehicle of random kind with a plate like `CC0412`.
pub fn random_vehicle(rng: &mut impl Rng) -> Vehicle {
    let kind = VehicleType::ALL[rng.gen_range(0..VehicleType::ALL.len())];
    let plate = format!("{}{:04}", kind.plate_prefix(), rng.gen_range(0..10_000));
    Vehicle::new(plate, kind)
}

/// Commands produced by one tick of traffic against the current lot.
///
/// A generated arrival with a reserved plate is dropped, and departures only
/// pick unreserved plates.
pub fn plan_traffic(
    settings: &TrafficSettings,
    rng: &mut impl Rng,
    lot: &ParkingLot,
    reserved: &ReservedPlates,
    now: SimTime,
) -> Vec<QueuedCommand> {
    let mut planned = Vec::new();
    let LotLayout { floors, rows, .. } = lot.layout();
    if floors == 0 || rows == 0 {
        return planned;
    }

    if rng.gen_bool(probability(settings.arrival_chance)) {
        let vehicle = random_vehicle(rng);
        let floor = rng.gen_range(0..floors);
        let row = rng.gen_range(0..rows);
        if !reserved.contains(vehicle.plate()) {
            planned.push(QueuedCommand {
                at: now,
                source: CommandSource::Traffic,
                command: ParkingCommand::Park {
                    vehicle,
                    floor,
                    row,
                },
            });
        }
    }

    let leavers: Vec<&Plate> = lot
        .plates()
        .filter(|plate| !reserved.contains(plate))
        .collect();
    if !leavers.is_empty() && rng.gen_bool(probability(settings.departure_chance)) {
        let pick = rng.gen_range(0..leavers.len());
        if let Some(vehicle) = lot.vehicle(leavers[pick]) {
            planned.push(QueuedCommand {
                at: now,
                source: CommandSource::Traffic,
                command: ParkingCommand::Leave {
                    vehicle: Vehicle::new(vehicle.plate().clone(), vehicle.kind()),
                },
            });
        }
    }

    planned
}

// =============================================================================
// System
// =============================================================================

pub fn generate_traffic(
    settings: Res<TrafficSettings>,
    mut rng: ResMut<TrafficRng>,
    lot: Res<ParkingLot>,
    reserved: Res<ReservedPlates>,
    clock: Res<ParkingClock>,
    mut queue: ResMut<CommandQueue>,
) {
    if !settings.enabled || clock.paused {
        return;
    }
    for queued in plan_traffic(&settings, &mut rng.0, &lot, &reserved, clock.now()) {
        queue.push_queued(queued);
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrafficSettings>()
            .init_resource::<TrafficRng>()
            .init_resource::<ReservedPlates>()
            .add_systems(
                FixedUpdate,
                generate_traffic
                    .in_set(SimulationSet::PreSim)
                    .after(crate::clock::tick_parking_clock),
            );
    }
}

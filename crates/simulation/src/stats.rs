use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::commands::CommandResult;
use crate::lot::ParkingLot;
use crate::SimulationSet;

#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct LotStats {
    pub arrivals: u32,
    pub departures: u32,
    pub rejections: u32,
    pub revenue: f64,
    pub occupied: u32,
    pub available_per_floor: Vec<u32>,
}

impl LotStats {
    /// Fold one executed command into the running totals.
    pub fn record(&mut self, result: &CommandResult) {
        match result {
            CommandResult::Parked(_) => self.arrivals += 1,
            CommandResult::Left(receipt) => {
                self.departures += 1;
                self.revenue += receipt.cost;
            }
            CommandResult::Error(_) => self.rejections += 1,
            CommandResult::Available { .. }
            | CommandResult::Cleared { .. }
            | CommandResult::ClockPaused { .. } => {}
        }
    }

    pub fn total_available(&self) -> u32 {
        self.available_per_floor.iter().sum()
    }
}

pub fn update_lot_stats(lot: Res<ParkingLot>, mut stats: ResMut<LotStats>) {
    let floors = lot.layout().floors;
    stats.available_per_floor = (0..floors)
        .map(|floor| lot.available_spots(floor).unwrap_or(0))
        .collect();
    stats.occupied = lot.len() as u32;
}

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LotStats>().add_systems(
            FixedUpdate,
            update_lot_stats.in_set(SimulationSet::PostSim),
        );
    }
}

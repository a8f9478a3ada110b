//! Scripted demo run: parks the reference vehicles, lets a few simulated
//! hours pass, checks two of them out and clears the lot.

use bevy::prelude::*;

use simulation::clock::{ParkingClock, SimTime};
use simulation::commands::{CommandQueue, CommandSource, ParkingCommand};
use simulation::stats::LotStats;
use simulation::traffic::ReservedPlates;
use simulation::vehicle::Vehicle;

/// Simulated minutes between the arrivals and the first departure.
const STAY_MINUTES: u64 = 3 * 60;

#[derive(Resource, Debug, Clone, Copy)]
pub struct DemoScript {
    /// Clock time of the last scripted command.
    pub ends_at: SimTime,
}

fn park(vehicle: Vehicle, floor: u32, row: u32) -> ParkingCommand {
    ParkingCommand::Park {
        vehicle,
        floor,
        row,
    }
}

fn report(floor: u32) -> ParkingCommand {
    ParkingCommand::ReportAvailable { floor }
}

/// The reference walk-through as (time, command) pairs.
pub fn reference_script() -> Vec<(SimTime, ParkingCommand)> {
    let arrive = SimTime::ZERO;
    let depart = arrive.plus_minutes(STAY_MINUTES);
    let close = depart.plus_minutes(1);

    let mut script = vec![
        (arrive, report(0)),
        (arrive, park(Vehicle::car("CC1234"), 0, 0)),
        (arrive, report(0)),
        (arrive, park(Vehicle::car("CC3456"), 0, 0)),
        (arrive, report(0)),
        (arrive, report(1)),
        (arrive, park(Vehicle::bike("BB0011"), 1, 0)),
        (arrive, report(1)),
        (arrive, report(2)),
        (arrive, park(Vehicle::truck("TR9879"), 2, 9)),
        (arrive, report(2)),
        (
            depart,
            ParkingCommand::Leave {
                vehicle: Vehicle::car("CC1234"),
            },
        ),
        (depart, report(0)),
        (
            depart,
            ParkingCommand::Leave {
                vehicle: Vehicle::bike("BB1122"),
            },
        ),
        (close, ParkingCommand::Clear),
    ];
    script.extend((0..3).map(|floor| (close, report(floor))));
    script
}

/// Queue the reference script and record when it ends. The script's plates
/// are reserved so random traffic cannot take or release them.
pub fn queue_reference_script(
    mut commands: Commands,
    mut queue: ResMut<CommandQueue>,
    mut reserved: ResMut<ReservedPlates>,
) {
    let script = reference_script();
    for plate in script.iter().filter_map(|(_, command)| command.plate()) {
        reserved.insert(plate.clone());
    }
    let ends_at = script
        .iter()
        .map(|(at, _)| *at)
        .max()
        .unwrap_or(SimTime::ZERO);
    for (at, command) in script {
        queue.push(at, CommandSource::Script, command);
    }
    info!("Demo script queued, runs until minute {}", ends_at.minutes());
    commands.insert_resource(DemoScript { ends_at });
}

/// Exit once every scripted command has run, logging a summary.
pub fn finish_demo(
    script: Option<Res<DemoScript>>,
    queue: Res<CommandQueue>,
    clock: Res<ParkingClock>,
    stats: Res<LotStats>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(script) = script else {
        return;
    };
    if clock.now() < script.ends_at || !queue.is_empty() {
        return;
    }

    info!(
        "Demo finished at {}: {} arrivals, {} departures, {} rejections, revenue {:.2}",
        clock.formatted(),
        stats.arrivals,
        stats.departures,
        stats.rejections,
        stats.revenue
    );
    exit.send(AppExit::Success);
}

pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, queue_reference_script)
            .add_systems(Update, finish_demo);
    }
}

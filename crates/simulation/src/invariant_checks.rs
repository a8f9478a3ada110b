//! Runtime invariant guards for the lot registry.
//!
//! After every tick the lot is checked for cells holding more vehicles than
//! `spots_per_row` and for plate-index entries that point at a cell which
//! does not hold that plate. Violations are logged and counted; the lot is
//! not repaired.

use bevy::prelude::*;

use crate::lot::ParkingLot;
use crate::SimulationSet;

/// Number of violations found by the last validation pass.
#[derive(Resource, Default, Debug)]
pub struct LotInvariantViolations {
    pub over_capacity: u32,
    pub stale_index: u32,
    pub unindexed: u32,
}

impl LotInvariantViolations {
    pub fn total(&self) -> u32 {
        self.over_capacity + self.stale_index + self.unindexed
    }
}

/// Count violations without logging. Used by the system and by tests.
pub fn check_lot(lot: &ParkingLot) -> LotInvariantViolations {
    let capacity = lot.layout().spots_per_row;
    let mut violations = LotInvariantViolations::default();
    let mut cell_total = 0usize;

    for (address, occupied) in lot.cell_occupancies() {
        cell_total += occupied as usize;
        if occupied > capacity {
            warn!(
                "Invariant violation: {} holds {} vehicles (capacity {}).",
                address, occupied, capacity
            );
            violations.over_capacity += 1;
        }
    }

    for (plate, address) in lot.index_entries() {
        if !lot.cell_contains(address, plate) {
            warn!(
                "Invariant violation: index places {} at {}, but the cell does not hold it.",
                plate, address
            );
            violations.stale_index += 1;
        }
    }

    let indexed = lot.len() - violations.stale_index as usize;
    if cell_total > indexed {
        warn!(
            "Invariant violation: {} parked vehicles missing from the plate index.",
            cell_total - indexed
        );
        violations.unindexed = (cell_total - indexed) as u32;
    }

    violations
}

pub fn validate_lot(lot: Res<ParkingLot>, mut violations: ResMut<LotInvariantViolations>) {
    *violations = check_lot(&lot);
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct InvariantChecksPlugin;

impl Plugin for InvariantChecksPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LotInvariantViolations>().add_systems(
            FixedUpdate,
            validate_lot.in_set(SimulationSet::PostSim),
        );
    }
}

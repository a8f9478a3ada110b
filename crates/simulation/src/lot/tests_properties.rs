//! Availability bookkeeping checked after every mutation.

use super::*;

use crate::clock::SimTime;
use crate::vehicle::{PricingTable, Vehicle, VehicleType};

/// Recompute availability from raw occupancies and compare with the registry.
fn assert_availability_consistent(lot: &ParkingLot) {
    let layout = lot.layout();
    for floor in 0..layout.floors {
        let occupied: u32 = (0..layout.rows)
            .map(|row| lot.occupancy(floor, row).unwrap())
            .sum();
        assert_eq!(
            lot.available_spots(floor).unwrap(),
            layout.rows * layout.spots_per_row - occupied,
            "floor {floor} availability drifted"
        );
    }
}

fn vehicle(n: u32) -> Vehicle {
    let kind = VehicleType::ALL[(n % 3) as usize];
    Vehicle::new(format!("{}{:04}", kind.plate_prefix(), n), kind).parked_at(SimTime::ZERO)
}

#[test]
fn test_capacity_k_then_k_plus_one_fails() {
    let k = 5;
    let mut lot = ParkingLot::new(LotLayout::new(2, 3, k), PricingTable::default());
    for n in 0..k {
        assert!(lot.park(vehicle(n), 1, 2).is_ok());
    }
    assert!(lot.park(vehicle(k), 1, 2).is_err());
    assert_eq!(lot.occupancy(1, 2).unwrap(), k);
    assert_availability_consistent(&lot);
}

#[test]
fn test_availability_holds_through_mixed_operations() {
    let mut lot = ParkingLot::new(LotLayout::new(3, 4, 3), PricingTable::default());
    assert_availability_consistent(&lot);

    for n in 0..30 {
        let floor = n % 3;
        let row = (n / 3) % 4;
        let _ = lot.park(vehicle(n), floor, row);
        assert_availability_consistent(&lot);
    }
    for n in (0..30).step_by(2) {
        let _ = lot.leave(&vehicle(n), SimTime::from_hours(2));
        assert_availability_consistent(&lot);
    }
}

#[test]
fn test_unknown_leave_changes_nothing() {
    let mut lot = ParkingLot::new(LotLayout::new(3, 10, 20), PricingTable::default());
    lot.park(vehicle(1), 0, 0).unwrap();
    let before: Vec<u32> = (0..3).map(|f| lot.available_spots(f).unwrap()).collect();

    assert!(lot
        .leave(&Vehicle::bike("BB1122"), SimTime::from_hours(1))
        .is_err());

    let after: Vec<u32> = (0..3).map(|f| lot.available_spots(f).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_clear_restores_full_availability() {
    let mut lot = ParkingLot::new(LotLayout::new(3, 10, 20), PricingTable::default());
    for n in 0..50 {
        let _ = lot.park(vehicle(n), n % 3, n % 10);
    }
    lot.clear();
    for floor in 0..3 {
        assert_eq!(lot.available_spots(floor).unwrap(), 200);
    }
}

#[test]
fn test_index_matches_cells() {
    let mut lot = ParkingLot::new(LotLayout::new(2, 2, 2), PricingTable::default());
    for n in 0..8 {
        let _ = lot.park(vehicle(n), n % 2, (n / 2) % 2);
    }
    let _ = lot.leave(&vehicle(3), SimTime::from_hours(1));
    for (plate, address) in lot.index_entries() {
        assert!(lot.cell_contains(address, plate));
    }
    let cell_total: u32 = lot.cell_occupancies().map(|(_, n)| n).sum();
    assert_eq!(cell_total as usize, lot.len());
}

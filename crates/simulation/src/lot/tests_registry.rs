//! Tests for park, leave, duration, cost and clear on a single lot.

use super::*;

use crate::clock::SimTime;
use crate::vehicle::{PricingTable, Vehicle, VehicleType};

fn reference_lot() -> ParkingLot {
    ParkingLot::new(LotLayout::new(3, 10, 20), PricingTable::default())
}

fn arrived(vehicle: Vehicle, minutes: u64) -> Vehicle {
    vehicle.parked_at(SimTime::from_minutes(minutes))
}

// -------------------------------------------------------------------------
// Park
// -------------------------------------------------------------------------

#[test]
fn test_park_returns_receipt() {
    let mut lot = reference_lot();
    let receipt = lot.park(arrived(Vehicle::car("CC1234"), 5), 0, 0).unwrap();
    assert_eq!(receipt.plate.as_str(), "CC1234");
    assert_eq!(receipt.kind, VehicleType::Car);
    assert_eq!(receipt.address, SpotAddress::new(0, 0));
    assert_eq!(receipt.arrival, SimTime::from_minutes(5));
    assert_eq!(lot.len(), 1);
    assert_eq!(lot.locate(&"CC1234".into()), Some(SpotAddress::new(0, 0)));
}

#[test]
fn test_park_without_arrival_rejected() {
    let mut lot = reference_lot();
    let err = lot.park(Vehicle::bike("BB0011"), 1, 0).unwrap_err();
    assert!(matches!(err, ParkingError::ArrivalNotSet { .. }));
    assert!(lot.is_empty());
}

#[test]
fn test_park_out_of_bounds_floor() {
    let mut lot = reference_lot();
    let err = lot.park(arrived(Vehicle::car("CC1"), 0), 3, 0).unwrap_err();
    assert_eq!(err, ParkingError::OutOfBounds { floor: 3, row: 0 });
    assert!(lot.is_empty());
}

#[test]
fn test_park_out_of_bounds_row() {
    let mut lot = reference_lot();
    let err = lot.park(arrived(Vehicle::car("CC1"), 0), 0, 10).unwrap_err();
    assert_eq!(err, ParkingError::OutOfBounds { floor: 0, row: 10 });
}

#[test]
fn test_park_duplicate_plate_rejected_anywhere() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::car("CC1234"), 0), 0, 0).unwrap();
    let err = lot.park(arrived(Vehicle::car("CC1234"), 1), 2, 5).unwrap_err();
    assert_eq!(
        err,
        ParkingError::AlreadyParked {
            plate: "CC1234".into(),
            address: SpotAddress::new(0, 0),
        }
    );
    assert_eq!(lot.available_spots(2).unwrap(), 200);
    assert_eq!(lot.len(), 1);
}

#[test]
fn test_park_full_row_rejected() {
    let mut lot = ParkingLot::new(LotLayout::new(1, 2, 2), PricingTable::default());
    lot.park(arrived(Vehicle::car("A"), 0), 0, 1).unwrap();
    lot.park(arrived(Vehicle::car("B"), 0), 0, 1).unwrap();
    let err = lot.park(arrived(Vehicle::car("C"), 0), 0, 1).unwrap_err();
    assert_eq!(
        err,
        ParkingError::RowFull {
            floor: 0,
            row: 1,
            capacity: 2
        }
    );
    assert!(!lot.is_parked(&"C".into()));
    // The other row on the same floor is still open.
    assert!(lot.park(arrived(Vehicle::car("C"), 0), 0, 0).is_ok());
}

// -------------------------------------------------------------------------
// Leave
// -------------------------------------------------------------------------

#[test]
fn test_leave_bills_stored_arrival() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::car("CC1234"), 60), 0, 0).unwrap();
    let receipt = lot
        .leave(&Vehicle::car("CC1234"), SimTime::from_minutes(180))
        .unwrap();
    assert!((receipt.hours - 2.0).abs() < f64::EPSILON);
    assert!((receipt.cost - 4.0).abs() < f64::EPSILON);
    assert_eq!(receipt.arrival, SimTime::from_minutes(60));
    assert_eq!(receipt.departure, SimTime::from_minutes(180));
    assert_eq!(receipt.address, SpotAddress::new(0, 0));
    assert!(lot.is_empty());
}

#[test]
fn test_leave_matches_on_plate_only() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::truck("TR9879"), 0), 2, 9).unwrap();
    // A different value (and even kind) with the same plate releases the truck,
    // billed at the truck rate.
    let receipt = lot
        .leave(&Vehicle::bike("TR9879"), SimTime::from_hours(1))
        .unwrap();
    assert_eq!(receipt.kind, VehicleType::Truck);
    assert!((receipt.cost - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_leave_unknown_plate() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::car("CC1234"), 0), 0, 0).unwrap();
    let err = lot
        .leave(&Vehicle::bike("BB1122"), SimTime::from_minutes(10))
        .unwrap_err();
    assert_eq!(
        err,
        ParkingError::NotFound {
            plate: "BB1122".into()
        }
    );
    assert_eq!(lot.len(), 1);
}

#[test]
fn test_leave_twice_fails_second_time() {
    let mut lot = reference_lot();
    let car = arrived(Vehicle::car("CC3456"), 0);
    lot.park(car.clone(), 0, 0).unwrap();
    assert!(lot.leave(&car, SimTime::from_minutes(30)).is_ok());
    let err = lot.leave(&car, SimTime::from_minutes(31)).unwrap_err();
    assert!(matches!(err, ParkingError::NotFound { .. }));
}

#[test]
fn test_plate_can_park_again_after_leaving() {
    let mut lot = reference_lot();
    let car = arrived(Vehicle::car("CC1234"), 0);
    lot.park(car.clone(), 0, 0).unwrap();
    lot.leave(&car, SimTime::from_minutes(10)).unwrap();
    assert!(lot.park(car, 1, 3).is_ok());
    assert_eq!(lot.locate(&"CC1234".into()), Some(SpotAddress::new(1, 3)));
}

// -------------------------------------------------------------------------
// Duration and cost
// -------------------------------------------------------------------------

#[test]
fn test_parking_hours_in_hours_not_nanoseconds() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::bike("BB0011"), 0), 1, 0).unwrap();
    let hours = lot
        .calculate_parking_hours(&Vehicle::bike("BB0011"), SimTime::from_minutes(90))
        .unwrap();
    assert!((hours - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_parking_hours_unknown_plate() {
    let lot = reference_lot();
    let err = lot
        .calculate_parking_hours(&Vehicle::car("CC0000"), SimTime::from_hours(1))
        .unwrap_err();
    assert!(matches!(err, ParkingError::NotFound { .. }));
}

#[test]
fn test_cost_per_kind() {
    let lot = reference_lot();
    let hours = 3.0;
    assert!((lot.calculate_cost(&Vehicle::bike("B"), hours) - 3.0).abs() < f64::EPSILON);
    assert!((lot.calculate_cost(&Vehicle::car("C"), hours) - 6.0).abs() < f64::EPSILON);
    assert!((lot.calculate_cost(&Vehicle::truck("T"), hours) - 15.0).abs() < f64::EPSILON);
}

#[test]
fn test_cost_uses_configured_pricing() {
    let pricing = PricingTable {
        bike: 0.5,
        car: 2.5,
        truck: 7.0,
    };
    let lot = ParkingLot::new(LotLayout::new(1, 1, 1), pricing);
    assert!((lot.calculate_cost(&Vehicle::car("C"), 2.0) - 5.0).abs() < f64::EPSILON);
}

// -------------------------------------------------------------------------
// Queries and clear
// -------------------------------------------------------------------------

#[test]
fn test_available_spots_out_of_range_floor() {
    let lot = reference_lot();
    assert_eq!(
        lot.available_spots(3),
        Err(ParkingError::FloorOutOfBounds { floor: 3 })
    );
}

#[test]
fn test_occupancy_out_of_range() {
    let lot = reference_lot();
    assert_eq!(
        lot.occupancy(0, 10),
        Err(ParkingError::OutOfBounds { floor: 0, row: 10 })
    );
}

#[test]
fn test_clear_returns_removed_count() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::car("CC1234"), 0), 0, 0).unwrap();
    lot.park(arrived(Vehicle::bike("BB0011"), 0), 1, 0).unwrap();
    assert_eq!(lot.clear(), 2);
    assert!(lot.is_empty());
    assert_eq!(lot.total_available(), lot.capacity());
    assert!(lot.locate(&"CC1234".into()).is_none());
}

#[test]
fn test_parked_iterates_in_plate_order() {
    let mut lot = reference_lot();
    lot.park(arrived(Vehicle::truck("TR9879"), 0), 2, 9).unwrap();
    lot.park(arrived(Vehicle::bike("BB0011"), 0), 1, 0).unwrap();
    lot.park(arrived(Vehicle::car("CC1234"), 0), 0, 0).unwrap();
    let plates: Vec<_> = lot.parked().map(|(_, v)| v.plate().as_str()).collect();
    assert_eq!(plates, vec!["BB0011", "CC1234", "TR9879"]);
}

#[test]
fn test_default_lot_uses_reference_config() {
    let lot = ParkingLot::default();
    assert_eq!(lot.layout(), LotLayout::new(3, 10, 20));
    assert_eq!(lot.capacity(), 600);
}

#[test]
fn test_oversized_layout_counts_saturate() {
    let mut lot = ParkingLot::new(LotLayout::new(1, 100_000, 100_000), PricingTable::default());
    assert_eq!(lot.available_spots(0).unwrap(), u32::MAX);
    assert_eq!(lot.capacity(), u32::MAX);
    lot.park(arrived(Vehicle::car("CC1234"), 0), 0, 99_999).unwrap();
    assert_eq!(lot.occupancy(0, 99_999).unwrap(), 1);
    assert_eq!(lot.total_available(), u32::MAX - 1);
}

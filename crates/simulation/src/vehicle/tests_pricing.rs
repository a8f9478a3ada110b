//! Tests for rate lookup and cost calculation.

use super::*;

// -------------------------------------------------------------------------
// Rate tests
// -------------------------------------------------------------------------

#[test]
fn test_reference_rates() {
    let pricing = PricingTable::default();
    assert!((pricing.rate(VehicleType::Bike) - 1.0).abs() < f64::EPSILON);
    assert!((pricing.rate(VehicleType::Car) - 2.0).abs() < f64::EPSILON);
    assert!((pricing.rate(VehicleType::Truck) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_table_matches_default_rate() {
    let pricing = PricingTable::default();
    for kind in VehicleType::ALL {
        assert!((pricing.rate(kind) - default_rate(kind)).abs() < f64::EPSILON);
    }
}

#[test]
fn test_rates_listed_in_kind_order() {
    let rates = PricingTable::default().rates();
    assert_eq!(rates[0].0, VehicleType::Bike);
    assert_eq!(rates[1].0, VehicleType::Car);
    assert_eq!(rates[2].0, VehicleType::Truck);
}

// -------------------------------------------------------------------------
// Cost tests
// -------------------------------------------------------------------------

#[test]
fn test_car_two_hours_costs_four() {
    let pricing = PricingTable::default();
    assert!((pricing.cost(VehicleType::Car, 2.0) - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_bike_cost_equals_hours() {
    let pricing = PricingTable::default();
    assert!((pricing.cost(VehicleType::Bike, 3.5) - 3.5).abs() < f64::EPSILON);
}

#[test]
fn test_truck_half_hour() {
    let pricing = PricingTable::default();
    // 0.5 * 5.0 = 2.5, no minimum charge
    assert!((pricing.cost(VehicleType::Truck, 0.5) - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_zero_hours_is_free() {
    let pricing = PricingTable::default();
    for kind in VehicleType::ALL {
        assert!(pricing.cost(kind, 0.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_vehicle_delegates_to_table() {
    let pricing = PricingTable {
        bike: 1.0,
        car: 3.0,
        truck: 10.0,
    };
    let truck = Vehicle::truck("TR9879");
    assert!((truck.calculate_cost(1.5, &pricing) - 15.0).abs() < f64::EPSILON);
}

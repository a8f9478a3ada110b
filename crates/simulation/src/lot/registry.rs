//! The [`ParkingLot`] resource: spot bookkeeping and billing.

use std::collections::{BTreeMap, HashMap};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::clock::SimTime;
use crate::config::LotConfig;
use crate::vehicle::{Plate, PricingTable, Vehicle, VehicleType};

use super::address::{LotLayout, SpotAddress};
use super::error::ParkingError;

// =============================================================================
// Receipts
// =============================================================================

/// Outcome of a successful park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkReceipt {
    pub plate: Plate,
    pub kind: VehicleType,
    pub address: SpotAddress,
    pub arrival: SimTime,
}

/// Outcome of a successful leave, including the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveReceipt {
    pub plate: Plate,
    pub kind: VehicleType,
    pub address: SpotAddress,
    pub arrival: SimTime,
    pub departure: SimTime,
    pub hours: f64,
    pub cost: f64,
}

// =============================================================================
// Resource: the lot registry
// =============================================================================

/// Owns every parked vehicle.
///
/// Cells live in a flat vector indexed by `floor * rows + row`; each cell maps
/// plate to vehicle. The plate index mirrors the cells so that a plate can be
/// found without scanning the lot.
#[derive(Resource, Debug, Clone)]
pub struct ParkingLot {
    layout: LotLayout,
    pricing: PricingTable,
    cells: Vec<HashMap<Plate, Vehicle>>,
    index: BTreeMap<Plate, SpotAddress>,
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::from_config(&LotConfig::default())
    }
}

impl ParkingLot {
    pub fn new(layout: LotLayout, pricing: PricingTable) -> Self {
        Self {
            layout,
            pricing,
            cells: (0..layout.cell_count()).map(|_| HashMap::new()).collect(),
            index: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &LotConfig) -> Self {
        Self::new(LotLayout::from_config(config), config.pricing)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Park `vehicle` in the (floor, row) cell.
    ///
    /// The vehicle must already carry its arrival stamp. On any error the lot
    /// is left untouched.
    pub fn park(
        &mut self,
        vehicle: Vehicle,
        floor: u32,
        row: u32,
    ) -> Result<ParkReceipt, ParkingError> {
        let address = SpotAddress::new(floor, row);
        let kind = vehicle.kind();

        if !self.layout.contains(address) {
            return Err(rejected(&vehicle, ParkingError::OutOfBounds { floor, row }));
        }
        let Some(arrival) = vehicle.arrival() else {
            let plate = vehicle.plate().clone();
            return Err(rejected(&vehicle, ParkingError::ArrivalNotSet { plate }));
        };
        if let Some(&existing) = self.index.get(vehicle.plate()) {
            let plate = vehicle.plate().clone();
            return Err(rejected(
                &vehicle,
                ParkingError::AlreadyParked {
                    plate,
                    address: existing,
                },
            ));
        }

        let capacity = self.layout.spots_per_row;
        let cell_index = self.layout.cell_index(address);
        let cell = &mut self.cells[cell_index];
        if cell.len() >= capacity as usize {
            warn!("This floor row is already full. Please select another floor.");
            return Err(ParkingError::RowFull {
                floor,
                row,
                capacity,
            });
        }

        let plate = vehicle.plate().clone();
        cell.insert(plate.clone(), vehicle);
        self.index.insert(plate.clone(), address);

        info!("{} parked successfully at floor {}, row {}.", kind, floor, row);
        Ok(ParkReceipt {
            plate,
            kind,
            address,
            arrival,
        })
    }

    /// Remove the vehicle with the same plate as `vehicle` and bill it.
    ///
    /// Only the plate is used for the lookup; duration and rate come from the
    /// stored record. Leaving twice fails the second time with `NotFound`.
    pub fn leave(&mut self, vehicle: &Vehicle, now: SimTime) -> Result<LeaveReceipt, ParkingError> {
        let plate = vehicle.plate();
        let Some(&address) = self.index.get(plate) else {
            info!("{} not found.", vehicle.kind());
            return Err(ParkingError::NotFound {
                plate: plate.clone(),
            });
        };

        let hours = self.calculate_parking_hours(vehicle, now)?;
        let cell_index = self.layout.cell_index(address);
        let Some(owner) = self.cells[cell_index].remove(plate) else {
            // Index pointed at a cell that no longer holds the plate.
            self.index.remove(plate);
            info!("{} not found.", vehicle.kind());
            return Err(ParkingError::NotFound {
                plate: plate.clone(),
            });
        };
        self.index.remove(plate);

        let cost = self.calculate_cost(&owner, hours);
        info!("{} left successfully. Total cost: {}", owner.kind(), cost);

        Ok(LeaveReceipt {
            plate: plate.clone(),
            kind: owner.kind(),
            address,
            arrival: owner.arrival().unwrap_or(now),
            departure: now,
            hours,
            cost,
        })
    }

    /// Remove every parked vehicle. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.index.len();
        for cell in &mut self.cells {
            cell.clear();
        }
        self.index.clear();
        removed
    }

    // -------------------------------------------------------------------------
    // Billing
    // -------------------------------------------------------------------------

    /// Hours between the stored arrival of this plate and `now`.
    pub fn calculate_parking_hours(
        &self,
        vehicle: &Vehicle,
        now: SimTime,
    ) -> Result<f64, ParkingError> {
        let stored = self
            .vehicle(vehicle.plate())
            .ok_or_else(|| ParkingError::NotFound {
                plate: vehicle.plate().clone(),
            })?;
        let arrival = stored.arrival().unwrap_or(now);
        Ok(now.hours_since(arrival))
    }

    /// `hours * rate(vehicle.kind())` using this lot's pricing.
    pub fn calculate_cost(&self, vehicle: &Vehicle, hours: f64) -> f64 {
        vehicle.calculate_cost(hours, &self.pricing)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Free spots summed over every row of `floor`.
    pub fn available_spots(&self, floor: u32) -> Result<u32, ParkingError> {
        if !self.layout.contains_floor(floor) {
            return Err(ParkingError::FloorOutOfBounds { floor });
        }
        let available = (0..self.layout.rows)
            .map(|row| {
                let occupied = self.cell_len(SpotAddress::new(floor, row));
                self.layout.spots_per_row.saturating_sub(occupied)
            })
            .fold(0u32, u32::saturating_add);
        Ok(available)
    }

    /// Number of vehicles in the (floor, row) cell.
    pub fn occupancy(&self, floor: u32, row: u32) -> Result<u32, ParkingError> {
        let address = SpotAddress::new(floor, row);
        if !self.layout.contains(address) {
            return Err(ParkingError::OutOfBounds { floor, row });
        }
        Ok(self.cell_len(address))
    }

    pub fn total_available(&self) -> u32 {
        self.layout.capacity().saturating_sub(self.len() as u32)
    }

    pub fn capacity(&self) -> u32 {
        self.layout.capacity()
    }

    pub fn locate(&self, plate: &Plate) -> Option<SpotAddress> {
        self.index.get(plate).copied()
    }

    pub fn vehicle(&self, plate: &Plate) -> Option<&Vehicle> {
        let address = self.locate(plate)?;
        self.cells[self.layout.cell_index(address)].get(plate)
    }

    pub fn is_parked(&self, plate: &Plate) -> bool {
        self.index.contains_key(plate)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn layout(&self) -> LotLayout {
        self.layout
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Parked plates in sorted order.
    pub fn plates(&self) -> impl Iterator<Item = &Plate> {
        self.index.keys()
    }

    /// Every parked vehicle with its cell, in plate order.
    pub fn parked(&self) -> impl Iterator<Item = (SpotAddress, &Vehicle)> {
        self.index.iter().filter_map(|(plate, &address)| {
            self.cells[self.layout.cell_index(address)]
                .get(plate)
                .map(|vehicle| (address, vehicle))
        })
    }

    /// Occupancy of every cell, floor-major.
    pub fn cell_occupancies(&self) -> impl Iterator<Item = (SpotAddress, u32)> + '_ {
        self.layout
            .addresses()
            .map(|address| (address, self.cell_len(address)))
    }

    /// Plate index entries, in plate order.
    pub fn index_entries(&self) -> impl Iterator<Item = (&Plate, SpotAddress)> {
        self.index.iter().map(|(plate, &address)| (plate, address))
    }

    /// Whether the cell at `address` holds `plate`. False for unknown cells.
    pub fn cell_contains(&self, address: SpotAddress, plate: &Plate) -> bool {
        self.layout.contains(address)
            && self.cells[self.layout.cell_index(address)].contains_key(plate)
    }

    fn cell_len(&self, address: SpotAddress) -> u32 {
        self.cells[self.layout.cell_index(address)].len() as u32
    }

    /// Insert straight into a cell, skipping every check and the index.
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, vehicle: Vehicle, address: SpotAddress) {
        let cell_index = self.layout.cell_index(address);
        self.cells[cell_index].insert(vehicle.plate().clone(), vehicle);
    }
}

fn rejected(vehicle: &Vehicle, err: ParkingError) -> ParkingError {
    warn!("Cannot park {} {}: {}", vehicle.kind(), vehicle.plate(), err);
    err
}

// =============================================================================
// Plugin
// =============================================================================

/// Builds the [`ParkingLot`] from the [`LotConfig`] present when the plugin
/// is added. A lot inserted beforehand is left as is.
pub struct LotPlugin;

impl Plugin for LotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LotConfig>();
        if app.world().contains_resource::<ParkingLot>() {
            return;
        }

        let config = app.world().resource::<LotConfig>();
        let lot = match config.validate() {
            Ok(()) => ParkingLot::from_config(config),
            Err(e) => {
                warn!("Ignoring lot config ({}), using the default lot", e);
                ParkingLot::default()
            }
        };
        info!(
            "Parking lot ready: {} floors x {} rows x {} spots",
            lot.layout().floors,
            lot.layout().rows,
            lot.layout().spots_per_row
        );
        app.insert_resource(lot);
    }
}

//! Lot geometry: spot addresses and the floor/row/capacity layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LotConfig;

/// A (floor, row) cell of the lot. Both indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotAddress {
    pub floor: u32,
    pub row: u32,
}

impl SpotAddress {
    pub const fn new(floor: u32, row: u32) -> Self {
        Self { floor, row }
    }
}

impl fmt::Display for SpotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}, row {}", self.floor, self.row)
    }
}

/// Fixed dimensions of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    pub floors: u32,
    pub rows: u32,
    pub spots_per_row: u32,
}

impl LotLayout {
    pub const fn new(floors: u32, rows: u32, spots_per_row: u32) -> Self {
        Self {
            floors,
            rows,
            spots_per_row,
        }
    }

    pub fn from_config(config: &LotConfig) -> Self {
        Self::new(config.floors, config.rows, config.spots_per_row)
    }

    pub fn contains(&self, addr: SpotAddress) -> bool {
        addr.floor < self.floors && addr.row < self.rows
    }

    pub fn contains_floor(&self, floor: u32) -> bool {
        floor < self.floors
    }

    /// Flat index of a cell: `floor * rows + row`. Caller checks bounds.
    #[inline]
    pub fn cell_index(&self, addr: SpotAddress) -> usize {
        addr.floor as usize * self.rows as usize + addr.row as usize
    }

    pub fn cell_count(&self) -> usize {
        self.floors as usize * self.rows as usize
    }

    /// Saturates at `u32::MAX`; validated configs never reach it.
    pub fn spots_per_floor(&self) -> u32 {
        self.rows.saturating_mul(self.spots_per_row)
    }

    /// Saturates at `u32::MAX`; see [`LotLayout::checked_capacity`].
    pub fn capacity(&self) -> u32 {
        self.checked_capacity().unwrap_or(u32::MAX)
    }

    /// Total spot count, or `None` if it does not fit in a `u32`.
    pub fn checked_capacity(&self) -> Option<u32> {
        self.floors
            .checked_mul(self.rows)?
            .checked_mul(self.spots_per_row)
    }

    /// Every cell address, floor-major.
    pub fn addresses(&self) -> impl Iterator<Item = SpotAddress> + '_ {
        let rows = self.rows;
        (0..self.floors).flat_map(move |floor| (0..rows).map(move |row| SpotAddress::new(floor, row)))
    }
}

//! Lot dimensions, pricing and simulation timing.
//!
//! Defaults reproduce the reference lot (3 floors, 10 rows, 20 spots per row).
//! A [`LotConfig`] can also be loaded from a JSON file; any field missing from
//! the file keeps its default.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lot::LotLayout;
use crate::vehicle::PricingTable;

pub const DEFAULT_FLOORS: u32 = 3;
pub const DEFAULT_ROWS: u32 = 10;
pub const DEFAULT_SPOTS_PER_ROW: u32 = 20;

/// Fixed simulation step (10 Hz).
pub const FIXED_TIMESTEP_MS: u64 = 100;

/// Simulated minutes that pass on every fixed tick.
pub const MINUTES_PER_TICK: u64 = 1;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while loading or validating a [`LotConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for a `LotConfig`.
    Parse(serde_json::Error),
    /// The config parsed but describes an unusable lot.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid lot config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// =============================================================================
// Resource: lot configuration
// =============================================================================

/// Construction parameters for the parking lot.
///
/// Read once when `ParkingLot` is built; changing this resource afterwards
/// does not resize an existing lot.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub floors: u32,
    pub rows: u32,
    pub spots_per_row: u32,
    pub pricing: PricingTable,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            rows: DEFAULT_ROWS,
            spots_per_row: DEFAULT_SPOTS_PER_ROW,
            pricing: PricingTable::default(),
        }
    }
}

impl LotConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LotConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject zero-sized lots, lots whose spot count overflows `u32`, and
    /// non-finite or negative rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors == 0 || self.rows == 0 || self.spots_per_row == 0 {
            return Err(ConfigError::Invalid(format!(
                "floors, rows and spots_per_row must be positive (got {}x{}x{})",
                self.floors, self.rows, self.spots_per_row
            )));
        }
        if LotLayout::from_config(self).checked_capacity().is_none() {
            return Err(ConfigError::Invalid(format!(
                "lot of {}x{}x{} spots exceeds {} spots",
                self.floors,
                self.rows,
                self.spots_per_row,
                u32::MAX
            )));
        }
        for (kind, rate) in self.pricing.rates() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "rate for {kind} must be finite and non-negative (got {rate})"
                )));
            }
        }
        Ok(())
    }

    /// Total number of spots on one floor.
    pub fn spots_per_floor(&self) -> u32 {
        self.rows.saturating_mul(self.spots_per_row)
    }
}

//! Runtime tuning shared by every decision component.
//!
//! One `CoreConfig` is handed to the agent at construction and read by the
//! selector, fire control, movement and radar. Hosts may load it from JSON;
//! any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Lower fire power bound.
    pub min_power: f64,
    /// Upper fire power bound.
    pub max_power: f64,
    /// Fire only when the remaining gun turn is below this (degrees).
    pub alignment_threshold_deg: f64,
    /// Tracks older than this are skipped by target selection.
    pub staleness_limit_ticks: u64,
    /// Distance from an edge that triggers boundary avoidance.
    pub boundary_margin_units: f64,
    /// Tracks older than this are never fired upon.
    pub fire_staleness_limit_ticks: u64,
    /// Largest share of current energy a single shot may spend.
    pub max_energy_fraction_per_shot: f64,
    /// Radar stays locked on a primary seen within this many ticks.
    pub radar_lock_ticks: u64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            min_power: DEFAULT_MIN_POWER,
            max_power: DEFAULT_MAX_POWER,
            alignment_threshold_deg: DEFAULT_ALIGNMENT_THRESHOLD_DEG,
            staleness_limit_ticks: DEFAULT_STALENESS_LIMIT_TICKS,
            boundary_margin_units: DEFAULT_BOUNDARY_MARGIN,
            fire_staleness_limit_ticks: DEFAULT_FIRE_STALENESS_LIMIT_TICKS,
            max_energy_fraction_per_shot: DEFAULT_MAX_ENERGY_FRACTION_PER_SHOT,
            radar_lock_ticks: DEFAULT_RADAR_LOCK_TICKS,
        }
    }
}

impl CoreConfig {
    /// Check every field against what the engine and the decision code accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let powers_ok = self.min_power > 0.0
            && self.min_power <= self.max_power
            && self.max_power <= ENGINE_MAX_POWER;
        if !powers_ok {
            return Err(ConfigError::InvalidPowerRange {
                min: self.min_power,
                max: self.max_power,
            });
        }

        if !(self.alignment_threshold_deg > 0.0 && self.alignment_threshold_deg < 180.0) {
            return Err(ConfigError::InvalidAlignmentThreshold {
                degrees: self.alignment_threshold_deg,
            });
        }

        if !(self.boundary_margin_units >= 0.0) {
            return Err(ConfigError::NegativeMargin {
                margin: self.boundary_margin_units,
            });
        }

        if !(self.max_energy_fraction_per_shot > 0.0 && self.max_energy_fraction_per_shot <= 1.0) {
            return Err(ConfigError::InvalidEnergyFraction {
                fraction: self.max_energy_fraction_per_shot,
            });
        }

        Ok(())
    }

    /// Parse from JSON and validate.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

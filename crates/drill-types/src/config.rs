// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    EXPECTED_BAKE_TIME, FAIL_SAFE_TOLERANCE, GREEN_EFFICIENCY, ORANGE_EFFICIENCY,
    PREPARATION_TIME, RED_EFFICIENCY, SAFE_CRITICALITY_PRODUCT, SAFE_NEUTRONS_EMITTED,
    SAFE_TEMPERATURE,
};
use crate::error::{DrillError, DrillResult};

/// Top-level drill configuration.
/// Every field is optional in JSON; `{}` yields the stock limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub kitchen: KitchenConfig,
    #[serde(default)]
    pub reactor: ReactorLimits,
}

/// Recipe timings, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KitchenConfig {
    #[serde(default = "default_expected_bake_time")]
    pub expected_bake_time: i64,
    #[serde(default = "default_preparation_time")]
    pub preparation_time_per_layer: i64,
}

/// Reactor thresholds shared by the criticality, efficiency and fail-safe checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorLimits {
    /// Temperature ceiling [K], exclusive.
    #[serde(default = "default_safe_temperature")]
    pub safe_temperature: f64,
    /// Neutron emission floor [1/s], exclusive.
    #[serde(default = "default_safe_neutrons")]
    pub safe_neutrons_emitted: f64,
    /// Ceiling on temperature × neutrons, exclusive.
    #[serde(default = "default_safe_product")]
    pub safe_criticality_product: f64,
    #[serde(default = "default_green")]
    pub green_efficiency: f64,
    #[serde(default = "default_orange")]
    pub orange_efficiency: f64,
    #[serde(default = "default_red")]
    pub red_efficiency: f64,
    /// NORMAL band is threshold × [1 - tol, 1 + tol].
    #[serde(default = "default_tolerance")]
    pub fail_safe_tolerance: f64,
}

fn default_expected_bake_time() -> i64 {
    EXPECTED_BAKE_TIME
}
fn default_preparation_time() -> i64 {
    PREPARATION_TIME
}
fn default_safe_temperature() -> f64 {
    SAFE_TEMPERATURE
}
fn default_safe_neutrons() -> f64 {
    SAFE_NEUTRONS_EMITTED
}
fn default_safe_product() -> f64 {
    SAFE_CRITICALITY_PRODUCT
}
fn default_green() -> f64 {
    GREEN_EFFICIENCY
}
fn default_orange() -> f64 {
    ORANGE_EFFICIENCY
}
fn default_red() -> f64 {
    RED_EFFICIENCY
}
fn default_tolerance() -> f64 {
    FAIL_SAFE_TOLERANCE
}

impl Default for KitchenConfig {
    fn default() -> Self {
        KitchenConfig {
            expected_bake_time: default_expected_bake_time(),
            preparation_time_per_layer: default_preparation_time(),
        }
    }
}

impl Default for ReactorLimits {
    fn default() -> Self {
        ReactorLimits {
            safe_temperature: default_safe_temperature(),
            safe_neutrons_emitted: default_safe_neutrons(),
            safe_criticality_product: default_safe_product(),
            green_efficiency: default_green(),
            orange_efficiency: default_orange(),
            red_efficiency: default_red(),
            fail_safe_tolerance: default_tolerance(),
        }
    }
}

impl KitchenConfig {
    pub fn validate(&self) -> DrillResult<()> {
        if self.expected_bake_time < 0 {
            return Err(DrillError::ConfigError(format!(
                "expected_bake_time must be non-negative, got {}",
                self.expected_bake_time
            )));
        }
        if self.preparation_time_per_layer < 0 {
            return Err(DrillError::ConfigError(format!(
                "preparation_time_per_layer must be non-negative, got {}",
                self.preparation_time_per_layer
            )));
        }
        Ok(())
    }
}

impl ReactorLimits {
    pub fn validate(&self) -> DrillResult<()> {
        let named = [
            ("safe_temperature", self.safe_temperature),
            ("safe_neutrons_emitted", self.safe_neutrons_emitted),
            ("safe_criticality_product", self.safe_criticality_product),
            ("green_efficiency", self.green_efficiency),
            ("orange_efficiency", self.orange_efficiency),
            ("red_efficiency", self.red_efficiency),
            ("fail_safe_tolerance", self.fail_safe_tolerance),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(DrillError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.red_efficiency <= 0.0 {
            return Err(DrillError::ConfigError(format!(
                "red_efficiency must be positive, got {}",
                self.red_efficiency
            )));
        }
        if !(self.green_efficiency > self.orange_efficiency
            && self.orange_efficiency > self.red_efficiency)
        {
            return Err(DrillError::ConfigError(format!(
                "efficiency floors must be strictly descending: green={} orange={} red={}",
                self.green_efficiency, self.orange_efficiency, self.red_efficiency
            )));
        }
        if !(0.0..1.0).contains(&self.fail_safe_tolerance) {
            return Err(DrillError::ConfigError(format!(
                "fail_safe_tolerance must be in [0, 1), got {}",
                self.fail_safe_tolerance
            )));
        }
        Ok(())
    }
}

impl DrillConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> DrillResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        debug!(path, bytes = contents.len(), "loading drill config");
        Self::from_json_str(&contents)
    }

    /// Parse JSON text and validate.
    pub fn from_json_str(json: &str) -> DrillResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DrillResult<()> {
        self.kitchen.validate()?;
        self.reactor.validate()
    }
}

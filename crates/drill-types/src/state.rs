// ─────────────────────────────────────────────────────────────────────
// Practice Drills — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// Efficiency zone of a reactor, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyBand {
    Green,
    Orange,
    Red,
    Black,
}

impl EfficiencyBand {
    pub const ALL: [EfficiencyBand; 4] = [
        EfficiencyBand::Green,
        EfficiencyBand::Orange,
        EfficiencyBand::Red,
        EfficiencyBand::Black,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EfficiencyBand::Green => "green",
            EfficiencyBand::Orange => "orange",
            EfficiencyBand::Red => "red",
            EfficiencyBand::Black => "black",
        }
    }
}

impl fmt::Display for EfficiencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EfficiencyBand {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EfficiencyBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| DrillError::UnknownLabel(s.to_string()))
    }
}

/// Fail-safe status code for the reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Low,
    Normal,
    Danger,
}

impl SafetyStatus {
    pub const ALL: [SafetyStatus; 3] = [
        SafetyStatus::Low,
        SafetyStatus::Normal,
        SafetyStatus::Danger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyStatus::Low => "LOW",
            SafetyStatus::Normal => "NORMAL",
            SafetyStatus::Danger => "DANGER",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyStatus {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SafetyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DrillError::UnknownLabel(s.to_string()))
    }
}

/// Core temperature [K] and neutron flux [1/s] sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorReading {
    pub temperature: f64,
    pub neutrons_per_second: f64,
}

impl ReactorReading {
    pub fn new(temperature: f64, neutrons_per_second: f64) -> Self {
        ReactorReading {
            temperature,
            neutrons_per_second,
        }
    }

    /// Temperature × neutron flux.
    pub fn power(&self) -> f64 {
        self.temperature * self.neutrons_per_second
    }
}

/// Electrical output against the power that corresponds to 100% efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerReading {
    pub voltage: f64,
    pub current: f64,
    pub theoretical_max_power: f64,
}

impl PowerReading {
    pub fn new(voltage: f64, current: f64, theoretical_max_power: f64) -> Self {
        PowerReading {
            voltage,
            current,
            theoretical_max_power,
        }
    }

    pub fn generated_power(&self) -> f64 {
        self.voltage * self.current
    }

    /// (generated / theoretical max) × 100. Not clamped: overdriven
    /// reactors report above 100, a zero max power gives ∞ or NaN.
    pub fn efficiency_percent(&self) -> f64 {
        (self.generated_power() / self.theoretical_max_power) * 100.0
    }
}

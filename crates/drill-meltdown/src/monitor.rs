// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Reactor Monitor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Configurable monitor running all three reactor checks.

use serde::Serialize;
use tracing::debug;

use drill_types::config::ReactorLimits;
use drill_types::error::{ensure_finite, DrillResult};
use drill_types::state::{EfficiencyBand, PowerReading, ReactorReading, SafetyStatus};

use crate::criticality::is_balanced_within;
use crate::efficiency::{classify_efficiency, validate_power};
use crate::fail_safe::classify_power;

/// Outcome of one monitoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReactorAssessment {
    pub balanced: bool,
    pub efficiency: EfficiencyBand,
    pub status: SafetyStatus,
}

/// Reactor checks bound to a set of limits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReactorMonitor {
    pub limits: ReactorLimits,
}

impl ReactorMonitor {
    /// Validated limits.
    pub fn new(limits: ReactorLimits) -> DrillResult<Self> {
        limits.validate()?;
        Ok(ReactorMonitor { limits })
    }

    pub fn is_criticality_balanced(&self, reading: &ReactorReading) -> bool {
        let balanced =
            is_balanced_within(&self.limits, reading.temperature, reading.neutrons_per_second);
        debug!(
            temperature = reading.temperature,
            neutrons = reading.neutrons_per_second,
            balanced,
            "criticality check"
        );
        balanced
    }

    pub fn reactor_efficiency(&self, power: &PowerReading) -> EfficiencyBand {
        let efficiency = power.efficiency_percent();
        let band = classify_efficiency(&self.limits, efficiency);
        debug!(efficiency, band = %band, "efficiency check");
        band
    }

    pub fn fail_safe(&self, reading: &ReactorReading, threshold: f64) -> SafetyStatus {
        let power = reading.power();
        let status = classify_power(&self.limits, power, threshold);
        debug!(power, threshold, status = %status, "fail-safe check");
        status
    }

    /// Run every check on one sample. Rejects non-finite readings, a
    /// non-finite threshold and a non-positive max power.
    pub fn assess(
        &self,
        reading: &ReactorReading,
        power: &PowerReading,
        threshold: f64,
    ) -> DrillResult<ReactorAssessment> {
        ensure_finite("temperature", reading.temperature)?;
        ensure_finite("neutrons_per_second", reading.neutrons_per_second)?;
        ensure_finite("threshold", threshold)?;
        let power = validate_power(*power)?;

        Ok(ReactorAssessment {
            balanced: self.is_criticality_balanced(reading),
            efficiency: self.reactor_efficiency(&power),
            status: self.fail_safe(reading, threshold),
        })
    }
}

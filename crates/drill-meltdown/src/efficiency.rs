// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Efficiency
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reactor efficiency bands.
//!
//! efficiency = (voltage × current / theoretical_max_power) × 100
//!
//! | band   | efficiency [%] |
//! |--------|----------------|
//! | green  | ≥ 80           |
//! | orange | [60, 80)       |
//! | red    | [30, 60)       |
//! | black  | otherwise      |

use drill_types::config::ReactorLimits;
use drill_types::error::{ensure_finite, DrillError, DrillResult};
use drill_types::state::{EfficiencyBand, PowerReading};

/// Stock-limit efficiency band.
pub fn reactor_efficiency(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> EfficiencyBand {
    let reading = PowerReading::new(voltage, current, theoretical_max_power);
    classify_efficiency(&ReactorLimits::default(), reading.efficiency_percent())
}

/// Checked variant: finite inputs and a strictly positive max power.
pub fn try_reactor_efficiency(
    voltage: f64,
    current: f64,
    theoretical_max_power: f64,
) -> DrillResult<EfficiencyBand> {
    let reading = validate_power(PowerReading::new(voltage, current, theoretical_max_power))?;
    Ok(classify_efficiency(
        &ReactorLimits::default(),
        reading.efficiency_percent(),
    ))
}

/// Map an efficiency percentage onto a band. NaN falls through to black.
pub fn classify_efficiency(limits: &ReactorLimits, efficiency: f64) -> EfficiencyBand {
    if efficiency >= limits.green_efficiency {
        EfficiencyBand::Green
    } else if efficiency >= limits.orange_efficiency {
        EfficiencyBand::Orange
    } else if efficiency >= limits.red_efficiency {
        EfficiencyBand::Red
    } else {
        EfficiencyBand::Black
    }
}

pub(crate) fn validate_power(reading: PowerReading) -> DrillResult<PowerReading> {
    ensure_finite("voltage", reading.voltage)?;
    ensure_finite("current", reading.current)?;
    ensure_finite("theoretical_max_power", reading.theoretical_max_power)?;
    if reading.theoretical_max_power <= 0.0 {
        return Err(DrillError::InvalidInput(format!(
            "theoretical_max_power must be positive, got {}",
            reading.theoretical_max_power
        )));
    }
    Ok(reading)
}

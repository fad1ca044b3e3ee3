// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Fail Safe
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fail-safe status from temperature × neutron flux against a threshold.

use drill_types::config::ReactorLimits;
use drill_types::state::{ReactorReading, SafetyStatus};

/// LOW below 90% of `threshold`, NORMAL within ±10% (inclusive), DANGER otherwise.
pub fn fail_safe(
    temperature: f64,
    neutrons_produced_per_second: f64,
    threshold: f64,
) -> SafetyStatus {
    let reading = ReactorReading::new(temperature, neutrons_produced_per_second);
    classify_power(&ReactorLimits::default(), reading.power(), threshold)
}

/// Band `power` around `threshold` with the configured tolerance.
/// NaN power lands in DANGER.
pub fn classify_power(limits: &ReactorLimits, power: f64, threshold: f64) -> SafetyStatus {
    let lower = threshold * (1.0 - limits.fail_safe_tolerance);
    let upper = threshold * (1.0 + limits.fail_safe_tolerance);
    if power < lower {
        SafetyStatus::Low
    } else if lower <= power && power <= upper {
        SafetyStatus::Normal
    } else {
        SafetyStatus::Danger
    }
}

// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Criticality
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Criticality balance.
//!
//! Balanced when all three hold, each bound exclusive:
//! - temperature below 800 K
//! - more than 500 neutrons emitted per second
//! - temperature × neutrons below 500 000

use drill_types::config::ReactorLimits;

/// Stock-limit criticality check.
pub fn is_criticality_balanced(temperature: f64, neutrons_emitted: f64) -> bool {
    is_balanced_within(&ReactorLimits::default(), temperature, neutrons_emitted)
}

/// Criticality check against custom limits. NaN readings are never balanced.
pub fn is_balanced_within(limits: &ReactorLimits, temperature: f64, neutrons_emitted: f64) -> bool {
    let temperature_ok = temperature < limits.safe_temperature;
    let neutrons_ok = neutrons_emitted > limits.safe_neutrons_emitted;
    let product_ok = temperature * neutrons_emitted < limits.safe_criticality_product;
    temperature_ok && neutrons_ok && product_ok
}

// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Minutes a lasagna bakes in the oven.
pub const EXPECTED_BAKE_TIME: i64 = 40;

/// Minutes of preparation per lasagna layer.
pub const PREPARATION_TIME: i64 = 2;

/// Criticality requires temperature strictly below this (K).
pub const SAFE_TEMPERATURE: f64 = 800.0;

/// Criticality requires neutron emission strictly above this (per second).
pub const SAFE_NEUTRONS_EMITTED: f64 = 500.0;

/// Criticality requires temperature × neutrons strictly below this.
pub const SAFE_CRITICALITY_PRODUCT: f64 = 500_000.0;

/// Efficiency floors (percent) for the green, orange and red bands.
/// Anything below the red floor is black.
pub const GREEN_EFFICIENCY: f64 = 80.0;
pub const ORANGE_EFFICIENCY: f64 = 60.0;
pub const RED_EFFICIENCY: f64 = 30.0;

/// Relative half-width of the NORMAL fail-safe band around the threshold.
pub const FAIL_SAFE_TOLERANCE: f64 = 0.1;

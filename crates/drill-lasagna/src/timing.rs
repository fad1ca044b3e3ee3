// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Timing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bake and preparation times, in minutes.

use drill_types::config::KitchenConfig;
use drill_types::constants::{EXPECTED_BAKE_TIME, PREPARATION_TIME};
use drill_types::error::{DrillError, DrillResult};
use tracing::debug;

/// Minutes left in the oven. Negative once the lasagna is over-baked.
///
/// The free functions use plain `i64` arithmetic and panic on overflow in
/// debug builds. Use [`Kitchen::try_elapsed_time_in_minutes`] for untrusted input.
pub fn bake_time_remaining(elapsed_bake_time: i64) -> i64 {
    EXPECTED_BAKE_TIME - elapsed_bake_time
}

/// Minutes needed to assemble `number_of_layers` layers.
/// `number_of_layers` must stay within `i64::MAX / 2` in magnitude.
pub fn preparation_time_in_minutes(number_of_layers: i64) -> i64 {
    number_of_layers * PREPARATION_TIME
}

/// Total minutes spent so far: preparation plus time already in the oven.
pub fn elapsed_time_in_minutes(number_of_layers: i64, elapsed_bake_time: i64) -> i64 {
    preparation_time_in_minutes(number_of_layers) + elapsed_bake_time
}

/// Timing calculator for a custom recipe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kitchen {
    pub config: KitchenConfig,
}

impl Kitchen {
    /// Validated recipe.
    pub fn new(config: KitchenConfig) -> DrillResult<Self> {
        config.validate()?;
        Ok(Kitchen { config })
    }

    pub fn bake_time_remaining(&self, elapsed_bake_time: i64) -> i64 {
        self.config.expected_bake_time - elapsed_bake_time
    }

    pub fn preparation_time_in_minutes(&self, number_of_layers: i64) -> i64 {
        number_of_layers * self.config.preparation_time_per_layer
    }

    pub fn elapsed_time_in_minutes(&self, number_of_layers: i64, elapsed_bake_time: i64) -> i64 {
        self.preparation_time_in_minutes(number_of_layers) + elapsed_bake_time
    }

    /// Like [`Kitchen::elapsed_time_in_minutes`], but rejects negative inputs
    /// and arithmetic overflow instead of returning a meaningless total.
    pub fn try_elapsed_time_in_minutes(
        &self,
        number_of_layers: i64,
        elapsed_bake_time: i64,
    ) -> DrillResult<i64> {
        if number_of_layers < 0 {
            return Err(DrillError::InvalidInput(format!(
                "number_of_layers must be non-negative, got {number_of_layers}"
            )));
        }
        if elapsed_bake_time < 0 {
            return Err(DrillError::InvalidInput(format!(
                "elapsed_bake_time must be non-negative, got {elapsed_bake_time}"
            )));
        }
        let total = number_of_layers
            .checked_mul(self.config.preparation_time_per_layer)
            .and_then(|prep| prep.checked_add(elapsed_bake_time))
            .ok_or_else(|| {
                DrillError::InvalidInput(format!(
                    "elapsed time overflows for {number_of_layers} layers"
                ))
            })?;
        debug!(number_of_layers, elapsed_bake_time, total, "elapsed kitchen time");
        Ok(total)
    }
}

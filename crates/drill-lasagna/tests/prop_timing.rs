// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Property-Based Tests (proptest) for drill-lasagna
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lasagna timing.

use drill_lasagna::{
    bake_time_remaining, elapsed_time_in_minutes, preparation_time_in_minutes, Kitchen,
};
use drill_types::config::KitchenConfig;
use proptest::prelude::*;

proptest! {
    /// Remaining plus elapsed is always the full bake time.
    #[test]
    fn remaining_plus_elapsed_is_constant(elapsed in -1000i64..1000) {
        prop_assert_eq!(bake_time_remaining(elapsed) + elapsed, 40);
    }

    /// Each extra layer costs exactly two minutes.
    #[test]
    fn preparation_linear_in_layers(layers in 0i64..10_000) {
        prop_assert_eq!(
            preparation_time_in_minutes(layers + 1) - preparation_time_in_minutes(layers),
            2
        );
    }

    /// Elapsed time decomposes into preparation plus bake.
    #[test]
    fn elapsed_decomposes(layers in 0i64..10_000, elapsed in 0i64..10_000) {
        prop_assert_eq!(
            elapsed_time_in_minutes(layers, elapsed),
            preparation_time_in_minutes(layers) + elapsed
        );
    }

    /// Checked path agrees with the plain one on valid input.
    #[test]
    fn checked_matches_plain(
        bake in 0i64..600,
        prep in 0i64..30,
        layers in 0i64..1000,
        elapsed in 0i64..1000,
    ) {
        let kitchen = Kitchen::new(KitchenConfig {
            expected_bake_time: bake,
            preparation_time_per_layer: prep,
        }).unwrap();
        prop_assert_eq!(
            kitchen.try_elapsed_time_in_minutes(layers, elapsed).unwrap(),
            kitchen.elapsed_time_in_minutes(layers, elapsed)
        );
        prop_assert_eq!(kitchen.bake_time_remaining(elapsed), bake - elapsed);
    }
}

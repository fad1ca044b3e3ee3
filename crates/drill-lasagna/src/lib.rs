// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Lasagna
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cooking-time arithmetic for a layered lasagna.
//!
//! Free functions use the stock recipe; [`timing::Kitchen`] takes a custom one.

pub mod timing;

pub use timing::{
    bake_time_remaining, elapsed_time_in_minutes, preparation_time_in_minutes, Kitchen,
};

// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Meltdown Mitigation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Safety checks for a toy reactor.
//!
//! Criticality balance, efficiency banding, fail-safe status, and a
//! configurable monitor bundling all three.

pub mod criticality;
pub mod efficiency;
pub mod fail_safe;
pub mod monitor;

pub use criticality::is_criticality_balanced;
pub use efficiency::{reactor_efficiency, try_reactor_efficiency};
pub use fail_safe::fail_safe;
pub use monitor::{ReactorAssessment, ReactorMonitor};

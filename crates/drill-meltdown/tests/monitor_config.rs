// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Monitor From Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end: JSON config → monitor → assessment, with tracing enabled.

use drill_meltdown::ReactorMonitor;
use drill_types::config::DrillConfig;
use drill_types::state::{EfficiencyBand, PowerReading, ReactorReading, SafetyStatus};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_stock_config_reproduces_reference_cases() {
    init_tracing();
    let cfg = DrillConfig::from_json_str("{}").unwrap();
    let monitor = ReactorMonitor::new(cfg.reactor).unwrap();

    assert!(monitor.is_criticality_balanced(&ReactorReading::new(750.0, 600.0)));
    assert!(!monitor.is_criticality_balanced(&ReactorReading::new(800.0, 600.0)));
    assert!(!monitor.is_criticality_balanced(&ReactorReading::new(750.0, 400.0)));

    assert_eq!(
        monitor.reactor_efficiency(&PowerReading::new(10.0, 10.0, 125.0)),
        EfficiencyBand::Green
    );
    assert_eq!(
        monitor.reactor_efficiency(&PowerReading::new(10.0, 8.0, 200.0)),
        EfficiencyBand::Red
    );

    assert_eq!(monitor.fail_safe(&ReactorReading::new(10.0, 5.0), 100.0), SafetyStatus::Low);
    assert_eq!(monitor.fail_safe(&ReactorReading::new(10.0, 10.0), 100.0), SafetyStatus::Normal);
    assert_eq!(monitor.fail_safe(&ReactorReading::new(10.0, 20.0), 100.0), SafetyStatus::Danger);
}

#[test]
fn test_tightened_config_changes_verdicts() {
    init_tracing();
    let cfg = DrillConfig::from_json_str(
        r#"{
            "reactor": {
                "safe_temperature": 700.0,
                "green_efficiency": 95.0,
                "orange_efficiency": 85.0,
                "red_efficiency": 50.0,
                "fail_safe_tolerance": 0.02
            }
        }"#,
    )
    .unwrap();
    let monitor = ReactorMonitor::new(cfg.reactor).unwrap();

    let assessment = monitor
        .assess(
            &ReactorReading::new(750.0, 600.0),
            &PowerReading::new(10.0, 10.0, 125.0),
            420_000.0,
        )
        .unwrap();
    assert!(!assessment.balanced, "750 K exceeds the 700 K ceiling");
    assert_eq!(assessment.efficiency, EfficiencyBand::Red);
    assert_eq!(assessment.status, SafetyStatus::Danger);
}

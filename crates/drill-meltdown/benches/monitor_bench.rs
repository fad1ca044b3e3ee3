// ─────────────────────────────────────────────────────────────────────
// Practice Drills — Reactor Monitor Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use drill_meltdown::{fail_safe, is_criticality_balanced, reactor_efficiency, ReactorMonitor};
use drill_types::state::{PowerReading, ReactorReading};
use std::hint::black_box;

fn bench_free_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("reactor_checks");

    group.bench_function("criticality", |b| {
        b.iter(|| black_box(is_criticality_balanced(black_box(750.0), black_box(600.0))))
    });
    group.bench_function("efficiency", |b| {
        b.iter(|| black_box(reactor_efficiency(black_box(10.0), black_box(8.0), black_box(200.0))))
    });
    group.bench_function("fail_safe", |b| {
        b.iter(|| black_box(fail_safe(black_box(10.0), black_box(10.0), black_box(100.0))))
    });

    group.finish();
}

fn bench_assess(c: &mut Criterion) {
    let monitor = ReactorMonitor::default();
    let reading = ReactorReading::new(750.0, 600.0);
    let power = PowerReading::new(10.0, 10.0, 125.0);

    c.bench_function("monitor_assess", |b| {
        b.iter(|| {
            let assessment = monitor
                .assess(black_box(&reading), black_box(&power), black_box(450_000.0))
                .expect("finite readings");
            black_box(assessment);
        })
    });
}

criterion_group!(benches, bench_free_checks, bench_assess);
criterion_main!(benches);

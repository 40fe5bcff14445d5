//! Criterion benchmarks for the streak scan.
//!
//! Run with: `cargo bench -p streaklab-runner`
//!
//! Measures the sequential and rayon scans over synthetic tables of
//! KOSPI-like size (about 950 listed companies, one trading year).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streaklab_core::{aggregate, rank, scan_par, scan_with_policy, MissingPolicy, StreakLength};
use streaklab_runner::synthetic_table;

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("streak_scan");
    let n = StreakLength::new(3).unwrap();

    for companies in [100, 950, 4000].iter() {
        let loaded = synthetic_table(*companies, 250, 42).unwrap();

        group.bench_with_input(
            BenchmarkId::new("sequential", companies),
            companies,
            |b, _| {
                b.iter(|| scan_with_policy(black_box(&loaded.table), n, MissingPolicy::Drop));
            },
        );
        group.bench_with_input(BenchmarkId::new("parallel", companies), companies, |b, _| {
            b.iter(|| scan_par(black_box(&loaded.table), n, MissingPolicy::Drop));
        });
    }

    group.finish();
}

fn bench_aggregate_and_rank(c: &mut Criterion) {
    let loaded = synthetic_table(950, 250, 42).unwrap();
    let n = StreakLength::new(3).unwrap();
    let events = scan_with_policy(&loaded.table, n, MissingPolicy::Drop).unwrap();

    c.bench_function("aggregate_and_rank_950", |b| {
        b.iter(|| {
            let summary = aggregate(black_box(&events));
            let ranked = rank(black_box(&events));
            (summary, ranked)
        });
    });
}

criterion_group!(benches, bench_scan, bench_aggregate_and_rank);
criterion_main!(benches);

//! Benchmarks for the launch query engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launch_dash::dataset::{Dataset, LaunchRecord, Outcome};
use launch_dash::query::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i * 37 % 10_000) as f64,
                outcome,
                BOOSTERS[i % BOOSTERS.len()],
            )
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_by_site");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_{}", size), |b| {
            b.iter(|| aggregate_by_site(black_box(&dataset), &SiteSelector::All))
        });

        let site = SiteSelector::site("KSC LC-39A");
        group.bench_function(format!("site_{}", size), |b| {
            b.iter(|| aggregate_by_site(black_box(&dataset), &site))
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_by_payload_and_site");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let range = PayloadRange::new(2000.0, 6000.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_{}", size), |b| {
            b.iter(|| select_by_payload_and_site(black_box(&dataset), &SiteSelector::All, range))
        });
    }

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    let dataset = create_test_dataset(1000);

    group.bench_function("by_site_1000", |b| {
        b.iter(|| success_rate_by_site(black_box(&dataset)))
    });

    group.bench_function("by_payload_bucket_1000", |b| {
        b.iter(|| success_rate_by_payload_bucket(black_box(&dataset), 1000.0).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_select, bench_stats);
criterion_main!(benches);

//! Descriptive statistics benchmarks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mbakit_bench::age_sample;
use mbakit_stats::DescriptiveStats;

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_new");

    for len in [25, 1_000, 100_000] {
        let sample = age_sample(len);

        group.bench_with_input(BenchmarkId::from_parameter(len), &sample, |b, sample| {
            b.iter(|| black_box(DescriptiveStats::new(black_box(sample))));
        });
    }

    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_describe");

    for len in [25, 1_000, 100_000] {
        let stats = match DescriptiveStats::new(&age_sample(len)) {
            Ok(stats) => stats,
            Err(e) => panic!("generated sample rejected: {e}"),
        };

        group.bench_with_input(BenchmarkId::from_parameter(len), &stats, |b, stats| {
            b.iter(|| black_box(stats.describe()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct, bench_describe);
criterion_main!(benches);

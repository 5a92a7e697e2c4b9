//! Benchmark for sequence helpers: zip3, times_with, dump, and naturals.
//!
//! Compares the adaptors against hand-written loops over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::sequence::{dump, naturals, times_with, zip3};
use std::hint::black_box;

// =============================================================================
// zip3 Benchmarks
// =============================================================================

fn benchmark_zip3(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip3");

    for size in [100, 1_000, 10_000] {
        let first: Vec<u64> = (0..size).collect();
        let second: Vec<u64> = (0..size).rev().collect();
        let third: Vec<u64> = (0..size).map(|value| value * 3).collect();

        group.bench_with_input(BenchmarkId::new("zip3", size), &size, |bencher, _| {
            bencher.iter(|| {
                zip3(&first, &second, &third)
                    .map(|(a, b, c)| a + b + c)
                    .sum::<u64>()
            });
        });

        group.bench_with_input(BenchmarkId::new("nested_zip", size), &size, |bencher, _| {
            bencher.iter(|| {
                first
                    .iter()
                    .zip(&second)
                    .zip(&third)
                    .map(|((a, b), c)| a + b + c)
                    .sum::<u64>()
            });
        });
    }

    group.finish();
}

// =============================================================================
// times_with / naturals Benchmarks
// =============================================================================

fn benchmark_generators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("generators");

    group.bench_function("times_with_collect_1000", |bencher| {
        bencher.iter(|| times_with(black_box(1_000), || 7_u32).collect::<Vec<_>>());
    });

    group.bench_function("naturals_sum_1000", |bencher| {
        bencher.iter(|| naturals().take(black_box(1_000)).sum::<u64>());
    });

    group.finish();
}

// =============================================================================
// dump Benchmarks
// =============================================================================

fn benchmark_dump(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dump");

    for size in [10, 100, 1_000] {
        let values: Vec<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("integers", size), &values, |bencher, values| {
            bencher.iter(|| dump(black_box(values)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_zip3,
    benchmark_generators,
    benchmark_dump
);
criterion_main!(benches);

//! Benchmark for integer helpers and fixed-point iteration.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::combinator::saturate;
use fnkit::numeric::{checked_factorial, curried, factorial, quotient_remainder};
use std::hint::black_box;

fn benchmark_factorial(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("factorial");

    for n in [5_i64, 12, 20] {
        group.bench_with_input(BenchmarkId::new("wrapping", n), &n, |bencher, &n| {
            bencher.iter(|| factorial(black_box(n)));
        });
        group.bench_with_input(BenchmarkId::new("checked", n), &n, |bencher, &n| {
            bencher.iter(|| checked_factorial(black_box(n)));
        });
    }

    group.finish();
}

fn benchmark_division(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("division");

    group.bench_function("quotient_remainder_1000", |bencher| {
        bencher.iter(|| {
            (1..=1_000_i64)
                .filter_map(|divisor| quotient_remainder(black_box(1_000_003), divisor).ok())
                .map(|(quotient, remainder)| quotient + remainder)
                .sum::<i64>()
        });
    });

    group.bench_function("curried_divide_1000", |bencher| {
        let divide_by_seven = curried::divide(7_i64);
        bencher.iter(|| {
            (0..1_000_i64)
                .map(divide_by_seven)
                .filter_map(Result::ok)
                .sum::<i64>()
        });
    });

    group.finish();
}

fn benchmark_saturate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("saturate");

    for target in [1_000_u64, 1_000_000, 1_000_000_000_000] {
        group.bench_with_input(
            BenchmarkId::new("newton_isqrt", target),
            &target,
            |bencher, &target| {
                bencher.iter(|| {
                    saturate(black_box(target), |&guess: &u64| {
                        let next = (guess + target / guess) / 2;
                        if next >= guess { guess } else { next }
                    })
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_factorial,
    benchmark_division,
    benchmark_saturate
);
criterion_main!(benches);

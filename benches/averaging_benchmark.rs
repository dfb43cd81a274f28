// ============================================================================
// Averaging Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Pairwise - `average` across the supported numeric families
// 2. Policy - IEEE vs. strict non-finite checking
// 3. Slice Mean - `mean_of` over growing slices
// ============================================================================

use bounded_box::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Pairwise Benchmarks
// ============================================================================

fn benchmark_pairwise_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_average");

    let ints = (NumberBox::with_value(2i64), NumberBox::with_value(4i64));
    group.bench_function("i64", |b| {
        b.iter(|| black_box(black_box(&ints.0).average(black_box(&ints.1))))
    });

    let floats = (NumberBox::with_value(5.0f64), NumberBox::with_value(8.0f64));
    group.bench_function("f64", |b| {
        b.iter(|| black_box(black_box(&floats.0).average(black_box(&floats.1))))
    });

    let decimals = (
        NumberBox::with_value(Decimal::new(5_000_025, 2)),
        NumberBox::with_value(Decimal::new(4_999_975, 2)),
    );
    group.bench_function("decimal", |b| {
        b.iter(|| black_box(black_box(&decimals.0).average(black_box(&decimals.1))))
    });

    group.finish();
}

// ============================================================================
// Policy Benchmarks
// ============================================================================

fn benchmark_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_policy");
    let a = NumberBox::with_value(1.25f64);
    let b = NumberBox::with_value(3.75f64);

    for config in [AverageConfig::default(), AverageConfig::strict()] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", config.policy)),
            &config,
            |bench, config| bench.iter(|| black_box(a.average_with(&b, config))),
        );
    }

    group.finish();
}

// ============================================================================
// Slice Mean Benchmarks
// ============================================================================

fn benchmark_mean_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_of");

    for len in [10u32, 100, 1000].iter() {
        let boxes: Vec<NumberBox<u32>> = (0..*len).map(NumberBox::with_value).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &boxes, |b, boxes| {
            b.iter(|| black_box(NumberBox::mean_of(black_box(boxes.as_slice()))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pairwise_average,
    benchmark_policy,
    benchmark_mean_of,
);
criterion_main!(benches);

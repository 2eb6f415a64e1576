//! Calculator benchmarks.
//!
//! Benchmarks: end-to-end calculation over the default catalog at small,
//! mid-range, and clamped quantities.
//! Run with: cargo bench -p packer-graph --bench calculator_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use packer_graph::GraphPackCalculator;

const STANDARD: [u32; 5] = [250, 500, 1000, 2000, 5000];

fn calculate_standard_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_standard_catalog");
    group.sample_size(20);

    let calc = GraphPackCalculator::new(STANDARD);

    for quantity in [12_001_i64, 250_001, 600_001, 1_000_000_000] {
        group.bench_with_input(
            BenchmarkId::new("calculate", quantity),
            &quantity,
            |b, &quantity| {
                b.iter(|| calc.calculate(quantity));
            },
        );
    }

    group.finish();
}

fn calculate_coprime_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_coprime_catalog");
    group.sample_size(20);

    let calc = GraphPackCalculator::new([23, 31, 53]);

    for quantity in [263_i64, 5_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::new("calculate", quantity),
            &quantity,
            |b, &quantity| {
                b.iter(|| calc.calculate(quantity));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, calculate_standard_catalog, calculate_coprime_catalog);
criterion_main!(benches);

//! Criterion benchmarks for the reduction and selection-sort kernels.
//!
//! Benchmarks cover:
//! - Sequential vs. parallel average and min/max across buffer sizes
//! - Sequential vs. parallel selection sort (small sizes; the sort is
//!   O(n^2) in both modes)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastArrayops::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

fn uniform_buffer(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..100_000)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_average(c: &mut Criterion) {
    let seq = Reduction::new().mode(Sequential).build().unwrap();
    let par = Reduction::new().build().unwrap();

    let mut group = c.benchmark_group("average");
    for &size in &[10_000usize, 100_000, 1_000_000, 5_000_000] {
        let data = uniform_buffer(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, d| {
            b.iter(|| seq.average(black_box(d)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, d| {
            b.iter(|| par.average(black_box(d)).unwrap())
        });
    }
    group.finish();
}

fn bench_min_max(c: &mut Criterion) {
    let seq = Reduction::new().mode(Sequential).build().unwrap();
    let par = Reduction::new().build().unwrap();

    let mut group = c.benchmark_group("min_max");
    for &size in &[10_000usize, 100_000, 1_000_000] {
        let data = uniform_buffer(size, 43);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, d| {
            b.iter(|| seq.min_max(black_box(d)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, d| {
            b.iter(|| par.min_max(black_box(d)).unwrap())
        });
    }
    group.finish();
}

fn bench_selection_sort(c: &mut Criterion) {
    let seq = SelectionSort::new().mode(Sequential).build().unwrap();
    let par = SelectionSort::new().build().unwrap();

    let mut group = c.benchmark_group("selection_sort");
    group.sample_size(10);
    for &size in &[1_000usize, 4_000] {
        let data = uniform_buffer(size, 44);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, d| {
            b.iter_batched(
                || d.clone(),
                |mut buf| seq.sort(black_box(&mut buf)),
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, d| {
            b.iter_batched(
                || d.clone(),
                |mut buf| par.sort(black_box(&mut buf)),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_average, bench_min_max, bench_selection_sort);
criterion_main!(benches);

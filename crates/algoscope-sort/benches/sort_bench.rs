//! Benchmarks for traced sorting
//!
//! Tracing snapshots the array on every step, so cost grows with
//! steps × length. These measure:
//! - Trace generation per algorithm
//! - Scaling with input size

use algoscope_engine::input::random_collection;
use algoscope_sort::{trace, SortAlgorithm};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark each algorithm on the same 32-element input
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_32");
    let values = random_collection(32, 0, 999, 42).unwrap_or_default();

    for algorithm in SortAlgorithm::ALL {
        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &values,
            |b, values| b.iter(|| trace(algorithm, black_box(values))),
        );
    }
    group.finish();
}

/// Benchmark quicksort tracing as the input grows
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_scaling");

    for &len in &[8usize, 16, 32, 64] {
        let values = random_collection(len, 0, 999, 7).unwrap_or_default();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| trace(SortAlgorithm::Quick, black_box(values)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_scaling);
criterion_main!(benches);

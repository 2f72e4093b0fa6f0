//! Criterion benchmarks for generation and partitioning.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use phonegen_core::observers::NoOpObserver;
use phonegen_core::{write_batches, MemorySink, NumberGenerator};

fn bench_generate(c: &mut Criterion) {
    let generator = NumberGenerator::default();
    let quantities: Vec<usize> = vec![1_000, 10_000, 100_000];

    let mut group = c.benchmark_group("generate");
    for &quantity in &quantities {
        group.bench_with_input(
            BenchmarkId::from_parameter(quantity),
            &quantity,
            |b, &quantity| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| generator.generate(quantity, &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_write_batches(c: &mut Criterion) {
    let generator = NumberGenerator::default();
    let numbers = generator
        .generate(100_000, &mut StdRng::seed_from_u64(0))
        .unwrap();

    let mut group = c.benchmark_group("write_batches");
    for &batch_size in &[500usize, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    let mut sink = MemorySink::new();
                    write_batches(&numbers, batch_size, &mut sink, &NoOpObserver).unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_write_batches);
criterion_main!(benches);

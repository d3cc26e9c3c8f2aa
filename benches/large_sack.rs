//! Benchmark: a single large knapsack instance.
//!
//! Run with:
//! `cargo bench`
//!
//! This is mainly to sanity-check overheads on decision tables far larger
//! than any cache, where the fill is memory-bound.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knap_dp::{KnapsackInstance, KnapsackSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_instance(rng: &mut StdRng, n: usize, capacity: u32) -> KnapsackInstance {
    let values: Vec<f64> = (0..n).map(|_| rng.gen_range(5.0..30.0)).collect();
    let weights: Vec<u32> = (0..n).map(|_| rng.gen_range(1..200)).collect();
    KnapsackInstance::new(values, weights, capacity).expect("bench instance must validate")
}

fn bench_large_instance(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_large");
    group.sample_size(10);

    // Example sizes; tune as needed for your machine.
    for &(n, capacity) in &[(8_192usize, 65_536u32), (8_192, 131_072)] {
        group.bench_function(format!("items_{n}_capacity_{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    random_instance(&mut rng, n, capacity)
                },
                |instance| {
                    let solution = KnapsackSolver::new(instance).solve();
                    criterion::black_box((solution.value, solution.items.len()));
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_large_instance);
criterion_main!(benches);

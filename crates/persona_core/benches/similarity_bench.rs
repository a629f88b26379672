use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use persona_core::{nearest_neighbors, rank_population, PersonaVector, ScoredEntry, TRAIT_COUNT};

fn synthetic_population(size: usize) -> Vec<PersonaVector> {
    (0..size)
        .map(|i| {
            let mut values = [0.0; TRAIT_COUNT];
            for (axis, slot) in values.iter_mut().enumerate() {
                let raw = ((i * 37 + axis * 11) % 101) as f64;
                *slot = if axis >= 12 { raw - 50.0 } else { raw };
            }
            PersonaVector::from_values(i as u64, values)
        })
        .collect()
}

fn bench_nearest_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbors");
    for size in [100usize, 1_000, 10_000] {
        let population = synthetic_population(size);
        let target = population[size / 2];
        group.bench_with_input(BenchmarkId::from_parameter(size), &population, |b, pop| {
            b.iter(|| nearest_neighbors(black_box(&target), black_box(pop), 10))
        });
    }
    group.finish();
}

fn bench_rank_population(c: &mut Criterion) {
    let scored: Vec<ScoredEntry> = (0..10_000u64)
        .map(|i| ScoredEntry::new(i, ((i * 7919) % 1001) as f64 / 10.0))
        .collect();
    c.bench_function("rank_population_10k", |b| {
        b.iter(|| rank_population(black_box(&scored), None))
    });
}

criterion_group!(benches, bench_nearest_neighbors, bench_rank_population);
criterion_main!(benches);

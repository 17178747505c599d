//! Criterion benchmarks for the GA TSP solver.
//!
//! Uses random Euclidean instances to measure the cost of a full run and
//! of a single generation's worth of evolution at different instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_ga::{DistanceMatrix, Solver, SolverConfig, StopCondition};

fn random_instance(points: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let coordinates: Vec<(f64, f64)> = (0..points)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    DistanceMatrix::from_points(&coordinates).expect("at least 3 points")
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for &points in &[20, 50, 100] {
        let matrix = random_instance(points, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            &matrix,
            |b, matrix| {
                b.iter(|| {
                    let config = SolverConfig::default()
                        .with_population_size(50)
                        .with_stop_condition(StopCondition::Generations(100))
                        .with_seed(42)
                        .with_parallel(false);
                    let mut solver = Solver::new(config).unwrap();
                    solver.set_distances(black_box(matrix.clone()));
                    solver.run().unwrap();
                    black_box(solver.best_tour())
                })
            },
        );
    }
    group.finish();
}

fn bench_single_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_generation");
    group.sample_size(20);

    for &points in &[50, 200] {
        let matrix = random_instance(points, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            &matrix,
            |b, matrix| {
                let config = SolverConfig::default()
                    .with_population_size(100)
                    .with_stop_condition(StopCondition::Generations(1))
                    .with_seed(7)
                    .with_parallel(false);
                let mut solver = Solver::new(config).unwrap();
                solver.set_distances(matrix.clone());
                solver.run().unwrap(); // initialize before measuring

                b.iter(|| {
                    solver.run().unwrap();
                    black_box(solver.generations())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_single_generation);
criterion_main!(benches);

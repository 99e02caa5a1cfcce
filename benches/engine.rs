//! Benchmarks for the generation engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use grid_life::compute::{Engine, Grid, UpdateStrategy};

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [32, 128, 512, 1024] {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let grid = Grid::random(size, 0.5, &mut rng).unwrap();

        for strategy in [UpdateStrategy::Sequential, UpdateStrategy::Concurrent] {
            let engine = Engine::new(strategy, None).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), format!("{}x{}", size, size)),
                &grid,
                |b, grid| {
                    b.iter(|| engine.advance(black_box(grid)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_threads");
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let grid = Grid::random(512, 0.5, &mut rng).unwrap();

    for threads in [1, 2, 4, 8] {
        let engine = Engine::new(UpdateStrategy::Concurrent, Some(threads)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_threads", threads)),
            &threads,
            |b, _| {
                b.iter(|| engine.advance(black_box(&grid)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance, bench_threads);
criterion_main!(benches);

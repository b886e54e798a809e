//! Criterion benchmarks for the projection strategies.
//! Focus sizes: points per segment in {100, 1_000, 10_000}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trackfit::{compute_drawable_rect, project_segment, GeoPoint, Strategy};

fn random_walk(n: usize, seed: u64) -> Vec<GeoPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut p = GeoPoint::new(47.37, 8.54);
    (0..n)
        .map(|_| {
            p = GeoPoint::new(
                p.lat + rng.gen_range(-1e-4..1e-4),
                p.lon + rng.gen_range(-1e-4..1e-4),
            );
            p
        })
        .collect()
}

fn bench_project(c: &mut Criterion) {
    let canvas = compute_drawable_rect(4000, 3000, 0.75).unwrap();
    let mut group = c.benchmark_group("project_segment");
    for &n in &[100usize, 1_000, 10_000] {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |b, &n| {
                b.iter_batched(
                    || random_walk(n, 42),
                    |pts| {
                        let _out = project_segment(&pts, &canvas, &strategy).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_project);
criterion_main!(benches);

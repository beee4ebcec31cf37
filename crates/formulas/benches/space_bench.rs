//! Criterion benchmarks for the 3D geometry kernel.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use formulas::space::{self, Plane};
use formulas::SpaceCfg;
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vectors(n: usize, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        })
        .collect()
}

fn bench_space(c: &mut Criterion) {
    let cfg = SpaceCfg::default();
    let mut group = c.benchmark_group("space");

    group.bench_function("plane_from_points", |b| {
        b.iter_batched(
            || random_vectors(3, 41),
            |pts| {
                let _p = Plane::from_points(pts[0], pts[1], pts[2], cfg);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("project_onto_plane", |b| {
        b.iter_batched(
            || random_vectors(2, 42),
            |vs| {
                let _p = space::project_onto_plane(vs[0], vs[1], cfg);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("perpendicular_by_intersection", |b| {
        let p1 = Plane::new(0.0, 1.0, 0.0, 0.0);
        let p2 = Plane::new(0.0, 0.0, 1.0, 0.0);
        b.iter_batched(
            || random_vectors(1, 43),
            |vs| {
                let _r =
                    space::is_line_perpendicular_to_plane_by_intersection(vs[0], &p1, &p2, cfg);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_space);
criterion_main!(benches);

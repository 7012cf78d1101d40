//! Criterion benchmarks for the pole search.
//! Sizes are vertex counts of a jagged star-shaped ring, with and without a hole.

use std::f64::consts::TAU;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polylabel::geometry::{Polygon, Ring};
use polylabel::math::Point2;
use polylabel::Polylabel;

fn star(n: usize, radius: f64) -> Ring {
    Ring::new(
        (0..n)
            .map(|i| {
                let theta = TAU * i as f64 / n as f64;
                let r = if i % 2 == 0 { radius } else { radius * 0.6 };
                Point2::new(r * theta.cos(), r * theta.sin())
            })
            .collect(),
    )
}

fn bench_polylabel(c: &mut Criterion) {
    let mut group = c.benchmark_group("polylabel");
    for &n in &[16usize, 128, 1024] {
        let solid = Polygon::from_exterior(star(n, 100.0));
        group.bench_with_input(BenchmarkId::new("star", n), &solid, |b, polygon| {
            let op = Polylabel::new(0.1);
            b.iter(|| op.execute(black_box(polygon)));
        });

        let holed = Polygon::new(star(n, 100.0), vec![star(n / 2 + 3, 20.0)]);
        group.bench_with_input(
            BenchmarkId::new("star_with_hole", n),
            &holed,
            |b, polygon| {
                let op = Polylabel::new(0.1);
                b.iter(|| op.execute(black_box(polygon)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_polylabel);
criterion_main!(benches);

//! Criterion benchmarks for point-to-polyline distance.
//! Focus sizes: n in {4, 16, 64, 256} vertices.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use scrawl::geom::{distance_to_polyline, highest_leftmost_point, Point};
use scrawl::shapes::regular_polygon;

fn random_probes(m: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| point![rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0)])
        .collect()
}

fn bench_geom(c: &mut Criterion) {
    let mut group = c.benchmark_group("geom");
    let probes = random_probes(64, 43);
    for &n in &[4usize, 16, 64, 256] {
        let poly = regular_polygon(n, 10.0, 0.0).unwrap();
        group.bench_with_input(BenchmarkId::new("distance_to_polyline", n), &poly, |b, poly| {
            b.iter(|| {
                probes
                    .iter()
                    .map(|p| distance_to_polyline(p, poly))
                    .fold(0.0, f64::max)
            })
        });
        group.bench_with_input(BenchmarkId::new("highest_leftmost", n), &poly, |b, poly| {
            b.iter(|| highest_leftmost_point(poly.points()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geom);
criterion_main!(benches);

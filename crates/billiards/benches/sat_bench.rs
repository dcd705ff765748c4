//! Criterion benchmarks for separating-axis intersection tests.
//! Focus sizes: n-gon vertex counts in {4, 16, 64}.

use billiards::geom::{ConvexPolygon, LineSegment, Point, Rectangle};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Regular n-gon with random phase, centre and radius inside `[0, π/2]²`.
fn random_ngon(n: usize, rng: &mut StdRng) -> ConvexPolygon {
    let phase: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = rng.gen_range(0.05..0.3);
    let c = Point::new(rng.gen_range(0.3..1.2), rng.gen_range(0.3..1.2));
    let vertices = (0..n)
        .map(|k| {
            let th = phase + std::f64::consts::TAU * (k as f64) / (n as f64);
            c + Point::new(th.cos(), th.sin()) * r
        })
        .collect();
    ConvexPolygon::new(vertices).unwrap()
}

fn random_rect(rng: &mut StdRng) -> Rectangle {
    let x: f64 = rng.gen_range(0.0..1.4);
    let y: f64 = rng.gen_range(0.0..1.4);
    Rectangle::new(x, x + 0.15, y, y + 0.15)
}

fn bench_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat");
    for &n in &[4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("polygon_polygon", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(43);
            b.iter_batched(
                || (random_ngon(n, &mut rng), random_ngon(n, &mut rng)),
                |(p, q)| p.intersects_polygon(&q),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("polygon_rect", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(44);
            b.iter_batched(
                || (random_ngon(n, &mut rng), random_rect(&mut rng)),
                |(p, r)| p.intersects_rect(&r),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("segment_polygon", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(45);
            b.iter_batched(
                || {
                    let s = LineSegment::new(
                        Point::new(rng.gen_range(0.0..1.5), rng.gen_range(0.0..1.5)),
                        Point::new(rng.gen_range(0.0..1.5), rng.gen_range(0.0..1.5)),
                    );
                    (s, random_ngon(n, &mut rng))
                },
                |(s, p)| s.intersects_polygon(&p),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sat);
criterion_main!(benches);

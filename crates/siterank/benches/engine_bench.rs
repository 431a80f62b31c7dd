//! Criterion benchmarks for the siting engine.
//! Focus sizes: settlements in {100, 500, 2000} over a fixed region ring,
//! matching the county-level volumes the engine targets.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use siterank::geo::rand::{draw_ring_radial, scatter_in_ring, ReplayToken, RingCfg};
use siterank::prelude::*;

fn seeded_scene(
    settlements: usize,
    facilities: usize,
    seed: u64,
) -> (Boundary, Vec<Facility>, Vec<Settlement>) {
    let cfg = GeoCfg::default();
    let ring_cfg = RingCfg {
        center: Point::new(53.0, -7.5),
        vertex_count: 16,
        radius_km: 40.0,
        radial_jitter: 0.2,
    };
    let ring = draw_ring_radial(ring_cfg, &cfg, ReplayToken { seed, index: 0 })
        .expect("sampler yields a valid ring");
    let fac_pts = scatter_in_ring(&ring, facilities, ReplayToken { seed, index: 1 });
    let set_pts = scatter_in_ring(&ring, settlements, ReplayToken { seed, index: 2 });
    let facilities = fac_pts
        .into_iter()
        .enumerate()
        .map(|(i, point)| Facility {
            id: format!("f{i}"),
            point,
            name: format!("Wash {i}"),
            attrs: Default::default(),
        })
        .collect();
    let settlements = set_pts
        .into_iter()
        .enumerate()
        .map(|(i, point)| Settlement {
            id: format!("s{i}"),
            point,
            name: format!("Town {i}"),
            population: Some((i as u64 % 97) * 50),
            kind: "town".to_string(),
        })
        .collect();
    (Boundary::Polygon(ring), facilities, settlements)
}

fn bench_engine(c: &mut Criterion) {
    let cfg = GeoCfg::default();
    let mut group = c.benchmark_group("engine");
    for &n in &[100usize, 500, 2000] {
        group.bench_with_input(BenchmarkId::new("recommend_polygon", n), &n, |b, &n| {
            b.iter_batched(
                || seeded_scene(n, 50, 43),
                |(boundary, fac, set)| {
                    let _res =
                        recommend(&boundary, &fac, &set, RankingParams::default(), &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("recommend_circle", n), &n, |b, &n| {
            let (_, fac, set) = seeded_scene(n, 50, 43);
            let circle = Boundary::Circle(Circle::new(Point::new(53.0, -7.5), 40.0));
            b.iter(|| {
                let _res =
                    recommend(&circle, &fac, &set, RankingParams::default(), &cfg).unwrap();
            })
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let cfg = GeoCfg::default();
    let mut group = c.benchmark_group("nearest");
    for &n in &[100usize, 1000, 5000] {
        group.bench_with_input(BenchmarkId::new("nearest_facilities", n), &n, |b, &n| {
            let (_, fac, _) = seeded_scene(10, n, 7);
            let p = Point::new(53.0, -7.5);
            b.iter(|| {
                let _res = nearest_facilities(&fac, p, NEARBY_LIMIT, &cfg).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine, bench_nearest);
criterion_main!(benches);

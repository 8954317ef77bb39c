// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use proxima_index::{AxisOrders, Point, PointId, points_from_coords};
use proxima_pair::{PairResult, solve};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_cloud<const D: usize>(rng: &mut Rng, n: usize, size: f64) -> Vec<Point<D>> {
    let coords: Vec<[f64; D]> = (0..n)
        .map(|_| std::array::from_fn(|_| (rng.next_f64() * 2.0 - 1.0) * size))
        .collect();
    points_from_coords(&coords)
}

// O(n²) reference, for a scaling comparison at small n.
fn brute_force<const D: usize>(points: &[Point<D>]) -> PairResult<D> {
    let mut best = PairResult::none();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(PairResult::of(*a, *b));
        }
    }
    best
}

fn bench_solve_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_2d");
    for &n in &[100usize, 1_000, 10_000] {
        let mut rng = Rng::new(0xA5A5_5A5A ^ n as u64);
        let pts = gen_cloud::<2>(&mut rng, n, 100.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| solve(black_box(&pts), None).unwrap());
        });
    }
    group.finish();
}

fn bench_solve_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_3d");
    for &n in &[100usize, 1_000, 10_000] {
        let mut rng = Rng::new(0x5A5A_A5A5 ^ n as u64);
        let pts = gen_cloud::<3>(&mut rng, n, 100.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| solve(black_box(&pts), None).unwrap());
        });
    }
    group.finish();
}

fn bench_against_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_vs_brute_2d");
    for &n in &[100usize, 500, 2_000] {
        let mut rng = Rng::new(0xBEEF ^ n as u64);
        let pts = gen_cloud::<2>(&mut rng, n, 100.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("engine/n={n}"), |b| {
            b.iter(|| solve(black_box(&pts), None).unwrap());
        });
        group.bench_function(format!("brute/n={n}"), |b| {
            b.iter(|| brute_force(black_box(&pts)));
        });
    }
    group.finish();
}

fn bench_axis_orders_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_orders_build_3d");
    for &n in &[1_000usize, 10_000] {
        let mut rng = Rng::new(0xC0FFEE ^ n as u64);
        let pts = gen_cloud::<3>(&mut rng, n, 100.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    let orders = AxisOrders::build(&pts);
                    black_box(orders.order(0).first().copied().unwrap_or(PointId::new(0)))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_solve_2d,
    bench_solve_3d,
    bench_against_brute_force,
    bench_axis_orders_build
);
criterion_main!(benches);

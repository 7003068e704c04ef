// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_range_tree::{Point, RangeTree, Traversal, Window};

fn gen_grid_points(n: usize, cell: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as i64 * cell, y as i64 * cell));
        }
    }
    out
}

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
    fn next_i64(&mut self, span: i64) -> i64 {
        (self.next_u64() % (span as u64)) as i64
    }
}

fn gen_random_points(count: usize, span: i64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_i64(span), rng.next_i64(span)))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_i64(20_000), rng.next_i64(20_000)));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = rng.next_i64(spread) - spread / 2;
            let dy = rng.next_i64(spread) - spread / 2;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[32usize, 64, 128] {
        let points = gen_grid_points(n, 10);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(RangeTree::new(points)),
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_random_points(16_384, 10_000);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("random_16k", |b| {
        b.iter_batched(
            || points.clone(),
            |points| black_box(RangeTree::new(points)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let cases = [
        ("random", gen_random_points(65_536, 10_000)),
        ("clustered", gen_clustered_points(64, 1_024, 400)),
    ];
    for (name, points) in cases {
        let tree = RangeTree::new(points);
        // Narrow, square, and a tall band spanning the whole y range.
        let windows = [
            ("narrow", Window::new(4_000, 4_000, 4_100, 4_100)),
            ("square", Window::new(2_000, 2_000, 6_000, 6_000)),
            ("band", Window::new(0, 4_990, 10_000, 5_010)),
        ];
        for (wname, window) in windows {
            for traversal in [Traversal::Descend, Traversal::Canonical] {
                group.bench_function(format!("{name}_{wname}_{traversal:?}"), |b| {
                    let mut out = Vec::new();
                    b.iter(|| {
                        out.clear();
                        tree.query_window(window, traversal, &mut out);
                        black_box(out.len());
                    })
                });
            }
        }
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let points = gen_random_points(65_536, 10_000);
    let tree = RangeTree::new(points);
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let centers: Vec<Point> = (0..1_000)
        .map(|_| Point::new(rng.next_i64(10_000), rng.next_i64(10_000)))
        .collect();
    group.throughput(Throughput::Elements(centers.len() as u64));
    group.bench_function("query_1000_centers_d50", |b| {
        let mut out = Vec::new();
        b.iter(|| {
            for &q in &centers {
                out.clear();
                tree.query_into(q, 50.0, &mut out);
                black_box(out.len());
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_query_traversals,
    bench_query_heavy
);
criterion_main!(benches);

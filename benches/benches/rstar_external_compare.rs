// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_range_tree::{Point, RangeTree, Traversal, Window};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: i64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(x as i64 * cell, y as i64 * cell));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[i64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10);
        let window = Window::new(100, 100, 500, 500);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RangeTree::new(points);
                    let mut out = Vec::new();
                    tree.query_window(window, Traversal::Descend, &mut out);
                    black_box(out.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("understory_build_query_canonical_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RangeTree::new(points);
                    let mut out = Vec::new();
                    tree.query_window(window, Traversal::Canonical, &mut out);
                    black_box(out.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let envelope = AABB::from_corners(
                        [window.min_x, window.min_y],
                        [window.max_x, window.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);

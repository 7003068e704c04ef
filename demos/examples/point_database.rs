// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point database.
//!
//! Build a range tree over fifteen points and run a few half-width queries.
//!
//! Run:
//! - `cargo run -p understory_demos --example point_database`

use understory_range_tree::{Point, RangeTree};

fn format_points(points: &[Point]) -> String {
    let items: Vec<String> = points.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn main() {
    let points = [
        (38, 26),
        (43, 24),
        (5, 25),
        (30, 2),
        (29, 7),
        (37, 16),
        (51, 15),
        (40, 23),
        (23, 20),
        (8, 49),
        (34, 45),
        (42, 12),
        (32, 39),
        (17, 19),
        (12, 4),
    ]
    .map(Point::from);

    let db = RangeTree::new(points);
    println!("indexed {} points, depth {}", db.len(), db.depth());

    let queries = [
        (Point::new(20, 40), 37.9),
        (Point::new(5, 5), 1.0),
        (Point::new(4, 8), 2.0),
        (Point::new(30, 15), 5.0),
    ];
    for (q, d) in queries {
        let mut hits = db.query(q, d);
        hits.sort();
        println!("\nQuery: {q}, d={d}");
        println!("{}", format_points(&hits));
    }

    // The canonical traversal reports the same points.
    let mut a = db.query(Point::new(20, 40), 37.9);
    let mut b = db.query_canonical(Point::new(20, 40), 37.9);
    a.sort();
    b.sort();
    assert_eq!(a, b, "traversals must agree");
    assert_eq!(a.len(), 14, "only (30, 2) lies outside the wide window");
}

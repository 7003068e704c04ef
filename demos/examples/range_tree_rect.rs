// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range tree with Kurbo rectangles.
//!
//! Query integer points with float rectangles, e.g. a viewport in scene space.
//!
//! Run:
//! - `cargo run -p understory_demos --example range_tree_rect`

use kurbo::Rect;
use understory_range_tree::{Point, RangeTree, Traversal, Window};

fn main() {
    // A 20×20 lattice of points spaced 10 apart.
    let tree: RangeTree = (0..20)
        .flat_map(|y| (0..20).map(move |x| Point::new(x * 10, y * 10)))
        .collect();

    let viewport = Rect::new(15.5, 15.5, 45.0, 35.0);
    let visible = tree.query_rect(viewport);
    println!("visible lattice points in {viewport:?}: {}", visible.len());
    // x in {20, 30, 40}, y in {20, 30}
    assert_eq!(visible.len(), 6, "expected a 3×2 block of points");

    // The same query expressed as an integer window, answered canonically.
    let window = Window::from_rect(viewport);
    let mut canonical = Vec::new();
    tree.query_window(window, Traversal::Canonical, &mut canonical);
    println!("window {window:?} -> {} points", canonical.len());
    assert_eq!(canonical.len(), visible.len(), "traversals must agree");

    let first: kurbo::Point = tree.iter().next().unwrap_or_default().into();
    println!("leftmost point as kurbo: {first:?}");
}

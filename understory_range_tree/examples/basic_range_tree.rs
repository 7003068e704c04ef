// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Range Tree: build once, then query windows.

use understory_range_tree::{Point, RangeTree, Traversal, Window};

fn main() {
    let tree = RangeTree::new([
        Point::new(0, 0),
        Point::new(4, 3),
        Point::new(5, 5),
        Point::new(5, 5),
        Point::new(9, 1),
    ]);

    // Half-width 1.5 around (5, 4): x in [4, 6], y in [3, 5].
    let hits = tree.query(Point::new(5, 4), 1.5);
    println!("hits near (5, 4): {:?}", hits);

    // An explicit window, answered through the secondary trees.
    let mut out = Vec::new();
    tree.query_window(Window::new(0, 0, 9, 2), Traversal::Canonical, &mut out);
    println!("hits in the bottom band: {:?}", out);
}

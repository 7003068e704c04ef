// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Kurbo.
//!
//! ## Feature
//!
//! Enable with `kurbo`, together with `std` (the default) or `libm`.
//!
//! ## Notes
//!
//! Kurbo rectangles have float edges. A rectangle is converted to the integer
//! window of all lattice points it covers: min edges round up, max edges round
//! down. Rectangles are normalized with [`Rect::abs`] first, so a rectangle with
//! negative width or height queries the same area as its positive counterpart.
//! Edges must not be NaN.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::tree::{RangeTree, Traversal};
use crate::types::{Point, Window, ceil_to_i128, clamp_axis, floor_to_i128};

impl Window {
    /// The integer window covering every lattice point inside `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        debug_assert!(!rect.is_nan(), "rectangle edges must not be NaN");
        let r = rect.abs();
        let (min_x, max_x) = clamp_axis(ceil_to_i128(r.x0), floor_to_i128(r.x1));
        let (min_y, max_y) = clamp_axis(ceil_to_i128(r.y0), floor_to_i128(r.y1));
        Self::new(min_x, min_y, max_x, max_y)
    }
}

// Coordinates beyond 2^53 round to the nearest float.
impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x as f64, p.y as f64)
    }
}

impl RangeTree {
    /// Points inside a Kurbo rectangle, edges inclusive.
    ///
    /// ```
    /// use kurbo::Rect;
    /// use understory_range_tree::{Point, RangeTree};
    ///
    /// let tree = RangeTree::new([Point::new(1, 1), Point::new(2, 5), Point::new(3, 3)]);
    /// let mut hits = tree.query_rect(Rect::new(0.5, 0.5, 3.0, 3.5));
    /// hits.sort();
    /// assert_eq!(hits, [Point::new(1, 1), Point::new(3, 3)]);
    /// ```
    pub fn query_rect(&self, rect: Rect) -> Vec<Point> {
        let mut out = Vec::new();
        self.query_window(Window::from_rect(rect), Traversal::Descend, &mut out);
        out
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`RangeTree`] API.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::primary::{Iter, PrimaryTree};
use crate::types::{Point, Window};

/// How a window query walks the tree.
///
/// Both traversals report exactly the same points; they differ in how much of
/// the tree they visit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Descend the primary tree and test `y` at every node whose `x` falls in
    /// the window, visiting both children of such nodes.
    ///
    /// Costs `O(n)` in the worst case for a window spanning the whole `x` range.
    #[default]
    Descend,
    /// Split once, follow the two boundary paths, and answer each subtree
    /// hanging inside the `x` range from its secondary index.
    ///
    /// Costs `O(log² n + k)` for `k` reported points.
    Canonical,
}

/// A static two-level range tree over integer points.
///
/// The primary tree is keyed on `x`. Every primary node carries the `y`-sorted
/// list of its subtree's points and a secondary tree built over that list.
/// The structure is built once and never modified afterwards; queries take
/// `&self` and may run from several threads at once, each with its own output.
pub struct RangeTree {
    primary: PrimaryTree,
}

impl RangeTree {
    /// Build a tree from a set of points.
    ///
    /// Points are sorted by `x` with a stable sort, so points sharing an `x`
    /// keep their input order. Duplicates are kept.
    ///
    /// Runs in `O(n log n)` time and space.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut sorted: Vec<Point> = points.into_iter().collect();
        sorted.sort_by_key(|p| p.x);
        let primary = PrimaryTree::build(&sorted);
        tracing::debug!(
            points = primary.len(),
            depth = primary.depth(),
            y_sorted_entries = primary.aux_len(),
            "built range tree"
        );
        Self { primary }
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// True if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.primary.len() == 0
    }

    /// Height of the primary tree; `0` when empty.
    ///
    /// At most `ceil(log2(len + 1))`.
    pub fn depth(&self) -> usize {
        self.primary.depth()
    }

    /// Iterate over all points in ascending `x` order.
    pub fn iter(&self) -> Iter<'_> {
        self.primary.iter()
    }

    /// All points in ascending `y` order.
    pub fn points_by_y(&self) -> &[Point] {
        self.primary.points_by_y()
    }

    /// Points within half-width `d` of `q` on both axes.
    ///
    /// A point `p` matches when `ceil(q.x - d) <= p.x <= floor(q.x + d)` and the
    /// same holds for `y`. This is a box test, not a distance test. The result
    /// is in no particular order and keeps input duplicates.
    ///
    /// `d` is expected to be non-negative; a negative `d` matches nothing.
    /// `d` must not be NaN.
    ///
    /// ```
    /// use understory_range_tree::{Point, RangeTree};
    ///
    /// let tree = RangeTree::new([Point::new(1, 1), Point::new(4, 2), Point::new(9, 9)]);
    /// let mut hits = tree.query(Point::new(3, 2), 1.5);
    /// hits.sort();
    /// assert_eq!(hits, [Point::new(4, 2)]);
    /// ```
    pub fn query(&self, q: Point, d: f64) -> Vec<Point> {
        let mut out = Vec::new();
        self.query_into(q, d, &mut out);
        out
    }

    /// Like [`query`](Self::query), appending to `out` instead of allocating.
    ///
    /// `out` is not cleared first.
    pub fn query_into(&self, q: Point, d: f64, out: &mut Vec<Point>) {
        self.query_window(Window::around(q, d), Traversal::Descend, out);
    }

    /// Like [`query`](Self::query), using [`Traversal::Canonical`].
    pub fn query_canonical(&self, q: Point, d: f64) -> Vec<Point> {
        let mut out = Vec::new();
        self.query_window(Window::around(q, d), Traversal::Canonical, &mut out);
        out
    }

    /// Append every point inside `window` to `out`, walking with `traversal`.
    ///
    /// An empty (inverted) window reports nothing.
    pub fn query_window(&self, window: Window, traversal: Traversal, out: &mut Vec<Point>) {
        let before = out.len();
        match traversal {
            Traversal::Descend => self.primary.query_descend(&window, out),
            Traversal::Canonical => self.primary.query_canonical(&window, out),
        }
        tracing::trace!(
            ?window,
            ?traversal,
            hits = out.len() - before,
            "range tree query"
        );
    }
}

impl Default for RangeTree {
    fn default() -> Self {
        Self::new(core::iter::empty())
    }
}

impl FromIterator<Point> for RangeTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Point>> for RangeTree {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a RangeTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Debug for RangeTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeTree")
            .field("len", &self.primary.len())
            .field("depth", &self.primary.depth())
            .finish_non_exhaustive()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primary index: a balanced tree keyed on `x`, each node carrying a secondary index.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::merge::merge_by_y;
use crate::secondary::SecondaryTree;
use crate::types::{NodeIdx, Point, Window};

/// Balanced binary tree keyed on `x`.
///
/// Nodes live in an arena and are pushed in post-order, so both children of a
/// node are always finished (and their `y_sorted` lists available) before the
/// node itself is created.
pub(crate) struct PrimaryTree {
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    depth: usize,
}

struct Node {
    point: Point,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
    /// Every point of this subtree, this node's own included, ascending by `y`.
    y_sorted: Vec<Point>,
    secondary: SecondaryTree,
}

impl PrimaryTree {
    /// Build from points sorted ascending by `x`.
    pub(crate) fn build(sorted_by_x: &[Point]) -> Self {
        let mut arena = Vec::with_capacity(sorted_by_x.len());
        let (root, depth) = Self::build_node(&mut arena, sorted_by_x);
        Self { root, arena, depth }
    }

    fn build_node(arena: &mut Vec<Node>, points: &[Point]) -> (Option<NodeIdx>, usize) {
        if points.is_empty() {
            return (None, 0);
        }
        let mid = points.len() / 2;
        let point = points[mid];
        let (left, left_depth) = Self::build_node(arena, &points[..mid]);
        let (right, right_depth) = Self::build_node(arena, &points[mid + 1..]);

        let children = {
            let built: &[Node] = arena;
            merge_by_y(Self::y_sorted_of(built, left), Self::y_sorted_of(built, right))
        };
        let y_sorted = merge_by_y(&children, core::slice::from_ref(&point));
        let secondary = SecondaryTree::build(&y_sorted);

        let idx = NodeIdx::new(arena.len());
        arena.push(Node {
            point,
            left,
            right,
            y_sorted,
            secondary,
        });
        (Some(idx), 1 + left_depth.max(right_depth))
    }

    fn y_sorted_of(arena: &[Node], idx: Option<NodeIdx>) -> &[Point] {
        match idx {
            Some(i) => &arena[i.get()].y_sorted,
            None => &[],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of entries held across all `y_sorted` lists.
    pub(crate) fn aux_len(&self) -> usize {
        self.arena.iter().map(|n| n.y_sorted.len()).sum()
    }

    /// The root's `y_sorted` list: every point, ascending by `y`.
    pub(crate) fn points_by_y(&self) -> &[Point] {
        Self::y_sorted_of(&self.arena, self.root)
    }

    /// Descend from the root, filtering `y` node by node.
    ///
    /// A node left or right of the `x` range sends the walk into one child only.
    /// A node inside the `x` range is tested on `y` directly and both children
    /// are visited. The secondary indexes are not consulted.
    pub(crate) fn query_descend(&self, w: &Window, out: &mut Vec<Point>) {
        let Some(root) = self.root else {
            return;
        };
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if w.max_x < n.point.x {
                stack.extend(n.left);
            } else if w.min_x > n.point.x {
                stack.extend(n.right);
            } else {
                if w.contains_y(n.point.y) {
                    out.push(n.point);
                }
                stack.extend(n.right);
                stack.extend(n.left);
            }
        }
    }

    /// Classic two-level range tree walk.
    ///
    /// Find the split node where the `x` range straddles the tree, then follow
    /// the two boundary paths below it. Every subtree hanging off a boundary
    /// path toward the inside lies wholly within the `x` range and is answered
    /// from its `y` data in `O(log n + k)`.
    pub(crate) fn query_canonical(&self, w: &Window, out: &mut Vec<Point>) {
        if w.is_empty() {
            return;
        }
        let mut cur = self.root;
        let split = loop {
            let Some(i) = cur else {
                return;
            };
            let n = &self.arena[i.get()];
            if w.max_x < n.point.x {
                cur = n.left;
            } else if w.min_x > n.point.x {
                cur = n.right;
            } else {
                break n;
            }
        };
        if w.contains_y(split.point.y) {
            out.push(split.point);
        }

        // Everything below `split.left` has x <= split.x <= max_x.
        let mut cur = split.left;
        while let Some(i) = cur {
            let n = &self.arena[i.get()];
            if w.min_x <= n.point.x {
                if w.contains_y(n.point.y) {
                    out.push(n.point);
                }
                if let Some(r) = n.right {
                    self.report_subtree(r, w, out);
                }
                cur = n.left;
            } else {
                cur = n.right;
            }
        }

        // Everything below `split.right` has x >= split.x >= min_x.
        let mut cur = split.right;
        while let Some(i) = cur {
            let n = &self.arena[i.get()];
            if n.point.x <= w.max_x {
                if w.contains_y(n.point.y) {
                    out.push(n.point);
                }
                if let Some(l) = n.left {
                    self.report_subtree(l, w, out);
                }
                cur = n.right;
            } else {
                cur = n.left;
            }
        }
    }

    /// Report the points of a subtree lying wholly within the `x` range.
    fn report_subtree(&self, idx: NodeIdx, w: &Window, out: &mut Vec<Point>) {
        let n = &self.arena[idx.get()];
        match (n.y_sorted.first(), n.y_sorted.last()) {
            (Some(lo), Some(hi)) if w.contains_y(lo.y) && w.contains_y(hi.y) => {
                out.extend_from_slice(&n.y_sorted);
            }
            _ => n.secondary.query_y(w.min_y, w.max_y, out),
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            stack: Vec::new(),
            cur: self.root,
            remaining: self.arena.len(),
        }
    }
}

impl Debug for PrimaryTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrimaryTree")
            .field("nodes", &self.arena.len())
            .field("depth", &self.depth)
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

/// In-order iterator over a [`RangeTree`](crate::RangeTree), ascending by `x`.
///
/// Points with equal `x` come out in their input order.
pub struct Iter<'a> {
    tree: &'a PrimaryTree,
    stack: Vec<NodeIdx>,
    cur: Option<NodeIdx>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(i) = self.cur {
            self.stack.push(i);
            self.cur = self.tree.arena[i.get()].left;
        }
        let i = self.stack.pop()?;
        let n = &self.tree.arena[i.get()];
        self.cur = n.right;
        self.remaining -= 1;
        Some(n.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Debug for Iter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

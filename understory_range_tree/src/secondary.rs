// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Secondary index: a balanced tree over a primary node's `y`-sorted points.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::{NodeIdx, Point};

/// Balanced binary tree keyed on `y`.
///
/// Built once from a list that is already sorted by `y`. The median of each
/// range becomes the node, so every left descendant has `y <= node.y` and every
/// right descendant has `y >= node.y`.
pub(crate) struct SecondaryTree {
    root: Option<NodeIdx>,
    arena: Vec<Node>,
    depth: usize,
}

struct Node {
    point: Point,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl SecondaryTree {
    /// Build from points sorted ascending by `y`.
    pub(crate) fn build(sorted_by_y: &[Point]) -> Self {
        let mut arena = Vec::with_capacity(sorted_by_y.len());
        let (root, depth) = Self::build_node(&mut arena, sorted_by_y);
        Self { root, arena, depth }
    }

    fn build_node(arena: &mut Vec<Node>, points: &[Point]) -> (Option<NodeIdx>, usize) {
        if points.is_empty() {
            return (None, 0);
        }
        let mid = points.len() / 2;
        let (left, left_depth) = Self::build_node(arena, &points[..mid]);
        let (right, right_depth) = Self::build_node(arena, &points[mid + 1..]);
        let idx = NodeIdx::new(arena.len());
        arena.push(Node {
            point: points[mid],
            left,
            right,
        });
        (Some(idx), 1 + left_depth.max(right_depth))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Append every point with `y_min <= y <= y_max` to `out`.
    ///
    /// Visits `O(log n + k)` nodes for `k` reported points.
    pub(crate) fn query_y(&self, y_min: i64, y_max: i64, out: &mut Vec<Point>) {
        let Some(root) = self.root else {
            return;
        };
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let n = &self.arena[i.get()];
            if n.point.y < y_min {
                stack.extend(n.right);
            } else if n.point.y > y_max {
                stack.extend(n.left);
            } else {
                out.push(n.point);
                stack.extend(n.right);
                stack.extend(n.left);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn in_order(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        loop {
            while let Some(i) = cur {
                stack.push(i);
                cur = self.arena[i.get()].left;
            }
            let Some(i) = stack.pop() else {
                break;
            };
            out.push(self.arena[i.get()].point);
            cur = self.arena[i.get()].right;
        }
        out
    }
}

impl Debug for SecondaryTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecondaryTree")
            .field("nodes", &self.arena.len())
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

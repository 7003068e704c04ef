// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear merge of Y-sorted point lists.

use alloc::vec::Vec;

use crate::types::Point;

/// Merge two lists that are each sorted ascending by `y` into one sorted list.
///
/// Runs in `O(a.len() + b.len())`. The merge is stable: on equal `y`, entries
/// from `a` come first, and each input keeps its own relative order.
pub fn merge_by_y(a: &[Point], b: &[Point]) -> Vec<Point> {
    debug_assert!(is_sorted_by_y(a), "left input must be sorted by y");
    debug_assert!(is_sorted_by_y(b), "right input must be sorted by y");
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].y <= b[j].y {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

pub(crate) fn is_sorted_by_y(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].y <= w[1].y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pts(v: &[(i64, i64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn merges_interleaved() {
        let a = pts(&[(0, 1), (0, 4), (0, 9)]);
        let b = pts(&[(1, 2), (1, 3), (1, 10)]);
        let m = merge_by_y(&a, &b);
        let ys: Vec<_> = m.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1, 2, 3, 4, 9, 10], "ascending y");
    }

    #[test]
    fn ties_keep_left_first() {
        let a = pts(&[(0, 5), (1, 5)]);
        let b = pts(&[(2, 5)]);
        let m = merge_by_y(&a, &b);
        assert_eq!(m, pts(&[(0, 5), (1, 5), (2, 5)]), "stable on equal y");
    }

    #[test]
    fn empty_sides() {
        let a = pts(&[(3, 1), (4, 2)]);
        assert_eq!(merge_by_y(&a, &[]), a, "empty right");
        assert_eq!(merge_by_y(&[], &a), a, "empty left");
        assert!(merge_by_y(&[], &[]).is_empty(), "both empty");
    }
}

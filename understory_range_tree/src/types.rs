// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point, query window, and arena handle types.

use core::fmt;

/// A point with integer coordinates.
///
/// Points are plain values. Two entries with equal coordinates are still two
/// entries: the tree keeps duplicates and reports each of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A closed, axis-aligned integer window.
///
/// A point lies inside when `min_x <= x <= max_x` and `min_y <= y <= max_y`.
/// A window whose minimum exceeds its maximum on either axis is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// Minimum x (inclusive)
    pub min_x: i64,
    /// Minimum y (inclusive)
    pub min_y: i64,
    /// Maximum x (inclusive)
    pub max_x: i64,
    /// Maximum y (inclusive)
    pub max_y: i64,
}

impl Window {
    /// Create a window from its inclusive bounds.
    pub const fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The integer window of half-width `d` around `q`.
    ///
    /// Each axis covers `[ceil(q - d), floor(q + d)]`. The same `d` is applied to
    /// both axes independently, so this is a square, not a disc.
    ///
    /// `d` must not be NaN. A negative `d` yields an empty window.
    pub fn around(q: Point, d: f64) -> Self {
        debug_assert!(!d.is_nan(), "half-width must not be NaN");
        // With integer centers, ceil(q - d) == q - floor(d) and floor(q + d) == q + floor(d).
        let half = floor_to_i128(d);
        let (min_x, max_x) = clamp_axis(
            i128::from(q.x).saturating_sub(half),
            i128::from(q.x).saturating_add(half),
        );
        let (min_y, max_y) = clamp_axis(
            i128::from(q.y).saturating_sub(half),
            i128::from(q.y).saturating_add(half),
        );
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Whether `x` lies within the horizontal bounds.
    #[inline]
    pub const fn contains_x(&self, x: i64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    /// Whether `y` lies within the vertical bounds.
    #[inline]
    pub const fn contains_y(&self, y: i64) -> bool {
        self.min_y <= y && y <= self.max_y
    }

    /// Whether this window contains the point.
    #[inline]
    pub const fn contains_point(&self, p: Point) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    /// Return true if the window is inverted on either axis and holds no point.
    pub const fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }
}

/// Index of a node in a tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// Largest integer not greater than `v`, saturating at the `i128` range.
///
/// `core` has no `f64::floor`, so this corrects the truncating cast instead.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; out-of-range inputs clamp to the i128 bounds."
)]
pub(crate) fn floor_to_i128(v: f64) -> i128 {
    let t = v as i128;
    if (t as f64) > v { t.saturating_sub(1) } else { t }
}

/// Smallest integer not less than `v`, saturating at the `i128` range.
#[cfg(any(feature = "kurbo", test))]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; out-of-range inputs clamp to the i128 bounds."
)]
pub(crate) fn ceil_to_i128(v: f64) -> i128 {
    let t = v as i128;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}

/// Narrow an inclusive `i128` range to `i64`, keeping empty ranges empty.
///
/// A range lying wholly outside `i64` holds no representable coordinate.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Both bounds are clamped into the i64 range before narrowing."
)]
pub(crate) fn clamp_axis(lo: i128, hi: i128) -> (i64, i64) {
    let (min, max) = (i128::from(i64::MIN), i128::from(i64::MAX));
    if lo > hi || lo > max || hi < min {
        return (i64::MAX, i64::MIN);
    }
    (lo.clamp(min, max) as i64, hi.clamp(min, max) as i64)
}

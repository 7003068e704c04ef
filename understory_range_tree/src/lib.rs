// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_range_tree --heading-base-level=0

//! Understory Range Tree: a static 2D range tree over integer points.
//!
//! Understory Range Tree answers box-window queries over a fixed set of points.
//!
//! - Build once from a list of points; there is no insert, update, or remove.
//! - Query all points within a half-width `d` of a point, independently on each axis.
//! - Query an explicit integer [`Window`], choosing a [`Traversal`].
//!
//! The index is a two-level tree. The primary tree is a balanced binary tree keyed
//! on `x`, built by median split. Each primary node keeps the `y`-sorted list of its
//! subtree's points, merged bottom-up from its children, and a balanced secondary
//! tree built over that list.
//!
//! # Example
//!
//! ```rust
//! use understory_range_tree::{Point, RangeTree};
//!
//! let tree = RangeTree::new([
//!     Point::new(38, 26),
//!     Point::new(43, 24),
//!     Point::new(5, 25),
//!     Point::new(37, 16),
//!     Point::new(29, 7),
//! ]);
//!
//! // Window x: [33, 43], y: [19, 29].
//! let mut hits = tree.query(Point::new(38, 24), 5.0);
//! hits.sort();
//! assert_eq!(hits, [Point::new(38, 26), Point::new(43, 24)]);
//!
//! // Nothing within one unit of (5, 5).
//! assert!(tree.query(Point::new(5, 5), 1.0).is_empty());
//! ```
//!
//! ## Box, not disc
//!
//! The half-width applies to each axis on its own. Point `p` matches `query(q, d)` when
//! `ceil(q.x - d) <= p.x <= floor(q.x + d)` and `ceil(q.y - d) <= p.y <= floor(q.y + d)`.
//! Corners of the square are included; use a distance filter on the results if you need
//! a disc.
//!
//! ## Choosing a traversal
//!
//! - [`Traversal::Descend`] (default, used by [`RangeTree::query`]): walks the primary
//!   tree and filters `y` node by node. Simple, and fine for narrow `x` ranges.
//! - [`Traversal::Canonical`] (used by [`RangeTree::query_canonical`]): splits once,
//!   then answers each subtree lying wholly inside the `x` range from its secondary
//!   tree, in `O(log² n + k)`.
//!
//! Both report the same points.
//!
//! ## Features
//!
//! - `std` (default): forwarded to optional dependencies.
//! - `libm`: `no_std` float support for optional dependencies.
//! - `kurbo`: query with `kurbo::Rect` and convert [`Point`] into `kurbo::Point`.
//!
//! ### Logging
//!
//! Construction emits a `tracing` debug event with the point count and depth; each
//! query emits a trace event with its window and hit count. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod merge;
mod primary;
mod secondary;
mod tree;
mod types;

pub use merge::merge_by_y;
pub use primary::Iter;
pub use tree::{RangeTree, Traversal};
pub use types::{Point, Window};

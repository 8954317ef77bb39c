// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=proxima_index --heading-base-level=0

//! Proxima Index: presorted per-axis point orders for divide-and-conquer geometry.
//!
//! Proxima Index is the leaf building block of the closest-pair engine.
//!
//! - [`Point`] and [`Region`] are plain value types: fixed-dimension `f64`
//!   coordinates with a stable [`PointId`] identity, and axis-aligned bounds.
//! - [`AxisOrders`] sorts a point set along every axis exactly once, ties
//!   broken by identity. Child subsets reuse the parent's orders through
//!   O(n) order-preserving filters ([`AxisOrders::band`],
//!   [`AxisOrders::split_at_rank`]) instead of re-sorting at every
//!   recursion level.
//!
//! The crate is generic over the dimension `D` (the engine uses 2 and 3)
//! and has no dependencies. Higher layers decide what the orders mean;
//! this crate only guarantees determinism and order preservation.
//!
//! # Example
//!
//! ```rust
//! use proxima_index::{AxisOrders, points_from_coords};
//!
//! let pts = points_from_coords(&[[3.0, 0.0], [1.0, 2.0], [2.0, 1.0]]);
//! let orders = AxisOrders::build(&pts);
//!
//! // Ascending by x: ids 1, 2, 0.
//! let xs: Vec<u32> = orders.order(0).iter().map(|id| id.get()).collect();
//! assert_eq!(xs, [1, 2, 0]);
//!
//! // Split at the middle of the x order; y stays sorted on both sides.
//! let (below, above) = orders.split_at_rank(&pts, 0, 1);
//! assert_eq!(below.len(), 1);
//! assert_eq!(above.len(), 2);
//! ```
//!
//! ## Float semantics
//!
//! Orders are built with `total_cmp`, so they are deterministic even for
//! non-finite coordinates; rejecting such coordinates is the caller's
//! concern (the closest-pair partitioner does so before splitting).

#![no_std]

extern crate alloc;

pub mod order;
pub mod types;

pub use order::AxisOrders;
pub use types::{Point, PointId, Region, points_from_coords};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_orders_come_from_filtering_not_sorting() {
        // A parent order filtered twice equals building from scratch on the
        // subset, which is the property the recursion relies on.
        let pts = points_from_coords(&[
            [0.5, 4.0],
            [1.5, 3.0],
            [2.5, 2.0],
            [3.5, 1.0],
            [4.5, 0.0],
            [5.5, 5.0],
        ]);
        let orders = AxisOrders::build(&pts);
        let (below, above) = orders.split_at_rank(&pts, 0, 3);

        let below_pts: alloc::vec::Vec<Point<2>> =
            below.order(0).iter().map(|id| pts[id.idx()]).collect();
        let rebuilt = AxisOrders::build(&below_pts);
        // Same relative y order (ids differ because rebuild renumbers).
        let filtered_y: alloc::vec::Vec<[f64; 2]> =
            below.order(1).iter().map(|id| pts[id.idx()].coords).collect();
        let rebuilt_y: alloc::vec::Vec<[f64; 2]> =
            rebuilt.order(1).iter().map(|id| below_pts[id.idx()].coords).collect();
        assert_eq!(filtered_y, rebuilt_y);
        assert_eq!(above.len(), 3);
    }
}

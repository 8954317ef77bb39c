// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presorted per-axis point orders.
//!
//! [`AxisOrders`] is the cache that makes recursive re-sorting unnecessary:
//! it is built once per solve in O(n log n), and every child subset's
//! orders are derived from the parent's by an order-preserving O(n) filter.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::types::{Point, PointId};

/// One total ordering of a point set per coordinate axis.
///
/// Each axis's order sorts ids by that axis's coordinate, ties broken by
/// id, so the ordering is deterministic regardless of input order. Orders
/// are read-only once built; derivations produce new values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisOrders<const D: usize> {
    by_axis: [Vec<PointId>; D],
}

impl<const D: usize> AxisOrders<D> {
    /// Sort the points along every axis. O(D · n log n).
    ///
    /// An empty point slice yields empty orders for all axes.
    pub fn build(points: &[Point<D>]) -> Self {
        let by_axis = core::array::from_fn(|axis| {
            let mut ids: Vec<PointId> = (0..points.len()).map(PointId::from_index).collect();
            ids.sort_by(|&a, &b| key_cmp(points, axis, a, b));
            ids
        });
        Self { by_axis }
    }

    /// The number of points covered by these orders.
    pub fn len(&self) -> usize {
        self.by_axis.first().map(Vec::len).unwrap_or(0)
    }

    /// Whether the orders cover no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ids in ascending order along one axis.
    pub fn order(&self, axis: usize) -> &[PointId] {
        &self.by_axis[axis]
    }

    /// The subsequence of `order_axis`'s ordering whose `filter_axis`
    /// coordinate lies strictly between `lo` and `hi`. O(n), order
    /// preserving.
    ///
    /// The open interval is what the strip merge needs: a point exactly at
    /// the band edge cannot improve on the distance that defined the band.
    pub fn band(
        &self,
        points: &[Point<D>],
        order_axis: usize,
        filter_axis: usize,
        lo: f64,
        hi: f64,
    ) -> Vec<PointId> {
        self.by_axis[order_axis]
            .iter()
            .copied()
            .filter(|id| {
                let c = points[id.idx()].coord(filter_axis);
                lo < c && c < hi
            })
            .collect()
    }

    /// Split every axis's order in two at a rank along one axis.
    ///
    /// The element at `rank` in `axis`'s order is the boundary: ids that
    /// precede it in the `(coordinate, id)` total order go below, the rest
    /// at or above. Because the boundary is a total-order key rather than a
    /// bare coordinate, the split stays balanced even when many points
    /// share the boundary coordinate, and the two sides are disjoint by
    /// construction. O(D · n), order preserving on every axis.
    pub fn split_at_rank(
        &self,
        points: &[Point<D>],
        axis: usize,
        rank: usize,
    ) -> (Self, Self) {
        let n = self.len();
        let pivot = self.by_axis[axis][rank];
        let mut below: [Vec<PointId>; D] = core::array::from_fn(|_| Vec::with_capacity(rank));
        let mut above: [Vec<PointId>; D] = core::array::from_fn(|_| Vec::with_capacity(n - rank));
        for a in 0..D {
            for &id in &self.by_axis[a] {
                if key_cmp(points, axis, id, pivot) == Ordering::Less {
                    below[a].push(id);
                } else {
                    above[a].push(id);
                }
            }
        }
        (Self { by_axis: below }, Self { by_axis: above })
    }
}

// Compare two ids by one axis's coordinate, ties by id. `total_cmp` keeps
// the order total even for non-finite coordinates, which the partitioner
// rejects separately.
fn key_cmp<const D: usize>(points: &[Point<D>], axis: usize, a: PointId, b: PointId) -> Ordering {
    points[a.idx()]
        .coord(axis)
        .total_cmp(&points[b.idx()].coord(axis))
        .then(a.cmp(&b))
}

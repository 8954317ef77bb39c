// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region partitioning: split axis choice, median, and balanced halves.

use proxima_index::{AxisOrders, Point, Region};

use crate::error::{InvariantViolation, SolveError};

/// One half of a split: its region and its points, still ordered on every
/// axis because the orders were filtered from the parent's.
#[derive(Clone, Debug)]
pub struct Half<const D: usize> {
    /// Bounding region of this half. Shares the median plane with the
    /// sibling half; interiors are disjoint.
    pub region: Region<D>,
    /// The half's points, ordered along every axis.
    pub orders: AxisOrders<D>,
}

/// The result of splitting a region and its point set.
///
/// The two halves together contain exactly the parent's points, no
/// duplication and no omission, and their sizes differ by at most one.
#[derive(Clone, Debug)]
pub struct Partition<const D: usize> {
    /// The axis that was split (the region's longest dimension).
    pub axis: usize,
    /// The median coordinate: midpoint of the two central values of the
    /// split axis's order.
    pub median: f64,
    /// Points below the median boundary.
    pub below: Half<D>,
    /// Points at or above the median boundary.
    pub above: Half<D>,
}

/// Split a region and its point set into two near-equal halves.
///
/// The split axis is the region's longest dimension (ties to the lowest
/// axis index), which keeps sub-regions close to cubical and bounds the
/// strip width the merge examines later. The caller must only partition
/// sets larger than the base-case cutoff.
///
/// # Errors
///
/// [`SolveError::InvalidCoordinate`] if any point in the set has a NaN or
/// infinite coordinate; partitioning is undefined for such points and
/// silently misplacing them would corrupt the result.
/// [`SolveError::PartitionInvariant`] if the halves fail to add back up to
/// the parent set, which indicates a defect rather than an input problem.
pub fn partition<const D: usize>(
    points: &[Point<D>],
    region: &Region<D>,
    orders: &AxisOrders<D>,
) -> Result<Partition<D>, SolveError> {
    let n = orders.len();
    debug_assert!(
        n > crate::solver::BASE_CASE_CUTOFF,
        "partitioning is only defined above the base case"
    );

    // Reject non-finite coordinates before any of them can steer a split.
    for &id in orders.order(0) {
        let p = &points[id.idx()];
        for axis in 0..D {
            let value = p.coord(axis);
            if !value.is_finite() {
                return Err(SolveError::InvalidCoordinate { id, axis, value });
            }
        }
    }

    let axis = region.longest_axis(None);
    let ordered = orders.order(axis);

    // Midpoint of the two central coordinates: the average of both central
    // values for even n, the middle value itself for odd n.
    let lo = points[ordered[(n - 1) / 2].idx()].coord(axis);
    let hi = points[ordered[n / 2].idx()].coord(axis);
    let median = 0.5 * (lo + hi);

    // Split the orders at the middle rank rather than at the median value:
    // rank splitting stays balanced within one even when many points share
    // the median coordinate, and the halves are disjoint by construction.
    let rank = n / 2;
    let (below_orders, above_orders) = orders.split_at_rank(points, axis, rank);

    for check_axis in 0..D {
        let b = below_orders.order(check_axis).len();
        let a = above_orders.order(check_axis).len();
        if b + a != n || b != rank {
            return Err(SolveError::PartitionInvariant(
                InvariantViolation::CountMismatch {
                    axis: check_axis,
                    below: b,
                    above: a,
                    expected: n,
                },
            ));
        }
    }

    let (below_region, above_region) = region.split_at(axis, median);
    Ok(Partition {
        axis,
        median,
        below: Half {
            region: below_region,
            orders: below_orders,
        },
        above: Half {
            region: above_region,
            orders: above_orders,
        },
    })
}

// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive closest-pair solver.
//!
//! `solve` ties the pieces together: build the axis orders once, recurse
//! through [`partition`](crate::partition::partition) until the base case,
//! and reconcile each split's boundary with
//! [`strip::merge`](crate::strip::merge). The result of a node is the
//! minimum of its two halves and the strip candidate.

use proxima_index::{AxisOrders, Point, PointId, Region};

use crate::error::SolveError;
use crate::partition::partition;
use crate::result::PairResult;
use crate::strip;

/// Largest point count solved by exhaustive comparison instead of
/// recursion: 0, 1, or 3 distance checks.
pub const BASE_CASE_CUTOFF: usize = 3;

/// One recursive call, as seen by a trace sink.
///
/// Borrowed views into the solver's per-node state; copy out whatever the
/// consumer needs. The solver's correctness never depends on the sink.
#[derive(Debug)]
pub struct TraceNode<'a, const D: usize> {
    /// The region this call covered.
    pub region: &'a Region<D>,
    /// This node's points, ordered along the split axis (axis 0 for a
    /// base-case node).
    pub points: &'a [PointId],
    /// Split details; `None` for a base-case node.
    pub split: Option<TraceSplit<'a>>,
    /// The best pair this node returned upward.
    pub result: &'a PairResult<D>,
}

/// The split bookkeeping of a recursive [`TraceNode`].
#[derive(Debug)]
pub struct TraceSplit<'a> {
    /// The axis that was split.
    pub axis: usize,
    /// The median coordinate of the split.
    pub median: f64,
    /// Points assigned below the median boundary, in split-axis order.
    pub below: &'a [PointId],
    /// Points assigned at or above the median boundary, in split-axis order.
    pub above: &'a [PointId],
}

/// Find the closest pair of points in a set.
///
/// When `region` is `None` the tight bounding region of the points is
/// used. Fewer than two points is a valid input and yields the empty
/// result. Identities must be dense: `points[i].id.idx() == i`, as
/// produced by [`proxima_index::points_from_coords`].
///
/// The returned distance is the true global minimum over the set, and the
/// returned points are identity-preserved members of the input. Repeated
/// calls on the same slice return the same pair; permuting the input can
/// only change which of several exactly-tied pairs is reported.
///
/// # Errors
///
/// [`SolveError::InvalidCoordinate`] for a non-finite coordinate in any
/// set large enough to partition, and [`SolveError::PartitionInvariant`]
/// for internal bookkeeping defects. Sets at or below
/// [`BASE_CASE_CUTOFF`] are solved exhaustively and never reach the
/// partitioner, so non-finite coordinates there follow IEEE comparison
/// semantics instead of erroring.
pub fn solve<const D: usize>(
    points: &[Point<D>],
    region: Option<Region<D>>,
) -> Result<PairResult<D>, SolveError> {
    solve_traced(points, region, |_: &TraceNode<'_, D>| {})
}

/// [`solve`], emitting one [`TraceNode`] per recursive call.
///
/// Events arrive in post-order (children before their parent), which is
/// the order results become known; the final event is the root. Running
/// with or without a sink yields identical results.
pub fn solve_traced<const D: usize>(
    points: &[Point<D>],
    region: Option<Region<D>>,
    mut sink: impl FnMut(&TraceNode<'_, D>),
) -> Result<PairResult<D>, SolveError> {
    debug_assert!(
        points.iter().enumerate().all(|(i, p)| p.id.idx() == i),
        "point identities must be dense slice indices"
    );
    let Some(region) = region.or_else(|| Region::bounding(points)) else {
        // No region given and none derivable: the set is empty.
        return Ok(PairResult::none());
    };
    let orders = AxisOrders::build(points);
    solve_node(points, &region, &orders, &mut sink)
}

fn solve_node<const D: usize>(
    points: &[Point<D>],
    region: &Region<D>,
    orders: &AxisOrders<D>,
    sink: &mut dyn FnMut(&TraceNode<'_, D>),
) -> Result<PairResult<D>, SolveError> {
    if orders.len() <= BASE_CASE_CUTOFF {
        let result = brute_force(points, orders.order(0));
        sink(&TraceNode {
            region,
            points: orders.order(0),
            split: None,
            result: &result,
        });
        return Ok(result);
    }

    let part = partition(points, region, orders)?;
    let below = solve_node(points, &part.below.region, &part.below.orders, sink)?;
    let above = solve_node(points, &part.above.region, &part.above.orders, sink)?;

    let best = below.min(above);
    let cross = strip::merge(
        points,
        region,
        part.axis,
        part.median,
        &part.below.orders,
        &part.above.orders,
        &best,
    )?;
    let result = best.min(cross);

    sink(&TraceNode {
        region,
        points: orders.order(part.axis),
        split: Some(TraceSplit {
            axis: part.axis,
            median: part.median,
            below: part.below.orders.order(part.axis),
            above: part.above.orders.order(part.axis),
        }),
        result: &result,
    });
    Ok(result)
}

// Exhaustive C(n, 2) comparison for the base case. First-seen wins ties,
// so the outcome is fixed by the deterministic axis order.
fn brute_force<const D: usize>(points: &[Point<D>], ids: &[PointId]) -> PairResult<D> {
    let mut best = PairResult::none();
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            best = best.min(PairResult::of(points[a.idx()], points[b.idx()]));
        }
    }
    best
}

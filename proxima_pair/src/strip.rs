// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip merging: recovering pairs that straddle a split.
//!
//! After both halves of a split are solved, the only pairs that can still
//! beat the better half-result have one point on each side, and both
//! points within that distance of the median plane. This module scans that
//! band.
//!
//! The scan orders the band by a secondary axis and compares each point
//! forward only while the secondary-coordinate gap stays below the current
//! best distance. A fixed one-element look-ahead (the historical two-cursor
//! walk) is not enough once several points share a secondary coordinate;
//! the bounded window is, and it shrinks as better pairs are found.

use alloc::vec::Vec;
use core::cmp::Ordering;

use proxima_index::{AxisOrders, Point, PointId, Region};

use crate::error::{InvariantViolation, SolveError};
use crate::result::PairResult;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Below,
    Above,
}

/// Find the closest pair with one point on each side of a split, if any
/// beats `best`.
///
/// `below` and `above` are the two halves' axis orders; `axis` and
/// `median` describe the split; `best` is the better of the two halves'
/// results and bounds the band half-width. Points at or beyond the band
/// edge are excluded up front in O(n).
///
/// Returns the best strictly-improving cross pair, or the empty result
/// when no cross pair is closer than `best`.
///
/// # Errors
///
/// [`SolveError::PartitionInvariant`] if the same point surfaces from both
/// halves: that is a partitioner defect, and discarding the duplicate
/// quietly could hide a wrong distance.
pub fn merge<const D: usize>(
    points: &[Point<D>],
    region: &Region<D>,
    axis: usize,
    median: f64,
    below: &AxisOrders<D>,
    above: &AxisOrders<D>,
    best: &PairResult<D>,
) -> Result<PairResult<D>, SolveError> {
    let d = best.distance();
    // A non-finite bound means the caller had no finite candidate yet; the
    // band then degenerates to "everything" rather than an infinite box.
    let (lo, hi) = if d.is_finite() {
        (median - d, median + d)
    } else {
        (f64::NEG_INFINITY, f64::INFINITY)
    };

    let secondary = region.longest_axis(Some(axis));
    let below_band = below.band(points, secondary, axis, lo, hi);
    let above_band = above.band(points, secondary, axis, lo, hi);

    let strip = interleave(points, secondary, &below_band, &above_band)?;

    let mut best_sq = best.distance_squared();
    let mut found: Option<(PointId, PointId)> = None;
    for i in 0..strip.len() {
        let (pi, side_i) = strip[i];
        let ci = points[pi.idx()].coord(secondary);
        for &(pj, side_j) in &strip[i + 1..] {
            let gap = points[pj.idx()].coord(secondary) - ci;
            if gap * gap >= best_sq {
                break;
            }
            if side_i == side_j {
                continue;
            }
            let ds = points[pi.idx()].distance_squared(&points[pj.idx()]);
            if ds < best_sq {
                best_sq = ds;
                found = Some((pi, pj));
            }
        }
    }

    Ok(match found {
        Some((a, b)) => PairResult::of(points[a.idx()], points[b.idx()]),
        None => PairResult::none(),
    })
}

// Merge the two band subsequences, each already ordered by the secondary
// axis, into one side-tagged sequence ordered by (coordinate, id). The two
// inputs can only produce an equal key by containing the same id, so the
// duplicate-membership check falls out of the merge comparison.
fn interleave<const D: usize>(
    points: &[Point<D>],
    secondary: usize,
    below: &[PointId],
    above: &[PointId],
) -> Result<Vec<(PointId, Side)>, SolveError> {
    let mut out = Vec::with_capacity(below.len() + above.len());
    let (mut i, mut j) = (0, 0);
    while i < below.len() && j < above.len() {
        let (a, b) = (below[i], above[j]);
        let ord = points[a.idx()]
            .coord(secondary)
            .total_cmp(&points[b.idx()].coord(secondary))
            .then(a.cmp(&b));
        match ord {
            Ordering::Less => {
                out.push((a, Side::Below));
                i += 1;
            }
            Ordering::Greater => {
                out.push((b, Side::Above));
                j += 1;
            }
            Ordering::Equal => {
                return Err(SolveError::PartitionInvariant(
                    InvariantViolation::DuplicateMembership { id: a },
                ));
            }
        }
    }
    out.extend(below[i..].iter().map(|&id| (id, Side::Below)));
    out.extend(above[j..].iter().map(|&id| (id, Side::Above)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;
    use proxima_index::points_from_coords;

    // Split a concrete set through the real partitioner so the merge sees
    // exactly what the solver would hand it.
    fn split<const D: usize>(
        coords: &[[f64; D]],
    ) -> (
        alloc::vec::Vec<Point<D>>,
        Region<D>,
        crate::partition::Partition<D>,
    ) {
        let pts = points_from_coords(coords);
        let region = Region::bounding(&pts).unwrap();
        let orders = AxisOrders::build(&pts);
        let part = partition(&pts, &region, &orders).unwrap();
        (pts, region, part)
    }

    #[test]
    fn recovers_a_pair_straddling_the_plane() {
        // The two closest points sit just either side of x = 5; everything
        // else is far apart on its own side.
        let (pts, region, part) = split(&[
            [0.0, 0.0],
            [0.0, 9.0],
            [4.999, 0.0],
            [5.001, 0.0],
            [10.0, 9.0],
            [10.0, 0.0],
        ]);
        let best = PairResult::of(pts[0], pts[1]); // distance 9 within one side
        let cross = merge(
            &pts,
            &region,
            part.axis,
            part.median,
            &part.below.orders,
            &part.above.orders,
            &best,
        )
        .unwrap();
        let (a, b) = cross.pair().unwrap();
        let mut got = [a.coord(0), b.coord(0)];
        got.sort_by(f64::total_cmp);
        assert_eq!(got, [4.999, 5.001]);
        assert!((cross.distance() - 0.002).abs() < 1e-12);
    }

    #[test]
    fn reports_nothing_when_no_cross_pair_improves() {
        // Closest pair lives entirely on the left; the gap across the
        // middle is wide.
        let (pts, region, part) = split(&[
            [0.0, 0.0],
            [0.1, 0.0],
            [1.0, 5.0],
            [9.0, 5.0],
            [10.0, 0.0],
            [10.0, 9.0],
        ]);
        let best = PairResult::of(pts[0], pts[1]); // distance 0.1
        let cross = merge(
            &pts,
            &region,
            part.axis,
            part.median,
            &part.below.orders,
            &part.above.orders,
            &best,
        )
        .unwrap();
        assert!(cross.pair().is_none());
        assert_eq!(cross.distance(), f64::INFINITY);
    }

    #[test]
    fn shared_secondary_coordinates_do_not_hide_the_minimum() {
        // Many points share y exactly; the single look-ahead of the old
        // two-cursor walk would step past the true pair here.
        let (pts, region, part) = split(&[
            [0.0, 1.0],
            [2.0, 1.0],
            [4.2, 1.0],
            [4.6, 1.0],
            [5.4, 1.0],
            [5.8, 1.0],
            [8.0, 1.0],
            [10.0, 1.0],
        ]);
        let best = PairResult::of(pts[0], pts[1]); // distance 2 on one side
        let cross = merge(
            &pts,
            &region,
            part.axis,
            part.median,
            &part.below.orders,
            &part.above.orders,
            &best,
        )
        .unwrap();
        let (a, b) = cross.pair().unwrap();
        let mut got = [a.coord(0), b.coord(0)];
        got.sort_by(f64::total_cmp);
        assert_eq!(got, [4.6, 5.4]);
        assert!((cross.distance() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn duplicate_membership_fails_fast() {
        // Hand the merge the same orders for both sides: every id is a
        // duplicate, which must surface as an invariant violation.
        let pts = points_from_coords(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.5], [3.0, 0.2]]);
        let region = Region::bounding(&pts).unwrap();
        let orders = AxisOrders::build(&pts);
        let best = PairResult::of(pts[0], pts[1]);
        let err = merge(&pts, &region, 0, 1.5, &orders, &orders, &best).unwrap_err();
        assert!(matches!(
            err,
            SolveError::PartitionInvariant(InvariantViolation::DuplicateMembership { .. })
        ));
    }

    #[test]
    fn band_excludes_points_at_exactly_the_bound() {
        // Cross pairs exist at exactly the best distance; none improve on
        // it, so the merge reports nothing.
        let (pts, region, part) = split(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [3.0, 0.0],
        ]);
        let best = PairResult::of(pts[0], pts[1]); // distance 1, same as every gap
        let cross = merge(
            &pts,
            &region,
            part.axis,
            part.median,
            &part.below.orders,
            &part.above.orders,
            &best,
        )
        .unwrap();
        assert!(cross.pair().is_none());
    }
}

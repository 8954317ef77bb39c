// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate solutions and how they combine.

use proxima_index::Point;

use crate::math;

/// A candidate closest pair: either two points and their distance, or no
/// pair at all with distance `+∞` (fewer than two points in scope).
///
/// Results are compared and combined by squared distance, so two results
/// produced from the same points are bit-identical; the square root is
/// taken once, at [`PairResult::distance`]. Values flow up the recursion
/// and are combined with [`PairResult::min`], never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairResult<const D: usize> {
    pair: Option<(Point<D>, Point<D>)>,
    dist_sq: f64,
}

impl<const D: usize> PairResult<D> {
    /// The empty candidate: no pair, distance `+∞`.
    pub const fn none() -> Self {
        Self {
            pair: None,
            dist_sq: f64::INFINITY,
        }
    }

    /// The candidate formed by two points.
    pub fn of(a: Point<D>, b: Point<D>) -> Self {
        let dist_sq = a.distance_squared(&b);
        Self {
            pair: Some((a, b)),
            dist_sq,
        }
    }

    /// The pair, if one exists. Points are identity-preserved members of
    /// the input set, not copies with altered coordinates.
    pub const fn pair(&self) -> Option<(Point<D>, Point<D>)> {
        self.pair
    }

    /// The Euclidean distance between the pair, or `+∞` without one.
    pub fn distance(&self) -> f64 {
        math::sqrt(self.dist_sq)
    }

    /// The squared distance; what the engine compares internally.
    pub const fn distance_squared(&self) -> f64 {
        self.dist_sq
    }

    /// The closer of two candidates. Left-biased on exact ties, which
    /// keeps repeated solves of the same input returning the same pair.
    pub fn min(self, other: Self) -> Self {
        if other.dist_sq < self.dist_sq {
            other
        } else {
            self
        }
    }
}

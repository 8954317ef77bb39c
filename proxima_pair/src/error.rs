// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failure modes of a solve.
//!
//! The computation is pure and deterministic, so no failure here is
//! transient: every variant is either a malformed input or an internal
//! defect, and retrying cannot help.

use core::fmt;

use proxima_index::PointId;

/// Why a solve failed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SolveError {
    /// A point has a non-finite coordinate. Detected when the partitioner
    /// first touches the point set; fatal to the whole solve.
    InvalidCoordinate {
        /// The offending point.
        id: PointId,
        /// The axis carrying the bad value.
        axis: usize,
        /// The value itself (NaN or an infinity).
        value: f64,
    },
    /// A partition invariant did not hold. This is an internal defect, not
    /// an input problem, and the engine fails loudly rather than silently
    /// dropping or double-counting a point.
    PartitionInvariant(InvariantViolation),
}

/// The specific partition invariant that was violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A point surfaced in both halves of a split.
    DuplicateMembership {
        /// The point found on both sides.
        id: PointId,
    },
    /// A split's halves do not add back up to the parent set.
    CountMismatch {
        /// The axis whose order was miscounted.
        axis: usize,
        /// Points below the median boundary.
        below: usize,
        /// Points at or above the median boundary.
        above: usize,
        /// Size of the parent set.
        expected: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { id, axis, value } => write!(
                f,
                "point {} has non-finite coordinate {value} on axis {axis}",
                id.get()
            ),
            Self::PartitionInvariant(v) => write!(f, "partition invariant violated: {v}"),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMembership { id } => {
                write!(f, "point {} appears in both halves of a split", id.get())
            }
            Self::CountMismatch {
                axis,
                below,
                above,
                expected,
            } => write!(
                f,
                "split on axis {axis} produced {below} + {above} points, expected {expected}"
            ),
        }
    }
}

impl core::error::Error for SolveError {}

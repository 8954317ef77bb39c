// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: point identities, points, and regions.

use alloc::vec::Vec;

/// Stable identity of a point, distinct from its coordinates.
///
/// Identities let the engine detect a point counted in two partitions at
/// once and let callers recognize their own points in a result. The solver
/// expects dense identities: `points[i].id` must be `PointId::from_index(i)`
/// so coordinate lookups stay O(1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u32);

impl PointId {
    /// Create an identity from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Create an identity from a slice index.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Point identities are intentionally 32-bit; 4 billion points is far past this engine's range."
    )]
    pub const fn from_index(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// The raw identity value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identity as a slice index.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A point in `D`-dimensional Euclidean space with a stable identity.
///
/// Coordinates are immutable once solving begins; no component of the
/// engine mutates them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<const D: usize> {
    /// Stable identity, distinct from the coordinates.
    pub id: PointId,
    /// Coordinates, one per axis.
    pub coords: [f64; D],
}

impl<const D: usize> Point<D> {
    /// Create a point from an identity and coordinates.
    pub const fn new(id: PointId, coords: [f64; D]) -> Self {
        Self { id, coords }
    }

    /// The coordinate on one axis.
    pub const fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let mut acc = 0.0;
        for axis in 0..D {
            let d = self.coords[axis] - other.coords[axis];
            acc += d * d;
        }
        acc
    }

    /// Whether every coordinate is finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

/// Build points from bare coordinate arrays, assigning identities by index.
pub fn points_from_coords<const D: usize>(coords: &[[f64; D]]) -> Vec<Point<D>> {
    coords
        .iter()
        .enumerate()
        .map(|(i, c)| Point::new(PointId::from_index(i), *c))
        .collect()
}

/// Axis-aligned bounding region in `D` dimensions.
///
/// Invariant: `min[axis] <= max[axis]` for every axis. Regions are value
/// types and are cloned, never aliased, when split.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region<const D: usize> {
    /// Per-axis lower bounds.
    pub min: [f64; D],
    /// Per-axis upper bounds.
    pub max: [f64; D],
}

impl<const D: usize> Region<D> {
    /// Create a region from per-axis bounds.
    pub const fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// The tight bounding region of a point slice, or `None` when empty.
    pub fn bounding(points: &[Point<D>]) -> Option<Self> {
        let mut it = points.iter();
        let first = it.next()?;
        let mut min = first.coords;
        let mut max = first.coords;
        for p in it {
            for axis in 0..D {
                min[axis] = min_c(min[axis], p.coords[axis]);
                max[axis] = max_c(max[axis], p.coords[axis]);
            }
        }
        Some(Self { min, max })
    }

    /// The extent of the region along one axis.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// The axis with the largest extent, optionally skipping one axis.
    ///
    /// Ties resolve to the lowest axis index. The exclusion is how the
    /// strip merge picks its secondary ordering axis: the next-longest
    /// dimension after the split axis.
    pub fn longest_axis(&self, exclude: Option<usize>) -> usize {
        let mut best: Option<(usize, f64)> = None;
        for axis in 0..D {
            if Some(axis) == exclude {
                continue;
            }
            let e = self.extent(axis);
            if best.is_none_or(|(_, b)| e > b) {
                best = Some((axis, e));
            }
        }
        best.map(|(axis, _)| axis).unwrap_or(0)
    }

    /// Whether the point lies inside the region (bounds inclusive).
    pub fn contains(&self, p: &Point<D>) -> bool {
        (0..D).all(|axis| self.min[axis] <= p.coords[axis] && p.coords[axis] <= self.max[axis])
    }

    /// Split the region at a coordinate on one axis.
    ///
    /// The halves share the splitting plane (`below.max[axis]` and
    /// `above.min[axis]` both equal `at`) but their interiors are disjoint.
    pub fn split_at(&self, axis: usize, at: f64) -> (Self, Self) {
        let mut below = *self;
        let mut above = *self;
        below.max[axis] = at;
        above.min[axis] = at;
        (below, above)
    }
}

// f64 min/max that ignore the possibility of NaN ordering surprises by
// using explicit comparisons; NaN inputs propagate into the bounds and are
// rejected later by the partitioner.
fn min_c(a: f64, b: f64) -> f64 {
    if b < a { b } else { a }
}

fn max_c(a: f64, b: f64) -> f64 {
    if b > a { b } else { a }
}

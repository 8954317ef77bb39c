// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=proxima_pair --heading-base-level=0

//! Proxima Pair: a divide-and-conquer closest-pair solver for 2D/3D point sets.
//!
//! Given a finite set of points, [`solve`] deterministically returns the
//! minimum-distance pair and its distance in O(n log n):
//!
//! - [`proxima_index::AxisOrders`] sorts the set along every axis once;
//!   recursion levels filter, never re-sort.
//! - [`partition::partition`] splits the region's longest dimension at the
//!   median into two near-equal, identity-disjoint halves.
//! - [`strip::merge`] recovers pairs whose points land on opposite sides
//!   of a split, scanning only the band around the median plane.
//! - Sets of three or fewer points are solved by exhaustive comparison.
//!
//! # Example
//!
//! ```rust
//! use proxima_index::points_from_coords;
//! use proxima_pair::solve;
//!
//! let pts = points_from_coords(&[
//!     [0.0, 0.0],
//!     [3.0, 4.0],
//!     [3.0, 4.5],
//!     [9.0, 1.0],
//! ]);
//! let result = solve(&pts, None)?;
//! assert_eq!(result.distance(), 0.5);
//! let (a, b) = result.pair().unwrap();
//! assert_eq!((a.id.get(), b.id.get()), (1, 2));
//! # Ok::<(), proxima_pair::SolveError>(())
//! ```
//!
//! Fewer than two points is valid input: the result then has no pair and
//! distance `+∞`. A non-finite coordinate in any set large enough to
//! partition fails the solve with [`SolveError::InvalidCoordinate`].
//!
//! ## Observing the recursion
//!
//! [`solve_traced`] emits one [`TraceNode`] per recursive call, in
//! post-order, carrying the node's region, split bookkeeping, and result.
//! This is how a visualization layer can replay the computation; the
//! solver never depends on the sink.
//!
//! ## no_std
//!
//! The crate is `no_std` + `alloc`. The `std` feature (default) uses std
//! float intrinsics for square roots; disable it and enable `libm` for
//! no_std builds. Everything else is squared-distance arithmetic in core.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
mod math;
pub mod partition;
pub mod result;
pub mod solver;
pub mod strip;

pub use error::{InvariantViolation, SolveError};
pub use result::PairResult;
pub use solver::{BASE_CASE_CUTOFF, TraceNode, TraceSplit, solve, solve_traced};

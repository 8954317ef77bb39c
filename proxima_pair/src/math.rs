// Copyright 2025 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math shims for no_std builds.
//!
//! The engine works in squared distances everywhere it can; the square
//! root only appears at result edges ([`crate::PairResult::distance`]) and
//! when sizing the strip band. With `std` that is `f64::sqrt`, without it
//! `libm::sqrt`.

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("proxima_pair requires either the `std` or `libm` feature");

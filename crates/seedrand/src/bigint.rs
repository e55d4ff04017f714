// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arbitrary-precision integer ranges.
//!
//! Same quantization as [`crate::range::int`] and
//! [`crate::range::int_with_step`], but bounds and results are [`BigInt`].
//!
//! # Precision
//!
//! The index `N` is `floor(u * count)` computed in `f64`, where `count` is
//! the number of candidates cast to a float. For ranges wider than about
//! 2^53 candidates, only a float-spaced subset of indices is reachable and
//! uniformity below that spacing is lost. Ranges whose candidate count
//! overflows `f64` are rejected.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive};

use crate::error::RandomError;
use crate::source::UniformSource;

/// Returns an integer in `[lo, hi]`.
///
/// # Errors
///
/// - [`RandomError::InvalidBounds`] if `lo > hi`.
/// - [`RandomError::RangeTooWide`] if the candidate count does not fit in an `f64`.
pub fn big_int<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: &BigInt,
    hi: &BigInt,
) -> Result<BigInt, RandomError> {
    if lo > hi {
        return Err(RandomError::InvalidBounds);
    }

    let count = hi - lo + BigInt::one();
    let n = scaled_index(source, &count)?;

    Ok(lo + n)
}

/// Returns `lo + k * step` in `[lo, hi]` for some `k >= 0`.
///
/// # Errors
///
/// - [`RandomError::InvalidBounds`] if `lo > hi`.
/// - [`RandomError::InvalidStep`] if `step <= 0`.
/// - [`RandomError::RangeTooWide`] if the candidate count does not fit in an `f64`.
pub fn big_int_with_step<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: &BigInt,
    hi: &BigInt,
    step: &BigInt,
) -> Result<BigInt, RandomError> {
    if lo > hi {
        return Err(RandomError::InvalidBounds);
    }
    if !step.is_positive() {
        return Err(RandomError::InvalidStep);
    }

    // hi - lo >= 0, so truncating division is floor division.
    let max_n = (hi - lo) / step;
    let n = scaled_index(source, &(max_n + BigInt::one()))?;

    Ok(lo + n * step)
}

fn scaled_index<S: UniformSource + ?Sized>(
    source: &mut S,
    count: &BigInt,
) -> Result<BigInt, RandomError> {
    let span = count
        .to_f64()
        .filter(|span| span.is_finite())
        .ok_or(RandomError::RangeTooWide)?;

    let n = BigInt::from_f64((source.next_f64() * span).floor()).unwrap_or_default();
    let last = count - BigInt::one();

    Ok(n.min(last))
}

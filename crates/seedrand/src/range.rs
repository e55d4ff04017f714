// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Range and step quantization.
//!
//! Each function maps one uniform draw `u` in `[0, 1)` onto a numeric range:
//!
//! | function            | result                                   | bounds      |
//! |---------------------|------------------------------------------|-------------|
//! | [`number`]          | `lo + u * (hi - lo)`                     | `lo < hi`   |
//! | [`number_with_step`]| `min(lo + floor(u * (maxN + 1)) * step, hi)` | `lo < hi` |
//! | [`int`]             | `lo + floor(u * (hi - lo + 1))`          | `lo <= hi`  |
//! | [`int_with_step`]   | `lo + floor(u * (maxN + 1)) * step`      | `lo <= hi`  |
//!
//! with `maxN = floor((hi - lo) / step)`.
//!
//! # Rounding at `hi`
//!
//! [`number`] is half-open in exact arithmetic only. When `hi - lo` spans a
//! few ulps, `lo + u * (hi - lo)` can round up to `hi` itself. The formula is
//! kept as is.
//!
//! # Top bucket of stepped floats
//!
//! [`number_with_step`] clamps to `hi` when `lo + N * step` lands above it.
//! When `hi - lo` is not a multiple of `step` the topmost bucket covers less
//! than a full step, but it is drawn as often as the others and then
//! clamped. The asymmetry is kept as is.
//!
//! All arguments are validated before drawing.

use crate::error::RandomError;
use crate::source::UniformSource;

/// Returns a float in `[lo, hi)`, up to rounding at `hi` for spans of a few ulps.
///
/// # Errors
///
/// - [`RandomError::NotANumber`] if either bound is `NaN`.
/// - [`RandomError::InvalidBounds`] unless both bounds are finite and `lo < hi`.
/// - [`RandomError::RangeTooWide`] if `hi - lo` overflows `f64`.
pub fn number<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: f64,
    hi: f64,
) -> Result<f64, RandomError> {
    check_float_bounds(lo, hi)?;

    Ok(lo + source.next_f64() * (hi - lo))
}

/// Returns `lo + k * step` for some `k >= 0`, clamped to `hi`.
///
/// # Errors
///
/// - [`RandomError::NotANumber`] if a bound or the step is `NaN`.
/// - [`RandomError::InvalidBounds`] unless both bounds are finite and `lo < hi`.
/// - [`RandomError::InvalidStep`] unless `step` is finite and positive.
/// - [`RandomError::RangeTooWide`] if `hi - lo` or the step count overflows `f64`.
pub fn number_with_step<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: f64,
    hi: f64,
    step: f64,
) -> Result<f64, RandomError> {
    check_float_bounds(lo, hi)?;

    if step.is_nan() {
        return Err(RandomError::NotANumber);
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(RandomError::InvalidStep);
    }

    let max_n = ((hi - lo) / step).floor();
    if !max_n.is_finite() {
        return Err(RandomError::RangeTooWide);
    }

    let n = (source.next_f64() * (max_n + 1.0)).floor();
    let value = lo + n * step;

    Ok(if value > hi { hi } else { value })
}

/// Returns an integer in `[lo, hi]`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidBounds`] if `lo > hi`.
pub fn int<S: UniformSource + ?Sized>(source: &mut S, lo: i64, hi: i64) -> Result<i64, RandomError> {
    if lo > hi {
        return Err(RandomError::InvalidBounds);
    }

    let count = i128::from(hi) - i128::from(lo) + 1;
    let n = scaled_index(source, count);

    Ok((i128::from(lo) + n) as i64)
}

/// Returns `lo + k * step` in `[lo, hi]` for some `k >= 0`.
///
/// # Errors
///
/// - [`RandomError::InvalidBounds`] if `lo > hi`.
/// - [`RandomError::InvalidStep`] if `step <= 0`.
pub fn int_with_step<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: i64,
    hi: i64,
    step: i64,
) -> Result<i64, RandomError> {
    if lo > hi {
        return Err(RandomError::InvalidBounds);
    }
    if step <= 0 {
        return Err(RandomError::InvalidStep);
    }

    let step = i128::from(step);
    let max_n = (i128::from(hi) - i128::from(lo)) / step;
    let n = scaled_index(source, max_n + 1);

    Ok((i128::from(lo) + n * step) as i64)
}

fn check_float_bounds(lo: f64, hi: f64) -> Result<(), RandomError> {
    if lo.is_nan() || hi.is_nan() {
        return Err(RandomError::NotANumber);
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(RandomError::InvalidBounds);
    }
    if !(hi - lo).is_finite() {
        return Err(RandomError::RangeTooWide);
    }

    Ok(())
}

/// `floor(u * count)`, capped at `count - 1`.
///
/// The cap only matters once `count` exceeds 2^53 and the product rounds up.
#[inline]
fn scaled_index<S: UniformSource + ?Sized>(source: &mut S, count: i128) -> i128 {
    let n = (source.next_f64() * count as f64).floor() as i128;
    n.min(count - 1)
}

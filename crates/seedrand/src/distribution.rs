// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Distribution and collection sampling.

use core::f64::consts::TAU;

use crate::encoding::draw_below;
use crate::error::RandomError;
use crate::source::UniformSource;

/// Returns `u < probability`.
///
/// `boolean(0.0)` is always `false` and `boolean(1.0)` always `true`. One
/// value is drawn in both cases.
///
/// # Errors
///
/// - [`RandomError::NotANumber`] if `probability` is `NaN`.
/// - [`RandomError::InvalidProbability`] unless `probability` is in `[0, 1]`.
pub fn boolean<S: UniformSource + ?Sized>(
    source: &mut S,
    probability: f64,
) -> Result<bool, RandomError> {
    if probability.is_nan() {
        return Err(RandomError::NotANumber);
    }
    if !(0.0..=1.0).contains(&probability) {
        return Err(RandomError::InvalidProbability);
    }

    Ok(source.next_f64() < probability)
}

/// Returns a uniformly chosen element.
///
/// # Errors
///
/// Returns [`RandomError::EmptyCollection`] if `items` is empty.
pub fn choice<'a, S: UniformSource + ?Sized, T>(
    source: &mut S,
    items: &'a [T],
) -> Result<&'a T, RandomError> {
    if items.is_empty() {
        return Err(RandomError::EmptyCollection);
    }

    Ok(&items[draw_below(source, items.len())])
}

/// Returns `count` distinct elements of `items`, in draw order.
///
/// Uses rejection sampling: an index is drawn uniformly and kept only if it
/// has not been kept before. The expected number of draws grows sharply as
/// `count` approaches `items.len()`, and there is no upper bound on the
/// number of draws for a single call.
///
/// # Errors
///
/// Returns [`RandomError::InvalidCount`] if `count > items.len()`.
pub fn sample<S: UniformSource + ?Sized, T: Clone>(
    source: &mut S,
    items: &[T],
    count: usize,
) -> Result<Vec<T>, RandomError> {
    if count > items.len() {
        return Err(RandomError::InvalidCount);
    }

    let mut taken = vec![false; items.len()];
    let mut picked = Vec::with_capacity(count);

    while picked.len() < count {
        let index = draw_below(source, items.len());

        if !taken[index] {
            taken[index] = true;
            picked.push(items[index].clone());
        }
    }

    Ok(picked)
}

/// Returns a shuffled copy of `items`; `items` itself is not modified.
///
/// Fisher-Yates from the last index down to 1, swapping `i` with
/// `j = floor(u * (i + 1))`.
pub fn shuffle<S: UniformSource + ?Sized, T: Clone>(source: &mut S, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = draw_below(source, i + 1);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Returns the first element whose cumulative weight reaches `u * total`.
///
/// A zero-weight element at the front is returned when the draw is exactly
/// zero, since its cumulative weight `0` reaches `r = 0`.
///
/// # Errors
///
/// - [`RandomError::LengthMismatch`] if `items` and `weights` differ in length.
/// - [`RandomError::EmptyCollection`] if `items` is empty.
/// - [`RandomError::NotANumber`] if a weight is `NaN`.
/// - [`RandomError::InvalidWeights`] if a weight is negative or not finite,
///   or all weights sum to zero.
pub fn weighted<'a, S: UniformSource + ?Sized, T>(
    source: &mut S,
    items: &'a [T],
    weights: &[f64],
) -> Result<&'a T, RandomError> {
    if items.len() != weights.len() {
        return Err(RandomError::LengthMismatch);
    }
    if items.is_empty() {
        return Err(RandomError::EmptyCollection);
    }
    if weights.iter().any(|w| w.is_nan()) {
        return Err(RandomError::NotANumber);
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(RandomError::InvalidWeights);
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(RandomError::InvalidWeights);
    }

    let r = source.next_f64() * total;
    let mut cumulative = 0.0;

    for (item, weight) in items.iter().zip(weights) {
        cumulative += weight;
        if cumulative >= r {
            return Ok(item);
        }
    }

    // Rounding only: the running sum ends at `total` and `r < total`.
    let last = weights.iter().rposition(|w| *w > 0.0).unwrap_or(items.len() - 1);
    Ok(&items[last])
}

/// Box-Muller normal draw: `sqrt(-2 ln u1) * cos(2 pi u2) * std_dev + mean`.
///
/// Consumes two draws. A first draw of exactly zero yields an infinite result.
///
/// # Errors
///
/// - [`RandomError::NotANumber`] if `mean` or `std_dev` is `NaN`.
/// - [`RandomError::InvalidParameter`] unless `std_dev` is finite and positive
///   and `mean` is finite.
pub fn normal<S: UniformSource + ?Sized>(
    source: &mut S,
    mean: f64,
    std_dev: f64,
) -> Result<f64, RandomError> {
    if mean.is_nan() || std_dev.is_nan() {
        return Err(RandomError::NotANumber);
    }
    if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(RandomError::InvalidParameter);
    }

    let u1 = source.next_f64();
    let u2 = source.next_f64();
    let z0 = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();

    Ok(z0 * std_dev + mean)
}

/// Inverse-CDF exponential draw: `-ln(1 - u) / rate`.
///
/// # Errors
///
/// - [`RandomError::NotANumber`] if `rate` is `NaN`.
/// - [`RandomError::InvalidParameter`] unless `rate` is finite and positive.
pub fn exponential<S: UniformSource + ?Sized>(
    source: &mut S,
    rate: f64,
) -> Result<f64, RandomError> {
    if rate.is_nan() {
        return Err(RandomError::NotANumber);
    }
    if !rate.is_finite() || rate <= 0.0 {
        return Err(RandomError::InvalidParameter);
    }

    Ok(-(1.0 - source.next_f64()).ln() / rate)
}

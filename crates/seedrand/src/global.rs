// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free functions bound to the ambient [`SystemSource`].
//!
//! Each function here calls the function of the same name in
//! [`range`](crate::range), [`encoding`](crate::encoding) or
//! [`distribution`](crate::distribution) with `&mut SystemSource`. To use
//! another source, call those modules directly or go through
//! [`RandomExt`](crate::RandomExt).
//!
//! Results are not reproducible unless [`reseed`] is called first, and even
//! then only as long as no other code in the process draws from the ambient
//! source in between.

#[cfg(feature = "bigint")]
use num_bigint::BigInt;

use crate::error::RandomError;
use crate::source::UniformSource;
use crate::system::{self, SystemSource};
use crate::{distribution, encoding, range};

/// Float in `[0, 1)`.
pub fn random() -> f64 {
    SystemSource.next_f64()
}

/// Replaces the ambient generator with one seeded from `seed`.
pub fn reseed(seed: u64) {
    system::reseed_ambient(seed);
}

/// See [`range::number`].
pub fn number(lo: f64, hi: f64) -> Result<f64, RandomError> {
    range::number(&mut SystemSource, lo, hi)
}

/// See [`range::number_with_step`].
pub fn number_with_step(lo: f64, hi: f64, step: f64) -> Result<f64, RandomError> {
    range::number_with_step(&mut SystemSource, lo, hi, step)
}

/// See [`range::int`].
pub fn int(lo: i64, hi: i64) -> Result<i64, RandomError> {
    range::int(&mut SystemSource, lo, hi)
}

/// See [`range::int_with_step`].
pub fn int_with_step(lo: i64, hi: i64, step: i64) -> Result<i64, RandomError> {
    range::int_with_step(&mut SystemSource, lo, hi, step)
}

/// See [`crate::bigint::big_int`].
#[cfg(feature = "bigint")]
pub fn big_int(lo: &BigInt, hi: &BigInt) -> Result<BigInt, RandomError> {
    crate::bigint::big_int(&mut SystemSource, lo, hi)
}

/// See [`crate::bigint::big_int_with_step`].
#[cfg(feature = "bigint")]
pub fn big_int_with_step(lo: &BigInt, hi: &BigInt, step: &BigInt) -> Result<BigInt, RandomError> {
    crate::bigint::big_int_with_step(&mut SystemSource, lo, hi, step)
}

/// See [`encoding::fill`].
pub fn fill(buf: &mut [u8]) {
    encoding::fill(&mut SystemSource, buf)
}

/// See [`encoding::fill_range`].
pub fn fill_range(buf: &mut [u8], start: usize, end: usize) -> Result<(), RandomError> {
    encoding::fill_range(&mut SystemSource, buf, start, end)
}

/// See [`encoding::string`].
pub fn string(len: usize, charset: &str) -> Result<String, RandomError> {
    encoding::string(&mut SystemSource, len, charset)
}

/// See [`encoding::alphanumeric`].
pub fn alphanumeric(len: usize) -> String {
    encoding::alphanumeric(&mut SystemSource, len)
}

/// See [`encoding::uuid`].
pub fn uuid() -> String {
    encoding::uuid(&mut SystemSource)
}

/// See [`distribution::boolean`].
pub fn boolean(probability: f64) -> Result<bool, RandomError> {
    distribution::boolean(&mut SystemSource, probability)
}

/// See [`distribution::choice`].
pub fn choice<T>(items: &[T]) -> Result<&T, RandomError> {
    distribution::choice(&mut SystemSource, items)
}

/// See [`distribution::sample`].
pub fn sample<T: Clone>(items: &[T], count: usize) -> Result<Vec<T>, RandomError> {
    distribution::sample(&mut SystemSource, items, count)
}

/// See [`distribution::shuffle`].
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    distribution::shuffle(&mut SystemSource, items)
}

/// See [`distribution::weighted`].
pub fn weighted<'a, T>(items: &'a [T], weights: &[f64]) -> Result<&'a T, RandomError> {
    distribution::weighted(&mut SystemSource, items, weights)
}

/// See [`distribution::normal`].
pub fn normal(mean: f64, std_dev: f64) -> Result<f64, RandomError> {
    distribution::normal(&mut SystemSource, mean, std_dev)
}

/// See [`distribution::exponential`].
pub fn exponential(rate: f64) -> Result<f64, RandomError> {
    distribution::exponential(&mut SystemSource, rate)
}

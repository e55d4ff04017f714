// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(feature = "bigint")]
use num_bigint::BigInt;

use crate::error::RandomError;
use crate::{distribution, encoding, range};

/// Anything that can supply uniform floats in `[0, 1)`.
///
/// Every range, encoding and distribution algorithm in this crate is written
/// against this trait, so a seeded [`Lcg32`](crate::Lcg32), the ambient
/// [`SystemSource`](crate::SystemSource) and a scripted test source are
/// interchangeable at every call site.
pub trait UniformSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts a closure into a [`UniformSource`].
///
/// The closure must return values in `[0, 1)`; this is not checked.
///
/// ```rust
/// use seedrand::{FnSource, RandomExt};
///
/// let mut source = FnSource(|| 0.5);
/// assert_eq!(source.int(0, 9).unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> UniformSource for FnSource<F> {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

/// Range, encoding and distribution operations bound to a [`UniformSource`].
///
/// Implemented for every source. Each method forwards to the free function of
/// the same name in [`range`], [`encoding`] or [`distribution`].
pub trait RandomExt: UniformSource {
    /// Float in `[lo, hi)`. See [`range::number`].
    fn number(&mut self, lo: f64, hi: f64) -> Result<f64, RandomError> {
        range::number(self, lo, hi)
    }

    /// Float `lo + k * step` not exceeding `hi`. See [`range::number_with_step`].
    fn number_with_step(&mut self, lo: f64, hi: f64, step: f64) -> Result<f64, RandomError> {
        range::number_with_step(self, lo, hi, step)
    }

    /// Integer in `[lo, hi]`. See [`range::int`].
    fn int(&mut self, lo: i64, hi: i64) -> Result<i64, RandomError> {
        range::int(self, lo, hi)
    }

    /// Integer `lo + k * step` in `[lo, hi]`. See [`range::int_with_step`].
    fn int_with_step(&mut self, lo: i64, hi: i64, step: i64) -> Result<i64, RandomError> {
        range::int_with_step(self, lo, hi, step)
    }

    /// Arbitrary-precision integer in `[lo, hi]`. See [`crate::bigint::big_int`].
    #[cfg(feature = "bigint")]
    fn big_int(&mut self, lo: &BigInt, hi: &BigInt) -> Result<BigInt, RandomError> {
        crate::bigint::big_int(self, lo, hi)
    }

    /// Arbitrary-precision `lo + k * step` in `[lo, hi]`.
    /// See [`crate::bigint::big_int_with_step`].
    #[cfg(feature = "bigint")]
    fn big_int_with_step(
        &mut self,
        lo: &BigInt,
        hi: &BigInt,
        step: &BigInt,
    ) -> Result<BigInt, RandomError> {
        crate::bigint::big_int_with_step(self, lo, hi, step)
    }

    /// Fills `buf` with random bytes. See [`encoding::fill`].
    fn fill(&mut self, buf: &mut [u8]) {
        encoding::fill(self, buf)
    }

    /// Fills `buf[start..end]` with random bytes. See [`encoding::fill_range`].
    fn fill_range(&mut self, buf: &mut [u8], start: usize, end: usize) -> Result<(), RandomError> {
        encoding::fill_range(self, buf, start, end)
    }

    /// String of `len` characters drawn from `charset`. See [`encoding::string`].
    fn string(&mut self, len: usize, charset: &str) -> Result<String, RandomError> {
        encoding::string(self, len, charset)
    }

    /// String of `len` ASCII letters and digits. See [`encoding::alphanumeric`].
    fn alphanumeric(&mut self, len: usize) -> String {
        encoding::alphanumeric(self, len)
    }

    /// Hyphenated lowercase UUID v4. See [`encoding::uuid`].
    fn uuid(&mut self) -> String {
        encoding::uuid(self)
    }

    /// `true` with the given probability. See [`distribution::boolean`].
    fn boolean(&mut self, probability: f64) -> Result<bool, RandomError> {
        distribution::boolean(self, probability)
    }

    /// Uniformly chosen element. See [`distribution::choice`].
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        distribution::choice(self, items)
    }

    /// `count` distinct elements. See [`distribution::sample`].
    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Result<Vec<T>, RandomError> {
        distribution::sample(self, items, count)
    }

    /// Shuffled copy of `items`. See [`distribution::shuffle`].
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        distribution::shuffle(self, items)
    }

    /// Element chosen with probability proportional to its weight.
    /// See [`distribution::weighted`].
    fn weighted<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Result<&'a T, RandomError> {
        distribution::weighted(self, items, weights)
    }

    /// Normal draw. See [`distribution::normal`].
    fn normal(&mut self, mean: f64, std_dev: f64) -> Result<f64, RandomError> {
        distribution::normal(self, mean, std_dev)
    }

    /// Exponential draw. See [`distribution::exponential`].
    fn exponential(&mut self, rate: f64) -> Result<f64, RandomError> {
        distribution::exponential(self, rate)
    }
}

impl<S: UniformSource + ?Sized> RandomExt for S {}

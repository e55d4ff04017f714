// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 32-bit linear congruential generator.
//!
//! # Algorithm
//!
//! ```text
//! state' = (1664525 * state + 1013904223) mod 2^32
//! u      = state' / 2^32
//! ```
//!
//! The multiply-add wraps at 32 bits. Any implementation that skips the
//! truncation produces a different sequence, so the arithmetic here is done
//! on `u32` with `wrapping_*` and never widened.
//!
//! # Reproducibility
//!
//! The whole generator is its 32-bit state. [`Lcg32::state`] and
//! [`Lcg32::set_state`] checkpoint and restore it exactly; restoring a state
//! and drawing again yields the same values bit for bit.
//!
//! # Ownership
//!
//! Every draw mutates the generator, so it is driven through `&mut`. It does
//! no internal locking: sharing one generator across threads requires an
//! external lock, and interleaved draws from several callers are only
//! reproducible if the interleaving is.

use rand_core::{RngCore, impls};
use tracing::trace;

use crate::encoding;
use crate::error::RandomError;
use crate::seed::{self, FOLDED_BYTES, SEED_LEN};
use crate::source::UniformSource;
use crate::system;

/// LCG multiplier (Numerical Recipes).
pub const MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
pub const INCREMENT: u32 = 1_013_904_223;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Advances a state by one step.
#[inline(always)]
pub const fn step(state: u32) -> u32 {
    MULTIPLIER.wrapping_mul(state).wrapping_add(INCREMENT)
}

/// Maps a state to `[0, 1)`.
#[inline(always)]
pub fn to_unit(state: u32) -> f64 {
    f64::from(state) / TWO_POW_32
}

/// Seeded, non-cryptographic pseudorandom generator.
///
/// # Example
///
/// ```rust
/// use seedrand::{Lcg32, RandomExt};
///
/// let mut rng = Lcg32::from_number(12345);
/// let checkpoint = rng.state();
///
/// let first = rng.int(1, 6).expect("valid bounds");
/// rng.set_state(checkpoint);
/// assert_eq!(rng.int(1, 6).expect("valid bounds"), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lcg32 {
    state: u32,
}

impl Lcg32 {
    /// Creates a generator from an integer seed, reduced modulo 2^32.
    pub fn from_number(seed: i64) -> Self {
        let state = seed::state_from_number(seed);
        trace!(seed, state, "lcg32 seeded from number");

        Self { state }
    }

    /// Creates a generator from a seed buffer of at most 32 bytes.
    ///
    /// Only the first four bytes reach the state.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SeedTooLong`] if `bytes` is longer than 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RandomError> {
        let state = seed::state_from_bytes(bytes)?;
        trace!(len = bytes.len(), state, "lcg32 seeded from bytes");

        Ok(Self { state })
    }

    /// Creates a generator from an exactly 32-byte seed.
    ///
    /// Only the first four bytes reach the state; the generator has 32 bits
    /// of state regardless of seed length.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SeedLengthMismatch`] unless `bytes` is exactly 32 bytes.
    pub fn from_seed(bytes: &[u8]) -> Result<Self, RandomError> {
        let state = seed::state_from_seed(bytes)?;
        trace!(state, "lcg32 seeded from 32-byte seed");

        Ok(Self { state })
    }

    /// Creates a generator with the given raw state.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Creates a generator from a single byte value in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::FixedSeedOutOfRange`] for values outside `[0, 255]`.
    pub fn from_fixed(value: i64) -> Result<Self, RandomError> {
        let state = seed::state_from_fixed(value)?;
        trace!(state, "lcg32 seeded from fixed byte");

        Ok(Self { state })
    }

    /// Creates a generator from four bytes of OS entropy.
    ///
    /// The bytes go through the same fold as [`Lcg32::from_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyNotAvailable`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RandomError> {
        let mut bytes = [0u8; FOLDED_BYTES];
        system::fill_entropy(&mut bytes)?;

        let state = seed::fold_bytes(&bytes);
        trace!(state, "lcg32 seeded from OS entropy");

        Ok(Self { state })
    }

    /// Advances the generator and returns the new raw state.
    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.state = step(self.state);
        self.state
    }

    /// Advances the generator and returns a float in `[0, 1)`.
    #[inline(always)]
    pub fn next_f64(&mut self) -> f64 {
        to_unit(self.next_u32())
    }

    /// Returns the current state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Replaces the current state.
    pub fn set_state(&mut self, state: u32) -> &mut Self {
        self.state = state;
        self
    }

    /// Draws a 32-byte buffer suitable for [`Lcg32::from_seed`].
    ///
    /// Advances this generator by 32 steps. The child generator only sees
    /// the first four bytes.
    pub fn seed(&mut self) -> [u8; SEED_LEN] {
        let mut out = [0u8; SEED_LEN];
        encoding::fill(self, &mut out);
        out
    }
}

impl UniformSource for Lcg32 {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        Lcg32::next_f64(self)
    }
}

impl RngCore for Lcg32 {
    fn next_u32(&mut self) -> u32 {
        Lcg32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    // `state >> 24` is exactly `floor(u * 256)`, so this matches `encoding::fill`.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = (Lcg32::next_u32(self) >> 24) as u8;
        }
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seed derivation.
//!
//! Maps external seed material to an initial 32-bit generator state. Every
//! byte-based path folds at most the first four bytes, big-endian, starting
//! from zero:
//!
//! ```text
//! n = 0
//! for byte in bytes[..min(4, len)]:
//!     n = (n << 8) | byte
//! ```
//!
//! Bytes past the fourth never reach the state. A 32-byte seed therefore
//! carries no more entropy into the generator than a 4-byte one; two
//! generators whose seeds share their first four bytes produce identical
//! sequences.

use crate::error::RandomError;

/// Maximum length accepted by [`state_from_bytes`].
pub const MAX_SEED_LEN: usize = 32;

/// Exact length required by [`state_from_seed`].
pub const SEED_LEN: usize = 32;

/// Number of leading seed bytes that feed the state.
pub(crate) const FOLDED_BYTES: usize = 4;

/// Reduces an integer seed modulo 2^32.
///
/// Negative seeds wrap, so `-1` maps to `0xFFFF_FFFF`.
#[inline]
pub fn state_from_number(seed: i64) -> u32 {
    seed as u32
}

/// Folds a seed buffer of at most [`MAX_SEED_LEN`] bytes into a state.
///
/// # Errors
///
/// Returns [`RandomError::SeedTooLong`] if `bytes` is longer than 32 bytes.
pub fn state_from_bytes(bytes: &[u8]) -> Result<u32, RandomError> {
    if bytes.len() > MAX_SEED_LEN {
        return Err(RandomError::SeedTooLong);
    }

    Ok(fold_bytes(bytes))
}

/// Folds an exactly [`SEED_LEN`]-byte seed into a state.
///
/// Only the first four bytes are used.
///
/// # Errors
///
/// Returns [`RandomError::SeedLengthMismatch`] unless `bytes` is exactly 32 bytes.
pub fn state_from_seed(bytes: &[u8]) -> Result<u32, RandomError> {
    if bytes.len() != SEED_LEN {
        return Err(RandomError::SeedLengthMismatch);
    }

    Ok(fold_bytes(bytes))
}

/// Uses a single byte value in `[0, 255]` as the state.
///
/// # Errors
///
/// Returns [`RandomError::FixedSeedOutOfRange`] for values outside `[0, 255]`.
pub fn state_from_fixed(value: i64) -> Result<u32, RandomError> {
    u8::try_from(value)
        .map(u32::from)
        .map_err(|_| RandomError::FixedSeedOutOfRange)
}

#[inline]
pub(crate) fn fold_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(FOLDED_BYTES)
        .fold(0u32, |n, &byte| (n << 8) | u32::from(byte))
}

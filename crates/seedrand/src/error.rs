// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Coarse classification of a [`RandomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value of the wrong kind was supplied (e.g. `NaN` where a number is required).
    Type,
    /// A value of the right kind was supplied but lies outside the required domain.
    Range,
}

/// Errors returned when a precondition of a sampling operation is violated.
///
/// Every operation validates its arguments before drawing, so a call that
/// returns an error leaves the uniform source untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// A numeric argument was `NaN`.
    #[error("NotANumber")]
    NotANumber,

    /// A charset with no characters was supplied.
    #[error("EmptyCharset")]
    EmptyCharset,

    /// Range bounds are misordered or not finite.
    #[error("InvalidBounds")]
    InvalidBounds,

    /// Step is zero, negative or not finite.
    #[error("InvalidStep")]
    InvalidStep,

    /// The range cannot be represented as a float span.
    #[error("RangeTooWide")]
    RangeTooWide,

    /// Probability outside `[0, 1]`.
    #[error("InvalidProbability")]
    InvalidProbability,

    /// Distribution parameter (standard deviation or rate) is not strictly positive.
    #[error("InvalidParameter")]
    InvalidParameter,

    /// Operation requires at least one element.
    #[error("EmptyCollection")]
    EmptyCollection,

    /// Items and weights have different lengths.
    #[error("LengthMismatch")]
    LengthMismatch,

    /// A weight is negative or not finite, or all weights sum to zero.
    #[error("InvalidWeights")]
    InvalidWeights,

    /// Requested more distinct elements than the source holds.
    #[error("InvalidCount")]
    InvalidCount,

    /// Slice bounds violate `start <= end <= len`.
    #[error("SliceOutOfBounds")]
    SliceOutOfBounds,

    /// Seed buffer is longer than 32 bytes.
    #[error("SeedTooLong")]
    SeedTooLong,

    /// Seed buffer is not exactly 32 bytes.
    #[error("SeedLengthMismatch")]
    SeedLengthMismatch,

    /// Fixed seed outside `[0, 255]`.
    #[error("FixedSeedOutOfRange")]
    FixedSeedOutOfRange,

    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

impl RandomError {
    /// Returns whether this is a type failure or a range failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber | Self::EmptyCharset => ErrorKind::Type,
            _ => ErrorKind::Range,
        }
    }
}

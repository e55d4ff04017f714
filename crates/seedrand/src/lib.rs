// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # seedrand
//!
//! Reproducible pseudorandom generation with range, encoding and distribution
//! sampling.
//!
//! **Not cryptographically secure.** The generator is a 32-bit linear
//! congruential generator chosen for bit-exact reproducibility, not for
//! unpredictability.
//!
//! ## Core Types
//!
//! - [`Lcg32`]: seeded generator with checkpoint/restore via
//!   [`state`](Lcg32::state) / [`set_state`](Lcg32::set_state)
//! - [`SystemSource`]: process-wide ambient source, seeded from OS entropy
//! - [`FnSource`]: adapts a closure returning `[0, 1)` floats
//!
//! ## Traits
//!
//! - [`UniformSource`]: anything producing floats in `[0, 1)`
//! - [`RandomExt`]: every sampling operation, available on any source
//!
//! ## Modules
//!
//! - [`range`]: continuous and integer ranges, with or without a step
//! - [`bigint`]: arbitrary-precision integer ranges (feature `bigint`)
//! - [`encoding`]: byte fill, charset strings, UUID v4
//! - [`distribution`]: boolean, choice, sample, shuffle, weighted, normal, exponential
//! - [`seed`]: seed derivation rules
//! - [`global`]: the same operations bound to [`SystemSource`]
//!
//! ## Example
//!
//! ```rust
//! use seedrand::{Lcg32, RandomExt};
//!
//! let mut a = Lcg32::from_number(12345);
//! let mut b = Lcg32::from_number(12345);
//!
//! assert_eq!(a.int(1, 100).unwrap(), b.int(1, 100).unwrap());
//! assert_eq!(a.uuid(), b.uuid());
//! assert_eq!(a.shuffle(&[1, 2, 3, 4]), b.shuffle(&[1, 2, 3, 4]));
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`RandomError`], classified by
//! [`RandomError::kind`] as a type or range failure. Arguments are checked
//! before the first draw, so a failed call never advances the source.
//!
//! ## Features
//!
//! - `bigint` (default): [`bigint`] module via `num-bigint`
//! - `test-utils`: scripted and counting sources in `test_utils`

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod source;
mod support;
mod system;

pub mod distribution;
pub mod encoding;
pub mod global;
pub mod lcg;
pub mod range;
pub mod seed;

#[cfg(feature = "bigint")]
pub mod bigint;

pub use error::{ErrorKind, RandomError};
pub use lcg::Lcg32;
pub use source::{FnSource, RandomExt, UniformSource};
pub use system::SystemSource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

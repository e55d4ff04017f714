// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide ambient uniform source.
//!
//! The ambient source is a single [`StdRng`] shared by the whole process,
//! seeded once from OS entropy on first use. Its output is not reproducible
//! across runs and is interleaved between all callers; use a seeded
//! [`Lcg32`](crate::Lcg32) whenever a sequence has to be replayed.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use getrandom::Error as GetRandomError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::RandomError;
use crate::source::UniformSource;

static AMBIENT: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(seed_ambient()));

/// Handle to the process-wide ambient source.
///
/// Zero-sized; every handle draws from the same shared generator.
///
/// ```rust
/// use seedrand::{RandomExt, SystemSource};
///
/// let roll = SystemSource.int(1, 6).expect("valid bounds");
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl UniformSource for SystemSource {
    fn next_f64(&mut self) -> f64 {
        lock_ambient().random::<f64>()
    }
}

/// Replaces the ambient generator with one seeded from `seed`.
pub(crate) fn reseed_ambient(seed: u64) {
    *lock_ambient() = StdRng::seed_from_u64(seed);
    debug!(seed, "ambient source reseeded");
}

pub(crate) fn fill_entropy(dest: &mut [u8]) -> Result<(), RandomError> {
    fill_entropy_with(&getrandom::fill, dest)
}

pub(crate) fn fill_entropy_with(
    fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
    dest: &mut [u8],
) -> Result<(), RandomError> {
    fill_fn(dest).map_err(|_| RandomError::EntropyNotAvailable)
}

// Poisoning is ignored.
fn lock_ambient() -> MutexGuard<'static, StdRng> {
    AMBIENT.lock().unwrap_or_else(PoisonError::into_inner)
}

fn seed_ambient() -> StdRng {
    let mut seed = [0u8; 32];

    match fill_entropy(&mut seed) {
        Ok(()) => debug!("ambient source seeded from OS entropy"),
        Err(err) => {
            warn!(%err, "OS entropy unavailable, seeding ambient source from clock");
            seed = clock_seed();
        }
    }

    StdRng::from_seed(seed)
}

fn clock_seed() -> [u8; 32] {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let mut seed = [0u8; 32];
    seed[..16].copy_from_slice(&nanos.to_le_bytes());
    seed
}

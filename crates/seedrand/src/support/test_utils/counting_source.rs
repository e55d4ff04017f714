// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::source::UniformSource;

/// Wraps a source and counts how many values were drawn from it.
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    draws: usize,
}

impl<S: UniformSource> CountingSource<S> {
    /// Wraps `inner` with a zeroed counter.
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: UniformSource> UniformSource for CountingSource<S> {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        self.inner.next_f64()
    }
}

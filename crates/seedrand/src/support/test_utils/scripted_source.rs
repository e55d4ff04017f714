// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::source::UniformSource;

/// Uniform source that replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `values` in order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted values must lie in [0, 1)"
        );

        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

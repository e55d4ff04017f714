// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for driving algorithms with known uniform draws.

mod counting_source;
mod scripted_source;

pub use counting_source::CountingSource;
pub use scripted_source::ScriptedSource;

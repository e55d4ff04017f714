// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte fill, charset strings and UUID v4.

use uuid::Uuid;

use crate::error::RandomError;
use crate::source::UniformSource;

/// ASCII letters followed by digits.
pub const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Lowercase hexadecimal digits.
pub const HEX_LOWER: &str = "0123456789abcdef";

// x: uniform nibble, y: variant nibble in {8, 9, a, b}, 4: fixed version.
const UUID_TEMPLATE: &[u8; 36] = b"xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Fills `buf` with `floor(u * 256)` per byte.
pub fn fill<S: UniformSource + ?Sized>(source: &mut S, buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte = draw_below(source, 256) as u8;
    }
}

/// Fills `buf[start..end]`, leaving the rest untouched.
///
/// # Errors
///
/// Returns [`RandomError::SliceOutOfBounds`] unless `start <= end <= buf.len()`.
pub fn fill_range<S: UniformSource + ?Sized>(
    source: &mut S,
    buf: &mut [u8],
    start: usize,
    end: usize,
) -> Result<(), RandomError> {
    if start > end || end > buf.len() {
        return Err(RandomError::SliceOutOfBounds);
    }

    fill(source, &mut buf[start..end]);

    Ok(())
}

/// Builds a string of `len` characters, each drawn uniformly from `charset`.
///
/// # Errors
///
/// Returns [`RandomError::EmptyCharset`] if `charset` is empty.
pub fn string<S: UniformSource + ?Sized>(
    source: &mut S,
    len: usize,
    charset: &str,
) -> Result<String, RandomError> {
    let chars: Vec<char> = charset.chars().collect();

    if chars.is_empty() {
        return Err(RandomError::EmptyCharset);
    }

    Ok((0..len)
        .map(|_| chars[draw_below(source, chars.len())])
        .collect())
}

/// Builds a string of `len` characters from [`ALPHANUMERIC`].
pub fn alphanumeric<S: UniformSource + ?Sized>(source: &mut S, len: usize) -> String {
    let charset = ALPHANUMERIC.as_bytes();

    (0..len)
        .map(|_| char::from(charset[draw_below(source, charset.len())]))
        .collect()
}

/// Builds a hyphenated lowercase UUID v4.
///
/// Nibbles are drawn left to right. The version nibble (string position 14)
/// is always `4` and consumes no draw; the variant nibble (position 19) is
/// `floor(u * 4) + 8`.
pub fn uuid<S: UniformSource + ?Sized>(source: &mut S) -> String {
    let mut bytes = [0u8; 16];
    let mut nibble = 0usize;

    for &slot in UUID_TEMPLATE {
        let value = match slot {
            b'-' => continue,
            b'4' => 4,
            b'y' => draw_below(source, 4) as u8 + 8,
            _ => draw_below(source, 16) as u8,
        };

        bytes[nibble / 2] |= if nibble % 2 == 0 { value << 4 } else { value };
        nibble += 1;
    }

    Uuid::from_bytes(bytes).hyphenated().to_string()
}

/// `floor(u * n)`, capped at `n - 1`. `n` must be non-zero.
#[inline]
pub(crate) fn draw_below<S: UniformSource + ?Sized>(source: &mut S, n: usize) -> usize {
    debug_assert!(n > 0, "n must be non-zero");

    ((source.next_f64() * n as f64).floor() as usize).min(n - 1)
}

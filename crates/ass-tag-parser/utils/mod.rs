//! Utility functions and shared types for the tag parser
//!
//! Contains the lexical helpers used by both directions of the grammar:
//! number scanning, `&H..&` hex values, parenthesized argument splitting
//! and canonical number formatting.
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::utils::{parse_hex_value, Number};
//!
//! assert_eq!(parse_hex_value("&H1A&", 2), Some((0x1A, 5)));
//! assert_eq!(Number(2.0).to_string(), "2");
//! assert_eq!(Number(-5.5).to_string(), "-5.5");
//! ```

use alloc::vec::Vec;
use core::fmt;

pub mod errors;

pub use errors::{BaseError, ComposeError, ErrorCategory, Result};

/// Canonical display of a real number
///
/// Integral values print without a fractional part, everything else in the
/// shortest form that reads back to the same value. Negative zero prints
/// as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Length of the integer literal (`[+-]?digits`) at the start of `s`
///
/// Returns 0 when `s` does not start with an integer.
#[must_use]
pub fn int_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}

/// Length of the real literal (`[+-]?(digits[.digits] | .digits)`) at the start of `s`
///
/// Returns 0 when `s` does not start with a number.
#[must_use]
pub fn real_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = count_digits(&bytes[sign..]);
    let mut len = sign + whole;

    if bytes.get(len) == Some(&b'.') {
        let fraction = count_digits(&bytes[len + 1..]);
        if fraction > 0 {
            len += 1 + fraction;
        } else if whole > 0 {
            // "5." is accepted as 5 and the dot consumed with it
            len += 1;
        }
    }

    if whole == 0 && len == sign {
        0
    } else {
        len
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse `s` as a complete real literal
#[must_use]
pub fn parse_real(s: &str) -> Option<f64> {
    if s.is_empty() || real_prefix_len(s) != s.len() {
        return None;
    }
    s.parse().ok()
}

/// Parse `s` as a complete integer literal
#[must_use]
pub fn parse_int(s: &str) -> Option<i64> {
    if s.is_empty() || int_prefix_len(s) != s.len() {
        return None;
    }
    s.parse().ok()
}

/// Parse an `&H<hex>&` value with exactly `digits` hex digits at the start of `s`
///
/// Returns the value and the number of bytes consumed.
#[must_use]
pub fn parse_hex_value(s: &str, digits: usize) -> Option<(u32, usize)> {
    let body = s.strip_prefix("&H")?;
    let hex = body.get(..digits)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    if body.as_bytes().get(digits) != Some(&b'&') {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some((value, 2 + digits + 1))
}

/// Find the byte index of the `)` matching the `(` at index 0 of `s`
#[must_use]
pub fn find_closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, byte) in s.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `s` on commas outside nested parentheses
///
/// Each piece is returned with its byte offset inside `s`; pieces are not
/// trimmed.
#[must_use]
pub fn split_top_level(s: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, byte) in s.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                pieces.push((start, &s[start..index]));
                start = index + 1;
            }
            _ => {}
        }
    }
    pieces.push((start, &s[start..]));
    pieces
}

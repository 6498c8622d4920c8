//! Coordinate translation between the 1-based inclusive grid callers use
//! and the 0-based half-open grid the remote service expects.
//!
//! All functions here are pure. Indices below 1 are rejected at
//! translation time, before any request can be built, so service
//! coordinates never go negative.

use crate::error::{Axis, CoordError, RangeError};

/// Translates a 1-based row index to the service's 0-based index.
pub fn to_service_row(row: u32) -> Result<i64, CoordError> {
    to_service_index(row, Axis::Row)
}

/// Translates a 1-based column index to the service's 0-based index.
pub fn to_service_col(col: u32) -> Result<i64, CoordError> {
    to_service_index(col, Axis::Column)
}

fn to_service_index(index: u32, axis: Axis) -> Result<i64, CoordError> {
    if index < 1 {
        return Err(CoordError::Invalid { axis, index });
    }
    Ok(i64::from(index) - 1)
}

/// Translates an inclusive 1-based `[start, end]` pair into the half-open
/// 0-based `[start - 1, end)` pair the service expects.
///
/// The end index is exclusive on the service side, so its numeric value is
/// unchanged; only the start shifts down by one.
pub fn to_service_span(start: u32, end: u32, axis: Axis) -> Result<(i64, i64), CoordError> {
    if start > end {
        return Err(CoordError::StartPastEnd { axis, start, end });
    }
    let lo = to_service_index(start, axis)?;
    Ok((lo, i64::from(end)))
}

/// Converts a 1-based column index to its letter form (1 -> "A", 27 -> "AA").
///
/// Letters are base-26 digits with no zero: A=1 through Z=26, then AA=27.
pub fn column_to_letters(col: u32) -> Result<String, CoordError> {
    if col < 1 {
        return Err(CoordError::Invalid {
            axis: Axis::Column,
            index: col,
        });
    }
    let mut letters = Vec::with_capacity(3);
    let mut n = col;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    Ok(letters.iter().rev().collect())
}

/// Converts column letters back to the 1-based index ("A" -> 1, "AA" -> 27).
///
/// Exact inverse of [`column_to_letters`] over its whole output range.
/// Lowercase input is accepted; empty or non-letter input is rejected, as
/// is anything that would overflow a `u32` column index.
pub fn letters_to_column(letters: &str) -> Result<u32, RangeError> {
    let invalid = || RangeError::InvalidColumnLetters {
        found: letters.to_string(),
    };
    if letters.is_empty() {
        return Err(invalid());
    }
    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)?;
    }
    Ok(col)
}

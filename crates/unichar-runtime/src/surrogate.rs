//! UTF-16 surrogate pair codec.
//!
//! Pure arithmetic over code points and code units; no table lookups.

use unichar_common_core::{
    MAX_CODE_POINT, MAX_HIGH_SURROGATE, MAX_LOW_SURROGATE, MIN_CODE_POINT, MIN_HIGH_SURROGATE,
    MIN_LOW_SURROGATE, MIN_SUPPLEMENTARY_CODE_POINT,
};

use crate::error::{CharError, Result};

/// Combine a surrogate pair into a code point.
///
/// The halves are not validated: callers that care must check
/// `is_surrogate_pair` first. Invalid input yields an unspecified value
/// but never panics.
#[inline]
pub fn to_code_point(high: u16, low: u16) -> i32 {
    let hi = (high as i32).wrapping_sub(MIN_HIGH_SURROGATE as i32);
    let lo = (low as i32).wrapping_sub(MIN_LOW_SURROGATE as i32);
    ((hi << 10) | lo).wrapping_add(MIN_SUPPLEMENTARY_CODE_POINT)
}

/// Check if the code point needs a surrogate pair in UTF-16.
#[inline]
pub fn is_supplementary_code_point(code_point: i32) -> bool {
    (MIN_SUPPLEMENTARY_CODE_POINT..=MAX_CODE_POINT).contains(&code_point)
}

/// Check if the value is a code point at all.
#[inline]
pub fn is_valid_code_point(code_point: i32) -> bool {
    (MIN_CODE_POINT..=MAX_CODE_POINT).contains(&code_point)
}

/// Number of UTF-16 units needed for the code point.
#[inline]
pub fn char_count(code_point: i32) -> usize {
    if code_point >= MIN_SUPPLEMENTARY_CODE_POINT {
        2
    } else {
        1
    }
}

/// Encode a code point as UTF-16 units.
///
/// Returns a single unit below the supplementary range, otherwise the
/// high surrogate followed by the low surrogate.
pub fn to_chars(code_point: i32) -> Result<Vec<u16>> {
    if (MIN_CODE_POINT..MIN_SUPPLEMENTARY_CODE_POINT).contains(&code_point) {
        return Ok(vec![code_point as u16]);
    }
    if is_supplementary_code_point(code_point) {
        let offset = code_point - MIN_SUPPLEMENTARY_CODE_POINT;
        let low = ((offset & 0x3FF) as u16) + MIN_LOW_SURROGATE;
        let high = (((offset >> 10) & 0x3FF) as u16) + MIN_HIGH_SURROGATE;
        return Ok(vec![high, low]);
    }
    log::debug!("rejecting code point {:#x}", code_point);
    Err(CharError::InvalidCodePoint { code_point })
}

/// Encode a sequence of code points as UTF-16, stopping at the first
/// invalid one.
pub fn encode<I>(code_points: I) -> Result<Vec<u16>>
where
    I: IntoIterator<Item = i32>,
{
    let mut units = Vec::new();
    for cp in code_points {
        units.extend(to_chars(cp)?);
    }
    Ok(units)
}

/// Iterate the code points of a UTF-16 slice.
pub fn code_points(units: &[u16]) -> CodePoints<'_> {
    CodePoints { units, pos: 0 }
}

/// Iterator returned by `code_points`.
///
/// Well-formed pairs are combined; lone surrogates are yielded as their
/// own value.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let high = *self.units.get(self.pos)?;
        self.pos += 1;
        if (MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE).contains(&high) {
            if let Some(&low) = self.units.get(self.pos) {
                if (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).contains(&low) {
                    self.pos += 1;
                    return Some(to_code_point(high, low));
                }
            }
        }
        Some(high as i32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.units.len() - self.pos;
        ((rest + 1) / 2, Some(rest))
    }
}

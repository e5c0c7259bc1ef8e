//! Character classification and conversion.
//!
//! Category-derived predicates are computed here; everything keyed
//! directly by the code unit is delegated to the primitives.

use unichar_common_core::{Category, MAX_RADIX, MIN_RADIX, MIN_SUPPLEMENTARY_CODE_POINT};

use crate::error::{CharError, Result};
use crate::primitives::{CategoryTable, CharPrimitives, StdPrimitives};

/// Check that `radix` is a valid radix for digit conversion.
///
/// Returns `radix` unchanged when it is within `MIN_RADIX..=MAX_RADIX`.
pub fn check_radix(radix: i32) -> Result<i32> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        log::debug!("rejecting radix {}", radix);
        return Err(CharError::InvalidRadix { radix });
    }
    Ok(radix)
}

/// Classifier over a category table and a set of native primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharClassifier<P = StdPrimitives> {
    primitives: P,
}

impl<P> CharClassifier<P>
where
    P: CategoryTable + CharPrimitives,
{
    pub const fn new(primitives: P) -> Self {
        Self { primitives }
    }

    /// Get the underlying primitives.
    #[inline]
    pub fn primitives(&self) -> &P {
        &self.primitives
    }

    // === Category ===

    /// General category of a code unit.
    #[inline]
    pub fn category(&self, c: u16) -> Category {
        self.primitives.category(c as i32)
    }

    /// General category of a full code point.
    #[inline]
    pub fn category_of(&self, code_point: i32) -> Category {
        self.primitives.category(code_point)
    }

    /// Ordinal of the general category of a code unit.
    #[inline]
    pub fn category_value(&self, c: u16) -> u8 {
        self.category(c).value()
    }

    // === Category-derived predicates ===

    /// Check if char is assigned in Unicode.
    pub fn is_defined(&self, c: u16) -> bool {
        self.category(c) != Category::Unassigned
    }

    /// Check if char is a letter.
    pub fn is_letter(&self, c: u16) -> bool {
        let value = self.category_value(c);
        (Category::UppercaseLetter.value()..=Category::OtherLetter.value()).contains(&value)
    }

    /// Check if char is a letter or a decimal digit.
    pub fn is_letter_or_digit(&self, c: u16) -> bool {
        self.is_letter(c) || self.is_digit(c)
    }

    /// Check if char is a decimal digit.
    pub fn is_digit(&self, c: u16) -> bool {
        self.category(c) == Category::DecimalDigitNumber
    }

    /// Check if char is uppercase.
    pub fn is_upper_case(&self, c: u16) -> bool {
        self.category(c) == Category::UppercaseLetter
    }

    /// Check if char is lowercase.
    pub fn is_lower_case(&self, c: u16) -> bool {
        self.category(c) == Category::LowercaseLetter
    }

    /// Check if char is titlecase.
    pub fn is_title_case(&self, c: u16) -> bool {
        self.category(c) == Category::TitlecaseLetter
    }

    // === Delegated predicates ===

    #[inline]
    pub fn is_identifier_ignorable(&self, c: u16) -> bool {
        self.primitives.is_identifier_ignorable(c)
    }

    #[inline]
    pub fn is_iso_control(&self, c: u16) -> bool {
        self.primitives.is_iso_control(c)
    }

    #[inline]
    pub fn is_whitespace(&self, c: u16) -> bool {
        self.primitives.is_whitespace(c)
    }

    #[inline]
    pub fn is_high_surrogate(&self, c: u16) -> bool {
        self.primitives.is_high_surrogate(c)
    }

    #[inline]
    pub fn is_low_surrogate(&self, c: u16) -> bool {
        self.primitives.is_low_surrogate(c)
    }

    /// Check if `high` and `low` form a surrogate pair, in that order.
    pub fn is_surrogate_pair(&self, high: u16, low: u16) -> bool {
        self.is_high_surrogate(high) && self.is_low_surrogate(low)
    }

    // === Case conversion ===

    #[inline]
    pub fn to_upper_case(&self, c: u16) -> u16 {
        self.primitives.to_upper_case(c)
    }

    #[inline]
    pub fn to_lower_case(&self, c: u16) -> u16 {
        self.primitives.to_lower_case(c)
    }

    /// Convert a code point to uppercase.
    ///
    /// Supplementary code points are returned unchanged. Values below the
    /// supplementary range are truncated to a code unit before mapping.
    pub fn to_upper_case_code_point(&self, code_point: i32) -> i32 {
        if code_point < MIN_SUPPLEMENTARY_CODE_POINT {
            self.to_upper_case(code_point as u16) as i32
        } else {
            code_point
        }
    }

    /// Convert a code point to lowercase.
    ///
    /// Same limitations as `to_upper_case_code_point`.
    pub fn to_lower_case_code_point(&self, code_point: i32) -> i32 {
        if code_point < MIN_SUPPLEMENTARY_CODE_POINT {
            self.to_lower_case(code_point as u16) as i32
        } else {
            code_point
        }
    }

    // === Digits ===

    /// Numeric value of `c` in `radix`.
    ///
    /// Fails if the radix is invalid. A char that is not a digit in a
    /// valid radix yields `NOT_A_DIGIT` (-1), not an error.
    pub fn digit_of(&self, c: u16, radix: i32) -> Result<i32> {
        let radix = check_radix(radix)?;
        Ok(self.primitives.digit_of_checked(c, radix))
    }
}

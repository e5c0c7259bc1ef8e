//! External collaborators of the classifier.
//!
//! The classifier does not own any Unicode data. It asks a `CategoryTable`
//! for the general category of a code point and a `CharPrimitives`
//! implementation for everything keyed directly by the code unit.
//! `StdPrimitives` is the adapter used outside of tests.

use icu_casemap::CaseMapper;
use unicode_general_category::{get_general_category, GeneralCategory};
use unichar_common_core::{
    Category, MAX_CODE_POINT, MAX_HIGH_SURROGATE, MAX_LOW_SURROGATE, MIN_CODE_POINT,
    MIN_HIGH_SURROGATE, MIN_LOW_SURROGATE, NOT_A_DIGIT,
};

/// Maps a code point to its general category.
///
/// Must be total: values outside `0..=0x10FFFF` report `Unassigned`.
pub trait CategoryTable {
    fn category(&self, code_point: i32) -> Category;
}

/// Primitives keyed purely by the UTF-16 code unit.
pub trait CharPrimitives {
    fn is_identifier_ignorable(&self, c: u16) -> bool;

    /// True iff `c` is in `0x00..=0x1F` or `0x7F..=0x9F`.
    fn is_iso_control(&self, c: u16) -> bool;

    fn is_whitespace(&self, c: u16) -> bool;

    fn to_upper_case(&self, c: u16) -> u16;

    fn to_lower_case(&self, c: u16) -> u16;

    fn is_high_surrogate(&self, c: u16) -> bool;

    fn is_low_surrogate(&self, c: u16) -> bool;

    /// Numeric value of `c` in `radix`, or `NOT_A_DIGIT`.
    /// The radix has already been validated by the caller.
    fn digit_of_checked(&self, c: u16, radix: i32) -> i32;
}

/// Adapter over the Unicode character database: general categories from
/// `unicode-general-category`, simple case mappings from ICU4X.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdPrimitives;

impl CategoryTable for StdPrimitives {
    fn category(&self, code_point: i32) -> Category {
        if !(MIN_CODE_POINT..=MAX_CODE_POINT).contains(&code_point) {
            return Category::Unassigned;
        }
        if (MIN_HIGH_SURROGATE as i32..=MAX_LOW_SURROGATE as i32).contains(&code_point) {
            return Category::Surrogate;
        }
        match char::from_u32(code_point as u32) {
            Some(ch) => from_general_category(get_general_category(ch)),
            None => Category::Unassigned,
        }
    }
}

impl CharPrimitives for StdPrimitives {
    fn is_identifier_ignorable(&self, c: u16) -> bool {
        matches!(c, 0x00..=0x08 | 0x0E..=0x1B | 0x7F..=0x9F)
            || self.category(c as i32) == Category::Format
    }

    fn is_iso_control(&self, c: u16) -> bool {
        matches!(c, 0x00..=0x1F | 0x7F..=0x9F)
    }

    fn is_whitespace(&self, c: u16) -> bool {
        // TAB..CR and the four information separators
        if matches!(c, 0x09..=0x0D | 0x1C..=0x1F) {
            return true;
        }
        matches!(
            self.category(c as i32),
            Category::SpaceSeparator | Category::LineSeparator | Category::ParagraphSeparator
        )
    }

    fn to_upper_case(&self, c: u16) -> u16 {
        match char::from_u32(c as u32) {
            Some(ch) => bmp_unit(CaseMapper::new().simple_uppercase(ch)).unwrap_or(c),
            None => c,
        }
    }

    fn to_lower_case(&self, c: u16) -> u16 {
        match char::from_u32(c as u32) {
            Some(ch) => bmp_unit(CaseMapper::new().simple_lowercase(ch)).unwrap_or(c),
            None => c,
        }
    }

    #[inline]
    fn is_high_surrogate(&self, c: u16) -> bool {
        (MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE).contains(&c)
    }

    #[inline]
    fn is_low_surrogate(&self, c: u16) -> bool {
        (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).contains(&c)
    }

    fn digit_of_checked(&self, c: u16, radix: i32) -> i32 {
        let value = match c {
            0x41..=0x5A => (c - 0x41) as i32 + 10,
            0x61..=0x7A => (c - 0x61) as i32 + 10,
            // Full-width Latin letters
            0xFF21..=0xFF3A => (c - 0xFF21) as i32 + 10,
            0xFF41..=0xFF5A => (c - 0xFF41) as i32 + 10,
            _ => match self.decimal_value(c) {
                Some(v) => v,
                None => return NOT_A_DIGIT,
            },
        };
        if value < radix {
            value
        } else {
            NOT_A_DIGIT
        }
    }
}

impl StdPrimitives {
    /// Value of a decimal digit (`Nd`).
    ///
    /// Decimal digits are encoded in contiguous runs of ten starting at
    /// zero, so the value is the distance to the start of the run modulo 10.
    fn decimal_value(&self, c: u16) -> Option<i32> {
        if self.category(c as i32) != Category::DecimalDigitNumber {
            return None;
        }
        let mut start = c as i32;
        while start > 0 && self.category(start - 1) == Category::DecimalDigitNumber {
            start -= 1;
        }
        Some((c as i32 - start) % 10)
    }
}

/// The mapped char as a code unit, if it stays in the BMP.
#[inline]
fn bmp_unit(ch: char) -> Option<u16> {
    u16::try_from(ch as u32).ok()
}

fn from_general_category(gc: GeneralCategory) -> Category {
    match gc {
        GeneralCategory::UppercaseLetter => Category::UppercaseLetter,
        GeneralCategory::LowercaseLetter => Category::LowercaseLetter,
        GeneralCategory::TitlecaseLetter => Category::TitlecaseLetter,
        GeneralCategory::ModifierLetter => Category::ModifierLetter,
        GeneralCategory::OtherLetter => Category::OtherLetter,
        GeneralCategory::NonspacingMark => Category::NonSpacingMark,
        GeneralCategory::EnclosingMark => Category::EnclosingMark,
        GeneralCategory::SpacingMark => Category::CombiningSpacingMark,
        GeneralCategory::DecimalNumber => Category::DecimalDigitNumber,
        GeneralCategory::LetterNumber => Category::LetterNumber,
        GeneralCategory::OtherNumber => Category::OtherNumber,
        GeneralCategory::SpaceSeparator => Category::SpaceSeparator,
        GeneralCategory::LineSeparator => Category::LineSeparator,
        GeneralCategory::ParagraphSeparator => Category::ParagraphSeparator,
        GeneralCategory::Control => Category::Control,
        GeneralCategory::Format => Category::Format,
        GeneralCategory::PrivateUse => Category::PrivateUse,
        GeneralCategory::Surrogate => Category::Surrogate,
        GeneralCategory::DashPunctuation => Category::DashPunctuation,
        GeneralCategory::OpenPunctuation => Category::StartPunctuation,
        GeneralCategory::ClosePunctuation => Category::EndPunctuation,
        GeneralCategory::ConnectorPunctuation => Category::ConnectorPunctuation,
        GeneralCategory::OtherPunctuation => Category::OtherPunctuation,
        GeneralCategory::MathSymbol => Category::MathSymbol,
        GeneralCategory::CurrencySymbol => Category::CurrencySymbol,
        GeneralCategory::ModifierSymbol => Category::ModifierSymbol,
        GeneralCategory::OtherSymbol => Category::OtherSymbol,
        GeneralCategory::InitialPunctuation => Category::InitialQuotePunctuation,
        GeneralCategory::FinalPunctuation => Category::FinalQuotePunctuation,
        #[allow(unreachable_patterns)]
        _ => Category::Unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const P: StdPrimitives = StdPrimitives;

    #[test]
    fn test_category() {
        assert_eq!(P.category('A' as i32), Category::UppercaseLetter);
        assert_eq!(P.category('a' as i32), Category::LowercaseLetter);
        assert_eq!(P.category(0x01C5), Category::TitlecaseLetter);
        assert_eq!(P.category('7' as i32), Category::DecimalDigitNumber);
        assert_eq!(P.category(0x0378), Category::Unassigned);
        assert_eq!(P.category(0xD800), Category::Surrogate);
        assert_eq!(P.category(0xDFFF), Category::Surrogate);
        assert_eq!(P.category(0xE000), Category::PrivateUse);
        assert_eq!(P.category(0x1F600), Category::OtherSymbol);
        assert_eq!(P.category(-1), Category::Unassigned);
        assert_eq!(P.category(0x110000), Category::Unassigned);
    }

    #[test]
    fn test_iso_control() {
        for c in 0u16..=0xFFFF {
            let expected = c <= 0x1F || (0x7F..=0x9F).contains(&c);
            assert_eq!(P.is_iso_control(c), expected, "unit {:#x}", c);
        }
    }

    #[test]
    fn test_whitespace() {
        for c in [0x09u16, 0x0A, 0x0B, 0x0C, 0x0D, 0x1C, 0x1F, 0x20, 0x00A0, 0x2028, 0x2029, 0x3000] {
            assert!(P.is_whitespace(c), "unit {:#x}", c);
        }
        for c in [0x00u16, 0x08, 0x41, 0x85, 0x200B] {
            assert!(!P.is_whitespace(c), "unit {:#x}", c);
        }
    }

    #[test]
    fn test_identifier_ignorable() {
        assert!(P.is_identifier_ignorable(0x00));
        assert!(P.is_identifier_ignorable(0x7F));
        assert!(P.is_identifier_ignorable(0x200B)); // Cf
        assert!(!P.is_identifier_ignorable(0x0A));
        assert!(!P.is_identifier_ignorable('a' as u16));
    }

    #[test]
    fn test_case() {
        assert_eq!(P.to_upper_case('a' as u16), 'A' as u16);
        assert_eq!(P.to_lower_case('Z' as u16), 'z' as u16);
        assert_eq!(P.to_upper_case('1' as u16), '1' as u16);
        // ß has no simple uppercase ("SS" is a full mapping only)
        assert_eq!(P.to_upper_case(0x00DF), 0x00DF);
        assert_eq!(P.to_upper_case(0xD800), 0xD800);
    }

    #[test]
    fn test_simple_case_mapping_where_full_mapping_expands() {
        // LATIN CAPITAL LETTER I WITH DOT ABOVE: full lowercase is "i\u{307}"
        assert_eq!(P.to_lower_case(0x0130), 0x0069);
        // GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI -> ...PROSGEGRAMMENI
        assert_eq!(P.to_upper_case(0x1F80), 0x1F88);
        // GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI -> ...PROSGEGRAMMENI
        assert_eq!(P.to_upper_case(0x1FB3), 0x1FBC);
        // LATIN SMALL LETTER N PRECEDED BY APOSTROPHE has no simple uppercase
        assert_eq!(P.to_upper_case(0x0149), 0x0149);
    }

    #[test]
    fn test_digit_of_checked() {
        assert_eq!(P.digit_of_checked('7' as u16, 10), 7);
        assert_eq!(P.digit_of_checked('f' as u16, 16), 15);
        assert_eq!(P.digit_of_checked('F' as u16, 16), 15);
        assert_eq!(P.digit_of_checked('g' as u16, 16), NOT_A_DIGIT);
        assert_eq!(P.digit_of_checked('z' as u16, 36), 35);
        assert_eq!(P.digit_of_checked('9' as u16, 8), NOT_A_DIGIT);
        // ARABIC-INDIC DIGIT THREE
        assert_eq!(P.digit_of_checked(0x0663, 10), 3);
        // FULLWIDTH DIGIT NINE and FULLWIDTH LATIN CAPITAL LETTER B
        assert_eq!(P.digit_of_checked(0xFF19, 10), 9);
        assert_eq!(P.digit_of_checked(0xFF22, 16), 11);
        assert_eq!(P.digit_of_checked(' ' as u16, 36), NOT_A_DIGIT);
    }
}

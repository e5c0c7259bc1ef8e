//! Numeric bounds shared by the classifier and the surrogate codec.

/// Smallest radix accepted for digit conversion.
pub const MIN_RADIX: i32 = 2;
/// Largest radix accepted for digit conversion.
pub const MAX_RADIX: i32 = 36;

pub const MIN_HIGH_SURROGATE: u16 = 0xD800;
pub const MAX_HIGH_SURROGATE: u16 = 0xDBFF;
pub const MIN_LOW_SURROGATE: u16 = 0xDC00;
pub const MAX_LOW_SURROGATE: u16 = 0xDFFF;
pub const MIN_SURROGATE: u16 = MIN_HIGH_SURROGATE;
pub const MAX_SURROGATE: u16 = MAX_LOW_SURROGATE;

/// First code point that needs a surrogate pair in UTF-16.
pub const MIN_SUPPLEMENTARY_CODE_POINT: i32 = 0x10000;
pub const MIN_CODE_POINT: i32 = 0;
pub const MAX_CODE_POINT: i32 = 0x10FFFF;

/// Returned by digit lookups when a char is not a digit in the radix.
pub const NOT_A_DIGIT: i32 = -1;

//! C ABI exports for native callers.
//!
//! Every export is backed by `StdPrimitives`. Failures that would be a
//! `CharError` in Rust are reported as `-1`.
//!
//! # Usage from C
//!
//! ```c
//! uint16_t buf[2];
//! int32_t n = unichar_to_chars(0x1F600, buf);   // n == 2
//! int32_t cp = unichar_to_code_point(buf[0], buf[1]);
//! ```

use unichar_common_core::NOT_A_DIGIT;

use crate::classify::{check_radix, CharClassifier};
use crate::primitives::StdPrimitives;
use crate::surrogate;

const CLASSIFIER: CharClassifier<StdPrimitives> = CharClassifier::new(StdPrimitives);

// =============================================================================
// Classification (12 functions)
// =============================================================================

#[no_mangle]
pub extern "C" fn unichar_category(c: u16) -> u8 {
    CLASSIFIER.category_value(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_defined(c: u16) -> bool {
    CLASSIFIER.is_defined(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_letter(c: u16) -> bool {
    CLASSIFIER.is_letter(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_letter_or_digit(c: u16) -> bool {
    CLASSIFIER.is_letter_or_digit(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_digit(c: u16) -> bool {
    CLASSIFIER.is_digit(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_upper_case(c: u16) -> bool {
    CLASSIFIER.is_upper_case(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_lower_case(c: u16) -> bool {
    CLASSIFIER.is_lower_case(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_title_case(c: u16) -> bool {
    CLASSIFIER.is_title_case(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_identifier_ignorable(c: u16) -> bool {
    CLASSIFIER.is_identifier_ignorable(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_iso_control(c: u16) -> bool {
    CLASSIFIER.is_iso_control(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_whitespace(c: u16) -> bool {
    CLASSIFIER.is_whitespace(c)
}

#[no_mangle]
pub extern "C" fn unichar_is_surrogate_pair(high: u16, low: u16) -> bool {
    CLASSIFIER.is_surrogate_pair(high, low)
}

// =============================================================================
// Case conversion (4 functions)
// =============================================================================

#[no_mangle]
pub extern "C" fn unichar_to_upper_case(c: u16) -> u16 {
    CLASSIFIER.to_upper_case(c)
}

#[no_mangle]
pub extern "C" fn unichar_to_lower_case(c: u16) -> u16 {
    CLASSIFIER.to_lower_case(c)
}

#[no_mangle]
pub extern "C" fn unichar_to_upper_case_code_point(code_point: i32) -> i32 {
    CLASSIFIER.to_upper_case_code_point(code_point)
}

#[no_mangle]
pub extern "C" fn unichar_to_lower_case_code_point(code_point: i32) -> i32 {
    CLASSIFIER.to_lower_case_code_point(code_point)
}

// =============================================================================
// Digits (2 functions)
// =============================================================================

/// Returns `radix`, or -1 if it is out of range.
#[no_mangle]
pub extern "C" fn unichar_check_radix(radix: i32) -> i32 {
    check_radix(radix).unwrap_or(-1)
}

/// Returns the digit value, or -1 for an invalid radix or a non-digit.
#[no_mangle]
pub extern "C" fn unichar_digit_of(c: u16, radix: i32) -> i32 {
    CLASSIFIER.digit_of(c, radix).unwrap_or(NOT_A_DIGIT)
}

// =============================================================================
// Surrogate codec (3 functions)
// =============================================================================

#[no_mangle]
pub extern "C" fn unichar_to_code_point(high: u16, low: u16) -> i32 {
    surrogate::to_code_point(high, low)
}

#[no_mangle]
pub extern "C" fn unichar_is_supplementary_code_point(code_point: i32) -> bool {
    surrogate::is_supplementary_code_point(code_point)
}

/// Write the UTF-16 units of `code_point` to `out`.
///
/// Returns the number of units written (1 or 2), or -1 if the code point
/// is invalid, in which case `out` is untouched.
///
/// # Safety
/// `out` must be valid for writes of two `u16`.
#[no_mangle]
pub unsafe extern "C" fn unichar_to_chars(code_point: i32, out: *mut u16) -> i32 {
    match surrogate::to_chars(code_point) {
        Ok(units) => {
            core::ptr::copy_nonoverlapping(units.as_ptr(), out, units.len());
            units.len() as i32
        }
        Err(_) => -1,
    }
}

// =============================================================================
// Summary: Total 21 C ABI functions
// =============================================================================

//! Character errors.

use thiserror::Error;
use unichar_common_core::{MAX_CODE_POINT, MAX_RADIX, MIN_CODE_POINT, MIN_RADIX};

/// Errors raised by the classifier and the surrogate codec.
///
/// Every variant is an invalid-argument error: the caller passed a value
/// outside the documented domain. Nothing is retried or recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharError {
    /// Radix outside `MIN_RADIX..=MAX_RADIX`.
    #[error("radix {radix} was not in valid range {}..{}", MIN_RADIX, MAX_RADIX)]
    InvalidRadix { radix: i32 },
    /// Code point outside `MIN_CODE_POINT..=MAX_CODE_POINT`.
    #[error("code point {code_point:#x} was not in valid range {:#x}..={:#x}", MIN_CODE_POINT, MAX_CODE_POINT)]
    InvalidCodePoint { code_point: i32 },
}

impl CharError {
    /// All character errors are invalid-argument errors.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CharError::InvalidRadix { .. } | CharError::InvalidCodePoint { .. })
    }
}

pub type Result<T> = std::result::Result<T, CharError>;

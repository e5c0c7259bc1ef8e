//! Code point classification and UTF-16 surrogate codec.
//!
//! The classifier derives its answers from two collaborators: a category
//! table and a set of native character primitives. `StdPrimitives` backs
//! both with Unicode character database tables (general categories and
//! simple case mappings).
//!
//! ```text
//! primitives.rs   <- CategoryTable / CharPrimitives + StdPrimitives
//!    │
//!    ├── classify.rs   (predicates, case conversion, digit value)
//!    ├── surrogate.rs  (pair arithmetic, UTF-16 encode/iterate)
//!    └── ffi.rs        (C ABI exports, `ffi` feature)
//! ```

pub mod classify;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod primitives;
pub mod surrogate;

pub use classify::{check_radix, CharClassifier};
pub use error::{CharError, Result};
pub use primitives::{CategoryTable, CharPrimitives, StdPrimitives};
pub use surrogate::{
    char_count, code_points, encode, is_supplementary_code_point, is_valid_code_point,
    to_chars, to_code_point, CodePoints,
};
pub use unichar_common_core::{consts, Category};

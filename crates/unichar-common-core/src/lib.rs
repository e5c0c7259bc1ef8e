//! # unichar-common-core
//!
//! Core character types for unichar that are `no_std` compatible.
//!
//! This crate provides the foundational types used by the runtime:
//! - `Category` - Unicode general category with fixed ordinals
//! - `consts` - radix, surrogate and code point bounds

#![cfg_attr(not(feature = "std"), no_std)]

pub mod category;
pub mod consts;

pub use category::Category;
pub use consts::*;

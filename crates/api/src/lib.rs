//! Public API traits and types for the dpairing library
//!
//! This crate provides the error type shared by every dpairing crate and the
//! byte/text serialization traits implemented by field elements, curve points
//! and pairing precomputations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
#[cfg(feature = "alloc")]
pub use traits::{Serialize, TextSerialize};

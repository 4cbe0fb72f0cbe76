//! Error handling for field, curve and pairing operations
//!
//! The engine shares `dpairing_api::Error` with the rest of the workspace;
//! this module re-exports it next to the validation predicates used by the
//! decoders.

pub use dpairing_api::error::{Error, Result, ResultExt};

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;

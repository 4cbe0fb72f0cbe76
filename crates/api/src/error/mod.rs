//! Error handling for the pairing engine

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use traits::ResultExt;
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}

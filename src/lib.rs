//! # dpairing
//!
//! Bilinear pairings over pairing-friendly elliptic curves in pure Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dpairing = "0.3"
//! ```
//!
//! ## Features
//!
//! - `bn254`, `bls12_381`, `bls12_377`, `bw6_761`, `mnt4_298`, `mnt6_298`
//!   (default): curve instantiations
//! - `serde`: `serde` support for affine points and target group elements
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dpairing-api`]: Error type and serialization traits
//! - [`dpairing-params`]: Per-curve constant tables
//! - [`dpairing-algorithms`]: Fields, curves and pairing engines

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use dpairing_algorithms as algorithms;
pub use dpairing_api as api;
pub use dpairing_params as params;

// Curve re-exports
#[cfg(feature = "bls12_377")]
pub use dpairing_algorithms::curves::bls12_377;
#[cfg(feature = "bls12_381")]
pub use dpairing_algorithms::curves::bls12_381;
#[cfg(feature = "bn254")]
pub use dpairing_algorithms::curves::bn254;
#[cfg(feature = "bw6_761")]
pub use dpairing_algorithms::curves::bw6_761;
#[cfg(feature = "mnt4_298")]
pub use dpairing_algorithms::curves::mnt4_298;
#[cfg(feature = "mnt6_298")]
pub use dpairing_algorithms::curves::mnt6_298;

/// Common imports for dpairing users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Serialize, TextSerialize};
    pub use crate::algorithms::{
        Field, Pairing, PairingConfig, PrimeField, SqrtField, SwCurveConfig, TargetField,
    };

    // Re-export engine types
    pub use crate::algorithms::{Affine, G1Precomp, G2Precomp, Gt, Projective};

    #[cfg(feature = "bls12_377")]
    pub use crate::algorithms::Bls12_377;
    #[cfg(feature = "bls12_381")]
    pub use crate::algorithms::Bls12_381;
    #[cfg(feature = "bn254")]
    pub use crate::algorithms::Bn254;
    #[cfg(feature = "bw6_761")]
    pub use crate::algorithms::Bw6_761;
    #[cfg(feature = "mnt4_298")]
    pub use crate::algorithms::Mnt4_298;
    #[cfg(feature = "mnt6_298")]
    pub use crate::algorithms::Mnt6_298;
}

// Dependencies whose traits appear in the public API
pub use subtle;
pub use zeroize;

#[cfg(feature = "full")]
pub use rand;

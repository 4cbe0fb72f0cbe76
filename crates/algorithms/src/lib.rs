//! Bilinear pairings over pairing-friendly elliptic curves
//!
//! This crate provides the arithmetic behind the dpairing library: prime
//! fields in Montgomery form, generic extension-field towers, short-Weierstrass
//! group law, and optimal ate pairings for the BN, BLS12, BW6 and MNT families.
//! The library is usable in both `std` and `no_std` environments; it needs an
//! allocator for line-coefficient precomputations and encodings.
//!
//! # Layout
//!
//! - [`field`]: `Fp`, the quadratic and cubic extensions, and the tower models
//! - [`ec`]: affine and projective points, generic over a curve configuration
//! - [`pairing`]: the engine traits, precomputations, Miller walk and `Gt`
//! - [`curves`]: the families and the BN254, BLS12-381, BLS12-377, BW6-761,
//!   MNT4-298 and MNT6-298 instantiations
//! - [`encoding`]: byte and text encodings of points and sequences
//!
//! # Example
//!
//! ```ignore
//! use dpairing_algorithms::curves::bls12_381::{Bls12_381, G1Affine, G2Affine};
//! use dpairing_algorithms::Pairing;
//!
//! let e = Bls12_381::pairing(&G1Affine::generator(), &G2Affine::generator())?;
//! assert!(!e.is_identity());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Arithmetic
pub mod field;
pub use field::{
    Field, LegendreSymbol, PrimeField, QuadraticTarget, SexticTarget, SqrtField, TargetField,
};

pub mod ec;
pub use ec::{Affine, Projective, SwCurveConfig};

// Pairing engine
pub mod pairing;
pub use pairing::{
    G1Precomp, G2Precomp, Gt, LineCoefficients, Pairing, PairingConfig, SexticTwist,
};

// Curve families and instantiations
pub mod curves;
pub use curves::{Bls12, Bn, Bw6, Mnt};

#[cfg(feature = "bls12_377")]
pub use curves::bls12_377::Bls12_377;
#[cfg(feature = "bls12_381")]
pub use curves::bls12_381::Bls12_381;
#[cfg(feature = "bn254")]
pub use curves::bn254::Bn254;
#[cfg(feature = "bw6_761")]
pub use curves::bw6_761::Bw6_761;
#[cfg(feature = "mnt4_298")]
pub use curves::mnt4_298::Mnt4_298;
#[cfg(feature = "mnt6_298")]
pub use curves::mnt6_298::Mnt6_298;

// Encodings
pub mod encoding;

// Public API traits, re-exported so callers need a single import
pub use dpairing_api::{Serialize, TextSerialize};

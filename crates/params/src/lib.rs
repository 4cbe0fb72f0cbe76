//! Constant values for the dpairing library
//!
//! Every table is plain data: moduli, seeds, generator coordinates and
//! Frobenius coefficients, written as canonical little-endian `u64` limbs.
//! The algorithms crate converts them into Montgomery form at compile time.

#![no_std]

pub mod pairing;

//! Constants for pairing-friendly curves

pub mod bls12_377;
pub mod bls12_381;
pub mod bn254;
pub mod bw6_761;
pub mod mnt4_298;
pub mod mnt6_298;

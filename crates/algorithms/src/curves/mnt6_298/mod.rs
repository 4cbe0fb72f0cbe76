//! MNT6-298
//!
//! The other half of the 298-bit MNT cycle, paired with
//! [`crate::curves::mnt4_298`]. G2 lies on a quadratic twist over `Fq3`; the
//! pairing lands in `Fq6 = Fq3[v]/(v^2 - u)`. Both the ate loop count and w0
//! are negative.

mod fields;
mod g1;
mod g2;

#[cfg(test)]
mod tests;

pub use fields::{Fq, Fq3, Fq3Config, Fq6, Fq6Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::mnt6_298::*;

use crate::curves::mnt::{Mnt, MntConfig};
use crate::field::Field;
use crate::pairing::{AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig};

/// Pairing parameters of MNT6-298
pub struct Mnt6_298Config;

impl PairingConfig for Mnt6_298Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq3;
    type Fqk = Fq6;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "MNT6-298";
    const EMBEDDING_DEGREE: usize = 6;
    const TWIST: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
    // t - 1
    const ATE_LOOPS: &'static [AteLoop] = &[AteLoop {
        count: &MNT6_298_ATE_LOOP_COUNT,
        is_negative: MNT6_298_ATE_LOOP_COUNT_IS_NEGATIVE,
        encoding: LoopEncoding::Naf,
    }];
}

impl MntConfig for Mnt6_298Config {
    const FINAL_EXPONENT_W1: &'static [u64] = &[1];
    const FINAL_EXPONENT_W0: &'static [u64] = &MNT6_298_FINAL_EXPONENT_W0;
    const FINAL_EXPONENT_W0_IS_NEGATIVE: bool = MNT6_298_FINAL_EXPONENT_W0_IS_NEGATIVE;
}

/// The MNT6-298 pairing engine
pub type Mnt6_298 = Mnt<Mnt6_298Config>;

/// Target group of MNT6-298
pub type Gt = TargetGroup<Mnt6_298Config>;

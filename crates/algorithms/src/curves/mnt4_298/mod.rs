//! MNT4-298
//!
//! Half of the MNT4/MNT6 cycle at 298 bits: the scalar field of each curve is
//! the base field of the other. G2 lies on a quadratic twist over `Fq2` and
//! the pairing lands in `Fq4 = Fq2[v]/(v^2 - u)`.

mod fields;
mod g1;
mod g2;

#[cfg(test)]
mod tests;

pub use fields::{Fq, Fq2, Fq2Config, Fq4, Fq4Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::mnt4_298::*;

use crate::curves::mnt::{Mnt, MntConfig};
use crate::field::Field;
use crate::pairing::{AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig};

/// Pairing parameters of MNT4-298
pub struct Mnt4_298Config;

impl PairingConfig for Mnt4_298Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq2;
    type Fqk = Fq4;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "MNT4-298";
    const EMBEDDING_DEGREE: usize = 4;
    const TWIST: Fq2 = Fq2::new(Fq::ZERO, Fq::ONE);
    // t - 1
    const ATE_LOOPS: &'static [AteLoop] = &[AteLoop {
        count: &MNT4_298_ATE_LOOP_COUNT,
        is_negative: MNT4_298_ATE_LOOP_COUNT_IS_NEGATIVE,
        encoding: LoopEncoding::Naf,
    }];
}

impl MntConfig for Mnt4_298Config {
    const FINAL_EXPONENT_W1: &'static [u64] = &[1];
    const FINAL_EXPONENT_W0: &'static [u64] = &MNT4_298_FINAL_EXPONENT_W0;
    const FINAL_EXPONENT_W0_IS_NEGATIVE: bool = MNT4_298_FINAL_EXPONENT_W0_IS_NEGATIVE;
}

/// The MNT4-298 pairing engine
pub type Mnt4_298 = Mnt<Mnt4_298Config>;

/// Target group of MNT4-298
pub type Gt = TargetGroup<Mnt4_298Config>;

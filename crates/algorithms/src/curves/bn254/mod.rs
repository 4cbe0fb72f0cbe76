//! BN254, also known as alt_bn128
//!
//! The 254-bit Barreto-Naehrig curve with seed `u = 4965661367192848881`.
//! G2 lives on a D-type twist over `Fq2`.

mod fields;
mod g1;
mod g2;

#[cfg(test)]
mod tests;

pub use fields::{Fq, Fq12, Fq12Config, Fq2, Fq2Config, Fq6, Fq6Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::bn254::*;

use self::fields::fq2;
use crate::curves::bn::{Bn, BnConfig};
use crate::pairing::{
    AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig, SexticTwist, TwistKind,
};

/// Pairing parameters of BN254
pub struct Bn254Config;

impl PairingConfig for Bn254Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq2;
    type Fqk = Fq12;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "BN254";
    const EMBEDDING_DEGREE: usize = 12;
    const TWIST: Fq2 = fq2(BN254_FQ6_NONRESIDUE);
    const ATE_LOOPS: &'static [AteLoop] = &[AteLoop {
        count: &BN254_ATE_LOOP_COUNT,
        is_negative: false,
        encoding: LoopEncoding::Naf,
    }];
    const FROBENIUS_LINES: usize = 2;
}

impl SexticTwist for Bn254Config {
    const TWIST_KIND: TwistKind = TwistKind::Divide;
}

impl BnConfig for Bn254Config {
    const U: &'static [u64] = &[BN254_U];
    const U_IS_NEGATIVE: bool = false;
    const TWIST_MUL_BY_Q_X: Fq2 = fq2(BN254_TWIST_MUL_BY_Q_X);
    const TWIST_MUL_BY_Q_Y: Fq2 = fq2(BN254_TWIST_MUL_BY_Q_Y);
}

/// The BN254 pairing engine
pub type Bn254 = Bn<Bn254Config>;

/// Target group of BN254
pub type Gt = TargetGroup<Bn254Config>;

//! BLS12-377
//!
//! The 377-bit Barreto-Lynn-Scott curve with seed `x = 0x8508c00000000001`,
//! the inner curve of BW6-761.
//! G2 lives on a D-type twist over `Fq2`.

mod fields;
mod g1;
mod g2;

#[cfg(test)]
mod tests;

pub use fields::{Fq, Fq12, Fq12Config, Fq2, Fq2Config, Fq6, Fq6Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::bls12_377::*;

use self::fields::fq2;
use crate::curves::bls12::{Bls12, Bls12Config};
use crate::pairing::{
    AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig, SexticTwist, TwistKind,
};

/// Pairing parameters of BLS12-377
pub struct Bls12_377Config;

impl PairingConfig for Bls12_377Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq2;
    type Fqk = Fq12;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "BLS12-377";
    const EMBEDDING_DEGREE: usize = 12;
    const TWIST: Fq2 = fq2(BLS12_377_FQ6_NONRESIDUE);
    const ATE_LOOPS: &'static [AteLoop] = &[AteLoop {
        count: &[BLS12_377_X],
        is_negative: BLS12_377_X_IS_NEGATIVE,
        encoding: LoopEncoding::Binary,
    }];
}

impl SexticTwist for Bls12_377Config {
    const TWIST_KIND: TwistKind = TwistKind::Divide;
}

impl Bls12Config for Bls12_377Config {
    const X: &'static [u64] = &[BLS12_377_X];
    const X_IS_NEGATIVE: bool = BLS12_377_X_IS_NEGATIVE;
    const TWIST_MUL_BY_Q_X: Fq2 = fq2(BLS12_377_TWIST_MUL_BY_Q_X);
    const TWIST_MUL_BY_Q_Y: Fq2 = fq2(BLS12_377_TWIST_MUL_BY_Q_Y);
}

/// The BLS12-377 pairing engine
pub type Bls12_377 = Bls12<Bls12_377Config>;

/// Target group of BLS12-377
pub type Gt = TargetGroup<Bls12_377Config>;

//! BLS12-381
//!
//! The 381-bit Barreto-Lynn-Scott curve with seed `x = -0xd201000000010000`.
//! G2 lives on an M-type twist over `Fq2`.

mod fields;
mod g1;
mod g2;

#[cfg(test)]
mod tests;

pub use fields::{Fq, Fq12, Fq12Config, Fq2, Fq2Config, Fq6, Fq6Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::bls12_381::*;

use self::fields::fq2;
use crate::curves::bls12::{Bls12, Bls12Config};
use crate::pairing::{
    AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig, SexticTwist, TwistKind,
};

/// Pairing parameters of BLS12-381
pub struct Bls12_381Config;

impl PairingConfig for Bls12_381Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq2;
    type Fqk = Fq12;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "BLS12-381";
    const EMBEDDING_DEGREE: usize = 12;
    const TWIST: Fq2 = fq2(BLS12_381_FQ6_NONRESIDUE);
    const ATE_LOOPS: &'static [AteLoop] = &[AteLoop {
        count: &[BLS12_381_X],
        is_negative: BLS12_381_X_IS_NEGATIVE,
        encoding: LoopEncoding::Binary,
    }];
}

impl SexticTwist for Bls12_381Config {
    const TWIST_KIND: TwistKind = TwistKind::Multiply;
}

impl Bls12Config for Bls12_381Config {
    const X: &'static [u64] = &[BLS12_381_X];
    const X_IS_NEGATIVE: bool = BLS12_381_X_IS_NEGATIVE;
    const TWIST_MUL_BY_Q_X: Fq2 = fq2(BLS12_381_TWIST_MUL_BY_Q_X);
    const TWIST_MUL_BY_Q_Y: Fq2 = fq2(BLS12_381_TWIST_MUL_BY_Q_Y);
}

/// The BLS12-381 pairing engine
pub type Bls12_381 = Bls12<Bls12_381Config>;

/// Target group of BLS12-381
pub type Gt = TargetGroup<Bls12_381Config>;

//! BW6-761
//!
//! The outer curve of BLS12-377: its scalar field is the BLS12-377 base
//! field. Both G1 and G2 are defined over `Fq`; the pairing lands in the
//! sextic extension `Fq6 = Fq3[v]/(v^2 - u)`.

mod fields;
mod g1;
mod g2;


pub use fields::{Fq, Fq3, Fq3Config, Fq6, Fq6Config, FqConfig, Fr, FrConfig};
pub use g1::{G1Affine, G1Config, G1Projective};
pub use g2::{G2Affine, G2Config, G2Projective};

use dpairing_params::pairing::bw6_761::*;

use self::fields::fq;
use crate::curves::bw6::{Bw6, Bw6Config};
use crate::pairing::{
    AteLoop, Gt as TargetGroup, LoopEncoding, PairingConfig, SexticTwist, TwistKind,
};

/// Pairing parameters of BW6-761
pub struct Bw6_761Config;

impl PairingConfig for Bw6_761Config {
    type Fp = Fq;
    type Fr = Fr;
    type Fqe = Fq;
    type Fqk = Fq6;
    type G1Config = G1Config;
    type G2Config = G2Config;

    const NAME: &'static str = "BW6-761";
    const EMBEDDING_DEGREE: usize = 6;
    const TWIST: Fq = fq(BW6_761_FQ3_NONRESIDUE);
    const ATE_LOOPS: &'static [AteLoop] = &[
        // x + 1
        AteLoop {
            count: &BW6_761_ATE_LOOP_COUNT_1,
            is_negative: BW6_761_ATE_LOOP_COUNT_1_IS_NEGATIVE,
            encoding: LoopEncoding::Binary,
        },
        // x^3 - x^2 - x
        AteLoop {
            count: &BW6_761_ATE_LOOP_COUNT_2,
            is_negative: BW6_761_ATE_LOOP_COUNT_2_IS_NEGATIVE,
            encoding: LoopEncoding::Naf,
        },
    ];
}

impl SexticTwist for Bw6_761Config {
    const TWIST_KIND: TwistKind = TwistKind::Multiply;
}

impl Bw6Config for Bw6_761Config {
    const X: &'static [u64] = &[BW6_761_X];
    const X_IS_NEGATIVE: bool = BW6_761_X_IS_NEGATIVE;
    const HARD_PART_R0: &'static [i16] = &BW6_761_HARD_PART_R0;
    const HARD_PART_R1: &'static [i16] = &BW6_761_HARD_PART_R1;
}

/// The BW6-761 pairing engine
pub type Bw6_761 = Bw6<Bw6_761Config>;

/// Target group of BW6-761
pub type Gt = TargetGroup<Bw6_761Config>;

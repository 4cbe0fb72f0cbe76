//! The BW6-761 tower: `Fq3 = Fq[u]/(u^3 + 4)`, `Fq6 = Fq3[v]/(v^2 - u)`

use dpairing_params::pairing::bw6_761::*;

use crate::field::models::{Fp3, Fp3Config, Fp6Over3, Fp6Over3Config};
use crate::field::{Field, Fp, FpConfig};

/// Base field modulus
pub struct FqConfig;

impl FpConfig<12> for FqConfig {
    const MODULUS: [u64; 12] = BW6_761_FQ_MODULUS;
    const NONRESIDUE: [u64; 12] = BW6_761_FQ_NONRESIDUE;
}

/// Base field
pub type Fq = Fp<FqConfig, 12>;

/// Scalar field modulus, equal to the BLS12-377 base field modulus
pub struct FrConfig;

impl FpConfig<6> for FrConfig {
    const MODULUS: [u64; 6] = BW6_761_FR_MODULUS;
    const NONRESIDUE: [u64; 6] = BW6_761_FR_NONRESIDUE;
}

/// Scalar field
pub type Fr = Fp<FrConfig, 6>;

pub(super) const fn fq(limbs: [u64; 12]) -> Fq {
    Fq::from_canonical(limbs)
}

/// Cubic layer
pub struct Fq3Config;

impl Fp3Config for Fq3Config {
    type Fp = Fq;

    const NONRESIDUE: Fq = fq(BW6_761_FQ3_NONRESIDUE);

    const FROBENIUS_COEFF_FP3_C1: &'static [Fq] = &[
        fq(BW6_761_FQ3_FROBENIUS_C1[0]),
        fq(BW6_761_FQ3_FROBENIUS_C1[1]),
        fq(BW6_761_FQ3_FROBENIUS_C1[2]),
    ];

    const FROBENIUS_COEFF_FP3_C2: &'static [Fq] = &[
        fq(BW6_761_FQ3_FROBENIUS_C2[0]),
        fq(BW6_761_FQ3_FROBENIUS_C2[1]),
        fq(BW6_761_FQ3_FROBENIUS_C2[2]),
    ];

    /// Multiplication by -4
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Fq) -> Fq {
        -fe.double().double()
    }
}

/// `Fq[u]/(u^3 + 4)`
pub type Fq3 = Fp3<Fq3Config>;

/// Quadratic layer over `Fq3`
pub struct Fq6Config;

impl Fp6Over3Config for Fq6Config {
    type Fp3Config = Fq3Config;

    const NONRESIDUE: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);

    const FROBENIUS_COEFF_FP6_C1: &'static [Fq] = &[
        fq(BW6_761_FQ6_FROBENIUS_C1[0]),
        fq(BW6_761_FQ6_FROBENIUS_C1[1]),
        fq(BW6_761_FQ6_FROBENIUS_C1[2]),
        fq(BW6_761_FQ6_FROBENIUS_C1[3]),
        fq(BW6_761_FQ6_FROBENIUS_C1[4]),
        fq(BW6_761_FQ6_FROBENIUS_C1[5]),
    ];
}

/// `Fq3[v]/(v^2 - u)`, home of the pairing values
pub type Fq6 = Fp6Over3<Fq6Config>;

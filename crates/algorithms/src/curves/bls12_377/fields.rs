//! The BLS12-377 tower: `Fq2 = Fq[u]/(u^2 + 5)`, `Fq6 = Fq2[v]/(v^3 - u)`,
//! `Fq12 = Fq6[w]/(w^2 - v)`

use dpairing_params::pairing::bls12_377::*;

use crate::field::models::{Fp12, Fp12Config, Fp2, Fp2Config, Fp6, Fp6Config};
use crate::field::{Field, Fp, FpConfig};

/// Base field modulus
pub struct FqConfig;

impl FpConfig<6> for FqConfig {
    const MODULUS: [u64; 6] = BLS12_377_FQ_MODULUS;
    const NONRESIDUE: [u64; 6] = BLS12_377_FQ_NONRESIDUE;
}

/// Base field
pub type Fq = Fp<FqConfig, 6>;

/// Scalar field modulus
pub struct FrConfig;

impl FpConfig<4> for FrConfig {
    const MODULUS: [u64; 4] = BLS12_377_FR_MODULUS;
    const NONRESIDUE: [u64; 4] = BLS12_377_FR_NONRESIDUE;
}

/// Scalar field
pub type Fr = Fp<FrConfig, 4>;

pub(super) const fn fq(limbs: [u64; 6]) -> Fq {
    Fq::from_canonical(limbs)
}

pub(super) const fn fq2(c: [[u64; 6]; 2]) -> Fq2 {
    Fq2::new(fq(c[0]), fq(c[1]))
}

/// Quadratic layer
pub struct Fq2Config;

impl Fp2Config for Fq2Config {
    type Fp = Fq;

    const NONRESIDUE: Fq = fq(BLS12_377_FQ2_NONRESIDUE);

    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        fq(BLS12_377_FQ2_FROBENIUS_C1[0]),
        fq(BLS12_377_FQ2_FROBENIUS_C1[1]),
    ];

    /// Multiplication by -5
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Fq) -> Fq {
        -(fe.double().double() + fe)
    }
}

/// `Fq[u]/(u^2 + 5)`
pub type Fq2 = Fp2<Fq2Config>;

/// Cubic layer
pub struct Fq6Config;

impl Fp6Config for Fq6Config {
    type Fp2Config = Fq2Config;

    const NONRESIDUE: Fq2 = fq2(BLS12_377_FQ6_NONRESIDUE);

    const FROBENIUS_COEFF_FP6_C1: &'static [Fq2] = &[
        fq2(BLS12_377_FQ6_FROBENIUS_C1[0]),
        fq2(BLS12_377_FQ6_FROBENIUS_C1[1]),
        fq2(BLS12_377_FQ6_FROBENIUS_C1[2]),
        fq2(BLS12_377_FQ6_FROBENIUS_C1[3]),
        fq2(BLS12_377_FQ6_FROBENIUS_C1[4]),
        fq2(BLS12_377_FQ6_FROBENIUS_C1[5]),
    ];

    const FROBENIUS_COEFF_FP6_C2: &'static [Fq2] = &[
        fq2(BLS12_377_FQ6_FROBENIUS_C2[0]),
        fq2(BLS12_377_FQ6_FROBENIUS_C2[1]),
        fq2(BLS12_377_FQ6_FROBENIUS_C2[2]),
        fq2(BLS12_377_FQ6_FROBENIUS_C2[3]),
        fq2(BLS12_377_FQ6_FROBENIUS_C2[4]),
        fq2(BLS12_377_FQ6_FROBENIUS_C2[5]),
    ];

    /// `(c0 + c1 u) u = -5 c1 + c0 u`
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fq2) -> Fq2 {
        Fq2::new(Fq2Config::mul_fp_by_nonresidue(&fe.c1), fe.c0)
    }
}

/// `Fq2[v]/(v^3 - ξ)`
pub type Fq6 = Fp6<Fq6Config>;

/// Quadratic layer over `Fq6`
pub struct Fq12Config;

impl Fp12Config for Fq12Config {
    type Fp6Config = Fq6Config;

    const NONRESIDUE: Fq6 = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);

    const FROBENIUS_COEFF_FP12_C1: &'static [Fq2] = &[
        fq2(BLS12_377_FQ12_FROBENIUS_C1[0]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[1]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[2]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[3]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[4]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[5]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[6]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[7]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[8]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[9]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[10]),
        fq2(BLS12_377_FQ12_FROBENIUS_C1[11]),
    ];
}

/// `Fq6[w]/(w^2 - v)`, home of the pairing values
pub type Fq12 = Fp12<Fq12Config>;

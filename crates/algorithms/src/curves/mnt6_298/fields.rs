//! The MNT6-298 tower: `Fq3 = Fq[u]/(u^3 - 5)`, `Fq6 = Fq3[v]/(v^2 - u)`

use dpairing_params::pairing::mnt6_298::*;

use crate::field::models::{Fp3, Fp3Config, Fp6Over3, Fp6Over3Config};
use crate::field::{Field, Fp, FpConfig};

/// Base field modulus, equal to the MNT4-298 scalar field modulus
pub struct FqConfig;

impl FpConfig<5> for FqConfig {
    const MODULUS: [u64; 5] = MNT6_298_FQ_MODULUS;
    const NONRESIDUE: [u64; 5] = MNT6_298_FQ_NONRESIDUE;
}

/// Base field
pub type Fq = Fp<FqConfig, 5>;

/// Scalar field modulus, equal to the MNT4-298 base field modulus
pub struct FrConfig;

impl FpConfig<5> for FrConfig {
    const MODULUS: [u64; 5] = MNT6_298_FR_MODULUS;
    const NONRESIDUE: [u64; 5] = MNT6_298_FR_NONRESIDUE;
}

/// Scalar field
pub type Fr = Fp<FrConfig, 5>;

pub(super) const fn fq(limbs: [u64; 5]) -> Fq {
    Fq::from_canonical(limbs)
}

pub(super) const fn fq3(c: [[u64; 5]; 3]) -> Fq3 {
    Fq3::new(fq(c[0]), fq(c[1]), fq(c[2]))
}

/// Cubic layer
pub struct Fq3Config;

impl Fp3Config for Fq3Config {
    type Fp = Fq;

    const NONRESIDUE: Fq = fq(MNT6_298_FQ3_NONRESIDUE);

    const FROBENIUS_COEFF_FP3_C1: &'static [Fq] = &[
        fq(MNT6_298_FQ3_FROBENIUS_C1[0]),
        fq(MNT6_298_FQ3_FROBENIUS_C1[1]),
        fq(MNT6_298_FQ3_FROBENIUS_C1[2]),
    ];

    const FROBENIUS_COEFF_FP3_C2: &'static [Fq] = &[
        fq(MNT6_298_FQ3_FROBENIUS_C2[0]),
        fq(MNT6_298_FQ3_FROBENIUS_C2[1]),
        fq(MNT6_298_FQ3_FROBENIUS_C2[2]),
    ];

    /// Multiplication by 5
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Fq) -> Fq {
        fe.double().double() + fe
    }
}

/// `Fq[u]/(u^3 - 5)`
pub type Fq3 = Fp3<Fq3Config>;

/// Quadratic layer over `Fq3`
pub struct Fq6Config;

impl Fp6Over3Config for Fq6Config {
    type Fp3Config = Fq3Config;

    const NONRESIDUE: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);

    const FROBENIUS_COEFF_FP6_C1: &'static [Fq] = &[
        fq(MNT6_298_FQ6_FROBENIUS_C1[0]),
        fq(MNT6_298_FQ6_FROBENIUS_C1[1]),
        fq(MNT6_298_FQ6_FROBENIUS_C1[2]),
        fq(MNT6_298_FQ6_FROBENIUS_C1[3]),
        fq(MNT6_298_FQ6_FROBENIUS_C1[4]),
        fq(MNT6_298_FQ6_FROBENIUS_C1[5]),
    ];
}

/// `Fq3[v]/(v^2 - u)`, home of the pairing values
pub type Fq6 = Fp6Over3<Fq6Config>;

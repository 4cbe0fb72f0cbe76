//! The MNT4-298 tower: `Fq2 = Fq[u]/(u^2 - 17)`, `Fq4 = Fq2[v]/(v^2 - u)`

use dpairing_params::pairing::mnt4_298::*;

use crate::field::models::{Fp2, Fp2Config, Fp4, Fp4Config};
use crate::field::{Field, Fp, FpConfig};

/// Base field modulus, equal to the MNT6-298 scalar field modulus
pub struct FqConfig;

impl FpConfig<5> for FqConfig {
    const MODULUS: [u64; 5] = MNT4_298_FQ_MODULUS;
    const NONRESIDUE: [u64; 5] = MNT4_298_FQ_NONRESIDUE;
}

/// Base field
pub type Fq = Fp<FqConfig, 5>;

/// Scalar field modulus, equal to the MNT6-298 base field modulus
pub struct FrConfig;

impl FpConfig<5> for FrConfig {
    const MODULUS: [u64; 5] = MNT4_298_FR_MODULUS;
    const NONRESIDUE: [u64; 5] = MNT4_298_FR_NONRESIDUE;
}

/// Scalar field
pub type Fr = Fp<FrConfig, 5>;

pub(super) const fn fq(limbs: [u64; 5]) -> Fq {
    Fq::from_canonical(limbs)
}

pub(super) const fn fq2(c: [[u64; 5]; 2]) -> Fq2 {
    Fq2::new(fq(c[0]), fq(c[1]))
}

/// Quadratic layer
pub struct Fq2Config;

impl Fp2Config for Fq2Config {
    type Fp = Fq;

    const NONRESIDUE: Fq = fq(MNT4_298_FQ2_NONRESIDUE);

    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        fq(MNT4_298_FQ2_FROBENIUS_C1[0]),
        fq(MNT4_298_FQ2_FROBENIUS_C1[1]),
    ];

    /// Multiplication by 17
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Fq) -> Fq {
        fe.double().double().double().double() + fe
    }
}

/// `Fq[u]/(u^2 - 17)`
pub type Fq2 = Fp2<Fq2Config>;

/// Quartic layer over `Fq2`
pub struct Fq4Config;

impl Fp4Config for Fq4Config {
    type Fp2Config = Fq2Config;

    const NONRESIDUE: Fq2 = Fq2::new(Fq::ZERO, Fq::ONE);

    const FROBENIUS_COEFF_FP4_C1: &'static [Fq] = &[
        fq(MNT4_298_FQ4_FROBENIUS_C1[0]),
        fq(MNT4_298_FQ4_FROBENIUS_C1[1]),
        fq(MNT4_298_FQ4_FROBENIUS_C1[2]),
        fq(MNT4_298_FQ4_FROBENIUS_C1[3]),
    ];
}

/// `Fq2[v]/(v^2 - u)`, home of the pairing values
pub type Fq4 = Fp4<Fq4Config>;

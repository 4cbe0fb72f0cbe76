//! `Fp3 = Fp[u]/(u^3 - β)`

use core::marker::PhantomData;

use crate::field::{CubicExtConfig, CubicExtField, PrimeField};

/// Parameters of a cubic extension of a prime field
pub trait Fp3Config: 'static + Send + Sync + Sized {
    /// The prime field
    type Fp: PrimeField;

    /// β, a cubic non-residue in `Fp`
    const NONRESIDUE: Self::Fp;

    /// `β^((p^k - 1) / 3)` for k = 0, 1, 2
    const FROBENIUS_COEFF_FP3_C1: &'static [Self::Fp];
    /// `β^(2 (p^k - 1) / 3)` for k = 0, 1, 2
    const FROBENIUS_COEFF_FP3_C2: &'static [Self::Fp];

    /// Multiplies by β
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

/// Adapter from [`Fp3Config`] to [`CubicExtConfig`]
pub struct Fp3ConfigWrapper<P: Fp3Config>(PhantomData<P>);

impl<P: Fp3Config> CubicExtConfig for Fp3ConfigWrapper<P> {
    type BasePrimeField = P::Fp;
    type BaseField = P::Fp;
    type FrobCoeff = P::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 3;
    const NONRESIDUE: P::Fp = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [P::Fp] = P::FROBENIUS_COEFF_FP3_C1;
    const FROBENIUS_COEFF_C2: &'static [P::Fp] = P::FROBENIUS_COEFF_FP3_C2;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &P::Fp) -> P::Fp {
        P::mul_fp_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(c1: &mut P::Fp, c2: &mut P::Fp, power: usize) {
        *c1 *= &Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD];
        *c2 *= &Self::FROBENIUS_COEFF_C2[power % Self::DEGREE_OVER_BASE_PRIME_FIELD];
    }
}

/// Cubic extension of `P::Fp`
pub type Fp3<P> = CubicExtField<Fp3ConfigWrapper<P>>;

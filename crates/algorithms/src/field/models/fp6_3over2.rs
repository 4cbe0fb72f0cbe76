//! `Fp6 = Fp2[v]/(v^3 - ξ)`

use core::marker::PhantomData;

use super::fp2::{Fp2, Fp2Config};
use crate::field::{CubicExtConfig, CubicExtField};

/// Parameters of the cubic extension of `Fp2`
pub trait Fp6Config: 'static + Send + Sync + Sized {
    /// Configuration of the quadratic layer
    type Fp2Config: Fp2Config;

    /// ξ, a cubic non-residue in `Fp2`
    const NONRESIDUE: Fp2<Self::Fp2Config>;

    /// `ξ^((p^k - 1) / 3)` for k = 0..6
    const FROBENIUS_COEFF_FP6_C1: &'static [Fp2<Self::Fp2Config>];
    /// `ξ^(2 (p^k - 1) / 3)` for k = 0..6
    const FROBENIUS_COEFF_FP6_C2: &'static [Fp2<Self::Fp2Config>];

    /// Multiplies an `Fp2` element by ξ
    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Config>) -> Fp2<Self::Fp2Config> {
        Self::NONRESIDUE * fe
    }
}

/// Adapter from [`Fp6Config`] to [`CubicExtConfig`]
pub struct Fp6ConfigWrapper<P: Fp6Config>(PhantomData<P>);

impl<P: Fp6Config> CubicExtConfig for Fp6ConfigWrapper<P> {
    type BasePrimeField = <P::Fp2Config as Fp2Config>::Fp;
    type BaseField = Fp2<P::Fp2Config>;
    type FrobCoeff = Fp2<P::Fp2Config>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;
    const NONRESIDUE: Fp2<P::Fp2Config> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Fp2<P::Fp2Config>] = P::FROBENIUS_COEFF_FP6_C1;
    const FROBENIUS_COEFF_C2: &'static [Fp2<P::Fp2Config>] = P::FROBENIUS_COEFF_FP6_C2;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp2<P::Fp2Config>) -> Fp2<P::Fp2Config> {
        P::mul_fp2_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(
        c1: &mut Fp2<P::Fp2Config>,
        c2: &mut Fp2<P::Fp2Config>,
        power: usize,
    ) {
        *c1 *= &Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD];
        *c2 *= &Self::FROBENIUS_COEFF_C2[power % Self::DEGREE_OVER_BASE_PRIME_FIELD];
    }
}

/// Cubic extension of `Fp2`
pub type Fp6<P> = CubicExtField<Fp6ConfigWrapper<P>>;

//! `Fp12 = Fp6[w]/(w^2 - v)`

use core::marker::PhantomData;

use super::fp2::{Fp2, Fp2Config};
use super::fp6_3over2::{Fp6, Fp6Config};
use crate::field::quadratic::granger_scott_square;
use crate::field::{CubicExtension, QuadExtConfig, QuadExtField};

/// Parameters of the quadratic extension of `Fp6`
pub trait Fp12Config: 'static + Send + Sync + Sized {
    /// Configuration of the cubic layer
    type Fp6Config: Fp6Config;

    /// v, the generator of `Fp6`
    const NONRESIDUE: Fp6<Self::Fp6Config>;

    /// `ξ^((p^k - 1) / 6)` for k = 0..12
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<Fp2ConfigOf<Self>>];
}

type Fp2ConfigOf<P> = <<P as Fp12Config>::Fp6Config as Fp6Config>::Fp2Config;

/// Adapter from [`Fp12Config`] to [`QuadExtConfig`]
pub struct Fp12ConfigWrapper<P: Fp12Config>(PhantomData<P>);

impl<P: Fp12Config> QuadExtConfig for Fp12ConfigWrapper<P> {
    type BasePrimeField = <Fp2ConfigOf<P> as Fp2Config>::Fp;
    type BaseField = Fp6<P::Fp6Config>;
    type FrobCoeff = Fp2<Fp2ConfigOf<P>>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 12;
    const NONRESIDUE: Fp6<P::Fp6Config> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Fp2<Fp2ConfigOf<P>>] = P::FROBENIUS_COEFF_FP12_C1;

    /// Multiplication by v shifts coordinates: `(ξ c2, c0, c1)`
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp6<P::Fp6Config>) -> Fp6<P::Fp6Config> {
        fe.mul_by_generator()
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp6<P::Fp6Config>, power: usize) {
        fe.mul_assign_by_base_field(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }

    fn cyclotomic_square(fe: &Fp12<P>) -> Fp12<P> {
        granger_scott_square(fe)
    }
}

/// Degree-12 extension built as `Fp2 -> Fp6 -> Fp12`
pub type Fp12<P> = QuadExtField<Fp12ConfigWrapper<P>>;

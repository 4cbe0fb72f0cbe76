//! `Fp4 = Fp2[v]/(v^2 - u)`, the target field of MNT4 curves

use core::marker::PhantomData;

use super::fp2::{Fp2, Fp2Config};
use crate::field::{QuadExtConfig, QuadExtField};

/// Parameters of the quadratic extension of `Fp2`
pub trait Fp4Config: 'static + Send + Sync + Sized {
    /// Configuration of the lower quadratic layer
    type Fp2Config: Fp2Config;

    /// The generator u of `Fp2`, squared to v^2
    const NONRESIDUE: Fp2<Self::Fp2Config>;

    /// `β^((p^k - 1) / 4)` for k = 0..4
    const FROBENIUS_COEFF_FP4_C1: &'static [<Self::Fp2Config as Fp2Config>::Fp];
}

/// Adapter from [`Fp4Config`] to [`QuadExtConfig`]
pub struct Fp4ConfigWrapper<P: Fp4Config>(PhantomData<P>);

impl<P: Fp4Config> QuadExtConfig for Fp4ConfigWrapper<P> {
    type BasePrimeField = <P::Fp2Config as Fp2Config>::Fp;
    type BaseField = Fp2<P::Fp2Config>;
    type FrobCoeff = <P::Fp2Config as Fp2Config>::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 4;
    const NONRESIDUE: Fp2<P::Fp2Config> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP4_C1;

    /// `(c0 + c1 u) u = β c1 + c0 u`
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp2<P::Fp2Config>) -> Fp2<P::Fp2Config> {
        Fp2::new(<P::Fp2Config as Fp2Config>::mul_fp_by_nonresidue(&fe.c1), fe.c0)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp2<P::Fp2Config>, power: usize) {
        fe.mul_assign_by_fp(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }
}

/// Quartic extension built as a quadratic extension of `Fp2`
pub type Fp4<P> = QuadExtField<Fp4ConfigWrapper<P>>;

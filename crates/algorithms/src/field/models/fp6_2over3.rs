//! `Fp6 = Fp3[v]/(v^2 - u)`, the target field of BW6 and MNT6 curves

use core::marker::PhantomData;

use super::fp3::{Fp3, Fp3Config};
use crate::field::quadratic::granger_scott_square;
use crate::field::{CubicExtension, QuadExtConfig, QuadExtField};

/// Parameters of the quadratic extension of `Fp3`
pub trait Fp6Over3Config: 'static + Send + Sync + Sized {
    /// Configuration of the cubic layer
    type Fp3Config: Fp3Config;

    /// The generator u of `Fp3`, squared to v^2
    const NONRESIDUE: Fp3<Self::Fp3Config>;

    /// `β^((p^k - 1) / 6)` for k = 0..6
    const FROBENIUS_COEFF_FP6_C1: &'static [<Self::Fp3Config as Fp3Config>::Fp];
}

/// Adapter from [`Fp6Over3Config`] to [`QuadExtConfig`]
pub struct Fp6Over3ConfigWrapper<P: Fp6Over3Config>(PhantomData<P>);

impl<P: Fp6Over3Config> QuadExtConfig for Fp6Over3ConfigWrapper<P> {
    type BasePrimeField = <P::Fp3Config as Fp3Config>::Fp;
    type BaseField = Fp3<P::Fp3Config>;
    type FrobCoeff = <P::Fp3Config as Fp3Config>::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;
    const NONRESIDUE: Fp3<P::Fp3Config> = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP6_C1;

    /// The non-residue is the generator of `Fp3`, so this is a coordinate shift
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Fp3<P::Fp3Config>) -> Fp3<P::Fp3Config> {
        fe.mul_by_generator()
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Fp3<P::Fp3Config>, power: usize) {
        fe.mul_assign_by_base_field(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }

    fn cyclotomic_square(fe: &Fp6Over3<P>) -> Fp6Over3<P> {
        granger_scott_square(fe)
    }
}

/// Sextic extension built as a quadratic extension of `Fp3`
pub type Fp6Over3<P> = QuadExtField<Fp6Over3ConfigWrapper<P>>;

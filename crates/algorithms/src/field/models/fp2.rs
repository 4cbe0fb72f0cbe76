//! `Fp2 = Fp[u]/(u^2 - β)`

use core::marker::PhantomData;

use crate::field::{Field, PrimeField, QuadExtConfig, QuadExtField};

/// Parameters of a quadratic extension of a prime field
pub trait Fp2Config: 'static + Send + Sync + Sized {
    /// The prime field
    type Fp: PrimeField;

    /// β, a quadratic non-residue in `Fp`
    const NONRESIDUE: Self::Fp;

    /// `β^((p^k - 1) / 2)` for k = 0, 1
    const FROBENIUS_COEFF_FP2_C1: &'static [Self::Fp];

    /// Multiplies by β; curves with a small β override this
    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

/// Adapter from [`Fp2Config`] to [`QuadExtConfig`]
pub struct Fp2ConfigWrapper<P: Fp2Config>(PhantomData<P>);

impl<P: Fp2Config> QuadExtConfig for Fp2ConfigWrapper<P> {
    type BasePrimeField = P::Fp;
    type BaseField = P::Fp;
    type FrobCoeff = P::Fp;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 2;
    const NONRESIDUE: P::Fp = P::NONRESIDUE;
    const FROBENIUS_COEFF_C1: &'static [P::Fp] = P::FROBENIUS_COEFF_FP2_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &P::Fp) -> P::Fp {
        P::mul_fp_by_nonresidue(fe)
    }

    #[inline]
    fn mul_base_field_by_frob_coeff(fe: &mut P::Fp, power: usize) {
        *fe *= &Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD];
    }
}

/// Quadratic extension of `P::Fp`
pub type Fp2<P> = QuadExtField<Fp2ConfigWrapper<P>>;

impl<P: Fp2Config> Fp2<P> {
    /// Multiplies both coordinates by an `Fp` element
    pub fn mul_assign_by_fp(&mut self, fe: &P::Fp) {
        self.mul_assign_by_base_field(fe);
    }

    /// Embeds an `Fp` element
    pub fn from_fp(fe: P::Fp) -> Self {
        Self::new(fe, P::Fp::ZERO)
    }
}

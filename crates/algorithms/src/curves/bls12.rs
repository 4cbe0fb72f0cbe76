//! BLS12 family
//!
//! Embedding degree 12 with the ate loop over the seed x. The hard part of
//! the final exponentiation follows Hayashida, Hayasaka and Teruya,
//! computing `f^(3 (p^4 - p^2 + 1) / r)`.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::error::Result;
use crate::field::{Field, SexticTarget, TargetField};
use crate::pairing::{
    final_exponentiation_easy, line_evaluator, miller_walk, non_identity_pairs, walk_lines,
    G1Precomp, G2Affine, G2Precomp, G2Projective, Gt, Pairing, SexticTwist,
};

use super::twist_frobenius;

/// Parameters specific to BLS12 curves
pub trait Bls12Config: SexticTwist {
    /// |x|, little-endian limbs
    const X: &'static [u64];
    /// Sign of x
    const X_IS_NEGATIVE: bool;
    /// Coefficient applied to x by the G2 endomorphism psi
    const TWIST_MUL_BY_Q_X: Self::Fqe;
    /// Coefficient applied to y by the G2 endomorphism psi
    const TWIST_MUL_BY_Q_Y: Self::Fqe;
}

/// Pairing engine of a BLS12 curve
pub struct Bls12<P: Bls12Config>(PhantomData<fn() -> P>);

impl<P: Bls12Config> Bls12<P> {
    /// `f^x`, for f in the cyclotomic subgroup
    fn exp_by_x(f: &P::Fqk) -> P::Fqk {
        let f = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f.unitary_inverse()
        } else {
            f
        }
    }

    /// psi(Q), which equals `[p]Q` on G2
    pub fn g2_mul_by_q(q: &G2Projective<P>) -> G2Projective<P> {
        twist_frobenius(q, &P::TWIST_MUL_BY_Q_X, &P::TWIST_MUL_BY_Q_Y)
    }
}

impl<P: Bls12Config> Pairing for Bls12<P>
where
    P::Fqk: SexticTarget<LineField = P::Fqe>,
{
    type Config = P;

    fn precompute_g2(q: &G2Affine<P>) -> G2Precomp<P> {
        if q.infinity {
            return G2Precomp::identity();
        }
        let mut coeffs = Vec::with_capacity(G2Precomp::<P>::expected_len());
        for ate in P::ATE_LOOPS {
            walk_lines::<P>(q, ate, &mut coeffs);
        }
        G2Precomp::from_parts(q, coeffs)
    }

    fn multi_miller_loop(pairs: &[(&G1Precomp<P>, &G2Precomp<P>)]) -> P::Fqk {
        let pairs = non_identity_pairs(pairs);
        let ell = line_evaluator::<P>();
        let mut cursor = 0;
        let mut f = P::Fqk::ONE;
        for ate in P::ATE_LOOPS {
            f *= miller_walk(ate, &pairs, &mut cursor, ell);
        }
        f
    }

    fn final_exponentiation(f: &P::Fqk) -> Result<Gt<P>> {
        let r = final_exponentiation_easy::<P>(f)?;

        let mut y0 = r.cyclotomic_square();
        let mut y1 = Self::exp_by_x(&r);
        let mut y2 = r.unitary_inverse();
        y1 *= y2;
        y2 = Self::exp_by_x(&y1);
        y1 = y1.unitary_inverse();
        y1 *= y2;
        y2 = Self::exp_by_x(&y1);
        y1 = y1.frobenius_map(1);
        y1 *= y2;
        let mut r = r * y0;
        y0 = Self::exp_by_x(&y1);
        y2 = Self::exp_by_x(&y0);
        y0 = y1.frobenius_map(2);
        y1 = y1.unitary_inverse();
        y1 *= y2;
        y1 *= y0;
        r *= y1;

        Ok(Gt(r))
    }
}

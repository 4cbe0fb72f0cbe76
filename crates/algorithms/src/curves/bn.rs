//! Barreto-Naehrig family
//!
//! Embedding degree 12 with the optimal ate loop over `6u + 2`, closed by
//! two lines through the Frobenius images of Q. The hard part is the
//! Fuentes-Castañeda et al. chain for `f^(2u (6u^2 + 3u + 1) (p^4 - p^2 + 1) / r)`.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::error::Result;
use crate::field::{Field, SexticTarget, TargetField};
use crate::pairing::{
    apply_lines, final_exponentiation_easy, line_evaluator, miller_walk, non_identity_pairs,
    walk_lines, G1Precomp, G2Affine, G2Precomp, G2Projective, Gt, Pairing, SexticTwist,
};

use super::twist_frobenius;

/// Parameters specific to BN curves
pub trait BnConfig: SexticTwist {
    /// |u|, little-endian limbs
    const U: &'static [u64];
    /// Sign of u
    const U_IS_NEGATIVE: bool;
    /// Coefficient applied to x by the G2 endomorphism psi
    const TWIST_MUL_BY_Q_X: Self::Fqe;
    /// Coefficient applied to y by the G2 endomorphism psi
    const TWIST_MUL_BY_Q_Y: Self::Fqe;
}

/// Pairing engine of a BN curve
pub struct Bn<P: BnConfig>(PhantomData<fn() -> P>);

impl<P: BnConfig> Bn<P> {
    /// `f^(-u)`, for f in the cyclotomic subgroup
    fn exp_by_neg_u(f: &P::Fqk) -> P::Fqk {
        let f = f.cyclotomic_exp(P::U);
        if P::U_IS_NEGATIVE {
            f
        } else {
            f.unitary_inverse()
        }
    }

    /// psi(Q), which equals `[p]Q` on G2
    pub fn g2_mul_by_q(q: &G2Projective<P>) -> G2Projective<P> {
        twist_frobenius(q, &P::TWIST_MUL_BY_Q_X, &P::TWIST_MUL_BY_Q_Y)
    }

    fn affine_mul_by_q(q: &G2Affine<P>) -> G2Affine<P> {
        G2Affine::<P>::new_unchecked(
            q.x.frobenius_map(1) * P::TWIST_MUL_BY_Q_X,
            q.y.frobenius_map(1) * P::TWIST_MUL_BY_Q_Y,
        )
    }
}

impl<P: BnConfig> Pairing for Bn<P>
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
            let mut r = walk_lines::<P>(q, ate, &mut coeffs);
            if ate.is_negative {
                r.negate();
            }
            let q1 = Self::affine_mul_by_q(q);
            let q2 = -Self::affine_mul_by_q(&q1);
            coeffs.push(r.add_in_place(&q1.x, &q1.y));
            coeffs.push(r.add_in_place(&q2.x, &q2.y));
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
            apply_lines(&mut f, &pairs, &mut cursor, ell);
            apply_lines(&mut f, &pairs, &mut cursor, ell);
        }
        f
    }

    fn final_exponentiation(f: &P::Fqk) -> Result<Gt<P>> {
        let r = final_exponentiation_easy::<P>(f)?;

        let y0 = Self::exp_by_neg_u(&r);
        let y1 = y0.cyclotomic_square();
        let y2 = y1.cyclotomic_square();
        let mut y3 = y2 * y1;
        let y4 = Self::exp_by_neg_u(&y3);
        let y5 = y4.cyclotomic_square();
        let mut y6 = Self::exp_by_neg_u(&y5);
        y3 = y3.unitary_inverse();
        y6 = y6.unitary_inverse();
        let y7 = y6 * y4;
        let mut y8 = y7 * y3;
        let y9 = y8 * y1;
        let y10 = y8 * y4;
        let y11 = y10 * r;
        let y12 = y9.frobenius_map(1);
        let y13 = y12 * y11;
        y8 = y8.frobenius_map(2);
        let y14 = y8 * y13;
        let y15 = (r.unitary_inverse() * y9).frobenius_map(3);

        Ok(Gt(y15 * y14))
    }
}

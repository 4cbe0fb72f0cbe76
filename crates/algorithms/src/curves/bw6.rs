//! BW6 family
//!
//! Embedding degree 6 with G2 defined over the base field. The optimal ate
//! pairing walks two loop counts, `f = f_1 * f_2^p`. The hard part raises to
//! `R0(x) + p R1(x)` with the per-curve coefficient tables, which is
//! `3 (x^3 - x^2 + 1) (p^2 - p + 1) / r`.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::error::Result;
use crate::field::{Field, SexticTarget, TargetField};
use crate::pairing::{
    final_exponentiation_easy, line_evaluator, miller_walk, non_identity_pairs, walk_lines,
    G1Precomp, G2Affine, G2Precomp, Gt, Pairing, SexticTwist,
};

/// Parameters specific to BW6 curves
pub trait Bw6Config: SexticTwist {
    /// |x|, little-endian limbs
    const X: &'static [u64];
    /// Sign of x
    const X_IS_NEGATIVE: bool;
    /// Coefficients of R0, ascending powers of x
    const HARD_PART_R0: &'static [i16];
    /// Coefficients of R1, ascending powers of x
    const HARD_PART_R1: &'static [i16];
}

/// Pairing engine of a BW6 curve
pub struct Bw6<P: Bw6Config>(PhantomData<fn() -> P>);

impl<P: Bw6Config> Bw6<P> {
    fn exp_by_x(f: &P::Fqk) -> P::Fqk {
        let f = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f.unitary_inverse()
        } else {
            f
        }
    }
}

impl<P: Bw6Config> Pairing for Bw6<P>
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
        // the i-th walk enters raised to p^i
        for (i, ate) in P::ATE_LOOPS.iter().enumerate() {
            f *= miller_walk(ate, &pairs, &mut cursor, ell).frobenius_map(i);
        }
        f
    }

    fn final_exponentiation(f: &P::Fqk) -> Result<Gt<P>> {
        let f = final_exponentiation_easy::<P>(f)?;

        let terms = P::HARD_PART_R0.len().max(P::HARD_PART_R1.len());
        let mut powers: Vec<P::Fqk> = Vec::with_capacity(terms);
        powers.push(f);
        for i in 1..terms {
            let next = Self::exp_by_x(&powers[i - 1]);
            powers.push(next);
        }
        let powers_p: Vec<P::Fqk> = powers.iter().map(|g| g.frobenius_map(1)).collect();

        let max = P::HARD_PART_R0
            .iter()
            .chain(P::HARD_PART_R1)
            .map(|c| c.unsigned_abs())
            .max()
            .unwrap_or(0);
        let bits = 16 - max.leading_zeros();

        // shared square-and-multiply over every term of f^R0(x) (f^p)^R1(x)
        let mut acc = P::Fqk::ONE;
        for bit in (0..bits).rev() {
            acc = acc.cyclotomic_square();
            for (table, bases) in [(P::HARD_PART_R0, &powers), (P::HARD_PART_R1, &powers_p)] {
                for (c, g) in table.iter().zip(bases.iter()) {
                    if (c.unsigned_abs() >> bit) & 1 == 1 {
                        if *c < 0 {
                            acc *= g.unitary_inverse();
                        } else {
                            acc *= g;
                        }
                    }
                }
            }
        }

        Ok(Gt(acc))
    }
}

//! MNT family
//!
//! Embedding degree 4 or 6 with G2 on a quadratic twist over `Fq^(k/2)`.
//! The ate loop walks NAF(|t - 1|) with affine line coefficients, so every
//! line is a dense element `c0 + c1 Y` of the target field. The hard part of
//! the final exponentiation is `w1 p + w0`, which is `(p^2 + 1) / r` for
//! k = 4 and `(p^2 - p + 1) / r` for k = 6.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::ec::SwCurveConfig;
use crate::error::Result;
use crate::field::{Field, QuadraticTarget, TargetField};
use crate::pairing::{
    final_exponentiation_easy, miller_walk, non_identity_pairs, G1Precomp, G2Affine, G2Precomp,
    Gt, LineCoefficients, Pairing, PairingConfig,
};

/// Parameters specific to MNT curves
pub trait MntConfig: PairingConfig {
    /// w1 of the hard part, little-endian limbs
    const FINAL_EXPONENT_W1: &'static [u64];
    /// |w0| of the hard part, little-endian limbs
    const FINAL_EXPONENT_W0: &'static [u64];
    /// Sign of w0
    const FINAL_EXPONENT_W0_IS_NEGATIVE: bool;
}

/// Pairing engine of an MNT curve
pub struct Mnt<P: MntConfig>(PhantomData<fn() -> P>);

/// `num / den`, zero when `den` is zero
fn slope<F: Field>(num: F, den: &F) -> F {
    // den vanishes only when R = ±Q, which a loop count below r never reaches
    num * Option::<F>::from(den.invert()).unwrap_or(F::ZERO)
}

/// The running point R of the precomputation, affine coordinates on the twist
struct AffineTwistPoint<P: MntConfig> {
    x: P::Fqe,
    y: P::Fqe,
}

impl<P: MntConfig> AffineTwistPoint<P> {
    fn line(gamma: P::Fqe, x: &P::Fqe, y: &P::Fqe) -> LineCoefficients<P::Fqe> {
        LineCoefficients {
            ell_0: gamma * x - y,
            ell_vw: P::TWIST.square(),
            ell_vv: -(gamma * P::TWIST),
        }
    }

    /// R = 2R, returning the tangent line at R
    fn double_in_place(&mut self) -> LineCoefficients<P::Fqe> {
        let x_square = self.x.square();
        let num = x_square.double() + x_square + P::G2Config::COEFF_A;
        let gamma = slope(num, &self.y.double());
        let line = Self::line(gamma, &self.x, &self.y);

        let x = gamma.square() - self.x.double();
        self.y = gamma * (self.x - x) - self.y;
        self.x = x;
        line
    }

    /// R = R + (x2, y2), returning the line through both
    fn add_in_place(&mut self, x2: &P::Fqe, y2: &P::Fqe) -> LineCoefficients<P::Fqe> {
        let gamma = slope(self.y - y2, &(self.x - x2));
        let line = Self::line(gamma, x2, y2);

        let x = gamma.square() - self.x - x2;
        self.y = gamma * (self.x - x) - self.y;
        self.x = x;
        line
    }
}

/// Multiplies by `ell_vw PY + (ell_0 + ell_vv PX) Y`
fn ell_quadratic<P: MntConfig>(
    f: &mut P::Fqk,
    coeffs: &LineCoefficients<P::Fqe>,
    p: &G1Precomp<P>,
) where
    P::Fqk: QuadraticTarget<BaseField = P::Fqe>,
{
    let c0 = coeffs.ell_vw.mul_by_base_prime_field(&p.py);
    let c1 = coeffs.ell_0 + coeffs.ell_vv.mul_by_base_prime_field(&p.px);
    f.mul_by_line(&c0, &c1);
}

impl<P: MntConfig> Pairing for Mnt<P>
where
    P::Fqk: QuadraticTarget<BaseField = P::Fqe>,
{
    type Config = P;

    fn precompute_g2(q: &G2Affine<P>) -> G2Precomp<P> {
        if q.infinity {
            return G2Precomp::identity();
        }
        let mut coeffs = Vec::with_capacity(G2Precomp::<P>::expected_len());
        let neg_qy = -q.y;
        for ate in P::ATE_LOOPS {
            let mut r = AffineTwistPoint::<P> { x: q.x, y: q.y };
            for digit in ate.digits() {
                coeffs.push(r.double_in_place());
                match digit {
                    1 => coeffs.push(r.add_in_place(&q.x, &q.y)),
                    -1 => coeffs.push(r.add_in_place(&q.x, &neg_qy)),
                    _ => {}
                }
            }
        }
        G2Precomp::from_parts(q, coeffs)
    }

    fn multi_miller_loop(pairs: &[(&G1Precomp<P>, &G2Precomp<P>)]) -> P::Fqk {
        let pairs = non_identity_pairs(pairs);
        let mut cursor = 0;
        let mut f = P::Fqk::ONE;
        for ate in P::ATE_LOOPS {
            f *= miller_walk(ate, &pairs, &mut cursor, ell_quadratic::<P>);
        }
        f
    }

    fn final_exponentiation(f: &P::Fqk) -> Result<Gt<P>> {
        let f = final_exponentiation_easy::<P>(f)?;

        let w1_part = f.frobenius_map(1).cyclotomic_exp(P::FINAL_EXPONENT_W1);
        let w0_part = f.cyclotomic_exp(P::FINAL_EXPONENT_W0);
        let w0_part = if P::FINAL_EXPONENT_W0_IS_NEGATIVE {
            w0_part.unitary_inverse()
        } else {
            w0_part
        };

        Ok(Gt(w1_part * w0_part))
    }
}

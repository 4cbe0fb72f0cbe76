//! The Miller walk shared by every family

use alloc::vec::Vec;

use super::{
    AteLoop, G1Precomp, G2Precomp, LineCoefficients, PairingConfig, SexticTwist, TwistKind,
};
use crate::field::{Field, SexticTarget};

/// Multiplies the accumulator by one line evaluated at a G1 point
pub(crate) type LineEvaluator<P> = fn(
    &mut <P as PairingConfig>::Fqk,
    &LineCoefficients<<P as PairingConfig>::Fqe>,
    &G1Precomp<P>,
);

/// Pairs taking part in a multi-pairing; `(P, Q)` with either point at
/// infinity contributes one
pub(crate) type Pairs<'a, P> = Vec<(&'a G1Precomp<P>, &'a G2Precomp<P>)>;

fn ell_divide<P: SexticTwist>(
    f: &mut P::Fqk,
    coeffs: &LineCoefficients<P::Fqe>,
    p: &G1Precomp<P>,
) where
    P::Fqk: SexticTarget<LineField = P::Fqe>,
{
    let c2 = coeffs.ell_vv.mul_by_base_prime_field(&p.px);
    let c4 = coeffs.ell_vw.mul_by_base_prime_field(&p.py);
    f.mul_by_024(&coeffs.ell_0, &c2, &c4);
}

fn ell_multiply<P: SexticTwist>(
    f: &mut P::Fqk,
    coeffs: &LineCoefficients<P::Fqe>,
    p: &G1Precomp<P>,
) where
    P::Fqk: SexticTarget<LineField = P::Fqe>,
{
    let c0 = coeffs.ell_vw.mul_by_base_prime_field(&p.py);
    let c5 = coeffs.ell_vv.mul_by_base_prime_field(&p.px);
    f.mul_by_045(&c0, &coeffs.ell_0, &c5);
}

/// Sparse line multiplication matching the twist of `P`
pub(crate) fn line_evaluator<P: SexticTwist>() -> LineEvaluator<P>
where
    P::Fqk: SexticTarget<LineField = P::Fqe>,
{
    match P::TWIST_KIND {
        TwistKind::Divide => ell_divide::<P>,
        TwistKind::Multiply => ell_multiply::<P>,
    }
}

/// Drops the pairs with a point at infinity
pub(crate) fn non_identity_pairs<'a, P: PairingConfig>(
    pairs: &[(&'a G1Precomp<P>, &'a G2Precomp<P>)],
) -> Pairs<'a, P> {
    pairs
        .iter()
        .filter(|(p, q)| !p.infinity && !q.is_identity())
        .copied()
        .collect()
}

/// Walks the digits of `ate` for all pairs at once, one squaring per step.
///
/// `cursor` indexes the first coefficient of this walk and is left after
/// its last one. A negative loop count inverts the result.
pub(crate) fn miller_walk<P: PairingConfig>(
    ate: &AteLoop,
    pairs: &[(&G1Precomp<P>, &G2Precomp<P>)],
    cursor: &mut usize,
    ell: LineEvaluator<P>,
) -> P::Fqk {
    let mut f = P::Fqk::ONE;
    let mut idx = *cursor;
    for digit in ate.digits() {
        f = f.square();
        for (p, q) in pairs {
            ell(&mut f, &q.coeffs()[idx], p);
        }
        idx += 1;
        if digit != 0 {
            for (p, q) in pairs {
                ell(&mut f, &q.coeffs()[idx], p);
            }
            idx += 1;
        }
    }
    *cursor = idx;
    if ate.is_negative {
        // zero only for degenerate inputs; final exponentiation reports it
        f = Option::<P::Fqk>::from(f.invert()).unwrap_or(P::Fqk::ZERO);
    }
    f
}

/// Applies the line at `cursor` for every pair and advances it
pub(crate) fn apply_lines<P: PairingConfig>(
    f: &mut P::Fqk,
    pairs: &[(&G1Precomp<P>, &G2Precomp<P>)],
    cursor: &mut usize,
    ell: LineEvaluator<P>,
) {
    for (p, q) in pairs {
        ell(f, &q.coeffs()[*cursor], p);
    }
    *cursor += 1;
}

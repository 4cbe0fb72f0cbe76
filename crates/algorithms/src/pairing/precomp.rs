//! Precomputed Miller loop inputs

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use dpairing_api::TextSerialize;

use super::{
    AteLoop, G1Affine, G1Projective, G2Affine, PairingConfig, SexticTwist, TwistKind,
};
use crate::ec::SwCurveConfig;
use crate::encoding::text::{expect_separator, read_flag};
use crate::encoding::{read_sequence, write_sequence};
use crate::error::{validate, Result, ResultExt};
use crate::field::{Field, PrimeField};

/// Coefficients of one line function, evaluated at a G1 point during the loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineCoefficients<F: Field> {
    /// Constant term
    pub ell_0: F,
    /// Coefficient scaled by `PY`
    pub ell_vw: F,
    /// Coefficient scaled by `PX`
    pub ell_vv: F,
}

impl<F: Field> TextSerialize for LineCoefficients<F> {
    fn write_text(&self, out: &mut String) {
        self.ell_0.write_text(out);
        out.push(' ');
        self.ell_vw.write_text(out);
        out.push(' ');
        self.ell_vv.write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "LineCoefficients::read_text";
        let (ell_0, rest) = F::read_text(input).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (ell_vw, rest) = F::read_text(rest).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (ell_vv, rest) = F::read_text(rest).with_context(CTX)?;
        Ok((
            LineCoefficients {
                ell_0,
                ell_vw,
                ell_vv,
            },
            rest,
        ))
    }
}

// ============================================================================
// G1
// ============================================================================

/// A G1 point prepared for the Miller loop
pub struct G1Precomp<P: PairingConfig> {
    /// Affine x-coordinate
    pub px: P::Fp,
    /// Affine y-coordinate
    pub py: P::Fp,
    /// Set for the identity
    pub infinity: bool,
}

impl<P: PairingConfig> Clone for G1Precomp<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PairingConfig> Copy for G1Precomp<P> {}

impl<P: PairingConfig> PartialEq for G1Precomp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.px == other.px && self.py == other.py && self.infinity == other.infinity
    }
}

impl<P: PairingConfig> Eq for G1Precomp<P> {}

impl<P: PairingConfig> fmt::Debug for G1Precomp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("G1Precomp")
            .field("px", &self.px)
            .field("py", &self.py)
            .field("infinity", &self.infinity)
            .finish()
    }
}

impl<'a, P: PairingConfig> From<&'a G1Affine<P>> for G1Precomp<P> {
    fn from(p: &'a G1Affine<P>) -> Self {
        G1Precomp {
            px: p.x,
            py: p.y,
            infinity: p.infinity,
        }
    }
}

impl<P: PairingConfig> From<G1Affine<P>> for G1Precomp<P> {
    fn from(p: G1Affine<P>) -> Self {
        Self::from(&p)
    }
}

impl<P: PairingConfig> From<G1Projective<P>> for G1Precomp<P> {
    fn from(p: G1Projective<P>) -> Self {
        Self::from(&p.to_affine())
    }
}

impl<P: PairingConfig> TextSerialize for G1Precomp<P> {
    fn write_text(&self, out: &mut String) {
        G1Affine::<P>::from(self).write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        let (p, rest) = G1Affine::<P>::read_text(input).with_context("G1Precomp::read_text")?;
        Ok((Self::from(&p), rest))
    }
}

impl<'a, P: PairingConfig> From<&'a G1Precomp<P>> for G1Affine<P> {
    fn from(p: &'a G1Precomp<P>) -> Self {
        if p.infinity {
            Self::identity()
        } else {
            Self::new_unchecked(p.px, p.py)
        }
    }
}

// ============================================================================
// G2
// ============================================================================

/// A G2 point with the line coefficients of its Miller loop.
///
/// The coefficients are laid out in walk order. Their count is fixed by the
/// loop counts of `P`, see [`G2Precomp::expected_len`]; the identity carries
/// none.
pub struct G2Precomp<P: PairingConfig> {
    qx: P::Fqe,
    qy: P::Fqe,
    coeffs: Vec<LineCoefficients<P::Fqe>>,
    infinity: bool,
}

impl<P: PairingConfig> Clone for G2Precomp<P> {
    fn clone(&self) -> Self {
        G2Precomp {
            qx: self.qx,
            qy: self.qy,
            coeffs: self.coeffs.clone(),
            infinity: self.infinity,
        }
    }
}

impl<P: PairingConfig> PartialEq for G2Precomp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.qx == other.qx
            && self.qy == other.qy
            && self.infinity == other.infinity
            && self.coeffs == other.coeffs
    }
}

impl<P: PairingConfig> Eq for G2Precomp<P> {}

impl<P: PairingConfig> fmt::Debug for G2Precomp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("G2Precomp")
            .field("qx", &self.qx)
            .field("qy", &self.qy)
            .field("coeffs", &self.coeffs.len())
            .field("infinity", &self.infinity)
            .finish()
    }
}

impl<P: PairingConfig> G2Precomp<P> {
    /// Number of line coefficients of a non-identity point
    pub fn expected_len() -> usize {
        P::ATE_LOOPS.iter().map(AteLoop::line_count).sum::<usize>() + P::FROBENIUS_LINES
    }

    /// Precomputation of the identity
    pub fn identity() -> Self {
        G2Precomp {
            qx: P::Fqe::ZERO,
            qy: P::Fqe::ZERO,
            coeffs: Vec::new(),
            infinity: true,
        }
    }

    pub(crate) fn from_parts(q: &G2Affine<P>, coeffs: Vec<LineCoefficients<P::Fqe>>) -> Self {
        log::trace!(
            "{}: precomputed {} line coefficients",
            P::NAME,
            coeffs.len()
        );
        G2Precomp {
            qx: q.x,
            qy: q.y,
            coeffs,
            infinity: false,
        }
    }

    /// The point this was computed from
    pub fn point(&self) -> G2Affine<P> {
        if self.infinity {
            G2Affine::<P>::identity()
        } else {
            G2Affine::<P>::new_unchecked(self.qx, self.qy)
        }
    }

    /// Line coefficients in walk order
    pub fn coeffs(&self) -> &[LineCoefficients<P::Fqe>] {
        &self.coeffs
    }

    /// Set for the identity
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// `flag QX QY`, a newline, then the coefficient sequence
impl<P: PairingConfig> TextSerialize for G2Precomp<P> {
    fn write_text(&self, out: &mut String) {
        self.point().write_text(out);
        out.push('\n');
        write_sequence(&self.coeffs, out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "G2Precomp::read_text";
        let (flag, _) = read_flag(input, CTX)?;
        let (q, rest) = G2Affine::<P>::read_text(input).with_context(CTX)?;
        let rest = expect_separator(rest, '\n', CTX)?;
        let (coeffs, rest) = read_sequence::<LineCoefficients<P::Fqe>>(rest).with_context(CTX)?;
        let expected = if flag { Self::expected_len() } else { 0 };
        validate::encoding(
            coeffs.len() == expected,
            CTX,
            "wrong number of line coefficients",
        )?;
        let precomp = if flag {
            G2Precomp {
                qx: q.x,
                qy: q.y,
                coeffs,
                infinity: false,
            }
        } else {
            Self::identity()
        };
        Ok((precomp, rest))
    }
}

// ============================================================================
// Line computation
// ============================================================================

/// The running point R of a sextic-twist precomputation, homogeneous
/// coordinates on the twist
pub(crate) struct TwistPoint<P: SexticTwist> {
    x: P::Fqe,
    y: P::Fqe,
    z: P::Fqe,
}

impl<P: SexticTwist> TwistPoint<P> {
    pub(crate) fn new(q: &G2Affine<P>) -> Self {
        TwistPoint {
            x: q.x,
            y: q.y,
            z: P::Fqe::ONE,
        }
    }

    pub(crate) fn negate(&mut self) {
        self.y = -self.y;
    }

    /// R = 2R, returning the tangent line at R
    pub(crate) fn double_in_place(&mut self) -> LineCoefficients<P::Fqe> {
        let two_inv = P::Fp::TWO_INV;
        let a = (self.x * self.y).mul_by_base_prime_field(&two_inv);
        let b = self.y.square();
        let c = self.z.square();
        let e = P::G2Config::COEFF_B * (c.double() + c);
        let f = e.double() + e;
        let g = (b + f).mul_by_base_prime_field(&two_inv);
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = a * (b - f);
        self.y = g.square() - (e_square.double() + e_square);
        self.z = b * h;

        match P::TWIST_KIND {
            TwistKind::Multiply => LineCoefficients {
                ell_0: i,
                ell_vw: -(P::TWIST * h),
                ell_vv: j.double() + j,
            },
            TwistKind::Divide => LineCoefficients {
                ell_0: P::TWIST * i,
                ell_vw: -h,
                ell_vv: j.double() + j,
            },
        }
    }

    /// R = R + (x2, y2), returning the line through both
    pub(crate) fn add_in_place(&mut self, x2: &P::Fqe, y2: &P::Fqe) -> LineCoefficients<P::Fqe> {
        let theta = self.y - (*y2 * self.z);
        let lambda = self.x - (*x2 * self.z);
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * d;
        let f = self.z * c;
        let g = self.x * d;
        let h = e + f - g.double();
        let j = theta * x2 - (lambda * y2);

        self.x = lambda * h;
        self.y = theta * (g - h) - (e * self.y);
        self.z *= e;

        match P::TWIST_KIND {
            TwistKind::Multiply => LineCoefficients {
                ell_0: j,
                ell_vw: P::TWIST * lambda,
                ell_vv: -theta,
            },
            TwistKind::Divide => LineCoefficients {
                ell_0: P::TWIST * j,
                ell_vw: lambda,
                ell_vv: -theta,
            },
        }
    }
}

/// Walks `ate` from R = Q, appending one doubling line per digit and one
/// addition line per non-zero digit. Returns the final R.
pub(crate) fn walk_lines<P: SexticTwist>(
    q: &G2Affine<P>,
    ate: &AteLoop,
    coeffs: &mut Vec<LineCoefficients<P::Fqe>>,
) -> TwistPoint<P> {
    let mut r = TwistPoint::new(q);
    let neg_qy = -q.y;
    for digit in ate.digits() {
        coeffs.push(r.double_in_place());
        match digit {
            1 => coeffs.push(r.add_in_place(&q.x, &q.y)),
            -1 => coeffs.push(r.add_in_place(&q.x, &neg_qy)),
            _ => {}
        }
    }
    r
}

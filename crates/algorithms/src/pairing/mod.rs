//! Pairing engine
//!
//! A curve plugs into the engine through a zero-sized [`PairingConfig`]
//! type: the field tower, the G1 and G2 curve configurations, the twist and
//! the ate loop counts. The family modules in [`crate::curves`] add the
//! final exponentiation and implement [`Pairing`] on top of the shared
//! pieces defined here:
//!
//! - [`G1Precomp`] and [`G2Precomp`], the line coefficients of the loop
//!   computed once per G2 point;
//! - the Miller walk shared by every family, with one squaring per step for
//!   any number of pairs, and the line evaluators of sextic twists;
//! - the easy part of the final exponentiation;
//! - [`Gt`], the multiplicative group the pairing lands in.

mod gt;
mod miller;
mod precomp;

pub use gt::Gt;
pub use precomp::{G1Precomp, G2Precomp, LineCoefficients};

pub(crate) use gt::final_exponentiation_easy;
pub(crate) use miller::{apply_lines, line_evaluator, miller_walk, non_identity_pairs};
pub(crate) use precomp::walk_lines;

use alloc::vec::Vec;

use crate::ec::{Affine, Projective, SwCurveConfig};
use crate::error::Result;
use crate::field::arithmetic::{find_naf, get_bit};
use crate::field::{Field, PrimeField, TargetField};

/// Where the sextic twist puts the non-residue ξ
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TwistKind {
    /// M-type twist, `y^2 = x^3 + b ξ`
    Multiply,
    /// D-type twist, `y^2 = x^3 + b / ξ`
    Divide,
}

/// Signed-digit expansion walked by a Miller loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopEncoding {
    /// Plain binary digits
    Binary,
    /// Non-adjacent form, digits in {-1, 0, 1}
    Naf,
}

/// An ate loop count with its sign
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AteLoop {
    /// Absolute value, little-endian limbs
    pub count: &'static [u64],
    /// Sign of the loop count
    pub is_negative: bool,
    /// Digit expansion to walk
    pub encoding: LoopEncoding,
}

impl AteLoop {
    /// Digits below the most significant one, most significant first
    pub fn digits(&self) -> Vec<i8> {
        let mut digits: Vec<i8> = match self.encoding {
            LoopEncoding::Binary => (0..self.count.len() * 64)
                .map(|i| get_bit(self.count, i) as i8)
                .collect(),
            LoopEncoding::Naf => find_naf(self.count),
        };
        while digits.last() == Some(&0) {
            digits.pop();
        }
        digits.pop();
        digits.reverse();
        digits
    }

    /// Number of line coefficients one walk over this count emits
    pub fn line_count(&self) -> usize {
        self.digits()
            .iter()
            .map(|&d| if d == 0 { 1 } else { 2 })
            .sum()
    }
}

/// Static description of a pairing-friendly curve
pub trait PairingConfig: 'static + Send + Sync + Sized {
    /// Base prime field
    type Fp: PrimeField;
    /// Scalar field, of order r
    type Fr: PrimeField;
    /// Field of definition of the twist carrying G2
    type Fqe: Field<BasePrimeField = Self::Fp>;
    /// Full extension field holding the pairing values
    type Fqk: TargetField<BasePrimeField = Self::Fp>;
    /// Curve over `Fp` carrying G1
    type G1Config: SwCurveConfig<BaseField = Self::Fp, ScalarField = Self::Fr>;
    /// Twisted curve over `Fqe` carrying G2
    type G2Config: SwCurveConfig<BaseField = Self::Fqe, ScalarField = Self::Fr>;

    /// Name used in diagnostics
    const NAME: &'static str;
    /// Embedding degree k
    const EMBEDDING_DEGREE: usize;
    /// The non-residue ξ defining the twist
    const TWIST: Self::Fqe;
    /// Loop counts, each walked from a fresh copy of Q
    const ATE_LOOPS: &'static [AteLoop];
    /// Lines added after the walks
    const FROBENIUS_LINES: usize = 0;
}

/// A curve whose G2 lives on a sextic twist.
///
/// The line evaluators of such curves also need
/// `Fqk: SexticTarget<LineField = Fqe>`.
pub trait SexticTwist: PairingConfig {
    /// Twist type
    const TWIST_KIND: TwistKind;
}

/// G1 point of a configuration
pub type G1Affine<P> = Affine<<P as PairingConfig>::G1Config>;
/// G1 point of a configuration, projective
pub type G1Projective<P> = Projective<<P as PairingConfig>::G1Config>;
/// G2 point of a configuration
pub type G2Affine<P> = Affine<<P as PairingConfig>::G2Config>;
/// G2 point of a configuration, projective
pub type G2Projective<P> = Projective<<P as PairingConfig>::G2Config>;

/// A pairing engine
pub trait Pairing: 'static + Send + Sync + Sized {
    /// Curve description
    type Config: PairingConfig;

    /// Precomputes the line coefficients for a G2 point
    fn precompute_g2(q: &G2Affine<Self::Config>) -> G2Precomp<Self::Config>;

    /// Product of the Miller loops of all pairs, before final exponentiation
    fn multi_miller_loop(
        pairs: &[(&G1Precomp<Self::Config>, &G2Precomp<Self::Config>)],
    ) -> <Self::Config as PairingConfig>::Fqk;

    /// Maps a Miller loop output to the target group
    fn final_exponentiation(
        f: &<Self::Config as PairingConfig>::Fqk,
    ) -> Result<Gt<Self::Config>>;

    /// Stores the affine coordinates of a G1 point
    fn precompute_g1(p: &G1Affine<Self::Config>) -> G1Precomp<Self::Config> {
        G1Precomp::from(p)
    }

    /// Miller loop of a single pair
    fn miller_loop(
        p: &G1Precomp<Self::Config>,
        q: &G2Precomp<Self::Config>,
    ) -> <Self::Config as PairingConfig>::Fqk {
        Self::multi_miller_loop(&[(p, q)])
    }

    /// Miller loop of two pairs sharing the squarings
    fn double_miller_loop(
        p1: &G1Precomp<Self::Config>,
        q1: &G2Precomp<Self::Config>,
        p2: &G1Precomp<Self::Config>,
        q2: &G2Precomp<Self::Config>,
    ) -> <Self::Config as PairingConfig>::Fqk {
        Self::multi_miller_loop(&[(p1, q1), (p2, q2)])
    }

    /// `e(P, Q)`
    fn pairing(
        p: &G1Affine<Self::Config>,
        q: &G2Affine<Self::Config>,
    ) -> Result<Gt<Self::Config>> {
        let p = Self::precompute_g1(p);
        let q = Self::precompute_g2(q);
        Self::final_exponentiation(&Self::miller_loop(&p, &q))
    }

    /// Product of pairings `e(P_1, Q_1) ... e(P_n, Q_n)` with a single final
    /// exponentiation
    fn multi_pairing(
        pairs: &[(G1Affine<Self::Config>, G2Affine<Self::Config>)],
    ) -> Result<Gt<Self::Config>> {
        let prepared: Vec<_> = pairs
            .iter()
            .map(|(p, q)| (Self::precompute_g1(p), Self::precompute_g2(q)))
            .collect();
        let refs: Vec<_> = prepared.iter().map(|(p, q)| (p, q)).collect();
        Self::final_exponentiation(&Self::multi_miller_loop(&refs))
    }
}

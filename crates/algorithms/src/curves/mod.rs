//! Pairing-friendly curve families and their instantiations
//!
//! | Curve | Family | Twist | Ate loop |
//! |-------|--------|-------|----------|
//! | BN254 | [`bn`] | D-type | NAF(6u + 2) and two Frobenius lines |
//! | BLS12-381 | [`bls12`] | M-type | binary \|x\|, x < 0 |
//! | BLS12-377 | [`bls12`] | D-type | binary x |
//! | BW6-761 | [`bw6`] | M-type | binary(x + 1), NAF(x^3 - x^2 - x) |
//! | MNT4-298 | [`mnt`] | quadratic | NAF(t - 1) |
//! | MNT6-298 | [`mnt`] | quadratic | NAF(\|t - 1\|), t - 1 < 0 |

pub mod bls12;
pub mod bn;
pub mod bw6;
pub mod mnt;

#[cfg(feature = "bls12_377")]
pub mod bls12_377;
#[cfg(feature = "bls12_381")]
pub mod bls12_381;
#[cfg(feature = "bn254")]
pub mod bn254;
#[cfg(feature = "bw6_761")]
pub mod bw6_761;
#[cfg(feature = "mnt4_298")]
pub mod mnt4_298;
#[cfg(feature = "mnt6_298")]
pub mod mnt6_298;

pub use bls12::{Bls12, Bls12Config};
pub use bn::{Bn, BnConfig};
pub use bw6::{Bw6, Bw6Config};
pub use mnt::{Mnt, MntConfig};

use crate::ec::{Projective, SwCurveConfig};
use crate::field::Field;

/// `psi = twist o Frobenius o untwist` on a degree-12 G2.
///
/// Conjugates every coordinate and scales x and y by the twist's Frobenius
/// coefficients. The result is valid in any coordinate system since the
/// Frobenius is a field automorphism.
pub(crate) fn twist_frobenius<C: SwCurveConfig>(
    p: &Projective<C>,
    coeff_x: &C::BaseField,
    coeff_y: &C::BaseField,
) -> Projective<C> {
    Projective::new_unchecked(
        p.x.frobenius_map(1) * coeff_x,
        p.y.frobenius_map(1) * coeff_y,
        p.z.frobenius_map(1),
    )
}

#[cfg(test)]
pub(crate) mod test_utils;

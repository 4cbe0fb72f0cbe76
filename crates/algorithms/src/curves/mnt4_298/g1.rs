//! G1 of MNT4-298: `y^2 = x^3 + 2x + b` over `Fq`, of prime order

use dpairing_params::pairing::mnt4_298::*;

use super::fields::{fq, Fq, Fr};
use crate::ec::{Affine, Homogeneous, Projective, SwCurveConfig};
use crate::field::Field;

/// Curve parameters of G1
pub struct G1Config;

impl SwCurveConfig for G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;
    type Coordinates = Homogeneous;

    const COEFF_A: Fq = fq(MNT4_298_G1_COEFF_A);
    const COEFF_B: Fq = fq(MNT4_298_G1_COEFF_B);
    const GENERATOR: G1Affine =
        G1Affine::new_unchecked(fq(MNT4_298_G1_GENERATOR_X), fq(MNT4_298_G1_GENERATOR_Y));

    /// Multiplication by 2
    #[inline(always)]
    fn mul_by_a(elem: &Fq) -> Fq {
        elem.double()
    }
}

/// Affine G1 point
pub type G1Affine = Affine<G1Config>;
/// Homogeneous G1 point
pub type G1Projective = Projective<G1Config>;

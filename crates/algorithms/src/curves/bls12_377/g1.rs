//! G1 of BLS12-377: `y^2 = x^3 + 1` over `Fq`

use dpairing_params::pairing::bls12_377::*;

use super::fields::{fq, Fq, Fr};
use crate::ec::{Affine, Jacobian, Projective, SwCurveConfig};
use crate::field::Field;

/// Curve parameters of G1
pub struct G1Config;

impl SwCurveConfig for G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;
    type Coordinates = Jacobian;

    const COEFF_A: Fq = Fq::ZERO;
    const COEFF_B: Fq = fq(BLS12_377_G1_COEFF_B);
    const GENERATOR: G1Affine =
        G1Affine::new_unchecked(fq(BLS12_377_G1_GENERATOR_X), fq(BLS12_377_G1_GENERATOR_Y));
}

/// Affine G1 point
pub type G1Affine = Affine<G1Config>;
/// Jacobian G1 point
pub type G1Projective = Projective<G1Config>;

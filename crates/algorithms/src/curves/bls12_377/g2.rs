//! G2 of BLS12-377: the D-type sextic twist `y^2 = x^3 + 1 / u` over `Fq2`

use dpairing_params::pairing::bls12_377::*;

use super::fields::{fq2, Fq2, Fr};
use crate::ec::{Affine, Jacobian, Projective, SwCurveConfig};
use crate::field::Field;

/// Curve parameters of G2
pub struct G2Config;

impl SwCurveConfig for G2Config {
    type BaseField = Fq2;
    type ScalarField = Fr;
    type Coordinates = Jacobian;

    const COEFF_A: Fq2 = Fq2::ZERO;
    const COEFF_B: Fq2 = fq2(BLS12_377_G2_COEFF_B);
    const GENERATOR: G2Affine =
        G2Affine::new_unchecked(fq2(BLS12_377_G2_GENERATOR_X), fq2(BLS12_377_G2_GENERATOR_Y));
}

/// Affine G2 point
pub type G2Affine = Affine<G2Config>;
/// Jacobian G2 point
pub type G2Projective = Projective<G2Config>;

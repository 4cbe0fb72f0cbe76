//! G2 of MNT6-298: the quadratic twist `y^2 = x^3 + a u^2 x + b u^3` over `Fq3`

use dpairing_params::pairing::mnt6_298::*;

use super::fields::{fq3, Fq3, Fr};
use crate::ec::{Affine, Homogeneous, Projective, SwCurveConfig};

/// Curve parameters of G2
pub struct G2Config;

impl SwCurveConfig for G2Config {
    type BaseField = Fq3;
    type ScalarField = Fr;
    type Coordinates = Homogeneous;

    const COEFF_A: Fq3 = fq3(MNT6_298_G2_COEFF_A);
    const COEFF_B: Fq3 = fq3(MNT6_298_G2_COEFF_B);
    const GENERATOR: G2Affine =
        G2Affine::new_unchecked(fq3(MNT6_298_G2_GENERATOR_X), fq3(MNT6_298_G2_GENERATOR_Y));
}

/// Affine G2 point
pub type G2Affine = Affine<G2Config>;
/// Homogeneous G2 point
pub type G2Projective = Projective<G2Config>;

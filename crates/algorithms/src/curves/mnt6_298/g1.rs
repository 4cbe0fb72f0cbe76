//! G1 of MNT6-298: `y^2 = x^3 + 11x + b` over `Fq`, of prime order

use dpairing_params::pairing::mnt6_298::*;

use super::fields::{fq, Fq, Fr};
use crate::ec::{Affine, Homogeneous, Projective, SwCurveConfig};

/// Curve parameters of G1
pub struct G1Config;

impl SwCurveConfig for G1Config {
    type BaseField = Fq;
    type ScalarField = Fr;
    type Coordinates = Homogeneous;

    const COEFF_A: Fq = fq(MNT6_298_G1_COEFF_A);
    const COEFF_B: Fq = fq(MNT6_298_G1_COEFF_B);
    const GENERATOR: G1Affine =
        G1Affine::new_unchecked(fq(MNT6_298_G1_GENERATOR_X), fq(MNT6_298_G1_GENERATOR_Y));
}

/// Affine G1 point
pub type G1Affine = Affine<G1Config>;
/// Homogeneous G1 point
pub type G1Projective = Projective<G1Config>;

//! G2 of BW6-761: the M-type sextic twist `y^2 = x^3 + 4`, also over `Fq`

use dpairing_params::pairing::bw6_761::*;

use super::fields::{fq, Fq, Fr};
use crate::ec::{Affine, Homogeneous, Projective, SwCurveConfig};
use crate::field::Field;

/// Curve parameters of G2
pub struct G2Config;

impl SwCurveConfig for G2Config {
    type BaseField = Fq;
    type ScalarField = Fr;
    type Coordinates = Homogeneous;

    const COEFF_A: Fq = Fq::ZERO;
    const COEFF_B: Fq = fq(BW6_761_G2_COEFF_B);
    const GENERATOR: G2Affine =
        G2Affine::new_unchecked(fq(BW6_761_G2_GENERATOR_X), fq(BW6_761_G2_GENERATOR_Y));
}

/// Affine G2 point
pub type G2Affine = Affine<G2Config>;
/// Homogeneous G2 point
pub type G2Projective = Projective<G2Config>;

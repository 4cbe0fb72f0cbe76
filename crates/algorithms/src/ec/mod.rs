//! Short-Weierstrass elliptic curves `y^2 = x^3 + a x + b`
//!
//! Points are generic over a [`SwCurveConfig`]. The configuration also picks
//! the projective coordinate system: Jacobian coordinates for the degree-12
//! curves, homogeneous coordinates with complete formulas for BW6 and the
//! MNT curves, whose a is non-zero.

mod affine;
mod homogeneous;
mod jacobian;
mod projective;

pub use affine::Affine;
pub use homogeneous::Homogeneous;
pub use jacobian::Jacobian;
pub use projective::Projective;

use crate::field::{Field, PrimeField};

/// Parameters of a short-Weierstrass curve and its prime-order subgroup
pub trait SwCurveConfig: 'static + Send + Sync + Sized {
    /// Field of definition
    type BaseField: Field;
    /// Field of scalars, of order r
    type ScalarField: PrimeField;
    /// Projective representation used for arithmetic
    type Coordinates: CoordinateSystem;

    /// Coefficient a
    const COEFF_A: Self::BaseField;
    /// Coefficient b
    const COEFF_B: Self::BaseField;
    /// Generator of the prime-order subgroup
    const GENERATOR: Affine<Self>;

    /// Multiplies by a, short-circuiting the common a = 0
    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        if Self::COEFF_A.is_zero() {
            Self::BaseField::ZERO
        } else {
            Self::COEFF_A * elem
        }
    }

    /// Multiplies by 3b
    #[inline(always)]
    fn mul_by_3b(elem: &Self::BaseField) -> Self::BaseField {
        let t = Self::COEFF_B * elem;
        t.double() + t
    }
}

/// Common trait for coordinate systems used in elliptic curve operations
pub trait CoordinateSystem: 'static + Send + Sync + Sized {
    /// Returns `2P`
    fn double<C: SwCurveConfig>(p: &Projective<C>) -> Projective<C>;

    /// Returns `P + Q`
    fn add<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> Projective<C>;

    /// Returns `P + Q` for an affine `Q`
    fn add_mixed<C: SwCurveConfig>(p: &Projective<C>, q: &Affine<C>) -> Projective<C>;

    /// Affine coordinates of a non-identity point, given `1/Z`
    fn normalize<C: SwCurveConfig>(
        p: &Projective<C>,
        z_inv: &C::BaseField,
    ) -> (C::BaseField, C::BaseField);

    /// Equality of two non-identity points by cross multiplication
    fn eq<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> bool;

    /// The curve equation scaled to this coordinate system
    fn is_on_curve<C: SwCurveConfig>(p: &Projective<C>) -> bool;
}

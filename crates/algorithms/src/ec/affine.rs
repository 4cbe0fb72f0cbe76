//! Affine points

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use zeroize::Zeroize;

use super::{Projective, SwCurveConfig};
use crate::error::{validate, Result};
use crate::field::{Field, PrimeField, SqrtField};

/// A point in affine coordinates, or the point at infinity
pub struct Affine<C: SwCurveConfig> {
    /// x-coordinate
    pub x: C::BaseField,
    /// y-coordinate
    pub y: C::BaseField,
    /// Set for the point at infinity, whose coordinates are (0, 1)
    pub infinity: bool,
}

impl<C: SwCurveConfig> Clone for Affine<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: SwCurveConfig> Copy for Affine<C> {}

impl<C: SwCurveConfig> fmt::Debug for Affine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "Affine(infinity)")
        } else {
            write!(f, "Affine(x={:?}, y={:?})", self.x, self.y)
        }
    }
}

impl<C: SwCurveConfig> Default for Affine<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: SwCurveConfig> PartialEq for Affine<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<C: SwCurveConfig> Eq for Affine<C> {}

impl<C: SwCurveConfig> Zeroize for Affine<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.infinity = false;
    }
}

impl<C: SwCurveConfig> Affine<C> {
    /// Builds a point without checking the curve equation
    pub const fn new_unchecked(x: C::BaseField, y: C::BaseField) -> Self {
        Affine {
            x,
            y,
            infinity: false,
        }
    }

    /// Builds a point, rejecting coordinates off the curve
    pub fn new(x: C::BaseField, y: C::BaseField) -> Result<Self> {
        let p = Self::new_unchecked(x, y);
        validate::on_curve(p.is_on_curve(), "Affine::new")?;
        Ok(p)
    }

    /// Point at infinity
    pub const fn identity() -> Self {
        Affine {
            x: C::BaseField::ZERO,
            y: C::BaseField::ONE,
            infinity: true,
        }
    }

    /// Fixed generator of the prime-order subgroup
    pub const fn generator() -> Self {
        C::GENERATOR
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Curve membership check
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let rhs = self.x.square() * self.x + C::mul_by_a(&self.x) + C::COEFF_B;
        self.y.square() == rhs
    }

    /// Subgroup membership check, `[r]P == 0`
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.mul_bigint(<C::ScalarField as PrimeField>::MODULUS)
            .is_identity()
    }

    /// Multiplication by an integer given as little-endian limbs
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, by: S) -> Projective<C> {
        Projective::from(*self).mul_bigint(by)
    }

    /// Projective form of this point
    #[inline]
    pub fn into_projective(self) -> Projective<C> {
        Projective::from(self)
    }

    /// Random element of the prime-order subgroup
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Projective::<C>::random(rng).to_affine()
    }
}

impl<C: SwCurveConfig> Affine<C>
where
    C::BaseField: SqrtField,
{
    /// Recovers the point with abscissa `x` whose y-coordinate has the given
    /// sign bit, if `x^3 + a x + b` is a square.
    pub fn from_x_and_sign(x: C::BaseField, sign: bool) -> Option<Self> {
        let rhs = x.square() * x + C::mul_by_a(&x) + C::COEFF_B;
        let y = Option::<C::BaseField>::from(rhs.sqrt())?;
        let y = if y.sign_bit() == sign || y.is_zero() { y } else { -y };
        Some(Self::new_unchecked(x, y))
    }
}

impl<C: SwCurveConfig> From<Projective<C>> for Affine<C> {
    fn from(p: Projective<C>) -> Self {
        p.to_affine()
    }
}

impl<'a, C: SwCurveConfig> From<&'a Projective<C>> for Affine<C> {
    fn from(p: &'a Projective<C>) -> Self {
        p.to_affine()
    }
}

impl<C: SwCurveConfig> Neg for Affine<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.infinity {
            self
        } else {
            Self::new_unchecked(self.x, -self.y)
        }
    }
}

impl<'a, C: SwCurveConfig> Neg for &'a Affine<C> {
    type Output = Affine<C>;

    #[inline]
    fn neg(self) -> Affine<C> {
        -*self
    }
}

impl<C: SwCurveConfig> Add<Affine<C>> for Affine<C> {
    type Output = Projective<C>;

    fn add(self, rhs: Affine<C>) -> Projective<C> {
        Projective::from(self).add_mixed(&rhs)
    }
}

impl<C: SwCurveConfig> Sub<Affine<C>> for Affine<C> {
    type Output = Projective<C>;

    fn sub(self, rhs: Affine<C>) -> Projective<C> {
        Projective::from(self).add_mixed(&-rhs)
    }
}

impl<C: SwCurveConfig> Mul<C::ScalarField> for Affine<C> {
    type Output = Projective<C>;

    fn mul(self, rhs: C::ScalarField) -> Projective<C> {
        self.mul_bigint(rhs.into_bigint())
    }
}

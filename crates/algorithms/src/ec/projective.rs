//! Projective points, in the coordinate system chosen by the curve

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use alloc::vec::Vec;

use rand::RngCore;
use zeroize::Zeroize;

use super::{Affine, CoordinateSystem, SwCurveConfig};
use crate::error::{validate, Result};
use crate::field::{Field, PrimeField};

/// A point in projective coordinates; the identity has Z = 0
pub struct Projective<C: SwCurveConfig> {
    /// X coordinate
    pub x: C::BaseField,
    /// Y coordinate
    pub y: C::BaseField,
    /// Z coordinate
    pub z: C::BaseField,
}

impl<C: SwCurveConfig> Clone for Projective<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: SwCurveConfig> Copy for Projective<C> {}

impl<C: SwCurveConfig> fmt::Debug for Projective<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_affine())
    }
}

impl<C: SwCurveConfig> Default for Projective<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: SwCurveConfig> PartialEq for Projective<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => C::Coordinates::eq(self, other),
            _ => false,
        }
    }
}

impl<C: SwCurveConfig> Eq for Projective<C> {}

impl<C: SwCurveConfig> Zeroize for Projective<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.z.zeroize();
    }
}

impl<C: SwCurveConfig> From<Affine<C>> for Projective<C> {
    fn from(p: Affine<C>) -> Self {
        if p.infinity {
            Self::identity()
        } else {
            Self::new_unchecked(p.x, p.y, C::BaseField::ONE)
        }
    }
}

impl<'a, C: SwCurveConfig> From<&'a Affine<C>> for Projective<C> {
    fn from(p: &'a Affine<C>) -> Self {
        Self::from(*p)
    }
}

impl<C: SwCurveConfig> Projective<C> {
    /// Builds a point from raw coordinates without any check
    pub const fn new_unchecked(x: C::BaseField, y: C::BaseField, z: C::BaseField) -> Self {
        Projective { x, y, z }
    }

    /// Point at infinity, (0 : 1 : 0)
    pub const fn identity() -> Self {
        Projective {
            x: C::BaseField::ZERO,
            y: C::BaseField::ONE,
            z: C::BaseField::ZERO,
        }
    }

    /// Fixed generator of the prime-order subgroup
    pub fn generator() -> Self {
        Self::from(C::GENERATOR)
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// True if Z is one, or the point is the identity
    pub fn is_normalized(&self) -> bool {
        self.is_identity() || self.z.is_one()
    }

    /// Point doubling
    #[inline]
    pub fn double(&self) -> Self {
        C::Coordinates::double(self)
    }

    /// Point addition
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        C::Coordinates::add(self, rhs)
    }

    /// Mixed addition with affine point
    #[inline]
    pub fn add_mixed(&self, rhs: &Affine<C>) -> Self {
        C::Coordinates::add_mixed(self, rhs)
    }

    /// Affine form of this point
    pub fn to_affine(&self) -> Affine<C> {
        match Option::<C::BaseField>::from(self.z.invert()) {
            Some(z_inv) => {
                let (x, y) = C::Coordinates::normalize(self, &z_inv);
                Affine::new_unchecked(x, y)
            }
            None => Affine::identity(),
        }
    }

    /// Curve membership check in projective form
    pub fn is_well_formed(&self) -> bool {
        C::Coordinates::is_on_curve(self)
    }

    /// Subgroup membership check, `[r]P == 0`
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.mul_bigint(<C::ScalarField as PrimeField>::MODULUS)
            .is_identity()
    }

    /// Double-and-add multiplication by little-endian limbs
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, by: S) -> Self {
        let mut acc = Self::identity();
        for &limb in by.as_ref().iter().rev() {
            for i in (0..64).rev() {
                acc = acc.double();
                if (limb >> i) & 1 == 1 {
                    acc += self;
                }
            }
        }
        acc
    }

    /// Random element of the prime-order subgroup: the generator times a random scalar
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::generator() * C::ScalarField::random(rng)
    }

    /// Batch affine conversion with a single inversion.
    ///
    /// Running products of the Z coordinates are stored in the output's x
    /// slots on the way forward and unwound on the way back.
    pub fn batch_normalize(p: &[Self], q: &mut [Affine<C>]) -> Result<()> {
        validate::length("Projective::batch_normalize", q.len(), p.len())?;

        let mut acc = C::BaseField::ONE;
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            if !p.is_identity() {
                acc *= &p.z;
            }
        }

        // acc is a product of non-zero Z values
        acc = acc.inverse()?;

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            if p.is_identity() {
                *q = Affine::identity();
                continue;
            }
            let z_inv = q.x * acc;
            acc *= &p.z;
            let (x, y) = C::Coordinates::normalize(p, &z_inv);
            *q = Affine::new_unchecked(x, y);
        }
        Ok(())
    }

    /// Rewrites every point in place so that Z = 1 (identities are left as they are)
    pub fn normalize_batch(points: &mut [Self]) -> Result<()> {
        let mut affine: Vec<Affine<C>> = Vec::with_capacity(points.len());
        affine.resize(points.len(), Affine::identity());
        Self::batch_normalize(points, &mut affine)?;
        for (p, a) in points.iter_mut().zip(affine.iter()) {
            *p = Self::from(*a);
        }
        Ok(())
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<C: SwCurveConfig> Neg for Projective<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }
}

impl<'a, C: SwCurveConfig> Neg for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn neg(self) -> Projective<C> {
        -*self
    }
}

impl<'b, C: SwCurveConfig> AddAssign<&'b Projective<C>> for Projective<C> {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Projective<C>) {
        *self = Projective::add(self, rhs);
    }
}

impl<C: SwCurveConfig> AddAssign<Projective<C>> for Projective<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Projective<C>) {
        *self += &rhs;
    }
}

impl<'b, C: SwCurveConfig> AddAssign<&'b Affine<C>> for Projective<C> {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Affine<C>) {
        *self = self.add_mixed(rhs);
    }
}

impl<C: SwCurveConfig> AddAssign<Affine<C>> for Projective<C> {
    #[inline]
    fn add_assign(&mut self, rhs: Affine<C>) {
        *self = self.add_mixed(&rhs);
    }
}

impl<'b, C: SwCurveConfig> SubAssign<&'b Projective<C>> for Projective<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Projective<C>) {
        *self += &(-rhs);
    }
}

impl<C: SwCurveConfig> SubAssign<Projective<C>> for Projective<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Projective<C>) {
        *self += &(-rhs);
    }
}

impl<C: SwCurveConfig> Add<Projective<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Projective<C>) -> Self {
        self += &rhs;
        self
    }
}

impl<'b, C: SwCurveConfig> Add<&'b Projective<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &'b Projective<C>) -> Self {
        self += rhs;
        self
    }
}

impl<C: SwCurveConfig> Add<Affine<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Affine<C>) -> Self {
        self.add_mixed(&rhs)
    }
}

impl<C: SwCurveConfig> Sub<Projective<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Projective<C>) -> Self {
        self -= &rhs;
        self
    }
}

impl<'b, C: SwCurveConfig> Sub<&'b Projective<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &'b Projective<C>) -> Self {
        self -= rhs;
        self
    }
}

impl<C: SwCurveConfig> Sub<Affine<C>> for Projective<C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Affine<C>) -> Self {
        self.add_mixed(&-rhs)
    }
}

impl<C: SwCurveConfig> Mul<C::ScalarField> for Projective<C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: C::ScalarField) -> Self {
        self.mul_bigint(rhs.into_bigint())
    }
}

impl<C: SwCurveConfig> MulAssign<C::ScalarField> for Projective<C> {
    #[inline]
    fn mul_assign(&mut self, rhs: C::ScalarField) {
        *self = self.mul_bigint(rhs.into_bigint());
    }
}

impl<C: SwCurveConfig, T> Sum<T> for Projective<C>
where
    T: Borrow<Projective<C>>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

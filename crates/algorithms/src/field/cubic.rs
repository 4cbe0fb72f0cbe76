//! Cubic extensions `F[X]/(X^3 - β)` over an arbitrary base field.

use core::fmt;
use core::ops::{AddAssign, MulAssign, Neg, SubAssign};

use alloc::string::String;
use alloc::vec::Vec;

use dpairing_api::{Serialize, TextSerialize};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::arithmetic::{mul_limbs, shr_limbs, split_two_power};
use super::{CubicExtension, Field, LegendreSymbol, PrimeField, SqrtField};
use crate::encoding::text::expect_separator;
use crate::error::{validate, Result, ResultExt};

/// Parameters of a cubic extension
pub trait CubicExtConfig: 'static + Send + Sync + Sized {
    /// Prime field at the bottom of the tower
    type BasePrimeField: PrimeField;
    /// Field being extended
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    /// Type of the Frobenius coefficients
    type FrobCoeff: Field;

    /// Degree of the extension over `BasePrimeField`
    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    /// β, the cube of the generator X
    const NONRESIDUE: Self::BaseField;

    /// Frobenius coefficients of the X coordinate
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];
    /// Frobenius coefficients of the X^2 coordinate
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff];

    /// Multiplies a base field element by β
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::NONRESIDUE * fe
    }

    /// Multiplies `c1` and `c2` by the Frobenius coefficients for `power`
    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    );
}

/// An element `c0 + c1 X + c2 X^2` of a cubic extension
pub struct CubicExtField<P: CubicExtConfig> {
    /// Constant coordinate
    pub c0: P::BaseField,
    /// Coordinate of X
    pub c1: P::BaseField,
    /// Coordinate of X^2
    pub c2: P::BaseField,
}

impl<P: CubicExtConfig> CubicExtField<P> {
    /// Builds an element from its coordinates
    pub const fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        CubicExtField { c0, c1, c2 }
    }

    /// Multiplies every coordinate by a base field element
    pub fn mul_assign_by_base_field(&mut self, fe: &P::BaseField) {
        self.c0 *= fe;
        self.c1 *= fe;
        self.c2 *= fe;
    }

    /// Norm down to the base field, `c0^3 + β c1^3 + β^2 c2^3 - 3β c0 c1 c2`
    pub fn norm(&self) -> P::BaseField {
        let beta = P::NONRESIDUE;
        let c0_cube = self.c0.square() * self.c0;
        let c1_cube = self.c1.square() * self.c1;
        let c2_cube = self.c2.square() * self.c2;
        let cross = self.c0 * self.c1 * self.c2;
        let three_cross = cross.double() + cross;
        c0_cube + beta * (c1_cube + beta * c2_cube - three_cross)
    }
}

impl<P: CubicExtConfig> Clone for CubicExtField<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: CubicExtConfig> Copy for CubicExtField<P> {}

impl<P: CubicExtConfig> fmt::Debug for CubicExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl<P: CubicExtConfig> Default for CubicExtField<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: CubicExtConfig> ConstantTimeEq for CubicExtField<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<P: CubicExtConfig> PartialEq for CubicExtField<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<P: CubicExtConfig> Eq for CubicExtField<P> {}

impl<P: CubicExtConfig> ConditionallySelectable for CubicExtField<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::BaseField::conditional_select(&a.c0, &b.c0, choice),
            P::BaseField::conditional_select(&a.c1, &b.c1, choice),
            P::BaseField::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl<P: CubicExtConfig> Zeroize for CubicExtField<P> {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
        self.c2.zeroize();
    }
}

// ============================================================================
// Field Operations
// ============================================================================

impl<'a, P: CubicExtConfig> AddAssign<&'a CubicExtField<P>> for CubicExtField<P> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a CubicExtField<P>) {
        self.c0 += &rhs.c0;
        self.c1 += &rhs.c1;
        self.c2 += &rhs.c2;
    }
}

impl<'a, P: CubicExtConfig> SubAssign<&'a CubicExtField<P>> for CubicExtField<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a CubicExtField<P>) {
        self.c0 -= &rhs.c0;
        self.c1 -= &rhs.c1;
        self.c2 -= &rhs.c2;
    }
}

impl<'a, P: CubicExtConfig> MulAssign<&'a CubicExtField<P>> for CubicExtField<P> {
    /// Karatsuba: six base field multiplications
    fn mul_assign(&mut self, rhs: &'a CubicExtField<P>) {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        self.c0 = P::mul_base_field_by_nonresidue(&((a1 + a2) * (b1 + b2) - v1 - v2)) + v0;
        self.c1 = (a0 + a1) * (b0 + b1) - v0 - v1 + P::mul_base_field_by_nonresidue(&v2);
        self.c2 = (a0 + a2) * (b0 + b2) - v0 - v2 + v1;
    }
}

impl<P: CubicExtConfig> Neg for CubicExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl_field_ops!(impl[P: CubicExtConfig] CubicExtField<P>);

impl<P: CubicExtConfig> Field for CubicExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    const ZERO: Self = CubicExtField::new(P::BaseField::ZERO, P::BaseField::ZERO, P::BaseField::ZERO);
    const ONE: Self = CubicExtField::new(P::BaseField::ONE, P::BaseField::ZERO, P::BaseField::ZERO);
    const ENCODED_LEN: usize = 3 * P::BaseField::ENCODED_LEN;

    fn extension_degree() -> usize {
        P::DEGREE_OVER_BASE_PRIME_FIELD
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    /// Chung-Hasan SQR2
    fn square(&self) -> Self {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);

        let s0 = a0.square();
        let s1 = (a0 * a1).double();
        let s2 = (a0 - a1 + a2).square();
        let s3 = (a1 * a2).double();
        let s4 = a2.square();

        Self::new(
            s0 + P::mul_base_field_by_nonresidue(&s3),
            s1 + P::mul_base_field_by_nonresidue(&s4),
            s1 + s2 + s3 - s0 - s4,
        )
    }

    fn invert(&self) -> CtOption<Self> {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);

        let t0 = a0.square();
        let t1 = a1.square();
        let t2 = a2.square();
        let t3 = a0 * a1;
        let t4 = a0 * a2;
        let t5 = a1 * a2;

        let c0 = t0 - P::mul_base_field_by_nonresidue(&t5);
        let c1 = P::mul_base_field_by_nonresidue(&t2) - t3;
        let c2 = t1 - t4;

        // norm of self over the base field
        let t6 = a0 * c0 + P::mul_base_field_by_nonresidue(&(a2 * c1 + a1 * c2));
        t6.invert().map(|t| Self::new(c0 * t, c1 * t, c2 * t))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let mut c1 = self.c1.frobenius_map(power);
        let mut c2 = self.c2.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut c1, &mut c2, power);
        Self::new(c0, c1, c2)
    }

    #[inline]
    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
            self.c2.mul_by_base_prime_field(elem),
        )
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            P::BaseField::random(rng),
            P::BaseField::random(rng),
            P::BaseField::random(rng),
        )
    }

    fn sign_bit(&self) -> bool {
        if !self.c0.is_zero() {
            self.c0.sign_bit()
        } else if !self.c1.is_zero() {
            self.c1.sign_bit()
        } else {
            self.c2.sign_bit()
        }
    }
}

impl<P: CubicExtConfig> CubicExtension for CubicExtField<P> {
    type BaseField = P::BaseField;

    #[inline]
    fn from_coeffs(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        Self::new(c0, c1, c2)
    }

    #[inline]
    fn mul_base_field_by_nonresidue(fe: &P::BaseField) -> P::BaseField {
        P::mul_base_field_by_nonresidue(fe)
    }

    #[inline]
    fn mul_by_generator(&self) -> Self {
        Self::new(P::mul_base_field_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    #[inline]
    fn mul_by_base_field(&self, fe: &P::BaseField) -> Self {
        Self::new(self.c0 * fe, self.c1 * fe, self.c2 * fe)
    }

    fn mul_by_1(&self, c1: &P::BaseField) -> Self {
        Self::new(
            P::mul_base_field_by_nonresidue(&(self.c2 * c1)),
            self.c0 * c1,
            self.c1 * c1,
        )
    }

    fn mul_by_02(&self, c0: &P::BaseField, c2: &P::BaseField) -> Self {
        Self::new(
            self.c0 * c0 + P::mul_base_field_by_nonresidue(&(self.c1 * c2)),
            self.c1 * c0 + P::mul_base_field_by_nonresidue(&(self.c2 * c2)),
            self.c2 * c0 + self.c0 * c2,
        )
    }

    fn mul_by_12(&self, c1: &P::BaseField, c2: &P::BaseField) -> Self {
        Self::new(
            P::mul_base_field_by_nonresidue(&(self.c1 * c2 + self.c2 * c1)),
            self.c0 * c1 + P::mul_base_field_by_nonresidue(&(self.c2 * c2)),
            self.c0 * c2 + self.c1 * c1,
        )
    }

    #[inline]
    fn coeffs(&self) -> (P::BaseField, P::BaseField, P::BaseField) {
        (self.c0, self.c1, self.c2)
    }
}

// ============================================================================
// Square Roots
// ============================================================================

/// Square roots in a cubic extension of a prime field.
///
/// An element is a square exactly when its norm is, and the 2-adic part of
/// `p^3 - 1` matches that of `p - 1`, so Tonelli-Shanks runs over the
/// extension with exponents derived from the base modulus.
impl<P: CubicExtConfig> SqrtField for CubicExtField<P>
where
    P::BaseField: PrimeField,
{
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    fn sqrt(&self) -> CtOption<Self> {
        if self.is_zero() {
            return CtOption::new(Self::ZERO, Choice::from(1u8));
        }

        let modulus = P::BaseField::MODULUS;
        let mut order = mul_limbs(&mul_limbs(modulus.as_ref(), modulus.as_ref()), modulus.as_ref());
        // p^3 is odd
        order[0] -= 1;
        let (two_adicity, trace) = split_two_power(&order);
        let trace_minus_one_div_two = shr_limbs(&trace, 1);

        // a base field non-residue stays one in an odd-degree extension
        let mut n = 2u64;
        while P::BaseField::from_u64(n).legendre() != LegendreSymbol::QuadraticNonResidue {
            n += 1;
        }
        let non_residue = Self::new(P::BaseField::from_u64(n), P::BaseField::ZERO, P::BaseField::ZERO);

        let mut z = non_residue.pow(&trace);
        let mut w = self.pow(&trace_minus_one_div_two);
        let mut x = w * self;
        let mut b = x * w;
        let mut v = two_adicity;

        while !b.is_one() {
            let mut k = 0u32;
            let mut b2k = b;
            while !b2k.is_one() {
                b2k = b2k.square();
                k += 1;
                if k == v {
                    return CtOption::new(Self::ZERO, Choice::from(0u8));
                }
            }

            w = z;
            for _ in 1..(v - k) {
                w = w.square();
            }

            z = w.square();
            b *= &z;
            x *= &w;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

// ============================================================================
// Encoding
// ============================================================================

impl<P: CubicExtConfig> Serialize for CubicExtField<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "CubicExtField::from_bytes";
        validate::length(CTX, bytes.len(), Self::ENCODED_LEN)?;
        let len = P::BaseField::ENCODED_LEN;
        let c0 = P::BaseField::from_bytes(&bytes[..len]).with_context(CTX)?;
        let c1 = P::BaseField::from_bytes(&bytes[len..2 * len]).with_context(CTX)?;
        let c2 = P::BaseField::from_bytes(&bytes[2 * len..]).with_context(CTX)?;
        Ok(Self::new(c0, c1, c2))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c0.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out.extend_from_slice(&self.c2.to_bytes());
        out
    }
}

impl<P: CubicExtConfig> TextSerialize for CubicExtField<P> {
    fn write_text(&self, out: &mut String) {
        self.c0.write_text(out);
        out.push(' ');
        self.c1.write_text(out);
        out.push(' ');
        self.c2.write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "CubicExtField::read_text";
        let (c0, rest) = P::BaseField::read_text(input).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (c1, rest) = P::BaseField::read_text(rest).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (c2, rest) = P::BaseField::read_text(rest).with_context(CTX)?;
        Ok((Self::new(c0, c1, c2), rest))
    }
}

//! Quadratic extensions `F[X]/(X^2 - β)` over an arbitrary base field.

use core::fmt;
use core::ops::{AddAssign, MulAssign, Neg, SubAssign};

use alloc::string::String;
use alloc::vec::Vec;

use dpairing_api::{Serialize, TextSerialize};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::{
    CubicExtension, Field, LegendreSymbol, PrimeField, QuadraticTarget, SexticTarget, SqrtField,
    TargetField,
};
use crate::encoding::text::expect_separator;
use crate::error::{validate, Result, ResultExt};

/// Parameters of a quadratic extension
pub trait QuadExtConfig: 'static + Send + Sync + Sized {
    /// Prime field at the bottom of the tower
    type BasePrimeField: PrimeField;
    /// Field being extended
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    /// Type of the Frobenius coefficients
    type FrobCoeff: Field;

    /// Degree of the extension over `BasePrimeField`
    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    /// β, the square of the generator X
    const NONRESIDUE: Self::BaseField;

    /// Coefficients such that `frobenius(c1 X, k) = frobenius(c1, k) * C1[k] * X`
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    /// Multiplies a base field element by β
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        Self::NONRESIDUE * fe
    }

    /// Multiplies `fe` by the Frobenius coefficient for `power`
    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize);

    /// Squares an element of norm one.
    ///
    /// With `c0^2 = 1 + β c1^2` the square is `(1 + 2 β c1^2, 2 c0 c1)`;
    /// sextic towers override this with Granger-Scott.
    fn cyclotomic_square(fe: &QuadExtField<Self>) -> QuadExtField<Self> {
        let a = fe.c1.square();
        let b = (fe.c0 + fe.c1).square() - a;
        let c = Self::mul_base_field_by_nonresidue(&a);
        let one = Self::BaseField::ONE;
        QuadExtField::new(c.double() + one, b - c - one)
    }
}

/// An element `c0 + c1 X` of a quadratic extension
pub struct QuadExtField<P: QuadExtConfig> {
    /// Constant coordinate
    pub c0: P::BaseField,
    /// Coordinate of X
    pub c1: P::BaseField,
}

impl<P: QuadExtConfig> QuadExtField<P> {
    /// Builds an element from its coordinates
    pub const fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        QuadExtField { c0, c1 }
    }

    /// Conjugation `c0 - c1 X`, the non-trivial automorphism over the base field
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Norm over the base field, `c0^2 - β c1^2`
    pub fn norm(&self) -> P::BaseField {
        self.c0.square() - P::mul_base_field_by_nonresidue(&self.c1.square())
    }

    /// Multiplies both coordinates by a base field element
    pub fn mul_assign_by_base_field(&mut self, fe: &P::BaseField) {
        self.c0 *= fe;
        self.c1 *= fe;
    }
}

impl<P: QuadExtConfig> Clone for QuadExtField<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: QuadExtConfig> Copy for QuadExtField<P> {}

impl<P: QuadExtConfig> fmt::Debug for QuadExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl<P: QuadExtConfig> Default for QuadExtField<P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: QuadExtConfig> ConstantTimeEq for QuadExtField<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<P: QuadExtConfig> PartialEq for QuadExtField<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<P: QuadExtConfig> Eq for QuadExtField<P> {}

impl<P: QuadExtConfig> ConditionallySelectable for QuadExtField<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            P::BaseField::conditional_select(&a.c0, &b.c0, choice),
            P::BaseField::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl<P: QuadExtConfig> Zeroize for QuadExtField<P> {
    fn zeroize(&mut self) {
        self.c0.zeroize();
        self.c1.zeroize();
    }
}

// ============================================================================
// Field Operations
// ============================================================================

impl<'a, P: QuadExtConfig> AddAssign<&'a QuadExtField<P>> for QuadExtField<P> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a QuadExtField<P>) {
        self.c0 += &rhs.c0;
        self.c1 += &rhs.c1;
    }
}

impl<'a, P: QuadExtConfig> SubAssign<&'a QuadExtField<P>> for QuadExtField<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a QuadExtField<P>) {
        self.c0 -= &rhs.c0;
        self.c1 -= &rhs.c1;
    }
}

impl<'a, P: QuadExtConfig> MulAssign<&'a QuadExtField<P>> for QuadExtField<P> {
    /// Karatsuba: three base field multiplications
    #[inline]
    fn mul_assign(&mut self, rhs: &'a QuadExtField<P>) {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        self.c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        self.c0 = v0 + P::mul_base_field_by_nonresidue(&v1);
    }
}

impl<P: QuadExtConfig> Neg for QuadExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl_field_ops!(impl[P: QuadExtConfig] QuadExtField<P>);

impl<P: QuadExtConfig> Field for QuadExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    const ZERO: Self = QuadExtField::new(P::BaseField::ZERO, P::BaseField::ZERO);
    const ONE: Self = QuadExtField::new(P::BaseField::ONE, P::BaseField::ZERO);
    const ENCODED_LEN: usize = 2 * P::BaseField::ENCODED_LEN;

    fn extension_degree() -> usize {
        P::DEGREE_OVER_BASE_PRIME_FIELD
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// Complex squaring: two base field multiplications
    fn square(&self) -> Self {
        let v0 = self.c0 - self.c1;
        let v3 = self.c0 - P::mul_base_field_by_nonresidue(&self.c1);
        let v2 = self.c0 * self.c1;
        let v0 = v0 * v3 + v2;

        Self::new(v0 + P::mul_base_field_by_nonresidue(&v2), v2.double())
    }

    /// `(c0 - c1 X) / (c0^2 - β c1^2)`
    fn invert(&self) -> CtOption<Self> {
        let c0 = self.c0;
        let c1 = self.c1;
        self.norm().invert().map(|t| Self::new(c0 * t, -(c1 * t)))
    }

    fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let mut c1 = self.c1.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut c1, power);
        Self::new(c0, c1)
    }

    #[inline]
    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self {
        Self::new(
            self.c0.mul_by_base_prime_field(elem),
            self.c1.mul_by_base_prime_field(elem),
        )
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(P::BaseField::random(rng), P::BaseField::random(rng))
    }

    fn sign_bit(&self) -> bool {
        if self.c0.is_zero() {
            self.c1.sign_bit()
        } else {
            self.c0.sign_bit()
        }
    }
}

impl<P: QuadExtConfig> SqrtField for QuadExtField<P>
where
    P::BaseField: SqrtField,
{
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    /// Square root by the norm method
    fn sqrt(&self) -> CtOption<Self> {
        let none = || CtOption::new(Self::ZERO, Choice::from(0u8));

        if self.c1.is_zero() {
            // c0 lies in the base field: either it has a root there, or c0 / β does
            if let Some(root) = Option::<P::BaseField>::from(self.c0.sqrt()) {
                return CtOption::new(Self::new(root, P::BaseField::ZERO), Choice::from(1u8));
            }
            let beta_inv = match Option::<P::BaseField>::from(P::NONRESIDUE.invert()) {
                Some(b) => b,
                None => return none(),
            };
            return match Option::<P::BaseField>::from((self.c0 * beta_inv).sqrt()) {
                Some(root) => CtOption::new(Self::new(P::BaseField::ZERO, root), Choice::from(1u8)),
                None => none(),
            };
        }

        let alpha = match Option::<P::BaseField>::from(self.norm().sqrt()) {
            Some(a) => a,
            None => return none(),
        };
        let two_inv = P::BasePrimeField::TWO_INV;
        let mut delta = (alpha + self.c0).mul_by_base_prime_field(&two_inv);
        if delta.legendre() == LegendreSymbol::QuadraticNonResidue {
            delta -= &alpha;
        }

        let c0 = match Option::<P::BaseField>::from(delta.sqrt()) {
            Some(c) => c,
            None => return none(),
        };
        let c0_inv = match Option::<P::BaseField>::from(c0.invert()) {
            Some(c) => c,
            None => return none(),
        };
        let root = Self::new(c0, (self.c1 * c0_inv).mul_by_base_prime_field(&two_inv));
        CtOption::new(root, root.square().ct_eq(self))
    }
}

// ============================================================================
// Target Fields
// ============================================================================

impl<P: QuadExtConfig> TargetField for QuadExtField<P> {
    #[inline]
    fn unitary_inverse(&self) -> Self {
        self.conjugate()
    }

    #[inline]
    fn cyclotomic_square(&self) -> Self {
        P::cyclotomic_square(self)
    }
}

impl<P: QuadExtConfig> QuadraticTarget for QuadExtField<P> {
    type BaseField = P::BaseField;

    #[inline]
    fn mul_by_line(&mut self, c0: &P::BaseField, c1: &P::BaseField) {
        *self *= &Self::new(*c0, *c1);
    }
}

impl<P: QuadExtConfig> SexticTarget for QuadExtField<P>
where
    P::BaseField: CubicExtension,
{
    type LineField = <P::BaseField as CubicExtension>::BaseField;

    fn mul_by_024(&mut self, c0: &Self::LineField, c2: &Self::LineField, c4: &Self::LineField) {
        let a = self.c0.mul_by_02(c0, c2);
        let b = self.c1.mul_by_1(c4);
        let e = P::BaseField::from_coeffs(*c0, *c4, *c2);
        let s = (self.c0 + self.c1) * e;

        self.c1 = s - a - b;
        self.c0 = a + P::mul_base_field_by_nonresidue(&b);
    }

    fn mul_by_045(&mut self, c0: &Self::LineField, c4: &Self::LineField, c5: &Self::LineField) {
        let a = self.c0.mul_by_base_field(c0);
        let b = self.c1.mul_by_12(c4, c5);
        let e = P::BaseField::from_coeffs(*c0, *c4, *c5);
        let s = (self.c0 + self.c1) * e;

        self.c1 = s - a - b;
        self.c0 = a + P::mul_base_field_by_nonresidue(&b);
    }
}

/// Granger-Scott "Faster squaring in the cyclotomic subgroup of sixth
/// degree extensions", section 3.2.
pub(crate) fn granger_scott_square<P: QuadExtConfig>(fe: &QuadExtField<P>) -> QuadExtField<P>
where
    P::BaseField: CubicExtension,
{
    type Line<P> = <<P as QuadExtConfig>::BaseField as CubicExtension>::BaseField;

    let nr = <P::BaseField as CubicExtension>::mul_base_field_by_nonresidue;
    let (r0, r4, r3) = fe.c0.coeffs();
    let (r2, r1, r5) = fe.c1.coeffs();

    // (x + y w^3)^2 in the quartic subfield
    let sq2 = |x: Line<P>, y: Line<P>| {
        let t = x * y;
        let t0 = (x + y) * (nr(&y) + x) - t - nr(&t);
        (t0, t.double())
    };
    // 3t - 2z and 3t + 2z
    let minus = |t: Line<P>, z: Line<P>| (t - z).double() + t;
    let plus = |t: Line<P>, z: Line<P>| (t + z).double() + t;

    let (t0, t1) = sq2(r0, r1);
    let (t2, t3) = sq2(r2, r3);
    let (t4, t5) = sq2(r4, r5);

    let z0 = minus(t0, r0);
    let z1 = plus(t1, r1);
    let z2 = plus(nr(&t5), r2);
    let z3 = minus(t4, r3);
    let z4 = minus(t2, r4);
    let z5 = plus(t3, r5);

    QuadExtField::new(
        P::BaseField::from_coeffs(z0, z4, z3),
        P::BaseField::from_coeffs(z2, z1, z5),
    )
}

// ============================================================================
// Encoding
// ============================================================================

impl<P: QuadExtConfig> Serialize for QuadExtField<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("QuadExtField::from_bytes", bytes.len(), Self::ENCODED_LEN)?;
        let (lo, hi) = bytes.split_at(P::BaseField::ENCODED_LEN);
        let c0 = P::BaseField::from_bytes(lo).with_context("QuadExtField::from_bytes")?;
        let c1 = P::BaseField::from_bytes(hi).with_context("QuadExtField::from_bytes")?;
        Ok(Self::new(c0, c1))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.c0.to_bytes();
        out.extend_from_slice(&self.c1.to_bytes());
        out
    }
}

impl<P: QuadExtConfig> TextSerialize for QuadExtField<P> {
    fn write_text(&self, out: &mut String) {
        self.c0.write_text(out);
        out.push(' ');
        self.c1.write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "QuadExtField::read_text";
        let (c0, rest) = P::BaseField::read_text(input).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (c1, rest) = P::BaseField::read_text(rest).with_context(CTX)?;
        Ok((Self::new(c0, c1), rest))
    }
}

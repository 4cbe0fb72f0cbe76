//! Finite field arithmetic
//!
//! A single Montgomery prime field type, `Fp`, is instantiated per modulus.
//! Extension fields are built generically: `QuadExtField` and `CubicExtField`
//! take a configuration naming the base field, the non-residue and the
//! Frobenius tables, and the tower models in [`models`] stack them into the
//! degree 2, 3, 4, 6 and 12 fields used by the pairing curves.

#[macro_use]
mod macros;

pub mod arithmetic;
mod cubic;
mod fp;
pub mod models;
mod quadratic;

pub use cubic::{CubicExtConfig, CubicExtField};
pub use fp::{Fp, FpConfig};
pub use quadratic::{QuadExtConfig, QuadExtField};

use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use dpairing_api::{Serialize, TextSerialize};
use rand::RngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Operations shared by every field in the tower
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Default
    + Send
    + Sync
    + Eq
    + ConstantTimeEq
    + ConditionallySelectable
    + Zeroize
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Sum
    + Product
    + Serialize
    + TextSerialize
{
    /// The prime field at the bottom of the tower
    type BasePrimeField: PrimeField;

    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
    /// Length in bytes of the canonical big-endian encoding
    const ENCODED_LEN: usize;

    /// Degree of this field over `BasePrimeField`
    fn extension_degree() -> usize;

    /// Returns true if this element is zero
    fn is_zero(&self) -> bool;

    /// Returns true if this element is one
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Doubles this element
    fn double(&self) -> Self;

    /// Squares this element
    fn square(&self) -> Self;

    /// Computes the multiplicative inverse, if it exists
    fn invert(&self) -> CtOption<Self>;

    /// Computes the multiplicative inverse, failing with `DivisionByZero` on zero
    fn inverse(&self) -> Result<Self> {
        Option::<Self>::from(self.invert()).ok_or(Error::DivisionByZero {
            context: "Field::inverse",
        })
    }

    /// Raises this element to the `p^power`-th power using precomputed coefficients
    fn frobenius_map(&self, power: usize) -> Self;

    /// Multiplies every base prime field coordinate by `elem`
    fn mul_by_base_prime_field(&self, elem: &Self::BasePrimeField) -> Self;

    /// Samples a uniformly random element
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    /// Parity of the first non-zero base prime field coordinate in canonical form
    fn sign_bit(&self) -> bool;

    /// Exponentiation by a little-endian limb sequence.
    ///
    /// Plain square-and-multiply; the pairing code only uses it as a
    /// reference for the specialised chains.
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::ONE;
        for limb in exp.as_ref().iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if (*limb >> i) & 1 == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

/// Result of the quadratic character
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegendreSymbol {
    /// The element is zero
    Zero,
    /// The element is a non-zero square
    QuadraticResidue,
    /// The element is not a square
    QuadraticNonResidue,
}

/// Fields with a square root algorithm
pub trait SqrtField: Field {
    /// Quadratic character of this element
    fn legendre(&self) -> LegendreSymbol;

    /// Square root, if one exists. Which of the two roots is returned is unspecified.
    fn sqrt(&self) -> CtOption<Self>;

    /// Square root, failing with `NotASquare` on non-residues
    fn square_root(&self) -> Result<Self> {
        Option::<Self>::from(self.sqrt()).ok_or(Error::NotASquare {
            context: "SqrtField::square_root",
        })
    }
}

/// Prime fields `Z/pZ`
pub trait PrimeField: Field<BasePrimeField = Self> + SqrtField + Ord {
    /// Canonical integer representation, little-endian limbs
    type BigInt: Copy + Debug + Eq + AsRef<[u64]> + Send + Sync + 'static;

    /// The modulus p
    const MODULUS: Self::BigInt;
    /// (p - 1) / 2
    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt;
    /// Bit length of p
    const MODULUS_BIT_SIZE: u32;
    /// Multiplicative inverse of two
    const TWO_INV: Self;

    /// Converts a canonical integer, rejecting values that are not below the modulus
    fn from_bigint(repr: Self::BigInt) -> Option<Self>;

    /// Returns the canonical integer representation
    fn into_bigint(self) -> Self::BigInt;

    /// Embeds a small integer
    fn from_u64(value: u64) -> Self;
}

/// Access to the coordinates of a cubic extension.
///
/// The sparse products of a sextic tower (quadratic over cubic) work on
/// individual coordinates of the cubic layer; this trait exposes them.
pub trait CubicExtension: Field {
    /// Coordinate field of the cubic layer
    type BaseField: Field;

    /// Builds an element from its coordinates
    fn from_coeffs(c0: Self::BaseField, c1: Self::BaseField, c2: Self::BaseField) -> Self;

    /// Multiplies a coordinate by the cubic non-residue
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField;

    /// Multiplies by the generator X of the extension: `(β c2, c0, c1)`
    fn mul_by_generator(&self) -> Self;

    /// Multiplies every coordinate by `fe`
    fn mul_by_base_field(&self, fe: &Self::BaseField) -> Self;

    /// Multiplies by `(0, c1, 0)`
    fn mul_by_1(&self, c1: &Self::BaseField) -> Self;

    /// Multiplies by `(c0, 0, c2)`
    fn mul_by_02(&self, c0: &Self::BaseField, c2: &Self::BaseField) -> Self;

    /// Multiplies by `(0, c1, c2)`
    fn mul_by_12(&self, c1: &Self::BaseField, c2: &Self::BaseField) -> Self;

    /// Splits into `(c0, c1, c2)`
    fn coeffs(&self) -> (Self::BaseField, Self::BaseField, Self::BaseField);
}

/// Target field of a pairing, a quadratic extension whose cyclotomic
/// subgroup holds the pairing values.
pub trait TargetField: Field {
    /// Conjugation `c1 -> -c1`; the inverse of elements of norm one
    fn unitary_inverse(&self) -> Self;

    /// Squaring, valid on the cyclotomic subgroup
    fn cyclotomic_square(&self) -> Self;

    /// Exponentiation on the cyclotomic subgroup by a little-endian limb
    /// sequence, walking its non-adjacent form.
    fn cyclotomic_exp<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let naf = arithmetic::find_naf(exp.as_ref());
        let self_inverse = self.unitary_inverse();
        let mut res = Self::ONE;
        let mut found_nonzero = false;
        for &digit in naf.iter().rev() {
            if found_nonzero {
                res = res.cyclotomic_square();
            }
            if digit != 0 {
                found_nonzero = true;
                if digit > 0 {
                    res *= self;
                } else {
                    res *= &self_inverse;
                }
            }
        }
        res
    }
}

/// Target field of a sextic twist: a quadratic extension of a cubic
/// extension.
///
/// Coordinates are indexed `0..5` as
/// `(c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2)`.
pub trait SexticTarget: TargetField {
    /// Field of the twisted curve, holding line coefficients
    type LineField: Field;

    /// Multiplies by the sparse element `(c0, 0, c2, 0, c4, 0)`
    fn mul_by_024(&mut self, c0: &Self::LineField, c2: &Self::LineField, c4: &Self::LineField);

    /// Multiplies by the sparse element `(c0, 0, 0, 0, c4, c5)`
    fn mul_by_045(&mut self, c0: &Self::LineField, c4: &Self::LineField, c5: &Self::LineField);
}

/// Target field of a quadratic twist, a quadratic extension of the field
/// the twist is defined over
pub trait QuadraticTarget: TargetField {
    /// Field of the twisted curve
    type BaseField: Field;

    /// Multiplies by the line value `c0 + c1 Y`
    fn mul_by_line(&mut self, c0: &Self::BaseField, c1: &Self::BaseField);
}

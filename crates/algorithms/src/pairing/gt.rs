//! The target group

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::Product;
use core::ops::{Mul, MulAssign};

use dpairing_api::{Serialize, TextSerialize};

use super::PairingConfig;
use crate::error::{validate, Result, ResultExt};
use crate::field::{Field, PrimeField, TargetField};

/// An element of the order-r subgroup of `Fqk^*` reached by the pairing.
///
/// The group is written multiplicatively.
pub struct Gt<P: PairingConfig>(pub(crate) P::Fqk);

impl<P: PairingConfig> Clone for Gt<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PairingConfig> Copy for Gt<P> {}

impl<P: PairingConfig> fmt::Debug for Gt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gt({:?})", self.0)
    }
}

impl<P: PairingConfig> PartialEq for Gt<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: PairingConfig> Eq for Gt<P> {}

impl<P: PairingConfig> Default for Gt<P> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<P: PairingConfig> Gt<P> {
    /// The identity, `1`
    pub fn identity() -> Self {
        Gt(P::Fqk::ONE)
    }

    /// Returns true for the identity
    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    /// The underlying field element
    pub fn value(&self) -> &P::Fqk {
        &self.0
    }

    /// Exponentiation by little-endian limbs
    pub fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        Gt(self.0.cyclotomic_exp(exp))
    }

    /// Exponentiation by a scalar
    pub fn pow_scalar(&self, exp: &P::Fr) -> Self {
        self.pow(exp.into_bigint())
    }

    /// Inverse, by conjugation
    pub fn inverse(&self) -> Self {
        Gt(self.0.unitary_inverse())
    }

    /// Squaring
    pub fn square(&self) -> Self {
        Gt(self.0.cyclotomic_square())
    }

    /// `self^(p^power)`
    pub fn frobenius_map(&self, power: usize) -> Self {
        Gt(self.0.frobenius_map(power))
    }

    /// Wraps a field element, checking it has order dividing r
    pub fn from_field(value: P::Fqk) -> Result<Self> {
        validate::encoding(
            !value.is_zero() && value.pow(<P::Fr as PrimeField>::MODULUS).is_one(),
            "Gt::from_field",
            "element is not in the order-r subgroup",
        )?;
        Ok(Gt(value))
    }
}

impl<P: PairingConfig> Mul for Gt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gt(self.0 * rhs.0)
    }
}

impl<'a, P: PairingConfig> Mul<&'a Gt<P>> for Gt<P> {
    type Output = Self;

    fn mul(self, rhs: &'a Gt<P>) -> Self {
        Gt(self.0 * rhs.0)
    }
}

impl<P: PairingConfig> MulAssign for Gt<P> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl<'a, P: PairingConfig> MulAssign<&'a Gt<P>> for Gt<P> {
    fn mul_assign(&mut self, rhs: &'a Gt<P>) {
        self.0 *= rhs.0;
    }
}

impl<P: PairingConfig> Product for Gt<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, x| acc * x)
    }
}

impl<P: PairingConfig> Serialize for Gt<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value = P::Fqk::from_bytes(bytes).with_context("Gt::from_bytes")?;
        Self::from_field(value).with_context("Gt::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }
}

impl<P: PairingConfig> TextSerialize for Gt<P> {
    fn write_text(&self, out: &mut String) {
        self.0.write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        let (value, rest) = P::Fqk::read_text(input).with_context("Gt::read_text")?;
        Ok((Self::from_field(value).with_context("Gt::read_text")?, rest))
    }
}

/// The easy part of the final exponentiation: `f^((p^(k/2) - 1)(p^(k/6) + 1))`
/// when 6 divides k, `f^(p^(k/2) - 1)` for k = 4. The result lies in the
/// cyclotomic subgroup.
pub(crate) fn final_exponentiation_easy<P: PairingConfig>(f: &P::Fqk) -> Result<P::Fqk> {
    let f_inv = f.inverse().map_err(|e| {
        log::debug!("{}: final exponentiation of zero", P::NAME);
        e.with_context("final_exponentiation")
    })?;
    let k = P::EMBEDDING_DEGREE;
    let c = f.frobenius_map(k / 2) * f_inv;
    if k % 6 == 0 {
        Ok(c.frobenius_map(k / 6) * c)
    } else {
        Ok(c)
    }
}

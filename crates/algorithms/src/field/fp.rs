//! Prime field arithmetic in Montgomery form, generic over the modulus.
//!
//! An element is stored as `a * R mod p` with `R = 2^(64 N)`. Everything a
//! modulus implies (`R`, `R^2`, the Montgomery inverse, the 2-adic
//! decomposition of `p - 1`) is derived at compile time from
//! [`FpConfig::MODULUS`].

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{AddAssign, MulAssign, Neg, SubAssign};

use alloc::string::String;
use alloc::vec::Vec;

use dpairing_api::{Serialize, TextSerialize};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use super::arithmetic::{
    add_one, add_with_carry, lt, montgomery_inv, montgomery_mul, num_bits, reduce_once, sbb, shr,
    sub_one, sub_with_borrow, two_adicity, two_pow_mod,
};
use super::{Field, LegendreSymbol, PrimeField, SqrtField};
use crate::error::{validate, Error, Result, ResultExt};

/// Modulus description for a prime field with `N` limbs.
///
/// Implementors provide the modulus and a quadratic non-residue; the
/// Montgomery constants have defaults computed from them.
pub trait FpConfig<const N: usize>: 'static + Send + Sync + Sized {
    /// The modulus p, canonical little-endian limbs
    const MODULUS: [u64; N];

    /// A quadratic non-residue mod p, canonical
    const NONRESIDUE: [u64; N];

    /// -p^{-1} mod 2^64
    const INV: u64 = montgomery_inv(Self::MODULUS[0]);

    /// R = 2^(64 N) mod p
    const R: [u64; N] = two_pow_mod(&Self::MODULUS, 64 * (N as u32));

    /// R^2 mod p
    const R2: [u64; N] = two_pow_mod(&Self::MODULUS, 128 * (N as u32));

    /// R^3 mod p
    const R3: [u64; N] = two_pow_mod(&Self::MODULUS, 192 * (N as u32));

    /// Bit length of p
    const MODULUS_BITS: u32 = num_bits(&Self::MODULUS);

    /// Largest s with 2^s | p - 1
    const TWO_ADICITY: u32 = two_adicity(&Self::MODULUS);

    /// Odd part t of p - 1 = 2^s * t
    const TRACE: [u64; N] = shr(&sub_one(&Self::MODULUS), Self::TWO_ADICITY);

    /// (t - 1) / 2
    const TRACE_MINUS_ONE_DIV_TWO: [u64; N] = shr(&Self::TRACE, 1);

    /// (p - 1) / 2
    const MODULUS_MINUS_ONE_DIV_TWO: [u64; N] = shr(&Self::MODULUS, 1);

    /// p - 2, the Fermat inversion exponent
    const MODULUS_MINUS_TWO: [u64; N] = sub_one(&sub_one(&Self::MODULUS));
}

/// An element of the prime field described by `P`, in Montgomery form.
pub struct Fp<P: FpConfig<N>, const N: usize>(pub(crate) [u64; N], PhantomData<P>);

impl<P: FpConfig<N>, const N: usize> Clone for Fp<P, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FpConfig<N>, const N: usize> Copy for Fp<P, N> {}

impl<P: FpConfig<N>, const N: usize> fmt::Debug for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<P: FpConfig<N>, const N: usize> fmt::Display for Fp<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<P: FpConfig<N>, const N: usize> Default for Fp<P, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FpConfig<N>, const N: usize> ConstantTimeEq for Fp<P, N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = Choice::from(1u8);
        for i in 0..N {
            acc &= self.0[i].ct_eq(&other.0[i]);
        }
        acc
    }
}

impl<P: FpConfig<N>, const N: usize> PartialEq for Fp<P, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<P: FpConfig<N>, const N: usize> Eq for Fp<P, N> {}

impl<P: FpConfig<N>, const N: usize> PartialOrd for Fp<P, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpConfig<N>, const N: usize> Ord for Fp<P, N> {
    /// Orders by canonical value
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.to_canonical();
        let b = other.to_canonical();
        a.iter().rev().cmp(b.iter().rev())
    }
}

impl<P: FpConfig<N>, const N: usize> ConditionallySelectable for Fp<P, N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; N];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(limbs, PhantomData)
    }
}

impl<P: FpConfig<N>, const N: usize> Zeroize for Fp<P, N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// ============================================================================
// Construction and Conversion
// ============================================================================

impl<P: FpConfig<N>, const N: usize> Fp<P, N> {
    /// Converts canonical limbs into Montgomery form.
    ///
    /// The input must be below the modulus; this is what parameter tables
    /// use to build typed constants at compile time.
    pub const fn from_canonical(limbs: [u64; N]) -> Self {
        Fp(
            montgomery_mul(&limbs, &P::R2, &P::MODULUS, P::INV),
            PhantomData,
        )
    }

    /// Returns the canonical value as little-endian limbs
    pub const fn to_canonical(&self) -> [u64; N] {
        let mut one = [0u64; N];
        one[0] = 1;
        montgomery_mul(&self.0, &one, &P::MODULUS, P::INV)
    }

    /// Exponentiation by a little-endian limb sequence, without the
    /// constant-time guarantees of the caller's choice of exponent.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::ONE;
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Reduces `lo + hi * 2^(64 N)` modulo p
    fn from_wide(lo: &[u64; N], hi: &[u64; N]) -> Self {
        let lo = Fp::<P, N>(montgomery_mul(lo, &P::R2, &P::MODULUS, P::INV), PhantomData);
        let hi = Fp::<P, N>(montgomery_mul(hi, &P::R3, &P::MODULUS, P::INV), PhantomData);
        lo + hi
    }
}

// ============================================================================
// Field Operations
// ============================================================================

impl<'a, P: FpConfig<N>, const N: usize> AddAssign<&'a Fp<P, N>> for Fp<P, N> {
    #[inline]
    fn add_assign(&mut self, rhs: &'a Fp<P, N>) {
        let (sum, carry) = add_with_carry(&self.0, &rhs.0);
        self.0 = reduce_once(&sum, carry, &P::MODULUS);
    }
}

impl<'a, P: FpConfig<N>, const N: usize> SubAssign<&'a Fp<P, N>> for Fp<P, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a Fp<P, N>) {
        let (diff, borrow) = sub_with_borrow(&self.0, &rhs.0);

        // If underflow occurred, add the modulus back; borrow is 0 or all ones
        let mut mask = [0u64; N];
        for (i, m) in mask.iter_mut().enumerate() {
            *m = P::MODULUS[i] & borrow;
        }
        self.0 = add_with_carry(&diff, &mask).0;
    }
}

impl<'a, P: FpConfig<N>, const N: usize> MulAssign<&'a Fp<P, N>> for Fp<P, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a Fp<P, N>) {
        self.0 = montgomery_mul(&self.0, &rhs.0, &P::MODULUS, P::INV);
    }
}

impl<P: FpConfig<N>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        // p - self, masked to zero when self is zero
        let mut out = [0u64; N];
        let mut borrow = 0;
        let mut nonzero = 0u64;
        for i in 0..N {
            let (d, b) = sbb(P::MODULUS[i], self.0[i], borrow);
            out[i] = d;
            borrow = b;
            nonzero |= self.0[i];
        }
        let mask = ((nonzero | nonzero.wrapping_neg()) >> 63).wrapping_neg();
        for limb in out.iter_mut() {
            *limb &= mask;
        }
        Fp(out, PhantomData)
    }
}

impl_field_ops!(impl[P: FpConfig<N>, const N: usize] Fp<P, N>);

impl<P: FpConfig<N>, const N: usize> Field for Fp<P, N> {
    type BasePrimeField = Self;

    const ZERO: Self = Fp([0u64; N], PhantomData);
    const ONE: Self = Fp(P::R, PhantomData);
    const ENCODED_LEN: usize = 8 * N;

    fn extension_degree() -> usize {
        1
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.iter().all(|limb| *limb == 0)
    }

    #[inline]
    fn double(&self) -> Self {
        *self + self
    }

    #[inline]
    fn square(&self) -> Self {
        Fp(
            montgomery_mul(&self.0, &self.0, &P::MODULUS, P::INV),
            PhantomData,
        )
    }

    /// Inversion by Fermat's little theorem, `self^(p - 2)`
    fn invert(&self) -> CtOption<Self> {
        let t = self.pow_vartime(&P::MODULUS_MINUS_TWO);
        CtOption::new(t, !self.ct_eq(&Self::ZERO))
    }

    #[inline]
    fn frobenius_map(&self, _power: usize) -> Self {
        *self
    }

    #[inline]
    fn mul_by_base_prime_field(&self, elem: &Self) -> Self {
        *self * elem
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut lo = [0u64; N];
        let mut hi = [0u64; N];
        for limb in lo.iter_mut().chain(hi.iter_mut()) {
            *limb = rng.next_u64();
        }
        Self::from_wide(&lo, &hi)
    }

    #[inline]
    fn sign_bit(&self) -> bool {
        self.to_canonical()[0] & 1 == 1
    }
}

impl<P: FpConfig<N>, const N: usize> SqrtField for Fp<P, N> {
    fn legendre(&self) -> LegendreSymbol {
        let s = self.pow_vartime(&P::MODULUS_MINUS_ONE_DIV_TWO);
        if s.is_zero() {
            LegendreSymbol::Zero
        } else if s.is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    /// Tonelli-Shanks with the configured non-residue
    fn sqrt(&self) -> CtOption<Self> {
        if self.is_zero() {
            return CtOption::new(Self::ZERO, Choice::from(1u8));
        }

        let mut z = Self::from_canonical(P::NONRESIDUE).pow_vartime(&P::TRACE);
        let mut w = self.pow_vartime(&P::TRACE_MINUS_ONE_DIV_TWO);
        let mut x = w * self;
        let mut b = x * w;
        let mut v = P::TWO_ADICITY;

        while !b.is_one() {
            let mut k = 0u32;
            let mut b2k = b;
            while !b2k.is_one() {
                b2k = b2k.square();
                k += 1;
                if k == v {
                    // b has order 2^v: self is a non-residue
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

impl<P: FpConfig<N>, const N: usize> PrimeField for Fp<P, N> {
    type BigInt = [u64; N];

    const MODULUS: [u64; N] = P::MODULUS;
    const MODULUS_MINUS_ONE_DIV_TWO: [u64; N] = P::MODULUS_MINUS_ONE_DIV_TWO;
    const MODULUS_BIT_SIZE: u32 = P::MODULUS_BITS;
    const TWO_INV: Self = Self::from_canonical(add_one(&P::MODULUS_MINUS_ONE_DIV_TWO));

    fn from_bigint(repr: [u64; N]) -> Option<Self> {
        if lt(&repr, &P::MODULUS) {
            Some(Self::from_canonical(repr))
        } else {
            None
        }
    }

    #[inline]
    fn into_bigint(self) -> [u64; N] {
        self.to_canonical()
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;
        Self::from_canonical(limbs)
    }
}

// ============================================================================
// Encoding
// ============================================================================

impl<P: FpConfig<N>, const N: usize> Serialize for Fp<P, N> {
    /// Reads the canonical big-endian encoding, rejecting values >= p
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("Fp::from_bytes", bytes.len(), 8 * N)?;

        let mut limbs = [0u64; N];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[N - 1 - i] = u64::from_be_bytes(word);
        }

        Self::from_bigint(limbs).ok_or_else(|| {
            log::debug!("Fp::from_bytes: rejected non-canonical value");
            Error::malformed("Fp::from_bytes", "value is not below the modulus")
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let limbs = self.to_canonical();
        let mut out = Vec::with_capacity(8 * N);
        for limb in limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        out
    }
}

impl<P: FpConfig<N>, const N: usize> TextSerialize for Fp<P, N> {
    fn write_text(&self, out: &mut String) {
        out.push_str(&hex::encode(self.to_bytes()));
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "Fp::read_text";
        let width = 16 * N;

        let digits = match input.get(..width) {
            Some(d) => d,
            None => return Err(Error::malformed(CTX, "truncated field element")),
        };
        validate::encoding(
            digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
            CTX,
            "expected lowercase hexadecimal digits",
        )?;

        let rest = &input[width..];
        validate::encoding(
            !rest.starts_with(|c: char| c.is_ascii_hexdigit()),
            CTX,
            "field element is wider than expected",
        )?;

        let bytes = hex::decode(digits).map_err(|_| Error::malformed(CTX, "invalid hexadecimal"))?;
        let value = Self::from_bytes(&bytes).with_context(CTX)?;
        Ok((value, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpairing_params::pairing::bn254::{BN254_FQ_MODULUS, BN254_FQ_NONRESIDUE};
    use rand_chacha::ChaCha20Rng;
    use rand::SeedableRng;

    struct TestConfig;

    impl FpConfig<4> for TestConfig {
        const MODULUS: [u64; 4] = BN254_FQ_MODULUS;
        const NONRESIDUE: [u64; 4] = BN254_FQ_NONRESIDUE;
    }

    type F = Fp<TestConfig, 4>;

    #[test]
    fn test_constants() {
        assert_eq!(F::ONE.to_canonical(), [1, 0, 0, 0]);
        assert_eq!(F::from_u64(1), F::ONE);
        assert_eq!(TestConfig::MODULUS_BITS, 254);
        assert_eq!(TestConfig::TWO_ADICITY, 1);
        assert_eq!(F::TWO_INV.double(), F::ONE);
        // canonical limbs in and out of Montgomery form
        assert_eq!(F::from_u64(42).into_bigint(), [42, 0, 0, 0]);
        assert_eq!(F::from_bigint([42, 0, 0, 0]), Some(F::from_u64(42)));
        assert_eq!(F::from_bigint(TestConfig::MODULUS), None);
    }

    #[test]
    fn test_arithmetic() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..32 {
            let a = F::random(&mut rng);
            let b = F::random(&mut rng);
            assert_eq!(a + b - b, a);
            assert_eq!(a - a, F::ZERO);
            assert_eq!(a + (-a), F::ZERO);
            assert_eq!(a * (b + F::ONE), a * b + a);
            assert_eq!(a.square(), a * a);
            assert_eq!(a.double(), a + a);
        }
        assert_eq!(-F::ZERO, F::ZERO);
        assert_eq!(F::from_u64(6) * F::from_u64(7), F::from_u64(42));
    }

    #[test]
    fn test_inversion() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..8 {
            let a = F::random(&mut rng);
            assert_eq!(a * a.invert().unwrap(), F::ONE);
        }
        assert!(bool::from(F::ZERO.invert().is_none()));
        assert_eq!(
            F::ZERO.inverse(),
            Err(Error::DivisionByZero {
                context: "Field::inverse"
            })
        );
    }

    #[test]
    fn test_sqrt() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        for _ in 0..16 {
            let a = F::random(&mut rng);
            let sq = a.square();
            let root = sq.sqrt().unwrap();
            assert!(root == a || root == -a);
            assert_eq!(sq.legendre(), LegendreSymbol::QuadraticResidue);
        }
        let qnr = F::from_canonical(BN254_FQ_NONRESIDUE);
        assert_eq!(qnr.legendre(), LegendreSymbol::QuadraticNonResidue);
        assert!(bool::from(qnr.sqrt().is_none()));
        assert!(matches!(qnr.square_root(), Err(Error::NotASquare { .. })));
        assert_eq!(F::ZERO.sqrt().unwrap(), F::ZERO);
    }

    #[test]
    fn test_pow_matches_fermat() {
        let a = F::from_u64(5);
        assert_eq!(a.pow(TestConfig::MODULUS), a);
        assert_eq!(a.pow_vartime(&TestConfig::MODULUS_MINUS_TWO) * a, F::ONE);
    }

    #[test]
    fn test_bytes() {
        let a = F::from_u64(0x0102);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
        assert_eq!(F::from_bytes(&bytes).unwrap(), a);

        let mut modulus = Vec::new();
        for limb in BN254_FQ_MODULUS.iter().rev() {
            modulus.extend_from_slice(&limb.to_be_bytes());
        }
        assert!(matches!(
            F::from_bytes(&modulus),
            Err(Error::MalformedEncoding { .. })
        ));
        assert!(matches!(
            F::from_bytes(&bytes[1..]),
            Err(Error::InvalidLength {
                expected: 32,
                actual: 31,
                ..
            })
        ));
    }

    #[test]
    fn test_text() {
        let a = F::from_u64(0xabc);
        let text = a.to_text();
        assert_eq!(text.len(), 64);
        assert!(text.ends_with("0abc"));
        assert_eq!(F::from_text(&text).unwrap(), a);

        assert!(F::from_text(&text[1..]).is_err());
        assert!(F::from_text(&text.to_uppercase()).is_err());
        let mut wide = text.clone();
        wide.push('0');
        assert!(F::from_text(&wide).is_err());
        let mut trailing = text;
        trailing.push(' ');
        assert!(F::from_text(&trailing).is_err());
    }

    #[test]
    fn test_sign_and_order() {
        let two = F::from_u64(2);
        assert!(!two.sign_bit());
        assert!((-two).sign_bit());
        assert!(F::from_u64(3) > two);
        let mut z = two;
        z.zeroize();
        assert_eq!(z, F::ZERO);
    }
}

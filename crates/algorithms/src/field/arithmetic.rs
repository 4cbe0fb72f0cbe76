//! Multi-limb integer helpers shared by every prime field.
//!
//! All routines operate on little-endian `[u64; N]` values and are `const fn`
//! so that Montgomery constants can be derived from a modulus at compile time.

use alloc::vec;
use alloc::vec::Vec;

// ============================================================================
// Word Helpers
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Multi-limb Helpers
// ============================================================================

/// `a + b`, returning the sum and the outgoing carry
#[inline]
pub const fn add_with_carry<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], u64) {
    let mut out = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (d, c) = adc(a[i], b[i], carry);
        out[i] = d;
        carry = c;
        i += 1;
    }
    (out, carry)
}

/// `a - b`, returning the difference and the outgoing borrow mask
#[inline]
pub const fn sub_with_borrow<const N: usize>(a: &[u64; N], b: &[u64; N]) -> ([u64; N], u64) {
    let mut out = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (d, br) = sbb(a[i], b[i], borrow);
        out[i] = d;
        borrow = br;
        i += 1;
    }
    (out, borrow)
}

/// `a < b`
#[inline]
pub const fn lt<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

/// `a == 0`
#[inline]
pub const fn is_zero<const N: usize>(a: &[u64; N]) -> bool {
    let mut i = 0;
    while i < N {
        if a[i] != 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Number of significant bits
pub const fn num_bits<const N: usize>(a: &[u64; N]) -> u32 {
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != 0 {
            return (i as u32) * 64 + (64 - a[i].leading_zeros());
        }
    }
    0
}

/// Bit `i` of `a`
#[inline]
pub const fn get_bit(a: &[u64], i: usize) -> bool {
    let limb = i / 64;
    limb < a.len() && (a[limb] >> (i % 64)) & 1 == 1
}

/// Logical right shift by `s` bits
pub const fn shr<const N: usize>(a: &[u64; N], s: u32) -> [u64; N] {
    let limbs = (s / 64) as usize;
    let bits = s % 64;
    let mut out = [0u64; N];
    let mut i = 0;
    while i + limbs < N {
        let mut v = a[i + limbs] >> bits;
        if bits > 0 && i + limbs + 1 < N {
            v |= a[i + limbs + 1] << (64 - bits);
        }
        out[i] = v;
        i += 1;
    }
    out
}

/// `a - 1` for non-zero `a`
pub const fn sub_one<const N: usize>(a: &[u64; N]) -> [u64; N] {
    let mut one = [0u64; N];
    one[0] = 1;
    sub_with_borrow(a, &one).0
}

/// `a + 1`, wrapping
pub const fn add_one<const N: usize>(a: &[u64; N]) -> [u64; N] {
    let mut one = [0u64; N];
    one[0] = 1;
    add_with_carry(a, &one).0
}

/// Largest `s` such that `2^s` divides `a - 1`
pub const fn two_adicity<const N: usize>(modulus: &[u64; N]) -> u32 {
    let m = sub_one(modulus);
    let mut s = 0;
    let mut i = 0;
    while i < N {
        if m[i] == 0 {
            s += 64;
        } else {
            s += m[i].trailing_zeros();
            return s;
        }
        i += 1;
    }
    s
}

/// Non-adjacent form of a little-endian limb sequence, least significant digit first
pub fn find_naf(num: &[u64]) -> Vec<i8> {
    let mut num = num.to_vec();
    // room for the carry produced by a trailing -1 digit
    num.push(0);
    let is_zero = |num: &[u64]| num.iter().all(|x| *x == 0u64);
    let div2 = |num: &mut [u64]| {
        let mut t = 0;
        for limb in num.iter_mut().rev() {
            let t2 = *limb << 63;
            *limb >>= 1;
            *limb |= t;
            t = t2;
        }
    };

    let mut res = Vec::new();
    while !is_zero(&num) {
        let z: i8;
        if num[0] & 1 == 1 {
            z = 2 - (num[0] % 4) as i8;
            if z >= 0 {
                sub_small(&mut num, z as u64);
            } else {
                add_small(&mut num, (-z) as u64);
            }
        } else {
            z = 0;
        }
        res.push(z);
        div2(&mut num);
    }
    res
}

fn add_small(num: &mut [u64], v: u64) {
    let mut carry = v;
    for limb in num.iter_mut() {
        let (d, c) = adc(*limb, carry, 0);
        *limb = d;
        carry = c;
        if carry == 0 {
            break;
        }
    }
}

fn sub_small(num: &mut [u64], v: u64) {
    let mut borrow = v;
    for limb in num.iter_mut() {
        let (d, b) = limb.overflowing_sub(borrow);
        *limb = d;
        borrow = b as u64;
        if borrow == 0 {
            break;
        }
    }
}

/// Schoolbook product of two little-endian limb sequences
pub fn mul_limbs(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut out = vec![0u64; a.len() + b.len()];
    for (i, x) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, y) in b.iter().enumerate() {
            let (d, c) = mac(out[i + j], *x, *y, carry);
            out[i + j] = d;
            carry = c;
        }
        out[i + b.len()] = carry;
    }
    out
}

/// Splits a non-zero `a` into `(s, t)` with `a = 2^s * t` and `t` odd
pub fn split_two_power(a: &[u64]) -> (u32, Vec<u64>) {
    let mut s = 0u32;
    for limb in a {
        if *limb == 0 {
            s += 64;
        } else {
            s += limb.trailing_zeros();
            break;
        }
    }
    (s, shr_limbs(a, s))
}

/// Logical right shift of a limb sequence by `s` bits
pub fn shr_limbs(a: &[u64], s: u32) -> Vec<u64> {
    let limbs = (s / 64) as usize;
    let bits = s % 64;
    (0..a.len())
        .map(|i| {
            let hi = a.get(i + limbs).copied().unwrap_or(0);
            let next = a.get(i + limbs + 1).copied().unwrap_or(0);
            if bits == 0 {
                hi
            } else {
                (hi >> bits) | (next << (64 - bits))
            }
        })
        .collect()
}

// ============================================================================
// Montgomery Helpers
// ============================================================================

/// `-(m^{-1}) mod 2^64` for odd `m0`
pub const fn montgomery_inv(m0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m0);
        i += 1;
    }
    inv.wrapping_neg()
}

/// `2^k mod modulus` by repeated modular doubling
pub const fn two_pow_mod<const N: usize>(modulus: &[u64; N], k: u32) -> [u64; N] {
    let mut r = [0u64; N];
    r[0] = 1;
    let mut i = 0;
    while i < k {
        let (d, carry) = add_with_carry(&r, &r);
        r = if carry != 0 || !lt(&d, modulus) {
            sub_with_borrow(&d, modulus).0
        } else {
            d
        };
        i += 1;
    }
    r
}

/// Subtract `modulus` once if `a >= modulus` (given `a < 2 * modulus`)
#[inline]
pub const fn reduce_once<const N: usize>(a: &[u64; N], carry: u64, modulus: &[u64; N]) -> [u64; N] {
    if carry != 0 || !lt(a, modulus) {
        sub_with_borrow(a, modulus).0
    } else {
        *a
    }
}

/// Coarsely integrated operand scanning Montgomery product `a * b * R^{-1} mod m`
pub const fn montgomery_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut hi = 0u64;
    let mut i = 0;
    while i < N {
        // t += a * b[i]
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (d, c) = mac(t[j], a[j], b[i], carry);
            t[j] = d;
            carry = c;
            j += 1;
        }
        let (hi0, hi1) = adc(hi, carry, 0);

        // t = (t + k * m) / 2^64
        let k = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], k, modulus[0], 0);
        let mut j = 1;
        while j < N {
            let (d, c) = mac(t[j], k, modulus[j], carry);
            t[j - 1] = d;
            carry = c;
            j += 1;
        }
        let (d, c) = adc(hi0, carry, 0);
        t[N - 1] = d;
        hi = hi1 + c;
        i += 1;
    }
    reduce_once(&t, hi, modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: [u64; 2] = [0xffff_ffff_ffff_ffc5, 0x0fff_ffff_ffff_ffff];

    #[test]
    fn shifts_and_bits() {
        let a = [0x8000_0000_0000_0001u64, 0x3];
        assert_eq!(shr(&a, 1), [0xc000_0000_0000_0000, 0x1]);
        assert_eq!(shr(&a, 64), [0x3, 0]);
        assert_eq!(num_bits(&a), 66);
        assert!(get_bit(&a, 0) && get_bit(&a, 65) && !get_bit(&a, 66));
        assert_eq!(two_adicity(&[0x11u64, 0]), 4);
    }

    #[test]
    fn limb_vectors_multiply_and_split() {
        let sq = mul_limbs(&[u64::MAX], &[u64::MAX]);
        assert_eq!(sq, vec![1, u64::MAX - 1]);
        let (s, t) = split_two_power(&[0, 0x30]);
        assert_eq!(s, 68);
        assert_eq!(t, vec![3, 0]);
        assert_eq!(shr_limbs(&[0x8000_0000_0000_0001, 0x3], 1), vec![0xc000_0000_0000_0000, 0x1]);
    }

    #[test]
    fn naf_digits_reconstruct() {
        for n in [1u64, 7, 0x8508_c000_0000_0001, 4_965_661_367_192_848_881, u64::MAX] {
            let naf = find_naf(&[n]);
            let mut acc: i128 = 0;
            for d in naf.iter().rev() {
                acc = 2 * acc + *d as i128;
            }
            assert_eq!(acc, n as i128);
            for w in naf.windows(2) {
                assert!(w[0] == 0 || w[1] == 0, "adjacent non-zero digits");
            }
        }
    }

    #[test]
    fn montgomery_inv_is_negated_inverse() {
        let inv = montgomery_inv(P[0]);
        assert_eq!(P[0].wrapping_mul(inv), u64::MAX);
    }

    #[test]
    fn montgomery_roundtrip() {
        let inv = montgomery_inv(P[0]);
        let r2 = two_pow_mod(&P, 256);
        let x = [0x1234_5678_9abc_def0u64, 0x0123_4567_89ab_cdef];
        let mont = montgomery_mul(&x, &r2, &P, inv);
        let back = montgomery_mul(&mont, &[1, 0], &P, inv);
        assert_eq!(back, x);
    }
}

//! Tests for BLS12-381

use num_bigint::BigUint;

use super::*;
use crate::curves::test_utils::*;
use crate::field::{Field, PrimeField};
use crate::pairing::Pairing;

// ============================================================================
// Fields
// ============================================================================

#[test]
fn test_prime_fields() {
    let mut rng = rng(1);
    field_arithmetic::<Fq>(&mut rng);
    field_arithmetic::<Fr>(&mut rng);
    square_roots::<Fq>(&mut rng);
    square_roots::<Fr>(&mut rng);
    field_encodings::<Fq>(&mut rng);
    field_encodings::<Fr>(&mut rng);
}

#[test]
fn test_extension_fields() {
    let mut rng = rng(2);
    field_arithmetic::<Fq2>(&mut rng);
    square_roots::<Fq2>(&mut rng);
    frobenius::<Fq2>(&mut rng);
    fp2_embedding::<Fq2Config>(&mut rng);
    field_arithmetic::<Fq6>(&mut rng);
    frobenius::<Fq6>(&mut rng);
    field_arithmetic::<Fq12>(&mut rng);
    frobenius::<Fq12>(&mut rng);
    field_encodings::<Fq12>(&mut rng);
    sparse_fp12::<Fq12Config>(&mut rng);
}

#[test]
fn test_seed_relations() {
    let x = BigUint::from(BLS12_381_X);
    let r = modulus::<Fr>();
    let p = modulus::<Fq>();

    // x < 0: r = x^4 - x^2 + 1, p = (|x| + 1)^2 r / 3 - |x|
    assert_eq!(r, x.pow(4) - x.pow(2) + 1u32);
    assert_eq!(p, (&x + 1u32).pow(2) * &r / 3u32 - &x);
    assert_eq!(Fq::MODULUS_BIT_SIZE, 381);
    assert_eq!(Fr::MODULUS_BIT_SIZE, 255);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_g1() {
    let mut rng = rng(3);
    group_laws::<G1Config>(&mut rng);
    batch_normalization::<G1Config>(&mut rng);
    point_encodings::<G1Config>(&mut rng);
    subgroup_rejection::<G1Config>(&mut rng);
    assert_eq!(G1Affine::to_compressed(&G1Affine::generator()).len(), 50);
}

#[test]
fn test_g2() {
    let mut rng = rng(4);
    group_laws::<G2Config>(&mut rng);
    batch_normalization::<G2Config>(&mut rng);
    point_encodings::<G2Config>(&mut rng);
    subgroup_rejection::<G2Config>(&mut rng);
}

#[test]
fn test_g2_mul_by_q() {
    let mut rng = rng(5);
    let q = G2Projective::random(&mut rng);
    assert_eq!(Bls12_381::g2_mul_by_q(&q), q.mul_bigint(Fq::MODULUS));
}

// ============================================================================
// Pairing
// ============================================================================

#[test]
fn test_pairing() {
    let mut rng = rng(6);
    generator_pairing::<Bls12_381>();
    bilinearity::<Bls12_381>(&mut rng);
}

#[test]
fn test_miller_loop() {
    let mut rng = rng(7);
    miller_loop_products::<Bls12_381>(&mut rng);
    // |x| has 64 bits and Hamming weight 6
    assert_eq!(
        crate::pairing::G2Precomp::<Bls12_381Config>::expected_len(),
        63 + 5
    );
}

#[test]
fn test_final_exponentiation() {
    let mut rng = rng(8);
    cyclotomic::<Bls12_381>(&mut rng);
    final_exponentiation_reference::<Bls12_381>(&BigUint::from(3u32), &mut rng);
}

#[test]
fn test_encodings() {
    let mut rng = rng(9);
    precomp_text::<Bls12_381>(&mut rng);
    gt_encodings::<Bls12_381>(&mut rng);
}

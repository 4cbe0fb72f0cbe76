//! Tests for BN254

use num_bigint::BigUint;

use super::*;
use crate::curves::test_utils::*;
use crate::field::{Field, PrimeField};
use crate::pairing::Pairing;

// ============================================================================
// Fields
// ============================================================================

#[test]
fn test_fq_arithmetic() {
    let mut rng = rng(1);
    field_arithmetic::<Fq>(&mut rng);
    field_arithmetic::<Fr>(&mut rng);
    square_roots::<Fq>(&mut rng);
    square_roots::<Fr>(&mut rng);
    field_encodings::<Fq>(&mut rng);
    field_encodings::<Fr>(&mut rng);
}

#[test]
fn test_fq2_arithmetic() {
    let mut rng = rng(2);
    field_arithmetic::<Fq2>(&mut rng);
    square_roots::<Fq2>(&mut rng);
    frobenius::<Fq2>(&mut rng);
    field_encodings::<Fq2>(&mut rng);
    fp2_embedding::<Fq2Config>(&mut rng);

    // u^2 = -1
    let u = Fq2::new(Fq::ZERO, Fq::ONE);
    assert_eq!(u.square(), -Fq2::ONE);
}

#[test]
fn test_fq6_fq12_arithmetic() {
    let mut rng = rng(3);
    field_arithmetic::<Fq6>(&mut rng);
    frobenius::<Fq6>(&mut rng);
    field_arithmetic::<Fq12>(&mut rng);
    frobenius::<Fq12>(&mut rng);
    field_encodings::<Fq12>(&mut rng);
    sparse_fp12::<Fq12Config>(&mut rng);
}

#[test]
fn test_modulus_constants() {
    let p = modulus::<Fq>();
    let r = modulus::<Fr>();
    let u = BigUint::from(BN254_U);

    // p = 36u^4 + 36u^3 + 24u^2 + 6u + 1, r = p - 6u^2
    let expected_p = u.pow(4) * 36u32 + u.pow(3) * 36u32 + u.pow(2) * 24u32 + &u * 6u32 + 1u32;
    assert_eq!(p, expected_p);
    assert_eq!(r, &p - u.pow(2) * 6u32);
    assert_eq!(Fq::MODULUS_BIT_SIZE, 254);
    assert_eq!(Fq::from_u64(2) * Fq::TWO_INV, Fq::ONE);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_g1() {
    let mut rng = rng(4);
    group_laws::<G1Config>(&mut rng);
    batch_normalization::<G1Config>(&mut rng);
    point_encodings::<G1Config>(&mut rng);

    // G1 has cofactor one: every curve point is in the subgroup
    let p = G1Affine::from_x_and_sign(Fq::ONE, false).unwrap();
    assert!(p.is_in_correct_subgroup());
    assert_eq!(G1Affine::generator().x, Fq::ONE);
}

#[test]
fn test_g2() {
    let mut rng = rng(5);
    group_laws::<G2Config>(&mut rng);
    batch_normalization::<G2Config>(&mut rng);
    point_encodings::<G2Config>(&mut rng);
    subgroup_rejection::<G2Config>(&mut rng);
}

#[test]
fn test_g2_mul_by_q() {
    let mut rng = rng(6);
    let q = G2Projective::random(&mut rng);
    assert_eq!(Bn254::g2_mul_by_q(&q), q.mul_bigint(Fq::MODULUS));
}

// ============================================================================
// Pairing
// ============================================================================

#[test]
fn test_pairing() {
    let mut rng = rng(7);
    generator_pairing::<Bn254>();
    bilinearity::<Bn254>(&mut rng);
}

#[test]
fn test_miller_loop() {
    let mut rng = rng(8);
    miller_loop_products::<Bn254>(&mut rng);
    // one walk over NAF(6u + 2), then the two Frobenius lines
    assert_eq!(
        crate::pairing::G2Precomp::<Bn254Config>::expected_len(),
        Bn254Config::ATE_LOOPS[0].line_count() + 2
    );
}

#[test]
fn test_final_exponentiation() {
    let mut rng = rng(9);
    cyclotomic::<Bn254>(&mut rng);

    let u = BigUint::from(BN254_U);
    let m = &u * 2u32 * (u.pow(2) * 6u32 + &u * 3u32 + 1u32);
    final_exponentiation_reference::<Bn254>(&m, &mut rng);
}

#[test]
fn test_encodings() {
    let mut rng = rng(10);
    precomp_text::<Bn254>(&mut rng);
    gt_encodings::<Bn254>(&mut rng);
}

#[test]
fn test_multi_pairing() {
    let mut rng = rng(11);
    let a = Fr::random(&mut rng);
    let p = G1Affine::generator();
    let q = G2Affine::generator();

    // e(aP, Q) e(-P, aQ) = 1
    let pa = (p * a).to_affine();
    let qa = (q * a).to_affine();
    assert!(Bn254::multi_pairing(&[(pa, q), (-p, qa)]).unwrap().is_identity());
    assert_eq!(
        Bn254::multi_pairing(&[(pa, q)]).unwrap(),
        Bn254::pairing(&pa, &q).unwrap()
    );
    assert!(Bn254::multi_pairing(&[]).unwrap().is_identity());
}

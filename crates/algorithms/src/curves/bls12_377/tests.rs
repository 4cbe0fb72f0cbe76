//! Tests for BLS12-377

use num_bigint::BigUint;

use super::*;
use crate::curves::test_utils::*;
use crate::field::{Field, PrimeField};
use crate::pairing::Pairing;

#[test]
fn test_fields() {
    let mut rng = rng(1);
    field_arithmetic::<Fq>(&mut rng);
    field_arithmetic::<Fr>(&mut rng);
    square_roots::<Fq>(&mut rng);
    field_encodings::<Fr>(&mut rng);

    field_arithmetic::<Fq2>(&mut rng);
    square_roots::<Fq2>(&mut rng);
    frobenius::<Fq2>(&mut rng);
    field_arithmetic::<Fq6>(&mut rng);
    frobenius::<Fq6>(&mut rng);
    field_arithmetic::<Fq12>(&mut rng);
    frobenius::<Fq12>(&mut rng);
    sparse_fp12::<Fq12Config>(&mut rng);

    // u^2 = -5
    let u = Fq2::new(Fq::ZERO, Fq::ONE);
    assert_eq!(u.square(), -Fq2::from_fp(Fq::from_u64(5)));
}

#[test]
fn test_seed_relations() {
    let x = BigUint::from(BLS12_377_X);
    let r = modulus::<Fr>();
    let p = modulus::<Fq>();

    assert_eq!(r, x.pow(4) - x.pow(2) + 1u32);
    assert_eq!(p, (&x - 1u32).pow(2) * &r / 3u32 + &x);
    assert_eq!(Fq::MODULUS_BIT_SIZE, 377);
}

#[test]
fn test_groups() {
    let mut rng = rng(2);
    group_laws::<G1Config>(&mut rng);
    point_encodings::<G1Config>(&mut rng);
    subgroup_rejection::<G1Config>(&mut rng);
    group_laws::<G2Config>(&mut rng);
    batch_normalization::<G2Config>(&mut rng);
    point_encodings::<G2Config>(&mut rng);
    subgroup_rejection::<G2Config>(&mut rng);

    let q = G2Projective::random(&mut rng);
    assert_eq!(Bls12_377::g2_mul_by_q(&q), q.mul_bigint(Fq::MODULUS));
}

#[test]
fn test_pairing() {
    let mut rng = rng(3);
    generator_pairing::<Bls12_377>();
    bilinearity::<Bls12_377>(&mut rng);
    miller_loop_products::<Bls12_377>(&mut rng);
    // x has 64 bits and Hamming weight 7
    assert_eq!(
        crate::pairing::G2Precomp::<Bls12_377Config>::expected_len(),
        63 + 6
    );
}

#[test]
fn test_final_exponentiation() {
    let mut rng = rng(4);
    cyclotomic::<Bls12_377>(&mut rng);
    final_exponentiation_reference::<Bls12_377>(&BigUint::from(3u32), &mut rng);
}

#[test]
fn test_encodings() {
    let mut rng = rng(5);
    precomp_text::<Bls12_377>(&mut rng);
    gt_encodings::<Bls12_377>(&mut rng);
}

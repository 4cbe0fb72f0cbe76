//! Tests for MNT4-298

use num_bigint::BigUint;

use super::*;
use crate::curves::test_utils::*;
use crate::ec::SwCurveConfig;
use crate::field::models::Fp4ConfigWrapper;
use crate::field::{Field, PrimeField};
use crate::pairing::{G2Precomp, Pairing};

#[test]
fn test_fields() {
    let mut rng = rng(1);
    field_arithmetic::<Fq>(&mut rng);
    field_arithmetic::<Fr>(&mut rng);
    square_roots::<Fq>(&mut rng);
    square_roots::<Fr>(&mut rng);
    field_encodings::<Fq>(&mut rng);

    field_arithmetic::<Fq2>(&mut rng);
    frobenius::<Fq2>(&mut rng);
    square_roots::<Fq2>(&mut rng);
    fp2_embedding::<Fq2Config>(&mut rng);
    field_arithmetic::<Fq4>(&mut rng);
    frobenius::<Fq4>(&mut rng);
    field_encodings::<Fq4>(&mut rng);
    quadratic_lines::<Fp4ConfigWrapper<Fq4Config>>(&mut rng);

    // u^2 = 17, v^2 = u
    let u = Fq2::new(Fq::ZERO, Fq::ONE);
    assert_eq!(u.square(), Fq2::new(Fq::from_u64(17), Fq::ZERO));
    let v = Fq4::new(Fq2::ZERO, Fq2::ONE);
    assert_eq!(v.square(), Fq4::new(u, Fq2::ZERO));
}

#[test]
fn test_cycle() {
    // each scalar field is the base field of the other curve
    assert_eq!(
        MNT4_298_FR_MODULUS,
        dpairing_params::pairing::mnt6_298::MNT6_298_FQ_MODULUS
    );
    assert_eq!(
        MNT4_298_FQ_MODULUS,
        dpairing_params::pairing::mnt6_298::MNT6_298_FR_MODULUS
    );
    assert_eq!(Fq::MODULUS_BIT_SIZE, 298);
}

#[test]
fn test_groups() {
    let mut rng = rng(2);
    group_laws::<G1Config>(&mut rng);
    batch_normalization::<G1Config>(&mut rng);
    point_encodings::<G1Config>(&mut rng);
    group_laws::<G2Config>(&mut rng);
    batch_normalization::<G2Config>(&mut rng);
    point_encodings::<G2Config>(&mut rng);
    subgroup_rejection::<G2Config>(&mut rng);

    // the twist scales a by u^2 and b by u^3
    let twist = Mnt4_298Config::TWIST;
    assert_eq!(
        G2Config::COEFF_A,
        twist.square().mul_by_base_prime_field(&G1Config::COEFF_A)
    );
    assert_eq!(
        G2Config::COEFF_B,
        (twist.square() * twist).mul_by_base_prime_field(&G1Config::COEFF_B)
    );
}

#[test]
fn test_pairing() {
    let mut rng = rng(3);
    generator_pairing::<Mnt4_298>();
    bilinearity::<Mnt4_298>(&mut rng);
}

#[test]
fn test_miller_loop() {
    let mut rng = rng(4);
    miller_loop_products::<Mnt4_298>(&mut rng);

    // NAF(t - 1): 149 doublings, 47 additions
    assert_eq!(Mnt4_298Config::ATE_LOOPS[0].line_count(), 196);
    assert_eq!(G2Precomp::<Mnt4_298Config>::expected_len(), 196);
}

#[test]
fn test_final_exponentiation() {
    let mut rng = rng(5);
    cyclotomic::<Mnt4_298>(&mut rng);
    final_exponentiation_reference::<Mnt4_298>(&BigUint::from(1u32), &mut rng);
}

#[test]
fn test_encodings() {
    let mut rng = rng(6);
    precomp_text::<Mnt4_298>(&mut rng);
    gt_encodings::<Mnt4_298>(&mut rng);
}

//! Tests for MNT6-298

use num_bigint::BigUint;

use super::*;
use crate::curves::test_utils::*;
use crate::ec::SwCurveConfig;
use crate::field::models::Fp6Over3ConfigWrapper;
use crate::field::{Field, LegendreSymbol, PrimeField, SqrtField};
use crate::pairing::{G2Precomp, Pairing};

#[test]
fn test_fields() {
    let mut rng = rng(1);
    field_arithmetic::<Fq>(&mut rng);
    field_arithmetic::<Fr>(&mut rng);
    square_roots::<Fq>(&mut rng);
    field_encodings::<Fq>(&mut rng);

    field_arithmetic::<Fq3>(&mut rng);
    frobenius::<Fq3>(&mut rng);
    square_roots::<Fq3>(&mut rng);
    field_arithmetic::<Fq6>(&mut rng);
    frobenius::<Fq6>(&mut rng);
    field_encodings::<Fq6>(&mut rng);
    sparse_fp6_2over3::<Fq6Config>(&mut rng);
    quadratic_lines::<Fp6Over3ConfigWrapper<Fq6Config>>(&mut rng);

    // u^3 = 5
    let u = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
    assert_eq!(u.square() * u, Fq3::new(Fq::from_u64(5), Fq::ZERO, Fq::ZERO));
}

#[test]
fn test_cubic_square_roots() {
    let mut rng = rng(7);
    let a = Fq3::random(&mut rng);
    // the norm is multiplicative
    let b = Fq3::random(&mut rng);
    assert_eq!((a * b).norm(), a.norm() * b.norm());

    let sq = a.square();
    assert_eq!(sq.legendre(), LegendreSymbol::QuadraticResidue);
    let root = sq.square_root().unwrap();
    assert!(root == a || root == -a);

    // a base field non-residue stays one in Fq3
    let five = Fq3::new(Fq::from_u64(5), Fq::ZERO, Fq::ZERO);
    assert_eq!(five.legendre(), LegendreSymbol::QuadraticNonResidue);
    assert!(bool::from(five.sqrt().is_none()));
}

#[test]
fn test_cycle() {
    assert_eq!(
        MNT6_298_FR_MODULUS,
        dpairing_params::pairing::mnt4_298::MNT4_298_FQ_MODULUS
    );
    assert_eq!(Fq::MODULUS_BIT_SIZE, 298);
    assert!(MNT6_298_ATE_LOOP_COUNT_IS_NEGATIVE);
    assert!(MNT6_298_FINAL_EXPONENT_W0_IS_NEGATIVE);
}

#[test]
fn test_groups() {
    let mut rng = rng(2);
    group_laws::<G1Config>(&mut rng);
    batch_normalization::<G1Config>(&mut rng);
    point_encodings::<G1Config>(&mut rng);
    group_laws::<G2Config>(&mut rng);
    point_encodings::<G2Config>(&mut rng);
    subgroup_rejection::<G2Config>(&mut rng);

    let twist = Mnt6_298Config::TWIST;
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
    generator_pairing::<Mnt6_298>();
    bilinearity::<Mnt6_298>(&mut rng);
}

#[test]
fn test_miller_loop() {
    let mut rng = rng(4);
    miller_loop_products::<Mnt6_298>(&mut rng);

    // NAF(|t - 1|): 149 doublings, 47 additions
    assert_eq!(Mnt6_298Config::ATE_LOOPS[0].line_count(), 196);
    assert_eq!(G2Precomp::<Mnt6_298Config>::expected_len(), 196);
}

#[test]
fn test_final_exponentiation() {
    let mut rng = rng(5);
    cyclotomic::<Mnt6_298>(&mut rng);
    final_exponentiation_reference::<Mnt6_298>(&BigUint::from(1u32), &mut rng);
}

#[test]
fn test_encodings() {
    let mut rng = rng(6);
    precomp_text::<Mnt6_298>(&mut rng);
    gt_encodings::<Mnt6_298>(&mut rng);
}

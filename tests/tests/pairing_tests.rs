//! End-to-end pairing tests across every curve

use dpairing_algorithms::curves::{bls12_377, bls12_381, bn254, bw6_761, mnt4_298, mnt6_298};
use dpairing_algorithms::pairing::{G1Affine, G2Affine};
use dpairing_algorithms::{
    Bls12_377, Bls12_381, Bn254, Bw6_761, Field, Mnt4_298, Mnt6_298, Pairing, PrimeField,
};
use dpairing_tests::{random_pair, seeded_rng, BatchInstance, Scalar};

// ============================================================================
// Generic checks
// ============================================================================

fn check_bilinearity<E: Pairing>(seed: u64) {
    let mut rng = seeded_rng(seed);
    let (p, q) = random_pair::<E>(&mut rng);
    let s = Scalar::<E>::random(&mut rng);

    let e = E::pairing(&p, &q).unwrap();
    let left = E::pairing(&(p * s).to_affine(), &q).unwrap();
    let right = E::pairing(&p, &(q * s).to_affine()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left, e.pow_scalar(&s));
}

fn check_non_degeneracy<E: Pairing>() {
    let e = E::pairing(
        &G1Affine::<E::Config>::generator(),
        &G2Affine::<E::Config>::generator(),
    )
    .unwrap();
    assert!(!e.is_identity());
    assert!(e.pow(Scalar::<E>::MODULUS).is_identity());
}

fn check_miller_loops<E: Pairing>(seed: u64) {
    let mut rng = seeded_rng(seed);
    let (p1, q1) = random_pair::<E>(&mut rng);
    let (p2, q2) = random_pair::<E>(&mut rng);
    let (p1, q1) = (E::precompute_g1(&p1), E::precompute_g2(&q1));
    let (p2, q2) = (E::precompute_g1(&p2), E::precompute_g2(&q2));

    let single = E::miller_loop(&p1, &q1) * E::miller_loop(&p2, &q2);
    assert_eq!(E::double_miller_loop(&p1, &q1, &p2, &q2), single);
    assert_eq!(E::multi_miller_loop(&[(&p1, &q1), (&p2, &q2)]), single);
}

fn check_batch_verification<E: Pairing>(seed: u64) {
    let mut rng = seeded_rng(seed);
    let instance = BatchInstance::<E>::random(&mut rng).unwrap();
    assert_eq!(instance.lhs().unwrap(), instance.rhs().unwrap());
    assert!(instance.verify().unwrap());

    // a proof from another statement fails
    let mut forged = instance;
    forged.c[1] = (forged.c[1] + G1Affine::<E::Config>::generator()).to_affine();
    assert_ne!(forged.lhs().unwrap(), forged.rhs().unwrap());
    assert!(!forged.verify().unwrap());
}

fn check_threads<E: Pairing>(seed: u64) {
    let mut rng = seeded_rng(seed);
    let (p, q) = random_pair::<E>(&mut rng);
    let prepared = E::precompute_g2(&q);
    let expected = E::pairing(&p, &q).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    let f = E::miller_loop(&E::precompute_g1(&p), &prepared);
                    E::final_exponentiation(&f).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ============================================================================
// Per-curve instantiations
// ============================================================================

macro_rules! pairing_suite {
    ($name:ident, $engine:ty, $seed:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn bilinearity() {
                check_bilinearity::<$engine>($seed);
            }

            #[test]
            fn non_degeneracy() {
                check_non_degeneracy::<$engine>();
            }

            #[test]
            fn miller_loops() {
                check_miller_loops::<$engine>($seed + 1);
            }

            #[test]
            fn batch_verification() {
                check_batch_verification::<$engine>($seed + 2);
            }

            #[test]
            fn shared_precomputation() {
                check_threads::<$engine>($seed + 3);
            }
        }
    };
}

pairing_suite!(bn254_pairing, Bn254, 100);
pairing_suite!(bls12_381_pairing, Bls12_381, 200);
pairing_suite!(bls12_377_pairing, Bls12_377, 300);
pairing_suite!(bw6_761_pairing, Bw6_761, 400);
pairing_suite!(mnt4_298_pairing, Mnt4_298, 600);
pairing_suite!(mnt6_298_pairing, Mnt6_298, 700);

#[test]
fn test_curve_bls12_377() {
    let g1 = bls12_377::G1Affine::generator();
    let g2 = bls12_377::G2Affine::generator();
    let three = bls12_377::Fr::from_u64(3);

    let e = Bls12_377::pairing(&g1, &g2).unwrap();
    assert!(!e.is_identity());
    assert!(e.pow(bls12_377::Fr::MODULUS).is_identity());
    assert_eq!(
        Bls12_377::pairing(&(g1 * three).to_affine(), &g2).unwrap(),
        Bls12_377::pairing(&g1, &(g2 * three).to_affine()).unwrap()
    );
    assert_eq!(dpairing_params::pairing::bls12_377::BLS12_377_X.count_ones(), 7);
}

#[test]
fn bw6_761_pairs_over_bls12_377_base_field() {
    // a BLS12-377 base field element is a BW6-761 scalar
    let x = bls12_377::Fq::from_u64(0x1234);
    let s = bw6_761::Fr::from_u64(0x1234);
    assert_eq!(
        dpairing_api::Serialize::to_bytes(&x),
        dpairing_api::Serialize::to_bytes(&s)
    );
}

#[test]
fn g2_endomorphism() {
    let mut rng = seeded_rng(500);
    let q = bn254::G2Projective::random(&mut rng);
    assert_eq!(Bn254::g2_mul_by_q(&q), q.mul_bigint(bn254::Fq::MODULUS));
    let q = bls12_381::G2Projective::random(&mut rng);
    assert_eq!(Bls12_381::g2_mul_by_q(&q), q.mul_bigint(bls12_381::Fq::MODULUS));
    let q = bls12_377::G2Projective::random(&mut rng);
    assert_eq!(Bls12_377::g2_mul_by_q(&q), q.mul_bigint(bls12_377::Fq::MODULUS));
}

#[test]
fn mnt_cycle_swaps_fields() {
    // an MNT4-298 base field element is an MNT6-298 scalar and the reverse
    let mut rng = seeded_rng(800);
    let x = mnt4_298::Fq::random(&mut rng);
    let bytes = dpairing_api::Serialize::to_bytes(&x);
    let s: mnt6_298::Fr = dpairing_api::Serialize::from_bytes(&bytes).unwrap();
    assert_eq!(dpairing_api::Serialize::to_bytes(&s), bytes);
    assert_eq!(mnt6_298::Fq::MODULUS, mnt4_298::Fr::MODULUS);

    // each curve's G1 has prime order, so every point is in the subgroup
    let p = mnt6_298::G1Projective::random(&mut rng);
    assert!(p.mul_bigint(mnt6_298::Fr::MODULUS).is_identity());
    let e = Mnt6_298::pairing(&p.to_affine(), &mnt6_298::G2Affine::generator()).unwrap();
    assert!(e.pow(mnt4_298::Fq::MODULUS).is_identity());
}

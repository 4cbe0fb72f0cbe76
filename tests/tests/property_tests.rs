//! Property-based tests for the group law, batch normalization and encodings
//!
//! Strategies draw a seed and expand it through ChaCha20, so a shrunk
//! failure reports the seed that reproduces it.

use dpairing_algorithms::curves::{bls12_381, bn254, bw6_761, mnt4_298, mnt6_298};
use dpairing_algorithms::ec::{Affine, Projective, SwCurveConfig};
use dpairing_algorithms::{Bls12_381, Bn254, Field, Pairing, PrimeField, SqrtField};
use dpairing_api::{Serialize, TextSerialize};
use dpairing_tests::{random_pair, seeded_rng, Scalar};
use proptest::prelude::*;

fn point<C: SwCurveConfig>(seed: u64) -> Projective<C> {
    Projective::<C>::random(&mut seeded_rng(seed))
}

fn group_laws<C: SwCurveConfig>(sa: u64, sb: u64) -> Result<(), TestCaseError> {
    let a = point::<C>(sa);
    let b = point::<C>(sb);
    let zero = Projective::<C>::identity();

    prop_assert!((a + (-a)).is_identity());
    prop_assert_eq!(a.double(), a + a);
    prop_assert_eq!(a.add_mixed(&b.to_affine()), a + b);
    prop_assert_eq!(a + zero, a);
    prop_assert_eq!(zero.add_mixed(&b.to_affine()), b);
    prop_assert!(a.is_well_formed());
    Ok(())
}

fn batch_normalization<C: SwCurveConfig>(seed: u64, len: usize) -> Result<(), TestCaseError> {
    let mut rng = seeded_rng(seed);
    let points: Vec<Projective<C>> = (0..len)
        .map(|i| {
            if i % 3 == 2 {
                Projective::identity()
            } else {
                Projective::<C>::random(&mut rng).double()
            }
        })
        .collect();

    let mut affine = vec![Affine::<C>::identity(); len];
    Projective::batch_normalize(&points, &mut affine).unwrap();
    for (p, q) in points.iter().zip(affine.iter()) {
        prop_assert_eq!(p.to_affine(), *q);
    }

    let mut normalized = points.clone();
    Projective::normalize_batch(&mut normalized).unwrap();
    for (p, q) in points.iter().zip(normalized.iter()) {
        prop_assert_eq!(p, q);
        prop_assert!(q.is_normalized());
    }
    Ok(())
}

fn point_round_trips<C: SwCurveConfig>(seed: u64) -> Result<(), TestCaseError>
where
    C::BaseField: SqrtField,
{
    let p = Affine::<C>::random(&mut seeded_rng(seed));
    prop_assert_eq!(Affine::<C>::from_compressed(&p.to_compressed()).unwrap(), p);
    prop_assert_eq!(Affine::<C>::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
    prop_assert_eq!(Affine::<C>::from_text(&p.to_text()).unwrap(), p);
    prop_assert_eq!(
        Affine::<C>::from_text_compressed(&p.to_text_compressed()).unwrap(),
        p
    );
    Ok(())
}

fn field_round_trips<F: Field>(seed: u64) -> Result<(), TestCaseError> {
    let a = F::random(&mut seeded_rng(seed));
    prop_assert_eq!(F::from_bytes(&a.to_bytes()).unwrap(), a);
    prop_assert_eq!(F::from_text(&a.to_text()).unwrap(), a);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn bn254_group_laws(sa in any::<u64>(), sb in any::<u64>()) {
        group_laws::<bn254::G1Config>(sa, sb)?;
        group_laws::<bn254::G2Config>(sa, sb)?;
    }

    #[test]
    fn bls12_381_group_laws(sa in any::<u64>(), sb in any::<u64>()) {
        group_laws::<bls12_381::G1Config>(sa, sb)?;
        group_laws::<bls12_381::G2Config>(sa, sb)?;
    }

    #[test]
    fn bw6_761_group_laws(sa in any::<u64>(), sb in any::<u64>()) {
        group_laws::<bw6_761::G1Config>(sa, sb)?;
        group_laws::<bw6_761::G2Config>(sa, sb)?;
    }

    #[test]
    fn mnt_group_laws(sa in any::<u64>(), sb in any::<u64>()) {
        group_laws::<mnt4_298::G1Config>(sa, sb)?;
        group_laws::<mnt4_298::G2Config>(sa, sb)?;
        group_laws::<mnt6_298::G1Config>(sa, sb)?;
        group_laws::<mnt6_298::G2Config>(sa, sb)?;
    }

    #[test]
    fn batch_normalization_agrees(seed in any::<u64>(), len in 0usize..12) {
        batch_normalization::<bn254::G1Config>(seed, len)?;
        batch_normalization::<bls12_381::G2Config>(seed, len)?;
        batch_normalization::<bw6_761::G1Config>(seed, len)?;
    }

    #[test]
    fn point_encodings_round_trip(seed in any::<u64>()) {
        point_round_trips::<bn254::G1Config>(seed)?;
        point_round_trips::<bn254::G2Config>(seed)?;
        point_round_trips::<bls12_381::G1Config>(seed)?;
        point_round_trips::<bls12_381::G2Config>(seed)?;
        point_round_trips::<bw6_761::G2Config>(seed)?;
        point_round_trips::<mnt4_298::G2Config>(seed)?;
        point_round_trips::<mnt6_298::G2Config>(seed)?;
    }

    #[test]
    fn field_encodings_round_trip(seed in any::<u64>()) {
        field_round_trips::<bn254::Fq>(seed)?;
        field_round_trips::<bn254::Fq2>(seed)?;
        field_round_trips::<bn254::Fq6>(seed)?;
        field_round_trips::<bn254::Fq12>(seed)?;
        field_round_trips::<bls12_381::Fr>(seed)?;
        field_round_trips::<bw6_761::Fq3>(seed)?;
        field_round_trips::<bw6_761::Fq6>(seed)?;
        field_round_trips::<mnt4_298::Fq4>(seed)?;
        field_round_trips::<mnt6_298::Fq6>(seed)?;
    }

    #[test]
    fn scalar_text_is_hex_of_bytes(seed in any::<u64>()) {
        let s = bn254::Fr::random(&mut seeded_rng(seed));
        prop_assert_eq!(s.to_text(), hex::encode(s.to_bytes()));
    }

    #[test]
    fn truncated_encodings_are_rejected(seed in any::<u64>(), cut in 1usize..48) {
        let p = bls12_381::G1Affine::random(&mut seeded_rng(seed));
        let bytes = p.to_compressed();
        prop_assert!(bls12_381::G1Affine::from_compressed(&bytes[..bytes.len() - cut]).is_err());
        let text = p.to_text();
        prop_assert!(bls12_381::G1Affine::from_text(&text[..text.len() - cut]).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn bn254_bilinearity(seed in any::<u64>(), s in 1u64..) {
        let mut rng = seeded_rng(seed);
        let (p, q) = random_pair::<Bn254>(&mut rng);
        let s = Scalar::<Bn254>::from_u64(s);
        let e = Bn254::pairing(&p, &q).unwrap();
        prop_assert_eq!(Bn254::pairing(&(p * s).to_affine(), &q).unwrap(), e.pow_scalar(&s));
        prop_assert_eq!(Bn254::pairing(&p, &(q * s).to_affine()).unwrap(), e.pow_scalar(&s));
    }

    #[test]
    fn bls12_381_precomputation_text_round_trip(seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let (_, q) = random_pair::<Bls12_381>(&mut rng);
        let pre = Bls12_381::precompute_g2(&q);
        let decoded = dpairing_algorithms::G2Precomp::<bls12_381::Bls12_381Config>::from_text(&pre.to_text()).unwrap();
        prop_assert_eq!(&decoded, &pre);
    }
}

//! Byte, text and serde encodings across crate boundaries

use dpairing_algorithms::curves::{bls12_381, bn254, bw6_761, mnt4_298, mnt6_298};
use dpairing_algorithms::{Bls12_381, Bn254, Error, Field, Pairing, PrimeField, SqrtField};
use dpairing_api::{Serialize, TextSerialize};
use dpairing_tests::{random_pair, seeded_rng};

// ============================================================================
// serde
// ============================================================================

#[test]
fn serde_points_use_compressed_bytes() {
    let mut rng = seeded_rng(1);
    let (p, q) = random_pair::<Bls12_381>(&mut rng);

    let json = serde_json::to_string(&p).unwrap();
    let back: bls12_381::G1Affine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
    let bytes: Vec<u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(bytes, p.to_compressed());

    let json = serde_json::to_string(&q).unwrap();
    let back: bls12_381::G2Affine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);

    let identity = bls12_381::G1Affine::identity();
    let json = serde_json::to_string(&identity).unwrap();
    assert_eq!(
        serde_json::from_str::<bls12_381::G1Affine>(&json).unwrap(),
        identity
    );
}

#[test]
fn serde_rejects_bad_points() {
    let mut rng = seeded_rng(2);
    let (p, _) = random_pair::<Bn254>(&mut rng);
    let mut bytes = p.to_compressed();
    bytes[0] = 7;
    let json = serde_json::to_string(&bytes).unwrap();
    assert!(serde_json::from_str::<bn254::G1Affine>(&json).is_err());

    let json = serde_json::to_string(&p.to_compressed()[1..]).unwrap();
    assert!(serde_json::from_str::<bn254::G1Affine>(&json).is_err());
}

#[test]
fn serde_target_group() {
    let mut rng = seeded_rng(3);
    let (p, q) = random_pair::<Bn254>(&mut rng);
    let e = Bn254::pairing(&p, &q).unwrap();

    let json = serde_json::to_string(&e).unwrap();
    let back: bn254::Gt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);

    // a random Fq12 element is not in the order-r subgroup
    let outside = bn254::Fq12::random(&mut rng);
    let json = serde_json::to_string(&outside.to_bytes()).unwrap();
    assert!(serde_json::from_str::<bn254::Gt>(&json).is_err());
}

// ============================================================================
// Byte and text contracts
// ============================================================================

#[test]
fn encoding_lengths() {
    assert_eq!(bn254::G1Affine::COMPRESSED_LEN, 1 + 32 + 1);
    assert_eq!(bn254::G2Affine::UNCOMPRESSED_LEN, 1 + 2 * 64);
    assert_eq!(bls12_381::G1Affine::UNCOMPRESSED_LEN, 1 + 2 * 48);
    assert_eq!(bw6_761::G2Affine::COMPRESSED_LEN, 1 + 96 + 1);
    assert_eq!(bn254::Fq12::ENCODED_LEN, 12 * 32);
    assert_eq!(bw6_761::Fq6::ENCODED_LEN, 6 * 96);
    assert_eq!(mnt4_298::G2Affine::COMPRESSED_LEN, 1 + 2 * 40 + 1);
    assert_eq!(mnt4_298::Fq4::ENCODED_LEN, 4 * 40);
    assert_eq!(mnt6_298::G2Affine::UNCOMPRESSED_LEN, 1 + 2 * 3 * 40);
}

#[test]
fn identity_encodings() {
    let identity = bn254::G2Affine::identity();
    let bytes = identity.to_uncompressed();
    assert!(bytes.iter().all(|&b| b == 0));
    assert_eq!(bn254::G2Affine::from_uncompressed(&bytes).unwrap(), identity);

    let text = identity.to_text_compressed();
    assert!(text.starts_with("0 "));
    assert!(text.ends_with(" 0"));
    assert_eq!(
        bn254::G2Affine::from_text_compressed(&text).unwrap(),
        identity
    );
}

#[test]
fn rejection_errors() {
    let g = bls12_381::G1Affine::generator();

    let err = bls12_381::G1Affine::from_compressed(&g.to_compressed()[..10]).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { expected: 50, actual: 10, .. }));

    let mut bytes = g.to_uncompressed();
    bytes[1..49].copy_from_slice(&[0xff; 48]);
    let err = bls12_381::G1Affine::from_uncompressed(&bytes).unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding { .. }));

    // smallest abscissa with no point above it
    let mut x = 0u64;
    let bytes = loop {
        let fx = bls12_381::Fq::from_u64(x);
        let rhs = fx.square() * fx + bls12_381::Fq::from_u64(4);
        if bool::from(rhs.sqrt().is_none()) {
            let mut bytes = vec![1u8];
            bytes.extend_from_slice(&fx.to_bytes());
            bytes.push(0);
            break bytes;
        }
        x += 1;
    };
    let err = bls12_381::G1Affine::from_compressed(&bytes).unwrap_err();
    assert!(matches!(err, Error::NotASquare { .. }));

    let text = g.to_text();
    let upper = text.to_uppercase();
    assert!(bls12_381::G1Affine::from_text(&upper).is_err());
    assert!(bls12_381::G1Affine::from_text(&text.replace(' ', "\n")).is_err());
}

#[test]
fn precomputation_sequences() {
    let mut rng = seeded_rng(4);
    let (p, q) = random_pair::<Bn254>(&mut rng);
    let pre = Bn254::precompute_g2(&q);

    let text = pre.to_text();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(q.to_text().as_str()));
    let len: usize = lines.next().unwrap().parse().unwrap();
    assert_eq!(len, pre.coeffs().len());
    assert_eq!(lines.count(), len);

    let g1 = Bn254::precompute_g1(&p);
    assert_eq!(
        dpairing_algorithms::G1Precomp::<bn254::Bn254Config>::from_text(&g1.to_text()).unwrap(),
        g1
    );
}

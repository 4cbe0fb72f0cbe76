//! Property checks shared by the per-curve test modules

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use dpairing_api::{Serialize, TextSerialize};
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::ec::{Affine, Projective, SwCurveConfig};
use crate::error::Error;
use crate::field::models::{
    Fp12, Fp12Config, Fp2, Fp2Config, Fp3, Fp3Config, Fp6, Fp6Config, Fp6Over3, Fp6Over3Config,
};
use crate::field::{
    Field, LegendreSymbol, PrimeField, QuadExtConfig, QuadExtField, QuadraticTarget, SexticTarget,
    SqrtField, TargetField,
};
use crate::pairing::{
    final_exponentiation_easy, G1Affine, G1Precomp, G1Projective, G2Affine, G2Precomp,
    G2Projective, Gt, Pairing, PairingConfig,
};

type Config<E> = <E as Pairing>::Config;
type Fqk<E> = <Config<E> as PairingConfig>::Fqk;
type Fr<E> = <Config<E> as PairingConfig>::Fr;
type Fp<E> = <Config<E> as PairingConfig>::Fp;

/// Deterministic generator for a test
pub(crate) fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Integer from little-endian limbs
pub(crate) fn biguint(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::from(0u32), |acc, &limb| (acc << 64usize) + limb)
}

/// Modulus of a prime field as an integer
pub(crate) fn modulus<F: PrimeField>() -> BigUint {
    biguint(F::MODULUS.as_ref())
}

// ============================================================================
// Fields
// ============================================================================

pub(crate) fn field_arithmetic<F: Field>(rng: &mut impl RngCore) {
    for _ in 0..8 {
        let a = F::random(rng);
        let b = F::random(rng);
        let c = F::random(rng);

        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a - b, -(b - a));
        assert_eq!(a.square(), a * a);
        assert_eq!(a.double(), a + a);
        assert!((a - a).is_zero());
        assert_eq!(a * F::ONE, a);
        if !a.is_zero() {
            assert!((a * a.inverse().unwrap()).is_one());
        }
        assert_eq!([a, b, c].iter().copied().sum::<F>(), a + b + c);
        assert_eq!([a, b, c].iter().copied().product::<F>(), a * b * c);
    }
    assert!(matches!(
        F::ZERO.inverse(),
        Err(Error::DivisionByZero { .. })
    ));
}

/// `frobenius_map(1)` is raising to p, and has order `extension_degree`
pub(crate) fn frobenius<F: Field>(rng: &mut impl RngCore) {
    let p = modulus::<F::BasePrimeField>();
    let k = F::extension_degree();
    for _ in 0..2 {
        let a = F::random(rng);
        assert_eq!(a.frobenius_map(1), a.pow(p.to_u64_digits()));
        assert_eq!(a.frobenius_map(2), a.frobenius_map(1).frobenius_map(1));
        let mut b = a;
        for _ in 0..k {
            b = b.frobenius_map(1);
        }
        assert_eq!(b, a);
    }
}

pub(crate) fn square_roots<F: SqrtField>(rng: &mut impl RngCore) {
    for _ in 0..8 {
        let a = F::random(rng);
        let s = a.square();
        let r = s.square_root().unwrap();
        assert!(r == a || r == -a);
        assert_eq!(s.legendre(), LegendreSymbol::QuadraticResidue);
    }
    assert_eq!(F::ZERO.square_root().unwrap(), F::ZERO);
    assert_eq!(F::ZERO.legendre(), LegendreSymbol::Zero);

    let mut n = F::random(rng);
    while n.legendre() != LegendreSymbol::QuadraticNonResidue {
        n = F::random(rng);
    }
    assert!(matches!(n.square_root(), Err(Error::NotASquare { .. })));
}

pub(crate) fn field_encodings<F: Field>(rng: &mut impl RngCore) {
    let a = F::random(rng);

    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), F::ENCODED_LEN);
    assert_eq!(F::from_bytes(&bytes).unwrap(), a);
    assert!(matches!(
        F::from_bytes(&bytes[1..]),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        F::from_bytes(&vec![0xff; F::ENCODED_LEN]),
        Err(Error::MalformedEncoding { .. })
    ));

    let text = a.to_text();
    assert_eq!(F::from_text(&text).unwrap(), a);
    assert!(F::from_text(&format!("{} ", text)).is_err());
    assert!(F::from_text(&text[..text.len() - 1]).is_err());
    assert!(F::from_text(&text.replacen(' ', "\n", 1)).is_err() || F::extension_degree() == 1);
}

/// `mul_by_024` and `mul_by_045` agree with multiplication by the dense
/// element they stand for
pub(crate) fn sparse_fp12<P: Fp12Config>(rng: &mut impl RngCore) {
    type F2<P> = Fp2<<<P as Fp12Config>::Fp6Config as Fp6Config>::Fp2Config>;
    let zero = F2::<P>::ZERO;

    let f = Fp12::<P>::random(rng);
    let c0 = F2::<P>::random(rng);
    let c2 = F2::<P>::random(rng);
    let c4 = F2::<P>::random(rng);

    let mut sparse = f;
    sparse.mul_by_024(&c0, &c2, &c4);
    let dense = Fp12::<P>::new(Fp6::new(c0, zero, c2), Fp6::new(zero, c4, zero));
    assert_eq!(sparse, f * dense);

    let mut sparse = f;
    sparse.mul_by_045(&c0, &c2, &c4);
    let dense = Fp12::<P>::new(Fp6::new(c0, zero, zero), Fp6::new(zero, c2, c4));
    assert_eq!(sparse, f * dense);
}

pub(crate) fn sparse_fp6_2over3<P: Fp6Over3Config>(rng: &mut impl RngCore) {
    type F<P> = <<P as Fp6Over3Config>::Fp3Config as Fp3Config>::Fp;
    let zero = F::<P>::ZERO;

    let f = Fp6Over3::<P>::random(rng);
    let c0 = F::<P>::random(rng);
    let c4 = F::<P>::random(rng);
    let c5 = F::<P>::random(rng);

    let mut sparse = f;
    sparse.mul_by_045(&c0, &c4, &c5);
    let dense = Fp6Over3::<P>::new(Fp3::new(c0, zero, zero), Fp3::new(zero, c4, c5));
    assert_eq!(sparse, f * dense);

    let mut sparse = f;
    sparse.mul_by_024(&c0, &c4, &c5);
    let dense = Fp6Over3::<P>::new(Fp3::new(c0, zero, c4), Fp3::new(zero, c5, zero));
    assert_eq!(sparse, f * dense);
}

/// The dense line product of a quadratic twist
pub(crate) fn quadratic_lines<P: QuadExtConfig>(rng: &mut impl RngCore) {
    let f = QuadExtField::<P>::random(rng);
    let c0 = P::BaseField::random(rng);
    let c1 = P::BaseField::random(rng);

    let mut line = f;
    line.mul_by_line(&c0, &c1);
    assert_eq!(line, f * QuadExtField::<P>::new(c0, c1));

    let mut line = f;
    line.mul_by_line(&P::BaseField::ONE, &P::BaseField::ZERO);
    assert_eq!(line, f);
}

/// `Fp2` embedding of the base field commutes with arithmetic
pub(crate) fn fp2_embedding<P: Fp2Config>(rng: &mut impl RngCore) {
    let a = P::Fp::random(rng);
    let b = P::Fp::random(rng);
    assert_eq!(Fp2::<P>::from_fp(a) * Fp2::<P>::from_fp(b), Fp2::<P>::from_fp(a * b));
    let mut c = Fp2::<P>::random(rng);
    let expected = c * Fp2::<P>::from_fp(a);
    c.mul_assign_by_fp(&a);
    assert_eq!(c, expected);
}

// ============================================================================
// Groups
// ============================================================================

pub(crate) fn group_laws<C: SwCurveConfig>(rng: &mut impl RngCore) {
    let zero = Projective::<C>::identity();
    let a = Projective::<C>::random(rng);
    let b = Projective::<C>::random(rng);
    let c = Projective::<C>::random(rng);

    assert!(Affine::<C>::generator().is_on_curve());
    assert!(Affine::<C>::generator().is_in_correct_subgroup());
    assert!(a.is_well_formed());
    assert!(a.is_in_correct_subgroup());

    assert!((a + (-a)).is_identity());
    assert!((a - a).is_identity());
    assert_eq!(a.double(), a + a);
    assert_eq!(a.add_mixed(&b.to_affine()), a + b);
    assert_eq!(a + b, b + a);
    assert_eq!((a + b) + c, a + (b + c));
    assert_eq!(a.mul_bigint([3u64]), a.double() + a);

    assert_eq!(a + zero, a);
    assert_eq!(zero + a, a);
    assert!(zero.double().is_identity());
    assert_eq!(a.add_mixed(&Affine::identity()), a);
    assert_eq!(zero.add_mixed(&a.to_affine()), a);
    assert_eq!(a.to_affine().into_projective(), a);
    assert!(zero.to_affine().is_identity());

    let s = C::ScalarField::random(rng);
    let t = C::ScalarField::random(rng);
    assert_eq!(a * s + a * t, a * (s + t));
    assert_eq!((a * s) * t, a * (s * t));
    assert_eq!(a.to_affine() * s, a * s);
    let mut e = a;
    e *= s;
    assert_eq!(e, a * s);
    assert!(a.mul_bigint(C::ScalarField::MODULUS).is_identity());

    let mut d = a;
    d += b;
    d -= b;
    assert_eq!(d, a);
    assert_eq!([a, b, c].iter().sum::<Projective<C>>(), a + b + c);
}

pub(crate) fn batch_normalization<C: SwCurveConfig>(rng: &mut impl RngCore) {
    let mut points: Vec<Projective<C>> = (0..8)
        .map(|_| Projective::<C>::random(rng).double())
        .collect();
    points[3] = Projective::identity();

    let mut affine = vec![Affine::<C>::identity(); points.len()];
    Projective::batch_normalize(&points, &mut affine).unwrap();
    for (p, q) in points.iter().zip(affine.iter()) {
        assert_eq!(p.to_affine(), *q);
    }

    let mut normalized = points.clone();
    Projective::normalize_batch(&mut normalized).unwrap();
    for (p, q) in points.iter().zip(normalized.iter()) {
        assert_eq!(p, q);
        assert!(q.is_normalized());
    }

    assert!(matches!(
        Projective::batch_normalize(&points, &mut affine[1..]),
        Err(Error::InvalidLength { .. })
    ));
}

pub(crate) fn point_encodings<C: SwCurveConfig>(rng: &mut impl RngCore)
where
    C::BaseField: SqrtField,
{
    let p = Affine::<C>::random(rng);
    for q in [p, -p, Affine::identity()] {
        let bytes = q.to_uncompressed();
        assert_eq!(bytes.len(), Affine::<C>::UNCOMPRESSED_LEN);
        assert_eq!(Affine::<C>::from_uncompressed(&bytes).unwrap(), q);
        assert_eq!(Affine::<C>::from_uncompressed_validated(&bytes).unwrap(), q);
        assert_eq!(Affine::<C>::from_bytes(&q.to_bytes()).unwrap(), q);

        let bytes = q.to_compressed();
        assert_eq!(bytes.len(), Affine::<C>::COMPRESSED_LEN);
        assert_eq!(Affine::<C>::from_compressed(&bytes).unwrap(), q);
        assert_eq!(Affine::<C>::from_compressed_validated(&bytes).unwrap(), q);

        assert_eq!(Affine::<C>::from_text(&q.to_text()).unwrap(), q);
        assert_eq!(Affine::<C>::from_text_compressed(&q.to_text_compressed()).unwrap(), q);
    }

    let bytes = p.to_uncompressed();
    let mut bad = bytes.clone();
    bad[0] = 0x02;
    assert!(matches!(
        Affine::<C>::from_uncompressed(&bad),
        Err(Error::MalformedEncoding { .. })
    ));
    assert!(matches!(
        Affine::<C>::from_uncompressed(&bytes[..bytes.len() - 1]),
        Err(Error::InvalidLength { .. })
    ));
    let off_curve = Affine::<C>::new_unchecked(p.x, p.y + C::BaseField::ONE);
    assert!(matches!(
        Affine::<C>::from_uncompressed(&off_curve.to_uncompressed()),
        Err(Error::MalformedEncoding { .. })
    ));
    let mut identity = Affine::<C>::identity().to_uncompressed();
    identity[1] = 1;
    assert!(matches!(
        Affine::<C>::from_uncompressed(&identity),
        Err(Error::MalformedEncoding { .. })
    ));

    let mut bad = p.to_compressed();
    let last = bad.len() - 1;
    bad[last] = 2;
    assert!(matches!(
        Affine::<C>::from_compressed(&bad),
        Err(Error::MalformedEncoding { .. })
    ));

    // an abscissa with no point above it
    loop {
        let x = C::BaseField::random(rng);
        let rhs = x.square() * x + C::mul_by_a(&x) + C::COEFF_B;
        if rhs.legendre() == LegendreSymbol::QuadraticNonResidue {
            let mut bytes = vec![0x01];
            bytes.extend_from_slice(&x.to_bytes());
            bytes.push(0);
            assert!(matches!(
                Affine::<C>::from_compressed(&bytes),
                Err(Error::NotASquare { .. })
            ));
            break;
        }
    }

    let text = p.to_text();
    assert!(Affine::<C>::from_text(&text.replacen(' ', "  ", 1)).is_err());
    assert!(Affine::<C>::from_text(&format!("{}\n", text)).is_err());
    assert!(Affine::<C>::from_text(&text.replacen('1', "2", 1)).is_err());
    assert!(Affine::<C>::from_text(&off_curve.to_text()).is_err());
}

/// A curve point outside the prime-order subgroup decodes, but not through
/// the validated decoders
pub(crate) fn subgroup_rejection<C: SwCurveConfig>(rng: &mut impl RngCore)
where
    C::BaseField: SqrtField,
{
    let p = loop {
        if let Some(p) = Affine::<C>::from_x_and_sign(C::BaseField::random(rng), false) {
            break p;
        }
    };
    assert!(p.is_on_curve());
    assert!(!p.is_in_correct_subgroup());
    assert_eq!(Affine::<C>::from_compressed(&p.to_compressed()).unwrap(), p);
    assert!(matches!(
        Affine::<C>::from_compressed_validated(&p.to_compressed()),
        Err(Error::MalformedEncoding { .. })
    ));
    assert!(Affine::<C>::from_uncompressed_validated(&p.to_uncompressed()).is_err());
}

// ============================================================================
// Pairings
// ============================================================================

pub(crate) fn bilinearity<E: Pairing>(rng: &mut impl RngCore) {
    let p = G1Projective::<Config<E>>::random(rng).to_affine();
    let q = G2Projective::<Config<E>>::random(rng).to_affine();
    let s = Fr::<E>::random(rng);

    let e = E::pairing(&p, &q).unwrap();
    assert!(!e.is_identity());
    assert!(e.pow(Fr::<E>::MODULUS).is_identity());

    let es = e.pow_scalar(&s);
    assert_eq!(E::pairing(&(p * s).to_affine(), &q).unwrap(), es);
    assert_eq!(E::pairing(&p, &(q * s).to_affine()).unwrap(), es);
    assert_eq!(E::pairing(&-p, &q).unwrap(), e.inverse());
    assert_eq!(E::pairing(&p.into_projective().double().to_affine(), &q).unwrap(), e.square());

    assert!(E::pairing(&G1Affine::<Config<E>>::identity(), &q)
        .unwrap()
        .is_identity());
    assert!(E::pairing(&p, &G2Affine::<Config<E>>::identity())
        .unwrap()
        .is_identity());
}

pub(crate) fn generator_pairing<E: Pairing>() {
    let g1 = G1Affine::<Config<E>>::generator();
    let g2 = G2Affine::<Config<E>>::generator();
    let e = E::pairing(&g1, &g2).unwrap();
    assert!(!e.is_identity());
    assert!(e.pow(Fr::<E>::MODULUS).is_identity());

    let three = Fr::<E>::from_u64(3);
    assert_eq!(
        E::pairing(&(g1 * three).to_affine(), &g2).unwrap(),
        E::pairing(&g1, &(g2 * three).to_affine()).unwrap()
    );
}

pub(crate) fn miller_loop_products<E: Pairing>(rng: &mut impl RngCore) {
    let p1 = E::precompute_g1(&G1Projective::<Config<E>>::random(rng).to_affine());
    let q1 = E::precompute_g2(&G2Projective::<Config<E>>::random(rng).to_affine());
    let p2 = E::precompute_g1(&G1Projective::<Config<E>>::random(rng).to_affine());
    let q2 = E::precompute_g2(&G2Projective::<Config<E>>::random(rng).to_affine());
    let p3 = E::precompute_g1(&G1Projective::<Config<E>>::random(rng).to_affine());
    let q3 = E::precompute_g2(&G2Projective::<Config<E>>::random(rng).to_affine());

    assert_eq!(q1.coeffs().len(), G2Precomp::<Config<E>>::expected_len());

    let f1 = E::miller_loop(&p1, &q1);
    let f2 = E::miller_loop(&p2, &q2);
    let f3 = E::miller_loop(&p3, &q3);
    assert_eq!(E::double_miller_loop(&p1, &q1, &p2, &q2), f1 * f2);
    assert_eq!(
        E::multi_miller_loop(&[(&p1, &q1), (&p2, &q2), (&p3, &q3)]),
        f1 * f2 * f3
    );

    let g1_identity = E::precompute_g1(&G1Affine::<Config<E>>::identity());
    let g2_identity = E::precompute_g2(&G2Affine::<Config<E>>::identity());
    assert!(g2_identity.coeffs().is_empty());
    assert!(E::miller_loop(&g1_identity, &q1).is_one());
    assert!(E::miller_loop(&p1, &g2_identity).is_one());
    assert_eq!(E::double_miller_loop(&p1, &q1, &g1_identity, &q2), f1);
    assert!(E::multi_miller_loop(&[]).is_one());
}

/// The final exponentiation equals `f^(m (p^k - 1) / r)` for the chain's
/// multiplier m
pub(crate) fn final_exponentiation_reference<E: Pairing>(
    multiplier: &BigUint,
    rng: &mut impl RngCore,
) {
    let p = modulus::<Fp<E>>();
    let r = modulus::<Fr<E>>();
    let k = <Config<E> as PairingConfig>::EMBEDDING_DEGREE as u32;
    let exponent = (p.pow(k) - 1u32) / &r * multiplier;

    let f = Fqk::<E>::random(rng);
    let expected = f.pow(exponent.to_u64_digits());
    assert_eq!(E::final_exponentiation(&f).unwrap().value(), &expected);

    assert!(matches!(
        E::final_exponentiation(&Fqk::<E>::ZERO),
        Err(Error::DivisionByZero { .. })
    ));
}

/// Granger-Scott squaring and conjugation on the cyclotomic subgroup
pub(crate) fn cyclotomic<E: Pairing>(rng: &mut impl RngCore) {
    let f = Fqk::<E>::random(rng);
    let g = final_exponentiation_easy::<Config<E>>(&f).unwrap();
    assert_eq!(g.cyclotomic_square(), g.square());
    assert!((g.unitary_inverse() * g).is_one());
    assert_eq!(g.cyclotomic_exp([0x1234_5678_9abc_def1u64]), g.pow([0x1234_5678_9abc_def1u64]));
    assert!(g.cyclotomic_exp([0u64]).is_one());
}

pub(crate) fn precomp_text<E: Pairing>(rng: &mut impl RngCore) {
    let q = G2Projective::<Config<E>>::random(rng).to_affine();
    let pre = E::precompute_g2(&q);
    let text = pre.to_text();
    assert_eq!(G2Precomp::<Config<E>>::from_text(&text).unwrap(), pre);
    assert_eq!(pre.point(), q);

    // one coefficient short, with a matching length prefix
    let n = G2Precomp::<Config<E>>::expected_len();
    let cut = text.rfind('\n').unwrap();
    let short = text[..cut].replacen(&format!("\n{}\n", n), &format!("\n{}\n", n - 1), 1);
    assert!(matches!(
        G2Precomp::<Config<E>>::from_text(&short),
        Err(Error::MalformedEncoding { .. })
    ));
    assert!(G2Precomp::<Config<E>>::from_text(&text[..cut]).is_err());
    assert!(G2Precomp::<Config<E>>::from_text(&format!("{}\n", text)).is_err());

    let identity = E::precompute_g2(&G2Affine::<Config<E>>::identity());
    assert_eq!(
        G2Precomp::<Config<E>>::from_text(&identity.to_text()).unwrap(),
        identity
    );

    let p = E::precompute_g1(&G1Projective::<Config<E>>::random(rng).to_affine());
    assert_eq!(G1Precomp::<Config<E>>::from_text(&p.to_text()).unwrap(), p);
}

pub(crate) fn gt_encodings<E: Pairing>(rng: &mut impl RngCore) {
    let p = G1Projective::<Config<E>>::random(rng).to_affine();
    let q = G2Projective::<Config<E>>::random(rng).to_affine();
    let e = E::pairing(&p, &q).unwrap();

    assert_eq!(Gt::<Config<E>>::from_bytes(&e.to_bytes()).unwrap(), e);
    assert_eq!(Gt::<Config<E>>::from_text(&e.to_text()).unwrap(), e);
    assert_eq!(e.frobenius_map(1), e.pow(modulus::<Fp<E>>().to_u64_digits()));
    assert_eq!(e * Gt::identity(), e);
    assert!((e * e.inverse()).is_identity());

    let outside = Fqk::<E>::random(rng);
    assert!(matches!(
        Gt::<Config<E>>::from_bytes(&outside.to_bytes()),
        Err(Error::MalformedEncoding { .. })
    ));
}

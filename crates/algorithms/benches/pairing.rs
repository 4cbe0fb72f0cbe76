//! Benchmarks for the pairing engines
//!
//! G2 preparation, Miller loop, final exponentiation and the full pairing
//! for every curve, plus a four-pair multi-pairing to show the shared
//! squarings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dpairing_algorithms::curves::{bls12_377, bls12_381, bn254, bw6_761, mnt4_298, mnt6_298};
use dpairing_algorithms::pairing::{G1Projective, G2Projective};
use dpairing_algorithms::Pairing;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_engine<E: Pairing>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let p = G1Projective::<E::Config>::random(&mut rng).to_affine();
    let q = G2Projective::<E::Config>::random(&mut rng).to_affine();
    let p_pre = E::precompute_g1(&p);
    let q_pre = E::precompute_g2(&q);
    let f = E::miller_loop(&p_pre, &q_pre);

    group.bench_function("precompute_g2", |b| b.iter(|| E::precompute_g2(black_box(&q))));
    group.bench_function("miller_loop", |b| {
        b.iter(|| E::miller_loop(black_box(&p_pre), black_box(&q_pre)))
    });
    group.bench_function("final_exponentiation", |b| {
        b.iter(|| E::final_exponentiation(black_box(&f)))
    });
    group.bench_function("pairing", |b| {
        b.iter(|| E::pairing(black_box(&p), black_box(&q)))
    });

    let pairs: Vec<_> = (0..4)
        .map(|_| {
            (
                G1Projective::<E::Config>::random(&mut rng).to_affine(),
                G2Projective::<E::Config>::random(&mut rng).to_affine(),
            )
        })
        .collect();
    group.bench_function("multi_pairing_4", |b| {
        b.iter(|| E::multi_pairing(black_box(&pairs)))
    });

    group.finish();
}

fn bench_pairings(c: &mut Criterion) {
    bench_engine::<bn254::Bn254>(c, "bn254");
    bench_engine::<bls12_381::Bls12_381>(c, "bls12_381");
    bench_engine::<bls12_377::Bls12_377>(c, "bls12_377");
    bench_engine::<bw6_761::Bw6_761>(c, "bw6_761");
    bench_engine::<mnt4_298::Mnt4_298>(c, "mnt4_298");
    bench_engine::<mnt6_298::Mnt6_298>(c, "mnt6_298");
}

criterion_group!(benches, bench_pairings);
criterion_main!(benches);

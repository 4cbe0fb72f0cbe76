//! Benchmarks for field arithmetic
//!
//! Multiplication, squaring and inversion in the base field and the target
//! field of each curve, plus the specialised target-field operations the
//! pairing relies on.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dpairing_algorithms::curves::{bls12_377, bls12_381, bn254, bw6_761, mnt4_298, mnt6_298};
use dpairing_algorithms::{Field, QuadraticTarget, SexticTarget, TargetField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Multiplication, squaring and inversion of one field
fn bench_field<F: Field>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let a = F::random(&mut rng);
    let b = F::random(&mut rng);

    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("square", |bench| bench.iter(|| black_box(a).square()));
    group.bench_function("inverse", |bench| bench.iter(|| black_box(a).inverse()));
    group.bench_function("frobenius", |bench| {
        bench.iter(|| black_box(a).frobenius_map(1))
    });

    group.finish();
}

/// Sparse line multiplication and cyclotomic squaring
fn bench_target<F: SexticTarget>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let f = F::random(&mut rng);
    let c0 = F::LineField::random(&mut rng);
    let c1 = F::LineField::random(&mut rng);
    let c2 = F::LineField::random(&mut rng);

    group.bench_function("mul_by_024", |bench| {
        bench.iter(|| {
            let mut g = black_box(f);
            g.mul_by_024(&c0, &c1, &c2);
            g
        })
    });
    group.bench_function("mul_by_045", |bench| {
        bench.iter(|| {
            let mut g = black_box(f);
            g.mul_by_045(&c0, &c1, &c2);
            g
        })
    });
    group.bench_function("cyclotomic_square", |bench| {
        bench.iter(|| black_box(f).cyclotomic_square())
    });

    group.finish();
}

/// Dense line multiplication and cyclotomic squaring of a quadratic twist
fn bench_quadratic_target<F: QuadraticTarget>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let f = F::random(&mut rng);
    let c0 = F::BaseField::random(&mut rng);
    let c1 = F::BaseField::random(&mut rng);

    group.bench_function("mul_by_line", |bench| {
        bench.iter(|| {
            let mut g = black_box(f);
            g.mul_by_line(&c0, &c1);
            g
        })
    });
    group.bench_function("cyclotomic_square", |bench| {
        bench.iter(|| black_box(f).cyclotomic_square())
    });

    group.finish();
}

fn bench_base_fields(c: &mut Criterion) {
    bench_field::<bn254::Fq>(c, "bn254_fq");
    bench_field::<bls12_381::Fq>(c, "bls12_381_fq");
    bench_field::<bls12_377::Fq>(c, "bls12_377_fq");
    bench_field::<bw6_761::Fq>(c, "bw6_761_fq");
    bench_field::<mnt4_298::Fq>(c, "mnt4_298_fq");
}

fn bench_extension_fields(c: &mut Criterion) {
    bench_field::<bn254::Fq2>(c, "bn254_fq2");
    bench_field::<bn254::Fq12>(c, "bn254_fq12");
    bench_field::<bls12_381::Fq2>(c, "bls12_381_fq2");
    bench_field::<bls12_381::Fq12>(c, "bls12_381_fq12");
    bench_field::<bw6_761::Fq6>(c, "bw6_761_fq6");
    bench_field::<mnt4_298::Fq4>(c, "mnt4_298_fq4");
    bench_field::<mnt6_298::Fq3>(c, "mnt6_298_fq3");
    bench_field::<mnt6_298::Fq6>(c, "mnt6_298_fq6");
}

fn bench_target_fields(c: &mut Criterion) {
    bench_target::<bn254::Fq12>(c, "bn254_fq12_sparse");
    bench_target::<bls12_381::Fq12>(c, "bls12_381_fq12_sparse");
    bench_target::<bw6_761::Fq6>(c, "bw6_761_fq6_sparse");
    bench_quadratic_target::<mnt4_298::Fq4>(c, "mnt4_298_fq4_line");
    bench_quadratic_target::<mnt6_298::Fq6>(c, "mnt6_298_fq6_line");
}

criterion_group!(
    benches,
    bench_base_fields,
    bench_extension_fields,
    bench_target_fields
);
criterion_main!(benches);

//! Shared fixtures for the dpairing integration tests
//!
//! Every test draws its randomness from a seeded ChaCha20 stream so that a
//! failure reproduces from the seed alone.

use dpairing_algorithms::pairing::{G1Affine, G1Projective, G2Affine, G2Projective};
use dpairing_algorithms::{Field, Gt, Pairing, PairingConfig, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Scalar field of an engine
pub type Scalar<E> = <<E as Pairing>::Config as PairingConfig>::Fr;

/// Deterministic generator for a seed
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// A random G1 point and a random G2 point
pub fn random_pair<E: Pairing>(rng: &mut ChaCha20Rng) -> (G1Affine<E::Config>, G2Affine<E::Config>) {
    (
        G1Projective::<E::Config>::random(rng).to_affine(),
        G2Projective::<E::Config>::random(rng).to_affine(),
    )
}

/// Two proofs `(A_i, B_i, C_i)` against one verification key
/// `(VKx, VKy, VKz)`, satisfying `a_i b_i - vkx vky = c_i vkz`.
pub struct BatchInstance<E: Pairing> {
    /// `A_1, A_2` in G1
    pub a: [G1Affine<E::Config>; 2],
    /// `B_1, B_2` in G2
    pub b: [G2Affine<E::Config>; 2],
    /// `C_1, C_2` in G1
    pub c: [G1Affine<E::Config>; 2],
    /// `VKx` in G1
    pub vk_x: G1Affine<E::Config>,
    /// `VKy` in G2
    pub vk_y: G2Affine<E::Config>,
    /// `VKz` in G2
    pub vk_z: G2Affine<E::Config>,
}

impl<E: Pairing> BatchInstance<E> {
    /// Samples a valid instance
    pub fn random(rng: &mut ChaCha20Rng) -> Result<Self> {
        let g1 = G1Affine::<E::Config>::generator();
        let g2 = G2Affine::<E::Config>::generator();

        let vk_x = Scalar::<E>::random(rng);
        let vk_y = Scalar::<E>::random(rng);
        let vk_z = Scalar::<E>::random(rng);
        let vk_z_inv = vk_z.inverse()?;

        let mut a = [g1; 2];
        let mut b = [g2; 2];
        let mut c = [g1; 2];
        for i in 0..2 {
            let ai = Scalar::<E>::random(rng);
            let bi = Scalar::<E>::random(rng);
            let ci = (ai * bi - vk_x * vk_y) * vk_z_inv;
            a[i] = (g1 * ai).to_affine();
            b[i] = (g2 * bi).to_affine();
            c[i] = (g1 * ci).to_affine();
        }

        Ok(BatchInstance {
            a,
            b,
            c,
            vk_x: (g1 * vk_x).to_affine(),
            vk_y: (g2 * vk_y).to_affine(),
            vk_z: (g2 * vk_z).to_affine(),
        })
    }

    /// `e(A_1, B_1) e(A_2, B_2)`
    pub fn lhs(&self) -> Result<Gt<E::Config>> {
        E::multi_pairing(&[(self.a[0], self.b[0]), (self.a[1], self.b[1])])
    }

    /// `e(2 VKx, VKy) e(C_1 + C_2, VKz)`
    pub fn rhs(&self) -> Result<Gt<E::Config>> {
        let two_vk_x = self.vk_x.into_projective().double().to_affine();
        let c_sum = (self.c[0] + self.c[1]).to_affine();
        E::multi_pairing(&[(two_vk_x, self.vk_y), (c_sum, self.vk_z)])
    }

    /// Batched check with both sides in one Miller loop product:
    /// `e(A_1, B_1) e(A_2, B_2) e(-2 VKx, VKy) e(-(C_1 + C_2), VKz) == 1`
    pub fn verify(&self) -> Result<bool> {
        let two_vk_x = self.vk_x.into_projective().double().to_affine();
        let c_sum = (self.c[0] + self.c[1]).to_affine();
        let pairs = [
            (self.a[0], self.b[0]),
            (self.a[1], self.b[1]),
            (-two_vk_x, self.vk_y),
            (-c_sum, self.vk_z),
        ];
        Ok(E::multi_pairing(&pairs)?.is_identity())
    }
}

//! Homogeneous projective coordinates (X:Y:Z) where x = X/Z and y = Y/Z
//!
//! Arithmetic uses the complete formulas of Renes, Costello and Batina,
//! "Complete addition formulas for prime order elliptic curves"
//! (<https://eprint.iacr.org/2015/1060.pdf>), for arbitrary a.

use super::{Affine, CoordinateSystem, Projective, SwCurveConfig};
use crate::field::Field;

/// Homogeneous projective coordinates
pub struct Homogeneous;

impl CoordinateSystem for Homogeneous {
    fn double<C: SwCurveConfig>(p: &Projective<C>) -> Projective<C> {
        // Algorithm 3
        let t0 = p.x.square();
        let t1 = p.y.square();
        let t2 = p.z.square();
        let t3 = (p.x * p.y).double();
        let z3 = (p.x * p.z).double();
        let x3 = C::mul_by_a(&z3);
        let y3 = C::mul_by_3b(&t2);
        let y3 = x3 + y3;
        let x3 = t1 - y3;
        let y3 = t1 + y3;
        let y3 = x3 * y3;
        let x3 = t3 * x3;
        let z3 = C::mul_by_3b(&z3);
        let t2 = C::mul_by_a(&t2);
        let t3 = t0 - t2;
        let t3 = C::mul_by_a(&t3);
        let t3 = t3 + z3;
        let z3 = t0.double();
        let t0 = z3 + t0;
        let t0 = t0 + t2;
        let t0 = t0 * t3;
        let y3 = y3 + t0;
        let t2 = (p.y * p.z).double();
        let t0 = t2 * t3;
        let x3 = x3 - t0;
        let z3 = t2 * t1;
        let z3 = z3.double().double();

        Projective::new_unchecked(x3, y3, z3)
    }

    fn add<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> Projective<C> {
        // Algorithm 1
        let t0 = p.x * q.x;
        let t1 = p.y * q.y;
        let t2 = p.z * q.z;
        let t3 = (p.x + p.y) * (q.x + q.y);
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = (p.x + p.z) * (q.x + q.z);
        let t5 = t0 + t2;
        let t4 = t4 - t5;
        let t5 = (p.y + p.z) * (q.y + q.z);
        let x3 = t1 + t2;
        let t5 = t5 - x3;
        let z3 = C::mul_by_a(&t4);
        let x3 = C::mul_by_3b(&t2);
        let z3 = x3 + z3;
        let x3 = t1 - z3;
        let z3 = t1 + z3;
        let y3 = x3 * z3;
        let t1 = t0.double() + t0;
        let t2 = C::mul_by_a(&t2);
        let t4 = C::mul_by_3b(&t4);
        let t1 = t1 + t2;
        let t2 = t0 - t2;
        let t2 = C::mul_by_a(&t2);
        let t4 = t4 + t2;
        let t0 = t1 * t4;
        let y3 = y3 + t0;
        let t0 = t5 * t4;
        let x3 = t3 * x3;
        let x3 = x3 - t0;
        let t0 = t3 * t1;
        let z3 = t5 * z3;
        let z3 = z3 + t0;

        Projective::new_unchecked(x3, y3, z3)
    }

    fn add_mixed<C: SwCurveConfig>(p: &Projective<C>, q: &Affine<C>) -> Projective<C> {
        // the affine identity has no (x, y, 1) representative
        if q.is_identity() {
            return *p;
        }

        // Algorithm 2
        let t0 = p.x * q.x;
        let t1 = p.y * q.y;
        let t3 = (q.x + q.y) * (p.x + p.y);
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = q.x * p.z + p.x;
        let t5 = q.y * p.z + p.y;
        let z3 = C::mul_by_a(&t4);
        let x3 = C::mul_by_3b(&p.z);
        let z3 = x3 + z3;
        let x3 = t1 - z3;
        let z3 = t1 + z3;
        let y3 = x3 * z3;
        let t1 = t0.double() + t0;
        let t2 = C::mul_by_a(&p.z);
        let t4 = C::mul_by_3b(&t4);
        let t1 = t1 + t2;
        let t2 = t0 - t2;
        let t2 = C::mul_by_a(&t2);
        let t4 = t4 + t2;
        let t0 = t1 * t4;
        let y3 = y3 + t0;
        let t0 = t5 * t4;
        let x3 = t3 * x3;
        let x3 = x3 - t0;
        let t0 = t3 * t1;
        let z3 = t5 * z3;
        let z3 = z3 + t0;

        Projective::new_unchecked(x3, y3, z3)
    }

    fn normalize<C: SwCurveConfig>(
        p: &Projective<C>,
        z_inv: &C::BaseField,
    ) -> (C::BaseField, C::BaseField) {
        (p.x * z_inv, p.y * z_inv)
    }

    fn eq<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> bool {
        p.x * q.z == q.x * p.z && p.y * q.z == q.y * p.z
    }

    /// Y^2 Z = X^3 + a X Z^2 + b Z^3
    fn is_on_curve<C: SwCurveConfig>(p: &Projective<C>) -> bool {
        if p.is_identity() {
            return true;
        }
        let z2 = p.z.square();
        let rhs = p.x.square() * p.x + C::mul_by_a(&(p.x * z2)) + C::COEFF_B * z2 * p.z;
        p.y.square() * p.z == rhs
    }
}

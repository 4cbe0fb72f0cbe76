//! Jacobian coordinates (X:Y:Z) where x = X/Z² and y = Y/Z³

use super::{Affine, CoordinateSystem, Projective, SwCurveConfig};
use crate::field::Field;

/// Jacobian projective coordinates
pub struct Jacobian;

impl CoordinateSystem for Jacobian {
    /// dbl-2007-bl
    fn double<C: SwCurveConfig>(p: &Projective<C>) -> Projective<C> {
        if p.is_identity() {
            return *p;
        }

        let xx = p.x.square();
        let yy = p.y.square();
        let yyyy = yy.square();
        let zz = p.z.square();

        // S = 2((X + YY)^2 - XX - YYYY)
        let s = ((p.x + yy).square() - xx - yyyy).double();
        // M = 3XX + a ZZ^2
        let m = xx.double() + xx + C::mul_by_a(&zz.square());
        let t = m.square() - s.double();

        let x3 = t;
        let y3 = m * (s - t) - yyyy.double().double().double();
        let z3 = (p.y + p.z).square() - yy - zz;

        Projective::new_unchecked(x3, y3, z3)
    }

    /// add-2007-bl
    fn add<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> Projective<C> {
        if p.is_identity() {
            return *q;
        }
        if q.is_identity() {
            return *p;
        }

        let z1z1 = p.z.square();
        let z2z2 = q.z.square();
        let u1 = p.x * z2z2;
        let u2 = q.x * z1z1;
        let s1 = p.y * q.z * z2z2;
        let s2 = q.y * p.z * z1z1;

        if u1 == u2 {
            return if s1 == s2 {
                Self::double(p)
            } else {
                Projective::identity()
            };
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((p.z + q.z).square() - z1z1 - z2z2) * h;

        Projective::new_unchecked(x3, y3, z3)
    }

    /// madd-2007-bl
    fn add_mixed<C: SwCurveConfig>(p: &Projective<C>, q: &Affine<C>) -> Projective<C> {
        if q.is_identity() {
            return *p;
        }
        if p.is_identity() {
            return Projective::from(*q);
        }

        let z1z1 = p.z.square();
        let u2 = q.x * z1z1;
        let s2 = q.y * p.z * z1z1;
        let h = u2 - p.x;
        let r = (s2 - p.y).double();

        if h.is_zero() {
            return if r.is_zero() {
                Self::double(p)
            } else {
                Projective::identity()
            };
        }

        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let v = p.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (p.y * j).double();
        let z3 = (p.z + h).square() - z1z1 - hh;

        Projective::new_unchecked(x3, y3, z3)
    }

    fn normalize<C: SwCurveConfig>(
        p: &Projective<C>,
        z_inv: &C::BaseField,
    ) -> (C::BaseField, C::BaseField) {
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;
        (p.x * z_inv2, p.y * z_inv3)
    }

    fn eq<C: SwCurveConfig>(p: &Projective<C>, q: &Projective<C>) -> bool {
        let z1z1 = p.z.square();
        let z2z2 = q.z.square();
        p.x * z2z2 == q.x * z1z1 && p.y * (z2z2 * q.z) == q.y * (z1z1 * p.z)
    }

    /// Y^2 = X^3 + a X Z^4 + b Z^6
    fn is_on_curve<C: SwCurveConfig>(p: &Projective<C>) -> bool {
        if p.is_identity() {
            return true;
        }
        let z2 = p.z.square();
        let z4 = z2.square();
        let z6 = z4 * z2;
        let rhs = p.x.square() * p.x + C::mul_by_a(&(p.x * z4)) + C::COEFF_B * z6;
        p.y.square() == rhs
    }
}

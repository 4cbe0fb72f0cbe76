//! Operator boilerplate shared by the field element types.
//!
//! Each type implements `Neg`, `AddAssign<&Self>`, `SubAssign<&Self>` and
//! `MulAssign<&Self>` by hand; the macro derives the owned and borrowed
//! variants from those.

macro_rules! impl_field_ops {
    (impl[$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> core::ops::Add<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn add(mut self, rhs: $ty) -> $ty {
                self += &rhs;
                self
            }
        }

        impl<'b, $($gen)*> core::ops::Add<&'b $ty> for $ty {
            type Output = $ty;

            #[inline]
            fn add(mut self, rhs: &'b $ty) -> $ty {
                self += rhs;
                self
            }
        }

        impl<'a, 'b, $($gen)*> core::ops::Add<&'b $ty> for &'a $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: &'b $ty) -> $ty {
                let mut out = *self;
                out += rhs;
                out
            }
        }

        impl<$($gen)*> core::ops::AddAssign<$ty> for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                *self += &rhs;
            }
        }

        impl<$($gen)*> core::ops::Sub<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn sub(mut self, rhs: $ty) -> $ty {
                self -= &rhs;
                self
            }
        }

        impl<'b, $($gen)*> core::ops::Sub<&'b $ty> for $ty {
            type Output = $ty;

            #[inline]
            fn sub(mut self, rhs: &'b $ty) -> $ty {
                self -= rhs;
                self
            }
        }

        impl<'a, 'b, $($gen)*> core::ops::Sub<&'b $ty> for &'a $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: &'b $ty) -> $ty {
                let mut out = *self;
                out -= rhs;
                out
            }
        }

        impl<$($gen)*> core::ops::SubAssign<$ty> for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                *self -= &rhs;
            }
        }

        impl<$($gen)*> core::ops::Mul<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(mut self, rhs: $ty) -> $ty {
                self *= &rhs;
                self
            }
        }

        impl<'b, $($gen)*> core::ops::Mul<&'b $ty> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(mut self, rhs: &'b $ty) -> $ty {
                self *= rhs;
                self
            }
        }

        impl<'a, 'b, $($gen)*> core::ops::Mul<&'b $ty> for &'a $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: &'b $ty) -> $ty {
                let mut out = *self;
                out *= rhs;
                out
            }
        }

        impl<$($gen)*> core::ops::MulAssign<$ty> for $ty {
            #[inline]
            fn mul_assign(&mut self, rhs: $ty) {
                *self *= &rhs;
            }
        }

        impl<'a, $($gen)*> core::ops::Neg for &'a $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                -*self
            }
        }

        impl<$($gen)*> core::iter::Sum for $ty {
            fn sum<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::field::Field>::ZERO, |acc, x| acc + x)
            }
        }

        impl<$($gen)*> core::iter::Product for $ty {
            fn product<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::field::Field>::ONE, |acc, x| acc * x)
            }
        }
    };
}

//! `std::ops` implementations for `Taylor<C>` and `TaylorN<T>`.
//!
//! Division can fail, so `Div` yields `Result<_, SeriesError>`.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;
use crate::taylor_ops;

fn assert_same_order(lhs: usize, rhs: usize) {
    assert_eq!(lhs, rhs, "operands must share one truncation order");
}

// ══════════════════════════════════════════════
//  Series ↔ series
// ══════════════════════════════════════════════

macro_rules! impl_series_ops {
    ($series:ty, [$($bounds:tt)*], $field:ident) => {
        impl<$($bounds)*> Add for $series {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                &self + &rhs
            }
        }

        impl<'a, $($bounds)*> Add for &'a $series {
            type Output = $series;
            fn add(self, rhs: Self) -> $series {
                assert_same_order(self.order(), rhs.order());
                let mut c = self.zero_like_order(self.order());
                taylor_ops::taylor_add(&self.$field, &rhs.$field, &mut c.$field);
                c
            }
        }

        impl<$($bounds)*> Sub for $series {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                &self - &rhs
            }
        }

        impl<'a, $($bounds)*> Sub for &'a $series {
            type Output = $series;
            fn sub(self, rhs: Self) -> $series {
                assert_same_order(self.order(), rhs.order());
                let mut c = self.zero_like_order(self.order());
                taylor_ops::taylor_sub(&self.$field, &rhs.$field, &mut c.$field);
                c
            }
        }

        // Cauchy product; the kernel adds as well as multiplies.
        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<$($bounds)*> Mul for $series {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                &self * &rhs
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<'a, $($bounds)*> Mul for &'a $series {
            type Output = $series;
            #[inline]
            fn mul(self, rhs: Self) -> $series {
                assert_same_order(self.order(), rhs.order());
                self.mul_series(rhs)
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<$($bounds)*> Div for $series {
            type Output = Result<Self, SeriesError>;
            #[inline]
            fn div(self, rhs: Self) -> Result<Self, SeriesError> {
                assert_same_order(self.order(), rhs.order());
                self.div_series(&rhs)
            }
        }

        impl<$($bounds)*> Neg for $series {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                let mut c = self.zero_like_order(self.order());
                taylor_ops::taylor_neg(&self.$field, &mut c.$field);
                c
            }
        }

        impl<$($bounds)*> AddAssign for $series {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                assert_same_order(self.order(), rhs.order());
                self.add_from(&rhs);
            }
        }

        impl<$($bounds)*> SubAssign for $series {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                assert_same_order(self.order(), rhs.order());
                self.sub_from(&rhs);
            }
        }

        impl<$($bounds)*> MulAssign for $series {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = &*self * &rhs;
            }
        }
    };
}

impl_series_ops!(Taylor<C>, [C: Coefficient], coeffs);
impl_series_ops!(TaylorN<T>, [T: Real], polys);

// ══════════════════════════════════════════════
//  Mixed ops: Taylor<F> with primitive floats
// ══════════════════════════════════════════════

macro_rules! impl_taylor_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for Taylor<$f> {
            type Output = Taylor<$f>;
            #[inline]
            fn add(mut self, rhs: $f) -> Taylor<$f> {
                self.coeffs[0] += rhs;
                self
            }
        }

        impl Add<Taylor<$f>> for $f {
            type Output = Taylor<$f>;
            #[inline]
            fn add(self, rhs: Taylor<$f>) -> Taylor<$f> {
                rhs + self
            }
        }

        impl Sub<$f> for Taylor<$f> {
            type Output = Taylor<$f>;
            #[inline]
            fn sub(mut self, rhs: $f) -> Taylor<$f> {
                self.coeffs[0] -= rhs;
                self
            }
        }

        impl Mul<$f> for Taylor<$f> {
            type Output = Taylor<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Taylor<$f> {
                self.scale(&rhs)
            }
        }

        impl Mul<Taylor<$f>> for $f {
            type Output = Taylor<$f>;
            #[inline]
            fn mul(self, rhs: Taylor<$f>) -> Taylor<$f> {
                rhs.scale(&self)
            }
        }
    };
}

impl_taylor_scalar_ops!(f32);
impl_taylor_scalar_ops!(f64);

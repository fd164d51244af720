//! The [`Real`] trait: scalar fields a series can be built over.
//!
//! Floats (`f32`, `f64`) and exact rationals (`Ratio<i64>`) implement it.
//! Every `Real` is also a [`Coefficient`], so flat series over plain numbers
//! and series of series share one code path.

use std::fmt::Display;
use std::ops::Neg;

use num_integer::Roots;
use num_rational::Ratio;
use num_traits::{Num, One, Zero};

use crate::coefficient::Coefficient;

/// Scalar field of a series.
///
/// Partial operations (`sqrt`, `powf`, `exp`, `ln`) return `None` when the
/// result does not exist in the field. For floats that means a negative
/// radicand or logarithm argument; for rationals it also covers irrational
/// results such as `sqrt(2)`.
pub trait Real: Coefficient<Real = Self> + PartialOrd + Display + Num + Neg<Output = Self> {
    /// `true` when arithmetic is exact, so `a^-n` may be taken as `1 / a^n`.
    const EXACT: bool;

    fn from_i64(n: i64) -> Self;

    /// Convert a float, approximating it if the field is not a float field.
    fn from_f64(x: f64) -> Option<Self>;

    fn to_f64(&self) -> f64;

    fn is_integer(&self) -> bool;

    /// The integer value, if `self` is an integer that fits in `i64`.
    fn to_i64(&self) -> Option<i64>;

    fn sqrt(&self) -> Option<Self>;

    fn powf(&self, r: &Self) -> Option<Self>;

    /// Integer power. Negative `n` requires `self != 0`.
    fn powi(&self, n: i32) -> Self;

    fn exp(&self) -> Option<Self>;

    fn ln(&self) -> Option<Self>;

    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::from_i64(n as i64)
    }

    /// `1/2`, the exponent routed to the square-root recurrence.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::from_i64(2)
    }
}

macro_rules! impl_real_float {
    ($($t:ty),* $(,)?) => {$(
        impl Real for $t {
            const EXACT: bool = false;

            #[inline]
            fn from_i64(n: i64) -> Self {
                n as $t
            }

            #[inline]
            fn from_f64(x: f64) -> Option<Self> {
                Some(x as $t)
            }

            #[inline]
            fn to_f64(&self) -> f64 {
                *self as f64
            }

            #[inline]
            fn is_integer(&self) -> bool {
                self.is_finite() && self.fract() == 0.0
            }

            #[inline]
            fn to_i64(&self) -> Option<i64> {
                if Real::is_integer(self) && self.abs() <= i64::MAX as $t {
                    Some(*self as i64)
                } else {
                    None
                }
            }

            #[inline]
            fn sqrt(&self) -> Option<Self> {
                if *self < 0.0 {
                    None
                } else {
                    Some(<$t>::sqrt(*self))
                }
            }

            #[inline]
            fn powf(&self, r: &Self) -> Option<Self> {
                if *self < 0.0 && !Real::is_integer(r) {
                    None
                } else {
                    Some(<$t>::powf(*self, *r))
                }
            }

            #[inline]
            fn powi(&self, n: i32) -> Self {
                <$t>::powi(*self, n)
            }

            #[inline]
            fn exp(&self) -> Option<Self> {
                Some(<$t>::exp(*self))
            }

            #[inline]
            fn ln(&self) -> Option<Self> {
                if *self < 0.0 {
                    None
                } else {
                    Some(<$t>::ln(*self))
                }
            }
        }
    )*};
}

impl_real_float!(f32, f64);

impl Real for Ratio<i64> {
    const EXACT: bool = true;

    #[inline]
    fn from_i64(n: i64) -> Self {
        Ratio::from_integer(n)
    }

    fn from_f64(x: f64) -> Option<Self> {
        Ratio::approximate_float(x)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self.numer() as f64 / *self.denom() as f64
    }

    #[inline]
    fn is_integer(&self) -> bool {
        Ratio::is_integer(self)
    }

    #[inline]
    fn to_i64(&self) -> Option<i64> {
        Ratio::is_integer(self).then(|| self.to_integer())
    }

    fn sqrt(&self) -> Option<Self> {
        exact_root(self, 2)
    }

    fn powf(&self, r: &Self) -> Option<Self> {
        let p = i32::try_from(*r.numer()).ok()?;
        let base = if Ratio::is_integer(r) {
            self.clone()
        } else {
            exact_root(self, u32::try_from(*r.denom()).ok()?)?
        };
        if p < 0 && Zero::is_zero(&base) {
            return None;
        }
        Some(Real::powi(&base, p))
    }

    fn powi(&self, n: i32) -> Self {
        let p = num_traits::pow(self.clone(), n.unsigned_abs() as usize);
        if n < 0 {
            p.recip()
        } else {
            p
        }
    }

    fn exp(&self) -> Option<Self> {
        Zero::is_zero(self).then(Self::one)
    }

    fn ln(&self) -> Option<Self> {
        self.is_one().then(Self::zero)
    }
}

/// Exact `n`-th root of a rational, when numerator and denominator are both
/// perfect powers.
fn exact_root(x: &Ratio<i64>, n: u32) -> Option<Ratio<i64>> {
    if *x.numer() < 0 && n % 2 == 0 {
        return None;
    }
    let num = Roots::nth_root(x.numer(), n);
    let den = Roots::nth_root(x.denom(), n);
    (num.pow(n) == *x.numer() && den.pow(n) == *x.denom()).then(|| Ratio::new(num, den))
}

//! Exponentiation dispatch.
//!
//! `pow` routes each exponent to the cheapest correct engine: trivial
//! exponents short-circuit, integer exponents go through repeated squaring,
//! `1/2` through the square-root recurrence, and everything else through the
//! real-exponent recurrence.

use log::trace;
use num_rational::Ratio;

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::power::power_by_squaring;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;

/// A scalar exponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exponent {
    Int(i64),
    Rational(Ratio<i64>),
    Real(f64),
}

impl From<i32> for Exponent {
    fn from(n: i32) -> Self {
        Exponent::Int(n.into())
    }
}

impl From<i64> for Exponent {
    fn from(n: i64) -> Self {
        Exponent::Int(n)
    }
}

impl From<u32> for Exponent {
    fn from(n: u32) -> Self {
        Exponent::Int(n.into())
    }
}

impl From<f64> for Exponent {
    fn from(x: f64) -> Self {
        Exponent::Real(x)
    }
}

impl From<Ratio<i64>> for Exponent {
    fn from(q: Ratio<i64>) -> Self {
        Exponent::Rational(q)
    }
}

/// Convert a float exponent into the coefficient field.
fn field_exponent<R: Real>(x: f64) -> Result<R, SeriesError> {
    R::from_f64(x).ok_or(SeriesError::ScalarDomain { operation: "power" })
}

/// `p/q` computed in the coefficient field.
fn field_ratio<R: Real>(q: Ratio<i64>) -> R {
    R::from_i64(*q.numer()) / R::from_i64(*q.denom())
}

macro_rules! impl_pow_dispatch {
    ($series:ty, [$($bounds:tt)*], $real:ty) => {
        impl<$($bounds)*> $series {
            /// `self^e` for any scalar exponent.
            pub fn pow(&self, e: impl Into<Exponent>) -> Result<Self, SeriesError> {
                match e.into() {
                    Exponent::Int(n) => self.powi(n),
                    Exponent::Rational(q) => self.pow_ratio(q),
                    Exponent::Real(x) => self.powf(x),
                }
            }

            /// Integer power.
            ///
            /// Negative powers need a nonvanishing constant term. Over exact
            /// fields they are taken as `1 / self^|n|`.
            pub fn powi(&self, n: i64) -> Result<Self, SeriesError> {
                match n {
                    0 => Ok(self.identity_like()),
                    1 => Ok(self.clone()),
                    2 => Ok(self.square()),
                    n if n < 0 => {
                        if <$real>::EXACT {
                            trace!("power {}: reciprocal of power by squaring", n);
                            power_by_squaring(self, n.saturating_neg()).recip()
                        } else {
                            trace!("power {}: real-exponent recurrence", n);
                            self.pow_real(&<$real>::from_i64(n))
                        }
                    }
                    n => {
                        trace!("power {}: power by squaring", n);
                        Ok(power_by_squaring(self, n))
                    }
                }
            }

            /// Rational power, with `p/q` evaluated in the coefficient field.
            pub fn pow_ratio(&self, q: Ratio<i64>) -> Result<Self, SeriesError> {
                if q.is_integer() {
                    return self.powi(q.to_integer());
                }
                self.pow_field(&field_ratio::<$real>(q))
            }

            /// Float power. Integer-valued exponents take the integer path.
            pub fn powf(&self, x: f64) -> Result<Self, SeriesError> {
                let r = field_exponent::<$real>(x)?;
                match r.to_i64() {
                    Some(n) => self.powi(n),
                    None => self.pow_field(&r),
                }
            }

            /// Non-integer power in the coefficient field.
            fn pow_field(&self, r: &$real) -> Result<Self, SeriesError> {
                if *r == <$real>::half() {
                    trace!("power 1/2: square root");
                    self.sqrt()
                } else {
                    trace!("power {}: real-exponent recurrence", r);
                    self.pow_real(r)
                }
            }

            /// `self^b = exp(b · ln(self))` for a series-valued exponent.
            ///
            /// The constant term of `self` must not vanish.
            pub fn pow_series(&self, b: &Self) -> Result<Self, SeriesError> {
                b.mul_series(&self.ln()?).exp()
            }
        }
    };
}

impl_pow_dispatch!(Taylor<C>, [C: Coefficient], C::Real);
impl_pow_dispatch!(TaylorN<T>, [T: Real], T);

//! Series as coefficients of other series.
//!
//! Implementing [`Coefficient`] for `Taylor<C>` and `TaylorN<T>` lets every
//! recurrence run on `Taylor<Taylor<f64>>`, `Taylor<TaylorN<f64>>` and deeper
//! nestings. Products recurse into the inner series' arithmetic; the
//! leading-coefficient operations (`try_sqrt`, `try_powf`, `try_div`,
//! `try_ln`) expand around the inner constant term, which must not vanish.

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::power::power_by_squaring;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;

fn assert_same_order(lhs: usize, rhs: usize) {
    assert_eq!(lhs, rhs, "nested coefficients must share one truncation order");
}

macro_rules! impl_series_coefficient {
    ($series:ty, [$($bounds:tt)*], $real:ty, $field:ident) => {
        impl<$($bounds)*> Coefficient for $series {
            type Real = $real;

            #[inline]
            fn zero_like(&self) -> Self {
                self.zero_like_order(self.order())
            }

            #[inline]
            fn one_like(&self) -> Self {
                self.identity_like()
            }

            #[inline]
            fn is_vanishing(&self) -> bool {
                self.is_zero()
            }

            fn clear(&mut self) {
                self.$field.iter_mut().for_each(Coefficient::clear);
            }

            fn add_from(&mut self, rhs: &Self) {
                assert_same_order(self.order(), rhs.order());
                for (c, r) in self.$field.iter_mut().zip(&rhs.$field) {
                    c.add_from(r);
                }
            }

            fn sub_from(&mut self, rhs: &Self) {
                assert_same_order(self.order(), rhs.order());
                for (c, r) in self.$field.iter_mut().zip(&rhs.$field) {
                    c.sub_from(r);
                }
            }

            fn negated(&self) -> Self {
                let mut c = self.clone();
                for ck in c.$field.iter_mut() {
                    *ck = ck.negated();
                }
                c
            }

            #[inline]
            fn mul_ref(&self, rhs: &Self) -> Self {
                self.mul_series(rhs)
            }

            fn mul_acc(&mut self, a: &Self, b: &Self) {
                assert_same_order(self.order(), a.order());
                assert_same_order(self.order(), b.order());
                for k in 0..self.$field.len() {
                    for j in 0..=k {
                        self.$field[k].mul_acc(&a.$field[j], &b.$field[k - j]);
                    }
                }
            }

            fn scale(&self, s: &$real) -> Self {
                let mut c = self.clone();
                c.scale_in_place(s);
                c
            }

            fn scale_in_place(&mut self, s: &$real) {
                for ck in self.$field.iter_mut() {
                    ck.scale_in_place(s);
                }
            }

            #[inline]
            fn squared(&self) -> Self {
                self.square()
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, SeriesError> {
                if rhs.$field[0].is_vanishing() {
                    return Err(SeriesError::ZeroConstantTerm { operation: "division" });
                }
                self.div_series(rhs)
            }

            fn try_sqrt(&self) -> Result<Self, SeriesError> {
                if self.$field[0].is_vanishing() {
                    return Err(SeriesError::ZeroConstantTerm { operation: "sqrt" });
                }
                self.sqrt()
            }

            fn try_powf(&self, r: &$real) -> Result<Self, SeriesError> {
                if let Some(n) = r.to_i64().filter(|&n| n >= 0) {
                    return Ok(power_by_squaring(self, n));
                }
                if self.$field[0].is_vanishing() {
                    return Err(SeriesError::ZeroConstantTerm { operation: "power" });
                }
                self.pow_real(r)
            }

            #[inline]
            fn try_exp(&self) -> Result<Self, SeriesError> {
                self.exp()
            }

            fn try_ln(&self) -> Result<Self, SeriesError> {
                if self.$field[0].is_vanishing() {
                    return Err(SeriesError::ZeroConstantTerm { operation: "ln" });
                }
                self.ln()
            }
        }
    };
}

impl_series_coefficient!(Taylor<C>, [C: Coefficient], C::Real, coeffs);
impl_series_coefficient!(TaylorN<T>, [T: Real], T, polys);

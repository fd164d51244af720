//! Coefficient capability interface.
//!
//! Every recurrence in this crate is written once against [`Coefficient`].
//! Scalars, homogeneous polynomials and whole series implement it, so a
//! recurrence over `Taylor<f64>`, `TaylorN<f64>` (keyed by degree) and
//! `Taylor<Taylor<f64>>` is the same code. Only the leading-coefficient
//! operations (`try_sqrt`, `try_powf`, ...) differ per shape.

use std::fmt::Debug;

use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::error::SeriesError;
use crate::real::Real;

/// An element of a coefficient sequence.
///
/// Binary operations never allocate a differently shaped value: a zero made
/// by [`zero_like`](Coefficient::zero_like) has the same inner order (for
/// series) or degree (for homogeneous polynomials) as its template.
pub trait Coefficient: Clone + PartialEq + Debug {
    /// Scalar field the coefficients are ultimately built over.
    type Real: Real;

    /// Additive identity shaped like `self`.
    fn zero_like(&self) -> Self;

    /// Multiplicative identity shaped like `self`.
    fn one_like(&self) -> Self;

    /// Exact zero test.
    fn is_vanishing(&self) -> bool;

    /// Reset to zero in place, keeping the shape (and allocation).
    #[inline]
    fn clear(&mut self) {
        *self = self.zero_like();
    }

    /// `self += rhs`
    fn add_from(&mut self, rhs: &Self);

    /// `self -= rhs`
    fn sub_from(&mut self, rhs: &Self);

    fn negated(&self) -> Self;

    fn mul_ref(&self, rhs: &Self) -> Self;

    /// `self += a * b`
    #[inline]
    fn mul_acc(&mut self, a: &Self, b: &Self) {
        let p = a.mul_ref(b);
        self.add_from(&p);
    }

    /// Multiply by a scalar of the underlying field.
    fn scale(&self, s: &Self::Real) -> Self;

    /// `self *= s`, keeping the allocation.
    #[inline]
    fn scale_in_place(&mut self, s: &Self::Real) {
        *self = self.scale(s);
    }

    #[inline]
    fn squared(&self) -> Self {
        self.mul_ref(self)
    }

    /// `self / rhs`. Fails when `rhs` cannot be inverted.
    fn try_div(&self, rhs: &Self) -> Result<Self, SeriesError>;

    fn try_sqrt(&self) -> Result<Self, SeriesError>;

    fn try_powf(&self, r: &Self::Real) -> Result<Self, SeriesError>;

    fn try_exp(&self) -> Result<Self, SeriesError>;

    fn try_ln(&self) -> Result<Self, SeriesError>;
}

/// Coefficients stored without nesting: scalars and homogeneous polynomials.
///
/// Only series over `Flat` coefficients can use the in-place
/// power-by-squaring engine.
pub trait Flat: Coefficient {}

/// A truncated series viewed as its coefficient sequence.
pub trait Series {
    type Coeff: Coefficient;

    fn coeffs(&self) -> &[Self::Coeff];

    fn coeffs_mut(&mut self) -> &mut [Self::Coeff];

    /// Truncation order (index of the last stored coefficient).
    #[inline]
    fn order(&self) -> usize {
        self.coeffs().len() - 1
    }
}

macro_rules! impl_real_coefficient {
    ($($t:ty),* $(,)?) => {$(
        impl Coefficient for $t {
            type Real = $t;

            #[inline]
            fn zero_like(&self) -> Self {
                <$t as Zero>::zero()
            }

            #[inline]
            fn one_like(&self) -> Self {
                <$t as One>::one()
            }

            #[inline]
            fn is_vanishing(&self) -> bool {
                Zero::is_zero(self)
            }

            #[inline]
            fn add_from(&mut self, rhs: &Self) {
                *self = self.clone() + rhs.clone();
            }

            #[inline]
            fn sub_from(&mut self, rhs: &Self) {
                *self = self.clone() - rhs.clone();
            }

            #[inline]
            fn negated(&self) -> Self {
                -self.clone()
            }

            #[inline]
            fn mul_ref(&self, rhs: &Self) -> Self {
                self.clone() * rhs.clone()
            }

            #[inline]
            fn scale(&self, s: &Self) -> Self {
                self.clone() * s.clone()
            }

            #[inline]
            fn try_div(&self, rhs: &Self) -> Result<Self, SeriesError> {
                if Zero::is_zero(rhs) {
                    return Err(SeriesError::ZeroConstantTerm { operation: "division" });
                }
                Ok(self.clone() / rhs.clone())
            }

            fn try_sqrt(&self) -> Result<Self, SeriesError> {
                Real::sqrt(self).ok_or(SeriesError::ScalarDomain { operation: "sqrt" })
            }

            fn try_powf(&self, r: &Self) -> Result<Self, SeriesError> {
                Real::powf(self, r).ok_or(SeriesError::ScalarDomain { operation: "power" })
            }

            fn try_exp(&self) -> Result<Self, SeriesError> {
                Real::exp(self).ok_or(SeriesError::ScalarDomain { operation: "exp" })
            }

            fn try_ln(&self) -> Result<Self, SeriesError> {
                Real::ln(self).ok_or(SeriesError::ScalarDomain { operation: "ln" })
            }
        }

        impl Flat for $t {}
    )*};
}

impl_real_coefficient!(f32, f64, Ratio<i64>);

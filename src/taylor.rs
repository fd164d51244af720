//! Flat univariate truncated series: `Taylor<C>`.
//!
//! `coeffs[k]` is the coefficient of `t^k`, for `k = 0..=order`. The order is
//! fixed at construction. `C` is any [`Coefficient`]: a scalar for a plain
//! series, or another series for a nested one (`Taylor<Taylor<f64>>`).
//!
//! Elemental collaborators (`recip`, `exp`, `ln`) delegate to `taylor_ops`;
//! power, square and square root live in their own modules.

use std::fmt::{self, Display};

use crate::coefficient::{Coefficient, Series};
use crate::error::SeriesError;
use crate::real::Real;
use crate::taylor_ops;

/// Truncated univariate series with a fixed order.
#[derive(Clone, Debug, PartialEq)]
pub struct Taylor<C> {
    pub(crate) coeffs: Vec<C>,
}

impl<C: Coefficient + Display> Display for Taylor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coeffs[0])?;
        for (i, c) in self.coeffs.iter().enumerate().skip(1) {
            write!(f, " + ({})·t^{}", c, i)?;
        }
        Ok(())
    }
}

impl<C: Coefficient> Series for Taylor<C> {
    type Coeff = C;

    #[inline]
    fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    #[inline]
    fn coeffs_mut(&mut self) -> &mut [C] {
        &mut self.coeffs
    }
}

impl<T: Real> Taylor<T> {
    /// The zero series of the given order.
    #[inline]
    pub fn zero(order: usize) -> Self {
        Taylor::constant(T::zero(), order)
    }

    /// The identity series `1` of the given order.
    #[inline]
    pub fn one(order: usize) -> Self {
        Taylor::constant(T::one(), order)
    }
}

impl<C: Coefficient> Taylor<C> {
    /// Create a series from raw coefficients; the order is `coeffs.len() - 1`.
    ///
    /// Panics if `coeffs` is empty. Nested coefficients must share one inner
    /// order.
    #[inline]
    pub fn new(coeffs: Vec<C>) -> Self {
        assert!(!coeffs.is_empty(), "a series needs at least one coefficient");
        Taylor { coeffs }
    }

    /// Series with `val` as constant term and zeros shaped like `val` above it.
    pub fn constant(val: C, order: usize) -> Self {
        let zero = val.zero_like();
        let mut coeffs = Vec::with_capacity(order + 1);
        coeffs.push(val);
        coeffs.resize(order + 1, zero);
        Taylor { coeffs }
    }

    /// The independent variable expanded around `val`: `val + t`.
    pub fn variable(val: C, order: usize) -> Self {
        let one = val.one_like();
        let mut t = Taylor::constant(val, order);
        if order > 0 {
            t.coeffs[1] = one;
        }
        t
    }

    /// Zero series of `order`, with coefficients shaped like this one's.
    #[inline]
    pub fn zero_like_order(&self, order: usize) -> Self {
        Taylor {
            coeffs: vec![self.coeffs[0].zero_like(); order + 1],
        }
    }

    /// Identity series (multiplicative unit) with this series' order.
    #[inline]
    pub fn identity_like(&self) -> Self {
        Taylor::constant(self.coeffs[0].one_like(), self.order())
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of `t^k`.
    #[inline]
    pub fn coeff(&self, k: usize) -> &C {
        &self.coeffs[k]
    }

    #[inline]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    #[inline]
    pub fn coeffs_mut(&mut self) -> &mut [C] {
        &mut self.coeffs
    }

    #[inline]
    pub fn into_coeffs(self) -> Vec<C> {
        self.coeffs
    }

    /// Index of the first non-vanishing coefficient, `None` for the zero series.
    #[inline]
    pub fn leading_index(&self) -> Option<usize> {
        self.coeffs.iter().position(|c| !c.is_vanishing())
    }

    /// Index of the last non-vanishing coefficient, `None` for the zero series.
    #[inline]
    pub fn last_nonzero_index(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_vanishing())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.leading_index().is_none()
    }

    // ── Elemental collaborators ──

    /// `1 / self`. The constant term must not vanish.
    pub fn recip(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_recip(&self.coeffs, &mut c.coeffs)?;
        Ok(c)
    }

    pub fn exp(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_exp(&self.coeffs, &mut c.coeffs)?;
        Ok(c)
    }

    /// Natural logarithm. The constant term must not vanish.
    pub fn ln(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_ln(&self.coeffs, &mut c.coeffs)?;
        Ok(c)
    }

    /// Truncated Cauchy product.
    pub fn mul_series(&self, rhs: &Self) -> Self {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_mul(&self.coeffs, &rhs.coeffs, &mut c.coeffs);
        c
    }

    /// `self / rhs` by recursive division.
    pub fn div_series(&self, rhs: &Self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_div(&self.coeffs, &rhs.coeffs, &mut c.coeffs)?;
        Ok(c)
    }
}

#[cfg(feature = "serde")]
mod taylor_serde {
    use super::Taylor;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<C: Serialize> Serialize for Taylor<C> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut s = serializer.serialize_struct("Taylor", 1)?;
            s.serialize_field("coeffs", &self.coeffs)?;
            s.end()
        }
    }

    impl<'de, C: Deserialize<'de>> Deserialize<'de> for Taylor<C> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct TaylorData<C> {
                coeffs: Vec<C>,
            }

            let data = TaylorData::<C>::deserialize(deserializer)?;
            if data.coeffs.is_empty() {
                return Err(serde::de::Error::invalid_length(
                    0,
                    &"at least one coefficient",
                ));
            }
            Ok(Taylor { coeffs: data.coeffs })
        }
    }
}

//! Multivariate truncated series: `TaylorN<T>`.
//!
//! Slot `k` holds the homogeneous polynomial of total degree `k`, so the
//! univariate recurrences run unchanged with degree playing the role of the
//! power index. All slots share one [`PolyTable`].

use std::fmt::{self, Display};

use crate::coefficient::{Coefficient, Series};
use crate::error::SeriesError;
use crate::homogeneous::HomogeneousPoly;
use crate::real::Real;
use crate::table::PolyTable;
use crate::taylor_ops;

/// Truncated multivariate series in `table.num_vars()` variables.
#[derive(Clone, Debug, PartialEq)]
pub struct TaylorN<T> {
    pub(crate) polys: Vec<HomogeneousPoly<T>>,
}

impl<T: Real> Series for TaylorN<T> {
    type Coeff = HomogeneousPoly<T>;

    #[inline]
    fn coeffs(&self) -> &[HomogeneousPoly<T>] {
        &self.polys
    }

    #[inline]
    fn coeffs_mut(&mut self) -> &mut [HomogeneousPoly<T>] {
        &mut self.polys
    }
}

impl<T: Real> TaylorN<T> {
    /// The zero series of `order`. Panics if `order > table.max_order()`.
    pub fn zero(table: &'static PolyTable, order: usize) -> Self {
        assert!(
            order <= table.max_order(),
            "order {} exceeds the table's maximum order {}",
            order,
            table.max_order()
        );
        TaylorN {
            polys: (0..=order).map(|d| HomogeneousPoly::zero(table, d)).collect(),
        }
    }

    pub fn constant(table: &'static PolyTable, val: T, order: usize) -> Self {
        let mut s = Self::zero(table, order);
        s.polys[0] = HomogeneousPoly::constant(table, val);
        s
    }

    /// `val + x_var`: variable `var` expanded around `val`.
    pub fn variable(table: &'static PolyTable, var: usize, val: T, order: usize) -> Self {
        let mut s = Self::constant(table, val, order);
        if order > 0 {
            s.polys[1] = HomogeneousPoly::variable(table, var);
        }
        s
    }

    /// Build from per-degree polynomials; `polys[k]` must have degree `k`.
    pub fn from_polys(polys: Vec<HomogeneousPoly<T>>) -> Self {
        assert!(!polys.is_empty(), "a series needs at least one coefficient");
        let table = polys[0].table();
        for (k, p) in polys.iter().enumerate() {
            assert_eq!(p.degree(), k, "slot {} holds a polynomial of degree {}", k, p.degree());
            assert!(std::ptr::eq(p.table(), table), "slots come from different tables");
        }
        TaylorN { polys }
    }

    #[inline]
    pub fn table(&self) -> &'static PolyTable {
        self.polys[0].table()
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.polys.len() - 1
    }

    /// Homogeneous polynomial of degree `k`.
    #[inline]
    pub fn poly(&self, k: usize) -> &HomogeneousPoly<T> {
        &self.polys[k]
    }

    #[inline]
    pub fn polys(&self) -> &[HomogeneousPoly<T>] {
        &self.polys
    }

    /// Coefficient of the monomial `x^exponents`.
    pub fn coeff(&self, exponents: &[usize]) -> T {
        let degree: usize = exponents.iter().sum();
        if degree > self.order() {
            return T::zero();
        }
        self.polys[degree].coeff(exponents)
    }

    #[inline]
    pub fn constant_term(&self) -> T {
        self.polys[0].coeffs()[0].clone()
    }

    /// Zero series of `order` over the same table.
    #[inline]
    pub fn zero_like_order(&self, order: usize) -> Self {
        Self::zero(self.table(), order)
    }

    #[inline]
    pub fn identity_like(&self) -> Self {
        Self::constant(self.table(), T::one(), self.order())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.polys.iter().all(Coefficient::is_vanishing)
    }

    /// Index of the last non-vanishing degree, `None` for the zero series.
    #[inline]
    pub fn last_nonzero_index(&self) -> Option<usize> {
        self.polys.iter().rposition(|p| !p.is_vanishing())
    }

    // ── Elemental collaborators ──

    pub fn recip(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_recip(&self.polys, &mut c.polys)?;
        Ok(c)
    }

    pub fn exp(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_exp(&self.polys, &mut c.polys)?;
        Ok(c)
    }

    pub fn ln(&self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_ln(&self.polys, &mut c.polys)?;
        Ok(c)
    }

    pub fn mul_series(&self, rhs: &Self) -> Self {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_mul(&self.polys, &rhs.polys, &mut c.polys);
        c
    }

    pub fn div_series(&self, rhs: &Self) -> Result<Self, SeriesError> {
        let mut c = self.zero_like_order(self.order());
        taylor_ops::taylor_div(&self.polys, &rhs.polys, &mut c.polys)?;
        Ok(c)
    }
}

impl<T: Real> Display for TaylorN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for p in &self.polys {
            for (c, exponents) in p.coeffs().iter().zip(p.table().monomials(p.degree())) {
                if c.is_zero() {
                    continue;
                }
                if !first {
                    write!(f, " + ")?;
                }
                first = false;
                if p.degree() == 0 {
                    write!(f, "{}", c)?;
                    continue;
                }
                write!(f, "({})", c)?;
                for (v, &e) in exponents.iter().enumerate() {
                    match e {
                        0 => {}
                        1 => write!(f, "·x{}", v + 1)?,
                        e => write!(f, "·x{}^{}", v + 1, e)?,
                    }
                }
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_and_coefficients() {
        let table = PolyTable::setup(2, 3).unwrap();
        let x = TaylorN::variable(table, 0, 1.0, 3);
        let y = TaylorN::variable(table, 1, 0.0, 3);
        assert_eq!(x.coeff(&[0, 0]), 1.0);
        assert_eq!(x.coeff(&[1, 0]), 1.0);
        assert_eq!(y.coeff(&[0, 1]), 1.0);
        assert_eq!(y.constant_term(), 0.0);
        let xy = x.mul_series(&y);
        assert_eq!(xy.coeff(&[1, 1]), 1.0);
        assert_eq!(xy.coeff(&[0, 1]), 1.0);
        assert_eq!(xy.last_nonzero_index(), Some(2));
    }

    #[test]
    fn display_lists_monomials() {
        let table = PolyTable::setup(2, 3).unwrap();
        let x = TaylorN::variable(table, 0, 2.0, 2);
        assert_eq!(x.mul_series(&x).to_string(), "4 + (4)·x1 + (1)·x1^2");
        assert_eq!(TaylorN::<f64>::zero(table, 2).to_string(), "0");
    }

    #[test]
    #[should_panic(expected = "exceeds the table's maximum order")]
    fn order_is_bounded_by_table() {
        let table = PolyTable::setup(2, 3).unwrap();
        let _ = TaylorN::<f64>::zero(table, 4);
    }
}

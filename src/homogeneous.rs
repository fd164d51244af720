//! Homogeneous polynomials: the per-degree building block of `TaylorN`.
//!
//! A `HomogeneousPoly<T>` of degree `d` stores one coefficient per monomial
//! of total degree `d`, in the slot order of its [`PolyTable`]. Products
//! whose degree exceeds the table's maximum order are truncated to the zero
//! polynomial of degree 0.

use log::{debug, trace};

use crate::coefficient::{Coefficient, Flat};
use crate::error::SeriesError;
use crate::power::power_by_squaring;
use crate::real::Real;
use crate::table::PolyTable;

/// Homogeneous polynomial of a fixed total degree.
#[derive(Debug)]
pub struct HomogeneousPoly<T> {
    table: &'static PolyTable,
    degree: usize,
    coeffs: Vec<T>,
}

impl<T: Clone> Clone for HomogeneousPoly<T> {
    fn clone(&self) -> Self {
        HomogeneousPoly {
            table: self.table,
            degree: self.degree,
            coeffs: self.coeffs.clone(),
        }
    }

    // Reuses the coefficient buffer; the in-place engine relies on it.
    fn clone_from(&mut self, source: &Self) {
        self.table = source.table;
        self.degree = source.degree;
        self.coeffs.clone_from(&source.coeffs);
    }
}

impl<T: PartialEq> PartialEq for HomogeneousPoly<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table)
            && self.degree == other.degree
            && self.coeffs == other.coeffs
    }
}

impl<T: Real> HomogeneousPoly<T> {
    /// The zero polynomial of `degree`. Panics if `degree > table.max_order()`.
    pub fn zero(table: &'static PolyTable, degree: usize) -> Self {
        assert!(
            degree <= table.max_order(),
            "degree {} exceeds the table's maximum order {}",
            degree,
            table.max_order()
        );
        HomogeneousPoly {
            table,
            degree,
            coeffs: vec![T::zero(); table.len(degree)],
        }
    }

    /// The constant polynomial `val` (degree 0).
    pub fn constant(table: &'static PolyTable, val: T) -> Self {
        HomogeneousPoly {
            table,
            degree: 0,
            coeffs: vec![val],
        }
    }

    #[inline]
    pub fn one(table: &'static PolyTable) -> Self {
        Self::constant(table, T::one())
    }

    /// The degree-1 polynomial `x_var`.
    pub fn variable(table: &'static PolyTable, var: usize) -> Self {
        assert!(var < table.num_vars(), "variable index {} out of range", var);
        let mut exponents = vec![0; table.num_vars()];
        exponents[var] = 1;
        Self::monomial(table, &exponents, T::one())
    }

    /// `val · x^exponents`.
    pub fn monomial(table: &'static PolyTable, exponents: &[usize], val: T) -> Self {
        let mut p = Self::zero(table, exponents.iter().sum());
        p.set_coeff(exponents, val);
        p
    }

    /// Sum of `val · x^exponents` terms, all of total degree `degree`.
    pub fn from_terms<E, I>(table: &'static PolyTable, degree: usize, terms: I) -> Self
    where
        E: AsRef<[usize]>,
        I: IntoIterator<Item = (E, T)>,
    {
        let mut p = Self::zero(table, degree);
        for (exponents, val) in terms {
            let exponents = exponents.as_ref();
            let current = p.coeff(exponents);
            p.set_coeff(exponents, current + val);
        }
        p
    }

    /// Build from coefficients in slot order.
    pub fn from_coeffs(table: &'static PolyTable, degree: usize, coeffs: Vec<T>) -> Self {
        assert_eq!(
            coeffs.len(),
            table.len(degree),
            "degree {} needs {} coefficients",
            degree,
            table.len(degree)
        );
        HomogeneousPoly {
            table,
            degree,
            coeffs,
        }
    }

    #[inline]
    pub fn table(&self) -> &'static PolyTable {
        self.table
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Coefficient of `x^exponents`; zero for monomials of another degree.
    pub fn coeff(&self, exponents: &[usize]) -> T {
        if exponents.iter().sum::<usize>() != self.degree {
            return T::zero();
        }
        match self.table.position(exponents) {
            Some(pos) => self.coeffs[pos].clone(),
            None => T::zero(),
        }
    }

    /// Panics if `exponents` does not have this polynomial's degree.
    pub fn set_coeff(&mut self, exponents: &[usize], val: T) {
        assert_eq!(exponents.iter().sum::<usize>(), self.degree, "monomial degree mismatch");
        let pos = self
            .table
            .position(exponents)
            .unwrap_or_else(|| panic!("monomial {:?} is not in the table", exponents));
        self.coeffs[pos] = val;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    fn same_table(&self, other: &Self) {
        assert!(
            std::ptr::eq(self.table, other.table),
            "homogeneous polynomials come from different tables"
        );
    }

    /// Re-shape a vanishing accumulator to `degree` before adding into it.
    fn align_degree(&mut self, degree: usize) {
        if self.degree != degree {
            assert!(
                self.is_zero(),
                "cannot combine homogeneous polynomials of degree {} and {}",
                self.degree,
                degree
            );
            self.coeffs.clear();
            self.coeffs.resize(self.table.len(degree), T::zero());
            self.degree = degree;
        }
    }

    /// Product. Degrees above the table's maximum order truncate to the zero
    /// polynomial of degree 0.
    pub fn mul(&self, rhs: &Self) -> Self {
        self.same_table(rhs);
        let degree = self.degree + rhs.degree;
        if degree > self.table.max_order() {
            trace!("product of degree {} truncated", degree);
            return Self::zero(self.table, 0);
        }
        let mut out = Self::zero(self.table, degree);
        out.accumulate_product(self, rhs);
        out
    }

    /// `self += a * b`, skipping vanishing coefficients.
    fn accumulate_product(&mut self, a: &Self, b: &Self) {
        for (i, ai) in a.coeffs.iter().enumerate() {
            if ai.is_zero() {
                continue;
            }
            for (j, bj) in b.coeffs.iter().enumerate() {
                if bj.is_zero() {
                    continue;
                }
                let pos = self.table.product_position(a.degree, i, b.degree, j);
                self.coeffs[pos] = self.coeffs[pos].clone() + ai.clone() * bj.clone();
            }
        }
    }

    /// Square by convolution over unordered monomial pairs.
    ///
    /// Output degree is `2 · degree`; when that exceeds the table's maximum
    /// order the result is the zero polynomial of degree 0.
    pub fn square(&self) -> Self {
        let degree = 2 * self.degree;
        if degree > self.table.max_order() {
            debug!(
                "square of a degree-{} polynomial exceeds max order {}; truncated to zero",
                self.degree,
                self.table.max_order()
            );
            return Self::zero(self.table, 0);
        }
        let mut out = Self::zero(self.table, degree);
        let two = T::from_i64(2);
        for (i, ci) in self.coeffs.iter().enumerate() {
            if ci.is_zero() {
                continue;
            }
            for (j, cj) in self.coeffs.iter().enumerate().skip(i) {
                if cj.is_zero() {
                    continue;
                }
                let pos = self.table.product_position(self.degree, i, self.degree, j);
                let mut term = ci.clone() * cj.clone();
                if i != j {
                    term = term * two.clone();
                }
                out.coeffs[pos] = out.coeffs[pos].clone() + term;
            }
        }
        out
    }

    /// Integer power. Negative exponents have no homogeneous representation.
    ///
    /// A power whose degree exceeds the table's maximum order is the zero
    /// polynomial of degree 0, whichever factor truncates first.
    pub fn powi(&self, n: i64) -> Result<Self, SeriesError> {
        match n {
            0 => Ok(Self::one(self.table)),
            1 => Ok(self.clone()),
            2 => Ok(self.square()),
            n if n < 0 => Err(SeriesError::NegativeHomogeneousPower { exponent: n }),
            n if self.power_overflows(n) => {
                debug!(
                    "degree-{} polynomial to the power {} exceeds max order {}; truncated to zero",
                    self.degree,
                    n,
                    self.table.max_order()
                );
                Ok(Self::zero(self.table, 0))
            }
            n => Ok(power_by_squaring(self, n)),
        }
    }

    fn power_overflows(&self, n: i64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(self.degree))
            .map_or(true, |degree| degree > self.table.max_order())
    }

    /// The value of a degree-0 polynomial; fails for positive degrees.
    fn scalar(&self, operation: &'static str) -> Result<&T, SeriesError> {
        if self.degree == 0 {
            Ok(&self.coeffs[0])
        } else {
            Err(SeriesError::ScalarDomain { operation })
        }
    }

    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        HomogeneousPoly {
            table: self.table,
            degree: self.degree,
            coeffs: self.coeffs.iter().map(f).collect(),
        }
    }
}

impl<T: Real> Coefficient for HomogeneousPoly<T> {
    type Real = T;

    #[inline]
    fn zero_like(&self) -> Self {
        Self::zero(self.table, self.degree)
    }

    #[inline]
    fn one_like(&self) -> Self {
        Self::one(self.table)
    }

    #[inline]
    fn is_vanishing(&self) -> bool {
        self.is_zero()
    }

    fn clear(&mut self) {
        for c in &mut self.coeffs {
            *c = T::zero();
        }
    }

    fn add_from(&mut self, rhs: &Self) {
        self.same_table(rhs);
        if rhs.is_zero() {
            return;
        }
        self.align_degree(rhs.degree);
        for (c, r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *c = c.clone() + r.clone();
        }
    }

    fn sub_from(&mut self, rhs: &Self) {
        self.same_table(rhs);
        if rhs.is_zero() {
            return;
        }
        self.align_degree(rhs.degree);
        for (c, r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *c = c.clone() - r.clone();
        }
    }

    fn negated(&self) -> Self {
        self.map(|c| -c.clone())
    }

    #[inline]
    fn mul_ref(&self, rhs: &Self) -> Self {
        self.mul(rhs)
    }

    fn mul_acc(&mut self, a: &Self, b: &Self) {
        self.same_table(a);
        self.same_table(b);
        let degree = a.degree + b.degree;
        if degree > self.table.max_order() {
            return;
        }
        self.align_degree(degree);
        self.accumulate_product(a, b);
    }

    fn scale(&self, s: &T) -> Self {
        self.map(|c| c.clone() * s.clone())
    }

    fn scale_in_place(&mut self, s: &T) {
        for c in &mut self.coeffs {
            *c = c.clone() * s.clone();
        }
    }

    #[inline]
    fn squared(&self) -> Self {
        self.square()
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, SeriesError> {
        if rhs.degree != 0 {
            return Err(if rhs.is_zero() {
                SeriesError::ZeroConstantTerm { operation: "division" }
            } else {
                SeriesError::NonScalarDivisor { degree: rhs.degree }
            });
        }
        let d = &rhs.coeffs[0];
        if d.is_zero() {
            return Err(SeriesError::ZeroConstantTerm { operation: "division" });
        }
        Ok(self.map(|c| c.clone() / d.clone()))
    }

    fn try_sqrt(&self) -> Result<Self, SeriesError> {
        let v = self.scalar("sqrt")?.try_sqrt()?;
        Ok(Self::constant(self.table, v))
    }

    fn try_powf(&self, r: &T) -> Result<Self, SeriesError> {
        let v = self.scalar("power")?.try_powf(r)?;
        Ok(Self::constant(self.table, v))
    }

    fn try_exp(&self) -> Result<Self, SeriesError> {
        let v = self.scalar("exp")?.try_exp()?;
        Ok(Self::constant(self.table, v))
    }

    fn try_ln(&self) -> Result<Self, SeriesError> {
        let v = self.scalar("ln")?.try_ln()?;
        Ok(Self::constant(self.table, v))
    }
}

impl<T: Real> Flat for HomogeneousPoly<T> {}

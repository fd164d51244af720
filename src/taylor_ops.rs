//! Shared coefficient propagation kernels for the arithmetic collaborators.
//!
//! Convention: `c[k]` is the coefficient of `t^k` (or, for multivariate
//! series, the homogeneous polynomial of degree `k`). All functions operate
//! on slices `&[C]` (inputs) and `&mut [C]` (outputs) with `C: Coefficient`;
//! the output length fixes the number of coefficients computed.
//!
//! Kernels that accumulate (`mul`, `div`, `recip`, `exp`, `ln`) expect `c`
//! to be zero-filled on entry, shaped like the input coefficients.
//!
//! Used by `Taylor<C>`, `TaylorN<T>` and by the nested adapter.

use num_traits::One;

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::real::Real;

// ══════════════════════════════════════════════
//  Arithmetic
// ══════════════════════════════════════════════

/// `c = a + b`
#[inline]
pub fn taylor_add<C: Coefficient>(a: &[C], b: &[C], c: &mut [C]) {
    for k in 0..c.len() {
        let mut s = a[k].clone();
        s.add_from(&b[k]);
        c[k] = s;
    }
}

/// `c = a - b`
#[inline]
pub fn taylor_sub<C: Coefficient>(a: &[C], b: &[C], c: &mut [C]) {
    for k in 0..c.len() {
        let mut s = a[k].clone();
        s.sub_from(&b[k]);
        c[k] = s;
    }
}

/// `c = -a`
#[inline]
pub fn taylor_neg<C: Coefficient>(a: &[C], c: &mut [C]) {
    for k in 0..c.len() {
        c[k] = a[k].negated();
    }
}

/// `c = s * a` where `s` is a scalar.
#[inline]
pub fn taylor_scale<C: Coefficient>(a: &[C], s: &C::Real, c: &mut [C]) {
    for k in 0..c.len() {
        c[k] = a[k].scale(s);
    }
}

/// `c = a * b`, truncated Cauchy product.
///
/// `c[k] = Σ_{j=0}^{k} a[j] * b[k-j]`
#[inline]
pub fn taylor_mul<C: Coefficient>(a: &[C], b: &[C], c: &mut [C]) {
    for k in 0..c.len() {
        for j in 0..=k {
            c[k].mul_acc(&a[j], &b[k - j]);
        }
    }
}

/// `c = a / b` by recursive division.
///
/// `c[k] = (a[k] - Σ_{j=1}^{k} b[j] * c[k-j]) / b[0]`
pub fn taylor_div<C: Coefficient>(a: &[C], b: &[C], c: &mut [C]) -> Result<(), SeriesError> {
    if b[0].is_vanishing() {
        return Err(SeriesError::ZeroConstantTerm { operation: "division" });
    }
    for k in 0..c.len() {
        let mut sum = a[k].clone();
        for j in 1..=k {
            sum.sub_from(&b[j].mul_ref(&c[k - j]));
        }
        c[k] = sum.try_div(&b[0])?;
    }
    Ok(())
}

/// `c = 1/a`: division with numerator `[1, 0, ..., 0]`.
pub fn taylor_recip<C: Coefficient>(a: &[C], c: &mut [C]) -> Result<(), SeriesError> {
    if a[0].is_vanishing() {
        return Err(SeriesError::ZeroConstantTerm { operation: "inverse" });
    }
    c[0] = a[0].one_like().try_div(&a[0])?;
    for k in 1..c.len() {
        let mut sum = c[k].clone();
        for j in 1..=k {
            sum.sub_from(&a[j].mul_ref(&c[k - j]));
        }
        c[k] = sum.try_div(&a[0])?;
    }
    Ok(())
}

// ══════════════════════════════════════════════
//  Transcendentals (logarithmic derivative technique)
// ══════════════════════════════════════════════

/// `c = exp(a)`
///
/// `c[0] = exp(a[0])`
/// `c[k] = (1/k) * Σ_{j=1}^{k} j * a[j] * c[k-j]`
pub fn taylor_exp<C: Coefficient>(a: &[C], c: &mut [C]) -> Result<(), SeriesError> {
    c[0] = a[0].try_exp()?;
    for k in 1..c.len() {
        let mut sum = c[k].clone();
        for j in 1..=k {
            sum.mul_acc(&a[j].scale(&C::Real::from_usize(j)), &c[k - j]);
        }
        c[k] = sum.scale(&(C::Real::one() / C::Real::from_usize(k)));
    }
    Ok(())
}

/// `c = ln(a)`
///
/// `c[0] = ln(a[0])`
/// `c[k] = (a[k] - (1/k) * Σ_{j=1}^{k-1} j * c[j] * a[k-j]) / a[0]`
pub fn taylor_ln<C: Coefficient>(a: &[C], c: &mut [C]) -> Result<(), SeriesError> {
    if a[0].is_vanishing() {
        return Err(SeriesError::ZeroConstantTerm { operation: "ln" });
    }
    c[0] = a[0].try_ln()?;
    for k in 1..c.len() {
        let mut sum = c[k].clone();
        for j in 1..k {
            sum.mul_acc(&c[j].scale(&C::Real::from_usize(j)), &a[k - j]);
        }
        let mut num = a[k].clone();
        num.sub_from(&sum.scale(&(C::Real::one() / C::Real::from_usize(k))));
        c[k] = num.try_div(&a[0])?;
    }
    Ok(())
}

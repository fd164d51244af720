//! Integer powers by repeated squaring.
//!
//! [`power_by_squaring`] works on any [`Coefficient`]: scalars, homogeneous
//! polynomials and whole series (through the nested adapter). The in-place
//! variant is restricted to series over [`Flat`] coefficients and rotates
//! three caller-owned buffers instead of allocating per step.

use std::mem;

use log::trace;

use crate::coefficient::{Coefficient, Flat, Series};
use crate::error::SeriesError;
use crate::square::square_into;
use crate::taylor_ops::taylor_mul;

/// `a^p` in `O(log p)` products.
///
/// Panics if `p < 0`.
pub fn power_by_squaring<C: Coefficient>(a: &C, p: i64) -> C {
    assert!(p >= 0, "power_by_squaring needs a nonnegative exponent, got {}", p);
    match p {
        0 => return a.one_like(),
        1 => return a.clone(),
        2 => return a.squared(),
        3 => return a.mul_ref(&a.squared()),
        _ => {}
    }
    let mut p = p;
    let mut t = p.trailing_zeros() + 1;
    p >>= t;
    let mut x = a.clone();
    for _ in 1..t {
        x = x.squared();
    }
    let mut y = x.clone();
    while p > 0 {
        t = p.trailing_zeros() + 1;
        p >>= t;
        for _ in 0..t {
            x = x.squared();
        }
        y = y.mul_ref(&x);
    }
    y
}

fn check_order<S: Series>(expected: &S, found: &S) -> Result<(), SeriesError> {
    if expected.order() != found.order() {
        return Err(SeriesError::OrderMismatch {
            expected: expected.order(),
            found: found.order(),
        });
    }
    Ok(())
}

/// `base = base²`, via `scratch`.
fn square_step<S>(base: &mut S, scratch: &mut S)
where
    S: Series,
    S::Coeff: Flat,
{
    scratch.coeffs_mut().iter_mut().for_each(Coefficient::clear);
    square_into(base.coeffs(), scratch.coeffs_mut());
    mem::swap(base, scratch);
}

/// `acc = acc · base`, via `scratch`.
fn mul_step<S>(acc: &mut S, base: &S, scratch: &mut S)
where
    S: Series,
    S::Coeff: Flat,
{
    scratch.coeffs_mut().iter_mut().for_each(Coefficient::clear);
    taylor_mul(acc.coeffs(), base.coeffs(), scratch.coeffs_mut());
    mem::swap(acc, scratch);
}

/// `acc = base^p` using only the three given buffers.
///
/// `base` holds the operand on entry and is clobbered; `scratch` is work
/// space. All three must have the same order. Panics if `p < 0`.
pub fn power_by_squaring_in_place<S>(
    acc: &mut S,
    base: &mut S,
    scratch: &mut S,
    p: i64,
) -> Result<(), SeriesError>
where
    S: Series,
    S::Coeff: Flat,
{
    assert!(p >= 0, "power_by_squaring_in_place needs a nonnegative exponent, got {}", p);
    check_order(acc, base)?;
    check_order(acc, scratch)?;

    if p == 0 {
        let c = acc.coeffs_mut();
        c.iter_mut().for_each(Coefficient::clear);
        c[0] = c[0].one_like();
        return Ok(());
    }

    let mut p = p;
    let mut t = p.trailing_zeros() + 1;
    p >>= t;
    for _ in 1..t {
        square_step(base, scratch);
    }
    acc.coeffs_mut().clone_from_slice(base.coeffs());
    while p > 0 {
        t = p.trailing_zeros() + 1;
        p >>= t;
        for _ in 0..t {
            square_step(base, scratch);
        }
        mul_step(acc, base, scratch);
    }
    trace!("in-place power finished at order {}", acc.order());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    type Q = Ratio<i64>;

    #[test]
    fn scalar_powers() {
        for p in 0..20 {
            assert_eq!(power_by_squaring(&Q::new(3, 2), p), num_traits::pow(Q::new(3, 2), p as usize));
        }
        assert_eq!(power_by_squaring(&2.0_f64, 10), 1024.0);
    }

    #[test]
    #[should_panic(expected = "nonnegative exponent")]
    fn negative_exponent_panics() {
        let _ = power_by_squaring(&2.0_f64, -1);
    }
}

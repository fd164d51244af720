//! Square root of truncated series.
//!
//! A flat series whose first non-vanishing coefficient sits at `t^(2·l)` has
//! a square root starting at `t^l`. Only `N/2` orders of the result are
//! determined by the input, so the output order is halved whenever `l > 0`.

use log::debug;

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;

/// `c = sqrt(a)` where the result starts at index `lnull`.
///
/// `a[2·lnull]` must be the first non-vanishing input coefficient. `c` must
/// be zero-filled; its length fixes the output order.
pub fn sqrt_coeffs<C: Coefficient>(a: &[C], lnull: usize, c: &mut [C]) -> Result<(), SeriesError> {
    let order = a.len() - 1;
    c[lnull] = a[2 * lnull].try_sqrt()?;
    let two = C::Real::from_i64(2);
    let denom = c[lnull].scale(&two);
    for k in lnull + 1..c.len() {
        let kp = k - lnull;
        let kodd = kp % 2;
        let kend = (kp + kodd - 2) / 2;
        let imin = (lnull + 1).max((k + lnull).saturating_sub(order));
        let imax = (lnull + kend).min(order);

        let mut acc = c[k].zero_like();
        for i in imin..=imax {
            acc.mul_acc(&c[i], &c[k + lnull - i]);
        }
        let mut aux = if k + lnull <= order {
            let mut v = a[k + lnull].clone();
            v.sub_from(&acc.scale(&two));
            v
        } else {
            acc.scale(&two).negated()
        };
        if kodd == 0 {
            aux.sub_from(&c[kend + lnull + 1].squared());
        }
        c[k] = aux.try_div(&denom)?;
    }
    Ok(())
}

impl<C: Coefficient> Taylor<C> {
    /// Square root.
    ///
    /// The zero series maps to itself. A leading power `t^(2l)` with `l > 0`
    /// yields a result of order `N/2`; an odd leading power is an error.
    pub fn sqrt(&self) -> Result<Self, SeriesError> {
        let l0nz = match self.leading_index() {
            Some(l) => l,
            None => return Ok(self.zero_like_order(self.order())),
        };
        if l0nz % 2 == 1 {
            return Err(SeriesError::OddLeadingPower { leading: l0nz });
        }
        let lnull = l0nz / 2;
        let order = if l0nz > 0 {
            debug!(
                "sqrt of a series starting at t^{}: order reduced from {} to {}",
                l0nz,
                self.order(),
                self.order() / 2
            );
            self.order() / 2
        } else {
            self.order()
        };
        let mut c = self.zero_like_order(order);
        sqrt_coeffs(&self.coeffs, lnull, &mut c.coeffs)?;
        Ok(c)
    }
}

impl<T: Real> TaylorN<T> {
    /// Square root. The constant term must not vanish.
    pub fn sqrt(&self) -> Result<Self, SeriesError> {
        if self.polys[0].is_vanishing() {
            return Err(SeriesError::ZeroConstantTerm { operation: "sqrt" });
        }
        let mut c = self.zero_like_order(self.order());
        sqrt_coeffs(&self.polys, 0, &mut c.polys)?;
        Ok(c)
    }
}

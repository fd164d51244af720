//! Real-exponent power recurrence.
//!
//! From `c = a^r` follows `a·c' = r·a'·c`; matching powers of `t` gives each
//! coefficient from the previous ones. With `a` starting at `t^l0` the
//! result starts at `t^(r·l0)`, which must be a nonnegative integer power.

use log::trace;
use num_traits::{One, Zero};

use crate::coefficient::Coefficient;
use crate::error::SeriesError;
use crate::power::power_by_squaring;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;

/// `c = a^r`, where `a[l0]` is the first non-vanishing input coefficient and
/// the result starts at index `lnull = r·l0`.
///
/// `c` must be zero-filled; its length fixes the output order.
pub fn pow_coeffs<C: Coefficient>(
    a: &[C],
    r: &C::Real,
    l0: usize,
    lnull: usize,
    c: &mut [C],
) -> Result<(), SeriesError> {
    let order = a.len() - 1;
    // For a positive integer power nothing lies above r·(last nonzero index).
    let cutoff = match (r.to_i64(), a.iter().rposition(|x| !x.is_vanishing())) {
        (Some(n), Some(last)) if n > 0 => usize::try_from(n).ok().and_then(|n| n.checked_mul(last)),
        _ => None,
    };

    c[lnull] = a[l0].try_powf(r)?;
    for k in lnull + 1..c.len() {
        if cutoff.is_some_and(|m| k > m) {
            break;
        }
        let kp = k - lnull;
        let mut acc = c[k].zero_like();
        if l0 + kp <= order {
            let w = r.clone() * C::Real::from_usize(kp);
            acc.mul_acc(&c[lnull].scale(&w), &a[l0 + kp]);
        }
        for i in 1..kp {
            if l0 + kp - i > order {
                continue;
            }
            let w = r.clone() * C::Real::from_usize(kp - i) - C::Real::from_usize(i);
            acc.mul_acc(&c[i + lnull].scale(&w), &a[l0 + kp - i]);
        }
        c[k] = acc.try_div(&a[l0].scale(&C::Real::from_usize(kp)))?;
    }
    Ok(())
}

impl<C: Coefficient> Taylor<C> {
    /// `self^r` for an exponent in the coefficient field.
    ///
    /// Leading zeros are factored out: `a = t^l0·b` gives `a^r = t^(r·l0)·b^r`,
    /// which requires `r·l0` to be a nonnegative integer.
    pub fn pow_real(&self, r: &C::Real) -> Result<Self, SeriesError> {
        if r.is_zero() {
            return Ok(self.identity_like());
        }
        if r.is_one() {
            return Ok(self.clone());
        }
        if *r == C::Real::from_i64(2) {
            return Ok(self.square());
        }
        let l0 = match self.leading_index() {
            Some(l) => l,
            None => return Ok(self.zero_like_order(self.order())),
        };
        let lnull = (r.clone() * C::Real::from_usize(l0))
            .to_i64()
            .ok_or_else(|| SeriesError::NonIntegerLeadingPower {
                leading: l0,
                exponent: r.to_f64(),
            })?;
        if lnull < 0 {
            return Err(SeriesError::ZeroConstantTerm { operation: "power" });
        }
        let lnull = lnull as usize;
        if lnull > self.order() {
            trace!("t^{} lies beyond order {}; result is zero", lnull, self.order());
            return Ok(self.zero_like_order(self.order()));
        }
        let mut c = self.zero_like_order(self.order());
        pow_coeffs(&self.coeffs, r, l0, lnull, &mut c.coeffs)?;
        Ok(c)
    }
}

impl<T: Real> TaylorN<T> {
    /// `self^r` for an exponent in the coefficient field.
    ///
    /// A vanishing constant term only admits nonnegative integer powers.
    pub fn pow_real(&self, r: &T) -> Result<Self, SeriesError> {
        if r.is_zero() {
            return Ok(self.identity_like());
        }
        if r.is_one() {
            return Ok(self.clone());
        }
        if *r == T::from_i64(2) {
            return Ok(self.square());
        }
        if self.polys[0].is_vanishing() {
            return match r.to_i64() {
                Some(n) if n >= 0 => Ok(power_by_squaring(self, n)),
                _ => Err(SeriesError::ZeroConstantTerm { operation: "power" }),
            };
        }
        let mut c = self.zero_like_order(self.order());
        pow_coeffs(&self.polys, r, 0, 0, &mut c.polys)?;
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inverse_of_one_plus_t() {
        let a = [1.0, 1.0, 0.0, 0.0, 0.0];
        let mut c = [0.0; 5];
        pow_coeffs(&a, &-1.0, 0, 0, &mut c).unwrap();
        for (k, ck) in c.iter().enumerate() {
            let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
            assert_relative_eq!(*ck, sign, epsilon = 1e-12);
        }
    }

    #[test]
    fn integer_power_stops_at_the_last_term() {
        // (1 + t)^3 = 1 + 3t + 3t² + t³
        let a = [1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let mut c = [0.0; 6];
        pow_coeffs(&a, &3.0, 0, 0, &mut c).unwrap();
        assert_eq!(c[4], 0.0);
        assert_eq!(c[5], 0.0);
        assert_relative_eq!(c[2], 3.0, epsilon = 1e-12);
        assert_relative_eq!(c[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn integer_power_leaves_no_round_off_above_the_last_term() {
        // (0.1 + 0.3t + 0.7t²)^3 has degree 6; the recurrence alone would
        // leave ~1e-16 residue in the higher slots
        let mut coeffs = vec![0.0; 10];
        coeffs[..3].copy_from_slice(&[0.1, 0.3, 0.7]);
        let c = Taylor::new(coeffs).pow_real(&3.0).unwrap();
        assert_eq!(&c.coeffs()[7..=9], &[0.0, 0.0, 0.0]);
        assert_relative_eq!(c.coeffs()[6], 0.343, epsilon = 1e-12);
        assert_relative_eq!(c.coeffs()[0], 0.001, epsilon = 1e-15);
    }

    #[test]
    fn shifted_fractional_power() {
        // (t² + t³)^(3/2) = t³·(1 + t)^(3/2) = t³ + 3/2 t⁴ + 3/8 t⁵ + ...
        let a = [0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
        let mut c = [0.0; 6];
        pow_coeffs(&a, &1.5, 2, 3, &mut c).unwrap();
        assert_relative_eq!(c[3], 1.0, epsilon = 1e-12);
        assert_relative_eq!(c[4], 1.5, epsilon = 1e-12);
        assert_relative_eq!(c[5], 0.375, epsilon = 1e-12);
    }
}

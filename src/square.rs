//! Squaring of truncated series.
//!
//! The halving kernel uses the symmetry of `a·a` to compute each output slot
//! from `⌈k/2⌉` products instead of `k + 1`:
//!
//! `c[k] = 2 · Σ_{i=0}^{kend} a[i]·a[k-i] + [k even] · a[k/2]²`,
//! `kend = (k - 2 + k mod 2) / 2`.

use std::mem;

use crate::coefficient::Coefficient;
use crate::real::Real;
use crate::taylor::Taylor;
use crate::taylor_n::TaylorN;

/// Slot `k` of `a²` into the vanishing accumulator `acc`.
///
/// Reads `a[0..=k]` only and accumulates into `acc` without allocating a
/// new coefficient.
#[inline]
fn square_slot<C: Coefficient>(a: &[C], k: usize, acc: &mut C) {
    let kodd = k % 2;
    if k > 0 {
        let kend = (k + kodd - 2) / 2;
        for i in 0..=kend {
            acc.mul_acc(&a[i], &a[k - i]);
        }
        acc.scale_in_place(&C::Real::from_i64(2));
    }
    if kodd == 0 {
        acc.mul_acc(&a[k / 2], &a[k / 2]);
    }
}

/// `c = a²`, ascending. `c` must be zero-filled; its length fixes the order.
pub fn square_into<C: Coefficient>(a: &[C], c: &mut [C]) {
    for (k, ck) in c.iter_mut().enumerate() {
        square_slot(a, k, ck);
    }
}

/// `c = c²` where input and output are the same buffer.
///
/// Slot `k` depends on `c[0..=k]`, so slots are written from the top down.
/// One temporary is computed into and swapped with each slot; the slot it
/// replaces is no longer read and becomes the next temporary.
pub fn square_in_place_coeffs<C: Coefficient>(c: &mut [C]) {
    let mut acc = match c.last() {
        Some(top) => top.zero_like(),
        None => return,
    };
    for k in (0..c.len()).rev() {
        acc.clear();
        square_slot(c, k, &mut acc);
        mem::swap(&mut c[k], &mut acc);
    }
}

impl<C: Coefficient> Taylor<C> {
    /// `self²`, same order.
    pub fn square(&self) -> Self {
        let mut c = self.zero_like_order(self.order());
        square_into(&self.coeffs, &mut c.coeffs);
        c
    }

    /// Replace `self` by `self²` without allocating a second coefficient
    /// vector.
    pub fn square_in_place(&mut self) {
        square_in_place_coeffs(&mut self.coeffs);
    }
}

impl<T: Real> TaylorN<T> {
    pub fn square(&self) -> Self {
        let mut c = self.zero_like_order(self.order());
        square_into(&self.polys, &mut c.polys);
        c
    }

    pub fn square_in_place(&mut self) {
        square_in_place_coeffs(&mut self.polys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PolyTable;
    use crate::taylor_ops::taylor_mul;
    use approx::assert_relative_eq;

    #[test]
    fn kernel_matches_cauchy_product() {
        let a = [1.5, -2.0, 0.25, 3.0, -1.0, 0.5];
        let mut sq = [0.0; 6];
        square_into(&a, &mut sq);
        let mut prod = [0.0; 6];
        taylor_mul(&a, &a, &mut prod);
        for k in 0..6 {
            assert_relative_eq!(sq[k], prod[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn in_place_matches_allocating() {
        let a = [0.5, 1.0, -3.0, 2.0, 0.0, 7.0, 1.0];
        let mut expected = [0.0; 7];
        square_into(&a, &mut expected);
        let mut c = a;
        square_in_place_coeffs(&mut c);
        assert_eq!(c, expected);
    }

    #[test]
    fn multivariate_in_place_reuses_slot_buffers() {
        let table = PolyTable::setup(2, 4).unwrap();
        let x = TaylorN::variable(table, 0, 1.0, 4);
        let y = TaylorN::variable(table, 1, 0.5, 4);
        let a = &(&x * &y) + &x;
        let mut b = a.clone();
        let before: Vec<*const f64> = b.polys().iter().map(|p| p.coeffs().as_ptr()).collect();
        b.square_in_place();
        assert_eq!(b, a.square());
        // every slot but the top one lands in a buffer that already existed
        let reused = b
            .polys()
            .iter()
            .filter(|p| before.contains(&p.coeffs().as_ptr()))
            .count();
        assert_eq!(reused, before.len() - 1);
    }

    #[test]
    fn shorter_output_truncates() {
        let a = [1.0, 1.0, 1.0, 1.0];
        let mut c = [0.0; 2];
        square_into(&a, &mut c);
        assert_eq!(c, [1.0, 2.0]);
    }
}

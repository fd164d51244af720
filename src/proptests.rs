//! Property-based tests for the power engines over exact rationals.

#[cfg(test)]
mod tests {
    use num_rational::Ratio;
    use proptest::prelude::*;

    use crate::homogeneous::HomogeneousPoly;
    use crate::power::{power_by_squaring, power_by_squaring_in_place};
    use crate::table::PolyTable;
    use crate::taylor::Taylor;
    use crate::taylor_n::TaylorN;

    type Q = Ratio<i64>;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-3i64..=3i64).prop_map(Q::from_integer)
    }

    // Series of order 0-4
    fn small_series() -> impl Strategy<Value = Taylor<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Taylor::new)
    }

    // Series with a positive constant term
    fn unit_series() -> impl Strategy<Value = Taylor<Q>> {
        (1i64..=3i64, proptest::collection::vec(small_coeff(), 0..=4)).prop_map(|(c0, rest)| {
            let mut coeffs = vec![Q::from_integer(c0)];
            coeffs.extend(rest);
            Taylor::new(coeffs)
        })
    }

    // Multivariate series in two variables, order 3
    fn small_taylor_n() -> impl Strategy<Value = TaylorN<Q>> {
        proptest::collection::vec(small_coeff(), 10).prop_map(|c| {
            let table = PolyTable::setup(2, 3).unwrap();
            let polys = vec![
                HomogeneousPoly::from_coeffs(table, 0, c[0..1].to_vec()),
                HomogeneousPoly::from_coeffs(table, 1, c[1..3].to_vec()),
                HomogeneousPoly::from_coeffs(table, 2, c[3..6].to_vec()),
                HomogeneousPoly::from_coeffs(table, 3, c[6..10].to_vec()),
            ];
            TaylorN::from_polys(polys)
        })
    }

    proptest! {
        #[test]
        fn powers_add_exponents(a in small_series(), p in 0i64..4, q in 0i64..4) {
            let lhs = power_by_squaring(&a, p).mul_series(&power_by_squaring(&a, q));
            prop_assert_eq!(lhs, power_by_squaring(&a, p + q));
        }

        #[test]
        fn power_two_is_square(a in small_series()) {
            prop_assert_eq!(a.powi(2).unwrap(), a.mul_series(&a));
            prop_assert_eq!(power_by_squaring(&a, 2), a.square());
        }

        #[test]
        fn square_in_place_matches_square(a in small_series()) {
            let mut b = a.clone();
            b.square_in_place();
            prop_assert_eq!(b, a.square());
        }

        #[test]
        fn in_place_power_matches_allocating(a in small_series(), p in 0i64..8) {
            let mut acc = a.zero_like_order(a.order());
            let mut base = a.clone();
            let mut scratch = a.zero_like_order(a.order());
            power_by_squaring_in_place(&mut acc, &mut base, &mut scratch, p).unwrap();
            prop_assert_eq!(acc, power_by_squaring(&a, p));
        }

        #[test]
        fn recurrence_agrees_with_squaring(a in small_series(), n in 3i64..6) {
            let r = Q::from_integer(n);
            prop_assert_eq!(a.pow_real(&r).unwrap(), power_by_squaring(&a, n));
        }

        #[test]
        fn sqrt_inverts_square(b in unit_series()) {
            let a = b.square();
            let root = a.sqrt().unwrap();
            prop_assert_eq!(&root, &b);
            prop_assert_eq!(root.square(), a);
        }

        #[test]
        fn negative_power_is_reciprocal(a in unit_series(), n in 1i64..4) {
            let inv = a.powi(-n).unwrap();
            prop_assert_eq!(inv.mul_series(&a.powi(n).unwrap()), a.identity_like());
        }

        #[test]
        fn taylor_n_powers_add_exponents(a in small_taylor_n(), p in 0i64..4, q in 0i64..4) {
            let lhs = a.powi(p).unwrap().mul_series(&a.powi(q).unwrap());
            prop_assert_eq!(lhs, a.powi(p + q).unwrap());
        }

        #[test]
        fn taylor_n_in_place_power(a in small_taylor_n(), p in 0i64..6) {
            let mut acc = a.zero_like_order(a.order());
            let mut base = a.clone();
            let mut scratch = a.zero_like_order(a.order());
            power_by_squaring_in_place(&mut acc, &mut base, &mut scratch, p).unwrap();
            prop_assert_eq!(acc, power_by_squaring(&a, p));
        }
    }
}

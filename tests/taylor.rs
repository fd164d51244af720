use approx::assert_relative_eq;
use num_rational::Ratio;
use taylorpow::{Exponent, SeriesError, Taylor, TaylorQ};

type Q = Ratio<i64>;

fn q(n: i64, d: i64) -> Q {
    Q::new(n, d)
}

// ══════════════════════════════════════════════
//  1. Known expansions
// ══════════════════════════════════════════════

#[test]
fn square_of_one_plus_x() {
    // (1+x)² = 1 + 2x + x²
    let a = Taylor::variable(1.0, 3);
    let sq = a.square();
    assert_eq!(sq.coeffs(), &[1.0, 2.0, 1.0, 0.0]);
    let back = sq.sqrt().unwrap();
    for k in 0..=3 {
        assert_relative_eq!(back.coeffs()[k], a.coeffs()[k], epsilon = 1e-12);
    }
}

#[test]
fn sqrt_of_x_squared_halves_the_order() {
    // sqrt(x²) = x, and only orders 0..=2 are determined by an order-5 input
    let x2 = Taylor::new(vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    let root = x2.pow(0.5).unwrap();
    assert_eq!(root.order(), 2);
    assert_eq!(root.coeffs(), &[0.0, 1.0, 0.0]);
}

#[test]
fn fractional_power_of_one_plus_x() {
    // (1+x)^1.5 = 1 + 3/2 x + 3/8 x² - 1/16 x³
    let a = Taylor::variable(1.0, 3);
    let p = a.pow(1.5).unwrap();
    assert_relative_eq!(p.coeffs()[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.coeffs()[1], 1.5, epsilon = 1e-12);
    assert_relative_eq!(p.coeffs()[2], 0.375, epsilon = 1e-12);
    assert_relative_eq!(p.coeffs()[3], -0.0625, epsilon = 1e-12);
}

#[test]
fn geometric_series_from_negative_power() {
    // (1-x)^-1 = 1 + x + x² + ...
    let a = Taylor::new(vec![1.0, -1.0, 0.0, 0.0, 0.0]);
    let inv = a.pow(-1).unwrap();
    for k in 0..=4 {
        assert_relative_eq!(inv.coeffs()[k], 1.0, epsilon = 1e-12);
    }
}

#[test]
fn cube_by_squaring() {
    // (2 + x)³ = 8 + 12x + 6x² + x³
    let a = Taylor::variable(2.0, 4);
    assert_eq!(a.pow(3).unwrap().coeffs(), &[8.0, 12.0, 6.0, 1.0, 0.0]);
}

#[test]
fn shifted_power_factors_leading_zeros() {
    // (x²)^1.5 = x³
    let x2 = Taylor::new(vec![0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    let p = x2.pow(1.5).unwrap();
    assert_eq!(p.order(), 6);
    for k in 0..=6 {
        let expected = if k == 3 { 1.0 } else { 0.0 };
        assert_relative_eq!(p.coeffs()[k], expected, epsilon = 1e-12);
    }
}

// ══════════════════════════════════════════════
//  2. Dispatch rules
// ══════════════════════════════════════════════

#[test]
fn trivial_exponents() {
    let a = Taylor::new(vec![3.0, -1.0, 2.0]);
    assert_eq!(a.pow(0).unwrap(), Taylor::one(2));
    assert_eq!(a.pow(1).unwrap(), a);
    assert_eq!(a.pow(2).unwrap(), a.square());
    assert_eq!(a.powf(2.0).unwrap(), a.square());
    assert_eq!(a.pow(Exponent::Rational(q(4, 2))).unwrap(), a.square());
}

#[test]
fn half_routes_to_sqrt() {
    let a = Taylor::new(vec![4.0, 1.0, 0.0, 2.0]);
    assert_eq!(a.pow(0.5).unwrap(), a.sqrt().unwrap());
    assert_eq!(a.pow(q(1, 2)).unwrap(), a.sqrt().unwrap());
}

#[test]
fn exact_rational_powers() {
    let a: TaylorQ = Taylor::variable(Q::from_integer(1), 3);
    let root = a.pow(q(1, 2)).unwrap();
    assert_eq!(root.coeffs(), &[q(1, 1), q(1, 2), q(-1, 8), q(1, 16)]);
    let p = a.pow(q(3, 2)).unwrap();
    assert_eq!(p.coeffs(), &[q(1, 1), q(3, 2), q(3, 8), q(-1, 16)]);
    let inv = a.pow(-2).unwrap();
    // (1+x)^-2 = 1 - 2x + 3x² - 4x³
    assert_eq!(inv.coeffs(), &[q(1, 1), q(-2, 1), q(3, 1), q(-4, 1)]);
}

#[test]
fn float_and_exact_negative_powers_agree() {
    let a = Taylor::new(vec![2.0, 1.0, -1.0, 0.5]);
    let exact = Taylor::new(vec![q(2, 1), q(1, 1), q(-1, 1), q(1, 2)]);
    let f = a.pow(-3).unwrap();
    let e = exact.pow(-3).unwrap();
    for k in 0..=3 {
        let ek = e.coeffs()[k];
        assert_relative_eq!(f.coeffs()[k], *ek.numer() as f64 / *ek.denom() as f64, epsilon = 1e-12);
    }
}

#[test]
fn series_exponent() {
    // (1+x)^2 through exp(2·ln(1+x))
    let a = Taylor::variable(1.0, 3);
    let b = Taylor::constant(2.0, 3);
    let p = a.pow_series(&b).unwrap();
    let expected = [1.0, 2.0, 1.0, 0.0];
    for k in 0..=3 {
        assert_relative_eq!(p.coeffs()[k], expected[k], epsilon = 1e-12);
    }
}

// ══════════════════════════════════════════════
//  3. Leading zeros and domain errors
// ══════════════════════════════════════════════

#[test]
fn odd_leading_power_has_no_sqrt() {
    let x = Taylor::variable(0.0, 4);
    assert_eq!(x.sqrt(), Err(SeriesError::OddLeadingPower { leading: 1 }));
    assert_eq!(x.pow(0.5), Err(SeriesError::OddLeadingPower { leading: 1 }));
}

#[test]
fn non_integer_leading_power() {
    let x = Taylor::variable(0.0, 4);
    assert!(matches!(
        x.pow(q(1, 3)),
        Err(SeriesError::NonIntegerLeadingPower { leading: 1, .. })
    ));
}

#[test]
fn negative_power_needs_constant_term() {
    let x = Taylor::variable(0.0, 3);
    assert!(matches!(x.pow(-1), Err(SeriesError::ZeroConstantTerm { .. })));
    let xq: TaylorQ = Taylor::variable(Q::from_integer(0), 3);
    assert!(matches!(xq.pow(-1), Err(SeriesError::ZeroConstantTerm { .. })));
}

#[test]
fn power_beyond_order_is_zero() {
    let x2 = Taylor::new(vec![0.0, 0.0, 1.0, 0.0]);
    let p = x2.pow(2.5).unwrap();
    assert_eq!(p.order(), 3);
    assert!(p.is_zero());
    assert!(x2.pow(7).unwrap().is_zero());
}

#[test]
fn zero_series() {
    let z = Taylor::<f64>::zero(4);
    assert_eq!(z.sqrt().unwrap(), z);
    assert_eq!(z.pow(1.5).unwrap(), z);
    assert_eq!(z.pow(0).unwrap(), Taylor::one(4));
}

#[test]
fn leading_scalar_outside_the_field() {
    let a = Taylor::new(vec![-1.0, 1.0]);
    assert_eq!(a.sqrt(), Err(SeriesError::ScalarDomain { operation: "sqrt" }));
    let b = Taylor::new(vec![q(2, 1), q(1, 1)]);
    assert_eq!(b.sqrt(), Err(SeriesError::ScalarDomain { operation: "sqrt" }));
}

#[test]
fn error_messages() {
    let x = Taylor::variable(0.0, 2);
    let err = x.pow(q(1, 3)).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("0th coefficient must be non-zero to raise to a non-integer exponent"));
    let err = x.sqrt().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("first non-vanishing coefficient must correspond to an even power"));
}

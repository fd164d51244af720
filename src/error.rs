//! Error type shared by every series operation.

use thiserror::Error;

/// Domain errors raised by power, square-root and division recurrences.
///
/// Truncation (terms beyond the representable order) is never an error;
/// these variants only cover inputs for which the operation is undefined.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SeriesError {
    /// Homogeneous polynomials have no representation for negative degrees.
    #[error("a homogeneous polynomial cannot be raised to the negative power {exponent}")]
    NegativeHomogeneousPower {
        /// The offending exponent.
        exponent: i64,
    },

    /// `r · l0` is not an integer, so `t^(r·l0)` is not a power of the variable.
    #[error(
        "0th coefficient must be non-zero to raise to a non-integer exponent \
         (leading index {leading}, exponent {exponent})"
    )]
    NonIntegerLeadingPower {
        /// Index of the first non-vanishing coefficient.
        leading: usize,
        /// Exponent, as a float for display.
        exponent: f64,
    },

    /// Square root of a series whose leading power is odd.
    #[error("first non-vanishing coefficient must correspond to an even power (found t^{leading})")]
    OddLeadingPower {
        /// Index of the first non-vanishing coefficient.
        leading: usize,
    },

    /// The operation needs a nonzero constant term to expand around.
    #[error("the 0th order coefficient must be non-zero for {operation}")]
    ZeroConstantTerm {
        /// Name of the operation that failed.
        operation: &'static str,
    },

    /// The leading scalar has no image in the coefficient field.
    #[error("scalar {operation} is undefined for the leading coefficient")]
    ScalarDomain {
        /// Name of the scalar operation.
        operation: &'static str,
    },

    /// Division by a homogeneous polynomial that is not a constant.
    #[error("cannot divide by a homogeneous polynomial of degree {degree}")]
    NonScalarDivisor {
        /// Degree of the divisor.
        degree: usize,
    },

    /// Buffers handed to an in-place operation disagree on truncation order.
    #[error("truncation order mismatch: expected {expected}, found {found}")]
    OrderMismatch {
        /// Order of the first buffer.
        expected: usize,
        /// Order of the disagreeing buffer.
        found: usize,
    },

    /// The monomial keys of a position table would overflow `u64`.
    #[error("monomial table for {num_vars} variables up to order {max_order} is too large")]
    TableOverflow {
        /// Requested number of variables.
        num_vars: usize,
        /// Requested maximum order.
        max_order: usize,
    },
}

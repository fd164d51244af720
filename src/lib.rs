pub mod coefficient;
pub mod error;
pub mod exponent;
pub mod homogeneous;
pub mod nested;
pub mod power;
pub mod real;
pub mod real_pow;
pub mod sqrt;
pub mod square;
pub mod table;
pub mod taylor;
pub mod taylor_n;
pub mod taylor_ops;
mod traits;

#[cfg(test)]
mod proptests;

pub use coefficient::{Coefficient, Flat, Series};
pub use error::SeriesError;
pub use exponent::Exponent;
pub use homogeneous::HomogeneousPoly;
pub use power::{power_by_squaring, power_by_squaring_in_place};
pub use real::Real;
pub use table::PolyTable;
pub use taylor::Taylor;
pub use taylor_n::TaylorN;

/// Flat series over `f64`.
pub type Taylor64 = Taylor<f64>;
/// Flat series over `f32`.
pub type Taylor32 = Taylor<f32>;
/// Flat series over exact rationals.
pub type TaylorQ = Taylor<num_rational::Ratio<i64>>;
/// Multivariate series over `f64`.
pub type TaylorN64 = TaylorN<f64>;

//! Risk measures for credit derivatives.

mod spread_sensitivity;

pub use spread_sensitivity::{SpreadSensitivityCalculator, MIN_BUMP_MAGNITUDE, ONE_BASIS_POINT};

//! # Credix Curves
//!
//! Term structure construction and interpolation for the Credix credit
//! derivatives analytics library.
//!
//! This crate provides:
//!
//! - **Term Structure Trait**: Core [`TermStructure`] abstraction for all curves
//! - **Curve Types**: Discrete pillar-based curves with pluggable interpolation
//! - **Wrappers**: Semantic views providing discount-factor, survival-probability,
//!   and recovery-rate operations on raw curves
//!
//! ## Quick Start
//!
//! ```rust
//! use credix_core::types::Date;
//! use credix_curves::curves::DiscreteCurve;
//! use credix_curves::interpolation::InterpolationMethod;
//! use credix_curves::value_type::ValueType;
//! use credix_curves::wrappers::SurvivalCurve;
//!
//! let today = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! // Piecewise-constant 2% hazard out to 10Y
//! let curve = SurvivalCurve::from_piecewise_hazard(
//!     today,
//!     &[1.0, 3.0, 5.0, 10.0],
//!     &[0.02, 0.02, 0.02, 0.02],
//! )
//! .unwrap();
//!
//! let q5 = curve.survival_probability_at_tenor(5.0).unwrap();
//! assert!((q5 - (-0.02f64 * 5.0).exp()).abs() < 1e-10);
//! # let _ = (DiscreteCurve::flat(today, 10.0, 0.99, ValueType::DiscountFactor),
//! #          InterpolationMethod::Linear);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod curves;
pub mod error;
pub mod interpolation;
pub mod term_structure;
pub mod value_type;
pub mod wrappers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::DiscreteCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::term_structure::TermStructure;
    pub use crate::value_type::ValueType;
    pub use crate::wrappers::{DiscountCurve, RecoveryRates, SurvivalCurve};
}

pub use curves::DiscreteCurve;
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMethod;
pub use term_structure::TermStructure;
pub use value_type::ValueType;

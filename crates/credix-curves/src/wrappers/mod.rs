//! Semantic wrappers over raw term structures.
//!
//! A raw [`crate::term_structure::TermStructure`] stores numbers; these
//! wrappers give them meaning:
//!
//! - [`DiscountCurve`]: risk-free discounting
//! - [`SurvivalCurve`]: survival probabilities and hazard rates
//! - [`RecoveryRates`]: expected recovery on default

mod discount;
mod recovery;
mod survival;

pub use discount::DiscountCurve;
pub use recovery::RecoveryRates;
pub use survival::SurvivalCurve;

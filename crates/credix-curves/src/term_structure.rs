//! Core term structure trait.
//!
//! The `TermStructure` trait is the fundamental abstraction for any curve in
//! the Credix library. Domain-specific semantics are provided by wrapper
//! types rather than by the trait itself:
//!
//! - `DiscountCurve<T>`: provides `discount_factor()`
//! - `SurvivalCurve<T>`: provides `survival_probability()`, `hazard_rate()`
//!
//! # Thread Safety
//!
//! All term structures are required to be `Send + Sync`, enabling safe
//! read-sharing across parallel sensitivity calculations.

use credix_core::types::Date;
use std::sync::Arc;

use crate::error::CurveResult;
use crate::value_type::ValueType;

/// Core abstraction for any term structure.
///
/// A term structure maps time (in years from the reference date, ACT/365F)
/// to values whose interpretation is given by `value_type()`.
pub trait TermStructure: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    ///
    /// All tenors are measured in years from this date.
    fn reference_date(&self) -> Date;

    /// Returns the raw value at time t (years from reference date).
    ///
    /// The interpretation depends on `value_type()`.
    fn value_at(&self, t: f64) -> f64;

    /// Returns the valid tenor range for this curve.
    fn tenor_bounds(&self) -> (f64, f64);

    /// Returns what the curve's values represent.
    fn value_type(&self) -> ValueType;

    /// Returns the first derivative at time t, if available.
    ///
    /// Needed for exact hazard rates from survival probabilities.
    /// Returns `None` if the implementation doesn't support derivatives.
    fn derivative_at(&self, _t: f64) -> Option<f64> {
        None
    }

    // ========================================================================
    // Default implementations
    // ========================================================================

    /// Fallible version of `value_at` that checks tenor bounds.
    fn try_value_at(&self, t: f64) -> CurveResult<f64> {
        let (min, max) = self.tenor_bounds();
        if t < min || t > max {
            return Err(crate::error::CurveError::tenor_out_of_range(t, min, max));
        }
        Ok(self.value_at(t))
    }

    /// Returns the value at a specific date.
    fn value_at_date(&self, date: Date) -> f64 {
        self.value_at(self.date_to_tenor(date))
    }

    /// Converts a date to a year fraction (tenor) from the reference date.
    ///
    /// Uses ACT/365 Fixed throughout.
    fn date_to_tenor(&self, date: Date) -> f64 {
        self.reference_date().year_fraction(&date)
    }

    /// Converts a tenor to a date from the reference date.
    fn tenor_to_date(&self, t: f64) -> Date {
        self.reference_date().add_days((t * 365.0).round() as i64)
    }

    /// Returns true if the given tenor is within the curve's valid range.
    fn in_range(&self, t: f64) -> bool {
        let (min, max) = self.tenor_bounds();
        t >= min && t <= max
    }
}

/// Type alias for a shared, reference-counted term structure.
pub type CurveRef = Arc<dyn TermStructure>;

/// Blanket implementation allowing `Arc<T>` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for Arc<T> {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn value_at(&self, t: f64) -> f64 {
        (**self).value_at(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }

    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn derivative_at(&self, t: f64) -> Option<f64> {
        (**self).derivative_at(t)
    }
}

/// Blanket implementation allowing `Box<T>` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for Box<T> {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn value_at(&self, t: f64) -> f64 {
        (**self).value_at(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }

    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn derivative_at(&self, t: f64) -> Option<f64> {
        (**self).derivative_at(t)
    }
}

/// Blanket implementation allowing `&T` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for &T {
    fn reference_date(&self) -> Date {
        (**self).reference_date()
    }

    fn value_at(&self, t: f64) -> f64 {
        (**self).value_at(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }

    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn derivative_at(&self, t: f64) -> Option<f64> {
        (**self).derivative_at(t)
    }
}

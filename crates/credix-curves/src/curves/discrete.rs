//! Pillar-based curve with pluggable interpolation.

use serde::{Deserialize, Serialize};

use credix_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{self, InterpolationMethod};
use crate::term_structure::TermStructure;
use crate::value_type::ValueType;

/// A curve defined by discrete `(tenor, value)` pillars.
///
/// Pillars must be strictly increasing in tenor. The curve is immutable once
/// built; perturbed variants are always constructed as new curves.
///
/// # Example
///
/// ```rust
/// use credix_core::types::Date;
/// use credix_curves::curves::DiscreteCurve;
/// use credix_curves::interpolation::InterpolationMethod;
/// use credix_curves::term_structure::TermStructure;
/// use credix_curves::value_type::ValueType;
///
/// let today = Date::from_ymd(2026, 1, 1).unwrap();
/// let curve = DiscreteCurve::new(
///     today,
///     vec![1.0, 2.0, 5.0],
///     vec![0.96, 0.92, 0.80],
///     ValueType::DiscountFactor,
///     InterpolationMethod::LogLinear,
/// )
/// .unwrap();
/// assert!((curve.value_at(2.0) - 0.92).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscreteCurve {
    /// Reference (valuation) date.
    reference_date: Date,
    /// Pillar tenors in years, strictly increasing.
    tenors: Vec<f64>,
    /// Pillar values, same length as `tenors`.
    values: Vec<f64>,
    /// Interpretation of the values.
    value_type: ValueType,
    /// Interpolation scheme between pillars.
    interpolation: InterpolationMethod,
}

impl DiscreteCurve {
    /// Creates a new discrete curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than one pillar is given, tenors and values
    /// have different lengths, tenors are negative or not strictly
    /// increasing, values are non-finite, or a log-interpolated curve has
    /// non-positive values.
    pub fn new(
        reference_date: Date,
        tenors: Vec<f64>,
        values: Vec<f64>,
        value_type: ValueType,
        interpolation: InterpolationMethod,
    ) -> CurveResult<Self> {
        if tenors.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }
        if tenors.len() != values.len() {
            return Err(CurveError::invalid_value(format!(
                "{} tenors but {} values",
                tenors.len(),
                values.len()
            )));
        }
        if tenors[0] < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "negative tenor {:.4}",
                tenors[0]
            )));
        }
        for i in 1..tenors.len() {
            if tenors[i] <= tenors[i - 1] {
                return Err(CurveError::non_monotonic_tenors(i, tenors[i - 1], tenors[i]));
            }
        }
        for &v in &values {
            if !v.is_finite() {
                return Err(CurveError::invalid_value(format!("non-finite value {v}")));
            }
            if interpolation == InterpolationMethod::LogLinear && v <= 0.0 {
                return Err(CurveError::invalid_value(format!(
                    "log-linear interpolation requires positive values, got {v}"
                )));
            }
        }

        Ok(Self {
            reference_date,
            tenors,
            values,
            value_type,
            interpolation,
        })
    }

    /// Creates a flat curve with two pillars spanning `[0, max_tenor]`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`DiscreteCurve::new`].
    pub fn flat(
        reference_date: Date,
        max_tenor: f64,
        value: f64,
        value_type: ValueType,
    ) -> CurveResult<Self> {
        Self::new(
            reference_date,
            vec![0.0, max_tenor],
            vec![value, value],
            value_type,
            InterpolationMethod::Linear,
        )
    }

    /// Returns the pillar tenors.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the pillar values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }
}

impl TermStructure for DiscreteCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn value_at(&self, t: f64) -> f64 {
        interpolation::interpolate(&self.tenors, &self.values, self.interpolation, t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn derivative_at(&self, t: f64) -> Option<f64> {
        if self.tenors.len() < 2 {
            return None;
        }
        Some(interpolation::derivative(
            &self.tenors,
            &self.values,
            self.interpolation,
            t,
        ))
    }
}

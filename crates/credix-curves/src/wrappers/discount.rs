//! Discount curve wrapper providing risk-free discounting semantics.

use credix_core::types::Date;

use crate::error::{CurveError, CurveResult};
use crate::term_structure::TermStructure;
use crate::value_type::ValueType;

/// A wrapper providing discount-factor operations on a term structure.
///
/// Accepts curves storing discount factors directly or continuously
/// compounded zero rates, and converts as needed.
///
/// # Example
///
/// ```rust
/// use credix_core::types::Date;
/// use credix_curves::curves::DiscreteCurve;
/// use credix_curves::interpolation::InterpolationMethod;
/// use credix_curves::value_type::ValueType;
/// use credix_curves::wrappers::DiscountCurve;
///
/// let today = Date::from_ymd(2026, 1, 1).unwrap();
/// let zero = DiscreteCurve::flat(today, 30.0, 0.05, ValueType::ZeroRate).unwrap();
/// let discount = DiscountCurve::new(zero).unwrap();
///
/// let df = discount.discount_factor_at_tenor(2.0).unwrap();
/// assert!((df - (-0.05f64 * 2.0).exp()).abs() < 1e-12);
/// # let _ = InterpolationMethod::Linear;
/// ```
#[derive(Clone, Debug)]
pub struct DiscountCurve<T: TermStructure> {
    /// The underlying term structure.
    inner: T,
}

impl<T: TermStructure> DiscountCurve<T> {
    /// Creates a new discount curve wrapper.
    ///
    /// # Errors
    ///
    /// Returns an error unless the underlying curve stores discount factors
    /// or zero rates.
    pub fn new(inner: T) -> CurveResult<Self> {
        match inner.value_type() {
            ValueType::DiscountFactor | ValueType::ZeroRate => Ok(Self { inner }),
            other => Err(CurveError::incompatible_value_type(
                "DiscountFactor or ZeroRate",
                other.to_string(),
            )),
        }
    }

    /// Returns a reference to the underlying term structure.
    #[must_use]
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.inner.reference_date()
    }

    /// Returns the discount factor at the given date.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        self.discount_factor_at_tenor(self.inner.date_to_tenor(date))
    }

    /// Returns the discount factor at a tenor (years).
    ///
    /// P(0) = 1 by construction; P(t) for t > 0 comes from the underlying
    /// curve, converted from zero rates if necessary.
    pub fn discount_factor_at_tenor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }

        let value = self.inner.value_at(t);
        let df = match self.inner.value_type() {
            ValueType::DiscountFactor => value,
            ValueType::ZeroRate => (-value * t).exp(),
            // Checked in the constructor
            _ => unreachable!("constructor rejects incompatible value types"),
        };

        if !(df.is_finite() && df > 0.0) {
            return Err(CurveError::invalid_value(format!(
                "discount factor {df} at tenor {t:.4}"
            )));
        }
        Ok(df)
    }
}

impl<T: TermStructure> TermStructure for DiscountCurve<T> {
    fn reference_date(&self) -> Date {
        self.inner.reference_date()
    }

    fn value_at(&self, t: f64) -> f64 {
        self.inner.value_at(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        self.inner.tenor_bounds()
    }

    fn value_type(&self) -> ValueType {
        self.inner.value_type()
    }

    fn derivative_at(&self, t: f64) -> Option<f64> {
        self.inner.derivative_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::DiscreteCurve;
    use crate::interpolation::InterpolationMethod;
    use approx::assert_relative_eq;

    fn today() -> Date {
        Date::from_ymd(2026, 1, 1).unwrap()
    }

    fn sample_df_curve() -> DiscountCurve<DiscreteCurve> {
        let tenors: Vec<f64> = vec![1.0, 2.0, 5.0, 10.0];
        let dfs: Vec<f64> = tenors.iter().map(|&t| (-0.05 * t).exp()).collect();
        let curve = DiscreteCurve::new(
            today(),
            tenors,
            dfs,
            ValueType::DiscountFactor,
            InterpolationMethod::LogLinear,
        )
        .unwrap();
        DiscountCurve::new(curve).unwrap()
    }

    #[test]
    fn test_df_at_zero_is_one() {
        let curve = sample_df_curve();
        assert_relative_eq!(curve.discount_factor_at_tenor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_df_matches_pillars() {
        let curve = sample_df_curve();
        assert_relative_eq!(
            curve.discount_factor_at_tenor(5.0).unwrap(),
            (-0.25f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_df_log_linear_between_pillars() {
        // Log-linear on exponential discount factors is exact
        let curve = sample_df_curve();
        assert_relative_eq!(
            curve.discount_factor_at_tenor(3.5).unwrap(),
            (-0.05f64 * 3.5).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_conversion() {
        let zero = DiscreteCurve::flat(today(), 30.0, 0.04, ValueType::ZeroRate).unwrap();
        let curve = DiscountCurve::new(zero).unwrap();
        assert_relative_eq!(
            curve.discount_factor_at_tenor(7.0).unwrap(),
            (-0.28f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rejects_wrong_value_type() {
        let hazard = DiscreteCurve::flat(today(), 10.0, 0.02, ValueType::HazardRate).unwrap();
        assert!(DiscountCurve::new(hazard).is_err());
    }

    #[test]
    fn test_discount_factor_by_date() {
        let curve = sample_df_curve();
        let date = today().add_days(365);
        assert_relative_eq!(
            curve.discount_factor(date).unwrap(),
            (-0.05f64).exp(),
            epsilon = 1e-12
        );
    }
}

//! Survival curve wrapper providing credit semantics.

use credix_core::types::Date;

use crate::curves::DiscreteCurve;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::term_structure::TermStructure;
use crate::value_type::ValueType;

/// A wrapper providing survival-probability operations on a term structure.
///
/// Accepts curves storing survival probabilities directly or flat hazard
/// rates, and converts as needed. A survival curve is immutable; a
/// perturbation always yields a new curve.
///
/// # Example
///
/// ```rust
/// use credix_core::types::Date;
/// use credix_curves::wrappers::SurvivalCurve;
///
/// let today = Date::from_ymd(2026, 1, 1).unwrap();
/// let curve = SurvivalCurve::from_piecewise_hazard(
///     today,
///     &[1.0, 3.0, 5.0],
///     &[0.01, 0.015, 0.02],
/// )
/// .unwrap();
///
/// let q = curve.survival_probability_at_tenor(3.0).unwrap();
/// assert!(q < 1.0 && q > 0.9);
/// ```
#[derive(Clone, Debug)]
pub struct SurvivalCurve<T: TermStructure> {
    /// The underlying term structure.
    inner: T,
}

impl<T: TermStructure> SurvivalCurve<T> {
    /// Creates a new survival curve wrapper.
    ///
    /// # Errors
    ///
    /// Returns an error unless the underlying curve stores survival
    /// probabilities or hazard rates.
    pub fn new(inner: T) -> CurveResult<Self> {
        match inner.value_type() {
            ValueType::SurvivalProbability | ValueType::HazardRate => Ok(Self { inner }),
            other => Err(CurveError::incompatible_value_type(
                "SurvivalProbability or HazardRate",
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

    /// Returns the survival probability at the given date.
    ///
    /// Q(T) = P(τ > T) where τ is the default time.
    pub fn survival_probability(&self, date: Date) -> CurveResult<f64> {
        self.survival_probability_at_tenor(self.inner.date_to_tenor(date))
    }

    /// Returns the survival probability at a tenor (years).
    pub fn survival_probability_at_tenor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }

        let value = self.inner.value_at(t);
        let q = match self.inner.value_type() {
            ValueType::SurvivalProbability => value,
            ValueType::HazardRate => (-value * t).exp(),
            // Checked in the constructor
            _ => unreachable!("constructor rejects incompatible value types"),
        };

        if !q.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "survival probability {q} at tenor {t:.4}"
            )));
        }
        Ok(q.clamp(0.0, 1.0))
    }

    /// Returns the unconditional default probability in `(t1, t2]`.
    ///
    /// P(τ ∈ (T1, T2]) = Q(T1) − Q(T2), floored at zero.
    pub fn default_probability_between(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Ok(0.0);
        }
        let q1 = self.survival_probability_at_tenor(t1)?;
        let q2 = self.survival_probability_at_tenor(t2)?;
        Ok((q1 - q2).max(0.0))
    }

    /// Returns the hazard rate at a tenor.
    ///
    /// Uses the exact h(t) = −Q'(t)/Q(t) when the underlying curve supports
    /// derivatives, otherwise falls back to the implied constant hazard
    /// −ln Q(t) / t.
    pub fn hazard_rate_at_tenor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(0.0);
        }

        match self.inner.value_type() {
            ValueType::HazardRate => Ok(self.inner.value_at(t)),
            ValueType::SurvivalProbability => {
                let q = self.survival_probability_at_tenor(t)?;
                if q <= 1e-15 {
                    return Err(CurveError::invalid_value(format!(
                        "survival probability vanished at tenor {t:.4}"
                    )));
                }
                if let Some(dq) = self.inner.derivative_at(t) {
                    Ok((-dq / q).max(0.0))
                } else {
                    Ok(-q.ln() / t)
                }
            }
            _ => unreachable!("constructor rejects incompatible value types"),
        }
    }
}

impl SurvivalCurve<DiscreteCurve> {
    /// Builds a survival curve from piecewise-constant hazard rates.
    ///
    /// Pillar i carries the hazard applying over `(tenor[i-1], tenor[i]]`.
    /// The resulting curve stores cumulative survival probabilities anchored
    /// at Q(0) = 1 with log-linear interpolation, which reproduces the
    /// piecewise-constant hazards exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if tenors and hazards differ in length, tenors are
    /// not strictly increasing and positive, or hazards are negative.
    pub fn from_piecewise_hazard(
        reference_date: Date,
        tenors: &[f64],
        hazards: &[f64],
    ) -> CurveResult<Self> {
        if tenors.len() != hazards.len() {
            return Err(CurveError::invalid_value(format!(
                "{} tenors but {} hazards",
                tenors.len(),
                hazards.len()
            )));
        }
        if tenors.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }

        let mut pillar_tenors = Vec::with_capacity(tenors.len() + 1);
        let mut pillar_values = Vec::with_capacity(tenors.len() + 1);
        pillar_tenors.push(0.0);
        pillar_values.push(1.0);

        let mut cumulative = 0.0;
        let mut prev_t = 0.0;
        for (&t, &h) in tenors.iter().zip(hazards.iter()) {
            if t <= prev_t {
                return Err(CurveError::non_monotonic_tenors(
                    pillar_tenors.len(),
                    prev_t,
                    t,
                ));
            }
            if !(h.is_finite() && h >= 0.0) {
                return Err(CurveError::invalid_value(format!("hazard rate {h}")));
            }
            cumulative += h * (t - prev_t);
            pillar_tenors.push(t);
            pillar_values.push((-cumulative).exp());
            prev_t = t;
        }

        let curve = DiscreteCurve::new(
            reference_date,
            pillar_tenors,
            pillar_values,
            ValueType::SurvivalProbability,
            InterpolationMethod::LogLinear,
        )?;
        Ok(Self { inner: curve })
    }

    /// Returns the node tenors excluding the Q(0) = 1 anchor.
    #[must_use]
    pub fn node_tenors(&self) -> &[f64] {
        &self.inner.tenors()[1..]
    }
}

impl<T: TermStructure> TermStructure for SurvivalCurve<T> {
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

//! Recovery-rate assumptions per legal entity.

use serde::{Deserialize, Serialize};

use credix_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// Recovery-rate term structure for a legal entity.
///
/// Market practice quotes a single flat recovery assumption per seniority
/// (typically 40% for senior unsecured), so this is represented as a flat
/// rate applying at every default date.
///
/// # Example
///
/// ```rust
/// use credix_core::types::Date;
/// use credix_curves::wrappers::RecoveryRates;
///
/// let recovery = RecoveryRates::flat(0.40).unwrap();
/// let date = Date::from_ymd(2028, 6, 20).unwrap();
/// assert!((recovery.recovery_rate(date) - 0.40).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRates {
    /// Flat recovery rate in [0, 1).
    recovery: f64,
}

impl RecoveryRates {
    /// Creates a flat recovery-rate assumption.
    ///
    /// # Errors
    ///
    /// Returns an error unless the rate lies in `[0, 1)`.
    pub fn flat(recovery: f64) -> CurveResult<Self> {
        if !(recovery.is_finite() && (0.0..1.0).contains(&recovery)) {
            return Err(CurveError::invalid_value(format!(
                "recovery rate {recovery} outside [0, 1)"
            )));
        }
        Ok(Self { recovery })
    }

    /// Returns the recovery rate applying at the given default date.
    #[must_use]
    pub fn recovery_rate(&self, _date: Date) -> f64 {
        self.recovery
    }

    /// Returns the flat recovery rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.recovery
    }
}

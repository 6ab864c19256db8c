//! Error types for credit analytics.

use thiserror::Error;

use credix_core::error::CoreError;
use credix_curves::error::CurveError;
use credix_math::error::MathError;

/// A specialized Result type for credit analytics operations.
pub type CreditResult<T> = Result<T, CreditError>;

/// Error types for pricing, calibration, and sensitivity calculations.
#[derive(Error, Debug, Clone)]
pub enum CreditError {
    /// Inputs failed validation before any numerical work.
    #[error("Validation error: {reason}")]
    Validation {
        /// Description of the violated rule.
        reason: String,
    },

    /// Invalid construction-time configuration.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Description of the invalid configuration.
        reason: String,
    },

    /// A required curve is missing from the rates provider.
    #[error("Curve not found: {description}")]
    CurveNotFound {
        /// Which curve was requested.
        description: String,
    },

    /// Curve calibration failed.
    #[error("Calibration error: {reason}")]
    Calibration {
        /// Description of the calibration failure.
        reason: String,
    },

    /// Pricing failed.
    #[error("Pricing error: {reason}")]
    Pricing {
        /// Description of the pricing failure.
        reason: String,
    },

    /// Curve construction or evaluation error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Numerical solver error.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Core domain type error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CreditError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Creates a curve not found error.
    #[must_use]
    pub fn curve_not_found(description: impl Into<String>) -> Self {
        Self::CurveNotFound {
            description: description.into(),
        }
    }

    /// Creates a calibration error.
    #[must_use]
    pub fn calibration(reason: impl Into<String>) -> Self {
        Self::Calibration {
            reason: reason.into(),
        }
    }

    /// Creates a pricing error.
    #[must_use]
    pub fn pricing(reason: impl Into<String>) -> Self {
        Self::Pricing {
            reason: reason.into(),
        }
    }
}

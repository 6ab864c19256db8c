//! Root-finding algorithms.
//!
//! This module provides the one-dimensional solvers used by credit-curve
//! calibration:
//!
//! - [`brent`]: Robust method combining bisection, secant, and inverse
//!   quadratic interpolation. Guaranteed to converge given a valid bracket.
//! - [`expand_bracket`]: Grows an initial interval until it brackets a sign
//!   change, for pricing functions whose root location is not known a priori.
//!
//! # Example: implied hazard rate
//!
//! ```rust
//! use credix_math::solvers::{brent, expand_bracket, SolverConfig};
//!
//! // Toy pricing function: par instrument value as a function of hazard
//! let f = |h: f64| 0.6 * (1.0 - (-5.0 * h).exp()) - 0.05;
//!
//! let (lo, hi) = expand_bracket(f, 1e-10, 0.1, 40).unwrap();
//! let result = brent(f, lo, hi, &SolverConfig::default()).unwrap();
//! assert!(f(result.root).abs() < 1e-10);
//! ```

mod brent;

pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding operation.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Residual function value at the root.
    pub residual: f64,
}

/// Expands `[lo, hi]` until `f` changes sign over the interval.
///
/// The upper bound is doubled up to `max_doublings` times. The lower bound
/// is left untouched, which suits pricing functions that are monotone in a
/// non-negative parameter (e.g. value as a function of a hazard rate).
///
/// # Errors
///
/// Returns `MathError::InvalidBracket` if no sign change is found, or
/// `MathError::InvalidInput` for non-finite or inverted bounds.
pub fn expand_bracket<F>(f: F, lo: f64, hi: f64, max_doublings: u32) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(MathError::invalid_input(format!(
            "bracket bounds must be finite with lo < hi, got [{lo}, {hi}]"
        )));
    }

    let f_lo = f(lo);
    if !f_lo.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function value {f_lo} at lower bound {lo}"
        )));
    }

    let mut hi = hi;
    let mut f_hi = f(hi);

    let mut doublings = 0;
    while f_hi.is_finite() && f_lo.signum() == f_hi.signum() && doublings < max_doublings {
        hi *= 2.0;
        f_hi = f(hi);
        doublings += 1;
    }
    if !f_hi.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function value {f_hi} at upper bound {hi}"
        )));
    }

    if f_lo.signum() == f_hi.signum() {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    Ok((lo, hi))
}

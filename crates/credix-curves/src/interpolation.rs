//! Interpolation methods for pillar-based curves.

use serde::{Deserialize, Serialize};

/// Interpolation scheme between curve pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Straight-line interpolation in value space.
    Linear,
    /// Straight-line interpolation in log-value space.
    ///
    /// The natural choice for discount factors and survival probabilities,
    /// where it corresponds to piecewise-constant forward/hazard rates.
    #[default]
    LogLinear,
}

/// Interpolates a value at `t` over sorted pillars.
///
/// Outside the pillar range the curve is extended flat on the short end and
/// along the last segment's slope on the long end (in value space for
/// `Linear`, in log space for `LogLinear`).
///
/// # Panics
///
/// Does not panic for non-empty slices of equal length; callers (curve
/// constructors) validate the pillars.
#[must_use]
pub fn interpolate(tenors: &[f64], values: &[f64], method: InterpolationMethod, t: f64) -> f64 {
    debug_assert_eq!(tenors.len(), values.len());
    debug_assert!(!tenors.is_empty());

    let n = tenors.len();
    if t <= tenors[0] {
        return values[0];
    }
    if t >= tenors[n - 1] {
        if n == 1 {
            return values[n - 1];
        }
        // Continue the last segment's slope
        return segment_value(
            tenors[n - 2],
            values[n - 2],
            tenors[n - 1],
            values[n - 1],
            method,
            t,
        );
    }

    // partition_point returns the first pillar index with tenor >= t
    let hi = tenors.partition_point(|&x| x < t);
    let lo = hi - 1;
    segment_value(tenors[lo], values[lo], tenors[hi], values[hi], method, t)
}

/// Returns the derivative of the interpolated curve at `t`.
///
/// At a pillar the right-hand segment's slope is used.
#[must_use]
pub fn derivative(tenors: &[f64], values: &[f64], method: InterpolationMethod, t: f64) -> f64 {
    debug_assert_eq!(tenors.len(), values.len());

    let n = tenors.len();
    if n < 2 {
        return 0.0;
    }

    let hi = tenors.partition_point(|&x| x <= t).clamp(1, n - 1);
    let lo = hi - 1;
    let (t1, v1, t2, v2) = (tenors[lo], values[lo], tenors[hi], values[hi]);

    match method {
        InterpolationMethod::Linear => (v2 - v1) / (t2 - t1),
        InterpolationMethod::LogLinear => {
            let slope = (v2.ln() - v1.ln()) / (t2 - t1);
            segment_value(t1, v1, t2, v2, method, t) * slope
        }
    }
}

fn segment_value(
    t1: f64,
    v1: f64,
    t2: f64,
    v2: f64,
    method: InterpolationMethod,
    t: f64,
) -> f64 {
    let w = (t - t1) / (t2 - t1);
    match method {
        InterpolationMethod::Linear => v1 + w * (v2 - v1),
        InterpolationMethod::LogLinear => (v1.ln() + w * (v2.ln() - v1.ln())).exp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const TENORS: &[f64] = &[1.0, 2.0, 5.0];
    const VALUES: &[f64] = &[0.98, 0.95, 0.86];

    #[test]
    fn test_exact_pillar_values() {
        for (i, &t) in TENORS.iter().enumerate() {
            assert_relative_eq!(
                interpolate(TENORS, VALUES, InterpolationMethod::Linear, t),
                VALUES[i],
                epsilon = 1e-12
            );
            assert_relative_eq!(
                interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, t),
                VALUES[i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_linear_midpoint() {
        let v = interpolate(TENORS, VALUES, InterpolationMethod::Linear, 1.5);
        assert_relative_eq!(v, 0.965, epsilon = 1e-12);
    }

    #[test]
    fn test_log_linear_midpoint() {
        let v = interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, 1.5);
        let expected = (0.98f64.ln() * 0.5 + 0.95f64.ln() * 0.5).exp();
        assert_relative_eq!(v, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_short_end() {
        let v = interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, 0.25);
        assert_relative_eq!(v, 0.98, epsilon = 1e-12);
    }

    #[test]
    fn test_long_end_continues_last_slope() {
        // Log-linear: implied hazard of last segment continues beyond 5Y
        let v = interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, 7.0);
        let slope = (0.86f64.ln() - 0.95f64.ln()) / 3.0;
        let expected = (0.95f64.ln() + slope * 5.0).exp();
        assert_relative_eq!(v, expected, epsilon = 1e-12);
        assert!(v < 0.86);
    }

    #[test]
    fn test_derivative_linear() {
        let d = derivative(TENORS, VALUES, InterpolationMethod::Linear, 3.0);
        assert_relative_eq!(d, (0.86 - 0.95) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_log_linear_matches_finite_difference() {
        let t = 3.0;
        let d = derivative(TENORS, VALUES, InterpolationMethod::LogLinear, t);
        let eps = 1e-7;
        let fd = (interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, t + eps)
            - interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, t - eps))
            / (2.0 * eps);
        assert_relative_eq!(d, fd, epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_interior_values_bounded_by_neighbours(t in 1.0f64..5.0) {
            let v = interpolate(TENORS, VALUES, InterpolationMethod::LogLinear, t);
            // Values are decreasing, so every interior point lies in [min, max]
            prop_assert!(v <= VALUES[0] + 1e-12);
            prop_assert!(v >= VALUES[2] - 1e-12);
        }
    }
}

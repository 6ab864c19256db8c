//! Semantic tags for curve values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a curve's raw values represent.
///
/// The same pillar-based curve machinery stores discount factors, zero
/// rates, hazard rates, survival probabilities, or recovery rates; the
/// value type tells the semantic wrappers how to interpret the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Risk-free discount factor P(t), with P(0) = 1.
    DiscountFactor,
    /// Continuously compounded zero rate r(t).
    ZeroRate,
    /// Instantaneous hazard (default intensity) h(t).
    HazardRate,
    /// Survival probability Q(t) = P(default time > t).
    SurvivalProbability,
    /// Expected recovery rate on default, in [0, 1].
    RecoveryRate,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::DiscountFactor => "DiscountFactor",
            ValueType::ZeroRate => "ZeroRate",
            ValueType::HazardRate => "HazardRate",
            ValueType::SurvivalProbability => "SurvivalProbability",
            ValueType::RecoveryRate => "RecoveryRate",
        };
        write!(f, "{name}")
    }
}

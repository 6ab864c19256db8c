//! CDS pricing contracts and implementations.

mod isda;

pub use isda::IsdaCdsPricer;

use serde::{Deserialize, Serialize};
use std::fmt;

use credix_core::types::Money;

use crate::cds::CdsTrade;
use crate::error::CreditResult;
use crate::market::CreditRatesProvider;

/// Convention for premium accrued at default.
///
/// A calibrator and pricer working together must be constructed with the
/// same formula: a curve bootstrapped under one convention does not reprice
/// consistently under the other, which silently biases every sensitivity
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccrualOnDefaultFormula {
    /// The original ISDA convention: accrued premium at default approximated
    /// by half the period accrual, discounted at the period midpoint.
    #[default]
    OriginalIsda,
    /// The Markit fix: the period is split in two and accrued premium grows
    /// from the period start through each sub-period.
    MarkitFix,
}

impl fmt::Display for AccrualOnDefaultFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccrualOnDefaultFormula::OriginalIsda => "OriginalIsda",
            AccrualOnDefaultFormula::MarkitFix => "MarkitFix",
        };
        write!(f, "{name}")
    }
}

/// Whether a present value includes accrued premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceType {
    /// Excludes premium accrued up to the valuation date.
    Clean,
    /// Includes accrued premium (settlement basis).
    #[default]
    Dirty,
}

/// Pricing contract for resolved CDS trades.
///
/// A pure function of (trade, rates provider): implementations must not hold
/// or mutate any state between calls.
pub trait CdsPricer: Send + Sync {
    /// Computes the settlement-basis present value of a trade.
    fn price_on_settle(
        &self,
        trade: &CdsTrade,
        provider: &CreditRatesProvider,
        price_type: PriceType,
    ) -> CreditResult<Money>;

    /// Computes the par spread of a trade under the provider's current
    /// credit curve: the running premium rate at which the trade's
    /// risk-neutral value is zero.
    fn par_spread(&self, trade: &CdsTrade, provider: &CreditRatesProvider) -> CreditResult<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_display() {
        assert_eq!(format!("{}", AccrualOnDefaultFormula::OriginalIsda), "OriginalIsda");
        assert_eq!(format!("{}", AccrualOnDefaultFormula::MarkitFix), "MarkitFix");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            AccrualOnDefaultFormula::default(),
            AccrualOnDefaultFormula::OriginalIsda
        );
        assert_eq!(PriceType::default(), PriceType::Dirty);
    }
}

//! Signed currency amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg};

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// A signed monetary amount in a single currency.
///
/// Used for present values and sensitivities, which are signed quantities.
/// Arithmetic between amounts is checked: combining amounts in different
/// currencies is an error, never a silent conversion.
///
/// # Example
///
/// ```rust
/// use credix_core::types::{Currency, Money};
///
/// let pv_base = Money::new(-10_250.0, Currency::USD);
/// let pv_bumped = Money::new(-10_100.0, Currency::USD);
/// let delta = pv_bumped.checked_sub(pv_base).unwrap();
/// assert!((delta.amount() - 150.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The signed amount.
    amount: f64,
    /// Currency of the amount.
    currency: Currency,
}

impl Money {
    /// Creates a new monetary amount.
    #[must_use]
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0.0,
            currency,
        }
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CurrencyMismatch` if the currencies differ.
    pub fn checked_add(self, other: Money) -> CoreResult<Money> {
        if self.currency != other.currency {
            return Err(CoreError::currency_mismatch(self.currency, other.currency));
        }
        Ok(Money::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CurrencyMismatch` if the currencies differ.
    pub fn checked_sub(self, other: Money) -> CoreResult<Money> {
        if self.currency != other.currency {
            return Err(CoreError::currency_mismatch(self.currency, other.currency));
        }
        Ok(Money::new(self.amount - other.amount, self.currency))
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    fn mul(self, factor: f64) -> Money {
        Money::new(self.amount * factor, self.currency)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.4}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(100.0, Currency::USD);
        let b = Money::new(-30.0, Currency::USD);
        let sum = a.checked_add(b).unwrap();
        assert_relative_eq!(sum.amount(), 70.0, epsilon = 1e-12);
        assert_eq!(sum.currency(), Currency::USD);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(100.0, Currency::USD);
        let b = Money::new(100.0, Currency::EUR);
        assert!(a.checked_add(b).is_err());
    }

    #[test]
    fn test_scale_and_negate() {
        let a = Money::new(250.0, Currency::EUR);
        assert_relative_eq!((a * 2.0).amount(), 500.0, epsilon = 1e-12);
        assert_relative_eq!((-a).amount(), -250.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero() {
        let z = Money::zero(Currency::GBP);
        assert_relative_eq!(z.amount(), 0.0);
        assert_eq!(z.currency(), Currency::GBP);
    }

    #[test]
    fn test_display() {
        let m = Money::new(-1.23456, Currency::USD);
        assert_eq!(format!("{}", m), "USD -1.2346");
    }
}

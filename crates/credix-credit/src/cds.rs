//! Resolved CDS product and trade.

use serde::{Deserialize, Serialize};

use credix_core::types::{Currency, Date, EntityId, Frequency, Money};

use crate::error::{CreditError, CreditResult};

/// Which side of the protection the trade holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProtectionSide {
    /// Buys protection: pays the running premium, receives on default.
    #[default]
    Buy,
    /// Sells protection: receives the running premium, pays on default.
    Sell,
}

impl ProtectionSide {
    /// Returns the sign applied to a protection-buyer present value.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            ProtectionSide::Buy => 1.0,
            ProtectionSide::Sell => -1.0,
        }
    }
}

/// A resolved single-name CDS product.
///
/// Immutable after construction; all fields are fixed contractual terms.
///
/// # Example
///
/// ```rust
/// use credix_core::types::{Currency, Date, EntityId, Frequency};
/// use credix_credit::cds::{Cds, ProtectionSide};
///
/// let cds = Cds::new(
///     EntityId::new("ACME-CORP"),
///     Currency::USD,
///     Date::from_ymd(2026, 3, 20).unwrap(),
///     Date::from_ymd(2031, 6, 20).unwrap(),
///     0.01,
///     10_000_000.0,
///     Frequency::Quarterly,
///     ProtectionSide::Buy,
/// )
/// .unwrap();
/// assert_eq!(cds.currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cds {
    /// Reference entity whose default triggers protection.
    legal_entity: EntityId,
    /// Currency of premium and protection payments.
    currency: Currency,
    /// Start of the protection period (and premium accrual).
    protection_start: Date,
    /// Scheduled termination date.
    maturity: Date,
    /// Running premium rate in decimal per annum (e.g. 0.01 for 100 bps).
    fixed_rate: f64,
    /// Notional amount.
    notional: f64,
    /// Premium payment frequency.
    payment_frequency: Frequency,
    /// Protection side of the trade.
    side: ProtectionSide,
}

impl Cds {
    /// Creates a new resolved CDS product.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the maturity does not follow the
    /// protection start, the notional is not positive, or the fixed rate is
    /// negative or non-finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        legal_entity: EntityId,
        currency: Currency,
        protection_start: Date,
        maturity: Date,
        fixed_rate: f64,
        notional: f64,
        payment_frequency: Frequency,
        side: ProtectionSide,
    ) -> CreditResult<Self> {
        if maturity <= protection_start {
            return Err(CreditError::validation(format!(
                "maturity {maturity} must be after protection start {protection_start}"
            )));
        }
        if !(notional.is_finite() && notional > 0.0) {
            return Err(CreditError::validation(format!(
                "notional must be positive, got {notional}"
            )));
        }
        if !(fixed_rate.is_finite() && fixed_rate >= 0.0) {
            return Err(CreditError::validation(format!(
                "fixed rate must be non-negative, got {fixed_rate}"
            )));
        }

        Ok(Self {
            legal_entity,
            currency,
            protection_start,
            maturity,
            fixed_rate,
            notional,
            payment_frequency,
            side,
        })
    }

    /// Returns the reference entity identifier.
    #[must_use]
    pub fn legal_entity(&self) -> &EntityId {
        &self.legal_entity
    }

    /// Returns the payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the protection start date.
    #[must_use]
    pub fn protection_start(&self) -> Date {
        self.protection_start
    }

    /// Returns the scheduled termination date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the running premium rate.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the notional amount.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the premium payment frequency.
    #[must_use]
    pub fn payment_frequency(&self) -> Frequency {
        self.payment_frequency
    }

    /// Returns the protection side.
    #[must_use]
    pub fn side(&self) -> ProtectionSide {
        self.side
    }

    /// Returns a copy of this product with a different running premium rate.
    ///
    /// Used by calibration, which reprices the same contractual terms at a
    /// target par spread.
    #[must_use]
    pub fn with_fixed_rate(&self, fixed_rate: f64) -> Self {
        Self {
            fixed_rate,
            ..self.clone()
        }
    }
}

/// A resolved CDS trade: product plus trade-level economics.
///
/// Created once per valuation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdsTrade {
    /// The underlying product.
    product: Cds,
    /// Upfront fee paid by the protection buyer at settlement, if any.
    upfront: Option<Money>,
}

impl CdsTrade {
    /// Creates a trade from a product with no upfront fee.
    #[must_use]
    pub fn of(product: Cds) -> Self {
        Self {
            product,
            upfront: None,
        }
    }

    /// Creates a trade with an upfront fee.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the upfront currency differs from the
    /// product currency.
    pub fn with_upfront(product: Cds, upfront: Money) -> CreditResult<Self> {
        if upfront.currency() != product.currency() {
            return Err(CreditError::validation(format!(
                "upfront currency {} differs from product currency {}",
                upfront.currency(),
                product.currency()
            )));
        }
        Ok(Self {
            product,
            upfront: Some(upfront),
        })
    }

    /// Returns the underlying product.
    #[must_use]
    pub fn product(&self) -> &Cds {
        &self.product
    }

    /// Returns the upfront fee, if any.
    #[must_use]
    pub fn upfront(&self) -> Option<Money> {
        self.upfront
    }
}

//! Immutable market-data snapshot for credit pricing.

use std::collections::HashMap;
use std::sync::Arc;

use credix_core::types::{Currency, Date, EntityId};
use credix_curves::curves::DiscreteCurve;
use credix_curves::wrappers::{DiscountCurve, RecoveryRates, SurvivalCurve};

use crate::error::{CreditError, CreditResult};

/// Shared handle to a discount curve.
pub type DiscountCurveRef = Arc<DiscountCurve<DiscreteCurve>>;

/// Shared handle to a credit (survival-probability) curve.
pub type CreditCurveRef = Arc<SurvivalCurve<DiscreteCurve>>;

/// An immutable snapshot of the rates environment for credit pricing.
///
/// Holds, per currency, a discount curve; per legal entity, a recovery-rate
/// assumption; and per (legal entity, currency) pair, a credit curve. All
/// curves are `Arc`-shared, so replacing one credit curve via
/// [`CreditRatesProvider::with_credit_curve`] produces a new provider that
/// shares every other curve by reference rather than deep-copying anything.
///
/// # Example
///
/// ```rust,ignore
/// let bumped_provider = provider.with_credit_curve(entity, currency, bumped_curve);
/// // `provider` is untouched and remains usable read-only.
/// ```
#[derive(Debug, Clone)]
pub struct CreditRatesProvider {
    /// Valuation date of the snapshot.
    valuation_date: Date,
    /// Discount curves keyed by currency.
    discount_curves: HashMap<Currency, DiscountCurveRef>,
    /// Recovery-rate assumptions keyed by legal entity.
    recovery_rates: HashMap<EntityId, RecoveryRates>,
    /// Credit curves keyed by (legal entity, currency).
    credit_curves: HashMap<(EntityId, Currency), CreditCurveRef>,
}

impl CreditRatesProvider {
    /// Starts building a provider for the given valuation date.
    #[must_use]
    pub fn builder(valuation_date: Date) -> CreditRatesProviderBuilder {
        CreditRatesProviderBuilder {
            valuation_date,
            discount_curves: HashMap::new(),
            recovery_rates: HashMap::new(),
            credit_curves: HashMap::new(),
        }
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the discount curve for a currency.
    pub fn discount_factors(&self, currency: Currency) -> CreditResult<&DiscountCurveRef> {
        self.discount_curves.get(&currency).ok_or_else(|| {
            CreditError::curve_not_found(format!("discount curve for {currency}"))
        })
    }

    /// Returns the recovery-rate assumption for a legal entity.
    pub fn recovery_rates(&self, legal_entity: &EntityId) -> CreditResult<RecoveryRates> {
        self.recovery_rates.get(legal_entity).copied().ok_or_else(|| {
            CreditError::curve_not_found(format!("recovery rates for {legal_entity}"))
        })
    }

    /// Returns the credit curve for a (legal entity, currency) pair.
    pub fn survival_probabilities(
        &self,
        legal_entity: &EntityId,
        currency: Currency,
    ) -> CreditResult<&CreditCurveRef> {
        self.credit_curves
            .get(&(legal_entity.clone(), currency))
            .ok_or_else(|| {
                CreditError::curve_not_found(format!(
                    "credit curve for ({legal_entity}, {currency})"
                ))
            })
    }

    /// Returns a new provider with one credit curve replaced.
    ///
    /// This is a structural update: the discount, recovery, and unrelated
    /// credit-curve entries are shared by reference with `self`, and only the
    /// targeted (entity, currency) entry is substituted.
    #[must_use]
    pub fn with_credit_curve(
        &self,
        legal_entity: EntityId,
        currency: Currency,
        curve: CreditCurveRef,
    ) -> Self {
        let mut credit_curves = self.credit_curves.clone();
        credit_curves.insert((legal_entity, currency), curve);
        Self {
            valuation_date: self.valuation_date,
            discount_curves: self.discount_curves.clone(),
            recovery_rates: self.recovery_rates.clone(),
            credit_curves,
        }
    }
}

/// Builder for [`CreditRatesProvider`].
#[derive(Debug)]
pub struct CreditRatesProviderBuilder {
    valuation_date: Date,
    discount_curves: HashMap<Currency, DiscountCurveRef>,
    recovery_rates: HashMap<EntityId, RecoveryRates>,
    credit_curves: HashMap<(EntityId, Currency), CreditCurveRef>,
}

impl CreditRatesProviderBuilder {
    /// Adds a discount curve for a currency.
    #[must_use]
    pub fn discount_curve(mut self, currency: Currency, curve: DiscountCurveRef) -> Self {
        self.discount_curves.insert(currency, curve);
        self
    }

    /// Adds a recovery-rate assumption for a legal entity.
    #[must_use]
    pub fn recovery_rates(mut self, legal_entity: EntityId, recovery: RecoveryRates) -> Self {
        self.recovery_rates.insert(legal_entity, recovery);
        self
    }

    /// Adds a credit curve for a (legal entity, currency) pair.
    #[must_use]
    pub fn credit_curve(
        mut self,
        legal_entity: EntityId,
        currency: Currency,
        curve: CreditCurveRef,
    ) -> Self {
        self.credit_curves.insert((legal_entity, currency), curve);
        self
    }

    /// Builds the provider.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any curve's reference date differs from
    /// the valuation date.
    pub fn build(self) -> CreditResult<CreditRatesProvider> {
        for (currency, curve) in &self.discount_curves {
            if curve.reference_date() != self.valuation_date {
                return Err(CreditError::validation(format!(
                    "discount curve for {currency} has reference date {}, valuation date is {}",
                    curve.reference_date(),
                    self.valuation_date
                )));
            }
        }
        for ((entity, currency), curve) in &self.credit_curves {
            if curve.reference_date() != self.valuation_date {
                return Err(CreditError::validation(format!(
                    "credit curve for ({entity}, {currency}) has reference date {}, \
                     valuation date is {}",
                    curve.reference_date(),
                    self.valuation_date
                )));
            }
        }

        Ok(CreditRatesProvider {
            valuation_date: self.valuation_date,
            discount_curves: self.discount_curves,
            recovery_rates: self.recovery_rates,
            credit_curves: self.credit_curves,
        })
    }
}

//! ISDA-style CDS pricing.
//!
//! Prices the premium leg (with accrual-on-default under the configured
//! formula) and the protection leg over the premium period grid, and derives
//! par spreads as protection over risky annuity.

use log::trace;

use credix_core::types::{Date, Money};
use credix_curves::curves::DiscreteCurve;
use credix_curves::wrappers::{DiscountCurve, SurvivalCurve};

use crate::cds::{Cds, CdsTrade};
use crate::error::{CreditError, CreditResult};
use crate::market::CreditRatesProvider;
use crate::pricing::{AccrualOnDefaultFormula, CdsPricer, PriceType};

/// Discounted leg integrals per unit notional.
struct LegTerms {
    /// Risky coupon accrual paid at period ends, per unit premium rate.
    coupon_annuity: f64,
    /// Accrued premium at default, per unit premium rate.
    accrual_annuity: f64,
    /// Discounted default probability, before loss-given-default.
    protection: f64,
}

/// ISDA-style CDS pricer.
///
/// Constructed once with an accrual-on-default formula; a pure function of
/// (trade, provider) thereafter. The same formula value must be used for the
/// calibrator producing the credit curves this pricer consumes.
///
/// # Example
///
/// ```rust,ignore
/// let pricer = IsdaCdsPricer::new(AccrualOnDefaultFormula::OriginalIsda);
/// let pv = pricer.price_on_settle(&trade, &provider, PriceType::Dirty)?;
/// let spread = pricer.par_spread(&trade, &provider)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IsdaCdsPricer {
    /// Accrual-on-default convention.
    formula: AccrualOnDefaultFormula,
}

impl IsdaCdsPricer {
    /// Creates a pricer with the given accrual-on-default formula.
    #[must_use]
    pub fn new(formula: AccrualOnDefaultFormula) -> Self {
        Self { formula }
    }

    /// Returns the accrual-on-default formula.
    #[must_use]
    pub fn formula(&self) -> AccrualOnDefaultFormula {
        self.formula
    }

    /// Generates premium period boundaries from protection start to maturity.
    ///
    /// Periods roll forward from the protection start; the final period is a
    /// stub ending exactly at maturity.
    fn payment_dates(product: &Cds) -> CreditResult<Vec<Date>> {
        #[allow(clippy::cast_possible_wrap)]
        let step = product.payment_frequency().months_per_period() as i32;

        let mut dates = vec![product.protection_start()];
        let mut k = 1;
        loop {
            let date = product.protection_start().add_months(step * k)?;
            if date >= product.maturity() {
                break;
            }
            dates.push(date);
            k += 1;
        }
        dates.push(product.maturity());
        Ok(dates)
    }

    /// Integrates both legs over the premium period grid.
    ///
    /// Periods ending on or before the valuation date contribute nothing;
    /// the running period is integrated from the valuation date.
    fn leg_terms(
        &self,
        product: &Cds,
        discount: &DiscountCurve<DiscreteCurve>,
        credit: &SurvivalCurve<DiscreteCurve>,
        valuation: Date,
    ) -> CreditResult<LegTerms> {
        let dates = Self::payment_dates(product)?;
        let mut terms = LegTerms {
            coupon_annuity: 0.0,
            accrual_annuity: 0.0,
            protection: 0.0,
        };

        let mut prev = dates[0];
        for &date in &dates[1..] {
            let s = valuation.year_fraction(&prev);
            let e = valuation.year_fraction(&date);
            prev = date;
            if e <= 0.0 {
                continue;
            }

            let a = s.max(0.0);
            let delta = e - s;
            let q_a = credit.survival_probability_at_tenor(a)?;
            let q_e = credit.survival_probability_at_tenor(e)?;
            let df_e = discount.discount_factor_at_tenor(e)?;

            terms.coupon_annuity += delta * df_e * q_e;

            match self.formula {
                AccrualOnDefaultFormula::OriginalIsda => {
                    // Accrued at default approximated by half the period,
                    // discounted at the period midpoint.
                    let mid = 0.5 * (a + e);
                    let df_mid = discount.discount_factor_at_tenor(mid)?;
                    let dp = (q_a - q_e).max(0.0);
                    terms.accrual_annuity += 0.5 * delta * df_mid * dp;
                    terms.protection += df_mid * dp;
                }
                AccrualOnDefaultFormula::MarkitFix => {
                    // Split the period; accrued grows from the period start
                    // through each half.
                    let m = 0.5 * (a + e);
                    let q_m = credit.survival_probability_at_tenor(m)?;
                    for (lo, hi, q_lo, q_hi) in [(a, m, q_a, q_m), (m, e, q_m, q_e)] {
                        let mid = 0.5 * (lo + hi);
                        let df_mid = discount.discount_factor_at_tenor(mid)?;
                        let dp = (q_lo - q_hi).max(0.0);
                        terms.accrual_annuity += (mid - s) * df_mid * dp;
                        terms.protection += df_mid * dp;
                    }
                }
            }
        }

        Ok(terms)
    }

    /// Premium accrued from the running period's start to the valuation
    /// date, per unit notional.
    fn accrued_premium(product: &Cds, valuation: Date) -> CreditResult<f64> {
        if valuation <= product.protection_start() || valuation >= product.maturity() {
            return Ok(0.0);
        }

        let dates = Self::payment_dates(product)?;
        let mut prev = dates[0];
        for &date in &dates[1..] {
            if date > valuation {
                return Ok(prev.year_fraction(&valuation) * product.fixed_rate());
            }
            prev = date;
        }
        Ok(0.0)
    }
}

impl CdsPricer for IsdaCdsPricer {
    fn price_on_settle(
        &self,
        trade: &CdsTrade,
        provider: &CreditRatesProvider,
        price_type: PriceType,
    ) -> CreditResult<Money> {
        let product = trade.product();
        let currency = product.currency();
        let discount = provider.discount_factors(currency)?;
        let credit = provider.survival_probabilities(product.legal_entity(), currency)?;
        let recovery = provider.recovery_rates(product.legal_entity())?;
        let valuation = provider.valuation_date();

        let terms = self.leg_terms(product, discount, credit, valuation)?;
        let annuity = terms.coupon_annuity + terms.accrual_annuity;
        let lgd = 1.0 - recovery.recovery_rate(valuation);

        let protection_pv = lgd * terms.protection;
        let premium_pv = product.fixed_rate() * annuity;
        let sign = product.side().sign();
        let mut pv = sign * product.notional() * (protection_pv - premium_pv);

        if price_type == PriceType::Clean {
            pv += sign * product.notional() * Self::accrued_premium(product, valuation)?;
        }
        if let Some(upfront) = trade.upfront() {
            pv -= sign * upfront.amount();
        }

        trace!(
            "CDS PV {currency} {pv:.6} (protection {protection_pv:.6e}, annuity {annuity:.6e})"
        );
        Ok(Money::new(pv, currency))
    }

    fn par_spread(&self, trade: &CdsTrade, provider: &CreditRatesProvider) -> CreditResult<f64> {
        let product = trade.product();
        let currency = product.currency();
        let discount = provider.discount_factors(currency)?;
        let credit = provider.survival_probabilities(product.legal_entity(), currency)?;
        let recovery = provider.recovery_rates(product.legal_entity())?;
        let valuation = provider.valuation_date();

        let terms = self.leg_terms(product, discount, credit, valuation)?;
        let annuity = terms.coupon_annuity + terms.accrual_annuity;
        if annuity <= 1e-14 {
            return Err(CreditError::pricing(format!(
                "risky annuity vanished for trade maturing {}",
                product.maturity()
            )));
        }

        let lgd = 1.0 - recovery.recovery_rate(valuation);
        Ok(lgd * terms.protection / annuity)
    }
}

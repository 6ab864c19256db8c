//! Credit-curve calibration contracts and implementations.

mod sequential;

pub use sequential::SequentialCreditCalibrator;

use crate::cds::CdsTrade;
use crate::error::{CreditError, CreditResult};
use crate::market::{CreditCurveRef, CreditRatesProvider};
use crate::pricing::CdsPricer;

/// A calibrated credit curve, shared by reference.
pub type CalibratedCurve = CreditCurveRef;

/// Calibration contract: build a credit curve repricing a set of CDS quotes.
///
/// Given calibration instruments and one target par spread per instrument,
/// implementations must produce a survival curve such that pricing every
/// instrument at its target spread against {provider discount curve,
/// provider recovery rates, produced credit curve} gives zero value within
/// numerical tolerance.
pub trait CreditCurveCalibrator: Send + Sync {
    /// Calibrates a credit curve to the given par spreads.
    ///
    /// `curve_name` labels the produced curve in diagnostics. The provider
    /// supplies the valuation date, discount curve, and recovery rates; its
    /// existing credit curve (if any) is ignored.
    fn calibrate(
        &self,
        instruments: &[CdsTrade],
        par_spreads: &[f64],
        curve_name: &str,
        provider: &CreditRatesProvider,
    ) -> CreditResult<CalibratedCurve>;
}

/// Extracts the par spread of each instrument under the provider's
/// *existing* credit curve.
///
/// This is the "base" target vector for calibration: the spreads that make
/// each instrument's risk-neutral value zero under current market data.
///
/// # Errors
///
/// Fails if the instrument list is empty or any required curve is missing
/// from the provider.
pub fn implied_spreads<P: CdsPricer>(
    pricer: &P,
    instruments: &[CdsTrade],
    provider: &CreditRatesProvider,
) -> CreditResult<Vec<f64>> {
    if instruments.is_empty() {
        return Err(CreditError::validation(
            "cannot extract implied spreads from an empty instrument set",
        ));
    }
    instruments
        .iter()
        .map(|instrument| pricer.par_spread(instrument, provider))
        .collect()
}

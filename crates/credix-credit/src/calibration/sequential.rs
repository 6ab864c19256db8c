//! Sequential credit-curve bootstrap.
//!
//! Solves curve nodes in maturity order: node i's hazard is found by
//! root-finding on the value of calibration instrument i, holding the
//! already-solved shorter nodes fixed. Node i therefore depends only on
//! instruments with maturity <= its own tenor.

use std::sync::Arc;

use log::debug;

use credix_curves::wrappers::SurvivalCurve;
use credix_math::solvers::{brent, expand_bracket, SolverConfig};

use crate::calibration::{CalibratedCurve, CreditCurveCalibrator};
use crate::cds::CdsTrade;
use crate::error::{CreditError, CreditResult};
use crate::market::CreditRatesProvider;
use crate::pricing::{AccrualOnDefaultFormula, CdsPricer, IsdaCdsPricer, PriceType};

/// Lower end of the hazard-rate search bracket.
const HAZARD_FLOOR: f64 = 1e-10;

/// Initial upper end of the hazard-rate search bracket, grown as needed.
const HAZARD_CEILING: f64 = 0.5;

/// Maximum bracket doublings before giving up on a node.
const MAX_BRACKET_DOUBLINGS: u32 = 40;

/// Per-unit residual below which a node is treated as already at par.
const ZERO_RESIDUAL: f64 = 1e-9;

/// Sequential bootstrap calibrator for credit curves.
///
/// The produced curve carries one piecewise-constant hazard node per
/// calibration instrument, with survival probabilities interpolated
/// log-linearly between nodes.
///
/// The pricer embedded here must use the same accrual-on-default formula as
/// the pricer that later consumes the calibrated curve.
///
/// # Example
///
/// ```rust,ignore
/// let calibrator = SequentialCreditCalibrator::isda(AccrualOnDefaultFormula::OriginalIsda);
/// let curve = calibrator.calibrate(&instruments, &spreads, "base", &provider)?;
/// ```
#[derive(Debug, Clone)]
pub struct SequentialCreditCalibrator<P: CdsPricer> {
    /// Pricer used to value trial curves during the node solves.
    pricer: P,
    /// Root-finder configuration.
    solver: SolverConfig,
}

impl SequentialCreditCalibrator<IsdaCdsPricer> {
    /// Creates a calibrator around an ISDA-style pricer with the given
    /// accrual-on-default formula.
    #[must_use]
    pub fn isda(formula: AccrualOnDefaultFormula) -> Self {
        Self::new(IsdaCdsPricer::new(formula))
    }
}

impl<P: CdsPricer> SequentialCreditCalibrator<P> {
    /// Creates a calibrator around the given pricer.
    #[must_use]
    pub fn new(pricer: P) -> Self {
        Self {
            pricer,
            solver: SolverConfig::default(),
        }
    }

    /// Overrides the root-finder configuration.
    #[must_use]
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Validates the instrument set and returns its node tenors.
    fn node_tenors(
        instruments: &[CdsTrade],
        par_spreads: &[f64],
        provider: &CreditRatesProvider,
    ) -> CreditResult<Vec<f64>> {
        if instruments.is_empty() {
            return Err(CreditError::validation(
                "cannot calibrate to an empty instrument set",
            ));
        }
        if instruments.len() != par_spreads.len() {
            return Err(CreditError::validation(format!(
                "{} instruments but {} par spreads",
                instruments.len(),
                par_spreads.len()
            )));
        }

        let first = instruments[0].product();
        for (i, instrument) in instruments.iter().enumerate().skip(1) {
            let product = instrument.product();
            if product.legal_entity() != first.legal_entity() {
                return Err(CreditError::validation(format!(
                    "calibration instrument {i} references {}, expected {}",
                    product.legal_entity(),
                    first.legal_entity()
                )));
            }
            if product.currency() != first.currency() {
                return Err(CreditError::validation(format!(
                    "calibration instrument {i} is denominated in {}, expected {}",
                    product.currency(),
                    first.currency()
                )));
            }
        }

        let valuation = provider.valuation_date();
        let mut tenors = Vec::with_capacity(instruments.len());
        for (i, instrument) in instruments.iter().enumerate() {
            let tenor = valuation.year_fraction(&instrument.product().maturity());
            if tenor <= 0.0 {
                return Err(CreditError::validation(format!(
                    "calibration instrument {i} matures on or before the valuation date"
                )));
            }
            if let Some(&prev) = tenors.last() {
                if tenor <= prev {
                    return Err(CreditError::validation(format!(
                        "calibration instruments must be strictly increasing in maturity, \
                         instrument {i} has tenor {tenor:.4} after {prev:.4}"
                    )));
                }
            }
            tenors.push(tenor);
        }
        Ok(tenors)
    }
}

impl<P: CdsPricer> CreditCurveCalibrator for SequentialCreditCalibrator<P> {
    fn calibrate(
        &self,
        instruments: &[CdsTrade],
        par_spreads: &[f64],
        curve_name: &str,
        provider: &CreditRatesProvider,
    ) -> CreditResult<CalibratedCurve> {
        let tenors = Self::node_tenors(instruments, par_spreads, provider)?;
        let first = instruments[0].product();
        let entity = first.legal_entity().clone();
        let currency = first.currency();
        let valuation = provider.valuation_date();

        let mut hazards: Vec<f64> = Vec::with_capacity(instruments.len());

        for (i, instrument) in instruments.iter().enumerate() {
            let at_target =
                CdsTrade::of(instrument.product().with_fixed_rate(par_spreads[i]));
            let notional = at_target.product().notional();

            // Per-unit value of instrument i as a function of node i's
            // hazard, with nodes 0..i held at their solved values.
            let objective = |hazard: f64| -> f64 {
                let mut trial = hazards.clone();
                trial.push(hazard.max(HAZARD_FLOOR));
                let curve = match SurvivalCurve::from_piecewise_hazard(
                    valuation,
                    &tenors[..=i],
                    &trial,
                ) {
                    Ok(curve) => curve,
                    Err(_) => return f64::NAN,
                };
                let candidate =
                    provider.with_credit_curve(entity.clone(), currency, Arc::new(curve));
                match self
                    .pricer
                    .price_on_settle(&at_target, &candidate, PriceType::Clean)
                {
                    Ok(pv) => pv.amount() / notional,
                    Err(_) => f64::NAN,
                }
            };

            // A target spread at (or numerically at) zero pins the node to
            // the hazard floor; there is no sign change to bracket.
            let at_floor = objective(HAZARD_FLOOR);
            if at_floor.abs() <= ZERO_RESIDUAL {
                debug!(
                    "{curve_name}: node {i} tenor {:.4} pinned at hazard floor",
                    tenors[i]
                );
                hazards.push(HAZARD_FLOOR);
                continue;
            }

            let (lo, hi) =
                expand_bracket(&objective, HAZARD_FLOOR, HAZARD_CEILING, MAX_BRACKET_DOUBLINGS)
                    .map_err(|e| {
                        CreditError::calibration(format!(
                            "{curve_name}: node {i} (tenor {:.4}) could not be bracketed: {e}",
                            tenors[i]
                        ))
                    })?;
            let solved = brent(&objective, lo, hi, &self.solver)?;

            debug!(
                "{curve_name}: node {i} tenor {:.4} hazard {:.6e} residual {:.2e} \
                 ({} iterations)",
                tenors[i], solved.root, solved.residual, solved.iterations
            );
            hazards.push(solved.root.max(HAZARD_FLOOR));
        }

        let curve = SurvivalCurve::from_piecewise_hazard(valuation, &tenors, &hazards)?;
        Ok(Arc::new(curve))
    }
}

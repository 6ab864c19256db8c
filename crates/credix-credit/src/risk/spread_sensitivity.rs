//! Finite-difference par-spread sensitivity (CS01).
//!
//! Computes the present-value sensitivity of a CDS trade to the par spreads
//! of bucketed calibration instruments by bump-and-reprice: extract the
//! spreads implied by the current curve, recalibrate, reprice, perturb, and
//! divide the PV delta by the bump size.

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use credix_core::types::Money;

use crate::calibration::{implied_spreads, CreditCurveCalibrator, SequentialCreditCalibrator};
use crate::cds::CdsTrade;
use crate::error::{CreditError, CreditResult};
use crate::market::CreditRatesProvider;
use crate::pricing::{AccrualOnDefaultFormula, CdsPricer, IsdaCdsPricer, PriceType};

/// Minimum bump magnitude accepted at construction.
///
/// This bound only guards against a structurally degenerate divisor; it does
/// not guarantee that the finite difference produces reliable numbers.
pub const MIN_BUMP_MAGNITUDE: f64 = 1e-10;

/// One basis point, the default bump amount.
pub const ONE_BASIS_POINT: f64 = 1e-4;

/// Diagnostic label for the base calibration.
const BASE_CURVE_NAME: &str = "base-implied-credit-curve";

/// Diagnostic label for bumped calibrations.
const BUMPED_CURVE_NAME: &str = "bumped-implied-credit-curve";

/// Finite-difference spread sensitivity calculator.
///
/// Generic over the calibrator and pricer so both can be replaced by test
/// doubles. The two collaborators must share one accrual-on-default formula
/// for the lifetime of the calculator; a curve bootstrapped under one
/// convention does not reprice consistently under another, silently biasing
/// every sensitivity. The [`SpreadSensitivityCalculator::isda`] constructor
/// takes the formula once and wires both sides from it.
///
/// # Example
///
/// ```rust,ignore
/// let calculator = SpreadSensitivityCalculator::isda(AccrualOnDefaultFormula::OriginalIsda);
///
/// // Aggregate exposure to a uniform move of the whole spread curve
/// let parallel = calculator.parallel_cs01(&trade, &bucket, &provider)?;
///
/// // Per-tenor decomposition; sums to roughly the parallel figure
/// let bucketed = calculator.bucketed_cs01(&trade, &bucket, &provider)?;
/// ```
#[derive(Debug, Clone)]
pub struct SpreadSensitivityCalculator<C, P> {
    /// Credit-curve calibrator.
    calibrator: C,
    /// Trade pricer.
    pricer: P,
    /// Finite-difference bump applied to par spreads.
    bump_amount: f64,
}

impl SpreadSensitivityCalculator<SequentialCreditCalibrator<IsdaCdsPricer>, IsdaCdsPricer> {
    /// Creates a calculator around the ISDA-style calibrator and pricer,
    /// both using the given accrual-on-default formula, with a one basis
    /// point bump.
    #[must_use]
    pub fn isda(formula: AccrualOnDefaultFormula) -> Self {
        Self {
            calibrator: SequentialCreditCalibrator::isda(formula),
            pricer: IsdaCdsPricer::new(formula),
            bump_amount: ONE_BASIS_POINT,
        }
    }

    /// Creates an ISDA-style calculator with an explicit bump amount.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bump magnitude does not exceed
    /// [`MIN_BUMP_MAGNITUDE`].
    pub fn isda_with_bump(
        formula: AccrualOnDefaultFormula,
        bump_amount: f64,
    ) -> CreditResult<Self> {
        Self::new(
            SequentialCreditCalibrator::isda(formula),
            IsdaCdsPricer::new(formula),
            bump_amount,
        )
    }
}

impl<C, P> SpreadSensitivityCalculator<C, P>
where
    C: CreditCurveCalibrator,
    P: CdsPricer,
{
    /// Creates a calculator from explicit collaborators.
    ///
    /// The caller is responsible for constructing the calibrator and pricer
    /// with the same accrual-on-default formula.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bump magnitude does not exceed
    /// [`MIN_BUMP_MAGNITUDE`] or is not finite.
    pub fn new(calibrator: C, pricer: P, bump_amount: f64) -> CreditResult<Self> {
        if !bump_amount.is_finite() || bump_amount.abs() <= MIN_BUMP_MAGNITUDE {
            return Err(CreditError::configuration(format!(
                "bump amount magnitude must exceed {MIN_BUMP_MAGNITUDE:e}, got {bump_amount:e}"
            )));
        }
        Ok(Self {
            calibrator,
            pricer,
            bump_amount,
        })
    }

    /// Returns the configured bump amount.
    #[must_use]
    pub fn bump_amount(&self) -> f64 {
        self.bump_amount
    }

    /// Computes the parallel CS01: PV sensitivity to a uniform shift of
    /// every bucket spread.
    ///
    /// Exactly one calibration and one pricing call for the base state and
    /// one of each for the uniformly bumped state, regardless of bucket
    /// count.
    ///
    /// # Errors
    ///
    /// Fails fast on bucket validation, and propagates calibration and
    /// pricing failures unchanged without retrying; no partial result is
    /// returned.
    pub fn parallel_cs01(
        &self,
        trade: &CdsTrade,
        bucket: &[CdsTrade],
        provider: &CreditRatesProvider,
    ) -> CreditResult<Money> {
        check_cds_bucket(trade, bucket)?;
        let currency = trade.product().currency();

        let base_spreads = implied_spreads(&self.pricer, bucket, provider)?;
        let pv_base = self.reprice(trade, bucket, provider, &base_spreads, BASE_CURVE_NAME)?;

        let bumped_spreads: Vec<f64> =
            base_spreads.iter().map(|s| s + self.bump_amount).collect();
        let pv_bumped =
            self.reprice(trade, bucket, provider, &bumped_spreads, BUMPED_CURVE_NAME)?;

        debug!("parallel CS01: base PV {pv_base:.6}, bumped PV {pv_bumped:.6}");
        Ok(Money::new(
            (pv_bumped - pv_base) / self.bump_amount,
            currency,
        ))
    }

    /// Computes bucketed CS01s: one PV sensitivity per calibration
    /// instrument, bumping that instrument's spread only.
    ///
    /// The base calibration and PV are computed once and shared across all
    /// buckets, so the cost is one calibration+pricing pair per bucket plus
    /// the shared base pair. The result is ordered like the bucket.
    ///
    /// With the `parallel` feature the per-bucket loop fans out over a
    /// thread pool; the base provider is read-shared and results are
    /// collected by index, so ordering and values are identical to the
    /// sequential path.
    ///
    /// # Errors
    ///
    /// Fails fast on bucket validation, and propagates calibration and
    /// pricing failures unchanged; a failure for any bucket aborts the whole
    /// computation rather than returning partial sensitivities.
    pub fn bucketed_cs01(
        &self,
        trade: &CdsTrade,
        bucket: &[CdsTrade],
        provider: &CreditRatesProvider,
    ) -> CreditResult<Vec<Money>> {
        check_cds_bucket(trade, bucket)?;
        let currency = trade.product().currency();

        let base_spreads = implied_spreads(&self.pricer, bucket, provider)?;
        let pv_base = self.reprice(trade, bucket, provider, &base_spreads, BASE_CURVE_NAME)?;
        debug!("bucketed CS01: base PV {pv_base:.6}, {} buckets", bucket.len());

        let per_bucket = |i: usize| -> CreditResult<Money> {
            let mut spreads = base_spreads.clone();
            spreads[i] += self.bump_amount;
            let pv = self.reprice(trade, bucket, provider, &spreads, BUMPED_CURVE_NAME)?;
            Ok(Money::new((pv - pv_base) / self.bump_amount, currency))
        };

        #[cfg(feature = "parallel")]
        {
            (0..bucket.len()).into_par_iter().map(per_bucket).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..bucket.len()).map(per_bucket).collect()
        }
    }

    /// Calibrates a curve to the given spreads, substitutes it into a fresh
    /// provider, and returns the trade's dirty PV under it.
    fn reprice(
        &self,
        trade: &CdsTrade,
        bucket: &[CdsTrade],
        provider: &CreditRatesProvider,
        spreads: &[f64],
        curve_name: &str,
    ) -> CreditResult<f64> {
        let product = trade.product();
        let curve = self
            .calibrator
            .calibrate(bucket, spreads, curve_name, provider)?;
        let shifted = provider.with_credit_curve(
            product.legal_entity().clone(),
            product.currency(),
            curve,
        );
        let pv = self
            .pricer
            .price_on_settle(trade, &shifted, PriceType::Dirty)?;
        Ok(pv.amount())
    }
}

/// Validates a trade against its bucket instrument set.
///
/// Every instrument must share the trade's legal entity and currency, the
/// instruments must be strictly increasing in maturity, and the trade
/// maturity must lie within the bucket maturity range (endpoints included).
fn check_cds_bucket(trade: &CdsTrade, bucket: &[CdsTrade]) -> CreditResult<()> {
    if bucket.is_empty() {
        return Err(CreditError::validation("bucket instrument set is empty"));
    }

    let product = trade.product();
    for (i, instrument) in bucket.iter().enumerate() {
        let bucket_product = instrument.product();
        if bucket_product.legal_entity() != product.legal_entity() {
            return Err(CreditError::validation(format!(
                "bucket instrument {i} references {}, trade references {}",
                bucket_product.legal_entity(),
                product.legal_entity()
            )));
        }
        if bucket_product.currency() != product.currency() {
            return Err(CreditError::validation(format!(
                "bucket instrument {i} is denominated in {}, trade in {}",
                bucket_product.currency(),
                product.currency()
            )));
        }
    }

    for i in 1..bucket.len() {
        let prev = bucket[i - 1].product().maturity();
        let current = bucket[i].product().maturity();
        if current <= prev {
            return Err(CreditError::validation(format!(
                "bucket maturities must be strictly increasing: instrument {i} matures \
                 {current}, previous matures {prev}"
            )));
        }
    }

    let first = bucket[0].product().maturity();
    let last = bucket[bucket.len() - 1].product().maturity();
    if product.maturity() < first || product.maturity() > last {
        return Err(CreditError::validation(format!(
            "trade maturity {} outside bucket maturity range [{first}, {last}]",
            product.maturity()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use credix_core::types::{Currency, Date, EntityId, Frequency};
    use credix_curves::curves::DiscreteCurve;
    use credix_curves::value_type::ValueType;
    use credix_curves::wrappers::{DiscountCurve, RecoveryRates, SurvivalCurve};

    use crate::calibration::CalibratedCurve;
    use crate::cds::{Cds, ProtectionSide};

    const LGD: f64 = 0.6;
    const SCALE: f64 = 1_000_000.0;

    /// Counting calibrator double: node hazards proportional to the target
    /// spreads.
    struct RecordingCalibrator {
        calls: Arc<AtomicUsize>,
    }

    impl CreditCurveCalibrator for RecordingCalibrator {
        fn calibrate(
            &self,
            instruments: &[CdsTrade],
            par_spreads: &[f64],
            _curve_name: &str,
            provider: &CreditRatesProvider,
        ) -> CreditResult<CalibratedCurve> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let valuation = provider.valuation_date();
            let tenors: Vec<f64> = instruments
                .iter()
                .map(|q| valuation.year_fraction(&q.product().maturity()))
                .collect();
            let hazards: Vec<f64> = par_spreads.iter().map(|s| s / LGD).collect();
            let curve = SurvivalCurve::from_piecewise_hazard(valuation, &tenors, &hazards)?;
            Ok(Arc::new(curve))
        }
    }

    /// Counting pricer double whose PV is linear in the spreads embedded in
    /// the credit curve, so bucketed sensitivities sum exactly to the
    /// parallel one.
    struct LinearPricer {
        calls: Arc<AtomicUsize>,
    }

    impl CdsPricer for LinearPricer {
        fn price_on_settle(
            &self,
            trade: &CdsTrade,
            provider: &CreditRatesProvider,
            _price_type: PriceType,
        ) -> CreditResult<Money> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let product = trade.product();
            let curve =
                provider.survival_probabilities(product.legal_entity(), product.currency())?;
            // Cumulative hazard is linear in the calibrated spreads
            let mut pv = 0.0;
            for &t in curve.node_tenors() {
                let q = curve.survival_probability_at_tenor(t)?;
                pv -= SCALE * q.ln();
            }
            Ok(Money::new(pv, product.currency()))
        }

        fn par_spread(
            &self,
            _trade: &CdsTrade,
            _provider: &CreditRatesProvider,
        ) -> CreditResult<f64> {
            Ok(0.01)
        }
    }

    struct Counters {
        calibrations: Arc<AtomicUsize>,
        pricings: Arc<AtomicUsize>,
    }

    fn calculator() -> (
        SpreadSensitivityCalculator<RecordingCalibrator, LinearPricer>,
        Counters,
    ) {
        let calibrations = Arc::new(AtomicUsize::new(0));
        let pricings = Arc::new(AtomicUsize::new(0));
        let calc = SpreadSensitivityCalculator::new(
            RecordingCalibrator {
                calls: calibrations.clone(),
            },
            LinearPricer {
                calls: pricings.clone(),
            },
            ONE_BASIS_POINT,
        )
        .unwrap();
        (
            calc,
            Counters {
                calibrations,
                pricings,
            },
        )
    }

    fn today() -> Date {
        Date::from_ymd(2026, 1, 1).unwrap()
    }

    fn entity() -> EntityId {
        EntityId::new("ACME-CORP")
    }

    fn cds(entity: EntityId, currency: Currency, maturity_years: i32) -> CdsTrade {
        CdsTrade::of(
            Cds::new(
                entity,
                currency,
                today(),
                today().add_years(maturity_years).unwrap(),
                0.01,
                10_000_000.0,
                Frequency::Quarterly,
                ProtectionSide::Buy,
            )
            .unwrap(),
        )
    }

    fn bucket(maturities: &[i32]) -> Vec<CdsTrade> {
        maturities
            .iter()
            .map(|&y| cds(entity(), Currency::USD, y))
            .collect()
    }

    fn provider() -> CreditRatesProvider {
        let discount = DiscreteCurve::flat(today(), 30.0, 0.03, ValueType::ZeroRate).unwrap();
        let credit =
            SurvivalCurve::from_piecewise_hazard(today(), &[1.0, 5.0, 10.0], &[0.02; 3]).unwrap();
        CreditRatesProvider::builder(today())
            .discount_curve(
                Currency::USD,
                Arc::new(DiscountCurve::new(discount).unwrap()),
            )
            .recovery_rates(entity(), RecoveryRates::flat(0.40).unwrap())
            .credit_curve(entity(), Currency::USD, Arc::new(credit))
            .build()
            .unwrap()
    }

    #[test]
    fn test_construction_rejects_degenerate_bumps() {
        let make = |bump: f64| {
            SpreadSensitivityCalculator::new(
                RecordingCalibrator {
                    calls: Arc::new(AtomicUsize::new(0)),
                },
                LinearPricer {
                    calls: Arc::new(AtomicUsize::new(0)),
                },
                bump,
            )
        };
        assert!(matches!(make(0.0), Err(CreditError::Configuration { .. })));
        assert!(matches!(make(1e-11), Err(CreditError::Configuration { .. })));
        assert!(matches!(make(-1e-11), Err(CreditError::Configuration { .. })));
        assert!(matches!(make(f64::NAN), Err(CreditError::Configuration { .. })));
        // A negative bump of sufficient magnitude is legal
        assert!(make(-1e-4).is_ok());
    }

    #[test]
    fn test_parallel_uses_two_round_trips() {
        let (calc, counters) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        calc.parallel_cs01(&trade, &bucket(&[1, 2, 3, 4, 5]), &provider())
            .unwrap();
        assert_eq!(counters.calibrations.load(Ordering::SeqCst), 2);
        assert_eq!(counters.pricings.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_bucketed_uses_one_round_trip_per_bucket_plus_base() {
        let (calc, counters) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let result = calc
            .bucketed_cs01(&trade, &bucket(&[1, 2, 3, 4, 5]), &provider())
            .unwrap();
        assert_eq!(result.len(), 5);
        assert_eq!(counters.calibrations.load(Ordering::SeqCst), 6);
        assert_eq!(counters.pricings.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_bucketed_sums_to_parallel_for_linear_pricer() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let instruments = bucket(&[1, 2, 3, 4, 5]);
        let p = provider();

        let parallel = calc.parallel_cs01(&trade, &instruments, &p).unwrap();
        let bucketed = calc.bucketed_cs01(&trade, &instruments, &p).unwrap();
        let total: f64 = bucketed.iter().map(Money::amount).sum();

        assert_relative_eq!(total, parallel.amount(), max_relative = 1e-9);
    }

    #[test]
    fn test_single_bucket_parallel_equals_bucketed() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 5);
        let instruments = bucket(&[5]);
        let p = provider();

        let parallel = calc.parallel_cs01(&trade, &instruments, &p).unwrap();
        let bucketed = calc.bucketed_cs01(&trade, &instruments, &p).unwrap();

        assert_eq!(bucketed.len(), 1);
        assert_relative_eq!(
            bucketed[0].amount(),
            parallel.amount(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_result_currency_matches_trade() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let result = calc
            .parallel_cs01(&trade, &bucket(&[1, 3, 5]), &provider())
            .unwrap();
        assert_eq!(result.currency(), Currency::USD);
    }

    #[test]
    fn test_determinism() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let instruments = bucket(&[1, 2, 3, 4, 5]);
        let p = provider();

        let first = calc.bucketed_cs01(&trade, &instruments, &p).unwrap();
        let second = calc.bucketed_cs01(&trade, &instruments, &p).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert!((a.amount() - b.amount()).abs() == 0.0, "results must be bit-identical");
        }
    }

    #[test]
    fn test_validation_rejects_wrong_entity() {
        let (calc, counters) = calculator();
        let trade = cds(EntityId::new("OTHER-CORP"), Currency::USD, 3);
        let result = calc.parallel_cs01(&trade, &bucket(&[1, 3, 5]), &provider());
        assert!(matches!(result, Err(CreditError::Validation { .. })));
        // Fail-fast: no numerical work was attempted
        assert_eq!(counters.calibrations.load(Ordering::SeqCst), 0);
        assert_eq!(counters.pricings.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_validation_rejects_wrong_currency() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::EUR, 3);
        assert!(matches!(
            calc.parallel_cs01(&trade, &bucket(&[1, 3, 5]), &provider()),
            Err(CreditError::Validation { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_unordered_bucket() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let instruments = bucket(&[1, 5, 3]);
        assert!(matches!(
            calc.bucketed_cs01(&trade, &instruments, &provider()),
            Err(CreditError::Validation { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_duplicate_maturities() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        let instruments = bucket(&[1, 3, 3, 5]);
        assert!(matches!(
            calc.bucketed_cs01(&trade, &instruments, &provider()),
            Err(CreditError::Validation { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_trade_beyond_bucket_range() {
        let (calc, counters) = calculator();
        let trade = cds(entity(), Currency::USD, 7);
        let result = calc.parallel_cs01(&trade, &bucket(&[1, 3, 5]), &provider());
        assert!(matches!(result, Err(CreditError::Validation { .. })));
        assert_eq!(counters.calibrations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_validation_rejects_trade_before_bucket_range() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 1);
        assert!(matches!(
            calc.parallel_cs01(&trade, &bucket(&[2, 3, 5]), &provider()),
            Err(CreditError::Validation { .. })
        ));
    }

    #[test]
    fn test_validation_accepts_trade_at_bucket_endpoints() {
        let (calc, _) = calculator();
        let p = provider();
        let at_first = cds(entity(), Currency::USD, 1);
        let at_last = cds(entity(), Currency::USD, 5);
        assert!(calc
            .parallel_cs01(&at_first, &bucket(&[1, 3, 5]), &p)
            .is_ok());
        assert!(calc.parallel_cs01(&at_last, &bucket(&[1, 3, 5]), &p).is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_bucket() {
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 3);
        assert!(matches!(
            calc.parallel_cs01(&trade, &[], &provider()),
            Err(CreditError::Validation { .. })
        ));
    }

    #[test]
    fn test_bracket_by_interpolation_succeeds() {
        // No instrument matures exactly at the trade's 4Y maturity, but the
        // bucket brackets it.
        let (calc, _) = calculator();
        let trade = cds(entity(), Currency::USD, 4);
        assert!(calc
            .bucketed_cs01(&trade, &bucket(&[1, 3, 5, 7]), &provider())
            .is_ok());
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(16))]

        /// With a pricer that is exactly linear in the spreads, the scaled
        /// finite difference is independent of the bump size.
        #[test]
        fn prop_linear_sensitivity_invariant_to_bump_size(bump in 1e-6f64..1e-3) {
            let (reference, _) = calculator();
            let calibrations = Arc::new(AtomicUsize::new(0));
            let pricings = Arc::new(AtomicUsize::new(0));
            let scaled = SpreadSensitivityCalculator::new(
                RecordingCalibrator { calls: calibrations },
                LinearPricer { calls: pricings },
                bump,
            )
            .unwrap();

            let trade = cds(entity(), Currency::USD, 3);
            let instruments = bucket(&[1, 2, 3, 4, 5]);
            let p = provider();

            let a = reference.parallel_cs01(&trade, &instruments, &p).unwrap();
            let b = scaled.parallel_cs01(&trade, &instruments, &p).unwrap();
            proptest::prop_assert!((a.amount() - b.amount()).abs() <= 1e-6 * a.amount().abs());
        }
    }
}

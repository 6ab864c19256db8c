//! # Credix Credit
//!
//! CDS analytics for the Credix credit derivatives library: product model,
//! market-data provider, ISDA-style pricing, credit-curve calibration, and
//! the finite-difference par-spread sensitivity (CS01) engine.
//!
//! ## Components
//!
//! - **Products**: [`cds::Cds`] and [`cds::CdsTrade`], immutable resolved trades
//! - **Market Data**: [`market::CreditRatesProvider`], an immutable snapshot of
//!   discount, recovery, and credit curves with structural-sharing updates
//! - **Pricing**: [`pricing::CdsPricer`] contract and the concrete
//!   [`pricing::IsdaCdsPricer`]
//! - **Calibration**: [`calibration::CreditCurveCalibrator`] contract and the
//!   concrete [`calibration::SequentialCreditCalibrator`]
//! - **Risk**: [`risk::SpreadSensitivityCalculator`], bump-and-reprice CS01
//!   in parallel and bucketed form
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use credix_credit::prelude::*;
//!
//! let calculator = SpreadSensitivityCalculator::isda(AccrualOnDefaultFormula::OriginalIsda);
//! let cs01 = calculator.parallel_cs01(&trade, &bucket, &provider)?;
//! let bucketed = calculator.bucketed_cs01(&trade, &bucket, &provider)?;
//! assert_eq!(bucketed.len(), bucket.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod calibration;
pub mod cds;
pub mod error;
pub mod market;
pub mod pricing;
pub mod risk;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calibration::{
        implied_spreads, CalibratedCurve, CreditCurveCalibrator, SequentialCreditCalibrator,
    };
    pub use crate::cds::{Cds, CdsTrade, ProtectionSide};
    pub use crate::error::{CreditError, CreditResult};
    pub use crate::market::{CreditRatesProvider, CreditRatesProviderBuilder};
    pub use crate::pricing::{AccrualOnDefaultFormula, CdsPricer, IsdaCdsPricer, PriceType};
    pub use crate::risk::SpreadSensitivityCalculator;
}

pub use error::{CreditError, CreditResult};

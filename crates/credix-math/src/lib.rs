//! # Credix Math
//!
//! Numerical routines for the Credix credit derivatives analytics library.
//!
//! This crate provides the root-finding layer used by curve calibration:
//!
//! - **Solvers**: Brent's method plus bracket expansion for one-dimensional
//!   root-finding on pricing functions
//!
//! ## Example
//!
//! ```rust
//! use credix_math::solvers::{brent, SolverConfig};
//!
//! // Find root of x^3 - x - 2
//! let f = |x: f64| x * x * x - x - 2.0;
//! let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
//! assert!(f(result.root).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{brent, expand_bracket, SolverConfig, SolverResult};

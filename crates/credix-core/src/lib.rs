//! # Credix Core
//!
//! Core types and abstractions for the Credix credit derivatives analytics library.
//!
//! This crate provides the foundational building blocks used throughout Credix:
//!
//! - **Types**: Domain-specific types like `Date`, `Money`, `Currency`, `EntityId`
//! - **Errors**: Structured error handling shared by the higher-level crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Immutability**: Data holders are constructed once and never mutated
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use credix_core::prelude::*;
//!
//! let valuation = Date::from_ymd(2026, 3, 20).unwrap();
//! let pv = Money::new(-12_500.0, Currency::USD);
//! let entity = EntityId::new("ACME-CORP");
//! assert_eq!(pv.currency(), Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date, EntityId, Frequency, Money};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date, EntityId, Frequency, Money};

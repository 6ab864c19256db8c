//! Legal-entity identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a legal entity referenced by a credit derivative.
///
/// A thin newtype over a string identifier (e.g. a RED code or an internal
/// obligor id). Hashable so it can key market-data lookups.
///
/// # Example
///
/// ```rust
/// use credix_core::types::EntityId;
///
/// let entity = EntityId::new("ACME-CORP");
/// assert_eq!(entity.as_str(), "ACME-CORP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new entity identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

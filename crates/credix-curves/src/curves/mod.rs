//! Concrete curve implementations.

mod discrete;

pub use discrete::DiscreteCurve;

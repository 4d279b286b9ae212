//! Core domain types, the crate-wide error enum, and stable serde payloads.

pub mod serialization;
pub mod types;

pub use serialization::{from_json, to_json_pretty, AnalysisRequest, AnalysisResponse};
pub use types::*;

/// Errors surfaced by the screening and scenario API.
///
/// An empty filter or ranking result is not an error; callers receive a
/// zero-length vector and branch on it. A non-positive return base is likewise
/// recovered locally as a 0 return rather than reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// Strategy token outside the supported enumeration.
    InvalidStrategy(String),
    /// Covered-call analysis requested without the current underlying price.
    MissingUnderlyingPrice(String),
    /// Input validation error.
    InvalidInput(String),
}

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStrategy(msg) => write!(f, "invalid strategy: {msg}"),
            Self::MissingUnderlyingPrice(msg) => write!(f, "missing underlying price: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ScreenError {}

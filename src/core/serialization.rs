//! Stable serde payloads for the request/response surface.
//!
//! These types define the natural wire shape when the screening core is
//! exposed behind a CLI or service boundary: one request carrying the chain
//! snapshot, the dates, and the scenario inputs; one response carrying the
//! three result sequences. Each request is stateless and independently
//! retryable since the whole pipeline is pure.
//!
//! # Examples
//! ```rust
//! use chrono::NaiveDate;
//! use optionscreen::core::{from_json, to_json_pretty, AnalysisRequest, Strategy};
//! use optionscreen::instruments::OptionContract;
//!
//! let request = AnalysisRequest {
//!     strategy: Strategy::LongCall,
//!     calls: vec![OptionContract::new(100.0, 5.0)],
//!     puts: vec![],
//!     expiration_date: NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
//!     evaluation_date: NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
//!     investment_amount: 600.0,
//!     underlying_price: None,
//!     target_breakeven: None,
//!     future_price: 120.0,
//!     selected: None,
//! };
//!
//! let json = to_json_pretty(&request).unwrap();
//! let decoded: AnalysisRequest = from_json(&json).unwrap();
//! assert_eq!(decoded, request);
//! ```

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analysis::{FilteredCandidate, RankedResult, ScenarioReport};
use crate::core::{ScreenError, Strategy};
use crate::instruments::OptionContract;

/// One complete analysis request.
///
/// `investment_amount` is per contract for long options, total capital for a
/// covered call, and collateral for a cash-secured put. `selected` optionally
/// names a row of the ranked output for detailed scenario evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Strategy under evaluation.
    pub strategy: Strategy,
    /// Call side of the chain snapshot.
    pub calls: Vec<OptionContract>,
    /// Put side of the chain snapshot.
    pub puts: Vec<OptionContract>,
    /// Expiration date of the chain.
    pub expiration_date: NaiveDate,
    /// Evaluation ("today") date for day-count arithmetic.
    pub evaluation_date: NaiveDate,
    /// Capital ceiling per contract, in dollars.
    pub investment_amount: f64,
    /// Current underlying price; required for covered calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_price: Option<f64>,
    /// Optional breakeven target for the filter stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_breakeven: Option<f64>,
    /// Hypothesized underlying price at expiration.
    pub future_price: f64,
    /// Ranked-list index to evaluate in detail, when chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
}

/// Pipeline output for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Budget/breakeven survivors, ascending by strike.
    pub filtered: Vec<FilteredCandidate>,
    /// Scenario returns, descending by annualized return.
    pub ranked: Vec<RankedResult>,
    /// Detailed report for the selected contract, when one was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioReport>,
}

/// Serializes a payload to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, ScreenError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| ScreenError::InvalidInput(format!("json serialization failed: {err}")))
}

/// Deserializes a payload from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ScreenError> {
    serde_json::from_str(json)
        .map_err(|err| ScreenError::InvalidInput(format!("json deserialization failed: {err}")))
}

//! Screening pipeline: contract filter, return ranker, and scenario
//! evaluator, plus the request-level entry point wiring them together.
//!
//! Control flow per analysis run: filter the strategy's chain side by budget
//! and breakeven, rank the survivors by annualized return at one hypothesized
//! future price, then (when the caller has picked a row) evaluate that
//! position in detail. All three stages share the `pricing::payoff` policy;
//! none re-implements any formula.

pub mod filter;
pub mod ranker;
pub mod scenario;

pub use filter::{filter_chain, filter_contracts, FilterCriteria, FilteredCandidate};
pub use ranker::{rank_by_annualized_return, RankedResult};
pub use scenario::{evaluate_scenario, ScenarioReport};

use crate::core::{AnalysisRequest, AnalysisResponse, ScreenError};
use crate::instruments::Position;
use crate::market::ExpirationContext;

/// Runs the full pipeline for one request.
///
/// Empty `filtered`/`ranked` vectors are a valid "no matches" response the
/// caller must branch on, not an error. The scenario report is produced only
/// when `selected` names a row of the ranked list; an out-of-range index is
/// rejected.
///
/// # Errors
/// - [`ScreenError::InvalidInput`] for a non-positive future price, a
///   negative budget, or an out-of-range selection.
/// - [`ScreenError::MissingUnderlyingPrice`] for covered-call requests
///   without an underlying price.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisResponse, ScreenError> {
    if !request.future_price.is_finite() || request.future_price <= 0.0 {
        return Err(ScreenError::InvalidInput(
            "expected future price must be > 0".to_string(),
        ));
    }

    let criteria = FilterCriteria {
        strategy: request.strategy,
        investment_amount: request.investment_amount,
        underlying_price: request.underlying_price,
        target_breakeven: request.target_breakeven,
    };
    let ctx = ExpirationContext::new(request.expiration_date, request.evaluation_date);

    let side = match request.strategy.option_type() {
        crate::core::OptionType::Call => &request.calls,
        crate::core::OptionType::Put => &request.puts,
    };
    let filtered = filter_contracts(side, &criteria)?;
    let ranked = rank_by_annualized_return(
        filtered.clone(),
        request.strategy,
        request.future_price,
        request.underlying_price,
        &ctx,
    )?;

    let scenario = match request.selected {
        Some(index) => {
            let picked = ranked.get(index).ok_or_else(|| {
                ScreenError::InvalidInput(format!(
                    "selected index {index} out of range for {} ranked contracts",
                    ranked.len()
                ))
            })?;
            let position = Position::open(
                request.strategy,
                picked.candidate.strike,
                picked.candidate.premium,
                request.underlying_price,
            )?;
            Some(evaluate_scenario(&position, request.future_price, &ctx))
        }
        None => None,
    };

    Ok(AnalysisResponse {
        filtered,
        ranked,
        scenario,
    })
}

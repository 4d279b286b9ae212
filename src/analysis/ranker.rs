//! Module `analysis::ranker`.
//!
//! Stage two of the pipeline: values every filtered candidate at one
//! hypothesized future underlying price and orders the batch by annualized
//! return, best first. All arithmetic is delegated to the shared payoff
//! policy.
//!
//! One scenario price per call, applied uniformly. Callers wanting a payoff
//! curve invoke the ranker over a price grid; the policy functions are pure
//! and price-parameterized, so nothing here caches between calls.

use serde::{Deserialize, Serialize};

use crate::analysis::filter::FilteredCandidate;
use crate::core::{ScreenError, Strategy};
use crate::instruments::Position;
use crate::market::ExpirationContext;
use crate::pricing::payoff;

/// Filtered candidate annotated with scenario return metrics.
///
/// `profit` is per share; `percent_return` and `annualized_return` are
/// fractions (0.20 = 20%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// The screened candidate being valued.
    pub candidate: FilteredCandidate,
    /// Expiry profit at the scenario price, per share.
    pub profit: f64,
    /// Holding-period return on the strategy's investment base.
    pub percent_return: f64,
    /// Holding-period return compounded to a 365-day basis.
    pub annualized_return: f64,
}

/// Values candidates at `future_price` and sorts descending by annualized
/// return.
///
/// The sort is stable: ties keep the filter stage's ascending-strike order.
/// Candidates whose investment base is degenerate (non-positive) rank with a
/// 0 return rather than being dropped or raising.
///
/// # Errors
/// Returns [`ScreenError::MissingUnderlyingPrice`] for covered-call ranking
/// without an underlying price.
pub fn rank_by_annualized_return(
    candidates: Vec<FilteredCandidate>,
    strategy: Strategy,
    future_price: f64,
    underlying_price: Option<f64>,
    ctx: &ExpirationContext,
) -> Result<Vec<RankedResult>, ScreenError> {
    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let position = Position::open(
            strategy,
            candidate.strike,
            candidate.premium,
            underlying_price,
        )?;

        let profit = payoff::profit_at_expiry(&position, future_price);
        let percent_return = payoff::percent_return(profit, payoff::investment_base(&position));
        let annualized_return = payoff::annualized_return(percent_return, ctx);

        ranked.push(RankedResult {
            candidate,
            profit,
            percent_return,
            annualized_return,
        });
    }

    ranked.sort_by(|a, b| b.annualized_return.total_cmp(&a.annualized_return));
    Ok(ranked)
}

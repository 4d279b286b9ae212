//! Module `analysis::filter`.
//!
//! Stage one of the pipeline: selects the chain contracts an investor can
//! actually open under a capital budget, optionally tightened by a target
//! breakeven. Cost and breakeven come from the shared payoff policy; the
//! filter adds no arithmetic of its own.
//!
//! Per-contract problems are local: a malformed chain row is skipped and the
//! rest of the batch is still evaluated. An empty result is a valid "no
//! matches" outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::core::{ScreenError, Strategy};
use crate::instruments::{OptionContract, Position};
use crate::market::OptionChain;
use crate::pricing::payoff;

/// Budget and breakeven constraints for one screening run.
///
/// `investment_amount` is per contract for long options, total capital for a
/// covered call, and collateral for a cash-secured put.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Strategy under evaluation.
    pub strategy: Strategy,
    /// Capital ceiling per contract, in dollars.
    pub investment_amount: f64,
    /// Current underlying price; required for covered calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_price: Option<f64>,
    /// Optional breakeven target; `None` admits every affordable contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_breakeven: Option<f64>,
}

impl FilterCriteria {
    /// Validates the criteria.
    ///
    /// A zero budget is accepted and simply matches nothing with a positive
    /// cost; only negative or non-finite amounts are rejected.
    ///
    /// # Errors
    /// Returns [`ScreenError::InvalidInput`] for a negative or non-finite
    /// budget and [`ScreenError::MissingUnderlyingPrice`] for a covered-call
    /// screen without the current underlying price.
    pub fn validate(&self) -> Result<(), ScreenError> {
        if !self.investment_amount.is_finite() || self.investment_amount < 0.0 {
            return Err(ScreenError::InvalidInput(
                "investment amount must be a non-negative finite number".to_string(),
            ));
        }
        if self.strategy.requires_underlying_price() && self.underlying_price.is_none() {
            return Err(ScreenError::MissingUnderlyingPrice(
                "covered call screening requires the current underlying price".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contract that passed the budget and breakeven screen.
///
/// Carries the derived economics alongside the source chain row so the
/// presentation layer can still show volume and open interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredCandidate {
    /// Strike level.
    pub strike: f64,
    /// Premium per share.
    pub premium: f64,
    /// Breakeven underlying price.
    pub breakeven: f64,
    /// Capital required to open one contract, in dollars.
    pub cost: f64,
    /// Budget left after opening one contract, in dollars.
    pub remaining_budget: f64,
    /// The chain row this candidate was derived from.
    pub contract: OptionContract,
}

/// Screens one side of a chain against the criteria.
///
/// Keeps a contract iff its cost fits the budget and its breakeven clears the
/// target (when one is set). Output is stable-sorted ascending by strike, so
/// equal strikes keep their retrieved order.
///
/// # Errors
/// Propagates criteria validation failures; individual malformed contracts
/// are skipped, never fatal.
///
/// # Examples
/// ```
/// use optionscreen::analysis::{filter_contracts, FilterCriteria};
/// use optionscreen::core::Strategy;
/// use optionscreen::instruments::OptionContract;
///
/// let calls = vec![
///     OptionContract::new(110.0, 2.0),
///     OptionContract::new(100.0, 5.0),
/// ];
/// let criteria = FilterCriteria {
///     strategy: Strategy::LongCall,
///     investment_amount: 250.0,
///     underlying_price: None,
///     target_breakeven: None,
/// };
/// let filtered = filter_contracts(&calls, &criteria).unwrap();
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].strike, 110.0);
/// assert_eq!(filtered[0].remaining_budget, 50.0);
/// ```
pub fn filter_contracts(
    contracts: &[OptionContract],
    criteria: &FilterCriteria,
) -> Result<Vec<FilteredCandidate>, ScreenError> {
    criteria.validate()?;

    let mut candidates = Vec::new();
    for contract in contracts {
        if contract.validate().is_err() {
            continue;
        }
        let position = Position::open(
            criteria.strategy,
            contract.strike,
            contract.last_price,
            criteria.underlying_price,
        )?;

        let cost = payoff::contract_cost(&position);
        if cost > criteria.investment_amount {
            continue;
        }
        if !payoff::breakeven_admissible(&position, criteria.target_breakeven) {
            continue;
        }

        candidates.push(FilteredCandidate {
            strike: contract.strike,
            premium: contract.last_price,
            breakeven: payoff::breakeven(&position),
            cost,
            remaining_budget: criteria.investment_amount - cost,
            contract: contract.clone(),
        });
    }

    candidates.sort_by(|a, b| a.strike.total_cmp(&b.strike));
    Ok(candidates)
}

/// Screens a full chain snapshot, picking the side the strategy trades.
pub fn filter_chain(
    chain: &OptionChain,
    criteria: &FilterCriteria,
) -> Result<Vec<FilteredCandidate>, ScreenError> {
    filter_contracts(chain.side(criteria.strategy.option_type()), criteria)
}

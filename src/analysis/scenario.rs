//! Module `analysis::scenario`.
//!
//! Stage three of the pipeline: a detailed single-position report at one
//! hypothesized expiry price. The numbers are exactly the shared payoff
//! policy's; the only additions are the strategy-specific profit and loss
//! bounds used by report renderers.

use serde::{Deserialize, Serialize};

use crate::core::Strategy;
use crate::instruments::{Bound, Position};
use crate::market::ExpirationContext;
use crate::pricing::payoff;

/// Expiry scenario report for one selected position.
///
/// Per-share amounts in underlying price units; returns are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Strategy under evaluation.
    pub strategy: Strategy,
    /// Holding period used for annualization, floored to 1.
    pub days_to_expiration: i64,
    /// Hypothesized underlying price at expiration.
    pub future_price: f64,
    /// Strike of the option leg.
    pub strike: f64,
    /// Premium paid or received per share.
    pub premium: f64,
    /// Underlying entry price, covered call only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    /// Breakeven underlying price.
    pub breakeven: f64,
    /// Option-leg value at expiration (non-positive for short legs).
    pub value_at_expiry: f64,
    /// Position profit at the scenario price.
    pub profit: f64,
    /// Holding-period return on the investment base.
    pub percent_return: f64,
    /// Holding-period return compounded to a 365-day basis.
    pub annualized_return: f64,
    /// Worst per-share outcome at expiration.
    pub max_loss: Bound,
    /// Best per-share outcome at expiration.
    pub max_profit: Bound,
}

/// Evaluates one position at a hypothesized expiry price.
///
/// Reproduces the ranker's numbers exactly for the same inputs; the report
/// only adds the descriptive bounds.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use optionscreen::analysis::evaluate_scenario;
/// use optionscreen::core::Strategy;
/// use optionscreen::instruments::{Bound, Position};
/// use optionscreen::market::ExpirationContext;
///
/// let position = Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap();
/// let ctx = ExpirationContext::new(
///     NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
/// );
/// let report = evaluate_scenario(&position, 35.0, &ctx);
/// assert_eq!(report.value_at_expiry, -5.0);
/// assert_eq!(report.profit, -4.0);
/// assert_eq!(report.percent_return, -0.1);
/// assert_eq!(report.max_profit, Bound::Amount(1.0));
/// ```
pub fn evaluate_scenario(
    position: &Position,
    future_price: f64,
    ctx: &ExpirationContext,
) -> ScenarioReport {
    let value_at_expiry = payoff::value_at_expiry(position, future_price);
    let profit = payoff::profit_at_expiry(position, future_price);
    let percent_return = payoff::percent_return(profit, payoff::investment_base(position));

    ScenarioReport {
        strategy: position.strategy(),
        days_to_expiration: ctx.days_to_expiration,
        future_price,
        strike: position.strike(),
        premium: position.premium(),
        entry_price: position.entry_price(),
        breakeven: payoff::breakeven(position),
        value_at_expiry,
        profit,
        percent_return,
        annualized_return: payoff::annualized_return(percent_return, ctx),
        max_loss: payoff::max_loss(position),
        max_profit: payoff::max_profit(position),
    }
}

//! Module `pricing::payoff`.
//!
//! The single payoff policy shared by the contract filter, the return ranker,
//! and the scenario evaluator. Each strategy's cost, breakeven, expiry value,
//! profit, and return base live here once, keyed by the [`Position`] variant,
//! so the three pipeline stages cannot drift apart.
//!
//! References: Hull (11th ed.) Ch. 10-12 for the payoff and breakeven
//! identities of long calls/puts, covered calls, and cash-secured puts.
//!
//! Conventions: all quantities are per share in underlying price units except
//! [`contract_cost`], which applies the uniform 100-shares-per-contract scale.
//! Returns are fractions (0.20 = 20%). Short legs report their expiry value as
//! a non-positive number (the loss on the short option alone); the stock leg
//! of a covered call is tracked inside [`profit_at_expiry`], not in
//! [`value_at_expiry`].
//!
//! Degraded outputs, by policy rather than defect: a non-positive or
//! non-finite return base yields a 0 return instead of a division fault, and
//! a worse-than-total holding-period loss annualizes to exactly -1 instead of
//! propagating a NaN from a fractional power of a negative base.
//!
//! The covered-call (cost, breakeven, base) triple is intentionally
//! asymmetric: entry cost nets the premium received against the share cost,
//! while the return base is the plain entry price. Both follow the published
//! formulas; do not "fix" one to match the other.

use crate::core::Strategy;
use crate::instruments::{Bound, Position};
use crate::market::ExpirationContext;

/// Standard equity option contract multiplier.
pub const SHARES_PER_CONTRACT: f64 = 100.0;

/// Capital required to open one contract, in dollars.
///
/// Long options pay the full premium. The covered call buys 100 shares net of
/// the premium received; the cash-secured put posts strike-level collateral
/// net of the premium received.
///
/// # Examples
/// ```
/// use optionscreen::core::Strategy;
/// use optionscreen::instruments::Position;
/// use optionscreen::pricing::contract_cost;
///
/// let long_call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
/// assert_eq!(contract_cost(&long_call), 500.0);
///
/// let csp = Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap();
/// assert_eq!(contract_cost(&csp), 3_900.0);
/// ```
pub fn contract_cost(position: &Position) -> f64 {
    match *position {
        Position::LongCall { premium, .. } | Position::LongPut { premium, .. } => {
            SHARES_PER_CONTRACT * premium
        }
        Position::CoveredCall {
            premium,
            entry_price,
            ..
        } => SHARES_PER_CONTRACT * (entry_price - premium),
        Position::CashSecuredPut { strike, premium } => SHARES_PER_CONTRACT * (strike - premium),
    }
}

/// Underlying price at which the position's expiry profit is exactly zero.
///
/// # Examples
/// ```
/// use optionscreen::core::Strategy;
/// use optionscreen::instruments::Position;
/// use optionscreen::pricing::breakeven;
///
/// let long_call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
/// assert_eq!(breakeven(&long_call), 105.0);
///
/// let long_put = Position::open(Strategy::LongPut, 50.0, 2.0, None).unwrap();
/// assert_eq!(breakeven(&long_put), 48.0);
/// ```
pub fn breakeven(position: &Position) -> f64 {
    match *position {
        Position::LongCall { strike, premium } => strike + premium,
        Position::LongPut { strike, premium } => strike - premium,
        Position::CoveredCall {
            premium,
            entry_price,
            ..
        } => entry_price - premium,
        Position::CashSecuredPut { strike, premium } => strike - premium,
    }
}

/// Expiry value of the option leg alone at `future_price`, per share.
///
/// Long legs return the non-negative intrinsic value. Short legs return the
/// non-positive intrinsic loss on the written option; premium and any stock
/// P&L enter in [`profit_at_expiry`].
pub fn value_at_expiry(position: &Position, future_price: f64) -> f64 {
    match *position {
        Position::LongCall { strike, .. } => (future_price - strike).max(0.0),
        Position::LongPut { strike, .. } => (strike - future_price).max(0.0),
        Position::CoveredCall { strike, .. } => -(future_price - strike).max(0.0),
        Position::CashSecuredPut { strike, .. } => -(strike - future_price).max(0.0),
    }
}

/// Expiry profit at `future_price`, per share.
///
/// Long options: intrinsic value minus premium paid. Covered call: stock P&L
/// plus premium received plus the short-call expiry value. Cash-secured put:
/// premium received plus the short-put expiry value.
pub fn profit_at_expiry(position: &Position, future_price: f64) -> f64 {
    let value = value_at_expiry(position, future_price);
    match *position {
        Position::LongCall { premium, .. } | Position::LongPut { premium, .. } => value - premium,
        Position::CoveredCall {
            premium,
            entry_price,
            ..
        } => (future_price - entry_price) + premium + value,
        Position::CashSecuredPut { premium, .. } => premium + value,
    }
}

/// Denominator of the percent-return calculation, per share.
///
/// Premium at risk for long options, entry price for the covered call, and
/// the cash collateral (strike) for the cash-secured put.
pub fn investment_base(position: &Position) -> f64 {
    match *position {
        Position::LongCall { premium, .. } | Position::LongPut { premium, .. } => premium,
        Position::CoveredCall { entry_price, .. } => entry_price,
        Position::CashSecuredPut { strike, .. } => strike,
    }
}

/// Whether the position's breakeven clears the caller's target.
///
/// Bullish strategies (long call, covered call) need the breakeven strictly
/// below the target; bearish-income strategies (long put, cash-secured put)
/// need it strictly above. Absent a target, every position is admissible.
pub fn breakeven_admissible(position: &Position, target: Option<f64>) -> bool {
    let Some(target) = target else {
        return true;
    };
    let breakeven = breakeven(position);
    match position.strategy() {
        Strategy::LongCall | Strategy::CoveredCall => breakeven < target,
        Strategy::LongPut | Strategy::CashSecuredPut => breakeven > target,
    }
}

/// Holding-period return as a fraction of the investment base.
///
/// A non-positive or non-finite base reports 0 instead of dividing; the
/// degraded output is deliberate so one degenerate contract cannot poison a
/// batch with a fault.
pub fn percent_return(profit: f64, base: f64) -> f64 {
    if !base.is_finite() || base <= 0.0 {
        return 0.0;
    }
    profit / base
}

/// Compounds a holding-period return to a 365-day basis.
///
/// `(1 + r)^(365 / days) - 1`, with the context guaranteeing `days >= 1`.
/// A zero return annualizes to exactly zero. When `1 + r <= 0` (total or
/// worse-than-total loss) the compounded value is floored at -1 rather than
/// raising a fractional power of a negative base to NaN.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use optionscreen::market::ExpirationContext;
/// use optionscreen::pricing::annualized_return;
///
/// // 73 days to expiry compounds five times per year: 1.1^5 - 1.
/// let ctx = ExpirationContext::new(
///     NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
/// );
/// let annual = annualized_return(0.10, &ctx);
/// assert!((annual - 0.61051).abs() < 1e-10);
/// assert_eq!(annualized_return(0.0, &ctx), 0.0);
/// ```
pub fn annualized_return(percent_return: f64, ctx: &ExpirationContext) -> f64 {
    let growth = 1.0 + percent_return;
    if growth <= 0.0 {
        return -1.0;
    }
    growth.powf(ctx.annualization_exponent()) - 1.0
}

/// Largest per-share loss the position can realize at expiration.
pub fn max_loss(position: &Position) -> Bound {
    match *position {
        Position::LongCall { premium, .. } | Position::LongPut { premium, .. } => {
            Bound::Amount(premium)
        }
        Position::CoveredCall {
            premium,
            entry_price,
            ..
        } => Bound::Amount(entry_price - premium),
        Position::CashSecuredPut { strike, premium } => Bound::Amount(strike - premium),
    }
}

/// Largest per-share profit the position can realize at expiration.
pub fn max_profit(position: &Position) -> Bound {
    match *position {
        Position::LongCall { .. } => Bound::Unbounded,
        Position::LongPut { strike, premium } => Bound::Amount(strike - premium),
        Position::CoveredCall {
            strike,
            premium,
            entry_price,
        } => Bound::Amount(strike - entry_price + premium),
        Position::CashSecuredPut { premium, .. } => Bound::Amount(premium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(days: i64) -> ExpirationContext {
        let evaluation = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        ExpirationContext::new(evaluation + chrono::Duration::days(days), evaluation)
    }

    #[test]
    fn long_call_policy() {
        let p = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
        assert_eq!(contract_cost(&p), 500.0);
        assert_eq!(breakeven(&p), 105.0);
        assert_eq!(value_at_expiry(&p, 120.0), 20.0);
        assert_eq!(value_at_expiry(&p, 90.0), 0.0);
        assert_eq!(profit_at_expiry(&p, 120.0), 15.0);
        assert_eq!(investment_base(&p), 5.0);
        assert_eq!(percent_return(profit_at_expiry(&p, 120.0), 5.0), 3.0);
        assert_eq!(max_loss(&p), Bound::Amount(5.0));
        assert_eq!(max_profit(&p), Bound::Unbounded);
    }

    #[test]
    fn long_put_policy() {
        let p = Position::open(Strategy::LongPut, 50.0, 2.0, None).unwrap();
        assert_eq!(contract_cost(&p), 200.0);
        assert_eq!(breakeven(&p), 48.0);
        // Expires out of the money: the whole premium is lost.
        assert_eq!(value_at_expiry(&p, 60.0), 0.0);
        assert_eq!(profit_at_expiry(&p, 60.0), -2.0);
        assert_eq!(percent_return(profit_at_expiry(&p, 60.0), 2.0), -1.0);
        assert_eq!(max_loss(&p), Bound::Amount(2.0));
        assert_eq!(max_profit(&p), Bound::Amount(48.0));
    }

    #[test]
    fn covered_call_policy() {
        let p = Position::open(Strategy::CoveredCall, 105.0, 2.0, Some(100.0)).unwrap();
        assert_eq!(contract_cost(&p), 9_800.0);
        assert_eq!(breakeven(&p), 98.0);
        // Called away above strike: short call loses, stock gains dominate.
        assert_eq!(value_at_expiry(&p, 110.0), -5.0);
        assert_eq!(profit_at_expiry(&p, 110.0), 7.0);
        assert_eq!(investment_base(&p), 100.0);
        // Expires below strike: keep premium plus stock move.
        assert_eq!(value_at_expiry(&p, 95.0), 0.0);
        assert_eq!(profit_at_expiry(&p, 95.0), -3.0);
        assert_eq!(max_loss(&p), Bound::Amount(98.0));
        assert_eq!(max_profit(&p), Bound::Amount(7.0));
    }

    #[test]
    fn cash_secured_put_policy() {
        let p = Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap();
        assert_eq!(contract_cost(&p), 3_900.0);
        assert_eq!(breakeven(&p), 39.0);
        assert_eq!(value_at_expiry(&p, 35.0), -5.0);
        assert_eq!(profit_at_expiry(&p, 35.0), -4.0);
        assert_eq!(investment_base(&p), 40.0);
        assert_eq!(percent_return(-4.0, 40.0), -0.1);
        // Expires worthless: full premium kept.
        assert_eq!(profit_at_expiry(&p, 45.0), 1.0);
        assert_eq!(max_loss(&p), Bound::Amount(39.0));
        assert_eq!(max_profit(&p), Bound::Amount(1.0));
    }

    #[test]
    fn breakeven_admissibility_is_strict_and_directional() {
        let call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
        assert!(breakeven_admissible(&call, None));
        assert!(breakeven_admissible(&call, Some(110.0)));
        assert!(!breakeven_admissible(&call, Some(105.0)));
        assert!(!breakeven_admissible(&call, Some(100.0)));

        let put = Position::open(Strategy::LongPut, 50.0, 2.0, None).unwrap();
        assert!(breakeven_admissible(&put, Some(45.0)));
        assert!(!breakeven_admissible(&put, Some(48.0)));
        assert!(!breakeven_admissible(&put, Some(49.0)));
    }

    #[test]
    fn percent_return_degenerate_base_reports_zero() {
        assert_eq!(percent_return(15.0, 0.0), 0.0);
        assert_eq!(percent_return(15.0, -2.0), 0.0);
        assert_eq!(percent_return(15.0, f64::NAN), 0.0);
        assert_eq!(percent_return(-4.0, 40.0), -0.1);
    }

    #[test]
    fn annualized_return_identity_at_zero() {
        assert_eq!(annualized_return(0.0, &ctx(30)), 0.0);
        assert_eq!(annualized_return(0.0, &ctx(1)), 0.0);
    }

    #[test]
    fn annualized_return_matches_closed_form() {
        // 365 days: annualized equals the holding-period return.
        let annual = annualized_return(0.10, &ctx(365));
        assert!((annual - 0.10).abs() < 1e-12);
        // 73 days: five compounding periods, 1.1^5 - 1 = 0.61051.
        let annual = annualized_return(0.10, &ctx(73));
        assert!((annual - 0.61051).abs() < 1e-10);
    }

    #[test]
    fn annualized_return_floors_total_loss() {
        assert_eq!(annualized_return(-1.0, &ctx(30)), -1.0);
        assert_eq!(annualized_return(-1.5, &ctx(30)), -1.0);
        assert!(annualized_return(-0.5, &ctx(30)).is_finite());
    }

    #[test]
    fn policy_is_deterministic() {
        let p = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
        for _ in 0..3 {
            assert_eq!(contract_cost(&p), 500.0);
            assert_eq!(breakeven(&p), 105.0);
            assert_eq!(annualized_return(0.25, &ctx(45)), annualized_return(0.25, &ctx(45)));
        }
    }
}

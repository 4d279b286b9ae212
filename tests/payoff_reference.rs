//! Payoff Policy Reference Tests
//!
//! Reference values hand-derived from the textbook expiry identities
//! (Hull, 11th ed., Ch. 10-12):
//!   Long call:        value = max(0, F - K),  profit = value - P,  base = P
//!   Long put:         value = max(0, K - F),  profit = value - P,  base = P
//!   Covered call:     value = -max(0, F - K), profit = (F - S) + P + value, base = S
//!   Cash-secured put: value = -max(0, K - F), profit = P + value,  base = K
//! Annualization: (1 + r)^(365 / days) - 1 on calendar days floored to 1.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::NaiveDate;
use optionscreen::core::Strategy;
use optionscreen::instruments::{Bound, Position};
use optionscreen::market::ExpirationContext;
use optionscreen::pricing::{
    annualized_return, breakeven, contract_cost, investment_base, max_loss, max_profit,
    percent_return, profit_at_expiry, value_at_expiry,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct ExpiryCase {
    strategy: Strategy,
    strike: f64,
    premium: f64,
    underlying: Option<f64>,
    future_price: f64,
    expected_value: f64,
    expected_profit: f64,
    expected_base: f64,
    expected_percent: f64,
}

fn expiry_cases() -> Vec<ExpiryCase> {
    vec![
        // Long call deep in the money: 100/5 at 120.
        ExpiryCase {
            strategy: Strategy::LongCall,
            strike: 100.0,
            premium: 5.0,
            underlying: None,
            future_price: 120.0,
            expected_value: 20.0,
            expected_profit: 15.0,
            expected_base: 5.0,
            expected_percent: 3.0,
        },
        // Long put expiring worthless: 50/2 at 60.
        ExpiryCase {
            strategy: Strategy::LongPut,
            strike: 50.0,
            premium: 2.0,
            underlying: None,
            future_price: 60.0,
            expected_value: 0.0,
            expected_profit: -2.0,
            expected_base: 2.0,
            expected_percent: -1.0,
        },
        // Cash-secured put assigned below strike: 40/1 at 35.
        ExpiryCase {
            strategy: Strategy::CashSecuredPut,
            strike: 40.0,
            premium: 1.0,
            underlying: None,
            future_price: 35.0,
            expected_value: -5.0,
            expected_profit: -4.0,
            expected_base: 40.0,
            expected_percent: -0.10,
        },
        // Covered call called away: K=105, P=2, S=100 at 110.
        ExpiryCase {
            strategy: Strategy::CoveredCall,
            strike: 105.0,
            premium: 2.0,
            underlying: Some(100.0),
            future_price: 110.0,
            expected_value: -5.0,
            expected_profit: 7.0,
            expected_base: 100.0,
            expected_percent: 0.07,
        },
        // Covered call expiring below strike: keep premium, eat the stock move.
        ExpiryCase {
            strategy: Strategy::CoveredCall,
            strike: 105.0,
            premium: 2.0,
            underlying: Some(100.0),
            future_price: 95.0,
            expected_value: 0.0,
            expected_profit: -3.0,
            expected_base: 100.0,
            expected_percent: -0.03,
        },
    ]
}

#[test]
fn expiry_values_match_hand_derived_references() {
    for case in expiry_cases() {
        let position =
            Position::open(case.strategy, case.strike, case.premium, case.underlying).unwrap();
        assert_abs_diff_eq!(
            value_at_expiry(&position, case.future_price),
            case.expected_value,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            profit_at_expiry(&position, case.future_price),
            case.expected_profit,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            investment_base(&position),
            case.expected_base,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            percent_return(
                profit_at_expiry(&position, case.future_price),
                investment_base(&position)
            ),
            case.expected_percent,
            epsilon = 1e-12
        );
    }
}

#[test]
fn cost_and_breakeven_are_pure_in_their_inputs() {
    let call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
    let csp = Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap();
    let cc = Position::open(Strategy::CoveredCall, 105.0, 2.0, Some(100.0)).unwrap();

    for _ in 0..5 {
        assert_eq!(contract_cost(&call), 500.0);
        assert_eq!(breakeven(&call), 105.0);
        assert_eq!(contract_cost(&csp), 3_900.0);
        assert_eq!(breakeven(&csp), 39.0);
        // Covered-call asymmetry is intentional: cost nets the premium,
        // the breakeven and return base use the plain entry price.
        assert_eq!(contract_cost(&cc), 9_800.0);
        assert_eq!(breakeven(&cc), 98.0);
        assert_eq!(investment_base(&cc), 100.0);
    }
}

#[test]
fn annualized_return_reference_values() {
    // 365-day holding period: the annualized return is the raw return.
    let one_year = ExpirationContext::new(date(2026, 6, 18), date(2025, 6, 18));
    assert_eq!(one_year.days_to_expiration, 365);
    assert_relative_eq!(annualized_return(0.25, &one_year), 0.25, epsilon = 1e-12);

    // 73 days: exactly five compounding periods. 1.1^5 = 1.61051.
    let ten_weeks = ExpirationContext::new(date(2025, 8, 30), date(2025, 6, 18));
    assert_eq!(ten_weeks.days_to_expiration, 73);
    assert_relative_eq!(
        annualized_return(0.10, &ten_weeks),
        0.61051,
        epsilon = 1e-10
    );

    // Identity at zero, for any horizon.
    assert_eq!(annualized_return(0.0, &ten_weeks), 0.0);
    assert_eq!(annualized_return(0.0, &one_year), 0.0);
}

#[test]
fn same_day_expiration_annualizes_over_one_day() {
    let expiration = date(2025, 6, 18);
    let ctx = ExpirationContext::new(expiration, expiration);
    assert_eq!(ctx.days_to_expiration, 1);
    // One-day doubling compounds to (2)^365 - 1; just check it is finite and huge.
    let annual = annualized_return(1.0, &ctx);
    assert!(annual.is_finite());
    assert!(annual > 1e100);
}

#[test]
fn degraded_outputs_never_fault() {
    // Zero-premium long option: base 0 reports a 0 return.
    assert_eq!(percent_return(20.0, 0.0), 0.0);
    // Worse-than-total covered-call loss floors the annualized figure at -1.
    let ctx = ExpirationContext::new(date(2025, 7, 18), date(2025, 6, 18));
    assert_eq!(annualized_return(-1.0, &ctx), -1.0);
    assert_eq!(annualized_return(-2.0, &ctx), -1.0);
}

#[test]
fn strategy_bounds_reference() {
    let long_call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
    assert_eq!(max_loss(&long_call), Bound::Amount(5.0));
    assert_eq!(max_profit(&long_call), Bound::Unbounded);

    let long_put = Position::open(Strategy::LongPut, 50.0, 2.0, None).unwrap();
    assert_eq!(max_loss(&long_put), Bound::Amount(2.0));
    assert_eq!(max_profit(&long_put), Bound::Amount(48.0));

    let covered = Position::open(Strategy::CoveredCall, 105.0, 2.0, Some(100.0)).unwrap();
    assert_eq!(max_profit(&covered), Bound::Amount(7.0));
    assert_eq!(max_loss(&covered), Bound::Amount(98.0));

    let csp = Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap();
    assert_eq!(max_profit(&csp), Bound::Amount(1.0));
    assert_eq!(max_loss(&csp), Bound::Amount(39.0));
}

#[test]
fn bounds_dominate_realized_profit_on_a_price_grid() {
    let positions = [
        Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap(),
        Position::open(Strategy::LongPut, 50.0, 2.0, None).unwrap(),
        Position::open(Strategy::CoveredCall, 105.0, 2.0, Some(100.0)).unwrap(),
        Position::open(Strategy::CashSecuredPut, 40.0, 1.0, None).unwrap(),
    ];
    for position in &positions {
        let mut future_price = 1.0;
        while future_price <= 200.0 {
            let profit = profit_at_expiry(position, future_price);
            if let Bound::Amount(cap) = max_profit(position) {
                assert!(profit <= cap + 1e-9);
            }
            if let Bound::Amount(floor) = max_loss(position) {
                assert!(profit >= -floor - 1e-9);
            }
            future_price += 0.5;
        }
    }
}

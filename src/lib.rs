//! Optionscreen evaluates single-leg option strategies against one retrieved
//! options chain: it filters contracts by a capital budget and an optional
//! target breakeven, ranks the survivors by annualized return at a hypothesized
//! future underlying price, and produces a detailed expiry scenario report for
//! a selected contract.
//!
//! The crate is the computation core only. Chain retrieval, interactive input,
//! and table rendering are external collaborators: callers hand in one
//! immutable chain snapshot plus the scenario inputs and receive plain result
//! records back. All valuation is intrinsic-value-at-expiration; volatility,
//! Greeks, early exercise, dividends, and transaction costs are out of scope.
//!
//! References: Hull, *Options, Futures, and Other Derivatives* (11th ed.),
//! Ch. 10-12 for payoff and breakeven identities of the four supported
//! strategies (long call, long put, covered call, cash-secured put).
//!
//! Numerical considerations: the payoff policy is pure `f64` arithmetic with
//! two deliberate degraded outputs instead of faults — a non-positive return
//! base reports a 0 return, and a same-day or past expiration is floored to a
//! one-day holding period.
//!
//! # Quick Start
//! Filter a chain and rank by annualized return:
//! ```rust
//! use chrono::NaiveDate;
//! use optionscreen::analysis::{filter_contracts, rank_by_annualized_return, FilterCriteria};
//! use optionscreen::core::Strategy;
//! use optionscreen::instruments::OptionContract;
//! use optionscreen::market::ExpirationContext;
//!
//! let calls = vec![
//!     OptionContract::new(100.0, 5.0),
//!     OptionContract::new(110.0, 2.0),
//! ];
//! let criteria = FilterCriteria {
//!     strategy: Strategy::LongCall,
//!     investment_amount: 600.0,
//!     underlying_price: None,
//!     target_breakeven: None,
//! };
//! let filtered = filter_contracts(&calls, &criteria).unwrap();
//! assert_eq!(filtered.len(), 2);
//!
//! let ctx = ExpirationContext::new(
//!     NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
//! );
//! let ranked =
//!     rank_by_annualized_return(filtered, Strategy::LongCall, 120.0, None, &ctx).unwrap();
//! assert!(ranked[0].annualized_return >= ranked[1].annualized_return);
//! ```
//!
//! Evaluate one selected position at a hypothetical expiry price:
//! ```rust
//! use chrono::NaiveDate;
//! use optionscreen::analysis::evaluate_scenario;
//! use optionscreen::core::Strategy;
//! use optionscreen::instruments::Position;
//! use optionscreen::market::ExpirationContext;
//!
//! let position = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
//! let ctx = ExpirationContext::new(
//!     NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 6, 18).unwrap(),
//! );
//! let report = evaluate_scenario(&position, 120.0, &ctx);
//! assert_eq!(report.value_at_expiry, 20.0);
//! assert_eq!(report.profit, 15.0);
//! ```

pub mod analysis;
pub mod core;
pub mod instruments;
pub mod market;
pub mod pricing;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::analysis::{
        analyze, evaluate_scenario, filter_chain, filter_contracts, rank_by_annualized_return,
        FilterCriteria, FilteredCandidate, RankedResult, ScenarioReport,
    };
    pub use crate::core::{AnalysisRequest, AnalysisResponse, OptionType, ScreenError, Strategy};
    pub use crate::instruments::{Bound, OptionContract, Position};
    pub use crate::market::{ExpirationContext, OptionChain};
}

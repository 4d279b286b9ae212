//! Shared payoff, cost, breakeven, and return policy.

pub mod payoff;

pub use payoff::{
    annualized_return, breakeven, breakeven_admissible, contract_cost, investment_base, max_loss,
    max_profit, percent_return, profit_at_expiry, value_at_expiry, SHARES_PER_CONTRACT,
};

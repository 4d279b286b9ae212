use serde::{Deserialize, Serialize};

use crate::core::ScreenError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Supported single-leg strategies.
///
/// This is a closed enumeration: the strategy tag selects the chain side, the
/// cost and breakeven formulas, and the expiry payoff everywhere in the crate.
/// Any token outside the four members fails with
/// [`ScreenError::InvalidStrategy`] at the parse boundary.
///
/// # Examples
/// ```
/// use optionscreen::core::{OptionType, Strategy};
///
/// assert_eq!(Strategy::LongCall.option_type(), OptionType::Call);
/// assert_eq!(Strategy::CashSecuredPut.option_type(), OptionType::Put);
/// assert_eq!("csp".parse::<Strategy>().unwrap(), Strategy::CashSecuredPut);
/// assert!("straddle".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Buy a call option to profit from underlying price increases.
    #[serde(rename = "call")]
    LongCall,
    /// Buy a put option to profit from underlying price decreases.
    #[serde(rename = "put")]
    LongPut,
    /// Own 100 shares and sell a call option against them for income.
    #[serde(rename = "covered_call")]
    CoveredCall,
    /// Sell a put option with cash collateral covering assignment at strike.
    #[serde(rename = "cash_secured_put")]
    CashSecuredPut,
}

impl Strategy {
    /// Chain side the strategy trades: calls for long call and covered call,
    /// puts for long put and cash-secured put.
    pub fn option_type(self) -> OptionType {
        match self {
            Self::LongCall | Self::CoveredCall => OptionType::Call,
            Self::LongPut | Self::CashSecuredPut => OptionType::Put,
        }
    }

    /// Whether the strategy collects premium (short option leg).
    pub fn is_premium_seller(self) -> bool {
        matches!(self, Self::CoveredCall | Self::CashSecuredPut)
    }

    /// Whether the strategy requires the current underlying price as an input
    /// (entry cost and return base of the covered call are spot-anchored).
    pub fn requires_underlying_price(self) -> bool {
        matches!(self, Self::CoveredCall)
    }

    /// Stable wire name, also used by `Display`.
    pub fn code(self) -> &'static str {
        match self {
            Self::LongCall => "call",
            Self::LongPut => "put",
            Self::CoveredCall => "covered_call",
            Self::CashSecuredPut => "cash_secured_put",
        }
    }

    /// Human-readable strategy name for report headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::LongCall => "Long Call",
            Self::LongPut => "Long Put",
            Self::CoveredCall => "Covered Call",
            Self::CashSecuredPut => "Cash-Secured Put",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Strategy {
    type Err = ScreenError;

    /// Accepts the short interactive codes (`c`, `p`, `cc`, `csp`) as well as
    /// the full wire names.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "c" | "call" | "long_call" => Ok(Self::LongCall),
            "p" | "put" | "long_put" => Ok(Self::LongPut),
            "cc" | "covered_call" => Ok(Self::CoveredCall),
            "csp" | "cash_secured_put" => Ok(Self::CashSecuredPut),
            other => Err(ScreenError::InvalidStrategy(format!(
                "unknown strategy `{other}`; expected one of c, p, cc, csp"
            ))),
        }
    }
}

//! Strategy-tagged position record.
//!
//! [`Position`] replaces an open bag of conditionally-present fields with one
//! variant per strategy carrying exactly the inputs that strategy's payoff
//! needs. The covered call is the only variant that stores the entry price of
//! the underlying; constructing it without one fails with
//! [`ScreenError::MissingUnderlyingPrice`].

use serde::{Deserialize, Serialize};

use crate::core::{ScreenError, Strategy};

/// Per-share profit or loss bound of a position held to expiration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// No finite bound (long call upside).
    Unbounded,
    /// Finite per-share bound.
    Amount(f64),
}

/// One opened single-leg position.
///
/// All fields are per-share amounts in underlying price units.
///
/// # Examples
/// ```
/// use optionscreen::core::Strategy;
/// use optionscreen::instruments::Position;
///
/// let long_call = Position::open(Strategy::LongCall, 100.0, 5.0, None).unwrap();
/// assert_eq!(long_call.strike(), 100.0);
/// assert_eq!(long_call.entry_price(), None);
///
/// // Covered calls are spot-anchored and refuse to open without an entry price.
/// assert!(Position::open(Strategy::CoveredCall, 105.0, 2.0, None).is_err());
/// let covered = Position::open(Strategy::CoveredCall, 105.0, 2.0, Some(100.0)).unwrap();
/// assert_eq!(covered.entry_price(), Some(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Bought call: pay `premium`, exercise above `strike`.
    LongCall {
        /// Strike level.
        strike: f64,
        /// Premium paid per share.
        premium: f64,
    },
    /// Bought put: pay `premium`, exercise below `strike`.
    LongPut {
        /// Strike level.
        strike: f64,
        /// Premium paid per share.
        premium: f64,
    },
    /// 100 shares held at `entry_price` with a call sold at `strike`.
    CoveredCall {
        /// Strike of the short call.
        strike: f64,
        /// Premium received per share.
        premium: f64,
        /// Underlying price when the shares were bought.
        entry_price: f64,
    },
    /// Put sold at `strike` with cash collateral of `strike` per share.
    CashSecuredPut {
        /// Strike of the short put.
        strike: f64,
        /// Premium received per share.
        premium: f64,
    },
}

impl Position {
    /// Opens a position of the given strategy on one contract quote.
    ///
    /// `underlying_price` is consumed only by the covered call; it is ignored
    /// for the other strategies.
    ///
    /// # Errors
    /// Returns [`ScreenError::MissingUnderlyingPrice`] when a covered call is
    /// opened without the current underlying price.
    pub fn open(
        strategy: Strategy,
        strike: f64,
        premium: f64,
        underlying_price: Option<f64>,
    ) -> Result<Self, ScreenError> {
        match strategy {
            Strategy::LongCall => Ok(Self::LongCall { strike, premium }),
            Strategy::LongPut => Ok(Self::LongPut { strike, premium }),
            Strategy::CoveredCall => {
                let entry_price = underlying_price.ok_or_else(|| {
                    ScreenError::MissingUnderlyingPrice(
                        "covered call analysis requires the current underlying price".to_string(),
                    )
                })?;
                Ok(Self::CoveredCall {
                    strike,
                    premium,
                    entry_price,
                })
            }
            Strategy::CashSecuredPut => Ok(Self::CashSecuredPut { strike, premium }),
        }
    }

    /// Strategy tag of this position.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::LongCall { .. } => Strategy::LongCall,
            Self::LongPut { .. } => Strategy::LongPut,
            Self::CoveredCall { .. } => Strategy::CoveredCall,
            Self::CashSecuredPut { .. } => Strategy::CashSecuredPut,
        }
    }

    /// Strike of the option leg.
    pub fn strike(&self) -> f64 {
        match *self {
            Self::LongCall { strike, .. }
            | Self::LongPut { strike, .. }
            | Self::CoveredCall { strike, .. }
            | Self::CashSecuredPut { strike, .. } => strike,
        }
    }

    /// Premium paid (long strategies) or received (short strategies) per share.
    pub fn premium(&self) -> f64 {
        match *self {
            Self::LongCall { premium, .. }
            | Self::LongPut { premium, .. }
            | Self::CoveredCall { premium, .. }
            | Self::CashSecuredPut { premium, .. } => premium,
        }
    }

    /// Entry price of the underlying, present only for the covered call.
    pub fn entry_price(&self) -> Option<f64> {
        match *self {
            Self::CoveredCall { entry_price, .. } => Some(entry_price),
            _ => None,
        }
    }

    /// Validates position fields.
    ///
    /// # Errors
    /// Returns [`ScreenError::InvalidInput`] when the strike is not positive
    /// finite, the premium is negative or non-finite, or a covered-call entry
    /// price is not positive finite.
    pub fn validate(&self) -> Result<(), ScreenError> {
        if !self.strike().is_finite() || self.strike() <= 0.0 {
            return Err(ScreenError::InvalidInput(
                "position strike must be > 0".to_string(),
            ));
        }
        if !self.premium().is_finite() || self.premium() < 0.0 {
            return Err(ScreenError::InvalidInput(
                "position premium must be >= 0".to_string(),
            ));
        }
        if let Some(entry_price) = self.entry_price() {
            if !entry_price.is_finite() || entry_price <= 0.0 {
                return Err(ScreenError::InvalidInput(
                    "underlying entry price must be > 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

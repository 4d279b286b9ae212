//! One row of a retrieved options chain.
//!
//! [`OptionContract`] is the immutable input record supplied by the external
//! market-data collaborator: strike, last traded premium, and the optional
//! liquidity fields the data source may or may not report. The side (call or
//! put) is carried by the chain partition it came from, not by the row itself.

use serde::{Deserialize, Serialize};

use crate::core::ScreenError;

/// Retrieved option contract quote.
///
/// `last_price` is the per-share premium; one contract covers 100 shares.
/// Volume and open interest are passed through for display and are `None`
/// when the data source did not report them.
///
/// # Examples
/// ```
/// use optionscreen::instruments::OptionContract;
///
/// let contract = OptionContract::new(100.0, 5.0);
/// assert!(contract.validate().is_ok());
/// assert_eq!(contract.volume, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Strike level in underlying price units.
    pub strike: f64,
    /// Last traded premium per share.
    pub last_price: f64,
    /// Contracts traded on the snapshot day, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    /// Outstanding contracts, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<u64>,
}

impl OptionContract {
    /// Builds a contract quote with unreported liquidity fields.
    pub fn new(strike: f64, last_price: f64) -> Self {
        Self {
            strike,
            last_price,
            volume: None,
            open_interest: None,
        }
    }

    /// Builds a contract quote with volume and open interest attached.
    pub fn with_liquidity(strike: f64, last_price: f64, volume: u64, open_interest: u64) -> Self {
        Self {
            strike,
            last_price,
            volume: Some(volume),
            open_interest: Some(open_interest),
        }
    }

    /// Validates the quote fields.
    ///
    /// # Errors
    /// Returns [`ScreenError::InvalidInput`] when:
    /// - `strike` is not a positive finite number
    /// - `last_price` is negative or non-finite
    pub fn validate(&self) -> Result<(), ScreenError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(ScreenError::InvalidInput(
                "contract strike must be > 0".to_string(),
            ));
        }
        if !self.last_price.is_finite() || self.last_price < 0.0 {
            return Err(ScreenError::InvalidInput(
                "contract premium must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

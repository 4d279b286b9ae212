//! Module `market::calendar`.
//!
//! Day-count context for holding-period annualization, plus a helper for
//! matching a requested target date to the nearest listed expiration.
//!
//! The crate annualizes on an actual/365 basis over the remaining calendar
//! days to expiration. A same-day or already-past expiration is floored to a
//! one-day holding period so the annualization exponent stays finite.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days-to-expiration context for one analysis run.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use optionscreen::market::ExpirationContext;
///
/// let expiration = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// let ctx = ExpirationContext::new(expiration, NaiveDate::from_ymd_opt(2025, 6, 18).unwrap());
/// assert_eq!(ctx.days_to_expiration, 30);
///
/// // Expiring today still counts as a one-day holding period.
/// let today = ExpirationContext::new(expiration, expiration);
/// assert_eq!(today.days_to_expiration, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationContext {
    /// Contract expiration date.
    pub expiration: NaiveDate,
    /// Calendar days between evaluation and expiration, floored to 1.
    pub days_to_expiration: i64,
}

impl ExpirationContext {
    /// Builds the context from the expiration and the evaluation ("today")
    /// date. The day count is floored to 1 when the expiration is today or in
    /// the past.
    pub fn new(expiration: NaiveDate, evaluation_date: NaiveDate) -> Self {
        let days_to_expiration = (expiration - evaluation_date).num_days().max(1);
        Self {
            expiration,
            days_to_expiration,
        }
    }

    /// Exponent compounding the holding-period return to a 365-day year.
    pub fn annualization_exponent(&self) -> f64 {
        365.0 / self.days_to_expiration as f64
    }
}

/// Listed expiration nearest a requested target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestExpiration {
    /// Index into the listed expiration slice.
    pub index: usize,
    /// The matched expiration date.
    pub date: NaiveDate,
    /// Absolute distance from the target in calendar days.
    pub distance_days: i64,
}

/// Finds the listed expiration closest to a target date.
///
/// Distance is the absolute calendar-day difference; on ties the earliest
/// listed entry wins. Returns `None` for an empty listing.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use optionscreen::market::closest_expiration;
///
/// let listed = vec![
///     NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
/// ];
/// let target = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
/// let found = closest_expiration(&listed, target).unwrap();
/// assert_eq!(found.index, 1);
/// assert_eq!(found.distance_days, 8);
/// ```
pub fn closest_expiration(
    expirations: &[NaiveDate],
    target: NaiveDate,
) -> Option<ClosestExpiration> {
    expirations
        .iter()
        .enumerate()
        .map(|(index, &date)| ClosestExpiration {
            index,
            date,
            distance_days: (date - target).num_days().abs(),
        })
        .min_by_key(|candidate| candidate.distance_days)
}

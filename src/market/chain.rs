//! One pre-fetched options chain snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::instruments::OptionContract;

/// Options chain for a single expiration date, partitioned into sides.
///
/// The snapshot is immutable once retrieved; every analysis run derives fresh
/// values from it and never writes back. Contracts usually arrive
/// strike-ordered from the data source, but the filter stage re-sorts its
/// output and does not rely on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    /// Expiration date shared by every contract in the snapshot.
    pub expiration: NaiveDate,
    /// Call contracts.
    pub calls: Vec<OptionContract>,
    /// Put contracts.
    pub puts: Vec<OptionContract>,
}

impl OptionChain {
    /// Builds a chain snapshot.
    pub fn new(expiration: NaiveDate, calls: Vec<OptionContract>, puts: Vec<OptionContract>) -> Self {
        Self {
            expiration,
            calls,
            puts,
        }
    }

    /// Returns the partition for one side of the chain.
    pub fn side(&self, option_type: OptionType) -> &[OptionContract] {
        match option_type {
            OptionType::Call => &self.calls,
            OptionType::Put => &self.puts,
        }
    }

    /// Total number of contracts across both sides.
    pub fn len(&self) -> usize {
        self.calls.len() + self.puts.len()
    }

    /// Whether the snapshot holds no contracts at all.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.puts.is_empty()
    }
}

//! Instrument definitions: retrieved chain contracts and opened positions.

pub mod contract;
pub mod position;

pub use contract::OptionContract;
pub use position::{Bound, Position};

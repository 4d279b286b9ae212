//! Chain snapshot container and expiration calendar context.

pub mod calendar;
pub mod chain;

pub use calendar::{closest_expiration, ClosestExpiration, ExpirationContext};
pub use chain::OptionChain;

mod balance_tracker;
mod builder;
mod suite;
mod tracing;
mod units;

pub use {balance_tracker::*, builder::*, suite::*, tracing::*, units::*};

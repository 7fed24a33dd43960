mod core;
mod execute;
mod query;
mod state;

pub use {crate::core::*, execute::*, query::*, state::*};

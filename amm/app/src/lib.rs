mod app;
mod error;
mod state;

pub use {app::*, error::*, state::*};

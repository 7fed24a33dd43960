mod conversions;
mod error;
mod int;
mod number;
mod units;

pub use {conversions::*, error::*, int::*, number::*, units::*};

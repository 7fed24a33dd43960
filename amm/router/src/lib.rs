mod execute;

pub use execute::*;

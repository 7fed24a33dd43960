use amm_math::{Uint256, DECIMALS};

/// Parse a human-readable amount, e.g. `"1.5"`, into 18-decimal base units.
pub fn units(amount: &str) -> Uint256 {
    Uint256::checked_from_units(amount, DECIMALS)
        .unwrap_or_else(|err| panic!("invalid amount `{amount}`: {err}"))
}

/// Parse an amount already given in base units.
pub fn raw(amount: &str) -> Uint256 {
    amount
        .parse()
        .unwrap_or_else(|err| panic!("invalid amount `{amount}`: {err}"))
}

use {
    amm_math::Uint256,
    amm_storage::Map,
    amm_types::{Addr, Asset},
};

pub const BALANCES: Map<(Addr, Asset), Uint256> = Map::new("balance");

/// Token allowances, keyed by `(owner, spender)`.
pub const ALLOWANCES: Map<(Addr, Addr), Uint256> = Map::new("allowance");

pub const SUPPLIES: Map<Asset, Uint256> = Map::new("supply");

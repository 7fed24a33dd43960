use {
    amm_math::Uint256,
    amm_storage::{Item, Map},
    amm_types::{pool::Reserves, Addr},
};

/// The pool's accounted holdings, synced to its actual balances at the end of
/// every mint, burn, and swap.
pub const RESERVES: Item<Reserves> = Item::new("reserves");

pub const TOTAL_SHARES: Item<Uint256> = Item::new("total_shares");

pub const SHARE_BALANCES: Map<Addr, Uint256> = Map::new("share_balance");

/// Share allowances, keyed by `(owner, spender)`.
pub const SHARE_ALLOWANCES: Map<(Addr, Addr), Uint256> = Map::new("share_allowance");

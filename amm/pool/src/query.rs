use {
    crate::{RESERVES, SHARE_ALLOWANCES, SHARE_BALANCES, TOTAL_SHARES},
    amm_math::Uint256,
    amm_types::{
        pool::{QueryMsg, Reserves},
        Addr, ImmutableCtx, JsonSerExt, Order, StdResult, Storage,
    },
    serde_json::Value,
    std::collections::BTreeMap,
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Value> {
    match msg {
        QueryMsg::Reserves {} => query_reserves(ctx.storage)?.to_json_value(),
        QueryMsg::TotalShares {} => query_total_shares(ctx.storage)?.to_json_value(),
        QueryMsg::ShareBalance { holder } => {
            query_share_balance(ctx.storage, holder)?.to_json_value()
        },
        QueryMsg::ShareAllowance { owner, spender } => {
            query_share_allowance(ctx.storage, owner, spender)?.to_json_value()
        },
        QueryMsg::ShareHolders {} => query_share_holders(ctx.storage)?.to_json_value(),
    }
}

pub fn query_reserves(storage: &dyn Storage) -> StdResult<Reserves> {
    RESERVES.load(storage)
}

pub fn query_total_shares(storage: &dyn Storage) -> StdResult<Uint256> {
    TOTAL_SHARES.load(storage)
}

pub fn query_share_balance(storage: &dyn Storage, holder: Addr) -> StdResult<Uint256> {
    SHARE_BALANCES
        .may_load(storage, holder)
        .map(|maybe_balance| maybe_balance.unwrap_or_default())
}

pub fn query_share_allowance(
    storage: &dyn Storage,
    owner: Addr,
    spender: Addr,
) -> StdResult<Uint256> {
    SHARE_ALLOWANCES
        .may_load(storage, (owner, spender))
        .map(|maybe_allowance| maybe_allowance.unwrap_or_default())
}

/// Every holder with a non-zero share balance, the pool itself included.
pub fn query_share_holders(storage: &dyn Storage) -> StdResult<BTreeMap<Addr, Uint256>> {
    SHARE_BALANCES.range(storage, Order::Ascending).collect()
}

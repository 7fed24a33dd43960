use {
    crate::{ALLOWANCES, BALANCES, SUPPLIES},
    amm_math::Uint256,
    amm_types::{bank::QueryMsg, Addr, Asset, ImmutableCtx, JsonSerExt, StdResult, Storage},
    serde_json::Value,
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Value> {
    match msg {
        QueryMsg::Balance { address, asset } => {
            query_balance(ctx.storage, address, asset)?.to_json_value()
        },
        QueryMsg::Allowance { owner, spender } => {
            query_allowance(ctx.storage, owner, spender)?.to_json_value()
        },
        QueryMsg::Supply { asset } => query_supply(ctx.storage, asset)?.to_json_value(),
    }
}

pub fn query_balance(storage: &dyn Storage, address: Addr, asset: Asset) -> StdResult<Uint256> {
    BALANCES
        .may_load(storage, (address, asset))
        .map(|maybe_balance| maybe_balance.unwrap_or_default())
}

pub fn query_allowance(storage: &dyn Storage, owner: Addr, spender: Addr) -> StdResult<Uint256> {
    ALLOWANCES
        .may_load(storage, (owner, spender))
        .map(|maybe_allowance| maybe_allowance.unwrap_or_default())
}

pub fn query_supply(storage: &dyn Storage, asset: Asset) -> StdResult<Uint256> {
    SUPPLIES
        .may_load(storage, asset)
        .map(|maybe_supply| maybe_supply.unwrap_or_default())
}

use {
    crate::{
        burn_payout, initial_shares, query_share_balance, subsequent_shares, swap_output,
        RESERVES, SHARE_ALLOWANCES, SHARE_BALANCES, TOTAL_SHARES,
    },
    amm_bank::query_balance,
    amm_math::{IsZero, Number, NumberConst, Uint256},
    amm_types::{
        pool::{ExecuteMsg, PoolError, PoolResult, Reserves, MINIMUM_LOCKED_SHARES},
        Addr, Asset, MutableCtx, Response, StdResult, Storage,
    },
};

/// Create the pool state with zero reserves and zero shares.
pub fn initialize(storage: &mut dyn Storage) -> StdResult<()> {
    RESERVES.save(storage, &Reserves::default())?;
    TOTAL_SHARES.save(storage, &Uint256::ZERO)?;

    Ok(())
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> PoolResult<Response> {
    match msg {
        ExecuteMsg::Mint { to } => {
            let shares = mint(ctx, to)?;
            Ok(Response::Minted { shares })
        },
        ExecuteMsg::Burn { to } => {
            let (native_out, token_out) = burn(ctx, to)?;
            Ok(Response::Burned {
                native_out,
                token_out,
            })
        },
        ExecuteMsg::Swap { to } => {
            let (asset_out, amount_out) = swap(ctx, to)?;
            Ok(Response::Swapped {
                asset_out,
                amount_out,
            })
        },
        ExecuteMsg::Transfer { to, amount } => {
            transfer_shares(ctx.storage, ctx.contract, ctx.sender, to, amount)?;
            Ok(Response::new())
        },
        ExecuteMsg::Approve { spender, amount } => {
            approve_shares(ctx.storage, ctx.sender, spender, amount)?;
            Ok(Response::new())
        },
        ExecuteMsg::TransferFrom { owner, to, amount } => {
            transfer_shares_from(ctx.storage, ctx.contract, ctx.sender, owner, to, amount)?;
            Ok(Response::new())
        },
    }
}

/// Issue shares to `to` for whatever the pool received since the last sync.
pub fn mint(ctx: MutableCtx, to: Addr) -> PoolResult<Uint256> {
    let reserves = RESERVES.load(ctx.storage)?;
    let balances = query_pool_balances(ctx.storage, ctx.contract)?;
    let native_in = balances.native.checked_sub(reserves.native)?;
    let token_in = balances.token.checked_sub(reserves.token)?;

    if native_in.is_zero() && token_in.is_zero() {
        return Err(PoolError::InsufficientDeposit);
    }

    let total_shares = TOTAL_SHARES.load(ctx.storage)?;

    let (minted, shares) = if total_shares.is_zero() {
        if native_in.is_zero() || token_in.is_zero() {
            return Err(PoolError::FirstDepositRequiresBoth {
                native_in,
                token_in,
            });
        }

        let (liquidity, shares) = initial_shares(native_in, token_in)?;

        increase_shares(ctx.storage, ctx.contract, MINIMUM_LOCKED_SHARES)?;

        (liquidity, shares)
    } else {
        let shares = subsequent_shares(native_in, token_in, &reserves, total_shares)?;

        (shares, shares)
    };

    increase_shares(ctx.storage, to, shares)?;

    TOTAL_SHARES.save(ctx.storage, &total_shares.checked_add(minted)?)?;
    RESERVES.save(ctx.storage, &balances)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            to = to.to_string(),
            native_in = native_in.to_string(),
            token_in = token_in.to_string(),
            shares = shares.to_string(),
            "Minted shares"
        );
    }

    Ok(shares)
}

/// Redeem the shares the pool holds of itself, beyond the locked minimum.
pub fn burn(ctx: MutableCtx, to: Addr) -> PoolResult<(Uint256, Uint256)> {
    // Absorb anything sent to the pool outside of mint and swap.
    let reserves = query_pool_balances(ctx.storage, ctx.contract)?;
    let total_shares = TOTAL_SHARES.load(ctx.storage)?;
    let shares = query_share_balance(ctx.storage, ctx.contract)?
        .saturating_sub(MINIMUM_LOCKED_SHARES);

    if shares.is_zero() {
        return Err(PoolError::NothingToBurn);
    }

    let (native_out, token_out) = burn_payout(shares, &reserves, total_shares)?;

    decrease_shares(ctx.storage, ctx.contract, shares)?;
    TOTAL_SHARES.save(ctx.storage, &total_shares.checked_sub(shares)?)?;

    amm_bank::transfer(ctx.storage, ctx.contract, to, Asset::Native, native_out)?;
    amm_bank::transfer(ctx.storage, ctx.contract, to, Asset::Token, token_out)?;

    let reserves = query_pool_balances(ctx.storage, ctx.contract)?;
    RESERVES.save(ctx.storage, &reserves)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            to = to.to_string(),
            shares = shares.to_string(),
            native_out = native_out.to_string(),
            token_out = token_out.to_string(),
            "Burned shares"
        );
    }

    Ok((native_out, token_out))
}

/// Swap whichever asset the pool received since the last sync for the other.
pub fn swap(ctx: MutableCtx, to: Addr) -> PoolResult<(Asset, Uint256)> {
    let reserves = RESERVES.load(ctx.storage)?;

    if reserves.native.is_zero() || reserves.token.is_zero() {
        return Err(PoolError::NoLiquidity);
    }

    let balances = query_pool_balances(ctx.storage, ctx.contract)?;
    let native_in = balances.native.checked_sub(reserves.native)?;
    let token_in = balances.token.checked_sub(reserves.token)?;

    let (asset_in, amount_in) = match (native_in.is_non_zero(), token_in.is_non_zero()) {
        (false, false) => return Err(PoolError::NeedOneAssetToSwap),
        (true, true) => {
            return Err(PoolError::AmbiguousSwapDirection {
                native_in,
                token_in,
            })
        },
        (true, false) => (Asset::Native, native_in),
        (false, true) => (Asset::Token, token_in),
    };

    let insufficient_liquidity = || PoolError::InsufficientLiquidity {
        asset_in,
        amount_in,
        reserve_native: reserves.native,
        reserve_token: reserves.token,
    };

    // Native input may not exceed the native reserve. Token input is bounded
    // only by the output guard below.
    if asset_in == Asset::Native && amount_in > reserves.native {
        return Err(insufficient_liquidity());
    }

    let asset_out = asset_in.other();
    let reserve_out = reserves.of(asset_out);
    let amount_out = swap_output(reserves.of(asset_in), reserve_out, amount_in)?;

    if amount_out >= reserve_out {
        return Err(insufficient_liquidity());
    }

    amm_bank::transfer(ctx.storage, ctx.contract, to, asset_out, amount_out)?;

    let reserves = query_pool_balances(ctx.storage, ctx.contract)?;
    RESERVES.save(ctx.storage, &reserves)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            to = to.to_string(),
            asset_in = asset_in.to_string(),
            amount_in = amount_in.to_string(),
            amount_out = amount_out.to_string(),
            "Swapped"
        );

        tracing::debug!(
            native = reserves.native.to_string(),
            token = reserves.token.to_string(),
            "Synced reserves"
        );
    }

    Ok((asset_out, amount_out))
}

/// Move shares between holders. The pool's own balance can only leave
/// through `burn`.
pub fn transfer_shares(
    storage: &mut dyn Storage,
    pool: Addr,
    from: Addr,
    to: Addr,
    amount: Uint256,
) -> PoolResult<()> {
    if from == pool {
        return Err(PoolError::LockedSharesNotTransferable);
    }

    decrease_shares(storage, from, amount)?;
    increase_shares(storage, to, amount)?;

    Ok(())
}

pub fn approve_shares(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: Uint256,
) -> StdResult<()> {
    if amount.is_zero() {
        SHARE_ALLOWANCES.remove(storage, (owner, spender));
    } else {
        SHARE_ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }

    Ok(())
}

pub fn transfer_shares_from(
    storage: &mut dyn Storage,
    pool: Addr,
    spender: Addr,
    owner: Addr,
    to: Addr,
    amount: Uint256,
) -> PoolResult<()> {
    if owner == pool {
        return Err(PoolError::LockedSharesNotTransferable);
    }

    SHARE_ALLOWANCES.may_modify(storage, (owner, spender), |allowance| -> PoolResult<_> {
        let allowance = allowance.unwrap_or_default();
        let allowance = allowance.checked_sub(amount).map_err(|_| {
            PoolError::InsufficientShareAllowance {
                owner,
                spender,
                allowance,
                amount,
            }
        })?;
        if allowance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(allowance))
        }
    })?;

    transfer_shares(storage, pool, owner, to, amount)
}

/// The pool's actual holdings of both assets, according to the bank.
fn query_pool_balances(storage: &dyn Storage, pool: Addr) -> StdResult<Reserves> {
    Ok(Reserves {
        native: query_balance(storage, pool, Asset::Native)?,
        token: query_balance(storage, pool, Asset::Token)?,
    })
}

fn increase_shares(storage: &mut dyn Storage, holder: Addr, amount: Uint256) -> StdResult<()> {
    SHARE_BALANCES.may_modify(storage, holder, |balance| -> StdResult<_> {
        let balance = balance.unwrap_or_default().checked_add(amount)?;
        if balance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

fn decrease_shares(storage: &mut dyn Storage, holder: Addr, amount: Uint256) -> PoolResult<()> {
    SHARE_BALANCES.may_modify(storage, holder, |balance| -> PoolResult<_> {
        let balance = balance.unwrap_or_default();
        let balance = balance
            .checked_sub(amount)
            .map_err(|_| PoolError::InsufficientShares {
                holder,
                balance,
                amount,
            })?;
        if balance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

// ----------------------------------- tests -----------------------------------

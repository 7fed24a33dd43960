use {
    amm_math::{IsZero, MultiplyRatio, NumberConst, Uint256},
    amm_types::{
        router::{ExecuteMsg, RouterError, RouterResult},
        Addr, Asset, MutableCtx, Response,
    },
};

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> RouterResult<Response> {
    match msg {
        ExecuteMsg::AddLiquidity {
            to,
            desired_token,
            min_token,
            max_token,
        } => {
            let shares = add_liquidity(ctx, to, desired_token, min_token, max_token)?;
            Ok(Response::Minted { shares })
        },
        ExecuteMsg::RemoveLiquidity {
            to,
            min_native,
            min_token,
            shares,
        } => {
            let (native_out, token_out) =
                remove_liquidity(ctx, to, min_native, min_token, shares)?;
            Ok(Response::Burned {
                native_out,
                token_out,
            })
        },
        ExecuteMsg::Swap {
            to,
            token_in,
            min_native_out,
            min_token_out,
        } => {
            let (asset_out, amount_out) =
                swap(ctx, to, token_in, min_native_out, min_token_out)?;
            Ok(Response::Swapped {
                asset_out,
                amount_out,
            })
        },
    }
}

/// Deposit the attached native value together with a ratio-matched amount of
/// the caller's token, minting shares to `to`.
///
/// The caller must have approved the router to spend its token.
pub fn add_liquidity(
    mut ctx: MutableCtx,
    to: Addr,
    desired_token: Uint256,
    min_token: Uint256,
    max_token: Uint256,
) -> RouterResult<Uint256> {
    if min_token > desired_token {
        return Err(RouterError::MinMustBeSmallerThanDesired {
            min: min_token,
            desired: desired_token,
        });
    }

    if max_token < desired_token {
        return Err(RouterError::MaxMustBeGreaterThanDesired {
            max: max_token,
            desired: desired_token,
        });
    }

    if ctx.funds.is_zero() || desired_token.is_zero() {
        return Err(RouterError::MinimumValuesRequired);
    }

    let pool = ctx.config.pool;
    let native_in = ctx.funds;

    // An empty pool takes whatever ratio the first depositor sets.
    let token_in = if amm_pool::query_total_shares(ctx.storage)?.is_zero() {
        desired_token
    } else {
        let reserves = amm_pool::query_reserves(ctx.storage)?;
        let expected = native_in.checked_multiply_ratio_floor(reserves.token, reserves.native)?;

        if expected < min_token {
            return Err(RouterError::ExpectedTokenLessThanMin {
                expected,
                min: min_token,
            });
        }

        if expected > max_token {
            return Err(RouterError::ExpectedTokenMoreThanMax {
                expected,
                max: max_token,
            });
        }

        expected
    };

    amm_bank::transfer_from(ctx.storage, ctx.contract, ctx.sender, pool, token_in)?;
    amm_bank::transfer(ctx.storage, ctx.contract, pool, Asset::Native, native_in)?;

    let shares = amm_pool::mint(ctx.sub_ctx(pool, native_in), to)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            sender = ctx.sender.to_string(),
            native_in = native_in.to_string(),
            token_in = token_in.to_string(),
            shares = shares.to_string(),
            "Added liquidity"
        );
    }

    Ok(shares)
}

/// Redeem `shares` of the caller, paying both assets to `to`.
///
/// The caller must have approved the router to spend its shares.
pub fn remove_liquidity(
    mut ctx: MutableCtx,
    to: Addr,
    min_native: Uint256,
    min_token: Uint256,
    shares: Uint256,
) -> RouterResult<(Uint256, Uint256)> {
    if min_native.is_zero() || min_token.is_zero() {
        return Err(RouterError::MustHaveMins);
    }

    let pool = ctx.config.pool;

    amm_pool::transfer_shares_from(ctx.storage, pool, ctx.contract, ctx.sender, pool, shares)?;

    let (native_out, token_out) = amm_pool::burn(ctx.sub_ctx(pool, Uint256::ZERO), to)?;

    if native_out < min_native || token_out < min_token {
        return Err(RouterError::MinRequirementsNotMet {
            native_out,
            min_native,
            token_out,
            min_token,
        });
    }

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            sender = ctx.sender.to_string(),
            shares = shares.to_string(),
            native_out = native_out.to_string(),
            token_out = token_out.to_string(),
            "Removed liquidity"
        );
    }

    Ok((native_out, token_out))
}

/// Swap either the attached native value or `token_in` of the caller's token
/// for the other asset, paying the output to `to`.
pub fn swap(
    mut ctx: MutableCtx,
    to: Addr,
    token_in: Uint256,
    min_native_out: Uint256,
    min_token_out: Uint256,
) -> RouterResult<(Asset, Uint256)> {
    let pool = ctx.config.pool;
    let native_in = ctx.funds;

    let min_out = match (native_in.is_non_zero(), token_in.is_non_zero()) {
        (false, false) => return Err(RouterError::EthOrTokenParamsRequired),
        (true, true) => return Err(RouterError::CanOnlySwapOneAsset),
        (true, false) => {
            if min_token_out.is_zero() {
                return Err(RouterError::TokenMinOutRequired);
            }

            amm_bank::transfer(ctx.storage, ctx.contract, pool, Asset::Native, native_in)?;

            min_token_out
        },
        (false, true) => {
            amm_bank::transfer_from(ctx.storage, ctx.contract, ctx.sender, pool, token_in)?;

            min_native_out
        },
    };

    let (asset_out, amount_out) = amm_pool::swap(ctx.sub_ctx(pool, native_in), to)?;

    if amount_out < min_out {
        return Err(RouterError::OutputLessThanMin {
            output: amount_out,
            min: min_out,
        });
    }

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            sender = ctx.sender.to_string(),
            asset_out = asset_out.to_string(),
            amount_out = amount_out.to_string(),
            "Swapped through router"
        );
    }

    Ok((asset_out, amount_out))
}

// ----------------------------------- tests -----------------------------------

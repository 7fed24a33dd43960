use {
    amm_math::{MathResult, MultiplyRatio, NextNumber, Number, PrevNumber, Uint256},
    amm_types::pool::{
        PoolError, PoolResult, Reserves, MINIMUM_LOCKED_SHARES, SWAP_FEE_DENOMINATOR,
        SWAP_FEE_NUMERATOR,
    },
    std::cmp,
};

/// Shares issued by the first deposit into an empty pool.
///
/// Returns `(total, to_depositor)`, where `to_depositor = floor(sqrt(native *
/// token - MINIMUM_LOCKED_SHARES))` and `total = to_depositor +
/// MINIMUM_LOCKED_SHARES`. The difference is locked to the pool forever.
pub fn initial_shares(native_in: Uint256, token_in: Uint256) -> PoolResult<(Uint256, Uint256)> {
    // The product may exceed 256 bits; its square root never does.
    let product = native_in.checked_full_mul(token_in)?;
    let locked = MINIMUM_LOCKED_SHARES.into_next();

    if product <= locked {
        return Err(PoolError::InsufficientInitialLiquidity { product });
    }

    let to_depositor = product
        .checked_sub(locked)?
        .checked_sqrt()?
        .checked_into_prev()?;

    Ok((to_depositor.checked_add(MINIMUM_LOCKED_SHARES)?, to_depositor))
}

/// Shares issued by a deposit into a non-empty pool: the deposit is priced off
/// whichever asset is scarcer relative to the reserves.
pub fn subsequent_shares(
    native_in: Uint256,
    token_in: Uint256,
    reserves: &Reserves,
    total_shares: Uint256,
) -> MathResult<Uint256> {
    let by_native = native_in.checked_multiply_ratio_floor(total_shares, reserves.native)?;
    let by_token = token_in.checked_multiply_ratio_floor(total_shares, reserves.token)?;

    Ok(cmp::min(by_native, by_token))
}

/// Assets paid out for burning `shares`, both rounded down.
pub fn burn_payout(
    shares: Uint256,
    reserves: &Reserves,
    total_shares: Uint256,
) -> MathResult<(Uint256, Uint256)> {
    let native_out = shares.checked_multiply_ratio_floor(reserves.native, total_shares)?;
    let token_out = shares.checked_multiply_ratio_floor(reserves.token, total_shares)?;

    Ok((native_out, token_out))
}

/// Output of a swap after the fee is skimmed from the input.
///
/// Solves `A * B = (A + effective_in) * (B - output)` for `output`:
///
/// ```plain
/// effective_in = floor(input * 99 / 100)
/// output       = B - floor(A * B / (A + effective_in))
/// ```
pub fn swap_output(
    input_reserve: Uint256,
    output_reserve: Uint256,
    input_amount: Uint256,
) -> MathResult<Uint256> {
    let effective_in =
        input_amount.checked_multiply_ratio_floor(SWAP_FEE_NUMERATOR, SWAP_FEE_DENOMINATOR)?;

    output_reserve.checked_sub(output_reserve.checked_multiply_ratio_floor(
        input_reserve,
        input_reserve.checked_add(effective_in)?,
    )?)
}

// ----------------------------------- tests -----------------------------------

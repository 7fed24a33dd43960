use {
    crate::{bank::BankError, pool::PoolError, Addr, StdError},
    amm_math::{MathError, Uint256},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Deposit the attached native value plus a ratio-matched amount of token,
    /// minting shares to `to`.
    AddLiquidity {
        to: Addr,
        desired_token: Uint256,
        min_token: Uint256,
        max_token: Uint256,
    },
    /// Redeem `shares` of the sender, paying both assets to `to`.
    RemoveLiquidity {
        to: Addr,
        min_native: Uint256,
        min_token: Uint256,
        shares: Uint256,
    },
    /// Swap either the attached native value or `token_in` of token, paying
    /// the output to `to`.
    Swap {
        to: Addr,
        token_in: Uint256,
        min_native_out: Uint256,
        min_token_out: Uint256,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("min must be smaller than desired! min: {min}, desired: {desired}")]
    MinMustBeSmallerThanDesired { min: Uint256, desired: Uint256 },

    #[error("max must be greater than desired! max: {max}, desired: {desired}")]
    MaxMustBeGreaterThanDesired { max: Uint256, desired: Uint256 },

    #[error("minimum values required: both native value and desired token must be non-zero")]
    MinimumValuesRequired,

    #[error("expected token less than min! expected: {expected}, min: {min}")]
    ExpectedTokenLessThanMin { expected: Uint256, min: Uint256 },

    #[error("expected token more than max! expected: {expected}, max: {max}")]
    ExpectedTokenMoreThanMax { expected: Uint256, max: Uint256 },

    #[error("must have mins: both min native and min token must be non-zero")]
    MustHaveMins,

    #[error("min requirements not met! native out: {native_out} (min {min_native}), token out: {token_out} (min {min_token})")]
    MinRequirementsNotMet {
        native_out: Uint256,
        min_native: Uint256,
        token_out: Uint256,
        min_token: Uint256,
    },

    #[error("native value or token input required")]
    EthOrTokenParamsRequired,

    #[error("can only swap one asset: both native value and token input given")]
    CanOnlySwapOneAsset,

    #[error("token min out required when swapping native for token")]
    TokenMinOutRequired,

    #[error("output less than min! output: {output}, min: {min}")]
    OutputLessThanMin { output: Uint256, min: Uint256 },
}

pub type RouterResult<T> = Result<T, RouterError>;

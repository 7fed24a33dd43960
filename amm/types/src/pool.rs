use {
    crate::{bank::BankError, Addr, Asset, StdError},
    amm_math::{MathError, Uint256, Uint512},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Shares permanently credited to the pool itself on the first mint.
pub const MINIMUM_LOCKED_SHARES: Uint256 = Uint256::new_from_u64(1000);

/// The swap input is scaled by `SWAP_FEE_NUMERATOR / SWAP_FEE_DENOMINATOR`
/// before pricing; the difference stays in the reserves.
pub const SWAP_FEE_NUMERATOR: Uint256 = Uint256::new_from_u64(99);

pub const SWAP_FEE_DENOMINATOR: Uint256 = Uint256::new_from_u64(100);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Issue shares to `to` for the assets sent to the pool since the last
    /// reserve sync.
    Mint { to: Addr },
    /// Redeem the shares the pool holds of itself, paying both assets to `to`.
    Burn { to: Addr },
    /// Swap the asset sent to the pool since the last reserve sync for the
    /// other one, paying the output to `to`.
    Swap { to: Addr },
    /// Move shares from the sender to `to`.
    Transfer { to: Addr, amount: Uint256 },
    /// Allow `spender` to move up to `amount` of the sender's shares.
    Approve { spender: Addr, amount: Uint256 },
    /// Move `amount` of `owner`'s shares to `to`, spending the sender's
    /// allowance.
    TransferFrom {
        owner: Addr,
        to: Addr,
        amount: Uint256,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Reserves {},
    TotalShares {},
    ShareBalance { holder: Addr },
    ShareAllowance { owner: Addr, spender: Addr },
    ShareHolders {},
}

/// The pool's accounted holdings of each asset.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
pub struct Reserves {
    pub native: Uint256,
    pub token: Uint256,
}

impl Reserves {
    pub fn of(&self, asset: Asset) -> Uint256 {
        match asset {
            Asset::Native => self.native,
            Asset::Token => self.token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error("insufficient deposit: no native or token sent to the pool")]
    InsufficientDeposit,

    #[error("first deposit requires both native and token! native: {native_in}, token: {token_in}")]
    FirstDepositRequiresBoth {
        native_in: Uint256,
        token_in: Uint256,
    },

    #[error("insufficient initial liquidity: native * token = {product} must exceed the 1000 locked shares")]
    InsufficientInitialLiquidity { product: Uint512 },

    #[error("nothing to burn: the pool holds none of its own shares")]
    NothingToBurn,

    #[error("no liquidity: the pool has no reserves")]
    NoLiquidity,

    #[error("need one asset to swap: no native or token sent to the pool")]
    NeedOneAssetToSwap,

    #[error("ambiguous swap direction: both native ({native_in}) and token ({token_in}) sent to the pool")]
    AmbiguousSwapDirection {
        native_in: Uint256,
        token_in: Uint256,
    },

    #[error("insufficient liquidity: can't swap {amount_in} {asset_in} against reserves of {reserve_native} native and {reserve_token} token")]
    InsufficientLiquidity {
        asset_in: Asset,
        amount_in: Uint256,
        reserve_native: Uint256,
        reserve_token: Uint256,
    },

    #[error("insufficient shares! holder: {holder}, balance: {balance}, amount: {amount}")]
    InsufficientShares {
        holder: Addr,
        balance: Uint256,
        amount: Uint256,
    },

    #[error("insufficient share allowance! owner: {owner}, spender: {spender}, allowance: {allowance}, amount: {amount}")]
    InsufficientShareAllowance {
        owner: Addr,
        spender: Addr,
        allowance: Uint256,
        amount: Uint256,
    },

    #[error("locked shares are not transferable")]
    LockedSharesNotTransferable,
}

pub type PoolResult<T> = Result<T, PoolError>;

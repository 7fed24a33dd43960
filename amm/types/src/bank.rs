use {
    crate::{Addr, Asset, StdError},
    amm_math::{MathError, Uint256},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Move an asset from the sender to `to`.
    Transfer {
        to: Addr,
        asset: Asset,
        amount: Uint256,
    },
    /// Allow `spender` to pull up to `amount` of the sender's token.
    Approve { spender: Addr, amount: Uint256 },
    /// Pull `amount` of `owner`'s token into `to`, spending the sender's
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
    Balance { address: Addr, asset: Asset },
    Allowance { owner: Addr, spender: Addr },
    Supply { asset: Asset },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("insufficient {asset} balance! address: {address}, balance: {balance}, amount: {amount}")]
    InsufficientBalance {
        address: Addr,
        asset: Asset,
        balance: Uint256,
        amount: Uint256,
    },

    #[error("insufficient allowance! owner: {owner}, spender: {spender}, allowance: {allowance}, amount: {amount}")]
    InsufficientAllowance {
        owner: Addr,
        spender: Addr,
        allowance: Uint256,
        amount: Uint256,
    },
}

pub type BankResult<T> = Result<T, BankError>;

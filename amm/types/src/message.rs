use {
    crate::{bank, pool, router, Asset},
    amm_math::Uint256,
    serde::{Deserialize, Serialize},
};

/// A top-level message, addressed to one component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    Bank(bank::ExecuteMsg),
    Pool(pool::ExecuteMsg),
    Router(router::ExecuteMsg),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    Config {},
    Bank(bank::QueryMsg),
    Pool(pool::QueryMsg),
}

/// Result of a successfully executed message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// The message has no return value.
    Empty,
    /// Shares issued by a mint.
    Minted { shares: Uint256 },
    /// Assets paid out by a burn.
    Burned {
        native_out: Uint256,
        token_out: Uint256,
    },
    /// Asset paid out by a swap.
    Swapped { asset_out: Asset, amount_out: Uint256 },
}

impl Response {
    pub fn new() -> Self {
        Self::Empty
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

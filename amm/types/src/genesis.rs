use {
    crate::Addr,
    amm_math::Uint256,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Deployment parameters, fixed at genesis.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address of the reserve ledger. Holds the reserves and the locked shares.
    pub pool: Addr,
    /// Address of the router.
    pub router: Addr,
    /// Display metadata of the token.
    pub token: TokenInfo,
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
}

impl Default for TokenInfo {
    fn default() -> Self {
        Self {
            name: "Token".to_string(),
            symbol: "TKN".to_string(),
        }
    }
}

/// Starting balances of an account.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Balances {
    pub native: Uint256,
    pub token: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenesisState {
    pub config: Config,
    pub balances: BTreeMap<Addr, Balances>,
}

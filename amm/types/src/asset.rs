use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// The two assets traded by the pool.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[borsh(use_discriminant = true)]
pub enum Asset {
    /// The chain's native currency, moved by attaching it to a call.
    Native = 0,
    /// The fungible token, moved by transfer or allowance-gated pull.
    Token = 1,
}

impl Asset {
    pub const ALL: [Asset; 2] = [Asset::Native, Asset::Token];

    /// The asset on the other side of the pair.
    pub fn other(self) -> Self {
        match self {
            Asset::Native => Asset::Token,
            Asset::Token => Asset::Native,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::Token => "token",
        }
    }
}

impl Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Asset {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        match s {
            "native" => Ok(Asset::Native),
            "token" => Ok(Asset::Token),
            _ => Err(StdError::deserialize::<Self, _>(
                "str",
                format!("unknown asset `{s}`"),
            )),
        }
    }
}

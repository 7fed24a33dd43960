use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// An account address.
///
/// Addresses are of 20-byte length, displayed in lowercase hex with the `0x`
/// prefix. Addresses are validated during deserialization, so an `Addr` that
/// came out of a JSON message is always well-formed.
#[derive(
    BorshSerialize, BorshDeserialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Addr([u8; Addr::LENGTH]);

impl Addr {
    pub const LENGTH: usize = 20;

    /// Generate a mock address from use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Addr {
    type Error = StdError;

    fn try_from(bytes: &[u8]) -> StdResult<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_address(hex::encode(bytes), "incorrect length"))
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(StdError::invalid_address(s, "missing `0x` prefix"));
        };

        let bytes =
            hex::decode(hex_str).map_err(|err| StdError::invalid_address(s, err.to_string()))?;

        bytes
            .as_slice()
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_address(s, "incorrect length"))
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Addr::from_str(&s).map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn display_and_parse_roundtrip() {
        let addr = Addr::mock(7);
        let s = addr.to_string();
        assert_eq!(s, "0x0000000000000000000000000000000000000007");
        assert_eq!(s.parse::<Addr>().unwrap(), addr);
    }

    #[test_case("0000000000000000000000000000000000000007"; "missing prefix")]
    #[test_case("0x00000000000000000000000000000000000007"; "too short")]
    #[test_case("0x000000000000000000000000000000000000000g"; "not hex")]
    fn parsing_invalid_address_fails(input: &str) {
        assert!(matches!(
            input.parse::<Addr>(),
            Err(StdError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn deserializing_validates() {
        assert!(serde_json::from_str::<Addr>("\"0x1234\"").is_err());
        assert_eq!(
            serde_json::from_str::<Addr>("\"0x0000000000000000000000000000000000000001\"").unwrap(),
            Addr::mock(1)
        );
    }
}

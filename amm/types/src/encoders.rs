use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de::DeserializeOwned, ser::Serialize},
};

pub trait BorshSerExt {
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>>;
}

impl<T> BorshSerExt for T
where
    T: BorshSerialize,
{
    fn to_borsh_vec(&self) -> StdResult<Vec<u8>> {
        borsh::to_vec(self).map_err(|err| StdError::serialize::<T, _>("borsh", err))
    }
}

pub trait BorshDeExt {
    fn deserialize_borsh<T>(&self) -> StdResult<T>
    where
        T: BorshDeserialize;
}

impl<B> BorshDeExt for B
where
    B: AsRef<[u8]>,
{
    fn deserialize_borsh<T>(&self) -> StdResult<T>
    where
        T: BorshDeserialize,
    {
        borsh::from_slice(self.as_ref()).map_err(|err| StdError::deserialize::<T, _>("borsh", err))
    }
}

pub trait JsonSerExt {
    fn to_json_value(&self) -> StdResult<serde_json::Value>;

    fn to_json_string_pretty(&self) -> StdResult<String>;
}

impl<T> JsonSerExt for T
where
    T: Serialize,
{
    fn to_json_value(&self) -> StdResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }

    fn to_json_string_pretty(&self) -> StdResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| StdError::serialize::<T, _>("json", err))
    }
}

pub trait JsonDeExt {
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned;
}

impl<B> JsonDeExt for B
where
    B: AsRef<[u8]>,
{
    fn deserialize_json<T>(&self) -> StdResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(self.as_ref()).map_err(|err| StdError::deserialize::<T, _>("json", err))
    }
}

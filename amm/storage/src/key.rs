use {
    amm_types::{nested_namespaces_with_key, Addr, Asset, StdError, StdResult},
    std::borrow::Cow,
};

/// Describes a key used in [`Map`](crate::Map).
///
/// The key needs to be serialized to or deserialized from raw bytes. We don't
/// use `serde` here because it's slow, not compact, and faillable.
pub trait PrimaryKey {
    /// The type that raw keys deserialize into.
    type Output;

    /// Convert the key into one or more _raw keys_.
    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    /// Serialize the raw keys into bytes.
    ///
    /// Each raw key, other than the last one, is prefixed by its length, so
    /// that when deserializing we can tell where a raw key ends and where the
    /// next one starts:
    ///
    /// ```plain
    /// len(A) | A | B
    /// ```
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key.as_ref())
    }

    /// Deserialize the raw bytes into the output.
    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl PrimaryKey for Addr {
    type Output = Addr;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self.as_ref())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        Addr::try_from(bytes)
    }
}

impl PrimaryKey for Asset {
    type Output = Asset;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let byte: &'static [u8] = match self {
            Asset::Native => &[0],
            Asset::Token => &[1],
        };

        vec![Cow::Borrowed(byte)]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        match bytes {
            [0] => Ok(Asset::Native),
            [1] => Ok(Asset::Token),
            _ => Err(StdError::deserialize::<Asset, _>(
                "key",
                format!("invalid asset key: {bytes:?}"),
            )),
        }
    }
}

impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a_raw, b_raw) = split_one_key(bytes)?;
        let a = A::from_slice(a_raw)?;
        let b = B::from_slice(b_raw)?;
        Ok((a, b))
    }
}

/// Split the first key from the rest, using the 2-byte big-endian length
/// prefix written by [`PrimaryKey::joined_key`].
fn split_one_key(bytes: &[u8]) -> StdResult<(&[u8], &[u8])> {
    let [len_hi, len_lo, rest @ ..] = bytes else {
        return Err(StdError::deserialize::<(), _>(
            "key",
            "key is shorter than its length prefix",
        ));
    };

    let len = u16::from_be_bytes([*len_hi, *len_lo]) as usize;

    if rest.len() < len {
        return Err(StdError::deserialize::<(), _>(
            "key",
            format!("length prefix {len} exceeds remaining {} bytes", rest.len()),
        ));
    }

    Ok(rest.split_at(len))
}

// ----------------------------------- tests -----------------------------------

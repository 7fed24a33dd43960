use {
    crate::{Borsh, Codec, Path, PrimaryKey},
    amm_types::{increment_last_byte, nested_namespaces_with_key, Order, StdResult, Storage},
    std::{borrow::Cow, marker::PhantomData},
};

/// A collection of values, each stored under `namespace | key`.
pub struct Map<'a, K, T, C = Borsh>
where
    C: Codec<T>,
{
    namespace: &'a [u8],
    key: PhantomData<K>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<'a, K, T, C> Map<'a, K, T, C>
where
    C: Codec<T>,
{
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            key: PhantomData,
            data: PhantomData,
            codec: PhantomData,
        }
    }
}

impl<K, T, C> Map<'_, K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    pub fn path(&self, key: K) -> Path<'static, T, C> {
        let joined = key.joined_key();
        Path::new(self.namespace, &[], Some(&Cow::Owned(joined)))
    }

    pub fn has(&self, storage: &dyn Storage, key: K) -> bool {
        self.path(key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.path(key).may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage, key: K) -> StdResult<T> {
        self.path(key).load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        self.path(key).save(storage, data)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: K) {
        self.path(key).remove(storage)
    }

    pub fn may_modify<F, E>(
        &self,
        storage: &mut dyn Storage,
        key: K,
        action: F,
    ) -> Result<Option<T>, E>
    where
        F: FnOnce(Option<T>) -> Result<Option<T>, E>,
        E: From<amm_types::StdError>,
    {
        self.path(key).may_modify(storage, action)
    }

    /// Iterate all entries of the map, decoding both keys and values.
    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'b>
    where
        K: 'b,
        K::Output: 'b,
        T: 'b,
        C: 'b,
    {
        let prefix = nested_namespaces_with_key(Some(self.namespace), &[], None);
        let min = prefix.clone();
        let max = increment_last_byte(prefix.clone());
        let prefix_len = prefix.len();

        let iter = storage
            .scan(Some(&min), Some(&max), order)
            .map(move |(k, v)| {
                let key = K::from_slice(&k[prefix_len..])?;
                let data = C::decode(&v)?;
                Ok((key, data))
            });

        Box::new(iter)
    }
}

// ----------------------------------- tests -----------------------------------

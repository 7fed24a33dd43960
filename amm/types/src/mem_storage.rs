use {
    crate::{Order, Record, Storage},
    borsh::{BorshDeserialize, BorshSerialize},
    std::{collections::BTreeMap, iter, ops::Bound},
};

/// An in-memory KV store backed by a `BTreeMap`.
///
/// Borsh-serializable, so the whole committed state can be snapshotted to disk
/// and restored.
#[derive(BorshSerialize, BorshDeserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct MemStorage {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Storage for MemStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Box::new(iter::empty());
            }
        }

        let min = min.map_or(Bound::Unbounded, |bytes| Bound::Included(bytes.to_vec()));
        let max = max.map_or(Bound::Unbounded, |bytes| Bound::Excluded(bytes.to_vec()));
        let iter = self
            .data
            .range((min, max))
            .map(|(k, v)| (k.clone(), v.clone()));

        match order {
            Order::Ascending => Box::new(iter),
            Order::Descending => Box::new(iter.rev()),
        }
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }

    fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::{BorshDeExt, BorshSerExt}};

    #[test]
    fn scan_respects_bounds() {
        let mut storage = MemStorage::new();
        for i in 1..=5u8 {
            storage.write(&[i], &[i]);
        }

        let keys = |min: Option<u8>, max: Option<u8>, order: Order| {
            let min = min.map(|byte| vec![byte]);
            let max = max.map(|byte| vec![byte]);
            storage
                .scan(min.as_deref(), max.as_deref(), order)
                .map(|(k, _)| k[0])
                .collect::<Vec<_>>()
        };

        assert_eq!(keys(Some(2), Some(4), Order::Ascending), vec![2, 3]);
        assert_eq!(keys(Some(2), None, Order::Descending), vec![5, 4, 3, 2]);
        assert_eq!(keys(Some(4), Some(2), Order::Ascending), Vec::<u8>::new());
    }

    #[test]
    fn snapshot_roundtrip() {
        let mut storage = MemStorage::new();
        storage.write(b"foo", b"bar");
        storage.write(b"fuzz", b"buzz");

        let bytes = storage.to_borsh_vec().unwrap();
        let restored: MemStorage = bytes.deserialize_borsh().unwrap();

        assert_eq!(restored, storage);
        assert_eq!(restored.read(b"fuzz"), Some(b"buzz".to_vec()));
    }
}

//! Key-value blob storage contract

use std::collections::HashMap;

use crate::error::Result;

/// A local key-value store holding opaque byte blobs.
///
/// `set` must fully replace any previous value under the key.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, overwriting the previous blob
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// In-memory `BlobStore`, mainly for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls served so far
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_vec());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryBlobStore::new();
        store.set("k", b"first value").unwrap();
        store.set("k", b"2nd").unwrap();

        assert_eq!(store.get("k").unwrap(), Some(b"2nd".to_vec()));
        assert_eq!(store.write_count(), 2);
    }
}

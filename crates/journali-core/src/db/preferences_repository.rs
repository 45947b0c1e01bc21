//! Display preferences stored next to the notes blob

use super::blob_store::BlobStore;
use crate::error::Result;
use crate::query::SortMode;

/// Blob store key holding the chosen sort mode
pub const SORT_MODE_KEY: &str = "journal.sortMode";

/// Load the remembered sort mode, falling back to the default.
pub fn load_sort_mode<S: BlobStore>(store: &S) -> SortMode {
    match store.get(SORT_MODE_KEY) {
        Ok(Some(raw)) => serde_json::from_slice(&raw).unwrap_or_else(|error| {
            tracing::warn!("Ignoring unreadable sort mode preference: {error}");
            SortMode::default()
        }),
        Ok(None) => SortMode::default(),
        Err(error) => {
            tracing::warn!("Could not read sort mode preference: {error}");
            SortMode::default()
        }
    }
}

/// Remember `mode` for the next session.
pub fn save_sort_mode<S: BlobStore>(store: &mut S, mode: SortMode) -> Result<()> {
    let encoded = serde_json::to_vec(&mode)?;
    store.set(SORT_MODE_KEY, &encoded)
}

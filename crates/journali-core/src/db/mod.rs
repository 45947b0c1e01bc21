//! Persistence layer for Journali

mod blob_store;
mod connection;
mod migrations;
mod preferences_repository;
mod repository;

pub use blob_store::{BlobStore, MemoryBlobStore};
pub use connection::SqliteBlobStore;
pub use preferences_repository::{load_sort_mode, save_sort_mode, SORT_MODE_KEY};
pub use repository::{NoteRepository, NOTES_KEY};

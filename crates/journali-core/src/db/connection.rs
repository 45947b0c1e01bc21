//! `SQLite`-backed blob store

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::blob_store::BlobStore;
use super::migrations;
use crate::error::Result;

/// Blob store kept in a single local `SQLite` file.
///
/// Each `set` is one upsert statement, so a reader never sees a half-written
/// value.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Open the store at the given path, creating it if it doesn't exist
    ///
    /// Runs migrations automatically.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self {
            conn: Connection::open(path)?,
        };
        store.configure();
        migrations::run(&store.conn)?;
        tracing::debug!("Opened blob store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory store (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.configure();
        migrations::run(&store.conn)?;
        Ok(store)
    }

    fn configure(&self) {
        // In-memory databases answer "memory" here, which is fine.
        if let Err(error) =
            self.conn
                .pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                    row.get::<_, String>(0)
                })
        {
            tracing::debug!("Could not enable WAL mode: {error}");
        }
        if let Err(error) = self.conn.pragma_update(None, "synchronous", "NORMAL") {
            tracing::debug!("Could not set synchronous=NORMAL: {error}");
        }
    }

    /// Get a reference to the underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM blobs WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        self.conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

//! journali-core - Core library for Journali
//!
//! This crate holds the diary entry model, the note repository that mirrors
//! the collection into a key-value blob store, and the query that derives the
//! displayed list. Front ends (the CLI, a mobile shell) build on it.

pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod services;
pub mod util;

pub use error::{Error, Result};
pub use models::{AudioRef, Note, NoteId};
pub use query::{derive_displayed, SortMode};

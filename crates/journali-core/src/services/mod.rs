//! Long-running services built on the repository

mod journal;

pub use journal::JournalHandle;

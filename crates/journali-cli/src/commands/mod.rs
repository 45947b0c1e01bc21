pub mod add;
pub mod bookmark;
pub mod common;
pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod search;
pub mod voice;

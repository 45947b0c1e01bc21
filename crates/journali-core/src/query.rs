//! Derives the displayed note list from the stored collection.
//!
//! Filtering and sorting run from scratch on every call; journals are small
//! enough that a full scan is cheap.

use std::cmp::Reverse;
use std::fmt;

use caseless::default_case_fold_str;
use serde::{Deserialize, Serialize};

use crate::models::Note;

/// Ordering applied to the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Bookmarked entries first, each group oldest first
    BookmarkFirst,
    /// Most recent entry first
    #[default]
    EntryDate,
}

impl SortMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BookmarkFirst => "Sort by Bookmark",
            Self::EntryDate => "Sort by Entry Date",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter `notes` by `search` and order them by `sort`.
///
/// An empty search term keeps every note. Matching is a substring test
/// against title and content after Unicode full case folding, so "Σ" finds
/// "ΟΔΟΣ" and "STRASSE" finds "Straße". Sorting is stable, so notes
/// with equal keys keep their collection order.
#[must_use]
pub fn derive_displayed(notes: &[Note], search: &str, sort: SortMode) -> Vec<Note> {
    let needle = default_case_fold_str(search);
    let mut displayed: Vec<Note> = notes
        .iter()
        .filter(|note| needle.is_empty() || note_matches(note, &needle))
        .cloned()
        .collect();

    match sort {
        SortMode::BookmarkFirst => {
            displayed.sort_by_key(|note| (!note.is_bookmarked, note.date));
        }
        SortMode::EntryDate => displayed.sort_by_key(|note| Reverse(note.date)),
    }

    displayed
}

fn note_matches(note: &Note, needle: &str) -> bool {
    default_case_fold_str(&note.title).contains(needle)
        || default_case_fold_str(&note.content).contains(needle)
}

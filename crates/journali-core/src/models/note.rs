//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Title given to notes created from a finished voice recording
pub const VOICE_NOTE_TITLE: &str = "Voice Note";

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Opaque reference to a recording owned by the audio subsystem.
///
/// The journal only stores it; it never opens, checks, or removes the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioRef(String);

impl AudioRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Build a reference from a recording file path.
    ///
    /// Returns `None` for paths that are not valid UTF-8.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.to_str().map(Self::new)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AudioRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// A diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Entry title
    pub title: String,
    /// Entry body, may be empty
    pub content: String,
    /// Creation timestamp; edits keep it
    pub date: DateTime<Utc>,
    /// Bookmark flag
    pub is_bookmarked: bool,
    /// Attached voice recording, if any
    #[serde(rename = "audioURL", default)]
    pub audio_url: Option<AudioRef>,
}

impl Note {
    /// Create a new note stamped with the current time
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            date: Utc::now(),
            is_bookmarked: false,
            audio_url: None,
        }
    }

    /// Blank entry handed to an editor before the user types anything.
    #[must_use]
    pub fn draft() -> Self {
        Self::new("", "")
    }

    /// Entry created from a finished recording
    #[must_use]
    pub fn voice(audio: AudioRef) -> Self {
        Self::new(VOICE_NOTE_TITLE, "").with_audio(audio)
    }

    #[must_use]
    pub fn with_audio(mut self, audio: AudioRef) -> Self {
        self.audio_url = Some(audio);
        self
    }

    /// Whether the title has visible text; editors refuse to save without one.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn audio_ref_keeps_utf8_path_verbatim() {
        let audio = AudioRef::from_path(Path::new("/recordings/rec_4be1c0.m4a")).unwrap();
        assert_eq!(audio.as_str(), "/recordings/rec_4be1c0.m4a");
    }

    #[cfg(unix)]
    #[test]
    fn audio_ref_rejects_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/recordings/rec_\xff.m4a"));
        assert_eq!(AudioRef::from_path(path), None);
    }

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new() {
        let note = Note::new("Morning Walk", "Sunny");
        assert_eq!(note.title, "Morning Walk");
        assert_eq!(note.content, "Sunny");
        assert!(!note.is_bookmarked);
        assert_eq!(note.audio_url, None);
    }

    #[test]
    fn test_draft_is_blank_and_untitled() {
        let draft = Note::draft();
        assert!(draft.title.is_empty());
        assert!(draft.content.is_empty());
        assert!(!draft.has_title());
    }

    #[test]
    fn test_voice_note_carries_reference() {
        let note = Note::voice(AudioRef::new("rec_a1b2c3.m4a"));
        assert_eq!(note.title, VOICE_NOTE_TITLE);
        assert_eq!(note.content, "");
        assert_eq!(
            note.audio_url.as_ref().map(AudioRef::as_str),
            Some("rec_a1b2c3.m4a")
        );
    }

    #[test]
    fn test_whitespace_title_does_not_count() {
        assert!(!Note::new("   ", "body").has_title());
        assert!(Note::new(" A ", "").has_title());
    }

    #[test]
    fn test_json_field_names() {
        let note = Note::new("A", "").with_audio(AudioRef::new("/tmp/rec.m4a"));
        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(value["id"], serde_json::json!(note.id.as_str()));
        assert_eq!(value["isBookmarked"], serde_json::json!(false));
        assert_eq!(value["audioURL"], serde_json::json!("/tmp/rec.m4a"));
        assert!(value["date"].is_string());
    }

    #[test]
    fn test_roundtrip_keeps_empty_strings_and_null_audio() {
        let note = Note::draft();
        let encoded = serde_json::to_string(&note).unwrap();
        assert!(encoded.contains("\"audioURL\":null"));

        let decoded: Note = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, note);
    }

    #[test]
    fn test_missing_audio_field_decodes_as_none() {
        let raw = r#"{
            "id": "0190a6d4-0000-7000-8000-000000000001",
            "title": "Old entry",
            "content": "",
            "date": "2024-05-01T08:30:00Z",
            "isBookmarked": true
        }"#;

        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.title, "Old entry");
        assert!(note.is_bookmarked);
        assert_eq!(note.audio_url, None);
    }
}

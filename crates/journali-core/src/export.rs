//! Note export rendering (JSON and Markdown).

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::Note;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render notes as pretty-printed JSON, in the same record shape as storage.
pub fn render_json_export(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(notes)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "date: {}", note.date.to_rfc3339());
        let _ = writeln!(output, "bookmarked: {}", note.is_bookmarked);
        if let Some(audio) = &note.audio_url {
            let _ = writeln!(output, "audio: {audio}");
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        let _ = writeln!(output, "# {}", note.title);
        if !note.content.is_empty() {
            let _ = writeln!(output);
            output.push_str(&note.content);
            output.push('\n');
        }
    }

    output
}

/// Render notes based on selected export format.
pub fn render_notes_export(notes: &[Note], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(notes),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("journali-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioRef;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn fixed_note() -> Note {
        Note {
            id: "0190a6d4-cccc-7ccc-8ccc-111111111111".parse().unwrap(),
            title: "Morning Walk".to_string(),
            content: "Cold but bright.".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
            is_bookmarked: true,
            audio_url: Some(AudioRef::new("rec_01.m4a")),
        }
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_content() {
        let rendered = render_markdown_export(&[fixed_note()]);

        assert!(rendered.contains("id: 0190a6d4-cccc-7ccc-8ccc-111111111111"));
        assert!(rendered.contains("date: 2024-05-01T08:30:00+00:00"));
        assert!(rendered.contains("bookmarked: true"));
        assert!(rendered.contains("audio: rec_01.m4a"));
        assert!(rendered.contains("# Morning Walk\n\nCold but bright.\n"));
    }

    #[test]
    fn render_markdown_export_skips_missing_audio_and_body() {
        let note = Note::new("Title only", "");
        let rendered = render_markdown_export(&[note]);

        assert!(!rendered.contains("audio:"));
        assert!(rendered.ends_with("# Title only\n"));
    }

    #[test]
    fn render_json_export_reads_back() {
        let notes = vec![fixed_note(), Note::draft()];
        let rendered = render_notes_export(&notes, ExportFormat::Json).unwrap();

        let decoded: Vec<Note> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "journali-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "journali-export-456.md"
        );
    }
}

use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use journali_core::db::{NoteRepository, SqliteBlobStore};
use journali_core::util::{collapse_whitespace, normalize_text_option, truncate_chars};
use journali_core::Note;
use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliError;

pub type Journal = NoteRepository<SqliteBlobStore>;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub date: String,
    pub relative_time: String,
    pub is_bookmarked: bool,
    pub audio_url: Option<String>,
}

pub fn open_journal(db_path: &Path) -> Result<Journal, CliError> {
    let store = SqliteBlobStore::open(db_path)?;
    Ok(NoteRepository::load(store))
}

/// Resolve a full note ID or a unique ID prefix to a stored note.
pub fn resolve_note(note_query: &str, journal: &Journal) -> Result<Note, CliError> {
    if let Ok(note_id) = note_query.parse() {
        if let Some(note) = journal.get(&note_id) {
            return Ok(note.clone());
        }
    }

    let matching = journal.find_by_prefix(note_query);

    match matching.as_slice() {
        [] => Err(CliError::NoteNotFound(note_query.to_string())),
        [note] => Ok((*note).clone()),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(|note| short_id(note))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{note_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(note: &Note) -> String {
    note.id.as_str().chars().take(13).collect()
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let marker = if note.is_bookmarked { '*' } else { ' ' };
            let title = truncate_chars(&collapse_whitespace(&note.title), 30);
            let relative_time = format_relative_time(note.date.timestamp_millis(), now_ms);

            if note.audio_url.is_some() {
                format!(
                    "{:<13} {marker} {title:<30}  {relative_time:<10}  [voice]",
                    short_id(note)
                )
            } else {
                format!("{:<13} {marker} {title:<30}  {relative_time}", short_id(note))
            }
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    let now_ms = Utc::now().timestamp_millis();

    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        preview: note_preview(note, 80),
        content: note.content.clone(),
        date: note.date.to_rfc3339(),
        relative_time: format_relative_time(note.date.timestamp_millis(), now_ms),
        is_bookmarked: note.is_bookmarked,
        audio_url: note.audio_url.as_ref().map(ToString::to_string),
    }
}

/// First line of the body, whitespace-collapsed and truncated.
pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("");
    truncate_chars(&collapse_whitespace(first_line), max_chars)
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

pub fn normalize_title(title: &str) -> Result<String, CliError> {
    normalize_text_option(Some(title.to_string())).ok_or(CliError::EmptyTitle)
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Split editor text into a title (first non-blank line) and a body.
///
/// A leading Markdown heading marker on the title line is dropped.
pub fn parse_entry_text(text: &str) -> Option<(String, String)> {
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
    let title_line = lines.next()?;
    let title = title_line.trim().trim_start_matches('#').trim().to_string();
    if title.is_empty() {
        return None;
    }

    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Some((title, content))
}

/// Inverse of [`parse_entry_text`], used to seed the editor.
pub fn render_entry_text(note: &Note) -> String {
    if note.content.is_empty() {
        format!("{}\n", note.title)
    } else {
        format!("{}\n\n{}\n", note.title, note.content)
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

pub fn capture_editor_input_with_initial(initial_content: &str) -> Result<String, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_text = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(note_text)
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // EDITOR may carry arguments, e.g. "code --wait".
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let status = Command::new(program).args(parts).arg(file_path).status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .ok()
        .or_else(|| CliConfig::load().ok().and_then(|config| config.editor))
        .unwrap_or_else(|| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("journali-entry-{}-{now}.md", std::process::id()))
}

/// `--db-path`, then `JOURNALI_DB_PATH`, then the config file, then the
/// platform data directory.
pub fn resolve_db_path(cli_db_path: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("JOURNALI_DB_PATH").map(PathBuf::from))
        .or(configured)
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("journali")
        .join("journali.db")
}

pub fn write_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use std::path::Path;

use crate::commands::common::{
    capture_editor_input_with_initial, normalize_note_identifier, normalize_title, open_journal,
    parse_entry_text, render_entry_text, resolve_note,
};
use crate::error::CliError;

pub fn run_edit(
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
    db_path: &Path,
) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let mut journal = open_journal(db_path)?;
    let note = resolve_note(&normalized_id, &journal)?;

    let mut edited = note.clone();
    if title.is_none() && content.is_none() {
        let text = capture_editor_input_with_initial(&render_entry_text(&note))?;
        let (new_title, new_content) = parse_entry_text(&text).ok_or(CliError::EmptyTitle)?;
        edited.title = new_title;
        edited.content = new_content;
    } else {
        if let Some(title) = title {
            edited.title = normalize_title(title)?;
        }
        if let Some(content) = content {
            edited.content = content.trim().to_string();
        }
    }

    if edited != note {
        journal.upsert(edited)?;
    }

    println!("{}", note.id);
    Ok(())
}

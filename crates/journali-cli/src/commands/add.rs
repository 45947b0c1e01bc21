use std::path::Path;

use journali_core::Note;

use crate::commands::common::{
    capture_editor_input_with_initial, normalize_title, open_journal, parse_entry_text,
    read_piped_stdin,
};
use crate::error::CliError;

pub fn run_add(
    title_parts: &[String],
    content: Option<&str>,
    db_path: &Path,
) -> Result<(), CliError> {
    let note = resolve_new_entry(title_parts, content)?;

    let mut journal = open_journal(db_path)?;
    journal.upsert(note.clone())?;

    println!("{}", note.id);
    Ok(())
}

fn resolve_new_entry(title_parts: &[String], content: Option<&str>) -> Result<Note, CliError> {
    let joined = title_parts.join(" ");
    if !joined.trim().is_empty() {
        let title = normalize_title(&joined)?;
        let content = match content {
            Some(content) => content.trim().to_string(),
            None => read_piped_stdin()?.unwrap_or_default(),
        };
        return Ok(Note::new(title, content));
    }

    let draft = Note::draft();
    let text = capture_editor_input_with_initial("")?;
    let (title, body) = parse_entry_text(&text).ok_or(CliError::EmptyTitle)?;

    Ok(Note {
        title,
        content: content.map_or(body, |content| content.trim().to_string()),
        ..draft
    })
}

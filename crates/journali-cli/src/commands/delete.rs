use std::path::Path;

use crate::commands::common::{normalize_note_identifier, open_journal, resolve_note};
use crate::error::CliError;

pub fn run_delete(id: &str, db_path: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let mut journal = open_journal(db_path)?;
    let note = resolve_note(&normalized_id, &journal)?;

    journal.delete(&note.id)?;
    println!("{}", note.id);
    Ok(())
}

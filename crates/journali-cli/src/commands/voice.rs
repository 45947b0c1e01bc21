use std::path::Path;

use journali_core::AudioRef;

use crate::commands::common::open_journal;
use crate::error::CliError;

/// Store a recording handed over by the recorder. The file itself is not
/// opened or checked, but its path must be UTF-8.
pub fn run_voice(audio: &Path, db_path: &Path) -> Result<(), CliError> {
    let audio_ref = AudioRef::from_path(audio)
        .ok_or_else(|| CliError::NonUtf8Path(audio.display().to_string()))?;
    let mut journal = open_journal(db_path)?;
    let note = journal.add_voice_note(audio_ref)?;

    println!("{}", note.id);
    Ok(())
}

use std::path::Path;

use chrono::Utc;
use journali_core::export::{render_notes_export, suggested_export_file_name};
use journali_core::{derive_displayed, SortMode};

use crate::cli::ExportFormat;
use crate::commands::common::open_journal;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    db_path: &Path,
) -> Result<(), CliError> {
    let journal = open_journal(db_path)?;
    let notes = derive_displayed(journal.notes(), "", SortMode::EntryDate);
    let format = format.into();
    let rendered = render_notes_export(&notes, format)?;

    if let Some(path) = output_path {
        let path = if path.is_dir() {
            path.join(suggested_export_file_name(
                format,
                Utc::now().timestamp_millis(),
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

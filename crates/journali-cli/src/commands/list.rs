use std::path::Path;

use journali_core::db::{load_sort_mode, save_sort_mode};
use journali_core::{derive_displayed, SortMode};

use crate::commands::common::{
    format_note_lines, note_to_list_item, open_journal, write_json, NoteListItem,
};
use crate::error::CliError;

pub struct ListOptions<'a> {
    pub search: &'a str,
    pub sort: Option<SortMode>,
    pub remember_sort: bool,
    pub limit: usize,
    pub as_json: bool,
}

pub fn run_list(options: &ListOptions<'_>, db_path: &Path) -> Result<(), CliError> {
    let mut journal = open_journal(db_path)?;

    let sort = match options.sort {
        Some(sort) if options.remember_sort => {
            save_sort_mode(journal.store_mut(), sort)?;
            sort
        }
        Some(sort) => sort,
        None => load_sort_mode(journal.store()),
    };
    tracing::debug!("Listing with {sort}");

    let mut notes = derive_displayed(journal.notes(), options.search, sort);
    notes.truncate(options.limit);

    if options.as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        write_json(&json_items)?;
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}

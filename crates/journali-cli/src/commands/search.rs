use std::path::Path;

use journali_core::SortMode;

use crate::commands::common::normalize_search_query;
use crate::commands::list::{run_list, ListOptions};
use crate::error::CliError;

pub fn run_search(
    query: &str,
    sort: Option<SortMode>,
    limit: usize,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    let options = ListOptions {
        search: &normalized_query,
        sort,
        remember_sort: false,
        limit,
        as_json,
    };
    run_list(&options, db_path)
}

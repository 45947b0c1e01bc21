//! Journali CLI - your thoughts, your story, from the terminal
//!
//! Write, bookmark, search, and export diary entries kept in a local journal.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::bookmark::run_bookmark;
use crate::commands::common::resolve_db_path;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::{run_list, ListOptions};
use crate::commands::search::run_search;
use crate::commands::voice::run_voice;
use crate::config::CliConfig;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("journali=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().map_err(CliError::Config)?;
    let db_path = resolve_db_path(cli.db_path, config.db_path);
    tracing::debug!("Using journal at {}", db_path.display());

    match cli.command {
        Some(Commands::Add { title, content }) => {
            run_add(&title, content.as_deref(), &db_path)?;
        }
        Some(Commands::List {
            search,
            sort,
            limit,
            json,
        }) => {
            let options = ListOptions {
                search: search.as_deref().unwrap_or_default(),
                sort: sort.map(Into::into),
                remember_sort: true,
                limit,
                as_json: json,
            };
            run_list(&options, &db_path)?;
        }
        Some(Commands::Search {
            query,
            sort,
            limit,
            json,
        }) => {
            run_search(&query, sort.map(Into::into), limit, json, &db_path)?;
        }
        Some(Commands::Edit { id, title, content }) => {
            run_edit(&id, title.as_deref(), content.as_deref(), &db_path)?;
        }
        Some(Commands::Bookmark { id }) => run_bookmark(&id, &db_path)?,
        Some(Commands::Delete { id }) => run_delete(&id, &db_path)?,
        Some(Commands::Voice { audio }) => run_voice(&audio, &db_path)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &db_path)?;
        }
        Some(Commands::Config { command }) => run_config(command, &db_path)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: journali "Morning walk"
            if cli.note.is_empty() {
                Cli::command().print_help()?;
                println!();
            } else {
                run_add(&cli.note, None, &db_path)?;
            }
        }
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use crate::cli::ConfigCommands;
use crate::config::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, db_path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => {
            let config = CliConfig::load().map_err(CliError::Config)?;
            println!("config: {}", default_config_path().display());
            println!("journal: {}", db_path.display());
            println!(
                "editor: {}",
                config.editor.as_deref().unwrap_or("(from VISUAL/EDITOR)")
            );
            Ok(())
        }
        ConfigCommands::Set { db_path, editor } => {
            let mut config = CliConfig::load().map_err(CliError::Config)?;
            let saved = apply_config_update(&mut config, db_path, editor)?;
            let path = config.save().map_err(CliError::Config)?;
            tracing::info!("Updated {saved} config value(s)");
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Apply `config set` flags, returning how many values changed.
pub fn apply_config_update(
    config: &mut CliConfig,
    db_path: Option<PathBuf>,
    editor: Option<String>,
) -> Result<usize, CliError> {
    if db_path.is_none() && editor.is_none() {
        return Err(CliError::Config(
            "nothing to set; pass --db-path and/or --editor".to_string(),
        ));
    }

    let mut changed = 0;
    if let Some(db_path) = db_path {
        config.db_path = Some(db_path);
        changed += 1;
    }
    if let Some(editor) = editor {
        config.editor = Some(editor);
        changed += 1;
    }
    Ok(changed)
}

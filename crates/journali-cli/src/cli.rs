use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use journali_core::SortMode;

#[derive(Parser)]
#[command(name = "journali")]
#[command(about = "Your thoughts, your story: a diary for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local journal database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Quick capture: journali "Morning walk"
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new entry
    #[command(alias = "new")]
    Add {
        /// Entry title (opens $EDITOR when omitted)
        title: Vec<String>,
        /// Entry body (read from piped stdin when omitted)
        #[arg(short, long)]
        content: Option<String>,
    },
    /// List entries
    List {
        /// Only show entries whose title or body contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order; remembered for later listings
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search entries
    Search {
        /// Search text
        query: String,
        /// Sort order for this search
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing entry
    Edit {
        /// Entry ID or unique ID prefix
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Toggle the bookmark on an entry
    Bookmark {
        /// Entry ID or unique ID prefix
        id: String,
    },
    /// Delete an entry
    Delete {
        /// Entry ID or unique ID prefix
        id: String,
    },
    /// Save a finished recording as a voice note
    Voice {
        /// Recording file produced by the recorder
        audio: PathBuf,
    },
    /// Export entries
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show or change CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Update configuration values
    Set {
        /// Default journal database path
        #[arg(long, value_name = "PATH")]
        db_path: Option<PathBuf>,
        /// Editor used for `add` and `edit` when VISUAL/EDITOR are unset
        #[arg(long, value_name = "COMMAND")]
        editor: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    /// Bookmarked entries first, oldest first within each group
    Bookmark,
    /// Newest entries first
    Date,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Bookmark => Self::BookmarkFirst,
            SortArg::Date => Self::EntryDate,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl From<ExportFormat> for journali_core::export::ExportFormat {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}

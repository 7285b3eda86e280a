use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::ThemeChoice;

/// In-memory to-do list for the terminal.
/// Nothing is saved: the list lives until the program exits.
#[derive(Parser)]
#[command(name = "todo", version, about = "In-memory to-do list with progress tracking")]
pub struct Cli {
    /// Initial display theme.
    #[arg(long, global = true, value_enum, env = "TODO_THEME", default_value_t = ThemeChoice::Dark)]
    pub theme: ThemeChoice,

    /// Write log records to this file (the UI owns the terminal).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print the final task list as JSON to stdout when the UI exits.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

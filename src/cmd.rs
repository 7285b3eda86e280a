//! Command implementations for the CLI interface.
//!
//! Launching the task list UI and generating shell completions.

use std::io::Write;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use log::info;

use crate::fields::ThemeChoice;
use crate::store::TaskListStore;
use crate::task::Task;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive task list (default).
    Ui,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the task list UI, then optionally print what was left in it.
pub fn cmd_ui(theme: ThemeChoice, json: bool) {
    let store = TaskListStore::with_dark_mode(theme.is_dark());
    let store = match run_tui(store) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("UI error: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "session ended with {} task(s), {:.0}% complete",
        store.len(),
        store.progress()
    );

    if json {
        let stdout = std::io::stdout();
        if let Err(e) = write_tasks_json(store.tasks(), &mut stdout.lock()) {
            eprintln!("Failed to write tasks: {e}");
            std::process::exit(1);
        }
    }
}

/// Write tasks as a pretty-printed JSON array followed by a newline.
pub fn write_tasks_json<W: Write>(tasks: &[Task], out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tasks)?;
    writeln!(out)
}

/// Print shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

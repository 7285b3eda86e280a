//! # todo - In-memory terminal to-do list
//!
//! A small, single-user task list for the terminal. Tasks are created, edited,
//! completed and removed from a keyboard-driven UI, with a progress bar showing
//! how much of the list is done and a dark/light theme toggle.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the task list (dark mode)
//! todo
//!
//! # Start in light mode and print the final list as JSON on exit
//! todo --theme light --json
//!
//! # Record debug logs while the UI runs (RUST_LOG needs --log-file)
//! RUST_LOG=debug todo --log-file todo.log
//! ```
//!
//! Nothing is written to disk: the list only lives for the lifetime of the
//! process. `--json` prints it once on exit for piping elsewhere.
//!
//! ## Key Commands
//!
//! - `todo` / `todo ui` - Launch the task list
//! - `todo completions <shell>` - Print shell completions

use std::fs::File;
use std::path::Path;

use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod colors;
    pub mod app;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;

/// Build the `log` backend. With a file, RUST_LOG picks the level (default
/// `info`). Without one, logging stays off whatever RUST_LOG says: the UI
/// owns the terminal and stderr output would draw over it.
fn logger_builder(log_file: Option<File>) -> Builder {
    match log_file {
        Some(file) => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
    }
}

fn init_logging(log_file: Option<&Path>) {
    let file = log_file.map(|path| match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    });
    if file.is_none() && std::env::var_os("RUST_LOG").is_some() {
        eprintln!("RUST_LOG is ignored without --log-file");
    }
    logger_builder(file).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => cmd_ui(cli.theme, cli.json),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

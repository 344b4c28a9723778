//! Self-Operating Computer command-line interface
//!
//! ```bash
//! operate                         # Select a model, then type an objective
//! operate -m gpt-4o --prompt "…"  # Skip both prompts
//! operate --voice                 # Dictate objectives
//! operate models                  # List supported models
//! operate config show             # Show the effective configuration
//! ```

mod args;
mod commands;
mod console;
mod logging;
mod objective;
mod reporter;
mod router;
mod selection;

use clap::Parser;
use crate::console::{CliConsole, describe_error};
use std::process::ExitCode;

pub use args::{Cli, Commands, ConfigAction};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            CliConsole::new(false).error(&describe_error(&error));
            ExitCode::FAILURE
        }
    }
}

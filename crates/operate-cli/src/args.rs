//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "operate")]
#[command(about = "Self-Operating Computer - let multimodal models operate your computer")]
#[command(version)]
pub struct Cli {
    /// Model to use (see `operate models`)
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Objective to start with instead of asking for one
    #[arg(long)]
    pub prompt: Option<String>,

    /// Dictate objectives through the configured voice command
    #[arg(long)]
    pub voice: bool,

    /// Print loop diagnostics
    #[arg(long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List supported models
    Models,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration with secrets masked
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

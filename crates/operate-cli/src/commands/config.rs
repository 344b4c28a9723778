//! Configuration management commands

use crate::console::CliConsole;
use operate_core::config::{Config, default_config_path, load_config, save_to_file};
use operate_core::error::{OperateError, OperateResult};
use std::path::{Path, PathBuf};

/// Show the effective configuration with API keys masked
pub fn show(config_file: Option<&Path>) -> OperateResult<()> {
    let console = CliConsole::new(true);
    let path = resolve_path(config_file);

    console.print_header("Configuration");
    if path.exists() {
        console.success(&format!("Loaded configuration from: {}", path.display()));
    } else {
        console.warn(&format!("Configuration file not found: {}", path.display()));
        console.info("Using default configuration");
    }

    let config = load_config(Some(&path))?;
    console.println(&serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}

/// Write a default configuration file
pub fn init(config_file: Option<&Path>, force: bool) -> OperateResult<()> {
    let console = CliConsole::new(true);
    let path = resolve_path(config_file);

    write_default(&path, force)?;
    console.success(&format!("Created configuration file: {}", path.display()));
    console.info("Set OPENAI_API_KEY or OPENROUTER_API_KEY, or edit the file to add keys");
    Ok(())
}

fn resolve_path(config_file: Option<&Path>) -> PathBuf {
    config_file
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

fn write_default(path: &Path, force: bool) -> OperateResult<()> {
    if path.exists() && !force {
        return Err(OperateError::config_with_context(
            format!("Configuration file already exists: {}", path.display()),
            "Use --force to overwrite",
        ));
    }
    save_to_file(&Config::default(), path)
}

//! Models listing command

use crate::console::CliConsole;
use colored::*;
use operate_core::config::load_config;
use operate_core::error::OperateResult;
use operate_core::model::{MODELS, Provider};
use std::path::Path;

/// Print the model catalog grouped by provider
pub fn list(config_file: Option<&Path>) -> OperateResult<()> {
    let console = CliConsole::new(true);
    let config = load_config(config_file)?;
    console.print_header("Available Models");

    for provider in Provider::all() {
        let key_status = if !provider.requires_api_key() {
            "no key needed".dimmed()
        } else if config.api_key(provider).is_some() {
            "key configured".green()
        } else {
            format!("set {}", provider.api_key_env().unwrap_or("API_KEY")).yellow()
        };

        console.println(&format!(
            "\n{} {} {}",
            provider.name().magenta().bold(),
            config.base_url(provider).dimmed(),
            key_status
        ));

        for model in MODELS.iter().filter(|m| m.provider == provider) {
            console.println(&format!("  • {:<14} {}", model.id.green(), model.display_name));
        }
    }

    console.println(&format!(
        "\n{}",
        "Any OpenRouter model can be used with OPENROUTER_MODEL=<vendor/model>.".dimmed()
    ));
    Ok(())
}

//! Interactive model and system prompt selection

use colored::*;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use operate_core::error::{OperateError, OperateResult};
use operate_core::model::{MODELS, OPENROUTER_PREFIX, openrouter_model_id};
use std::env;
use std::path::PathBuf;

const OPENROUTER_CHOICE: &str = "openrouter";
const OPENROUTER_MODEL_ENV: &str = "OPENROUTER_MODEL";
const CUSTOM_PROMPT_ENV: &str = "CUSTOM_SYSTEM_PROMPT";

fn prompt_error(e: dialoguer::Error) -> OperateError {
    OperateError::config(format!("Selection cancelled: {}", e))
}

/// Model from the flag, then `OPENROUTER_MODEL`, then an interactive menu
pub fn resolve_model(flag: Option<String>, interactive: bool) -> OperateResult<String> {
    let env_model = env::var(OPENROUTER_MODEL_ENV).ok();
    match pick_model_source(flag, env_model) {
        ModelSource::Ready(model) => Ok(model),
        ModelSource::AskOpenRouterName if interactive => ask_openrouter_name(),
        ModelSource::Menu if interactive => select_model(),
        _ => Err(OperateError::config(
            "No model selected; pass --model or set OPENROUTER_MODEL",
        )),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ModelSource {
    Ready(String),
    AskOpenRouterName,
    Menu,
}

fn pick_model_source(flag: Option<String>, env_model: Option<String>) -> ModelSource {
    let flag = flag.map(|m| m.trim().to_string()).filter(|m| !m.is_empty());
    match flag {
        Some(model) if model == OPENROUTER_CHOICE => ModelSource::AskOpenRouterName,
        Some(model) => ModelSource::Ready(model),
        None => match env_model.filter(|m| !m.trim().is_empty()) {
            Some(name) if name.starts_with(OPENROUTER_PREFIX) => ModelSource::Ready(name),
            Some(name) => ModelSource::Ready(openrouter_model_id(&name)),
            None => ModelSource::Menu,
        },
    }
}

fn select_model() -> OperateResult<String> {
    let labels: Vec<String> = MODELS
        .iter()
        .map(|m| format!("{} ({})", m.display_name, m.id))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Please select a model to use")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    let model = MODELS[selection].id;
    if model == OPENROUTER_CHOICE {
        ask_openrouter_name()
    } else {
        Ok(model.to_string())
    }
}

fn ask_openrouter_name() -> OperateResult<String> {
    println!("{}", "Please enter the full OpenRouter model name.".green());
    println!(
        "{}",
        "Ensure the model supports both image and text input modalities.".yellow()
    );
    println!(
        "{}",
        "Examples: google/gemini-2.0-flash-001, openai/gpt-4o, anthropic/claude-3-opus".yellow()
    );

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("OpenRouter model")
        .interact_text()
        .map_err(prompt_error)?;

    if name.trim().is_empty() {
        return Err(OperateError::config("OpenRouter model selection cancelled"));
    }
    Ok(openrouter_model_id(&name))
}

/// Ask how to supply a custom system prompt; `None` keeps the default prompt
pub fn choose_custom_prompt() -> OperateResult<Option<String>> {
    let options = [
        "No custom system prompt (use default model prompt)",
        "Load from a text file",
        "Load from environment variable (CUSTOM_SYSTEM_PROMPT)",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How would you like to provide a custom system prompt?")
        .items(&options)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    match selection {
        1 => {
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the path to the system prompt file")
                .interact_text()
                .map_err(prompt_error)?;
            let path = PathBuf::from(path.trim());
            match std::fs::read_to_string(&path) {
                Ok(prompt) => Ok(Some(prompt)),
                Err(_) => {
                    eprintln!(
                        "{}",
                        format!("Error: File not found at {}", path.display()).red()
                    );
                    Ok(None)
                }
            }
        }
        2 => Ok(env::var(CUSTOM_PROMPT_ENV).ok().filter(|p| !p.trim().is_empty())),
        _ => Ok(None),
    }
}

//! Environment variable-based configuration overrides

use super::config::Config;
use crate::error::{OperateError, OperateResult};
use crate::model::Provider;
use std::env;

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: &mut Config) -> OperateResult<()> {
    apply_env_overrides_from(config, |key| env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Recognised variables: `OPENAI_API_KEY`, `OPENAI_BASE_URL`,
/// `OPENROUTER_API_KEY`, `OLLAMA_BASE_URL`, `OPERATE_MAX_LOOPS`,
/// `OPERATE_SETTLE_DELAY_MS`, `CUSTOM_SYSTEM_PROMPT`.
pub fn apply_env_overrides_from<F>(config: &mut Config, lookup: F) -> OperateResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    for provider in Provider::all() {
        if let Some(var) = provider.api_key_env() {
            if let Some(key) = lookup(var) {
                config.provider_entry(provider).api_key = Some(key);
            }
        }
    }

    if let Some(url) = lookup("OPENAI_BASE_URL") {
        config.provider_entry(Provider::OpenAi).base_url = Some(url);
    }
    if let Some(url) = lookup("OLLAMA_BASE_URL") {
        config.provider_entry(Provider::Ollama).base_url = Some(url);
    }

    if let Some(value) = lookup("OPERATE_MAX_LOOPS") {
        config.max_loops = value.trim().parse().map_err(|_| {
            OperateError::config_with_context(
                "Invalid OPERATE_MAX_LOOPS value",
                format!("Parsing '{}' as a loop count", value),
            )
        })?;
    }

    if let Some(value) = lookup("OPERATE_SETTLE_DELAY_MS") {
        config.settle_delay_ms = value.trim().parse().map_err(|_| {
            OperateError::config_with_context(
                "Invalid OPERATE_SETTLE_DELAY_MS value",
                format!("Parsing '{}' as milliseconds", value),
            )
        })?;
    }

    if let Some(prompt) = lookup("CUSTOM_SYSTEM_PROMPT") {
        config.custom_system_prompt = Some(prompt);
    }

    Ok(())
}

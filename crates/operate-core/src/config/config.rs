//! Main configuration structure

use super::logging_config::LoggingConfig;
use crate::error::{OperateError, OperateResult};
use crate::model::Provider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "operate_config.json";

/// Per-provider connection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Voice mode: an external transcription command whose stdout is the objective
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// argv of the transcription command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

/// Screen capture: an external command that writes a PNG to `path`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// argv of the capture command; `{path}` is replaced with `path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    pub path: PathBuf,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            command: None,
            path: std::env::temp_dir().join("operate_screenshot.png"),
        }
    }
}

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keyed by provider name (`openai`, `openrouter`, `ollama`)
    pub providers: HashMap<String, ProviderSettings>,
    /// Turns allowed per objective before the loop halts
    pub max_loops: u32,
    /// Pause before each action is dispatched
    pub settle_delay_ms: u64,
    pub request_timeout_secs: u64,
    /// Replaces the default system prompt; `{objective}` is substituted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_system_prompt_file: Option<PathBuf>,
    pub voice: VoiceConfig,
    pub screenshot: ScreenshotConfig,
    pub logging: LoggingConfig,
    /// Set from `--verbose`, never read from a file
    #[serde(skip)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            max_loops: 10,
            settle_delay_ms: 1000,
            request_timeout_secs: 120,
            custom_system_prompt: None,
            custom_system_prompt_file: None,
            voice: VoiceConfig::default(),
            screenshot: ScreenshotConfig::default(),
            logging: LoggingConfig::default(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Settings for a provider, empty if none are configured
    pub fn provider_settings(&self, provider: Provider) -> ProviderSettings {
        self.providers
            .get(provider.name())
            .cloned()
            .unwrap_or_default()
    }

    pub fn api_key(&self, provider: Provider) -> Option<String> {
        self.provider_settings(provider)
            .api_key
            .filter(|key| !key.trim().is_empty())
    }

    pub fn base_url(&self, provider: Provider) -> String {
        self.provider_settings(provider)
            .base_url
            .unwrap_or_else(|| provider.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Set a provider field, creating the entry if needed
    pub fn provider_entry(&mut self, provider: Provider) -> &mut ProviderSettings {
        self.providers
            .entry(provider.name().to_string())
            .or_default()
    }

    /// Custom system prompt from the inline value or the prompt file
    pub fn custom_system_prompt(&self) -> OperateResult<Option<String>> {
        if let Some(prompt) = self.custom_system_prompt.as_ref() {
            if !prompt.trim().is_empty() {
                return Ok(Some(prompt.clone()));
            }
        }

        match &self.custom_system_prompt_file {
            Some(path) => std::fs::read_to_string(path).map(Some).map_err(|e| {
                OperateError::io_with_path(
                    format!("Failed to read system prompt file: {}", e),
                    path.display().to_string(),
                )
            }),
            None => Ok(None),
        }
    }

    /// Copy with API keys masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for settings in copy.providers.values_mut() {
            if let Some(key) = settings.api_key.as_mut() {
                *key = mask_secret(key);
            }
        }
        copy
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

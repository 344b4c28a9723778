//! Startup validation of the effective configuration

use super::config::Config;
use crate::error::{OperateError, OperateResult};
use crate::model::resolve_model;

impl Config {
    /// Check that the selected model and mode can run with this configuration.
    ///
    /// Unknown model ids pass; they are reported by the model-query step.
    pub fn validate(&self, model: &str, voice_mode: bool) -> OperateResult<()> {
        if self.max_loops == 0 {
            return Err(OperateError::config("max_loops must be at least 1"));
        }

        if voice_mode {
            let configured = self
                .voice
                .command
                .as_ref()
                .is_some_and(|argv| !argv.is_empty());
            if !configured {
                return Err(OperateError::config_with_context(
                    "Voice mode requires a transcription command",
                    "Set `voice.command` in the config file",
                ));
            }
        }

        if let Some(resolved) = resolve_model(model) {
            let provider = resolved.provider;
            if provider.requires_api_key() && self.api_key(provider).is_none() {
                let var = provider.api_key_env().unwrap_or("API_KEY");
                return Err(OperateError::config_with_context(
                    format!("No API key configured for {}", provider),
                    format!(
                        "Set {} or `providers.{}.api_key` in the config file",
                        var,
                        provider.name()
                    ),
                ));
            }
        }

        Ok(())
    }
}

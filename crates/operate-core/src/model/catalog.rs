//! Known models and the providers that serve them

use serde::{Deserialize, Serialize};

/// Prefix that addresses an arbitrary OpenRouter model by name
pub const OPENROUTER_PREFIX: &str = "openrouter_internal_";

/// Providers with an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    OpenRouter,
    Ollama,
}

impl Provider {
    /// Key used in the config file's `providers` table
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::OpenRouter => "openrouter",
            Provider::Ollama => "ollama",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
            Provider::Ollama => "http://localhost:11434/v1",
        }
    }

    /// Environment variable holding the API key
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some("OPENAI_API_KEY"),
            Provider::OpenRouter => Some("OPENROUTER_API_KEY"),
            Provider::Ollama => None,
        }
    }

    pub fn requires_api_key(&self) -> bool {
        self.api_key_env().is_some()
    }

    pub fn all() -> [Provider; 3] {
        [Provider::OpenAi, Provider::OpenRouter, Provider::Ollama]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A selectable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Identifier accepted by `--model`
    pub id: &'static str,
    pub display_name: &'static str,
    pub provider: Provider,
    /// Model name sent to the provider; `None` means the user must supply one
    pub api_model: Option<&'static str>,
}

pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gpt-4o",
        display_name: "GPT-4o (OpenAI)",
        provider: Provider::OpenAi,
        api_model: Some("gpt-4o"),
    },
    ModelInfo {
        id: "gpt-4.1",
        display_name: "GPT-4.1 (OpenAI)",
        provider: Provider::OpenAi,
        api_model: Some("gpt-4.1"),
    },
    ModelInfo {
        id: "gpt-4.1-mini",
        display_name: "GPT-4.1 mini (OpenAI)",
        provider: Provider::OpenAi,
        api_model: Some("gpt-4.1-mini"),
    },
    ModelInfo {
        id: "llava",
        display_name: "LLaVA (Ollama, local)",
        provider: Provider::Ollama,
        api_model: Some("llava"),
    },
    ModelInfo {
        id: "qwen2.5vl",
        display_name: "Qwen2.5-VL (Ollama, local)",
        provider: Provider::Ollama,
        api_model: Some("qwen2.5vl"),
    },
    ModelInfo {
        id: "openrouter",
        display_name: "OpenRouter (enter a model name)",
        provider: Provider::OpenRouter,
        api_model: None,
    },
];

/// A model identifier resolved to a concrete endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub provider: Provider,
    pub api_model: String,
}

/// Look up a catalog entry by id
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

/// Resolve a model identifier, including `openrouter_internal_<name>` ids.
///
/// Returns `None` for identifiers with no known handler.
pub fn resolve_model(id: &str) -> Option<ResolvedModel> {
    if let Some(name) = id.strip_prefix(OPENROUTER_PREFIX) {
        if name.trim().is_empty() {
            return None;
        }
        return Some(ResolvedModel {
            provider: Provider::OpenRouter,
            api_model: name.trim().to_string(),
        });
    }

    let info = find_model(id)?;
    Some(ResolvedModel {
        provider: info.provider,
        api_model: info.api_model?.to_string(),
    })
}

/// Build the internal id for an OpenRouter model name
pub fn openrouter_model_id(name: &str) -> String {
    format!("{}{}", OPENROUTER_PREFIX, name.trim())
}

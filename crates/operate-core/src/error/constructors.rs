//! Constructor methods for OperateError

use super::types::OperateError;

impl OperateError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create an unsupported model error
    pub fn unsupported_model(model: impl Into<String>) -> Self {
        Self::UnsupportedModel {
            model: model.into(),
        }
    }

    /// Create an LLM error with provider
    pub fn llm_with_provider(message: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            provider: Some(provider.into()),
        }
    }

    /// Create an action decode error carrying the offending payload
    pub fn action_decode_with_payload(
        message: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::ActionDecode {
            message: message.into(),
            payload: Some(payload.into()),
        }
    }

    /// Create an automation error
    pub fn automation(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Automation {
            action: action.into(),
            message: message.into(),
        }
    }

    /// Create an objective error
    pub fn objective(message: impl Into<String>) -> Self {
        Self::Objective {
            message: message.into(),
        }
    }

    /// Create an IO error with message
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a JSON error with message
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create an HTTP error with a status code
    pub fn http_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Http {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

//! Core error types for the operate crates

use thiserror::Error;

/// Result type alias for operate operations
pub type OperateResult<T> = Result<T, OperateError>;

/// Main error type
#[derive(Error, Debug, Clone)]
pub enum OperateError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The requested model identifier has no known handler
    #[error("Model not recognized: {model}")]
    UnsupportedModel { model: String },

    /// Model query errors
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
    },

    /// The model returned an operation that cannot be decoded
    #[error("Failed to decode action: {message}")]
    ActionDecode {
        message: String,
        payload: Option<String>,
    },

    /// The OS-automation service rejected an action
    #[error("Automation error: {action}: {message}")]
    Automation { action: String, message: String },

    /// No objective could be obtained
    #[error("Objective error: {message}")]
    Objective { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// HTTP request errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
    },

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl OperateError {
    /// Stable code for programmatic handling and log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "OPERATE_CONFIG",
            Self::UnsupportedModel { .. } => "OPERATE_UNSUPPORTED_MODEL",
            Self::Llm { .. } => "OPERATE_LLM",
            Self::ActionDecode { .. } => "OPERATE_ACTION_DECODE",
            Self::Automation { .. } => "OPERATE_AUTOMATION",
            Self::Objective { .. } => "OPERATE_OBJECTIVE",
            Self::Io { .. } => "OPERATE_IO",
            Self::Json { .. } => "OPERATE_JSON",
            Self::Http { .. } => "OPERATE_HTTP",
            Self::Other { .. } => "OPERATE_OTHER",
        }
    }

    /// Whether this is the "model not recognized" condition
    pub fn is_unsupported_model(&self) -> bool {
        matches!(self, Self::UnsupportedModel { .. })
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// The session loop never retries; reporters show this so a user can tell
    /// a flaky network from a broken setup.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { status_code, .. } => {
                matches!(status_code, None | Some(408) | Some(429) | Some(500..=599))
            }
            Self::Llm { .. } => true,
            _ => false,
        }
    }
}

//! From trait implementations for OperateError conversions

use super::types::OperateError;

impl From<std::io::Error> for OperateError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for OperateError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for OperateError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: error.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
        }
    }
}

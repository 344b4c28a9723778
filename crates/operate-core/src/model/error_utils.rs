//! Provider error sanitization helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static SECRET_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(sk|sk-or|sk-proj)-[A-Za-z0-9_\-]{8,}").expect("valid secret key regex")
});

/// Sanitize provider error text by redacting secrets and truncating large payloads.
pub fn sanitize_provider_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    // Prefer the provider's own message when the body is the usual error envelope
    if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = json
            .pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| json.get("message").and_then(Value::as_str))
        {
            return truncate(redact(message));
        }
    }

    truncate(redact(trimmed))
}

fn redact(text: &str) -> String {
    let text = BEARER_TOKEN_RE.replace_all(text, format!("Bearer {}", REDACTED));
    SECRET_KEY_RE.replace_all(&text, REDACTED).into_owned()
}

fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_ERROR_TEXT_CHARS {
        return text;
    }
    let mut truncated: String = text.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    truncated.push_str("... [truncated]");
    truncated
}

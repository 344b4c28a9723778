//! OpenAI-compatible chat completions client

use super::catalog::Provider;
use super::error_utils::sanitize_provider_error_text;
use crate::conversation::{Message, MessageRole};
use crate::error::{OperateError, OperateResult};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::instrument;

const MAX_TOKENS: u32 = 1024;

/// One provider endpoint speaking the `/chat/completions` protocol
pub struct ChatCompletionsClient<'a> {
    http: &'a Client,
    provider: Provider,
    base_url: String,
    api_key: Option<String>,
}

impl<'a> ChatCompletionsClient<'a> {
    pub fn new(
        http: &'a Client,
        provider: Provider,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            provider,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Build the request body for `messages`
    pub fn request_body(model: &str, messages: &[Message], user: &str) -> Value {
        json!({
            "model": model,
            "messages": messages.iter().map(message_to_json).collect::<Vec<_>>(),
            "max_tokens": MAX_TOKENS,
            "user": user,
        })
    }

    /// Send the conversation and return the assistant's text
    #[instrument(skip(self, messages), level = "debug", fields(provider = %self.provider, messages = messages.len()))]
    pub async fn complete(&self, model: &str, messages: &[Message], user: &str) -> OperateResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let mut request = self
            .http
            .post(&url)
            .json(&Self::request_body(model, messages, user));

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            OperateError::llm_with_provider(
                format!("request to {} failed: {}", url, e),
                self.provider.name(),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OperateError::http_status(
                format!(
                    "{} API error (status {}): {}",
                    self.provider,
                    status,
                    sanitize_provider_error_text(&error_text)
                ),
                status.as_u16(),
            ));
        }

        let body: Value = response.json().await.map_err(|e| {
            OperateError::llm_with_provider(
                format!("Failed to parse response: {}", e),
                self.provider.name(),
            )
        })?;

        parse_completion(&body).map_err(|message| {
            OperateError::llm_with_provider(message, self.provider.name())
        })
    }
}

fn message_to_json(message: &Message) -> Value {
    match (&message.role, &message.image_url) {
        (MessageRole::User, Some(image_url)) => json!({
            "role": message.role,
            "content": [
                { "type": "text", "text": message.content },
                { "type": "image_url", "image_url": { "url": image_url } },
            ],
        }),
        _ => json!({
            "role": message.role,
            "content": message.content,
        }),
    }
}

/// Extract the first choice's text from a completion response
pub(crate) fn parse_completion(body: &Value) -> Result<String, String> {
    let content = body
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| "response has no message content".to_string())?;

    if content.trim().is_empty() {
        return Err("model returned an empty reply".to_string());
    }
    Ok(content.to_string())
}

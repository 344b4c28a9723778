//! Routes model ids to provider endpoints

use super::catalog::resolve_model;
use super::chat::ChatCompletionsClient;
use super::{ModelReply, ModelService, SessionToken};
use crate::action::decode_batch;
use crate::config::Config;
use crate::conversation::{Conversation, Message};
use crate::error::{OperateError, OperateResult};
use crate::prompt::user_turn_prompt;
use crate::screen::ScreenCapture;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, instrument};

/// `ModelService` over every provider in the catalog
pub struct ModelRouter {
    config: Config,
    http: Client,
    screen: Option<Arc<dyn ScreenCapture>>,
}

impl ModelRouter {
    pub fn new(config: &Config) -> OperateResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| OperateError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config: config.clone(),
            http,
            screen: None,
        })
    }

    /// Attach a screenshot to every query
    pub fn with_screen_capture(mut self, screen: Arc<dyn ScreenCapture>) -> Self {
        self.screen = Some(screen);
        self
    }
}

#[async_trait]
impl ModelService for ModelRouter {
    #[instrument(skip(self, conversation, objective), level = "debug")]
    async fn next_actions(
        &self,
        model: &str,
        conversation: &mut Conversation,
        objective: &str,
        session_token: Option<&SessionToken>,
    ) -> OperateResult<ModelReply> {
        let resolved = resolve_model(model).ok_or_else(|| OperateError::unsupported_model(model))?;
        let provider = resolved.provider;

        let screenshot = match &self.screen {
            Some(screen) => Some(screen.capture().await?),
            None => None,
        };

        let mut user = Message::user(user_turn_prompt(objective, screenshot.is_some()));
        if let Some(image_url) = screenshot {
            user = user.with_image(image_url);
        }
        conversation.push(user);

        let token = session_token.cloned().unwrap_or_else(SessionToken::generate);
        let client = ChatCompletionsClient::new(
            &self.http,
            provider,
            self.config.base_url(provider),
            self.config.api_key(provider),
        );
        let content = client
            .complete(&resolved.api_model, conversation.messages(), token.as_str())
            .await?;
        debug!(reply = %content, "model reply");

        conversation.push(Message::assistant(content.clone()));
        let actions = decode_batch(&content)?;

        Ok(ModelReply {
            actions,
            session_token: Some(token),
        })
    }
}

//! Model-query service
//!
//! `ModelService` is the single suspension point of a turn: the loop awaits it
//! to completion before any action of the returned batch is dispatched.

mod catalog;
mod chat;
mod error_utils;
mod router;

pub use catalog::{
    MODELS, ModelInfo, OPENROUTER_PREFIX, Provider, ResolvedModel, find_model, openrouter_model_id,
    resolve_model,
};
pub use chat::ChatCompletionsClient;
pub use error_utils::sanitize_provider_error_text;
pub use router::ModelRouter;

use crate::action::Action;
use crate::conversation::Conversation;
use crate::error::OperateResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Opaque handle correlating the turns of one objective on the model side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh token
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one model query
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    /// Decoded actions, in the order they must be dispatched
    pub actions: Vec<Action>,
    /// Token to pass to the next query of the same objective
    pub session_token: Option<SessionToken>,
}

/// Asks a model for the next batch of actions
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Query `model` for the next actions towards `objective`.
    ///
    /// Implementations append what they send and receive to `conversation`.
    /// Unknown model ids fail with `OperateError::UnsupportedModel`.
    async fn next_actions(
        &self,
        model: &str,
        conversation: &mut Conversation,
        objective: &str,
        session_token: Option<&SessionToken>,
    ) -> OperateResult<ModelReply>;
}

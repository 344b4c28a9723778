//! Sources of objectives

use crate::error::{OperateError, OperateResult};
use crate::process::run_command;
use async_trait::async_trait;
use tracing::info;

/// Supplies the next objective, at startup and after each completed one
#[async_trait]
pub trait ObjectiveSource: Send + Sync {
    async fn next_objective(&self, model: &str) -> OperateResult<String>;
}

/// Trim an objective and reject empty ones
pub fn normalize_objective(raw: &str) -> OperateResult<String> {
    let objective = raw.trim();
    if objective.is_empty() {
        return Err(OperateError::objective("objective is empty"));
    }
    Ok(objective.to_string())
}

/// Voice mode: runs a transcription command and uses its stdout
#[derive(Debug, Clone)]
pub struct CommandObjectiveSource {
    argv: Vec<String>,
}

impl CommandObjectiveSource {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

#[async_trait]
impl ObjectiveSource for CommandObjectiveSource {
    async fn next_objective(&self, _model: &str) -> OperateResult<String> {
        info!("Listening for your command");
        let transcript = run_command(&self.argv)
            .await
            .map_err(|e| OperateError::objective(format!("Error in capturing voice input: {}", e)))?;
        normalize_objective(&transcript)
    }
}

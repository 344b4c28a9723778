//! Objectives typed at the terminal or dictated

use async_trait::async_trait;
use colored::*;
use dialoguer::Input;
use operate_core::error::{OperateError, OperateResult};
use operate_core::objective::{CommandObjectiveSource, ObjectiveSource, normalize_objective};
use operate_core::prompt::USER_QUESTION;

/// Asks the user for an objective on stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalObjectiveSource;

#[async_trait]
impl ObjectiveSource for TerminalObjectiveSource {
    async fn next_objective(&self, model: &str) -> OperateResult<String> {
        let model = model.to_string();
        tokio::task::spawn_blocking(move || read_objective(&model))
            .await
            .map_err(|e| OperateError::objective(format!("input task failed: {}", e)))?
    }
}

/// Voice mode: prints a listening cue before every transcription
#[derive(Debug, Clone)]
pub struct VoiceObjectiveSource {
    inner: CommandObjectiveSource,
}

impl VoiceObjectiveSource {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            inner: CommandObjectiveSource::new(argv),
        }
    }
}

#[async_trait]
impl ObjectiveSource for VoiceObjectiveSource {
    async fn next_objective(&self, model: &str) -> OperateResult<String> {
        println!("{}", listening_cue());
        self.inner.next_objective(model).await
    }
}

fn listening_cue() -> String {
    format!(
        "{} Listening for your command... (speak now)",
        "[Self-Operating Computer]".green()
    )
}

fn read_objective(model: &str) -> OperateResult<String> {
    println!(
        "[{}|{}]\n{}",
        "Self-Operating Computer ".green(),
        format!(" {}", model).bright_magenta(),
        USER_QUESTION
    );

    let raw: String = Input::new()
        .with_prompt("[User]".yellow().to_string())
        .interact_text()
        .map_err(|e| OperateError::objective(format!("Failed to read objective: {}", e)))?;

    normalize_objective(&raw)
}

//! Observability hooks for the loop
//!
//! The action trace is the user's only view of what the agent does, so every
//! dispatched action, completion, unknown operation and fatal error goes
//! through a `Reporter`. The CLI prints to the terminal; `LogReporter` writes
//! the same events to `tracing`.

use crate::action::Action;
use crate::error::OperateError;
use crate::session::SessionExit;
use tracing::{error, info, warn};

pub trait Reporter: Send + Sync {
    /// A model query is starting
    fn querying(&self, _model: &str, _loop_count: u32) {}

    /// The model query returned (successfully or not)
    fn query_finished(&self) {}

    /// An action was sent to the OS
    fn action(&self, model: &str, action: &Action);

    /// The model declared the objective complete
    fn completed(&self, model: &str, summary: &str);

    /// The model returned an operation nobody understands
    fn unknown_operation(&self, action: &Action);

    /// A fatal error ended the objective loop
    fn error(&self, error: &OperateError);

    /// The objective loop ended
    fn session_exit(&self, _exit: &SessionExit) {}
}

/// Reporter that only emits tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn action(&self, model: &str, action: &Action) {
        info!(
            model,
            operation = action.operation(),
            thought = action.thought.as_deref().unwrap_or_default(),
            detail = %action.detail(),
            "action dispatched"
        );
    }

    fn completed(&self, model: &str, summary: &str) {
        info!(model, summary, "objective complete");
    }

    fn unknown_operation(&self, action: &Action) {
        warn!(payload = %action.detail(), "unknown operation response");
    }

    fn error(&self, err: &OperateError) {
        error!(code = err.error_code(), transient = err.is_transient(), "{}", err);
    }

    fn session_exit(&self, exit: &SessionExit) {
        info!(?exit, "objective loop ended");
    }
}

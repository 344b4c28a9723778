//! Action dispatch onto the OS-automation service

use crate::action::{Action, ActionKind};
use crate::context::OperateContext;
use crate::error::{OperateError, OperateResult};
use tracing::debug;

/// What happened to one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Exactly one OS call was made
    Dispatched,
    /// A `done` action; nothing was sent to the OS
    Completed { summary: String },
    /// An unrecognised operation; nothing was sent to the OS
    Unrecognized,
}

/// Stateless adapter from `Action` to a single `OsAutomation` call.
///
/// No retries: an OS failure is returned as-is and ends the objective loop.
/// A malformed entry fails the same way, without touching the OS.
pub struct ActionExecutor<'a> {
    context: &'a OperateContext,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(context: &'a OperateContext) -> Self {
        Self { context }
    }

    pub async fn execute(&self, action: &Action) -> OperateResult<ActionOutcome> {
        let os = self.context.os();
        debug!(operation = action.operation(), "executing action");

        match &action.kind {
            ActionKind::Press { keys } | ActionKind::Hotkey { keys } => {
                os.press(keys).await?;
                Ok(ActionOutcome::Dispatched)
            }
            ActionKind::Write { content } => {
                os.write(content).await?;
                Ok(ActionOutcome::Dispatched)
            }
            ActionKind::Click { point } => {
                os.mouse(*point).await?;
                Ok(ActionOutcome::Dispatched)
            }
            ActionKind::Done { summary } => Ok(ActionOutcome::Completed {
                summary: summary.clone(),
            }),
            ActionKind::Unknown { .. } => Ok(ActionOutcome::Unrecognized),
            ActionKind::Malformed {
                message, payload, ..
            } => Err(OperateError::action_decode_with_payload(
                message.clone(),
                payload.to_string(),
            )),
        }
    }
}

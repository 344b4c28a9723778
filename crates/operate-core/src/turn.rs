//! Execution of one batch of actions

use crate::action::{Action, Directive};
use crate::context::OperateContext;
use crate::error::OperateResult;
use crate::executor::{ActionExecutor, ActionOutcome};
use tracing::debug;

/// Runs the batch returned by one model query and decides what the loop does next
pub struct TurnController<'a> {
    context: &'a OperateContext,
    model: &'a str,
}

impl<'a> TurnController<'a> {
    pub fn new(context: &'a OperateContext, model: &'a str) -> Self {
        Self { context, model }
    }

    /// Dispatch `actions` strictly in order.
    ///
    /// Every action waits out the settle delay first. A `done` action returns
    /// `Directive::Done` and an unknown one `Directive::Stop`; either way the
    /// rest of the batch is skipped. A batch with neither yields `Continue`.
    /// OS failures are returned as errors, with earlier actions left applied.
    pub async fn run_turn(&self, actions: &[Action]) -> OperateResult<Directive> {
        let reporter = self.context.reporter();
        let executor = ActionExecutor::new(self.context);
        let delay = self.context.settle_delay();

        debug!(batch = actions.len(), "operate");

        for (index, action) in actions.iter().enumerate() {
            debug!(index, operation = action.operation(), ?action, "operate operation");
            tokio::time::sleep(delay).await;

            match executor.execute(action).await? {
                ActionOutcome::Dispatched => reporter.action(self.model, action),
                ActionOutcome::Completed { summary } => {
                    reporter.completed(self.model, &summary);
                    return Ok(Directive::Done);
                }
                ActionOutcome::Unrecognized => {
                    reporter.unknown_operation(action);
                    return Ok(Directive::Stop);
                }
            }
        }

        Ok(Directive::Continue)
    }
}

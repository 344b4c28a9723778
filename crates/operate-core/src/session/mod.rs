//! The objective lifecycle
//!
//! `SessionLoop` owns the conversation, the session token and the loop
//! counter. Each objective starts from a fresh conversation holding only the
//! system prompt; a `done` turn asks the objective source for the next one.

mod exit;

pub use exit::SessionExit;

use crate::action::Directive;
use crate::context::OperateContext;
use crate::conversation::Conversation;
use crate::error::OperateResult;
use crate::model::{ModelService, SessionToken};
use crate::objective::ObjectiveSource;
use crate::prompt::system_prompt;
use crate::turn::TurnController;
use tracing::{debug, info, instrument, warn};

/// Per-objective state, reset whenever a new objective begins
#[derive(Debug)]
struct ObjectiveState {
    objective: String,
    conversation: Conversation,
    session_token: Option<SessionToken>,
    loop_count: u32,
}

/// Drives objectives end to end against one model
pub struct SessionLoop<'a> {
    context: &'a OperateContext,
    model_service: &'a dyn ModelService,
    objectives: &'a dyn ObjectiveSource,
    model: &'a str,
    custom_prompt: Option<&'a str>,
}

impl<'a> SessionLoop<'a> {
    pub fn new(
        context: &'a OperateContext,
        model_service: &'a dyn ModelService,
        objectives: &'a dyn ObjectiveSource,
        model: &'a str,
    ) -> Self {
        Self {
            context,
            model_service,
            objectives,
            model,
            custom_prompt: None,
        }
    }

    /// Use `prompt` instead of the built-in system prompt
    pub fn with_custom_prompt(mut self, prompt: Option<&'a str>) -> Self {
        self.custom_prompt = prompt;
        self
    }

    fn begin(&self, objective: String) -> ObjectiveState {
        let prompt = system_prompt(self.model, &objective, self.custom_prompt);
        info!(objective = %objective, "starting objective");
        ObjectiveState {
            objective,
            conversation: Conversation::new(prompt),
            session_token: None,
            loop_count: 0,
        }
    }

    /// Run until a turn stops, the loop cap is exceeded or a fault occurs.
    ///
    /// Errors are reported and folded into the returned `SessionExit`; none
    /// are retried.
    #[instrument(skip(self, initial_objective), fields(model = %self.model))]
    pub async fn run(&self, initial_objective: String) -> SessionExit {
        let exit = match self.drive(initial_objective).await {
            Ok(exit) => exit,
            Err(error) => {
                self.context.reporter().error(&error);
                SessionExit::Failed { error }
            }
        };
        self.context.reporter().session_exit(&exit);
        exit
    }

    async fn drive(&self, initial_objective: String) -> OperateResult<SessionExit> {
        let reporter = self.context.reporter();
        let turns = TurnController::new(self.context, self.model);
        let max_loops = self.context.max_loops();
        let mut state = self.begin(initial_objective);

        loop {
            if self.context.verbose() {
                debug!(loop_count = state.loop_count, "session loop");
            }

            reporter.querying(self.model, state.loop_count);
            let reply = self
                .model_service
                .next_actions(
                    self.model,
                    &mut state.conversation,
                    &state.objective,
                    state.session_token.as_ref(),
                )
                .await;
            reporter.query_finished();
            let reply = reply?;
            state.session_token = reply.session_token;

            match turns.run_turn(&reply.actions).await? {
                Directive::Done => {
                    let next = self.objectives.next_objective(self.model).await?;
                    state = self.begin(next);
                }
                Directive::Stop => return Ok(SessionExit::Stopped),
                Directive::Continue => {
                    state.loop_count += 1;
                    if state.loop_count > max_loops {
                        warn!(loop_count = state.loop_count, max_loops, "loop cap reached");
                        return Ok(SessionExit::LoopCapReached {
                            loop_count: state.loop_count,
                        });
                    }
                }
            }
        }
    }
}

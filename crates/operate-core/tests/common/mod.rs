//! Shared fakes for the loop integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use operate_core::action::{Action, ClickPoint};
use operate_core::config::Config;
use operate_core::conversation::{Conversation, Message};
use operate_core::error::{OperateError, OperateResult};
use operate_core::model::{ModelReply, ModelService, SessionToken};
use operate_core::objective::ObjectiveSource;
use operate_core::os::OsAutomation;
use operate_core::reporter::Reporter;
use operate_core::session::SessionExit;
use operate_core::OperateContext;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum OsCall {
    Press(Vec<String>),
    Write(String),
    Mouse(ClickPoint),
}

/// Records every OS call; optionally fails on `write`
#[derive(Default)]
pub struct RecordingOs {
    calls: Mutex<Vec<OsCall>>,
    fail_writes: bool,
}

impl RecordingOs {
    pub fn failing_writes() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn calls(&self) -> Vec<OsCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl OsAutomation for RecordingOs {
    async fn press(&self, keys: &[String]) -> OperateResult<()> {
        self.calls.lock().push(OsCall::Press(keys.to_vec()));
        Ok(())
    }

    async fn write(&self, text: &str) -> OperateResult<()> {
        if self.fail_writes {
            return Err(OperateError::automation("write", "display not available"));
        }
        self.calls.lock().push(OsCall::Write(text.to_string()));
        Ok(())
    }

    async fn mouse(&self, point: ClickPoint) -> OperateResult<()> {
        self.calls.lock().push(OsCall::Mouse(point));
        Ok(())
    }
}

/// Records reporter events as short strings
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.starts_with("error:"))
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn action(&self, _model: &str, action: &Action) {
        self.events
            .lock()
            .push(format!("action:{}", action.operation()));
    }

    fn completed(&self, _model: &str, summary: &str) {
        self.events.lock().push(format!("completed:{}", summary));
    }

    fn unknown_operation(&self, action: &Action) {
        self.events
            .lock()
            .push(format!("unknown:{}", action.operation()));
    }

    fn error(&self, error: &OperateError) {
        self.events.lock().push(format!("error:{}", error.error_code()));
    }

    fn session_exit(&self, exit: &SessionExit) {
        self.events.lock().push(format!("exit:{}", exit));
    }
}

/// What the model saw on one query
#[derive(Debug, Clone)]
pub struct QueryRecord {
    pub objective: String,
    pub system_prompt: String,
    pub conversation_len: usize,
    pub session_token: Option<SessionToken>,
}

/// Replays scripted batches and hands out a fresh token per query
#[derive(Default)]
pub struct ScriptedModel {
    script: Mutex<VecDeque<OperateResult<Vec<Action>>>>,
    queries: Mutex<Vec<QueryRecord>>,
}

impl ScriptedModel {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = OperateResult<Vec<Action>>>,
    {
        Self {
            script: Mutex::new(batches.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<QueryRecord> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl ModelService for ScriptedModel {
    async fn next_actions(
        &self,
        _model: &str,
        conversation: &mut Conversation,
        objective: &str,
        session_token: Option<&SessionToken>,
    ) -> OperateResult<ModelReply> {
        let index = {
            let mut queries = self.queries.lock();
            queries.push(QueryRecord {
                objective: objective.to_string(),
                system_prompt: conversation.system_prompt().to_string(),
                conversation_len: conversation.len(),
                session_token: session_token.cloned(),
            });
            queries.len()
        };

        let actions = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(OperateError::other("script exhausted")))?;

        conversation.push(Message::user(objective));
        conversation.push(Message::assistant(format!("{} actions", actions.len())));

        Ok(ModelReply {
            actions,
            session_token: Some(SessionToken::new(format!("tok-{}", index))),
        })
    }
}

/// Hands out queued objectives, then fails
#[derive(Default)]
pub struct QueuedObjectives {
    queue: Mutex<VecDeque<String>>,
}

impl QueuedObjectives {
    pub fn new<I, S>(objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(objectives.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl ObjectiveSource for QueuedObjectives {
    async fn next_objective(&self, _model: &str) -> OperateResult<String> {
        self.queue
            .lock()
            .pop_front()
            .ok_or_else(|| OperateError::objective("no more objectives"))
    }
}

/// Context with no settle delay
pub fn test_context(os: Arc<RecordingOs>, reporter: Arc<RecordingReporter>) -> OperateContext {
    let config = Config {
        settle_delay_ms: 0,
        ..Config::default()
    };
    OperateContext::new(config, os, reporter)
}

pub fn continue_batch() -> OperateResult<Vec<Action>> {
    Ok(vec![Action::press(["tab"])])
}

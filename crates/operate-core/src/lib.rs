//! Self-Operating Computer core library
//!
//! This crate provides the action-execution loop that lets a multimodal model
//! operate a computer: model querying, action decoding, OS dispatch and the
//! objective lifecycle, together with configuration and error handling.

pub mod action;
pub mod config;
pub mod context;
pub mod conversation;
pub mod error;
pub mod executor;
pub mod model;
pub mod objective;
pub mod os;
pub mod process;
pub mod prompt;
pub mod reporter;
pub mod screen;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use action::{Action, ActionKind, ClickPoint, Directive};
pub use config::Config;
pub use context::OperateContext;
pub use conversation::{Conversation, Message, MessageRole};
pub use error::{OperateError, OperateResult};
pub use executor::{ActionExecutor, ActionOutcome};
pub use model::{ModelReply, ModelRouter, ModelService, SessionToken};
pub use objective::{CommandObjectiveSource, ObjectiveSource};
pub use os::{OsAutomation, XdotoolDriver};
pub use reporter::{LogReporter, Reporter};
pub use screen::{CommandScreenCapture, ScreenCapture};
pub use session::{SessionExit, SessionLoop};
pub use turn::TurnController;

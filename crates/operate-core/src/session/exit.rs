//! Why an objective loop ended

use crate::error::OperateError;

/// Outcome of `SessionLoop::run`.
///
/// A `done` directive never ends the loop, it hands off to a new objective,
/// so there is no success variant here.
#[derive(Debug, Clone)]
pub enum SessionExit {
    /// An unknown operation halted the loop
    Stopped,
    /// Too many consecutive `continue` turns for one objective
    LoopCapReached {
        /// Value of the loop counter when the cap was exceeded
        loop_count: u32,
    },
    /// A fault while querying the model, dispatching or reading an objective
    Failed {
        error: OperateError,
    },
}

impl SessionExit {
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionExit::Failed { .. })
    }

    pub fn error(&self) -> Option<&OperateError> {
        match self {
            SessionExit::Failed { error } => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionExit::Stopped => write!(f, "stopped"),
            SessionExit::LoopCapReached { loop_count } => {
                write!(f, "loop cap reached after {} turns", loop_count)
            }
            SessionExit::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}

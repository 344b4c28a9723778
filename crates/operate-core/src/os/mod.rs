//! OS-automation boundary
//!
//! The loop never touches input devices directly; everything goes through
//! `OsAutomation`, one call per dispatched action.

mod xdotool;

pub use xdotool::{XdotoolDriver, keysym};

use crate::action::ClickPoint;
use crate::error::OperateResult;
use async_trait::async_trait;

/// Keyboard and mouse primitives of the host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OsAutomation: Send + Sync {
    /// Press the keys together, then release them
    async fn press(&self, keys: &[String]) -> OperateResult<()>;

    /// Type literal text
    async fn write(&self, text: &str) -> OperateResult<()>;

    /// Move the pointer to `point` and left-click
    async fn mouse(&self, point: ClickPoint) -> OperateResult<()>;
}

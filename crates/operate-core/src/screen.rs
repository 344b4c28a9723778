//! Optional screen capture attached to model queries

use crate::error::{OperateError, OperateResult};
use crate::process::run_command;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::PathBuf;

const PATH_PLACEHOLDER: &str = "{path}";

/// Produces an image of the current screen as a data URL
#[async_trait]
pub trait ScreenCapture: Send + Sync {
    async fn capture(&self) -> OperateResult<String>;
}

/// Runs an external screenshot tool that writes a PNG file
#[derive(Debug, Clone)]
pub struct CommandScreenCapture {
    argv: Vec<String>,
    path: PathBuf,
}

impl CommandScreenCapture {
    /// `{path}` in `argv` is replaced with `path`
    pub fn new(argv: Vec<String>, path: PathBuf) -> Self {
        Self { argv, path }
    }

    fn command_line(&self) -> Vec<String> {
        let path = self.path.display().to_string();
        self.argv
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect()
    }
}

#[async_trait]
impl ScreenCapture for CommandScreenCapture {
    async fn capture(&self) -> OperateResult<String> {
        run_command(&self.command_line())
            .await
            .map_err(|e| OperateError::other(format!("screenshot failed: {}", e)))?;

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            OperateError::io_with_path(
                format!("Failed to read screenshot: {}", e),
                self.path.display().to_string(),
            )
        })?;

        Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }
}

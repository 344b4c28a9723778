//! External command execution shared by the OS driver, voice and screen capture

use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Failure of an external command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Run `argv` to completion and return its stdout
pub async fn run_command(argv: &[String]) -> Result<String, CommandError> {
    let (program, args) = argv.split_first().ok_or(CommandError::Empty)?;

    debug!("Executing command: {}", argv.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            program: program.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

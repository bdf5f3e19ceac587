//! Error types for setup operations

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the setup steps.
///
/// Every variant is fatal to the run; the task runner wraps the first one it
/// sees in [`SetupError::TaskFailed`] together with the title of the step.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The child process could not be launched at all (e.g. binary not in PATH)
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process ran but exited unsuccessfully
    #[error("`{command}` exited with {}{}", exit_label(*code), stderr_suffix(stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No package.json found at {}", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("Failed to parse {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    ManifestNotObject { path: PathBuf },

    /// A named step failed; remaining steps were not run
    #[error("{title} failed: {error:#}")]
    TaskFailed { title: String, error: anyhow::Error },
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr.trim_end())
    }
}

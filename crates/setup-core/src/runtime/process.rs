//! Child process capability

use crate::error::SetupError;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Number of trailing stderr lines kept in a failure message
const STDERR_TAIL_LINES: usize = 20;

/// Runs an external program to completion.
///
/// Success means the process was launched and exited with status 0. Output is
/// not interpreted.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> impl Future<Output = Result<(), SetupError>>;
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    /// Create a runner whose children start in `cwd`
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), SetupError> {
        let command = display_command(program, args);

        // No timeout: the child is awaited until it exits
        let output = TokioCommand::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| SetupError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(SetupError::CommandFailed {
            command,
            code: output.status.code(),
            stderr: stderr_tail(&String::from_utf8_lossy(&output.stderr)),
        })
    }
}

/// Render `program args...` the way a user would type it
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_command() {
        assert_eq!(
            display_command("yarn", &args(&["add", "--dev", "postcss"])),
            "yarn add --dev postcss"
        );
        assert_eq!(display_command("npm", &[]), "npm");
    }

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let long: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let tail = stderr_tail(&long);
        assert!(tail.starts_with("line 10"));
        assert!(tail.ends_with("line 29"));
        assert_eq!(tail.lines().count(), STDERR_TAIL_LINES);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let runner = SystemRunner::new(dir.path());

        let err = runner
            .run("definitely-not-a-real-package-manager", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, SetupError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_cwd_and_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let runner = SystemRunner::new(dir.path());

        runner
            .run("sh", &args(&["-c", "touch created-here"]))
            .await
            .unwrap();
        assert!(dir.path().join("created-here").exists());

        let err = runner
            .run("sh", &args(&["-c", "echo boom >&2; exit 3"]))
            .await
            .unwrap_err();
        match err {
            SetupError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

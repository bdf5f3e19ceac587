//! Sequential task runner
//!
//! Tasks are titled futures. They are lazy, so building the whole list up
//! front does not start any work; [`run_tasks`] awaits them one at a time and
//! stops at the first failure. Side effects of tasks that already finished are
//! left in place.

use crate::error::SetupError;
use std::future::Future;
use std::pin::Pin;

type TaskFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

/// A named, not-yet-started unit of work
pub struct Task<'a> {
    title: String,
    action: TaskFuture<'a>,
}

impl<'a> Task<'a> {
    pub fn new<F>(title: impl Into<String>, action: F) -> Self
    where
        F: Future<Output = anyhow::Result<()>> + 'a,
    {
        Self {
            title: title.into(),
            action: Box::pin(action),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Receives per-task status transitions (running -> succeeded | failed)
pub trait TaskReporter {
    fn started(&mut self, title: &str) -> anyhow::Result<()>;
    fn succeeded(&mut self, title: &str) -> anyhow::Result<()>;
    fn failed(&mut self, title: &str, error: &anyhow::Error) -> anyhow::Result<()>;
}

/// Reporter that discards every transition
#[derive(Debug, Default)]
pub struct SilentReporter;

impl TaskReporter for SilentReporter {
    fn started(&mut self, _title: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn succeeded(&mut self, _title: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn failed(&mut self, _title: &str, _error: &anyhow::Error) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Run `tasks` in order, returning the titles that completed.
///
/// The first failing task aborts the run; its title and error are returned as
/// [`SetupError::TaskFailed`] and later tasks are dropped without being polled.
pub async fn run_tasks<R: TaskReporter + ?Sized>(
    tasks: Vec<Task<'_>>,
    reporter: &mut R,
) -> Result<Vec<String>, SetupError> {
    let mut completed = Vec::with_capacity(tasks.len());

    for task in tasks {
        let Task { title, action } = task;
        report(reporter.started(&title));

        match action.await {
            Ok(()) => {
                report(reporter.succeeded(&title));
                completed.push(title);
            }
            Err(error) => {
                report(reporter.failed(&title, &error));
                return Err(SetupError::TaskFailed { title, error });
            }
        }
    }

    Ok(completed)
}

// A broken terminal must not change the outcome of the run
fn report(result: anyhow::Result<()>) {
    if let Err(e) = result {
        eprintln!("{e}");
    }
}

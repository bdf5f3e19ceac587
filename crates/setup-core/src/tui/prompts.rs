//! Charm-style progress output using cliclack

use crate::product::SetupConfig;
use crate::runtime::SystemRunner;
use crate::setup::SetupContext;
use crate::summary;
use crate::tasks::TaskReporter;
use anyhow::{Context, Result};
use std::path::Path;

/// [`TaskReporter`] that shows one cliclack spinner per task
#[derive(Default)]
pub struct SpinnerReporter {
    spinner: Option<cliclack::ProgressBar>,
}

impl TaskReporter for SpinnerReporter {
    fn started(&mut self, title: &str) -> Result<()> {
        let spinner = cliclack::spinner();
        spinner.start(title);
        self.spinner = Some(spinner);
        Ok(())
    }

    fn succeeded(&mut self, title: &str) -> Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(title);
        } else {
            cliclack::log::success(title)?;
        }
        Ok(())
    }

    fn failed(&mut self, title: &str, error: &anyhow::Error) -> Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(title);
        }
        cliclack::log::error(format!("{:#}", error))?;
        Ok(())
    }
}

/// Run the full setup in `project_dir` with spinner output, then print the summary
pub async fn run<C: SetupConfig>(config: &C, project_dir: &Path) -> Result<()> {
    cliclack::intro(format!("Set up {}", config.display_name()))?;

    let runner = SystemRunner::new(project_dir);
    let context = SetupContext::detect(config, &runner, project_dir);
    cliclack::log::info(format!("Using {}", context.package_manager))?;

    let mut reporter = SpinnerReporter::default();
    let result = context.run(&mut reporter).await;
    restore_cursor();

    if let Err(e) = result {
        cliclack::log::info(format!("Manual setup instructions: {}", config.docs_url()))?;
        cliclack::outro_cancel("Setup stopped. Files written so far were left in place.")?;
        return Err(e).context(format!("{} setup failed", config.display_name()));
    }

    cliclack::outro(format!("{} is ready", config.display_name()))?;
    summary::print_summary(config, context.package_manager);

    Ok(())
}

/// Make the terminal cursor visible again (spinners hide it)
pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}

/// Restore the cursor on panic and exit with 130 on Ctrl+C
pub fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        restore_cursor();
        std::process::exit(130);
    })
    .ok();
}

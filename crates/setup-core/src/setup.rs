//! Setup workflow: install, scaffold, register scripts

use crate::error::SetupError;
use crate::installer;
use crate::manifest;
use crate::package_manager::PackageManager;
use crate::product::SetupConfig;
use crate::runtime::CommandRunner;
use crate::scaffold;
use crate::tasks::{self, Task, TaskReporter};
use anyhow::Context;
use std::path::Path;

pub const INSTALL_TITLE: &str = "Install dependencies";
pub const SCRIPTS_TITLE: &str = "Add scripts";

/// Everything a run needs, computed once before the first task
pub struct SetupContext<'a, C: ?Sized, R> {
    pub config: &'a C,
    pub runner: &'a R,
    pub project_dir: &'a Path,
    pub package_manager: PackageManager,
}

impl<'a, C: SetupConfig + ?Sized, R: CommandRunner> SetupContext<'a, C, R> {
    /// Probe the project directory for the package manager
    pub fn detect(config: &'a C, runner: &'a R, project_dir: &'a Path) -> Self {
        Self {
            config,
            runner,
            project_dir,
            package_manager: PackageManager::detect(project_dir),
        }
    }

    /// The ordered task list; nothing runs until it is handed to [`tasks::run_tasks`]
    pub fn tasks(&self) -> Vec<Task<'a>> {
        let config = self.config;
        let runner = self.runner;
        let project_dir = self.project_dir;
        let package_manager = self.package_manager;

        vec![
            Task::new(INSTALL_TITLE, async move {
                installer::install_dependencies(
                    runner,
                    package_manager,
                    config.dependencies(),
                    config.dev_dependencies(),
                )
                .await
                .with_context(|| format!("Could not install packages with {}", package_manager))
            }),
            Task::new(config.scaffold_title(), async move {
                scaffold::write_files(project_dir, &config.files()).await?;
                Ok(())
            }),
            Task::new(SCRIPTS_TITLE, async move {
                manifest::add_scripts(project_dir, &config.scripts()).await?;
                Ok(())
            }),
        ]
    }

    /// Run every task in order, stopping at the first failure
    pub async fn run<Rep: TaskReporter + ?Sized>(
        &self,
        reporter: &mut Rep,
    ) -> Result<Vec<String>, SetupError> {
        tasks::run_tasks(self.tasks(), reporter).await
    }
}

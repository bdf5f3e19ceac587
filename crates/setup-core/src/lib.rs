//! Setup Core - Shared library for one-shot project setup CLIs
//!
//! A setup run takes an existing JavaScript project and, in order:
//! installs packages with the project's package manager, writes starter files,
//! and registers scripts in `package.json`. It then prints a summary with
//! follow-up instructions.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - package manager detection, process execution,
//!   dependency install, file writes, manifest patching, summary rendering
//! - **Layer 2: Workflow Orchestration** - `SetupConfig` trait and `SetupContext`,
//!   which turns a config into an ordered, stop-on-failure task list
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based progress output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use setup_core::{SetupContext, SystemRunner, tasks::SilentReporter};
//!
//! let dir = std::env::current_dir()?;
//! let runner = SystemRunner::new(&dir);
//! let context = SetupContext::detect(&MyConfig, &runner, &dir);
//! context.run(&mut SilentReporter).await?;
//! ```

pub mod error;
pub mod installer;
pub mod manifest;
pub mod package_manager;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod setup;
pub mod summary;
pub mod tasks;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::SetupError;
pub use manifest::ScriptEntry;
pub use package_manager::PackageManager;
pub use product::SetupConfig;
pub use runtime::{CommandRunner, SystemRunner};
pub use scaffold::ScaffoldFile;
pub use setup::SetupContext;
pub use summary::{render_summary, NextStep};
pub use tasks::{run_tasks, Task, TaskReporter};

#[cfg(feature = "tui")]
pub use tui::run;

//! Product configuration trait for setup binaries
//!
//! Each binary built on this library describes *what* gets set up (packages,
//! starter files, scripts, follow-up instructions) by implementing this trait.
//! The library decides *how*: task ordering, process execution, file writes
//! and the final report.

use crate::manifest::ScriptEntry;
use crate::package_manager::PackageManager;
use crate::scaffold::ScaffoldFile;
use crate::summary::NextStep;

/// Configuration trait for different setup products
pub trait SetupConfig: Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Packages added as regular dependencies
    fn dependencies(&self) -> &'static [&'static str];

    /// Packages added as development dependencies
    fn dev_dependencies(&self) -> &'static [&'static str];

    /// Title shown for the file-writing task
    fn scaffold_title(&self) -> &'static str {
        "Create files"
    }

    /// Starter files, in the order they are written
    fn files(&self) -> Vec<ScaffoldFile>;

    /// Scripts merged into package.json
    fn scripts(&self) -> Vec<ScriptEntry>;

    /// Instructions printed after a successful run
    fn next_steps(&self, package_manager: PackageManager) -> Vec<NextStep>;
}

//! Dependency installation through the detected package manager

use crate::error::SetupError;
use crate::package_manager::PackageManager;
use crate::runtime::CommandRunner;

/// Add `dependencies`, then `dev_dependencies`, with one package manager call each.
///
/// An empty list skips its call. The first failing call stops the install.
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    package_manager: PackageManager,
    dependencies: &[&str],
    dev_dependencies: &[&str],
) -> Result<(), SetupError> {
    for (packages, dev) in [(dependencies, false), (dev_dependencies, true)] {
        if packages.is_empty() {
            continue;
        }
        let args = package_manager.add_args(packages, dev);
        runner.run(package_manager.program(), &args).await?;
    }

    Ok(())
}

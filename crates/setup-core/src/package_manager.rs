//! Package manager detection

use std::fmt;
use std::path::Path;

/// Lockfile whose presence selects yarn
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Package manager that owns the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Pick yarn when a yarn lockfile sits in `dir`, npm otherwise
    pub fn detect(dir: &Path) -> Self {
        if dir.join(YARN_LOCKFILE).exists() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments that add `packages` to the manifest, as runtime or dev dependencies
    pub fn add_args(&self, packages: &[&str], dev: bool) -> Vec<String> {
        let mut args: Vec<String> = match (self, dev) {
            (PackageManager::Yarn, false) => vec!["add".into()],
            (PackageManager::Yarn, true) => vec!["add".into(), "--dev".into()],
            (PackageManager::Npm, false) => vec!["install".into()],
            (PackageManager::Npm, true) => vec!["install".into(), "--save-dev".into()],
        };
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }

    /// Command prefix used to invoke a package.json script
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm run",
        }
    }

    /// Full shell command to run `script`
    pub fn run_command(&self, script: &str) -> String {
        format!("{} {}", self.run_prefix(), script)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

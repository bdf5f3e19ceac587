//! Post-setup report

use crate::package_manager::PackageManager;
use crate::product::SetupConfig;
use colored::Colorize;

const STAR: &str = "★";
const ARROW_DOWN: &str = "↓";
const INDENT: &str = "  ";

/// One numbered entry in the "What's next?" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub title: String,
    /// Lines printed under the title; already styled by the caller
    pub body: Vec<String>,
}

impl NextStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// Build the report listing new scripts, new files and follow-up steps.
///
/// Pure: reads only the configuration and the detected package manager.
pub fn render_summary<C: SetupConfig + ?Sized>(
    config: &C,
    package_manager: PackageManager,
) -> String {
    let mut lines: Vec<String> = vec![format!("{} Summary", STAR.cyan()), String::new()];

    let scripts: Vec<_> = config
        .scripts()
        .into_iter()
        .filter_map(|s| s.description.map(|d| (s.name, d)))
        .collect();
    if !scripts.is_empty() {
        lines.push("New scripts in package.json:".to_string());
        lines.push(String::new());
        lines.extend(scripts.iter().map(|(name, d)| entry(name, d)));
        lines.push(String::new());
    }

    let files = config.files();
    if !files.is_empty() {
        lines.push("New files:".to_string());
        lines.push(String::new());
        lines.extend(files.iter().map(|f| entry(f.path, f.description)));
        lines.push(String::new());
    }

    let steps = config.next_steps(package_manager);
    if !steps.is_empty() {
        lines.push(format!("{} What's next?", ARROW_DOWN.cyan()));
        for (i, step) in steps.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("{}. {}", i + 1, step.title));
            if !step.body.is_empty() {
                lines.push(String::new());
                lines.extend(step.body.iter().cloned());
            }
        }
    }

    indent(&lines.join("\n"))
}

/// Print the report surrounded by blank lines
pub fn print_summary<C: SetupConfig + ?Sized>(config: &C, package_manager: PackageManager) {
    println!();
    println!("{}", render_summary(config, package_manager));
    println!();
}

fn entry(name: &str, description: &str) -> String {
    format!(" {} {} {}", name.bold(), "-".dimmed(), description)
}

// Blank lines stay empty
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

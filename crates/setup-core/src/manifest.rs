//! package.json script registration
//!
//! The manifest is read once, patched in memory and written back once. Only
//! the `scripts` object is touched: entries with the same name are replaced,
//! everything else keeps its value and position. The file's indentation and
//! trailing newline are carried over so the diff stays limited to the scripts.

use crate::error::SetupError;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const MANIFEST_FILE: &str = "package.json";

const DEFAULT_INDENT: &str = "  ";

/// A script registered under `scripts` in package.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: &'static str,
    pub command: String,
    /// Shown in the summary; `None` keeps the script out of it
    pub description: Option<&'static str>,
}

impl ScriptEntry {
    pub fn new(name: &'static str, command: impl Into<String>) -> Self {
        Self {
            name,
            command: command.into(),
            description: None,
        }
    }

    pub fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Output layout detected from the original file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Format {
    indent: String,
    trailing_newline: bool,
}

impl Format {
    fn detect(raw: &str) -> Self {
        let indent = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let trimmed = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
                &line[..line.len() - trimmed.len()]
            })
            .find(|leading| !leading.is_empty())
            .unwrap_or(DEFAULT_INDENT)
            .to_string();

        Self {
            indent,
            trailing_newline: raw.ends_with('\n'),
        }
    }
}

/// Merge `scripts` into the package.json inside `project_dir`.
///
/// Fails without touching the disk when the manifest is missing or is not a
/// JSON object. Returns the path that was written.
pub async fn add_scripts(
    project_dir: &Path,
    scripts: &[ScriptEntry],
) -> Result<PathBuf, SetupError> {
    let path = project_dir.join(MANIFEST_FILE);

    let raw = match fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SetupError::ManifestMissing { path });
        }
        Err(source) => return Err(SetupError::Io { path, source }),
    };

    let mut manifest: Value = serde_json::from_str(&raw).map_err(|source| {
        SetupError::ManifestParse {
            path: path.clone(),
            source,
        }
    })?;

    let Some(root) = manifest.as_object_mut() else {
        return Err(SetupError::ManifestNotObject { path });
    };
    merge_scripts(root, scripts);

    let contents = render(&manifest, &Format::detect(&raw)).map_err(|e| SetupError::Io {
        path: path.clone(),
        source: e.into(),
    })?;

    fs::write(&path, contents)
        .await
        .map_err(|source| SetupError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

/// Last write wins: existing scripts with the same name are replaced
fn merge_scripts(root: &mut Map<String, Value>, scripts: &[ScriptEntry]) {
    let section = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !section.is_object() {
        *section = Value::Object(Map::new());
    }

    if let Value::Object(section) = section {
        for script in scripts {
            section.insert(script.name.to_string(), Value::String(script.command.clone()));
        }
    }
}

fn render(manifest: &Value, format: &Format) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(format.indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    if format.trailing_newline {
        out.push('\n');
    }
    Ok(out)
}

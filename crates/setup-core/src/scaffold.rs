//! Starter file generation

use crate::error::SetupError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A file written verbatim into the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the project directory
    pub path: &'static str,
    pub contents: String,
    /// One-line description for the summary
    pub description: &'static str,
}

impl ScaffoldFile {
    pub fn new(path: &'static str, contents: impl Into<String>, description: &'static str) -> Self {
        Self {
            path,
            contents: contents.into(),
            description,
        }
    }
}

/// Write every file into `project_dir`, replacing existing files of the same name.
///
/// Files are written in order; a failure leaves earlier files on disk.
pub async fn write_files(
    project_dir: &Path,
    files: &[ScaffoldFile],
) -> Result<Vec<PathBuf>, SetupError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = project_dir.join(file.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| SetupError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&target_path, &file.contents)
            .await
            .map_err(|source| SetupError::Io {
                path: target_path.clone(),
                source,
            })?;

        written.push(target_path);
    }

    Ok(written)
}

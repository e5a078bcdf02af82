//! Host-environment collaborators
//!
//! Stand-ins for the editor facilities the core integrates against: the
//! active document comes from disk and the workspace folder from a flag or
//! the current directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use buildrunner_core::{Document, WorkspaceFolder};

/// Read the active document from disk. Files on disk are never untitled.
pub fn load_document(filepath: &str) -> Result<Document> {
    let absolute_path = absolutize(Path::new(filepath))?;
    let text = fs::read_to_string(&absolute_path)
        .with_context(|| format!("Failed to read {}", absolute_path.display()))?;
    Ok(Document::new(path_string(&absolute_path), text))
}

/// Determine the workspace folder: an explicit flag, else the current
/// directory. The folder name is the directory's basename.
pub fn resolve_workspace(workspace: Option<&str>) -> Result<WorkspaceFolder> {
    let root = match workspace {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = absolutize(&root)?;

    let name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("workspace")
        .to_string();
    Ok(WorkspaceFolder::new(name, path_string(&root)))
}

/// Resolve to an absolute, symlink-free path so the workspace root is a
/// literal prefix of the document path.
fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    absolute
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", absolute.display()))
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

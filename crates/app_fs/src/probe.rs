//! Path probing

use crate::{FsError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What the host reports about a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub directory: bool,
}

/// Probe a path, reporting missing or unreadable paths as errors
pub fn try_probe<P: AsRef<Path>>(path: P) -> Result<FileInfo> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(FsError::InvalidPath(String::new()));
    }

    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FsError::NotFound(path.display().to_string()),
        _ => FsError::Io(e),
    })?;

    Ok(FileInfo {
        path: path.to_path_buf(),
        directory: metadata.is_dir(),
    })
}

/// Probe a path. Anything that cannot be inspected counts as a file.
pub fn probe<P: AsRef<Path>>(path: P) -> FileInfo {
    let path = path.as_ref();
    try_probe(path).unwrap_or_else(|e| {
        tracing::debug!("Probe failed for {:?}: {}", path, e);
        FileInfo {
            path: path.to_path_buf(),
            directory: false,
        }
    })
}

/// Host home directory, falling back to the working directory
pub fn home_dir() -> PathBuf {
    dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Upper-cased extension of the file name, without the dot.
///
/// Dotfiles like `.bashrc` have no extension.
pub fn extension_upper<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .filter(|ext| !ext.is_empty())
}

//! Glimpse file system layer
//!
//! The core never touches the disk itself. This crate provides the few
//! host facts it needs:
//! - `probe`: is a path a directory?
//! - `home_dir`: the default browsing root
//! - `extension_upper`: normalized file extension lookup

mod probe;

pub use probe::{FileInfo, probe, try_probe, home_dir, extension_upper};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, FsError>;

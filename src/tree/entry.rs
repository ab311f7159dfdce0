//! Directory entry definition

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::SystemTime;

/// One child of a listed directory
///
/// Entries are snapshots: they are built on every listing and dropped when
/// the listing is refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Display name
    pub name: String,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Size in bytes (files only, 0 for directories)
    pub size: u64,
    /// Last modification time, when the platform reports one
    pub modified: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Build an entry from a path and its metadata
    pub fn from_metadata(path: PathBuf, metadata: &Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let is_dir = metadata.is_dir();

        Self {
            path,
            name,
            is_dir,
            size: if is_dir { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
        }
    }

    /// Check whether the entry name starts with a dot
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

//! Directory listing

use std::cmp::Ordering;
use std::path::Path;

use super::DirectoryEntry;

/// Source of directory listings
pub trait DirectoryLister {
    /// List the immediate children of `path`
    ///
    /// Directories come before files, both sorted case-insensitively.
    /// Inaccessible or missing paths yield an empty list.
    fn list_children(&self, path: &Path) -> Vec<DirectoryEntry>;

    /// Like [`list_children`](Self::list_children), but never hides entries
    ///
    /// Hiding is a display choice; rename batches work on every child.
    fn list_all_children(&self, path: &Path) -> Vec<DirectoryEntry> {
        self.list_children(path)
    }
}

/// Lister backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister {
    /// Whether dot-entries are listed
    pub show_hidden: bool,
}

impl FsLister {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}

impl DirectoryLister for FsLister {
    fn list_children(&self, path: &Path) -> Vec<DirectoryEntry> {
        read_sorted(path, self.show_hidden)
    }

    fn list_all_children(&self, path: &Path) -> Vec<DirectoryEntry> {
        read_sorted(path, true)
    }
}

fn read_sorted(path: &Path, show_hidden: bool) -> Vec<DirectoryEntry> {
    let read_dir = match std::fs::read_dir(path) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "listing failed");
            return Vec::new();
        }
    };

    let mut entries: Vec<DirectoryEntry> = read_dir
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let path = e.path();
            // Follow symlinks so linked folders can be browsed
            let metadata = std::fs::metadata(&path)
                .or_else(|_| e.metadata())
                .ok()?;
            Some(DirectoryEntry::from_metadata(path, &metadata))
        })
        .filter(|e| show_hidden || !e.is_hidden())
        .collect();

    sort_entries(&mut entries);
    entries
}

/// Sort: directories first, then alphabetically ignoring case
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

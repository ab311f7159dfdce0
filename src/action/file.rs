//! File operations (existence checks, rename, folder statistics)

use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::error::{RenviewError, Result};

/// Filesystem operations used by the rename pipeline
pub trait FsMutator {
    /// Check whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Move `src` to `dst`, never replacing an existing `dst`
    fn rename(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// Mutator backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsMutator for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so dangling links still count as taken
        path.symlink_metadata().is_ok()
    }

    fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        if !src.exists() {
            return Err(RenviewError::path(src, "no longer exists"));
        }
        // std::fs::rename silently replaces files and empty directories
        if self.exists(dst) {
            let name = dst
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dst.display().to_string());
            return Err(RenviewError::TargetExists(name));
        }
        std::fs::rename(src, dst)?;
        Ok(())
    }
}

/// Recursive statistics for a folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderStats {
    /// Total size of all files in bytes
    pub total_size: u64,
    /// Number of files
    pub files: usize,
    /// Number of sub-folders
    pub folders: usize,
}

/// Walk `dir` and sum up its content; unreadable entries are skipped
pub fn folder_stats(dir: &Path) -> FolderStats {
    let mut stats = FolderStats::default();
    for entry in WalkDir::new(dir).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            stats.folders += 1;
        } else if file_type.is_file() {
            stats.files += 1;
            stats.total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }
    stats
}

/// Build the command that opens an interactive shell in `dir`
pub fn shell_command(dir: &Path, configured: &str) -> Command {
    let program = if !configured.trim().is_empty() {
        configured.trim().to_string()
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "cmd".to_string()
            } else {
                "sh".to_string()
            }
        })
    };
    let mut cmd = Command::new(program);
    cmd.current_dir(dir);
    cmd
}

/// Build the command that opens `dir` in the user's editor
pub fn editor_command(dir: &Path, configured: &str) -> Command {
    let program = if !configured.trim().is_empty() {
        configured.trim().to_string()
    } else {
        std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "vi".to_string()
                }
            })
    };
    let mut cmd = Command::new(program);
    cmd.arg(dir).current_dir(dir);
    cmd
}

/// Path next to `original` carrying `new_name`
pub fn sibling_path(original: &Path, new_name: &str) -> PathBuf {
    original.parent().unwrap_or(Path::new("")).join(new_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rename_moves_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("old");
        let dst = temp.path().join("new");
        fs::create_dir(&src).unwrap();

        LocalFs.rename(&src, &dst).unwrap();
        assert!(!src.exists());
        assert!(dst.is_dir());
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("old");
        let dst = temp.path().join("taken");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        let err = LocalFs.rename(&src, &dst).unwrap_err();
        assert!(matches!(err, RenviewError::TargetExists(ref n) if n == "taken"));
        assert!(src.exists());
    }

    #[test]
    fn test_rename_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = LocalFs
            .rename(&temp.path().join("ghost"), &temp.path().join("x"))
            .unwrap_err();
        assert!(matches!(err, RenviewError::Path { .. }));
    }

    #[test]
    fn test_exists() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("here")).unwrap();
        assert!(LocalFs.exists(&temp.path().join("here")));
        assert!(!LocalFs.exists(&temp.path().join("gone")));
    }

    #[test]
    fn test_folder_stats() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(temp.path().join("a.txt"), "12345").unwrap();
        fs::write(sub.join("b.txt"), "123").unwrap();

        let stats = folder_stats(temp.path());
        assert_eq!(
            stats,
            FolderStats {
                total_size: 8,
                files: 2,
                folders: 1
            }
        );
    }

    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("/data/Photos/IMG_001"), "001"),
            PathBuf::from("/data/Photos/001")
        );
    }

    #[test]
    fn test_configured_shell_wins() {
        let temp = TempDir::new().unwrap();
        let cmd = shell_command(temp.path(), "fish");
        assert_eq!(cmd.get_program(), "fish");
        assert_eq!(cmd.get_current_dir(), Some(temp.path()));
    }
}

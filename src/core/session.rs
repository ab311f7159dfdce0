//! Browse session state
//!
//! Everything a browsing session remembers lives in [`BrowseSession`]: the
//! boundary root, the current folder, the navigation history and the rename
//! batches applied so far. The controller borrows it mutably for each stage
//! and hands it back when the session ends.

use std::path::{Component, Path, PathBuf};

use crate::error::{RenviewError, Result};
use crate::rename::RenameOutcome;

/// Stack of folder names used to re-highlight a child after going back up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    names: Vec<String>,
}

impl NavigationHistory {
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// State of one browsing session
#[derive(Debug, Clone)]
pub struct BrowseSession {
    root: PathBuf,
    current: PathBuf,
    history: NavigationHistory,
    /// Name to highlight on the next visit (set by `ascend`)
    highlight: Option<String>,
    /// Every rename batch applied during the session
    pub renamed: Vec<RenameOutcome>,
}

impl BrowseSession {
    /// Start a session at `root`, which becomes the boundary
    pub fn new(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(RenviewError::path(root, "not a directory"));
        }
        let root = root.canonicalize()?;
        Ok(Self {
            current: root.clone(),
            root,
            history: NavigationHistory::default(),
            highlight: None,
            renamed: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn is_at_root(&self) -> bool {
        self.current == self.root
    }

    /// Take the child name that should be highlighted on this visit
    pub fn take_highlight(&mut self) -> Option<String> {
        self.highlight.take()
    }

    /// Keep `name` highlighted on the next visit (after a re-read)
    pub fn set_highlight(&mut self, name: impl Into<String>) {
        self.highlight = Some(name.into());
    }

    /// Go one level up; a no-op at the boundary root
    ///
    /// Returns whether `current` changed.
    pub fn ascend(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        let Some(parent) = self.current.parent() else {
            return false;
        };
        if !parent.starts_with(&self.root) {
            return false;
        }

        let left = self
            .current
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.highlight = self.history.pop().or(left);
        self.current = parent.to_path_buf();
        tracing::debug!(path = %self.current.display(), "ascend");
        true
    }

    /// Enter the child folder `name` of the current folder
    ///
    /// Names that would escape the current folder are rejected and leave
    /// the session unchanged.
    pub fn descend(&mut self, name: &str) -> bool {
        if !is_plain_name(name) {
            return false;
        }
        let target = self.current.join(name);
        if !target.is_dir() {
            return false;
        }
        self.history.push(name);
        self.highlight = None;
        self.current = target;
        tracing::debug!(path = %self.current.display(), "descend");
        true
    }

    /// Record an applied rename batch
    pub fn record(&mut self, outcome: RenameOutcome) {
        self.renamed.push(outcome);
    }
}

/// A single normal path component (no separators, no `.`/`..`)
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        fs::create_dir_all(temp.path().join("x")).unwrap();
        temp
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        assert!(BrowseSession::new(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_repeated_ascend_at_root_is_noop() {
        let temp = tree();
        let mut session = BrowseSession::new(temp.path()).unwrap();
        let root = session.root().to_path_buf();
        for _ in 0..5 {
            assert!(!session.ascend());
            assert_eq!(session.current(), root);
        }
    }

    #[test]
    fn test_descend_then_ascend_stops_at_root() {
        let temp = tree();
        let mut session = BrowseSession::new(temp.path()).unwrap();
        assert!(session.descend("a"));
        assert!(session.descend("b"));
        assert_eq!(session.history().len(), 2);

        let mut steps = 0;
        while session.ascend() {
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert!(session.is_at_root());
        assert!(!session.ascend());
        assert_eq!(session.current(), session.root());
    }

    #[test]
    fn test_ascend_highlights_left_child() {
        let temp = tree();
        let mut session = BrowseSession::new(temp.path()).unwrap();
        session.descend("a");
        session.descend("b");
        session.ascend();
        assert_eq!(session.take_highlight().as_deref(), Some("b"));
        assert_eq!(session.take_highlight(), None);
        session.ascend();
        assert_eq!(session.take_highlight().as_deref(), Some("a"));
    }

    #[test]
    fn test_descend_rejects_escaping_names() {
        let temp = tree();
        let mut session = BrowseSession::new(&temp.path().join("a")).unwrap();
        for name in ["..", ".", "b/c", "/", "", "missing"] {
            assert!(!session.descend(name), "{name} should be rejected");
        }
        assert!(session.is_at_root());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_root_is_nested_boundary() {
        let temp = tree();
        let mut session = BrowseSession::new(&temp.path().join("a")).unwrap();
        session.descend("b");
        session.ascend();
        session.ascend();
        session.ascend();
        assert_eq!(session.current(), temp.path().join("a").canonicalize().unwrap());
    }
}

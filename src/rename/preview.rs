//! Rename preview generation

use std::path::{Path, PathBuf};

use super::pattern::{sanitize_name, MatchMode, MatchSpan, Matcher};
use crate::action::file::{sibling_path, FsMutator};
use crate::tree::DirectoryLister;

/// Pattern, replacement and mode typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameRequest {
    pub pattern: String,
    pub replacement: String,
    pub mode: MatchMode,
}

impl RenameRequest {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            mode,
        }
    }
}

/// One row of a proposed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePreview {
    pub original_name: String,
    /// Name shown in the "after" column; falls back to the original when
    /// the computed name came out empty
    pub new_name: String,
    pub original_path: PathBuf,
    pub new_path: PathBuf,
    pub has_conflict: bool,
    pub match_spans: Vec<MatchSpan>,
    /// The computed name was empty before the fallback
    pub empty_result: bool,
}

impl RenamePreview {
    pub fn will_change(&self) -> bool {
        self.original_name != self.new_name
    }

    pub fn is_empty_result(&self) -> bool {
        self.empty_result
    }

    /// Build a preview for `original_path` renamed to `new_name`
    fn build(
        fs: &impl FsMutator,
        original_path: &Path,
        original_name: &str,
        new_name: String,
        match_spans: Vec<MatchSpan>,
        empty_result: bool,
    ) -> Self {
        let new_path = sibling_path(original_path, &new_name);
        let has_conflict = new_name != original_name && fs.exists(&new_path);
        Self {
            original_name: original_name.to_string(),
            new_name,
            original_path: original_path.to_path_buf(),
            new_path,
            has_conflict,
            match_spans,
            empty_result,
        }
    }
}

/// Compute the rename preview for every child folder of `dir`
///
/// Invalid patterns and entries the pattern does not touch produce
/// unchanged rows; nothing here touches the disk.
pub fn generate_preview(
    lister: &impl DirectoryLister,
    fs: &impl FsMutator,
    dir: &Path,
    request: &RenameRequest,
) -> Vec<RenamePreview> {
    let matcher = Matcher::compile(&request.pattern, &request.replacement, request.mode);
    if let Some(err) = matcher.error() {
        tracing::debug!(pattern = %request.pattern, error = %err, "invalid pattern");
    }

    lister
        .list_all_children(dir)
        .into_iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| {
            let original = entry.name.as_str();
            match matcher.apply(original) {
                None => RenamePreview::build(
                    fs,
                    &entry.path,
                    original,
                    original.to_string(),
                    Vec::new(),
                    false,
                ),
                Some((raw, spans)) => {
                    let cleaned = sanitize_name(&raw);
                    if cleaned.trim().is_empty() {
                        RenamePreview::build(
                            fs,
                            &entry.path,
                            original,
                            original.to_string(),
                            spans,
                            true,
                        )
                    } else {
                        RenamePreview::build(fs, &entry.path, original, cleaned, spans, false)
                    }
                }
            }
        })
        .collect()
}

/// Counts shown under the preview table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewSummary {
    pub total: usize,
    pub changing: usize,
    pub conflicts: usize,
    pub empty: usize,
}

impl PreviewSummary {
    pub fn of(previews: &[RenamePreview]) -> Self {
        previews.iter().fold(
            Self {
                total: previews.len(),
                ..Self::default()
            },
            |mut acc, p| {
                if p.will_change() {
                    acc.changing += 1;
                }
                if p.has_conflict {
                    acc.conflicts += 1;
                }
                if p.is_empty_result() {
                    acc.empty += 1;
                }
                acc
            },
        )
    }

    /// Renames that would actually be attempted
    pub fn applicable(&self) -> usize {
        self.changing - self.conflicts
    }
}

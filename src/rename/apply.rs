//! Batch rename execution

use super::preview::RenamePreview;
use crate::action::file::FsMutator;

/// Aggregate result of one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    pub successful: usize,
    pub failed: usize,
    pub skipped: usize,
    /// One human-readable line per failure, in batch order
    pub errors: Vec<String>,
}

impl RenameOutcome {
    pub fn total(&self) -> usize {
        self.successful + self.failed + self.skipped
    }

    pub fn has_errors(&self) -> bool {
        self.failed > 0
    }

    /// One-line status message
    pub fn summary(&self) -> String {
        let noun = if self.successful == 1 { "folder" } else { "folders" };
        if self.failed == 0 {
            format!("Renamed {} {}", self.successful, noun)
        } else {
            format!(
                "Renamed {} {}, {} failed",
                self.successful, noun, self.failed
            )
        }
    }
}

/// Execute `previews` in order
///
/// Items are independent: a failure is recorded and the batch goes on,
/// earlier successes are never rolled back.
pub fn apply_renames(fs: &impl FsMutator, previews: &[RenamePreview]) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    for preview in previews {
        if !preview.will_change() || preview.is_empty_result() {
            outcome.skipped += 1;
            continue;
        }

        if preview.has_conflict {
            outcome.failed += 1;
            outcome.errors.push(format!(
                "{}: target '{}' already exists",
                preview.original_name, preview.new_name
            ));
            tracing::warn!(from = %preview.original_name, to = %preview.new_name, "rename conflict");
            continue;
        }

        match fs.rename(&preview.original_path, &preview.new_path) {
            Ok(()) => {
                outcome.successful += 1;
                tracing::info!(from = %preview.original_name, to = %preview.new_name, "renamed");
            }
            Err(e) => {
                outcome.failed += 1;
                outcome
                    .errors
                    .push(format!("{}: {}", preview.original_name, e));
                tracing::warn!(from = %preview.original_name, error = %e, "rename failed");
            }
        }
    }

    outcome
}

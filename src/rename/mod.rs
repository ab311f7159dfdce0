//! Rename module - Pattern previews and batch execution

pub mod apply;
pub mod debounce;
pub mod pattern;
pub mod preview;

pub use apply::{apply_renames, RenameOutcome};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use pattern::{sanitize_name, MatchMode, MatchSpan, Matcher};
pub use preview::{generate_preview, PreviewSummary, RenamePreview, RenameRequest};

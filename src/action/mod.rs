//! Action module - File operations

pub mod file;

pub use file::{
    editor_command, folder_stats, shell_command, sibling_path, FolderStats, FsMutator, LocalFs,
};

//! Tree module - Directory entries and listing

pub mod entry;
pub mod lister;

pub use entry::DirectoryEntry;
pub use lister::{sort_entries, DirectoryLister, FsLister};

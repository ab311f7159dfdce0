//! Core module - Input buffers, selection lists and session state

pub mod editor;
pub mod selector;
pub mod session;

pub use editor::{EditorBuffer, DEFAULT_MAX_LEN};
pub use selector::{ItemKind, SelectItem, Selector, Signal};
pub use session::{BrowseSession, NavigationHistory};

//! Handler module - Input event handling

pub mod key;
pub mod menu;

pub use key::{
    apply_scroll, max_scroll, resolve, update_buffer, EditorAction, FocusState, Transition,
};
pub use menu::DirAction;

//! renview - A terminal folder navigator with live-preview batch renaming
//!
//! Browse below a root folder, pick a folder and rename its child folders
//! with a pattern and a replacement while a preview shows every result
//! before anything touches the disk.

pub mod action;
pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod rename;
pub mod render;
pub mod tree;

pub use error::{RenviewError, Result};

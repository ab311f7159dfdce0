//! Application module
//!
//! Configuration, logging, the terminal frontend and the interactive
//! controllers (browser, rename editor) plus the non-interactive
//! `rename` command.

pub mod batch;
pub mod browser;
pub mod config;
pub mod config_file;
pub mod frontend;
pub mod logging;
pub mod offload;
pub mod prompt;
pub mod rename_editor;
pub mod tui;

pub use batch::{run_batch, BatchIo};
pub use browser::run_browser;
pub use config::{print_help, Command, Config, RenameSettings, Settings};
pub use config_file::ConfigFile;
pub use frontend::{Frontend, Screen};
pub use rename_editor::{run_rename_editor, RenameEditor};
pub use tui::TuiFrontend;

/// Process exit codes
///
/// - `SUCCESS` (0): Nothing failed
/// - `FAILURE` (1): A rename failed or the target folder does not exist
/// - `ERROR` (2): Unexpected runtime error
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const ERROR: i32 = 2;
    pub const INVALID: i32 = 3;
}

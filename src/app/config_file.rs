//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/renview/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::DEFAULT_MAX_LEN;
use crate::rename::DEFAULT_DEBOUNCE;

/// Main configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Rename editor settings
    pub rename: RenameConfig,
    /// External programs
    pub commands: CommandsConfig,
    /// Colors
    pub theme: ThemeColors,
}

/// General application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show hidden files by default
    pub show_hidden: bool,
}

/// Rename editor settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Maximum characters per input field
    pub max_input_len: usize,
    /// Minimum milliseconds between preview regenerations
    pub debounce_ms: u64,
    /// Start in literal (non-regex) mode
    pub literal: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_LEN,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            literal: false,
        }
    }
}

impl RenameConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// External programs launched from the action menu
///
/// Empty values fall back to the environment (`$SHELL`, `$VISUAL`,
/// `$EDITOR`) and then to platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    pub shell: String,
    pub editor: String,
}

/// Theme colors, parsed by `render::theme::parse_color`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub accent: String,
    pub highlight: String,
    pub conflict: String,
    pub muted: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            accent: "cyan".to_string(),
            highlight: "yellow".to_string(),
            conflict: "red".to_string(),
            muted: "darkgray".to_string(),
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/renview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("renview"))
    }

    /// Get the config file path (~/.config/renview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(!config.general.show_hidden);
        assert_eq!(config.rename.max_input_len, 200);
        assert_eq!(config.rename.debounce(), Duration::from_millis(100));
        assert!(!config.rename.literal);
        assert!(config.commands.shell.is_empty());
        assert_eq!(config.theme.accent, "cyan");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[general]
show_hidden = true

[rename]
debounce_ms = 250
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert!(config.general.show_hidden);
        assert_eq!(config.rename.debounce_ms, 250);
        assert_eq!(config.rename.max_input_len, 200); // default
        assert_eq!(config.theme, ThemeColors::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[general]
show_hidden = true

[rename]
max_input_len = 64
debounce_ms = 50
literal = true

[commands]
shell = "zsh"
editor = "hx"

[theme]
accent = "magenta"
highlight = "#ffaa00"
conflict = "lightred"
muted = "gray"
"##;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(config.rename.max_input_len, 64);
        assert!(config.rename.literal);
        assert_eq!(config.commands.shell, "zsh");
        assert_eq!(config.commands.editor, "hx");
        assert_eq!(config.theme.highlight, "#ffaa00");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[rename]
literal = true
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert!(config.rename.literal);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        assert!(ConfigFile::load_from(file.path()).is_err());
    }
}

//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::config_file::{ConfigFile, ThemeColors};
use crate::rename::MatchMode;

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive browser rooted at `root`
    Browse { root: PathBuf },
    /// Non-interactive batch rename of the child folders of `path`
    Rename {
        path: PathBuf,
        pattern: String,
        replacement: String,
        mode: MatchMode,
        assume_yes: bool,
    },
    Help,
    Version,
}

/// Rename editor settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSettings {
    pub max_input_len: usize,
    pub debounce: Duration,
    /// Mode the editor starts in
    pub mode: MatchMode,
}

/// Settings shared by the interactive controllers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub show_hidden: bool,
    pub rename: RenameSettings,
    /// Shell for "Open in terminal" (empty: environment default)
    pub shell: String,
    /// Editor for "Open in editor" (empty: environment default)
    pub editor: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_file(&ConfigFile::default())
    }
}

impl Settings {
    pub fn from_file(file: &ConfigFile) -> Self {
        Self {
            show_hidden: file.general.show_hidden,
            rename: RenameSettings {
                max_input_len: file.rename.max_input_len,
                debounce: file.rename.debounce(),
                mode: if file.rename.literal {
                    MatchMode::Literal
                } else {
                    MatchMode::Pattern
                },
            },
            shell: file.commands.shell.clone(),
            editor: file.commands.editor.clone(),
        }
    }
}

/// Application configuration from CLI args and config file
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub settings: Settings,
    pub theme: ThemeColors,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();
        Self::parse(env::args().skip(1), config_file)
    }

    /// Parse `args` (without the program name) on top of `config_file`
    ///
    /// CLI arguments take precedence over config file values.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        config_file: ConfigFile,
    ) -> anyhow::Result<Self> {
        let mut show_hidden: Option<bool> = None;
        let mut literal = false;
        let mut assume_yes = false;
        let mut help = false;
        let mut version = false;
        let mut positional: Vec<String> = Vec::new();
        let mut options_done = false;

        for arg in args {
            if options_done {
                positional.push(arg);
                continue;
            }
            match arg.as_str() {
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--literal" | "-l" => literal = true,
                "--yes" | "-y" => assume_yes = true,
                "--help" | "-h" => help = true,
                "--version" | "-V" => version = true,
                "--" => options_done = true,
                value if !value.starts_with('-') || value == "-" => positional.push(arg),
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let mut settings = Settings::from_file(&config_file);
        if let Some(show) = show_hidden {
            settings.show_hidden = show;
        }

        let command = if help {
            Command::Help
        } else if version {
            Command::Version
        } else if positional.first().map(String::as_str) == Some("rename") {
            parse_rename(&positional[1..], literal, assume_yes, settings.rename.mode)?
        } else {
            if literal || assume_yes {
                anyhow::bail!("--literal and --yes only apply to the rename command");
            }
            parse_browse(&positional)?
        };

        Ok(Self {
            command,
            settings,
            theme: config_file.theme,
        })
    }
}

fn parse_browse(positional: &[String]) -> anyhow::Result<Command> {
    let root = match positional {
        [] => env::current_dir()?,
        [path] => {
            let p = PathBuf::from(path);
            if !p.is_dir() {
                anyhow::bail!("Not a directory: {}", path);
            }
            p.canonicalize()?
        }
        [_, extra, ..] => anyhow::bail!("Unexpected argument: {}", extra),
    };
    Ok(Command::Browse { root })
}

fn parse_rename(
    positional: &[String],
    literal: bool,
    assume_yes: bool,
    default_mode: MatchMode,
) -> anyhow::Result<Command> {
    let (path, pattern, replacement) = match positional {
        [path, pattern] => (path, pattern, String::new()),
        [path, pattern, replacement] => (path, pattern, replacement.clone()),
        [] | [_] => anyhow::bail!("rename requires <PATH> and <PATTERN>"),
        [_, _, _, extra, ..] => anyhow::bail!("Unexpected argument: {}", extra),
    };
    if pattern.trim().is_empty() {
        anyhow::bail!("rename requires a non-empty pattern");
    }
    Ok(Command::Rename {
        path: PathBuf::from(path),
        pattern: pattern.clone(),
        replacement,
        mode: if literal {
            MatchMode::Literal
        } else {
            default_mode
        },
        assume_yes,
    })
}

pub fn print_help() {
    println!(
        r#"rv - renview: browse folders and batch-rename their subfolders

USAGE:
    rv [OPTIONS] [PATH]
    rv rename [OPTIONS] <PATH> <PATTERN> [REPLACEMENT]

OPTIONS:
    -a, --hidden        Show hidden files
    --no-hidden         Hide hidden files (default)
    -l, --literal       rename: match PATTERN as plain text instead of a regex
    -y, --yes           rename: apply without asking
    -h, --help          Show this help message
    -V, --version       Show version

REPLACEMENT may use regex groups: $1, ${{name}}, $$ for a literal dollar.

CONFIG FILE:
    ~/.config/renview/config.toml

ENVIRONMENT:
    RENVIEW_LOG         Log filter (e.g. debug, renview=trace)

BROWSER KEYS:
    j/↓  k/↑        Move
    g/G, PgUp/PgDn  Jump
    l/→             Enter folder
    h/←/BS          Parent folder
    Enter           Folder actions (rename children, properties, ...)
    q/Esc           Quit

RENAME EDITOR KEYS:
    Tab/Shift+Tab   Switch between pattern, replacement and preview
    ↑/↓             Move between fields, scroll the preview
    F2, Ctrl+R      Toggle regex / literal matching
    Ctrl+U          Clear field
    Enter           Apply
    Esc             Cancel
    F1              Help

EXIT CODES:
    0           Success (nothing failed)
    1           A rename failed or PATH does not exist
    2           Error (runtime error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_browse_defaults_to_cwd() {
        let config = Config::parse(args(&[]), ConfigFile::default()).unwrap();
        let Command::Browse { root } = config.command else {
            panic!("expected browse");
        };
        assert_eq!(root, env::current_dir().unwrap());
        assert!(!config.settings.show_hidden);
    }

    #[test]
    fn test_browse_path_and_hidden_override() {
        let temp = TempDir::new().unwrap();
        let mut file = ConfigFile::default();
        file.general.show_hidden = true;
        let path = temp.path().display().to_string();

        let config = Config::parse(args(&["--no-hidden", &path]), file).unwrap();
        assert_eq!(
            config.command,
            Command::Browse {
                root: temp.path().canonicalize().unwrap()
            }
        );
        assert!(!config.settings.show_hidden);
    }

    #[test]
    fn test_browse_rejects_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing").display().to_string();
        assert!(Config::parse(args(&[&missing]), ConfigFile::default()).is_err());
    }

    #[test]
    fn test_rename_command() {
        let config = Config::parse(
            args(&["rename", "/photos", "^IMG_", "-y", "--literal"]),
            ConfigFile::default(),
        )
        .unwrap();
        assert_eq!(
            config.command,
            Command::Rename {
                path: PathBuf::from("/photos"),
                pattern: "^IMG_".to_string(),
                replacement: String::new(),
                mode: MatchMode::Literal,
                assume_yes: true,
            }
        );
    }

    #[test]
    fn test_rename_mode_from_config() {
        let mut file = ConfigFile::default();
        file.rename.literal = true;
        let config = Config::parse(args(&["rename", "p", "a", "b"]), file).unwrap();
        assert!(matches!(
            config.command,
            Command::Rename {
                mode: MatchMode::Literal,
                ..
            }
        ));
        assert_eq!(config.settings.rename.mode, MatchMode::Literal);
    }

    #[test]
    fn test_invalid_arguments() {
        let file = ConfigFile::default;
        assert!(Config::parse(args(&["--bogus"]), file()).is_err());
        assert!(Config::parse(args(&["rename", "p"]), file()).is_err());
        assert!(Config::parse(args(&["rename", "p", "  "]), file()).is_err());
        assert!(Config::parse(args(&["rename", "p", "a", "b", "c"]), file()).is_err());
        assert!(Config::parse(args(&["--yes"]), file()).is_err());
    }

    #[test]
    fn test_help_and_version() {
        let file = ConfigFile::default;
        assert_eq!(
            Config::parse(args(&["-h"]), file()).unwrap().command,
            Command::Help
        );
        assert_eq!(
            Config::parse(args(&["rename", "-V"]), file()).unwrap().command,
            Command::Version
        );
    }
}

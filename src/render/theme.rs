//! Theme configuration and color management
//!
//! Colors come from the `[theme]` section of `~/.config/renview/config.toml`

use ratatui::style::{Color, Modifier, Style};

use crate::app::config_file::ThemeColors;

/// Parsed theme with ratatui Color values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Borders of the focused panel, titles
    pub accent: Color,
    /// Matched text in the preview
    pub highlight: Color,
    /// Conflicts and errors
    pub conflict: Color,
    /// Secondary text (hints, unchanged names)
    pub muted: Color,
    /// Directory names in listings
    pub directory: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&ThemeColors::default())
    }
}

impl Theme {
    /// Create theme from the config section
    pub fn from_colors(colors: &ThemeColors) -> Self {
        Self {
            accent: parse_color(&colors.accent),
            highlight: parse_color(&colors.highlight),
            conflict: parse_color(&colors.conflict),
            muted: parse_color(&colors.muted),
            directory: Color::Blue,
        }
    }

    /// Style for the selected row of a list
    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }
}

/// Parse color string to ratatui Color
///
/// Supported formats:
/// - Named colors: "red", "blue", "green", etc.
/// - Hex colors: "#ff0000", "#f00"
/// - RGB: "rgb(255, 0, 0)"
/// - 256 colors: "color123" or "123"
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();

    if s == "default" || s == "reset" || s.is_empty() {
        return Color::Reset;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    if let Some(rgb) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_color(rgb);
    }

    if let Some(n) = s.strip_prefix("color") {
        if let Ok(n) = n.parse::<u8>() {
            return Color::Indexed(n);
        }
    }
    if let Ok(n) = s.parse::<u8>() {
        return Color::Indexed(n);
    }

    match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

/// Parse hex color (rgb or rrggbb, without the '#')
fn parse_hex_color(hex: &str) -> Color {
    if !hex.is_ascii() {
        return Color::Reset;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

    match hex.len() {
        3 => Color::Rgb(
            channel(&hex[0..1].repeat(2)),
            channel(&hex[1..2].repeat(2)),
            channel(&hex[2..3].repeat(2)),
        ),
        6 => Color::Rgb(channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
        _ => Color::Reset,
    }
}

/// Parse the inside of rgb(r, g, b)
fn parse_rgb_color(rgb: &str) -> Color {
    let parts: Vec<u8> = rgb
        .split(',')
        .map(|s| s.trim().parse::<u8>().unwrap_or(0))
        .collect();
    match parts.as_slice() {
        [r, g, b] => Color::Rgb(*r, *g, *b),
        _ => Color::Reset,
    }
}

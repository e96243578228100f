//! Color themes and ANSI escape helpers.
//!
//! Four Catppuccin flavours are built in; any other theme can be loaded from
//! a TOML file with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! focus_fg = "#1e1e2e"
//! focus_bg = "#f5c2e7"
//! label_fg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! error_fg = "#f38ba8"
//! success_fg = "#a6e3a1"
//! accent_fg = "#f9e2af"
//! ```

use crate::domain::{Result, ZformError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in theme names, default first.
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Focused field row.
    pub focus_fg: String,
    pub focus_bg: String,

    /// Field labels and summary labels.
    pub label_fg: String,

    pub text_normal: String,
    /// Footer, placeholders and scroll markers.
    pub text_dim: String,

    pub border: String,

    /// Inline field errors and error banners.
    pub error_fg: String,
    pub success_fg: String,

    /// Export status line.
    pub accent_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZformError::Theme`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ZformError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&contents).map_err(|e| ZformError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; malformed colors render as white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(u8::MAX)
        };
        if hex.len() == 6 {
            (channel(0..2), channel(2..4), channel(4..6))
        } else {
            (u8::MAX, u8::MAX, u8::MAX)
        }
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        #[allow(clippy::expect_used)]
        Self::from_name(BUILTIN_THEMES[0]).expect("built-in mocha theme parses")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses_under_its_name() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn escapes_encode_rgb() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("f5c2e7"), "\u{1b}[48;2;245;194;231m");
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(ZformError::Theme(_))));
        assert!(matches!(Theme::from_file(dir.path().join("missing.toml")), Err(ZformError::Theme(_))));
    }
}

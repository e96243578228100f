//! zform: a registration form for Zellij with live validation and exports.
//!
//! The plugin shows a ten-field form (names, email, contact number, gender,
//! subjects, resume attachment, URL, a single choice and free text). Every
//! edit is validated on the spot; submitting runs a stricter pass and either
//! freezes the record into a read-only summary or reports what is wrong.
//! From the summary the record can be exported as JSON or as a text document,
//! written by a background worker.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Keys to events
//! │  - Event handling, focus, drafts                    │  ← Side effects
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Form Engine   │   │ Worker Layer  │
//! │ (ui/)         │   │ (form/)       │   │ (worker/)     │
//! │ - Rendering   │   │ - Transitions │   │ - Exports     │
//! │ - Theming     │   │ - Validation  │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Validation, Export & Infrastructure        │
//! │  - Record model and errors (domain/)                │
//! │  - Field rules (validation/)                        │
//! │  - JSON and document exports (export/)              │
//! │  - Host paths and attachments (infrastructure/)     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zform.wasm" {
//!         theme "catppuccin-latte"
//!         export_dir "~/Documents/forms"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zform::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "Ada".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(actions.len(), 1); // rejected: a notification
//! assert!(!state.form.is_frozen());
//! # Ok::<(), zform::ZformError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Host files**: reached through Zellij's `/host` mount

pub mod app;
pub mod domain;
pub mod export;
pub mod form;
pub mod infrastructure;
pub mod validation;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, ZformError};
pub use ui::Theme;

use std::collections::BTreeMap;

const DEFAULT_TRACE_LEVEL: &str = "info";
const DEFAULT_EXPORT_DIR: &str = "~/zform-exports";

/// Plugin configuration from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/zform.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
///     export_dir "~/zform-exports"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `zform=trace`.
    pub trace_level: String,

    /// Where exports are written; `~` is the host home directory.
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            export_dir: DEFAULT_EXPORT_DIR.to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zform::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("export_dir".to_string(), "~/forms".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.export_dir, "~/forms");
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            let raw = config.get(key)?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                tracing::debug!(key, "blank configuration value, using default");
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
            export_dir: value("export_dir").unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string()),
        }
    }
}

/// Builds the initial application state: an empty form and the configured
/// theme. A theme file wins over a theme name; anything that fails to load
/// falls back to the default theme.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zform plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.export_dir.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_trimmed_and_blank_ones_ignored() {
        let config = Config::from_zellij(&map(&[
            ("theme", " catppuccin-latte "),
            ("theme_file", ""),
            ("export_dir", "   "),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file, None);
        assert_eq!(config.export_dir, DEFAULT_EXPORT_DIR);
        assert_eq!(config.trace_level, "debug");
    }

    #[test]
    fn initialize_uses_named_theme_and_export_dir() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            export_dir: "/tmp/out".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert_eq!(state.export_dir, "/tmp/out");
        assert!(!state.form.is_frozen());
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("nord".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let mut custom = Theme::default();
        custom.name = "mine".to_string();
        std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(path.display().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "mine");
    }
}

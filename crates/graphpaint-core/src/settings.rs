//! Editor display settings, stored as JSON.

use crate::theme::{Theme, ThemeProvider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Display settings read by the painters each frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Draw the reference grid
    pub show_grid: bool,
    /// Draw the details overlay
    pub show_debug: bool,
    /// Draw the details overlay even when debug output is off
    pub always_show_details: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Gray,
            show_grid: true,
            show_debug: true,
            always_show_details: false,
        }
    }
}

impl ThemeProvider for Settings {
    fn theme(&self) -> Theme {
        self.theme
    }
}

impl Settings {
    /// Whether the details overlay should be drawn.
    pub fn details_visible(&self) -> bool {
        self.show_debug || self.always_show_details
    }

    pub fn from_json(json: &str) -> SettingsResult<Self> {
        serde_json::from_str(json).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SettingsError::Serialization(e.to_string()))
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            SettingsError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Load settings, using defaults when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save settings as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| {
            SettingsError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Gray);
        assert!(settings.show_grid);
        assert!(settings.details_visible());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "theme": "white_paper" }"#).unwrap();
        assert_eq!(settings.theme, Theme::WhitePaper);
        assert!(settings.show_grid);
        assert!(!settings.always_show_details);
    }

    #[test]
    fn test_details_visible_flags() {
        let settings = Settings {
            show_debug: false,
            always_show_details: false,
            ..Settings::default()
        };
        assert!(!settings.details_visible());

        let settings = Settings {
            show_debug: false,
            always_show_details: true,
            ..Settings::default()
        };
        assert!(settings.details_visible());
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        for json in [r#"{ "theme": "macaron" }"#, r#"{ "theme": "" }"#] {
            let settings = Settings::from_json(json).unwrap();
            assert_eq!(settings.theme, Theme::Gray);
        }
        let settings = Settings::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, Theme::Gray);
    }

    #[test]
    fn test_invalid_json() {
        let result = Settings::from_json(r#"{ "theme": 5 }"#);
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
        let result = Settings::from_json("{ not json");
        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            theme: Theme::WhitePaper,
            show_grid: false,
            ..Settings::default()
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_provider_reads_current_theme() {
        let mut settings = Settings::default();
        assert_eq!(settings.theme(), Theme::Gray);
        settings.theme = settings.theme.next();
        assert_eq!(settings.theme(), Theme::WhitePaper);
    }
}

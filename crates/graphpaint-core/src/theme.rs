//! Editor color themes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::settings::SettingsError;

/// Color theme of the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Dark gray (#2B2B2B) background with light lines.
    #[default]
    Gray,
    /// White paper background with dark lines.
    WhitePaper,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Gray, Theme::WhitePaper];

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Theme::Gray => Theme::WhitePaper,
            Theme::WhitePaper => Theme::Gray,
        }
    }

    /// Serialized name of this theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Gray => "gray",
            Theme::WhitePaper => "white_paper",
        }
    }

    /// Parse a theme name, falling back to the default for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|e| {
            log::warn!("{e}, using {}", Theme::default());
            Theme::default()
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts any name `FromStr` does; unknown names fall back to the default.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Theme::from_name_or_default(&name))
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "gray_2b" | "dark" => Ok(Theme::Gray),
            "white_paper" | "light" => Ok(Theme::WhitePaper),
            _ => Err(SettingsError::UnknownTheme(s.to_string())),
        }
    }
}

/// Source of the currently active theme.
///
/// Painters read the theme through this on every call, so a provider backed
/// by mutable settings is picked up on the next frame.
pub trait ThemeProvider {
    fn theme(&self) -> Theme;
}

impl ThemeProvider for Theme {
    fn theme(&self) -> Theme {
        *self
    }
}

impl<T: ThemeProvider + ?Sized> ThemeProvider for &T {
    fn theme(&self) -> Theme {
        (**self).theme()
    }
}

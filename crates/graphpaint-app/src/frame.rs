//! Demo frame assembly.

use crate::dump::command_to_json;
use graphpaint_core::{Camera, Rectangle, Settings, SettingsError, Theme};
use graphpaint_render::{RecordingSurface, paint_frame, paint_rect_in_world};
use kurbo::Point;
use peniko::Color;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Output error: {0}")]
    Output(String),
}

/// Demo frame configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Settings JSON; defaults are used when absent or missing on disk
    pub settings_path: Option<PathBuf>,
    pub view_width: f64,
    pub view_height: f64,
    pub alert: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            view_width: 1280.0,
            view_height: 800.0,
            alert: None,
        }
    }
}

impl AppConfig {
    pub fn load_settings(&self) -> Result<Settings, AppError> {
        match &self.settings_path {
            Some(path) => Ok(Settings::load_or_default(path)?),
            None => Ok(Settings::default()),
        }
    }
}

/// Summary of a dumped frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub commands: usize,
    pub theme: Theme,
}

/// Node colors for the sample rectangle.
fn node_colors(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Gray => (
            Color::from_rgba8(43, 43, 43, 255),
            Color::from_rgba8(204, 204, 204, 255),
        ),
        Theme::WhitePaper => (
            Color::from_rgba8(255, 255, 255, 255),
            Color::from_rgba8(34, 34, 34, 255),
        ),
    }
}

/// Paint one frame: overlay layers plus a sample node rectangle.
pub fn render_frame(config: &AppConfig, settings: &Settings) -> RecordingSurface {
    let camera = Camera::new(config.view_width, config.view_height);
    let mut surface = RecordingSurface::new();

    let details = [
        String::new(),
        format!("scale: {:.2}", camera.current_scale),
        format!("location: {:.1}, {:.1}", camera.location.x, camera.location.y),
        format!("theme: {}", settings.theme),
    ];
    paint_frame(&mut surface, &camera, settings, &details, config.alert.as_deref());

    let (fill, stroke) = node_colors(settings.theme);
    let node = Rectangle::new(Point::new(-100.0, -50.0), 200.0, 100.0);
    paint_rect_in_world(&mut surface, &camera, &node, fill, stroke);

    surface
}

/// Paint a frame and write its draw calls as JSON lines.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<FrameReport, AppError> {
    let settings = config.load_settings()?;
    log::debug!("Painting frame with {:?}", settings);

    let mut surface = render_frame(config, &settings);
    let commands = surface.take_commands();
    for command in &commands {
        writeln!(out, "{}", command_to_json(command))
            .map_err(|e| AppError::Output(e.to_string()))?;
    }

    Ok(FrameReport {
        commands: commands.len(),
        theme: settings.theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_default_frame() {
        let surface = render_frame(&AppConfig::default(), &Settings::default());
        // 40 grid lines, 4 detail lines, 1 rectangle
        assert_eq!(surface.len(), 45);
        assert_eq!(surface.commands()[44].kind(), "rect");
    }

    #[test]
    fn test_run_writes_json_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            theme: Theme::WhitePaper,
            show_debug: false,
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let config = AppConfig {
            settings_path: Some(path),
            alert: Some("Hello".to_string()),
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();

        // 40 grid lines, alert, rectangle
        assert_eq!(report, FrameReport { commands: 42, theme: Theme::WhitePaper });
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 42);
        assert_eq!(lines[40]["kind"], "text_centered");
        assert_eq!(lines[0]["color"], serde_json::json!([0, 0, 0, 50]));
    }

    #[test]
    fn test_run_with_unset_theme_uses_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "theme": "", "show_grid": true }"#).unwrap();

        let config = AppConfig {
            settings_path: Some(path),
            ..AppConfig::default()
        };
        let report = run(&config, &mut Vec::new()).unwrap();
        assert_eq!(report.theme, Theme::Gray);
        assert_eq!(report.commands, 45);
    }

    #[test]
    fn test_run_rejects_broken_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = AppConfig {
            settings_path: Some(path),
            ..AppConfig::default()
        };
        let result = run(&config, &mut Vec::new());
        assert!(matches!(result, Err(AppError::Settings(SettingsError::Serialization(_)))));
    }
}

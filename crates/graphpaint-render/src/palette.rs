//! Theme-dependent colors.

use graphpaint_core::Theme;
use peniko::Color;

/// Translucent white used by the details overlay.
pub const DETAILS_COLOR: Color = Color::from_rgba8(255, 255, 255, 100);
/// Bright yellow used by alert messages.
pub const ALERT_COLOR: Color = Color::from_rgba8(255, 255, 0, 255);

/// Grid line colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct GridPalette {
    /// Regular grid lines
    pub line: Color,
    /// Axis lines through world x=0 / y=0
    pub main_line: Color,
}

impl GridPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Gray => Self {
                line: Color::from_rgba8(255, 255, 255, 50),
                main_line: Color::from_rgba8(255, 255, 255, 100),
            },
            Theme::WhitePaper => Self {
                line: Color::from_rgba8(0, 0, 0, 50),
                main_line: Color::from_rgba8(0, 0, 0, 100),
            },
        }
    }

    /// Color for a grid line at the given world coordinate.
    pub fn color_at(&self, coordinate: f64) -> Color {
        if coordinate == 0.0 { self.main_line } else { self.line }
    }
}

impl From<Theme> for GridPalette {
    fn from(theme: Theme) -> Self {
        Self::for_theme(theme)
    }
}

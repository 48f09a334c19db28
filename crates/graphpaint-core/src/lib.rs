//! graphpaint Core Library
//!
//! Platform-agnostic camera, geometry and theme settings shared by the
//! graphpaint painters.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod settings;
pub mod theme;

pub use camera::{Camera, DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
pub use error::{PaintError, PaintResult};
pub use geometry::{NumberVector, Rectangle};
pub use settings::{Settings, SettingsError, SettingsResult};
pub use theme::{Theme, ThemeProvider};

//! graphpaint Render Library
//!
//! Drawing surface abstraction and the painters that project world geometry
//! onto it through a camera. The default backend builds a Vello scene.

pub mod paint;
mod palette;
mod recording;
mod surface;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use paint::{
    paint_alert_message, paint_details_data, paint_frame, paint_grid, paint_rect_in_world,
    try_paint_grid, try_paint_rect_in_world,
};
pub use palette::{ALERT_COLOR, DETAILS_COLOR, GridPalette};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::Surface;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;

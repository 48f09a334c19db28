//! graphpaint Application
//!
//! Builds a demo frame from on-disk settings and serializes the resulting
//! draw calls.

mod cli;
mod dump;
mod frame;

pub use cli::Cli;
pub use dump::command_to_json;
pub use frame::{AppConfig, AppError, FrameReport, render_frame, run};

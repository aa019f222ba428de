//! dgen-render: output formats for a finished dungeon
//!
//! - [`text`]: one character pair per tile, for terminals
//! - [`json`]: row-major grid of material codes
//! - [`png`]: shaded tile image

pub mod json;
pub mod png;
pub mod text;

mod error;
mod options;

pub use error::RenderError;
pub use json::MaterialGrid;
pub use options::{DEFAULT_PIXEL_SIZE, MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, RenderOptions};

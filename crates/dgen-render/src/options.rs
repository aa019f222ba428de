//! Raster output options

use dgen_core::config::parse_bounded;
use serde::{Deserialize, Serialize};

pub const MIN_PIXEL_SIZE: u32 = 1;
pub const MAX_PIXEL_SIZE: u32 = 20;
pub const DEFAULT_PIXEL_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Side of one tile in pixels
    pub pixel_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }
}

impl RenderOptions {
    /// Options from an untrusted pixel size, falling back to the default
    /// when it is missing, malformed or out of range
    pub fn from_raw(pixel_size: Option<&str>) -> Self {
        let pixel_size = parse_bounded(
            pixel_size,
            DEFAULT_PIXEL_SIZE as usize,
            MIN_PIXEL_SIZE as usize,
            MAX_PIXEL_SIZE as usize,
        ) as u32;
        Self { pixel_size }
    }
}

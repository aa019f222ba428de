//! Generation parameters and the range policy applied to untrusted input
//!
//! The pipeline assumes sane sizes. Callers holding raw user input (query
//! strings, command-line flags) go through [`GenerationParams::from_raw`],
//! which replaces anything missing, unparsable or out of range with its
//! default. Callers building params by hand can use
//! [`GenerationParams::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_SIZE, DEFAULT_ROOM_ATTEMPTS,
    MAX_GRID_SIZE, MAX_ROOM_ATTEMPTS, MIN_GRID_SIZE, MIN_ROOM_ATTEMPTS,
};

/// Rejected generation parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("minimum room size must be at least 1")]
    ZeroRoomSize,

    #[error("maximum room size {max} must exceed minimum room size {min}")]
    RoomSizeOrder { min: usize, max: usize },
}

/// Inputs to one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    pub room_attempts: usize,
    pub min_room_size: usize,
    /// Exclusive upper bound on room side length
    pub max_room_size: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            room_attempts: DEFAULT_ROOM_ATTEMPTS,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
        }
    }
}

/// Unvalidated parameter values as they arrive from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pub width: Option<String>,
    pub height: Option<String>,
    pub room_attempts: Option<String>,
    pub min_room_size: Option<String>,
    pub max_room_size: Option<String>,
}

impl GenerationParams {
    /// Check the minimal contract of the pipeline
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size == 0 {
            return Err(ParamError::ZeroRoomSize);
        }
        if self.max_room_size <= self.min_room_size {
            return Err(ParamError::RoomSizeOrder {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        Ok(())
    }

    /// Largest room side the grid allows
    pub fn max_allowed_room_size(&self) -> usize {
        self.width.min(self.height).saturating_sub(2)
    }

    /// Apply the input policy to raw values
    ///
    /// Room size bounds depend on the already resolved grid size, and the
    /// maximum room size defaults to one more than the resolved minimum.
    pub fn from_raw(raw: &RawParams) -> Self {
        let width = parse_bounded(
            raw.width.as_deref(),
            DEFAULT_GRID_SIZE,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE,
        );
        let height = parse_bounded(
            raw.height.as_deref(),
            DEFAULT_GRID_SIZE,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE,
        );
        let max_allowed = width.min(height) - 2;

        let room_attempts = parse_bounded(
            raw.room_attempts.as_deref(),
            DEFAULT_ROOM_ATTEMPTS,
            MIN_ROOM_ATTEMPTS,
            MAX_ROOM_ATTEMPTS,
        );
        let min_room_size = parse_bounded(
            raw.min_room_size.as_deref(),
            DEFAULT_MIN_ROOM_SIZE,
            1,
            max_allowed,
        );
        let max_room_size = parse_bounded(
            raw.max_room_size.as_deref(),
            min_room_size + 1,
            min_room_size + 1,
            max_allowed,
        );

        Self {
            width,
            height,
            room_attempts,
            min_room_size,
            max_room_size,
        }
    }
}

/// Parse an integer option, falling back to `default` when the value is
/// missing, malformed or outside `min..=max`
pub fn parse_bounded(value: Option<&str>, default: usize, min: usize, max: usize) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| (min..=max).contains(v))
        .unwrap_or(default)
}

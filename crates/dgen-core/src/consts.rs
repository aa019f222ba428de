//! Layout constants and the accepted parameter ranges

/// Tiles left free between any room and the grid border
pub const ROOM_MARGIN: usize = 3;

/// Grid dimensions accepted from callers
pub const MIN_GRID_SIZE: usize = 20;
pub const MAX_GRID_SIZE: usize = 1000;
pub const DEFAULT_GRID_SIZE: usize = 50;

/// Room placement trials accepted from callers
pub const MIN_ROOM_ATTEMPTS: usize = 1;
pub const MAX_ROOM_ATTEMPTS: usize = 100_000;
pub const DEFAULT_ROOM_ATTEMPTS: usize = 200;

/// Room side lengths used when the caller gives none
pub const DEFAULT_MIN_ROOM_SIZE: usize = 5;
pub const DEFAULT_MAX_ROOM_SIZE: usize = 15;

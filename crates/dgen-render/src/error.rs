use thiserror::Error;

/// Errors raised while encoding or decoding dungeon output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unknown material code {0}")]
    UnknownMaterial(i64),

    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid has no tiles")]
    EmptyGrid,
}

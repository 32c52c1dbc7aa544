//! Error types for the tile map mesher.

use thiserror::Error;

/// Result type alias using TileMesherError.
pub type Result<T> = std::result::Result<T, TileMesherError>;

/// Main error type for tile meshing operations.
///
/// Atlas lookup misses are not errors: they are collected as
/// [`AtlasMiss`](crate::mesher::AtlasMiss) values and meshing continues.
#[derive(Error, Debug)]
pub enum TileMesherError {
    /// Tile size was zero or negative.
    #[error("Invalid tile size {0}: must be a positive number of pixels")]
    InvalidTileSize(i64),

    /// Failed to read or decode an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to format text output.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Failed to export mesh.
    #[error("Export error: {0}")]
    Export(String),
}

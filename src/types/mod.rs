//! Shared types used throughout the library.

mod region;

pub use region::{RectangleRegion, TileSpan};

use std::fmt;

/// A tile position on the map grid (row from the top, column from the left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub row: u32,
    pub col: u32,
}

impl TileCoord {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Pixel origin (top-left) of this tile for the given tile size.
    pub fn pixel_origin(&self, tile_size: u32) -> (u32, u32) {
        (self.col * tile_size, self.row * tile_size)
    }

    /// This position shifted down and right by `origin`.
    pub fn offset_by(&self, origin: TileCoord) -> Self {
        Self::new(self.row + origin.row, self.col + origin.col)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

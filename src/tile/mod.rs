//! Tile sampling from images.
//!
//! A [`TileGridSource`] exposes an image's dimensions and cuts square
//! pixel blocks out of it. [`tiles`] walks such a source on a regular grid.

mod source;
mod texture;

pub use source::{load_image, CroppedSource};
pub use texture::{TileData, TileFingerprint};

use crate::types::TileCoord;

/// Anything tiles can be sampled from.
pub trait TileGridSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Cut the `size`x`size` pixel block whose top-left corner is at (x, y).
    fn tile_at(&self, x: u32, y: u32, size: u32) -> TileData;

    /// Number of whole tiles along each axis as `(rows, cols)`.
    ///
    /// Partial tiles along the right and bottom edges are not counted.
    fn grid_dimensions(&self, tile_size: u32) -> (u32, u32) {
        (self.height() / tile_size, self.width() / tile_size)
    }
}

/// One tile visited while walking a source.
#[derive(Debug, Clone)]
pub struct GridTile {
    /// Grid position.
    pub coord: TileCoord,
    /// Pixel x of the top-left corner.
    pub x: u32,
    /// Pixel y of the top-left corner.
    pub y: u32,
    /// The tile's pixels.
    pub data: TileData,
}

/// Walk every whole tile of a source in row-major order.
///
/// Each call starts a fresh walk, so the same source can be scanned any
/// number of times.
pub fn tiles<S: TileGridSource + ?Sized>(
    source: &S,
    tile_size: u32,
) -> impl Iterator<Item = GridTile> + '_ {
    let (rows, cols) = source.grid_dimensions(tile_size);
    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            let coord = TileCoord::new(row, col);
            let (x, y) = coord.pixel_origin(tile_size);
            GridTile {
                coord,
                x,
                y,
                data: source.tile_at(x, y, tile_size),
            }
        })
    })
}

/// Walk only the tiles that have at least one visible pixel.
pub fn occupied_tiles<S: TileGridSource + ?Sized>(
    source: &S,
    tile_size: u32,
) -> impl Iterator<Item = GridTile> + '_ {
    tiles(source, tile_size).filter(|tile| !tile.data.is_empty())
}

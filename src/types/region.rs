//! Rectangular regions in tile and pixel space.

use super::TileCoord;
use serde::{Deserialize, Serialize};

/// An inclusive rectangle of tiles on the map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSpan {
    pub row_min: u32,
    pub col_min: u32,
    pub row_max: u32,
    pub col_max: u32,
}

impl TileSpan {
    /// The smallest span containing both tiles, in any corner order.
    pub fn spanning(a: TileCoord, b: TileCoord) -> Self {
        Self {
            row_min: a.row.min(b.row),
            col_min: a.col.min(b.col),
            row_max: a.row.max(b.row),
            col_max: a.col.max(b.col),
        }
    }

    pub fn rows(&self) -> u32 {
        self.row_max - self.row_min + 1
    }

    pub fn cols(&self) -> u32 {
        self.col_max - self.col_min + 1
    }

    /// Number of tiles covered.
    pub fn area(&self) -> u32 {
        self.rows() * self.cols()
    }

    /// Iterate the covered tiles in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
        (self.row_min..=self.row_max)
            .flat_map(move |row| (self.col_min..=self.col_max).map(move |col| TileCoord::new(row, col)))
    }
}

/// An axis-aligned, tile-aligned box in pixel coordinates.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectangleRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl RectangleRegion {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Convert an inclusive tile span into pixel space.
    pub fn from_span(span: TileSpan, tile_size: u32) -> Self {
        Self {
            left: span.col_min * tile_size,
            top: span.row_min * tile_size,
            right: (span.col_max + 1) * tile_size,
            bottom: (span.row_max + 1) * tile_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// The tiles covered by this region.
    pub fn tile_span(&self, tile_size: u32) -> TileSpan {
        TileSpan {
            row_min: self.top / tile_size,
            col_min: self.left / tile_size,
            row_max: self.bottom / tile_size - 1,
            col_max: self.right / tile_size - 1,
        }
    }

    /// Check whether two regions share any pixel.
    pub fn overlaps(&self, other: &RectangleRegion) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Translation that moves a mesh built from this region (centered on the
    /// region) to where the same tiles sit in a mesh of the whole map.
    pub fn center_offset(&self, map_width: u32, map_height: u32, mirror_x: bool) -> [f64; 3] {
        let dx = self.left as f64 + self.width() as f64 / 2.0 - map_width as f64 / 2.0;
        let dy = map_height as f64 / 2.0 - self.top as f64 - self.height() as f64 / 2.0;
        [if mirror_x { -dx } else { dx }, dy, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_any_corner_order() {
        let a = TileSpan::spanning(TileCoord::new(3, 1), TileCoord::new(1, 4));
        let b = TileSpan::spanning(TileCoord::new(1, 4), TileCoord::new(3, 1));
        assert_eq!(a, b);
        assert_eq!(a.rows(), 3);
        assert_eq!(a.cols(), 4);
        assert_eq!(a.area(), 12);
    }

    #[test]
    fn test_span_coords_row_major() {
        let span = TileSpan::spanning(TileCoord::new(0, 0), TileCoord::new(1, 1));
        let coords: Vec<_> = span.coords().collect();
        assert_eq!(
            coords,
            vec![
                TileCoord::new(0, 0),
                TileCoord::new(0, 1),
                TileCoord::new(1, 0),
                TileCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_region_from_span_round_trips() {
        let span = TileSpan::spanning(TileCoord::new(1, 2), TileCoord::new(2, 5));
        let region = RectangleRegion::from_span(span, 16);
        assert_eq!(region, RectangleRegion::new(32, 16, 96, 48));
        assert_eq!(region.width(), 64);
        assert_eq!(region.height(), 32);
        assert_eq!(region.tile_span(16), span);
    }

    #[test]
    fn test_overlaps() {
        let a = RectangleRegion::new(0, 0, 32, 16);
        let b = RectangleRegion::new(32, 0, 48, 16);
        let c = RectangleRegion::new(16, 0, 48, 32);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_center_offset() {
        // Right half of a 64x32 map.
        let region = RectangleRegion::new(32, 0, 64, 32);
        assert_eq!(region.center_offset(64, 32, false), [16.0, 0.0, 0.0]);
        assert_eq!(region.center_offset(64, 32, true), [-16.0, 0.0, 0.0]);

        // Top-left tile of a 32x32 map.
        let region = RectangleRegion::new(0, 0, 16, 16);
        assert_eq!(region.center_offset(32, 32, false), [-8.0, 8.0, 0.0]);
    }
}

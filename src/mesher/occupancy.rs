//! Tile-resolution occupancy grid.

use crate::tile::{occupied_tiles, TileGridSource};
use crate::types::{TileCoord, TileSpan};
use std::fmt;

/// Which tiles of a map have visible pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: u32,
    cols: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-empty grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; (rows * cols) as usize],
        }
    }

    /// Mark every non-empty whole tile of a source.
    pub fn from_source<S: TileGridSource + ?Sized>(source: &S, tile_size: u32) -> Self {
        let (rows, cols) = source.grid_dimensions(tile_size);
        let mut grid = Self::new(rows, cols);
        for tile in occupied_tiles(source, tile_size) {
            grid.set(tile.coord, true);
        }
        grid
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    fn index(&self, coord: TileCoord) -> usize {
        (coord.row * self.cols + coord.col) as usize
    }

    /// Whether a cell is filled. Out-of-range cells read as empty.
    pub fn is_filled(&self, coord: TileCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols && self.cells[self.index(coord)]
    }

    pub fn set(&mut self, coord: TileCoord, filled: bool) {
        let idx = self.index(coord);
        self.cells[idx] = filled;
    }

    /// Clear every cell inside a span.
    pub fn clear_span(&mut self, span: TileSpan) {
        for coord in span.coords() {
            self.set(coord, false);
        }
    }

    /// True if every cell inside the span is filled.
    pub fn is_span_full(&self, span: TileSpan) -> bool {
        span.coords().all(|coord| self.is_filled(coord))
    }

    /// Filled cells in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = TileCoord> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| TileCoord::new(row, col)))
            .filter(move |&coord| self.is_filled(coord))
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&cell| cell)
    }
}

/// Renders as rows of `#` (filled) and `.` (empty).
impl fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = if self.is_filled(TileCoord::new(row, col)) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_from_source() {
        let mut img = RgbaImage::new(48, 32);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(47, 31, Rgba([0, 0, 0, 1]));

        let grid = OccupancyGrid::from_source(&img, 16);
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(format!("{:?}", grid), "#..\n..#\n");
        assert_eq!(grid.filled().count(), 2);
    }

    #[test]
    fn test_partial_tiles_ignored() {
        // The only visible pixel lives in the partial column.
        let mut img = RgbaImage::new(20, 16);
        img.put_pixel(18, 4, Rgba([0, 0, 0, 255]));

        let grid = OccupancyGrid::from_source(&img, 16);
        assert_eq!((grid.rows(), grid.cols()), (1, 1));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_span_queries() {
        let mut grid = OccupancyGrid::new(2, 2);
        grid.set(TileCoord::new(0, 0), true);
        grid.set(TileCoord::new(0, 1), true);
        grid.set(TileCoord::new(1, 1), true);

        let top = TileSpan::spanning(TileCoord::new(0, 0), TileCoord::new(0, 1));
        let all = TileSpan::spanning(TileCoord::new(0, 0), TileCoord::new(1, 1));
        assert!(grid.is_span_full(top));
        assert!(!grid.is_span_full(all));

        grid.clear_span(top);
        let filled: Vec<_> = grid.filled().collect();
        assert_eq!(filled, vec![TileCoord::new(1, 1)]);
    }

    #[test]
    fn test_out_of_range_reads_empty() {
        let grid = OccupancyGrid::new(1, 1);
        assert!(!grid.is_filled(TileCoord::new(3, 0)));
    }
}

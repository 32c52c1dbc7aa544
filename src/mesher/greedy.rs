//! Greedy rectangle decomposition of an occupancy grid.
//!
//! Splits the filled cells of a tile map into axis-aligned rectangles with
//! no holes, which downstream tools use as simplified collision geometry.
//!
//! This is a heuristic. Scanning in row-major order, the first unclaimed
//! filled cell is grown into the largest full rectangle that has it as a
//! corner, that rectangle is claimed, and the scan resumes. The result is
//! order-dependent and not guaranteed to use the fewest rectangles.

use super::occupancy::OccupancyGrid;
use crate::types::{RectangleRegion, TileCoord, TileSpan};

/// Greedy partitioner over a working copy of an occupancy grid.
pub struct RectangleDecomposer {
    grid: OccupancyGrid,
    tile_size: u32,
}

impl RectangleDecomposer {
    pub fn new(grid: &OccupancyGrid, tile_size: u32) -> Self {
        Self {
            grid: grid.clone(),
            tile_size,
        }
    }

    /// Claim rectangles until no filled cell remains. Regions are returned
    /// in pixel space, in the order they were claimed.
    pub fn decompose(mut self) -> Vec<RectangleRegion> {
        let mut regions = Vec::new();

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let anchor = TileCoord::new(row, col);
                if !self.grid.is_filled(anchor) {
                    continue;
                }

                let span = self.largest_full_span(anchor);
                self.grid.clear_span(span);
                regions.push(RectangleRegion::from_span(span, self.tile_size));
            }
        }

        log::debug!("Decomposed tile map into {} rectangles", regions.len());
        regions
    }

    /// The largest hole-free span with `anchor` at one corner and any filled
    /// cell at the opposite corner. Equal areas keep the first one found.
    fn largest_full_span(&self, anchor: TileCoord) -> TileSpan {
        let mut best = TileSpan::spanning(anchor, anchor);

        for corner in self.grid.filled() {
            let span = TileSpan::spanning(anchor, corner);
            if span.area() > best.area() && self.grid.is_span_full(span) {
                best = span;
            }
        }

        best
    }
}

/// Decompose the filled cells of a grid into rectangles.
pub fn decompose(grid: &OccupancyGrid, tile_size: u32) -> Vec<RectangleRegion> {
    RectangleDecomposer::new(grid, tile_size).decompose()
}

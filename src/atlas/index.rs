//! Content-addressed atlas index.

use crate::tile::{occupied_tiles, GridTile, TileFingerprint, TileGridSource};
use glam::DVec2;
use std::collections::HashMap;

/// Texture coordinates for one distinct tile in the atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasEntry {
    /// 1-based texcoord index of the first corner. The four corners use
    /// `index_base..index_base + 4`.
    pub index_base: u32,
    /// UV corners in the order bottom-left, top-left, top-right, bottom-right.
    pub uv: [[f64; 2]; 4],
}

/// Mapping from tile fingerprint to its atlas entry.
///
/// Built once by [`AtlasIndexer`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtlasIndex {
    entries: HashMap<TileFingerprint, AtlasEntry>,
}

impl AtlasIndex {
    /// Index every distinct tile of an atlas image.
    pub fn build<S: TileGridSource + ?Sized>(atlas: &S, tile_size: u32) -> Self {
        let mut indexer = AtlasIndexer::new(atlas.width(), atlas.height(), tile_size);
        for tile in occupied_tiles(atlas, tile_size) {
            indexer.add_tile(&tile);
        }
        indexer.build()
    }

    /// Look up the entry for a fingerprint.
    pub fn get(&self, fingerprint: &TileFingerprint) -> Option<&AtlasEntry> {
        self.entries.get(fingerprint)
    }

    /// Number of distinct tiles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending `index_base` order, i.e. first-encounter order.
    pub fn sorted_entries(&self) -> Vec<&AtlasEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.index_base);
        entries
    }

    /// Total number of texcoords (four per entry).
    pub fn texcoord_count(&self) -> usize {
        self.entries.len() * 4
    }
}

/// Incrementally assigns atlas entries to tiles in visiting order.
pub struct AtlasIndexer {
    atlas_width: f64,
    atlas_height: f64,
    tile_size: f64,
    next_index_base: u32,
    entries: HashMap<TileFingerprint, AtlasEntry>,
}

impl AtlasIndexer {
    /// Create an indexer for an atlas of the given pixel dimensions.
    pub fn new(atlas_width: u32, atlas_height: u32, tile_size: u32) -> Self {
        Self {
            atlas_width: atlas_width as f64,
            atlas_height: atlas_height as f64,
            tile_size: tile_size as f64,
            next_index_base: 1,
            entries: HashMap::new(),
        }
    }

    /// Record a tile. Returns `true` if it was new; repeated graphics keep
    /// the entry from their first occurrence.
    pub fn add_tile(&mut self, tile: &GridTile) -> bool {
        let fingerprint = tile.data.fingerprint();
        if self.entries.contains_key(&fingerprint) {
            return false;
        }

        let entry = AtlasEntry {
            index_base: self.next_index_base,
            uv: self.uv_quad(tile.x, tile.y),
        };
        self.entries.insert(fingerprint, entry);
        self.next_index_base += 4;
        true
    }

    /// UV corners for the tile whose top-left pixel is (x, y).
    /// Image space is Y-down, texture space Y-up.
    fn uv_quad(&self, x: u32, y: u32) -> [[f64; 2]; 4] {
        let origin = DVec2::new(
            x as f64 / self.atlas_width,
            1.0 - y as f64 / self.atlas_height,
        );
        let du = self.tile_size / self.atlas_width;
        let dv = self.tile_size / self.atlas_height;

        let top_left = origin;
        let bottom_left = origin - DVec2::new(0.0, dv);
        let top_right = origin + DVec2::new(du, 0.0);
        let bottom_right = DVec2::new(origin.x + du, origin.y - dv);

        [
            bottom_left.to_array(),
            top_left.to_array(),
            top_right.to_array(),
            bottom_right.to_array(),
        ]
    }

    /// Freeze the index.
    pub fn build(self) -> AtlasIndex {
        log::debug!(
            "Indexed {} distinct atlas tiles ({} texcoords)",
            self.entries.len(),
            self.entries.len() * 4
        );
        AtlasIndex {
            entries: self.entries,
        }
    }
}

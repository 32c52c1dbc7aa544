//! Convert map tiles to mesh geometry.

use crate::atlas::AtlasIndex;
use crate::mesher::geometry::Mesh;
use crate::mesher::{AtlasMiss, MesherConfig};
use crate::tile::GridTile;
use crate::types::TileCoord;
use glam::DVec3;

/// Builds a mesh from the non-empty tiles of one map image.
///
/// Every tile handed to [`add_tile`](MeshBuilder::add_tile) gets four
/// vertices, so the n-th tile always owns vertices `4n-3..=4n`. Faces are
/// only emitted for tiles whose graphic is found in the atlas.
pub struct MeshBuilder<'a> {
    atlas: &'a AtlasIndex,
    config: &'a MesherConfig,
    /// Half the map size in pixels; the mesh is centered on the map.
    half_extent: DVec3,
    /// Map grid position of the source's top-left tile, for miss reports.
    grid_origin: TileCoord,
    mesh: Mesh,
    /// 1-based index of the last vertex emitted.
    vertex_count: u32,
    tile_count: usize,
    misses: Vec<AtlasMiss>,
}

impl<'a> MeshBuilder<'a> {
    pub fn new(
        atlas: &'a AtlasIndex,
        config: &'a MesherConfig,
        map_width: u32,
        map_height: u32,
    ) -> Self {
        Self {
            atlas,
            config,
            half_extent: DVec3::new(map_width as f64 / 2.0, map_height as f64 / 2.0, 0.0),
            grid_origin: TileCoord::new(0, 0),
            mesh: Mesh::new(),
            vertex_count: 0,
            tile_count: 0,
            misses: Vec::new(),
        }
    }

    /// Report misses relative to this map grid position, for sources that
    /// are a window onto a larger map.
    pub fn with_grid_origin(mut self, origin: TileCoord) -> Self {
        self.grid_origin = origin;
        self
    }

    /// Add a non-empty tile to the mesh.
    pub fn add_tile(&mut self, tile: &GridTile) {
        for position in self.quad_positions(tile.x, tile.y) {
            self.mesh.add_vertex(position);
        }
        self.vertex_count += 4;
        self.tile_count += 1;

        match self.atlas.get(&tile.data.fingerprint()) {
            Some(entry) => self.mesh.add_quad(self.vertex_count, entry.index_base),
            None => {
                let coord = tile.coord.offset_by(self.grid_origin);
                log::warn!("Unable to find tile in atlas {}", coord);
                self.misses.push(AtlasMiss { coord });
            }
        }
    }

    /// Corner positions in the order bottom-left, top-left, top-right,
    /// bottom-right. Image Y-down becomes mesh Y-up.
    fn quad_positions(&self, x: u32, y: u32) -> [[f64; 3]; 4] {
        let s = self.config.tile_size as f64;
        let (x, y) = (x as f64, y as f64);

        let corners = [
            DVec3::new(x, -(y + s), 0.0),
            DVec3::new(x, -y, 0.0),
            DVec3::new(x + s, -y, 0.0),
            DVec3::new(x + s, -(y + s), 0.0),
        ];

        let flip = if self.config.mirror_x {
            DVec3::new(-1.0, 1.0, 1.0)
        } else {
            DVec3::ONE
        };
        let offset = DVec3::new(-self.half_extent.x, self.half_extent.y, 0.0);

        corners.map(|corner| ((corner + offset) * flip).to_array())
    }

    /// Finish building.
    pub fn build(self) -> (Mesh, usize, Vec<AtlasMiss>) {
        (self.mesh, self.tile_count, self.misses)
    }
}

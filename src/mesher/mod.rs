//! Mesh generation from tile maps.
//!
//! This module converts the non-empty tiles of a map image into textured
//! quads, and splits a map's footprint into rectangles.

pub mod builder;
pub mod geometry;
pub mod greedy;
pub mod occupancy;

pub use geometry::{Face, FaceCorner, Mesh};
pub use greedy::{decompose, RectangleDecomposer};
pub use occupancy::OccupancyGrid;

use crate::atlas::AtlasIndex;
use crate::error::{Result, TileMesherError};
use crate::tile::{occupied_tiles, CroppedSource, TileGridSource};
use crate::types::{RectangleRegion, TileCoord};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Main mesher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesherConfig {
    /// Tile edge length in pixels.
    pub tile_size: u32,
    /// Negate the X axis of emitted vertices, for consumers with the
    /// opposite handedness.
    pub mirror_x: bool,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            mirror_x: false,
        }
    }
}

impl MesherConfig {
    /// Create config from an unchecked tile size, as typed by a user.
    pub fn from_raw_tile_size(tile_size: i64) -> Result<Self> {
        Ok(Self::default().with_tile_size(validate_tile_size(tile_size)?))
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_mirror_x(mut self, mirror_x: bool) -> Self {
        self.mirror_x = mirror_x;
        self
    }
}

/// Reject tile sizes that are not a positive pixel count.
pub fn validate_tile_size(tile_size: i64) -> Result<u32> {
    match u32::try_from(tile_size) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(TileMesherError::InvalidTileSize(tile_size)),
    }
}

/// A map tile whose graphic is not in the atlas.
///
/// The tile still gets its four vertices but no faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasMiss {
    pub coord: TileCoord,
}

/// Output from the mesher.
#[derive(Debug, Clone, Default)]
pub struct MesherOutput {
    /// The generated mesh.
    pub mesh: Mesh,
    /// Number of non-empty tiles visited.
    pub tile_count: usize,
    /// Tiles that were not found in the atlas, in visiting order.
    pub misses: Vec<AtlasMiss>,
}

impl MesherOutput {
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Check if every visited tile was textured.
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }
}

/// Mesh for one region of a decomposed map.
#[derive(Debug, Clone)]
pub struct RegionMesh {
    /// Where the region sits in the map, in pixels.
    pub region: RectangleRegion,
    /// Mesh of the region, centered on the region itself.
    pub output: MesherOutput,
}

/// The main mesher struct.
pub struct Mesher {
    atlas: AtlasIndex,
    config: MesherConfig,
}

impl Mesher {
    /// Create a new mesher with default configuration.
    pub fn new(atlas: AtlasIndex) -> Self {
        Self {
            atlas,
            config: MesherConfig::default(),
        }
    }

    /// Create a new mesher with custom configuration.
    pub fn with_config(atlas: AtlasIndex, config: MesherConfig) -> Self {
        Self { atlas, config }
    }

    /// Get a reference to the atlas index.
    pub fn atlas(&self) -> &AtlasIndex {
        &self.atlas
    }

    /// Generate a mesh from every non-empty tile of a map.
    pub fn mesh<S: TileGridSource + ?Sized>(&self, map: &S) -> MesherOutput {
        self.mesh_from(map, TileCoord::new(0, 0))
    }

    /// Mesh a source whose top-left tile sits at `grid_origin` on the map.
    fn mesh_from<S: TileGridSource + ?Sized>(&self, map: &S, grid_origin: TileCoord) -> MesherOutput {
        let mut mesh_builder =
            builder::MeshBuilder::new(&self.atlas, &self.config, map.width(), map.height())
                .with_grid_origin(grid_origin);

        for tile in occupied_tiles(map, self.config.tile_size) {
            mesh_builder.add_tile(&tile);
        }

        let (mesh, tile_count, misses) = mesh_builder.build();
        log::debug!(
            "Meshed {} tiles: {} vertices, {} triangles, {} atlas misses",
            tile_count,
            mesh.vertex_count(),
            mesh.triangle_count(),
            misses.len()
        );

        MesherOutput {
            mesh,
            tile_count,
            misses,
        }
    }

    /// Occupancy of a map at this mesher's tile size.
    pub fn occupancy<S: TileGridSource + ?Sized>(&self, map: &S) -> OccupancyGrid {
        OccupancyGrid::from_source(map, self.config.tile_size)
    }

    /// Split a map into filled rectangles.
    pub fn decompose<S: TileGridSource + ?Sized>(&self, map: &S) -> Vec<RectangleRegion> {
        decompose(&self.occupancy(map), self.config.tile_size)
    }

    /// Mesh each region of a map independently.
    pub fn mesh_regions<S: TileGridSource + ?Sized>(
        &self,
        map: &S,
        regions: &[RectangleRegion],
    ) -> Vec<RegionMesh> {
        regions
            .iter()
            .map(|&region| {
                let span = region.tile_span(self.config.tile_size);
                let origin = TileCoord::new(span.row_min, span.col_min);
                RegionMesh {
                    region,
                    output: self.mesh_from(&CroppedSource::new(map, region), origin),
                }
            })
            .collect()
    }

    /// Decompose a map and mesh every region.
    pub fn mesh_decomposed<S: TileGridSource + ?Sized>(&self, map: &S) -> Vec<RegionMesh> {
        let regions = self.decompose(map);
        self.mesh_regions(map, &regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn paint_tile(img: &mut RgbaImage, col: u32, row: u32, color: [u8; 4]) {
        for y in row * 16..(row + 1) * 16 {
            for x in col * 16..(col + 1) * 16 {
                img.put_pixel(x, y, Rgba(color));
            }
        }
    }

    #[test]
    fn test_validate_tile_size() {
        assert_eq!(validate_tile_size(16).unwrap(), 16);
        assert!(matches!(
            validate_tile_size(0),
            Err(TileMesherError::InvalidTileSize(0))
        ));
        assert!(matches!(
            validate_tile_size(-8),
            Err(TileMesherError::InvalidTileSize(-8))
        ));
        assert!(validate_tile_size(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = MesherConfig::from_raw_tile_size(8).unwrap().with_mirror_x(true);
        assert_eq!(config.tile_size, 8);
        assert!(config.mirror_x);
        assert_eq!(MesherConfig::default().tile_size, DEFAULT_TILE_SIZE);
    }

    #[test]
    fn test_single_tile_found_in_atlas() {
        let atlas_img = RgbaImage::from_pixel(16, 16, Rgba([200, 100, 50, 255]));
        let map = atlas_img.clone();

        let mesher = Mesher::new(AtlasIndex::build(&atlas_img, 16));
        let output = mesher.mesh(&map);

        assert_eq!(output.tile_count, 1);
        assert_eq!(output.vertex_count(), 4);
        assert_eq!(output.triangle_count(), 2);
        assert!(output.is_complete());
        assert_eq!(
            output.mesh.faces[0],
            [FaceCorner::new(1, 1), FaceCorner::new(2, 2), FaceCorner::new(3, 3)]
        );
        assert_eq!(
            output.mesh.faces[1],
            [FaceCorner::new(1, 1), FaceCorner::new(3, 3), FaceCorner::new(4, 4)]
        );
    }

    #[test]
    fn test_vertex_indices_ignore_lookup_outcome() {
        let mut atlas_img = RgbaImage::new(32, 16);
        paint_tile(&mut atlas_img, 0, 0, [1, 0, 0, 255]);
        paint_tile(&mut atlas_img, 1, 0, [2, 0, 0, 255]);

        // Tiles: known(2), empty, unknown, known(1)
        let mut map = RgbaImage::new(64, 16);
        paint_tile(&mut map, 0, 0, [2, 0, 0, 255]);
        paint_tile(&mut map, 2, 0, [9, 9, 9, 255]);
        paint_tile(&mut map, 3, 0, [1, 0, 0, 255]);

        let mesher = Mesher::new(AtlasIndex::build(&atlas_img, 16));
        let output = mesher.mesh(&map);

        assert_eq!(output.tile_count, 3);
        assert_eq!(output.vertex_count(), 12);
        assert_eq!(output.misses, vec![AtlasMiss { coord: TileCoord::new(0, 2) }]);

        let faces = &output.mesh.faces;
        assert_eq!(faces.len(), 4);
        // First tile uses vertices 1..=4 and the second atlas entry (base 5).
        assert_eq!(faces[0][0], FaceCorner::new(1, 5));
        assert_eq!(faces[1][2], FaceCorner::new(4, 8));
        // Third visited tile owns 9..=12 even though the second missed.
        assert_eq!(faces[2][0], FaceCorner::new(9, 1));
        assert_eq!(faces[3][2], FaceCorner::new(12, 4));
    }

    #[test]
    fn test_empty_tiles_produce_nothing() {
        let atlas_img = RgbaImage::from_pixel(16, 16, Rgba([1, 1, 1, 255]));
        let map = RgbaImage::from_pixel(48, 48, Rgba([1, 1, 1, 0]));

        let mesher = Mesher::new(AtlasIndex::build(&atlas_img, 16));
        let output = mesher.mesh(&map);
        assert_eq!(output.tile_count, 0);
        assert!(output.mesh.is_empty());
        assert!(mesher.decompose(&map).is_empty());
    }

    #[test]
    fn test_two_by_one_map_is_one_region() {
        let map = RgbaImage::from_pixel(32, 16, Rgba([3, 3, 3, 255]));
        let mesher = Mesher::new(AtlasIndex::build(&map, 16));

        let regions = mesher.mesh_decomposed(&map);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].region, RectangleRegion::new(0, 0, 32, 16));
        assert_eq!(regions[0].output.tile_count, 2);
    }

    #[test]
    fn test_region_misses_use_map_coordinates() {
        let atlas_img = RgbaImage::from_pixel(16, 16, Rgba([1, 1, 1, 255]));

        // ......
        // .....#   (known)
        // ......
        // ...#..   (unknown)
        let mut map = RgbaImage::new(96, 64);
        paint_tile(&mut map, 5, 1, [1, 1, 1, 255]);
        paint_tile(&mut map, 3, 3, [7, 7, 7, 255]);

        let mesher = Mesher::new(AtlasIndex::build(&atlas_img, 16));
        let parts = mesher.mesh_decomposed(&map);

        assert_eq!(parts.len(), 2);
        assert!(parts[0].output.is_complete());
        assert_eq!(
            parts[1].output.misses,
            vec![AtlasMiss { coord: TileCoord::new(3, 3) }]
        );
        assert_eq!(mesher.mesh(&map).misses, parts[1].output.misses);
    }

    #[test]
    fn test_region_meshes_reassemble_whole_map() {
        let mut atlas_img = RgbaImage::new(48, 16);
        paint_tile(&mut atlas_img, 0, 0, [10, 0, 0, 255]);
        paint_tile(&mut atlas_img, 1, 0, [20, 0, 0, 255]);
        paint_tile(&mut atlas_img, 2, 0, [30, 0, 0, 255]);

        // ##.#
        // #..#
        // ####
        let layout = ["##.#", "#..#", "####"];
        let mut map = RgbaImage::new(64, 48);
        for (row, line) in layout.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    let shade = [10, 20, 30][(row + col) % 3];
                    paint_tile(&mut map, col as u32, row as u32, [shade, 0, 0, 255]);
                }
            }
        }

        for mirror_x in [false, true] {
            let config = MesherConfig::default().with_mirror_x(mirror_x);
            let mesher = Mesher::with_config(AtlasIndex::build(&atlas_img, 16), config);
            let whole = mesher.mesh(&map);

            let mut reassembled = Vec::new();
            let mut tile_count = 0;
            for part in mesher.mesh_decomposed(&map) {
                let mut mesh = part.output.mesh.clone();
                mesh.translate(part.region.center_offset(64, 48, mirror_x));
                reassembled.extend(mesh.vertices);
                tile_count += part.output.tile_count;
            }

            assert_eq!(tile_count, whole.tile_count);
            // `+ 0.0` folds -0.0 into 0.0 so mirrored zeros compare equal.
            let normalize = |vertices: &[[f64; 3]]| {
                let mut points: Vec<_> = vertices.iter().map(|v| (v[0] + 0.0, v[1] + 0.0)).collect();
                points.sort_by(|a, b| a.partial_cmp(b).unwrap());
                points
            };
            assert_eq!(normalize(&reassembled), normalize(&whole.mesh.vertices));
        }
    }
}

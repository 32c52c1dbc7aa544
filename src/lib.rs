//! # Tilemap Mesher
//!
//! A Rust library for turning 2D tile maps into textured 3D meshes.
//!
//! ## Overview
//!
//! This library takes a tile map image and a texture atlas image as input.
//! Every distinct tile graphic in the atlas is fingerprinted by content, and
//! each non-empty map tile becomes a quad textured from the matching atlas
//! tile. The result is written as Wavefront OBJ text.
//!
//! A map's footprint can also be split into a small set of filled
//! rectangles, for collision geometry or for emitting one mesh per
//! rectangle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tilemap_mesher::{load_image, AtlasIndex, Mesher, MesherConfig, export_obj};
//!
//! let atlas_img = load_image("atlas.png")?;
//! let map_img = load_image("level.png")?;
//!
//! let config = MesherConfig::default().with_tile_size(16);
//! let atlas = AtlasIndex::build(&atlas_img, config.tile_size);
//! let mesher = Mesher::with_config(atlas, config);
//!
//! let output = mesher.mesh(&map_img);
//! let obj = export_obj("level", &output.mesh, mesher.atlas())?;
//! ```
//!
//! ## Decomposition
//!
//! ```ignore
//! for (i, part) in mesher.mesh_decomposed(&map_img).iter().enumerate() {
//!     let name = format!("level_{}", i);
//!     let obj = export_obj(&name, &part.output.mesh, mesher.atlas())?;
//! }
//! ```

pub mod error;
pub mod types;
pub mod tile;
pub mod atlas;
pub mod mesher;
pub mod export;

// Re-export main types for convenience
pub use error::{TileMesherError, Result};
pub use types::{RectangleRegion, TileCoord, TileSpan};
pub use tile::{load_image, CroppedSource, TileData, TileFingerprint, TileGridSource};
pub use atlas::{AtlasEntry, AtlasIndex, AtlasIndexer};
pub use mesher::{
    AtlasMiss, Mesh, Mesher, MesherConfig, MesherOutput, OccupancyGrid, RectangleDecomposer,
    RegionMesh,
};
pub use export::{export_obj, export_regions_json};

//! JSON export of decomposed regions, for collision geometry.

use crate::error::Result;
use crate::types::RectangleRegion;
use serde::{Deserialize, Serialize};

/// Serialized form of a rectangle decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionExport {
    /// Tile edge length the regions are aligned to.
    pub tile_size: u32,
    /// Regions in pixel space, in decomposition order.
    pub regions: Vec<RectangleRegion>,
}

/// Export regions as pretty-printed JSON.
pub fn export_regions_json(regions: &[RectangleRegion], tile_size: u32) -> Result<String> {
    let export = RegionExport {
        tile_size,
        regions: regions.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

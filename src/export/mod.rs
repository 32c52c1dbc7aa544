//! Output formats.
//!
//! OBJ text for meshes and JSON for rectangle decompositions.

pub mod obj;
pub mod regions;

pub use obj::export_obj;
pub use regions::{export_regions_json, RegionExport};

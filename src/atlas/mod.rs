//! Texture atlas indexing.
//!
//! This module scans an atlas image once and records, for every distinct
//! tile graphic, where it sits in texture space.

mod index;

pub use index::{AtlasEntry, AtlasIndex, AtlasIndexer};

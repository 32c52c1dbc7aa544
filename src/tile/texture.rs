//! Tile pixel blocks and their content fingerprints.

use sha1::{Digest, Sha1};
use std::fmt;

/// A content digest of a tile's raw RGBA bytes.
///
/// Identical pixel content always yields the same fingerprint, wherever
/// the tile was sampled from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileFingerprint([u8; 20]);

impl TileFingerprint {
    /// SHA-1 of the given bytes.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let digest = Sha1::digest(bytes);
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest);
        Self(out)
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for TileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileFingerprint({})", self.to_hex())
    }
}

/// Raw pixel block for one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileData {
    /// Tile width in pixels.
    pub width: u32,
    /// Tile height in pixels.
    pub height: u32,
    /// RGBA8 pixel data (4 bytes per pixel), row-major.
    pub pixels: Vec<u8>,
}

impl TileData {
    /// Create a tile from RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a tile filled with a single color.
    pub fn solid(size: u32, color: [u8; 4]) -> Self {
        let pixels = (0..size * size).flat_map(|_| color).collect();
        Self::new(size, size, pixels)
    }

    /// Sum of the alpha channel over every pixel.
    pub fn alpha_sum(&self) -> u64 {
        self.pixels.chunks_exact(4).map(|pixel| pixel[3] as u64).sum()
    }

    /// A tile is empty when it is completely transparent.
    pub fn is_empty(&self) -> bool {
        self.alpha_sum() == 0
    }

    /// Position-independent content fingerprint.
    pub fn fingerprint(&self) -> TileFingerprint {
        TileFingerprint::of_bytes(&self.pixels)
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}

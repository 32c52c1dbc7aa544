//! Image-backed tile sources.

use super::{TileData, TileGridSource};
use crate::error::Result;
use crate::types::RectangleRegion;
use image::RgbaImage;
use std::path::Path;

/// Load an image from disk, normalized to RGBA8.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

impl TileGridSource for RgbaImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    /// Pixels outside the image read as fully transparent.
    fn tile_at(&self, x: u32, y: u32, size: u32) -> TileData {
        let (img_width, img_height) = self.dimensions();
        let mut pixels = vec![0u8; (size * size * 4) as usize];

        for py in 0..size {
            let sy = y + py;
            if sy >= img_height {
                break;
            }
            for px in 0..size {
                let sx = x + px;
                if sx >= img_width {
                    break;
                }
                let dst_idx = ((py * size + px) * 4) as usize;
                pixels[dst_idx..dst_idx + 4].copy_from_slice(&self.get_pixel(sx, sy).0);
            }
        }

        TileData::new(size, size, pixels)
    }
}

/// A rectangular window onto another source.
///
/// Coordinates are relative to the window's top-left corner, and the
/// window reports its own width and height.
#[derive(Debug)]
pub struct CroppedSource<'a, S: ?Sized> {
    source: &'a S,
    region: RectangleRegion,
}

impl<'a, S: TileGridSource + ?Sized> CroppedSource<'a, S> {
    pub fn new(source: &'a S, region: RectangleRegion) -> Self {
        Self { source, region }
    }
}

impl<S: TileGridSource + ?Sized> TileGridSource for CroppedSource<'_, S> {
    fn width(&self) -> u32 {
        self.region.width()
    }

    fn height(&self) -> u32 {
        self.region.height()
    }

    fn tile_at(&self, x: u32, y: u32, size: u32) -> TileData {
        self.source
            .tile_at(self.region.left + x, self.region.top + y, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_tile_at_copies_block() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(2, 2, Rgba([9, 8, 7, 255]));
        img.put_pixel(3, 3, Rgba([1, 2, 3, 4]));

        let tile = img.tile_at(2, 2, 2);
        assert_eq!(tile.width, 2);
        assert_eq!(tile.get_pixel(0, 0), [9, 8, 7, 255]);
        assert_eq!(tile.get_pixel(1, 1), [1, 2, 3, 4]);
        assert_eq!(tile.get_pixel(1, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_tile_at_pads_out_of_bounds() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([5, 5, 5, 255]));
        let tile = img.tile_at(2, 2, 2);
        assert_eq!(tile.get_pixel(0, 0), [5, 5, 5, 255]);
        assert_eq!(tile.get_pixel(1, 0), [0, 0, 0, 0]);
        assert_eq!(tile.get_pixel(0, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_cropped_source_offsets_reads() {
        let mut img = RgbaImage::new(8, 8);
        img.put_pixel(4, 6, Rgba([255, 0, 0, 255]));

        let crop = CroppedSource::new(&img, RectangleRegion::new(4, 4, 8, 8));
        assert_eq!(crop.width(), 4);
        assert_eq!(crop.height(), 4);
        assert_eq!(crop.tile_at(0, 2, 2).get_pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(crop.tile_at(0, 2, 2), img.tile_at(4, 6, 2));
    }

    #[test]
    fn test_load_image_normalizes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 255]);
    }
}

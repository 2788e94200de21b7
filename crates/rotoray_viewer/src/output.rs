//! Frame buffer owned by the viewer, and PNG output.

use std::path::Path;

use anyhow::{anyhow, Result};
use image::{Rgb, RgbImage};
use rotoray_renderer::{Fragment, RenderResult};

/// Number of pixels in a `width` x `height` frame, without wrapping.
fn pixel_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| anyhow!("Frame size {width}x{height} is too large"))
}

/// A tightly packed `0x00RRGGBB` frame.
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = pixel_len(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Borrow the whole buffer as a render destination.
    pub fn fragment(&mut self) -> RenderResult<Fragment<'_>> {
        Fragment::new(&mut self.pixels, self.width, self.height, 0)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Unpack into an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let pixel = self.get(x, y);
            Rgb([(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8])
        })
    }

    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        self.to_rgb_image().save(path)
    }
}

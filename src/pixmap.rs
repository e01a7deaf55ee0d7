// Copyright 2026 the pixel-path authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::ColorU8;
use crate::geom::IntSize;

/// Number of bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A container that owns straight-alpha RGBA pixels.
///
/// The data is not aligned, therefore width == stride.
#[derive(Clone, PartialEq)]
pub struct Pixmap {
    data: Vec<u8>,
    size: IntSize,
}

impl Pixmap {
    /// Allocates a new pixmap.
    ///
    /// A pixmap is filled with transparent black by default, aka (0, 0, 0, 0).
    ///
    /// Zero size in an error.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let size = IntSize::from_wh(width, height)?;
        let data_len = data_len_for_size(size)?;

        Some(Pixmap {
            data: vec![0; data_len],
            size,
        })
    }

    /// Returns pixmap's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    /// Returns pixmap's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    /// Fills the entire pixmap with a specified color.
    pub fn fill(&mut self, color: ColorU8) {
        for p in self.pixels_mut() {
            *p = color;
        }
    }

    /// Returns a pixel color.
    ///
    /// Returns `None` when position is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        if x >= self.width() {
            return None;
        }
        let idx = self.width().checked_mul(y)?.checked_add(x)?;
        self.pixels().get(idx as usize).cloned()
    }

    /// Returns the internal data.
    ///
    /// Byteorder: RGBA
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Returns the mutable internal data.
    ///
    /// Byteorder: RGBA
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// Returns a slice of pixels.
    pub fn pixels(&self) -> &[ColorU8] {
        bytemuck::cast_slice(self.data())
    }

    /// Returns a mutable slice of pixels.
    pub fn pixels_mut(&mut self) -> &mut [ColorU8] {
        bytemuck::cast_slice_mut(self.data_mut())
    }

    /// Consumes the internal data.
    ///
    /// Byteorder: RGBA
    pub fn take(self) -> Vec<u8> {
        self.data
    }

    /// Encodes pixmap into a PNG data.
    ///
    /// Output is 8-bit RGBA.
    #[cfg(feature = "png-format")]
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut data, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
        }

        Ok(data)
    }

    /// Saves pixmap as a PNG file.
    #[cfg(feature = "png-format")]
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), png::EncodingError> {
        let data = self.encode_png()?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("data", &"...")
            .field("width", &self.size.width())
            .field("height", &self.size.height())
            .finish()
    }
}

fn data_len_for_size(size: IntSize) -> Option<usize> {
    let length = (size.width() as usize).checked_mul(size.height() as usize)?;
    length.checked_mul(BYTES_PER_PIXEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size() {
        assert!(Pixmap::new(0, 1).is_none());
        assert!(Pixmap::new(1, 0).is_none());
    }

    #[test]
    fn fill() {
        let c = ColorU8::from_rgb(50, 100, 150);
        let mut pixmap = Pixmap::new(10, 10).unwrap();
        pixmap.fill(c);
        assert_eq!(pixmap.pixel(1, 1), Some(c));
        assert_eq!(pixmap.pixel(10, 1), None);
        assert_eq!(pixmap.pixel(1, 10), None);
    }
}

//! # Pixel Grid
//!
//! An owned `width x height` buffer of 8-bit channel values, stored row-major
//! with `channels` interleaved values per pixel (the same layout as
//! `image::ImageBuffer`).

use crate::common::error::{Result, StegoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// A grid with every channel set to `fill`.
    pub fn filled(width: usize, height: usize, channels: usize, fill: u8) -> Self {
        Self {
            width,
            height,
            channels,
            data: vec![fill; width * height * channels],
        }
    }

    /// Wrap an interleaved row-major buffer.
    ///
    /// # Errors
    /// `InvalidConfig` if `data.len()` is not `width * height * channels`.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(StegoError::InvalidConfig(format!(
                "pixel buffer holds {} values, expected {} for {}x{}x{}",
                data.len(),
                expected,
                width,
                height,
                channels
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total channel bits available for embedding.
    pub fn capacity_bits(&self) -> usize {
        self.data.len()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Channel values of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.index(x, y);
        &self.data[start..start + self.channels]
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let start = self.index(x, y);
        let channels = self.channels;
        &mut self.data[start..start + channels]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_addressing() {
        let data: Vec<u8> = (0..18).collect();
        let grid = PixelGrid::from_raw(3, 2, 3, data).unwrap();
        assert_eq!(grid.pixel(0, 0), &[0, 1, 2]);
        assert_eq!(grid.pixel(2, 0), &[6, 7, 8]);
        assert_eq!(grid.pixel(0, 1), &[9, 10, 11]);
        assert_eq!(grid.capacity_bits(), 18);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(PixelGrid::from_raw(2, 2, 3, vec![0; 11]).is_err());
    }

    #[test]
    fn test_pixel_mut() {
        let mut grid = PixelGrid::filled(2, 2, 3, 10);
        grid.pixel_mut(1, 1)[2] = 11;
        assert_eq!(grid.as_raw()[11], 11);
    }
}

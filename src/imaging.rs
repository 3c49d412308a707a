//! # Image I/O
//!
//! Lossless conversion between image files (or encoded bytes) and
//! [`PixelGrid`]. Any format the `image` crate decodes can be read; only
//! lossless formats may be written, since recompression would destroy the
//! embedded parities.

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
use log::debug;
use std::io::Cursor;
use std::path::Path;

use crate::common::config::LOSSY_EXTENSIONS;
use crate::common::error::{Result, StegoError};
use crate::processing::grid::PixelGrid;

/// Load `path` as a grid with `channels` 8-bit values per pixel.
pub fn load_grid<P: AsRef<Path>>(path: P, channels: usize) -> Result<PixelGrid> {
    let img = image::open(path.as_ref())?;
    let (width, height) = img.dimensions();
    debug!(
        "Loaded {} ({}x{}, {:?})",
        path.as_ref().display(),
        width,
        height,
        img.color()
    );
    to_grid(img, channels)
}

/// Decode an in-memory image (any supported format) into a grid.
pub fn decode_grid(bytes: &[u8], channels: usize) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes)?;
    to_grid(img, channels)
}

/// Write `grid` to `path`; the format follows the extension.
///
/// # Errors
/// `LossyFormat` if the extension names a lossy encoder.
pub fn save_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let path = path.as_ref();
    if is_lossy(path) {
        return Err(StegoError::LossyFormat(path.to_path_buf()));
    }
    to_dynamic(grid)?.save(path)?;
    debug!("Saved {}x{} image to {}", grid.width(), grid.height(), path.display());
    Ok(())
}

/// Encode `grid` as PNG bytes.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let mut output_bytes = Vec::new();
    to_dynamic(grid)?.write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)?;
    Ok(output_bytes)
}

fn is_lossy(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| LOSSY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn to_grid(img: DynamicImage, channels: usize) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    let (width, height) = (width as usize, height as usize);
    let data = match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        other => {
            return Err(StegoError::InvalidConfig(format!(
                "unsupported channel count {other}"
            )))
        }
    };
    PixelGrid::from_raw(width, height, channels, data)
}

fn to_dynamic(grid: &PixelGrid) -> Result<DynamicImage> {
    let width = u32::try_from(grid.width())
        .map_err(|_| StegoError::InvalidConfig("image width exceeds u32".to_string()))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| StegoError::InvalidConfig("image height exceeds u32".to_string()))?;
    let data = grid.as_raw().to_vec();
    let mismatch = || StegoError::InvalidConfig("pixel buffer does not match dimensions".to_string());

    let img = match grid.channels() {
        1 => DynamicImage::ImageLuma8(
            ImageBuffer::<Luma<u8>, _>::from_raw(width, height, data).ok_or_else(mismatch)?,
        ),
        2 => DynamicImage::ImageLumaA8(
            ImageBuffer::<LumaA<u8>, _>::from_raw(width, height, data).ok_or_else(mismatch)?,
        ),
        3 => DynamicImage::ImageRgb8(
            ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, data).ok_or_else(mismatch)?,
        ),
        4 => DynamicImage::ImageRgba8(
            ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, data).ok_or_else(mismatch)?,
        ),
        other => {
            return Err(StegoError::InvalidConfig(format!(
                "unsupported channel count {other}"
            )))
        }
    };
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize, channels: usize) -> PixelGrid {
        let data = (0..width * height * channels).map(|i| (i % 256) as u8).collect();
        PixelGrid::from_raw(width, height, channels, data).unwrap()
    }

    #[test]
    fn test_png_file_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = gradient(7, 5, 3);
        save_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path, 3).unwrap(), grid);
    }

    #[test]
    fn test_png_bytes_rgba() {
        let grid = gradient(4, 4, 4);
        let bytes = encode_png(&grid).unwrap();
        assert_eq!(decode_grid(&bytes, 4).unwrap(), grid);
    }

    #[test]
    fn test_rejects_lossy_extension() {
        let dir = tempfile::tempdir().unwrap();
        let grid = gradient(2, 2, 3);
        for name in ["out.jpg", "out.JPEG", "out.webp"] {
            assert!(matches!(
                save_grid(&grid, dir.path().join(name)),
                Err(StegoError::LossyFormat(_))
            ));
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(load_grid("/nonexistent/definitely/not/here.png", 3).is_err());
    }
}

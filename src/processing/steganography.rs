//! # LSB Steganography Entry Points
//!
//! Ties the codec, planner, embedder and extractor to image I/O.
//!
//! ## Encoding Process
//! 1. Reject an empty message or delimiter before touching the image
//! 2. Frame the message as `delimiter + message + delimiter` and encode it
//! 3. Plan the column span and draw a random start column
//! 4. Adjust channel parities along that span
//! 5. Save the grid losslessly
//!
//! ## Decoding Process
//! 1. Load the grid and linearize every channel parity column by column
//! 2. Find the delimiter at a column boundary
//! 3. Decode up to the closing delimiter
//!
//! ### Capacity
//! An image stores `width * height * 3` bits, i.e. roughly
//! `(width * height * 3) / 8` characters including both delimiters, minus
//! the one column that must stay free for the start-column draw.

use log::info;
use std::path::{Path, PathBuf};

use super::codec::encode_text;
use super::embedder::embed;
use super::extractor::extract;
use super::grid::PixelGrid;
use super::planner::plan;
use super::random::RandomSource;
use crate::common::config::{ChannelLayout, StegoConfig};
use crate::common::error::{Result, StegoError};
use crate::imaging;

/// Hide `message` in the image at `source` and write the result next to
/// `dest` with the configured lossless extension.
///
/// # Returns
/// The path actually written.
///
/// # Errors
/// - `EmptyInput` for an empty message or delimiter (checked first)
/// - `Capacity` / `NoValidStart` if the image is too small
/// - `Image` / `Io` from loading or saving
pub fn hide<R>(
    message: &str,
    delimiter: &str,
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    config: &StegoConfig,
    rng: &mut R,
) -> Result<PathBuf>
where
    R: RandomSource + ?Sized,
{
    validate_inputs(message, delimiter)?;
    let grid = imaging::load_grid(source.as_ref(), config.layout.channels_per_pixel)?;
    let grid = hide_in_grid(grid, message, delimiter, &config.layout, rng)?;

    let dest = dest.as_ref().with_extension(&config.output.extension);
    imaging::save_grid(&grid, &dest)?;
    info!(
        "Hid {} characters from {} in {}",
        message.chars().count(),
        source.as_ref().display(),
        dest.display()
    );
    Ok(dest)
}

/// Recover the message hidden in the image at `source`.
///
/// # Errors
/// - `EmptyInput` for an empty delimiter
/// - `NotFound` if no delimiter is present
/// - `Image` / `Io` from loading
pub fn reveal(source: impl AsRef<Path>, delimiter: &str, config: &StegoConfig) -> Result<String> {
    if delimiter.is_empty() {
        return Err(StegoError::EmptyInput("delimiter"));
    }
    let grid = imaging::load_grid(source.as_ref(), config.layout.channels_per_pixel)?;
    extract(&grid, delimiter, &config.layout)
}

/// In-memory variant of [`hide`]: takes encoded image bytes in any supported
/// format and returns PNG bytes.
pub fn hide_bytes<R>(
    image_bytes: &[u8],
    message: &str,
    delimiter: &str,
    config: &StegoConfig,
    rng: &mut R,
) -> Result<Vec<u8>>
where
    R: RandomSource + ?Sized,
{
    validate_inputs(message, delimiter)?;
    let grid = imaging::decode_grid(image_bytes, config.layout.channels_per_pixel)?;
    let grid = hide_in_grid(grid, message, delimiter, &config.layout, rng)?;
    imaging::encode_png(&grid)
}

/// In-memory variant of [`reveal`].
pub fn reveal_bytes(image_bytes: &[u8], delimiter: &str, config: &StegoConfig) -> Result<String> {
    if delimiter.is_empty() {
        return Err(StegoError::EmptyInput("delimiter"));
    }
    let grid = imaging::decode_grid(image_bytes, config.layout.channels_per_pixel)?;
    extract(&grid, delimiter, &config.layout)
}

/// Encode, plan and embed into an already loaded grid.
pub fn hide_in_grid<R>(
    grid: PixelGrid,
    message: &str,
    delimiter: &str,
    layout: &ChannelLayout,
    rng: &mut R,
) -> Result<PixelGrid>
where
    R: RandomSource + ?Sized,
{
    let bits = encode_text(message, delimiter, layout)?;
    let embed_plan = plan(grid.width(), grid.height(), bits.len(), layout, rng)?;
    embed(grid, &bits, &embed_plan)
}

fn validate_inputs(message: &str, delimiter: &str) -> Result<()> {
    if message.is_empty() {
        return Err(StegoError::EmptyInput("message"));
    }
    if delimiter.is_empty() {
        return Err(StegoError::EmptyInput("delimiter"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::random::FixedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hide_in_grid_round_trip_seeded() {
        let layout = ChannelLayout::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = PixelGrid::filled(40, 6, 3, 101);
            let grid = hide_in_grid(grid, "seeded run", "~~", &layout, &mut rng).unwrap();
            assert_eq!(extract(&grid, "~~", &layout).unwrap(), "seeded run");
        }
    }

    #[test]
    fn test_empty_inputs_checked_before_io() {
        let config = StegoConfig::default();
        let result = hide("", "#", "/missing.png", "/out", &config, &mut FixedSource(0));
        assert!(matches!(result, Err(StegoError::EmptyInput("message"))));
        let result = hide("hi", "", "/missing.png", "/out", &config, &mut FixedSource(0));
        assert!(matches!(result, Err(StegoError::EmptyInput("delimiter"))));
        assert!(matches!(
            reveal("/missing.png", "", &config),
            Err(StegoError::EmptyInput("delimiter"))
        ));
    }

    #[test]
    fn test_bytes_round_trip_four_channels() {
        let mut config = StegoConfig::default();
        config.layout.channels_per_pixel = 4;
        let cover = imaging::encode_png(&PixelGrid::filled(16, 4, 4, 64)).unwrap();
        let stego = hide_bytes(&cover, "rgba", "|", &config, &mut FixedSource(3)).unwrap();
        assert_eq!(reveal_bytes(&stego, "|", &config).unwrap(), "rgba");
    }
}

//! # Extractor
//!
//! Recovers a delimited message from channel parities.
//!
//! The decoder does not know the start column, so it linearizes the parity
//! of every channel of the whole image in the embedder's column-major order
//! and tries the delimiter at each column boundary (every `height * channels`
//! bits). The first match opens the message; the decoded tail is cut at the
//! next occurrence of the delimiter, which also drops the noise bits of the
//! untouched columns after the payload.

use log::{debug, info, warn};

use super::codec::{decode_bits, encode_symbols, Bitstream};
use super::grid::PixelGrid;
use crate::common::config::ChannelLayout;
use crate::common::error::{Result, StegoError};

/// Parity of every channel, column by column, top to bottom.
pub fn linearize(grid: &PixelGrid) -> Bitstream {
    let mut bits = Vec::with_capacity(grid.capacity_bits());
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            bits.extend(grid.pixel(x, y).iter().map(|value| value % 2));
        }
    }
    Bitstream::from(bits)
}

/// Find the message framed by `delimiter` in `grid`.
///
/// If the opening delimiter is found but no closing one follows, the whole
/// decoded tail is returned, trailing noise included.
///
/// # Errors
/// - `EmptyInput` if `delimiter` is empty
/// - `UnsupportedCharacter` if the delimiter cannot be encoded with `layout`
/// - `NotFound` if no column-aligned offset starts with the delimiter
pub fn extract(grid: &PixelGrid, delimiter: &str, layout: &ChannelLayout) -> Result<String> {
    if delimiter.is_empty() {
        return Err(StegoError::EmptyInput("delimiter"));
    }
    let marker = encode_symbols(delimiter, layout)?;
    let bits = linearize(grid);

    let offset = find_opening(bits.as_slice(), marker.as_slice(), grid.height() * grid.channels())
        .ok_or(StegoError::NotFound)?;
    debug!(
        "Opening delimiter at bit {} (column {})",
        offset,
        offset / (grid.height() * grid.channels())
    );

    let tail = decode_bits(&bits.as_slice()[offset + marker.len()..], layout);
    match tail.find(delimiter) {
        Some(end) => {
            info!("Recovered {} characters", tail[..end].chars().count());
            Ok(tail[..end].to_string())
        }
        None => {
            warn!("No closing delimiter after bit {}, returning the full tail", offset);
            Ok(tail)
        }
    }
}

/// Lowest stride-aligned offset whose window equals `marker`.
fn find_opening(bits: &[u8], marker: &[u8], stride: usize) -> Option<usize> {
    if stride == 0 || marker.is_empty() {
        return None;
    }
    (0..bits.len())
        .step_by(stride)
        .take_while(|offset| offset + marker.len() <= bits.len())
        .find(|&offset| &bits[offset..offset + marker.len()] == marker)
}

//! # Capacity Planner
//!
//! Decides whether a bitstream fits an image and where it goes.
//!
//! ## Capacity
//! An image holds `width * height * channels_per_pixel` bits, one per
//! channel. The bitstream is laid down whole columns at a time, so besides
//! the raw bit count the planner needs `columns_used` columns and at least
//! one valid start column: starts are drawn from `[0, width - columns_used)`.
//!
//! Example: a 10x4 RGB image with a 48-bit stream uses 16 pixels, i.e. 4
//! columns, so the start column is one of `0..6`.

use log::debug;
use serde::Serialize;

use super::random::RandomSource;
use crate::common::config::ChannelLayout;
use crate::common::error::{Result, StegoError};

/// Where the embedder writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedPlan {
    /// First column written
    pub start_column: usize,
    /// Number of consecutive columns the bitstream spans
    pub columns_used: usize,
}

/// Compute the embed span and draw a start column.
///
/// # Errors
/// - `Capacity` if `bitstream_len` exceeds the image's channel bits
/// - `NoValidStart` if `width - columns_used <= 0`
pub fn plan<R>(
    width: usize,
    height: usize,
    bitstream_len: usize,
    layout: &ChannelLayout,
    rng: &mut R,
) -> Result<EmbedPlan>
where
    R: RandomSource + ?Sized,
{
    let available = width * height * layout.channels_per_pixel;
    if bitstream_len > available {
        return Err(StegoError::Capacity {
            required: bitstream_len,
            available,
        });
    }

    let columns_used = columns_for(bitstream_len, height, layout);
    if width <= columns_used {
        return Err(StegoError::NoValidStart {
            columns_used,
            width,
        });
    }

    let latest_start = width - columns_used;
    let start_column = rng.below(latest_start);
    debug!(
        "Planned {} bits over {} columns starting at column {} (latest start {})",
        bitstream_len, columns_used, start_column, latest_start
    );

    Ok(EmbedPlan {
        start_column,
        columns_used,
    })
}

/// `ceil(ceil(bits / channels) / height)`, or 0 for an empty bitstream.
pub fn columns_for(bitstream_len: usize, height: usize, layout: &ChannelLayout) -> usize {
    let pixels_used = bitstream_len.div_ceil(layout.channels_per_pixel);
    if pixels_used == 0 {
        return 0;
    }
    pixels_used.div_ceil(height.max(1))
}

/// What an image can carry for a given delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    pub width: usize,
    pub height: usize,
    pub channels_per_pixel: usize,
    pub bits_per_symbol: usize,
    /// Raw channel bits in the image
    pub total_bits: usize,
    /// Longest message (in characters) that can still be planned
    pub max_message_chars: usize,
}

/// Report the longest message that passes both the bit-count and the
/// start-column checks of [`plan`].
pub fn capacity_report(
    width: usize,
    height: usize,
    delimiter_chars: usize,
    layout: &ChannelLayout,
) -> CapacityReport {
    let total_bits = width * height * layout.channels_per_pixel;
    // Columns usable by the span once one start column is kept free.
    let span_bits = width.saturating_sub(1) * height * layout.channels_per_pixel;
    let usable_symbols = span_bits.min(total_bits) / layout.bits_per_symbol;
    let max_message_chars = usable_symbols.saturating_sub(2 * delimiter_chars);

    CapacityReport {
        width,
        height,
        channels_per_pixel: layout.channels_per_pixel,
        bits_per_symbol: layout.bits_per_symbol,
        total_bits,
        max_message_chars,
    }
}

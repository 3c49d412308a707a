//! # Error Types
//!
//! Every failure the library can report. All variants are recoverable: the
//! caller's remedy is a different image, message, delimiter or config.

use std::path::PathBuf;

/// Library-wide result alias.
pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(thiserror::Error, Debug)]
pub enum StegoError {
    /// Message or delimiter was empty.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// The framed bitstream needs more channel bits than the image holds.
    #[error("image too small or message too large: need {required} bits but only {available} bits available")]
    Capacity { required: usize, available: usize },

    /// The message fits in raw bits but no start column leaves room for its span.
    #[error("image too small or message too large: span of {columns_used} columns leaves no valid start column in an image {width} columns wide")]
    NoValidStart { columns_used: usize, width: usize },

    /// No column-aligned delimiter match anywhere in the image.
    #[error("no message found")]
    NotFound,

    /// A character's code point does not fit in one symbol.
    #[error("character {0:?} cannot be encoded in {1} bits")]
    UnsupportedCharacter(char, usize),

    /// An embed plan that does not fit the grid or the bitstream.
    #[error("embed plan out of bounds: columns {start}..{end} cannot hold {pixels} pixels in a {width}x{height} grid")]
    PlanOutOfBounds {
        start: usize,
        end: usize,
        pixels: usize,
        width: usize,
        height: usize,
    },

    /// Attempted to save to a format that would destroy LSB parity.
    #[error("refusing to write lossy format: {}", .0.display())]
    LossyFormat(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StegoError {
    /// True for the capacity family (`Capacity` and `NoValidStart`).
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. } | Self::NoValidStart { .. })
    }
}

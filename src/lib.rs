//! # LSB Stego
//!
//! Hides a text payload in the least significant bits of an image's color
//! channels and recovers it later.
//!
//! ## Modules
//!
//! - [`common`]: configuration and error types shared by every component
//! - [`processing`]: the bit codec, capacity planner, embedder and extractor
//! - [`imaging`]: lossless image I/O to and from [`PixelGrid`]
//! - [`interactive`]: the line-oriented prompt used by the `stego` binary

pub mod common;
pub mod imaging;
pub mod interactive;
pub mod processing;

pub use common::config::StegoConfig;
pub use common::error::{Result, StegoError};
pub use processing::grid::PixelGrid;
pub use processing::steganography::{hide, hide_bytes, reveal, reveal_bytes};

//! # Image Processing and Steganography
//!
//! Hides text in images with LSB (Least Significant Bit) parity encoding and
//! recovers it by scanning for a delimiter.
//!
//! ## Pipeline
//!
//! ```text
//! text ─ codec ─> bitstream ─ planner ─> EmbedPlan ─ embedder ─> PixelGrid
//! PixelGrid ─ extractor ─> bitstream window ─ codec ─> text
//! ```

pub mod codec;
pub mod embedder;
pub mod extractor;
pub mod grid;
pub mod planner;
pub mod random;
pub mod steganography;

// Re-export main functions for convenience
pub use codec::{decode_bits, encode_text, Bitstream};
pub use embedder::embed;
pub use extractor::{extract, linearize};
pub use planner::{plan, EmbedPlan};
pub use random::RandomSource;
pub use steganography::{hide, hide_bytes, reveal, reveal_bytes};

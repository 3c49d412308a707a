//! # Bit Codec
//!
//! Converts between text and its fixed-width binary-digit form.
//!
//! Each character becomes one `bits_per_symbol`-wide group holding its code
//! point, zero-padded and most significant bit first. With the default 8-bit
//! layout, `"#"` (0x23) becomes `00100011`. Only single-byte code points are
//! representable; anything wider is rejected on encode.

use std::fmt;

use crate::common::config::ChannelLayout;
use crate::common::error::{Result, StegoError};

/// An ordered sequence of bits, one `u8` (0 or 1) per bit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<u8>,
}

impl Bitstream {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }
}

impl From<Vec<u8>> for Bitstream {
    fn from(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }
}

impl FromIterator<u8> for Bitstream {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encode `delimiter + message + delimiter` into a bitstream.
///
/// # Errors
/// - `EmptyInput` if `message` or `delimiter` is empty
/// - `UnsupportedCharacter` if a code point does not fit in one symbol
///
/// # Example
/// ```
/// # use lsb_stego::common::config::ChannelLayout;
/// # use lsb_stego::processing::codec::encode_text;
/// let bits = encode_text("hi", "##", &ChannelLayout::default()).unwrap();
/// assert_eq!(bits.len(), 48);
/// ```
pub fn encode_text(message: &str, delimiter: &str, layout: &ChannelLayout) -> Result<Bitstream> {
    if message.is_empty() {
        return Err(StegoError::EmptyInput("message"));
    }
    if delimiter.is_empty() {
        return Err(StegoError::EmptyInput("delimiter"));
    }
    let framed = format!("{delimiter}{message}{delimiter}");
    encode_symbols(&framed, layout)
}

/// Encode `text` as-is, without framing.
pub fn encode_symbols(text: &str, layout: &ChannelLayout) -> Result<Bitstream> {
    let width = layout.bits_per_symbol;
    let mut bits = Vec::with_capacity(text.chars().count() * width);
    for ch in text.chars() {
        let code = ch as u32;
        if code >= 1 << width {
            return Err(StegoError::UnsupportedCharacter(ch, width));
        }
        bits.extend((0..width).rev().map(|shift| ((code >> shift) & 1) as u8));
    }
    Ok(Bitstream::from(bits))
}

/// Decode consecutive symbol groups back into text.
///
/// A trailing group shorter than `bits_per_symbol` is ignored.
pub fn decode_bits(bits: &[u8], layout: &ChannelLayout) -> String {
    bits.chunks_exact(layout.bits_per_symbol)
        .map(|group| {
            let code = group.iter().fold(0u8, |acc, bit| (acc << 1) | (bit & 1));
            char::from(code)
        })
        .collect()
}

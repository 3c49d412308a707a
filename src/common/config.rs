//! # Configuration Utilities
//!
//! Configuration structures and the TOML loader shared by the library and
//! the `stego` binary. Every section has defaults, so an empty file (or no
//! file at all) yields the classic 3-channel, 8-bit-per-character scheme.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{Result, StegoError};

/// Extensions whose encoders would destroy LSB parity.
pub const LOSSY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "webp"];

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: StegoConfig = load_config("config/stego.toml")?;
/// ```
pub fn load_config<T, P>(path: P) -> anyhow::Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// How bits are laid onto pixels and characters onto bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelLayout {
    /// Channels read per pixel, in fixed order (1 = luma, 3 = RGB, 4 = RGBA)
    pub channels_per_pixel: usize,
    /// Width of one encoded character in bits
    pub bits_per_symbol: usize,
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self {
            channels_per_pixel: 3,
            bits_per_symbol: 8,
        }
    }
}

impl ChannelLayout {
    pub fn validate(&self) -> Result<()> {
        if !(1..=4).contains(&self.channels_per_pixel) {
            return Err(StegoError::InvalidConfig(format!(
                "channels_per_pixel must be between 1 and 4, got {}",
                self.channels_per_pixel
            )));
        }
        if !(1..=8).contains(&self.bits_per_symbol) {
            return Err(StegoError::InvalidConfig(format!(
                "bits_per_symbol must be between 1 and 8, got {}",
                self.bits_per_symbol
            )));
        }
        Ok(())
    }
}

/// Where and how encoded images are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension forced onto every written image. Must be lossless.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "png".to_string(),
        }
    }
}

/// Interactive prompt behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// How many invalid answers are tolerated before giving up
    pub max_attempts: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    pub layout: ChannelLayout,
    pub output: OutputConfig,
    pub prompt: PromptConfig,
}

impl StegoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config: StegoConfig = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        let ext = self.output.extension.to_ascii_lowercase();
        if ext.is_empty() || LOSSY_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StegoError::InvalidConfig(format!(
                "output extension {:?} is not a lossless format",
                self.output.extension
            )));
        }
        if self.prompt.max_attempts == 0 {
            return Err(StegoError::InvalidConfig(
                "prompt.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StegoConfig::default();
        assert_eq!(config.layout.channels_per_pixel, 3);
        assert_eq!(config.layout.bits_per_symbol, 8);
        assert_eq!(config.output.extension, "png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StegoConfig = toml::from_str("[layout]\nchannels_per_pixel = 4\n").unwrap();
        assert_eq!(config.layout.channels_per_pixel, 4);
        assert_eq!(config.layout.bits_per_symbol, 8);
        assert_eq!(config.prompt.max_attempts, 3);
    }

    #[test]
    fn test_rejects_lossy_extension() {
        let mut config = StegoConfig::default();
        config.output.extension = "JPG".to_string();
        assert!(matches!(
            config.validate(),
            Err(StegoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_layout() {
        let layout = ChannelLayout {
            channels_per_pixel: 5,
            bits_per_symbol: 8,
        };
        assert!(layout.validate().is_err());
        let layout = ChannelLayout {
            channels_per_pixel: 3,
            bits_per_symbol: 9,
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nextension = \"bmp\"\n\n[prompt]\nmax_attempts = 5").unwrap();
        let config = StegoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.extension, "bmp");
        assert_eq!(config.prompt.max_attempts, 5);
        assert_eq!(config.layout, ChannelLayout::default());
    }
}

//! # Common Components
//!
//! Shared utilities and data structures used by the processing pipeline, the
//! image layer and the binary.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration loading and the [`config::ChannelLayout`]
//! - [`error`]: the [`error::StegoError`] taxonomy

pub mod config;
pub mod error;

//! FlateDecode (zlib/deflate) encoder.
//!
//! Produces a zlib (RFC 1950) stream using the flate2 crate, which is what
//! PDF readers expect behind `/FlateDecode`.

use crate::encoders::{Filter, StreamEncoder};
use crate::error::Result;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

/// Compression effort for [`FlateEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Stored blocks only
    None,
    /// Fastest compression
    Fastest,
    /// zlib's default trade-off
    #[default]
    Default,
    /// Smallest output
    Best,
}

impl CompressionLevel {
    fn to_compression(self) -> Compression {
        match self {
            CompressionLevel::None => Compression::none(),
            CompressionLevel::Fastest => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Best => Compression::best(),
        }
    }
}

/// FlateDecode encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlateEncoder {
    level: CompressionLevel,
}

impl FlateEncoder {
    /// Best-compression encoder, shareable across a whole document.
    pub const BEST: FlateEncoder = FlateEncoder::new(CompressionLevel::Best);

    /// Create an encoder with the given level.
    pub const fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    /// Configured compression level.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }
}

impl StreamEncoder for FlateEncoder {
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut encoder =
            ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), self.level.to_compression());
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }

    fn filter(&self) -> Filter {
        Filter::FlateDecode
    }
}

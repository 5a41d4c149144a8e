//! Configuration for stream filtering.

use crate::encoders::CompressionLevel;

/// Which filters apply to which kind of stream.
///
/// Built once when a document run starts and passed by reference from then
/// on; the `with_*` methods consume the value, so there is no way to flip a
/// toggle halfway through a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPipelineConfig {
    /// ASCII85-armor binary streams (fonts, images).
    pub ascii_armor_binary: bool,

    /// Flate-compress binary streams.
    pub compress_binary: bool,

    /// Flate-compress page and form content streams.
    pub compress_content: bool,

    /// Compression level used whenever compression is on.
    pub compression: CompressionLevel,
}

impl Default for FilterPipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPipelineConfig {
    /// Create configuration with defaults: everything on, best compression.
    pub fn new() -> Self {
        Self {
            ascii_armor_binary: true,
            compress_binary: true,
            compress_content: true,
            compression: CompressionLevel::Best,
        }
    }

    /// No filters at all; useful when inspecting output by eye.
    pub fn uncompressed() -> Self {
        Self {
            ascii_armor_binary: false,
            compress_binary: false,
            compress_content: false,
            compression: CompressionLevel::Best,
        }
    }

    /// Enable ASCII85 armoring of binary streams.
    pub fn with_ascii_armor_binary(mut self, enable: bool) -> Self {
        self.ascii_armor_binary = enable;
        self
    }

    /// Enable compression of binary streams.
    pub fn with_compress_binary(mut self, enable: bool) -> Self {
        self.compress_binary = enable;
        self
    }

    /// Enable compression of content streams.
    pub fn with_compress_content(mut self, enable: bool) -> Self {
        self.compress_content = enable;
        self
    }

    /// Set the compression level.
    pub fn with_compression(mut self, level: CompressionLevel) -> Self {
        self.compression = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterPipelineConfig::default();
        assert!(config.ascii_armor_binary);
        assert!(config.compress_binary);
        assert!(config.compress_content);
        assert_eq!(config.compression, CompressionLevel::Best);
    }

    #[test]
    fn test_builder() {
        let config = FilterPipelineConfig::new()
            .with_ascii_armor_binary(false)
            .with_compress_content(false)
            .with_compression(CompressionLevel::Fastest);
        assert!(!config.ascii_armor_binary);
        assert!(config.compress_binary);
        assert!(!config.compress_content);
        assert_eq!(config.compression, CompressionLevel::Fastest);
    }

    #[test]
    fn test_uncompressed() {
        let config = FilterPipelineConfig::uncompressed();
        assert!(!config.ascii_armor_binary && !config.compress_binary && !config.compress_content);
    }
}

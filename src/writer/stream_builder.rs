//! Stream assembly.
//!
//! Turns raw payloads into [`Stream`] objects with the filters selected by a
//! [`FilterPipelineConfig`]. Binary data (fonts, images) is compressed, then
//! ASCII85-armored; content streams are only ever compressed.

use crate::config::FilterPipelineConfig;
use crate::encoders::{Ascii85Encoder, FilterChain, FlateEncoder};
use crate::error::Result;
use crate::object::{Dictionary, Object, Stream};

/// Font program supplied by the font subsystem.
///
/// The program bytes are embedded as-is; this crate never looks inside them.
pub trait FontProgram {
    /// PostScript name of the font (`/BaseFont`).
    fn base_font_name(&self) -> &str;

    /// Raw font program, or `None` for fonts the viewer provides (base 14).
    fn program(&self) -> Option<&[u8]>;

    /// `/Subtype` of the font file stream (e.g. `OpenType`), if any.
    fn subtype(&self) -> Option<&str> {
        None
    }
}

/// A font program held in memory.
#[derive(Debug, Clone)]
pub struct EmbeddedFontData {
    /// PostScript name
    pub name: String,
    /// Raw program bytes
    pub data: Vec<u8>,
    /// Font file subtype
    pub subtype: Option<String>,
}

impl EmbeddedFontData {
    /// Create font data without a subtype.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            subtype: None,
        }
    }

    /// Set the font file subtype.
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }
}

impl FontProgram for EmbeddedFontData {
    fn base_font_name(&self) -> &str {
        &self.name
    }

    fn program(&self) -> Option<&[u8]> {
        Some(&self.data)
    }

    fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }
}

/// Builds filtered streams from one shared configuration.
#[derive(Debug, Clone, Copy)]
pub struct StreamBuilder {
    config: FilterPipelineConfig,
    flate: FlateEncoder,
    ascii85: Ascii85Encoder,
}

impl StreamBuilder {
    /// Create a builder; the encoders are configured once, here.
    pub fn new(config: FilterPipelineConfig) -> Self {
        Self {
            config,
            flate: FlateEncoder::new(config.compression),
            ascii85: Ascii85Encoder,
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &FilterPipelineConfig {
        &self.config
    }

    /// Encoder chain for binary streams: compress, then armor.
    pub fn binary_chain(&self) -> FilterChain<'_> {
        FilterChain::new()
            .then_if(self.config.compress_binary, &self.flate)
            .then_if(self.config.ascii_armor_binary, &self.ascii85)
    }

    /// Encoder chain for content streams.
    pub fn content_chain(&self) -> FilterChain<'_> {
        FilterChain::new().then_if(self.config.compress_content, &self.flate)
    }

    /// Page or form content stream.
    pub fn content_stream(&self, content: &[u8]) -> Result<Stream> {
        self.build(Dictionary::new(), content, &self.content_chain())
    }

    /// Binary stream (image samples, font programs, embedded files).
    pub fn binary_stream(&self, dict: Dictionary, data: &[u8]) -> Result<Stream> {
        self.build(dict, data, &self.binary_chain())
    }

    /// Font file stream for an embedded font program.
    ///
    /// Returns `Ok(None)` when the font has no program to embed.
    pub fn font_file_stream(&self, font: &dyn FontProgram) -> Result<Option<Stream>> {
        let Some(program) = font.program() else {
            log::debug!("Font {} has no program; not embedding", font.base_font_name());
            return Ok(None);
        };

        let mut dict = Dictionary::new();
        dict.set("Length1", Object::Integer(program.len() as i64));
        if let Some(subtype) = font.subtype() {
            dict.set("Subtype", Object::name(subtype));
        }
        let stream = self.binary_stream(dict, program)?;
        log::debug!(
            "Embedded font {}: {} -> {} bytes",
            font.base_font_name(),
            program.len(),
            stream.data().len()
        );
        Ok(Some(stream))
    }

    fn build(&self, dict: Dictionary, data: &[u8], chain: &FilterChain<'_>) -> Result<Stream> {
        let mut stream = Stream::new(dict, data.to_vec());
        chain.apply_to(&mut stream)?;
        Ok(stream)
    }
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new(FilterPipelineConfig::default())
    }
}

//! Stream encoder implementations for PDF filters.
//!
//! This module provides the encoding side of the filters this crate writes:
//! - FlateDecode (zlib/deflate) - compression
//! - ASCII85Decode - base-85 ASCII armoring
//!
//! Encoders are plain values holding only construction-time configuration, so
//! one instance can be shared across a whole document (and across threads).
//! Encoders can be chained; the chain remembers the order they ran in.

use crate::error::{Error, Result};
use crate::object::Stream;

mod ascii85;
mod flate;

pub use ascii85::Ascii85Encoder;
pub use flate::{CompressionLevel, FlateEncoder};

/// PDF stream filters produced by this crate.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// FlateDecode (deflate/zlib compression)
    FlateDecode,
    /// ASCII85Decode (base-85 encoding)
    ASCII85Decode,
}

impl Filter {
    /// Canonical filter name as it appears in a stream dictionary (without `/`).
    pub fn name(&self) -> &'static str {
        match self {
            Filter::FlateDecode => "FlateDecode",
            Filter::ASCII85Decode => "ASCII85Decode",
        }
    }

    /// Look up a filter by its PDF name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "FlateDecode" => Ok(Filter::FlateDecode),
            "ASCII85Decode" => Ok(Filter::ASCII85Decode),
            _ => Err(Error::UnsupportedFilter(name.to_string())),
        }
    }
}

/// Trait for PDF stream encoders.
///
/// Implementations are deterministic and side-effect free: the output depends
/// only on the input bytes and the encoder's fixed configuration.
pub trait StreamEncoder: Send + Sync {
    /// Encode the input data.
    ///
    /// In-memory encoders do not fail for any input; the `Result` carries
    /// plumbing errors from the underlying compressor.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// The filter a reader must apply to undo this encoding.
    fn filter(&self) -> Filter;

    /// Encode optional input: absent input yields absent output.
    fn encode_optional(&self, input: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
        input.map(|data| self.encode(data)).transpose()
    }
}

/// An ordered sequence of encoders.
///
/// Encoders run first to last, so a chain of `[flate, ascii85]` compresses and
/// then armors. The filters recorded on a stream keep that order.
#[derive(Default)]
pub struct FilterChain<'a> {
    encoders: Vec<&'a dyn StreamEncoder>,
}

impl<'a> FilterChain<'a> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an encoder to the chain.
    pub fn then(mut self, encoder: &'a dyn StreamEncoder) -> Self {
        self.encoders.push(encoder);
        self
    }

    /// Append an encoder only when `enabled` is set.
    pub fn then_if(self, enabled: bool, encoder: &'a dyn StreamEncoder) -> Self {
        if enabled {
            self.then(encoder)
        } else {
            self
        }
    }

    /// Whether the chain has no encoders.
    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Filters in application order.
    pub fn filters(&self) -> Vec<Filter> {
        self.encoders.iter().map(|e| e.filter()).collect()
    }

    /// Run every encoder over `data`, in order.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut current = data.to_vec();
        for encoder in &self.encoders {
            current = encoder.encode(&current)?;
        }
        Ok(current)
    }

    /// Encode a stream's payload in place, recording each filter.
    pub fn apply_to(&self, stream: &mut Stream) -> Result<()> {
        for encoder in &self.encoders {
            stream.apply(*encoder)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_stream;
    use crate::object::Dictionary;

    #[test]
    fn test_filter_names() {
        assert_eq!(Filter::FlateDecode.name(), "FlateDecode");
        assert_eq!(Filter::ASCII85Decode.name(), "ASCII85Decode");
        assert_eq!(Filter::from_name("ASCII85Decode").unwrap(), Filter::ASCII85Decode);
    }

    #[test]
    fn test_filter_from_unknown_name() {
        match Filter::from_name("LZWDecode") {
            Err(Error::UnsupportedFilter(name)) => assert_eq!(name, "LZWDecode"),
            _ => panic!("Expected UnsupportedFilter error"),
        }
    }

    #[test]
    fn test_encode_optional_absent() {
        assert_eq!(Ascii85Encoder.encode_optional(None).unwrap(), None);
        assert_eq!(
            Ascii85Encoder.encode_optional(Some(b"")).unwrap(),
            Some(b"~>".to_vec())
        );
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.encode(b"abc").unwrap(), b"abc");
    }

    #[test]
    fn test_chain_compress_then_armor() {
        let flate = FlateEncoder::BEST;
        let chain = FilterChain::new().then(&flate).then(&Ascii85Encoder);
        assert_eq!(chain.filters(), vec![Filter::FlateDecode, Filter::ASCII85Decode]);

        let original = b"BT /F1 12 Tf 72 720 Td (Hello) Tj ET".repeat(8);
        let encoded = chain.encode(&original).unwrap();
        assert!(encoded.ends_with(b"~>"));

        // A reader undoes the armor first, then inflates.
        let decoded =
            decode_stream(&encoded, &[Filter::ASCII85Decode, Filter::FlateDecode]).unwrap();
        assert_eq!(decoded, original);
        assert!(decode_stream(&encoded, &[Filter::FlateDecode, Filter::ASCII85Decode]).is_err());
    }

    #[test]
    fn test_chain_then_if() {
        let flate = FlateEncoder::default();
        let chain = FilterChain::new()
            .then_if(false, &flate)
            .then_if(true, &Ascii85Encoder);
        assert_eq!(chain.filters(), vec![Filter::ASCII85Decode]);
    }

    #[test]
    fn test_chain_apply_to_stream() {
        let flate = FlateEncoder::new(CompressionLevel::Fastest);
        let chain = FilterChain::new().then(&flate).then(&Ascii85Encoder);
        let mut stream = Stream::new(Dictionary::new(), &b"0 0 m 100 100 l S"[..]);
        chain.apply_to(&mut stream).unwrap();
        assert_eq!(stream.filters(), chain.filters().as_slice());
        assert_eq!(stream.decode_data().unwrap(), b"0 0 m 100 100 l S");
    }
}

//! Stream decoder implementations for the filters this crate writes.
//!
//! - FlateDecode (zlib/deflate)
//! - ASCII85Decode (base-85 encoding)
//!
//! These are the inverses of [`crate::encoders`] and exist to check generated
//! output; the crate does not read PDF files.

use crate::encoders::Filter;
use crate::error::Result;

mod ascii85;
mod flate;

pub use ascii85::Ascii85Decoder;
pub use flate::FlateDecoder;

/// Trait for PDF stream decoders.
pub trait StreamDecoder {
    /// Decode the input data.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Get the name of this decoder (e.g., "FlateDecode").
    fn name(&self) -> &str;
}

/// Decoder for a filter.
pub fn decoder_for(filter: Filter) -> Box<dyn StreamDecoder> {
    match filter {
        Filter::FlateDecode => Box::new(FlateDecoder),
        Filter::ASCII85Decode => Box::new(Ascii85Decoder),
    }
}

/// Decode stream data using a filter pipeline.
///
/// Filters are applied in the order given, which is the order they appear in
/// a stream's `/Filter` entry.
///
/// # Examples
///
/// ```
/// use pdf_kiln::decoders::decode_stream;
/// use pdf_kiln::encoders::Filter;
///
/// let decoded = decode_stream(b"<+U,m~>", &[Filter::ASCII85Decode]).unwrap();
/// assert_eq!(decoded, b"Test");
/// ```
pub fn decode_stream(data: &[u8], filters: &[Filter]) -> Result<Vec<u8>> {
    let mut current = data.to_vec();
    for filter in filters {
        current = decoder_for(*filter).decode(&current)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stream_no_filters() {
        let data = b"Hello, World!";
        let result = decode_stream(data, &[]).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_decoder_names() {
        assert_eq!(decoder_for(Filter::FlateDecode).name(), "FlateDecode");
        assert_eq!(decoder_for(Filter::ASCII85Decode).name(), "ASCII85Decode");
    }

    #[test]
    fn test_decode_stream_pipeline() {
        let result = decode_stream(b"<+U,m~>", &[Filter::ASCII85Decode]).unwrap();
        assert_eq!(result, b"Test");
    }
}

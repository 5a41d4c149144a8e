//! Integration tests for the stream filter pipeline.
//!
//! Covers:
//! - ASCII85 and Flate round trips over arbitrary input (proptest)
//! - Filter chaining order and its inverse
//! - Stream dictionaries produced by the configured pipeline

use pdf_kiln::config::FilterPipelineConfig;
use pdf_kiln::decoders::{decode_stream, Ascii85Decoder, FlateDecoder, StreamDecoder};
use pdf_kiln::encoders::{
    Ascii85Encoder, CompressionLevel, Filter, FilterChain, FlateEncoder, StreamEncoder,
};
use pdf_kiln::object::{Dictionary, Object};
use pdf_kiln::writer::StreamBuilder;
use proptest::prelude::*;

fn level_strategy() -> impl Strategy<Value = CompressionLevel> {
    prop_oneof![
        Just(CompressionLevel::None),
        Just(CompressionLevel::Fastest),
        Just(CompressionLevel::Default),
        Just(CompressionLevel::Best),
    ]
}

proptest! {
    #[test]
    fn ascii85_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = Ascii85Encoder.encode(&data).unwrap();
        prop_assert!(encoded.ends_with(b"~>"));
        prop_assert_eq!(Ascii85Decoder.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn ascii85_sparse_zero_round_trip(
        data in proptest::collection::vec(prop_oneof![9 => Just(0u8), 1 => any::<u8>()], 0..256)
    ) {
        let encoded = Ascii85Encoder.encode(&data).unwrap();
        prop_assert_eq!(Ascii85Decoder.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn flate_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        level in level_strategy(),
    ) {
        let encoded = FlateEncoder::new(level).encode(&data).unwrap();
        prop_assert_eq!(FlateDecoder.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn flate_then_ascii85_round_trip(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let flate = FlateEncoder::BEST;
        let chain = FilterChain::new().then(&flate).then(&Ascii85Encoder);
        let encoded = chain.encode(&data).unwrap();
        let decoded =
            decode_stream(&encoded, &[Filter::ASCII85Decode, Filter::FlateDecode]).unwrap();
        prop_assert_eq!(decoded, data);
    }
}

#[test]
fn test_zero_word_collapses_to_z() {
    let encoded = Ascii85Encoder.encode(&[0, 0, 0, 0, b'T', b'e', b's', b't']).unwrap();
    assert_eq!(encoded, b"z<+U,m~>");
}

#[test]
fn test_zero_tail_is_never_z() {
    for len in 1..4 {
        let encoded = Ascii85Encoder.encode(&vec![0u8; len]).unwrap();
        assert!(!encoded.contains(&b'z'), "tail of {} zero bytes", len);
        assert_eq!(encoded.len(), len + 1 + 2);
    }
}

#[test]
fn test_empty_input_still_terminated() {
    assert_eq!(Ascii85Encoder.encode(b"").unwrap(), b"~>");
    let flate = FlateEncoder::BEST.encode(b"").unwrap();
    assert_eq!(FlateDecoder.decode(&flate).unwrap(), b"");
}

#[test]
fn test_absent_input_yields_absent_output() {
    assert!(FlateEncoder::BEST.encode_optional(None).unwrap().is_none());
    assert!(Ascii85Encoder.encode_optional(None).unwrap().is_none());
}

#[test]
fn test_wrong_decode_order_fails() {
    let flate = FlateEncoder::default();
    let chain = FilterChain::new().then(&flate).then(&Ascii85Encoder);
    let encoded = chain.encode(b"some page content").unwrap();
    assert!(decode_stream(&encoded, &[Filter::FlateDecode]).is_err());
}

#[test]
fn test_shared_encoder_across_threads() {
    let encoder = FlateEncoder::BEST;
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let data = vec![i; 4096];
                let encoded = encoder.encode(&data).unwrap();
                (data, encoded)
            })
        })
        .collect();
    for handle in handles {
        let (data, encoded) = handle.join().unwrap();
        assert_eq!(FlateDecoder.decode(&encoded).unwrap(), data);
    }
}

#[test]
fn test_binary_stream_dictionary_records_decode_order() {
    let builder = StreamBuilder::new(FilterPipelineConfig::default());
    let stream = builder
        .binary_stream(Dictionary::new(), b"\x89PNG not really an image")
        .unwrap();

    assert_eq!(stream.filters(), &[Filter::FlateDecode, Filter::ASCII85Decode]);
    assert_eq!(
        stream.dict().get("Filter"),
        Some(&Object::Array(vec![
            Object::name("ASCII85Decode"),
            Object::name("FlateDecode"),
        ]))
    );
    assert_eq!(stream.decode_data().unwrap(), b"\x89PNG not really an image");
}

#[test]
fn test_toggle_matrix() {
    let data = b"0.5 0 0 0.5 0 0 cm /Im0 Do".repeat(16);
    for armor in [false, true] {
        for compress_binary in [false, true] {
            for compress_content in [false, true] {
                let config = FilterPipelineConfig::new()
                    .with_ascii_armor_binary(armor)
                    .with_compress_binary(compress_binary)
                    .with_compress_content(compress_content);
                let builder = StreamBuilder::new(config);

                let binary = builder.binary_stream(Dictionary::new(), &data).unwrap();
                let mut expected = Vec::new();
                if compress_binary {
                    expected.push(Filter::FlateDecode);
                }
                if armor {
                    expected.push(Filter::ASCII85Decode);
                }
                assert_eq!(binary.filters(), expected.as_slice());
                assert_eq!(binary.decode_data().unwrap(), data);

                let content = builder.content_stream(&data).unwrap();
                assert_eq!(content.filters().is_empty(), !compress_content);
                assert_eq!(content.decode_data().unwrap(), data);
            }
        }
    }
}

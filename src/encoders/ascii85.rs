//! ASCII85Encode (Base85) implementation.
//!
//! Every 4 input bytes become 5 characters in the range '!' to 'u'.
//! A full group of four zero bytes is written as the single character 'z'.
//! Output always ends with the end-of-data marker `~>`.

use crate::encoders::{Filter, StreamEncoder};
use crate::error::Result;

/// End-of-data marker.
const EOD: &[u8] = b"~>";

/// ASCII85Decode encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ascii85Encoder;

impl StreamEncoder for Ascii85Encoder {
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 4 * 5 + 5 + EOD.len());

        let mut groups = input.chunks_exact(4);
        for group in &mut groups {
            let word = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
            if word == 0 {
                output.push(b'z');
            } else {
                output.extend_from_slice(&base85_digits(word));
            }
        }

        // Partial tail: pad with zeros, keep n+1 digits. Never 'z'.
        let tail = groups.remainder();
        if !tail.is_empty() {
            let mut padded = [0u8; 4];
            padded[..tail.len()].copy_from_slice(tail);
            let digits = base85_digits(u32::from_be_bytes(padded));
            output.extend_from_slice(&digits[..tail.len() + 1]);
        }

        output.extend_from_slice(EOD);
        Ok(output)
    }

    fn filter(&self) -> Filter {
        Filter::ASCII85Decode
    }
}

/// Five base-85 digits of `word`, most significant first, offset into '!'..='u'.
fn base85_digits(mut word: u32) -> [u8; 5] {
    let mut digits = [0u8; 5];
    for digit in digits.iter_mut().rev() {
        *digit = (word % 85) as u8 + b'!';
        word /= 85;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::{Ascii85Decoder, StreamDecoder};

    fn encode(input: &[u8]) -> Vec<u8> {
        Ascii85Encoder.encode(input).unwrap()
    }

    #[test]
    fn test_ascii85_encode_simple() {
        assert_eq!(encode(b"Test"), b"<+U,m~>");
        assert_eq!(encode(b"Man "), b"9jqo^~>");
    }

    #[test]
    fn test_ascii85_encode_empty() {
        assert_eq!(encode(b""), b"~>");
    }

    #[test]
    fn test_ascii85_encode_zero_group() {
        assert_eq!(encode(&[0, 0, 0, 0]), b"z~>");
        assert_eq!(encode(&[0; 8]), b"zz~>");
    }

    #[test]
    fn test_ascii85_zero_tail_not_collapsed() {
        assert_eq!(encode(&[0]), b"!!~>");
        assert_eq!(encode(&[0, 0]), b"!!!~>");
        assert_eq!(encode(&[0, 0, 0]), b"!!!!~>");
        assert_eq!(encode(&[0, 0, 0, 0, 0]), b"z!!~>");
    }

    #[test]
    fn test_ascii85_max_word() {
        assert_eq!(encode(&[0xFF; 4]), b"s8W-!~>");
    }

    #[test]
    fn test_ascii85_partial_tail_round_trip() {
        for len in 0..12 {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let encoded = encode(&data);
            assert!(encoded.ends_with(b"~>"));
            assert_eq!(Ascii85Decoder.decode(&encoded).unwrap(), data, "len {}", len);
        }
    }

    #[test]
    fn test_ascii85_output_is_printable() {
        let data: Vec<u8> = (0..=255u8).collect();
        let encoded = encode(&data);
        assert!(encoded.iter().all(|&b| (b'!'..=b'z').contains(&b) || b == b'~' || b == b'>'));
    }
}

//! ASCII85Decode (Base85) implementation.
//!
//! Decodes ASCII85/Base85 encoded data. This encoding represents 4 bytes
//! as 5 ASCII characters in the range '!' to 'u'.
//! Special case: 'z' represents 4 zero bytes (00000000).

use crate::decoders::StreamDecoder;
use crate::error::{Error, Result};

/// ASCII85Decode filter implementation.
pub struct Ascii85Decoder;

impl StreamDecoder for Ascii85Decoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() / 5 * 4 + 4);
        let mut group = [0u8; 5];
        let mut count = 0;

        for &byte in input {
            match byte {
                b'~' => break,
                b'z' if count == 0 => output.extend_from_slice(&[0, 0, 0, 0]),
                b'z' => {
                    return Err(Error::Decode(
                        "ASCII85Decode: 'z' inside a group".to_string(),
                    ));
                },
                b'!'..=b'u' => {
                    group[count] = byte - b'!';
                    count += 1;
                    if count == 5 {
                        output.extend_from_slice(&group_word(&group)?.to_be_bytes());
                        count = 0;
                    }
                },
                _ if byte.is_ascii_whitespace() => {},
                _ => {
                    return Err(Error::Decode(format!(
                        "ASCII85Decode: invalid character 0x{:02X}",
                        byte
                    )));
                },
            }
        }

        match count {
            0 => {},
            1 => {
                return Err(Error::Decode(
                    "ASCII85Decode: final group has a single character".to_string(),
                ));
            },
            n => {
                // Pad with the highest digit ('u'), keep n-1 bytes.
                for digit in group.iter_mut().skip(n) {
                    *digit = 84;
                }
                output.extend_from_slice(&group_word(&group)?.to_be_bytes()[..n - 1]);
            },
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        "ASCII85Decode"
    }
}

fn group_word(digits: &[u8; 5]) -> Result<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, &d| acc.checked_mul(85)?.checked_add(d as u32))
        .ok_or_else(|| Error::Decode("ASCII85Decode: group value exceeds 32 bits".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii85_decode_simple() {
        assert_eq!(Ascii85Decoder.decode(b"<+U,m").unwrap(), b"Test");
    }

    #[test]
    fn test_ascii85_decode_z_special_case() {
        assert_eq!(Ascii85Decoder.decode(b"zz~>").unwrap(), [0u8; 8]);
    }

    #[test]
    fn test_ascii85_decode_with_whitespace() {
        assert_eq!(Ascii85Decoder.decode(b"<+U\n ,m~>").unwrap(), b"Test");
    }

    #[test]
    fn test_ascii85_decode_empty() {
        assert_eq!(Ascii85Decoder.decode(b"~>").unwrap(), b"");
        assert_eq!(Ascii85Decoder.decode(b"").unwrap(), b"");
    }

    #[test]
    fn test_ascii85_decode_partial_group() {
        assert_eq!(Ascii85Decoder.decode(b"!!~>").unwrap(), [0u8]);
    }

    #[test]
    fn test_ascii85_decode_invalid_character() {
        assert!(Ascii85Decoder.decode(b"Hello\x00").is_err());
    }

    #[test]
    fn test_ascii85_decode_z_in_middle() {
        assert!(Ascii85Decoder.decode(b"!z").is_err());
    }

    #[test]
    fn test_ascii85_decode_single_char_tail() {
        assert!(Ascii85Decoder.decode(b"<+U,m!~>").is_err());
    }

    #[test]
    fn test_ascii85_decode_overflow() {
        assert!(Ascii85Decoder.decode(b"uuuuu").is_err());
    }
}

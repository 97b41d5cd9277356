//! Hexadecimal codec.

use crate::EncodingError;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Encodes bytes as lowercase hex, two digits per byte.
///
/// # Example
///
/// ```
/// use encoding_converter::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0, 255, 16]), "00ff10");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

#[inline]
fn nibble(digit: u8) -> Result<u8, EncodingError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(EncodingError::InvalidEncoding(format!(
            "not a hex digit: {:?}",
            digit as char
        ))),
    }
}

/// Decodes a hex string into bytes. Both digit cases are accepted.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidEncoding`] if the length is odd or a
/// character is not a hex digit.
///
/// # Example
///
/// ```
/// use encoding_converter::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("00fF10").unwrap(), vec![0, 255, 16]);
/// assert!(hex_to_bytes("abc").is_err());
/// ```
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, EncodingError> {
    let digits = hex.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(EncodingError::InvalidEncoding(format!(
            "hex length must be even, got {}",
            digits.len()
        )));
    }
    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8, EncodingError> {
            Ok((nibble(pair[0])? << 4) | nibble(pair[1])?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(bytes_to_hex(&[0, 255, 16]), "00ff10");
        assert_eq!(bytes_to_hex(&[0x0a, 0xb0]), "0ab0");
    }

    #[test]
    fn test_decode() {
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("00ff10").unwrap(), vec![0, 255, 16]);
        assert_eq!(hex_to_bytes("DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_odd_length() {
        assert!(matches!(hex_to_bytes("0"), Err(EncodingError::InvalidEncoding(_))));
        assert!(matches!(hex_to_bytes("00f"), Err(EncodingError::InvalidEncoding(_))));
    }

    #[test]
    fn test_decode_bad_digit() {
        assert!(matches!(hex_to_bytes("0g"), Err(EncodingError::InvalidEncoding(_))));
        assert!(matches!(hex_to_bytes("-1"), Err(EncodingError::InvalidEncoding(_))));
        assert!(matches!(hex_to_bytes(" 0"), Err(EncodingError::InvalidEncoding(_))));
        // Two-byte UTF-8 character: even length, but not hex.
        assert!(matches!(hex_to_bytes("é"), Err(EncodingError::InvalidEncoding(_))));
    }
}

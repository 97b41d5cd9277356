//! UTF-8 and ASCII text codecs.

use crate::EncodingError;

/// Returns the UTF-8 bytes of `text`.
pub fn utf8_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Interprets bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidEncoding`] if the bytes are not valid
/// UTF-8. Nothing is replaced or dropped.
///
/// # Example
///
/// ```
/// use encoding_converter::bytes_to_utf8;
///
/// assert_eq!(bytes_to_utf8(&[0x63, 0x61, 0x66, 0xc3, 0xa9]).unwrap(), "café");
/// assert!(bytes_to_utf8(&[0xc3]).is_err());
/// ```
pub fn bytes_to_utf8(bytes: &[u8]) -> Result<String, EncodingError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        EncodingError::InvalidEncoding(format!(
            "malformed UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

/// Converts an ASCII string to bytes, one byte per character.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidEncoding`] on the first non-ASCII
/// character.
pub fn ascii_to_bytes(text: &str) -> Result<Vec<u8>, EncodingError> {
    match text.char_indices().find(|(_, c)| !c.is_ascii()) {
        Some((index, c)) => Err(EncodingError::InvalidEncoding(format!(
            "non-ASCII character {:?} at byte {}",
            c, index
        ))),
        None => Ok(text.as_bytes().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_multi_byte() {
        let text = "a€😀";
        let bytes = utf8_to_bytes(text);
        assert_eq!(bytes.len(), 1 + 3 + 4);
        assert_eq!(bytes_to_utf8(&bytes).unwrap(), text);
    }

    #[test]
    fn test_utf8_malformed() {
        // Lone continuation byte.
        assert!(matches!(bytes_to_utf8(&[0x80]), Err(EncodingError::InvalidEncoding(_))));
        // Truncated three-byte sequence.
        assert!(matches!(bytes_to_utf8(&[0x61, 0xe2, 0x82]), Err(EncodingError::InvalidEncoding(_))));
        // Overlong encoding of '/'.
        assert!(matches!(bytes_to_utf8(&[0xc0, 0xaf]), Err(EncodingError::InvalidEncoding(_))));
    }

    #[test]
    fn test_ascii() {
        assert_eq!(ascii_to_bytes("Hi!").unwrap(), b"Hi!");
        assert_eq!(ascii_to_bytes("").unwrap(), b"");
        assert_eq!(
            ascii_to_bytes("naïve"),
            Err(EncodingError::InvalidEncoding(
                "non-ASCII character 'ï' at byte 2".to_string()
            ))
        );
    }
}

//! Standard base64 decoding function.

use crate::constants::{reverse, ALPHABET_BYTES, INVALID, PAD_BYTE};
use crate::Base64Error;

/// Sextet value of every byte of the standard alphabet.
static TABLE: [u8; 256] = reverse(ALPHABET_BYTES);

#[inline]
fn sextet(byte: u8) -> Result<u32, Base64Error> {
    match TABLE[byte as usize] {
        INVALID => Err(Base64Error::InvalidBase64String),
        value => Ok(u32::from(value)),
    }
}

/// Decodes a standard, padded base64 string to bytes.
///
/// The decoder is strict: the input length must be a multiple of 4, padding
/// may only occupy the last one or two positions, and the bits discarded by
/// the final padded group must be zero.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// - [`Base64Error::InvalidPadding`] if `=` appears before the end.
/// - [`Base64Error::InvalidBase64String`] on a character outside the alphabet.
/// - [`Base64Error::InvalidTrailingBits`] on a non-canonical final group.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let padding = match (bytes[length - 2], bytes[length - 1]) {
        (PAD_BYTE, PAD_BYTE) => 2,
        (_, PAD_BYTE) => 1,
        _ => 0,
    };
    let body = &bytes[..length - padding];
    if body.contains(&PAD_BYTE) {
        return Err(Base64Error::InvalidPadding);
    }

    let mut out = Vec::with_capacity(length / 4 * 3 - padding);
    let mut chunks = body.chunks_exact(4);
    for quartet in &mut chunks {
        let chunk = (sextet(quartet[0])? << 18)
            | (sextet(quartet[1])? << 12)
            | (sextet(quartet[2])? << 6)
            | sextet(quartet[3])?;
        out.push((chunk >> 16) as u8);
        out.push((chunk >> 8) as u8);
        out.push(chunk as u8);
    }

    match *chunks.remainder() {
        [c1, c2] => {
            let chunk = (sextet(c1)? << 6) | sextet(c2)?;
            if chunk & 0b1111 != 0 {
                return Err(Base64Error::InvalidTrailingBits);
            }
            out.push((chunk >> 4) as u8);
        }
        [c1, c2, c3] => {
            let chunk = (sextet(c1)? << 12) | (sextet(c2)? << 6) | sextet(c3)?;
            if chunk & 0b11 != 0 {
                return Err(Base64Error::InvalidTrailingBits);
            }
            out.push((chunk >> 10) as u8);
            out.push((chunk >> 2) as u8);
        }
        _ => {}
    }

    Ok(out)
}

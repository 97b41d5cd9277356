//! Base64-Ext: base64 re-mapped onto an alphabet that sorts like the bytes
//! it encodes.
//!
//! Each character of the standard alphabet is replaced by the character at
//! the same position of [`ALPHABET_EXT`](crate::ALPHABET_EXT). Because the
//! Ext alphabet is in ascending ASCII order, two Ext strings of equal length
//! compare the same way as the byte sequences they encode. Padding is never
//! emitted.

use crate::base64_url::pad_base64;
use crate::constants::{permutation, ALPHABET_BYTES, ALPHABET_EXT_BYTES, INVALID, PAD_BYTE};
use crate::Base64Error;

static BASE64_TO_EXT: [u8; 256] = permutation(ALPHABET_BYTES, ALPHABET_EXT_BYTES);
static EXT_TO_BASE64: [u8; 256] = permutation(ALPHABET_EXT_BYTES, ALPHABET_BYTES);

fn remap<I>(input: I, capacity: usize, table: &[u8; 256]) -> Result<String, Base64Error>
where
    I: Iterator<Item = u8>,
{
    let mut out = String::with_capacity(capacity);
    for byte in input {
        match table[byte as usize] {
            INVALID => return Err(Base64Error::InvalidBase64String),
            mapped => out.push(mapped as char),
        }
    }
    Ok(out)
}

/// Converts a standard base64 string into Base64-Ext.
///
/// All `=` padding is stripped before mapping.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidBase64String`] if a character is outside
/// the standard alphabet.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::base64_to_base64_ext;
///
/// assert_eq!(base64_to_base64_ext("TWFu").unwrap(), "IL4i");
/// assert_eq!(base64_to_base64_ext("TQ==").unwrap(), "IF");
/// ```
pub fn base64_to_base64_ext(base64: &str) -> Result<String, Base64Error> {
    let body = base64.bytes().filter(|&b| b != PAD_BYTE);
    remap(body, base64.len(), &BASE64_TO_EXT)
}

/// Converts a Base64-Ext string back into padded standard base64.
///
/// # Errors
///
/// - [`Base64Error::InvalidBase64String`] if a character is outside the Ext
///   alphabet (this includes `=`).
/// - [`Base64Error::InvalidLength`] if `length % 4 == 1`.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::base64_ext_to_base64;
///
/// assert_eq!(base64_ext_to_base64("IF").unwrap(), "TQ==");
/// ```
pub fn base64_ext_to_base64(base64ext: &str) -> Result<String, Base64Error> {
    let body = remap(base64ext.bytes(), base64ext.len() + 2, &EXT_TO_BASE64)?;
    pad_base64(body)
}

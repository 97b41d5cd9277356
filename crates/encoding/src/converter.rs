//! Conversions between hex, base64 and UTF-8 text.
//!
//! Each function composes the codecs in [`crate::hex`], [`crate::text`] and
//! the `encoding-converter-base64` crate. Base64 failures surface as
//! [`EncodingError::InvalidEncoding`].

use encoding_converter_base64 as codec;

use crate::hex::{bytes_to_hex, hex_to_bytes};
use crate::text::{bytes_to_utf8, utf8_to_bytes};
use crate::EncodingError;

// ── Base64 over bytes ─────────────────────────────────────────────────────

/// Encodes bytes as padded standard base64.
///
/// # Example
///
/// ```
/// use encoding_converter::bytes_to_base64;
///
/// assert_eq!(bytes_to_base64(&[0x4d, 0x61, 0x6e]), "TWFu");
/// assert_eq!(bytes_to_base64(&[0x4d]), "TQ==");
/// ```
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    codec::to_base64(bytes)
}

/// Decodes padded standard base64 into bytes.
pub fn base64_to_bytes(base64: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(codec::from_base64(base64)?)
}

/// Encodes bytes as unpadded URL-safe base64.
pub fn bytes_to_base64_url(bytes: &[u8]) -> String {
    codec::to_base64_url(bytes)
}

/// Decodes unpadded URL-safe base64 into bytes.
pub fn base64_url_to_bytes(base64url: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(codec::from_base64_url(base64url)?)
}

// ── Hex ⇄ base64 / UTF-8 ──────────────────────────────────────────────────

/// Converts a hex string into padded standard base64.
///
/// # Example
///
/// ```
/// use encoding_converter::hex_to_base64;
///
/// assert_eq!(hex_to_base64("4d616e").unwrap(), "TWFu");
/// ```
pub fn hex_to_base64(hex: &str) -> Result<String, EncodingError> {
    Ok(bytes_to_base64(&hex_to_bytes(hex)?))
}

/// Converts padded standard base64 into a lowercase hex string.
pub fn base64_to_hex(base64: &str) -> Result<String, EncodingError> {
    Ok(bytes_to_hex(&base64_to_bytes(base64)?))
}

/// Decodes hex into bytes and reads them as UTF-8 text.
///
/// # Example
///
/// ```
/// use encoding_converter::hex_to_utf8;
///
/// assert_eq!(hex_to_utf8("636166c3a9").unwrap(), "café");
/// ```
pub fn hex_to_utf8(hex: &str) -> Result<String, EncodingError> {
    bytes_to_utf8(&hex_to_bytes(hex)?)
}

/// Encodes text as UTF-8 and renders the bytes as hex.
pub fn utf8_to_hex(text: &str) -> String {
    bytes_to_hex(&utf8_to_bytes(text))
}

// ── Base64 variants ───────────────────────────────────────────────────────

/// Converts standard base64 into its URL-safe, unpadded form.
pub fn base64_to_base64_url(base64: &str) -> String {
    codec::base64_to_base64_url(base64)
}

/// Converts URL-safe base64 back into padded standard base64.
///
/// A body whose length leaves a remainder of 1 modulo 4 is rejected.
pub fn base64_url_to_base64(base64url: &str) -> Result<String, EncodingError> {
    Ok(codec::base64_url_to_base64(base64url)?)
}

/// Converts standard base64 into the sortable Base64-Ext form.
pub fn base64_to_base64_ext(base64: &str) -> Result<String, EncodingError> {
    Ok(codec::base64_to_base64_ext(base64)?)
}

/// Converts Base64-Ext back into padded standard base64.
pub fn base64_ext_to_base64(base64ext: &str) -> Result<String, EncodingError> {
    Ok(codec::base64_ext_to_base64(base64ext)?)
}

//! Base64 encoding and decoding utilities.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - Base64-Ext, a padding-free variant whose alphabet sorts in the same
//!   order as the bytes it encodes
//!
//! # Example
//!
//! ```
//! use encoding_converter_base64::{to_base64, from_base64, base64_to_base64_ext};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! assert_eq!(base64_to_base64_ext(&encoded).unwrap(), "P5KgQ5wVSqxmQ5F");
//! ```

mod base64_ext;
mod base64_url;
mod constants;
mod from_base64;
mod to_base64;

pub use base64_ext::{base64_ext_to_base64, base64_to_base64_ext};
pub use base64_url::{base64_to_base64_url, base64_url_to_base64, from_base64_url, to_base64_url};
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_EXT, ALPHABET_EXT_BYTES, ALPHABET_URL, PAD};
pub use from_base64::from_base64;
pub use to_base64::to_base64;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains characters outside the alphabet.
    #[error("INVALID_BASE64_STRING")]
    InvalidBase64String,
    /// The input length cannot be produced by any base64 encoding.
    #[error("Base64 string length must be a multiple of 4")]
    InvalidLength,
    /// A padding character appears somewhere other than the end.
    #[error("INVALID_BASE64_PADDING")]
    InvalidPadding,
    /// The bits dropped by the final group are not zero.
    #[error("INVALID_BASE64_TRAILING_BITS")]
    InvalidTrailingBits,
}

//! encoding-converter - conversions between bytes, hex, base64 and UTF-8
//! text, plus sortable identifiers derived from timestamps.
//!
//! Every function is pure: no shared state, no I/O. Encoders return plain
//! values; decoders validate their input and return [`EncodingError`].
//!
//! # Example
//!
//! ```
//! use encoding_converter::{base64_to_hex, bytes_to_hex, hex_to_base64, timestamp_to_generated_id};
//!
//! assert_eq!(bytes_to_hex(&[0, 255, 16]), "00ff10");
//! assert_eq!(hex_to_base64("00ff10").unwrap(), "AP8Q");
//! assert_eq!(base64_to_hex("AP8Q").unwrap(), "00ff10");
//! assert_eq!(timestamp_to_generated_id(0).unwrap().len(), 12);
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod generated_id;
pub mod hex;
pub mod text;

// Re-exports for convenience
pub use converter::{
    base64_ext_to_base64, base64_to_base64_ext, base64_to_base64_url, base64_to_bytes,
    base64_to_hex, base64_url_to_base64, base64_url_to_bytes, bytes_to_base64,
    bytes_to_base64_url, hex_to_base64, hex_to_utf8, utf8_to_hex,
};
pub use error::EncodingError;
pub use generated_id::{
    timestamp_to_generated_id, timestamp_to_hex_generated_id, GENERATED_ID_BYTES,
    GENERATED_ID_HEX_LENGTH, GENERATED_ID_LENGTH, MAX_TIMESTAMP,
};
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use text::{ascii_to_bytes, bytes_to_utf8, utf8_to_bytes};

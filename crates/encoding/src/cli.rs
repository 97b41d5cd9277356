//! `encoding-convert` — command-line front end for the conversions.
//!
//! Provides the core logic used by the binary entry point: the conversion
//! name selects a function, the input is the text read from stdin.

use thiserror::Error;

use crate::converter::{
    base64_ext_to_base64, base64_to_base64_ext, base64_to_base64_url, base64_to_hex,
    base64_url_to_base64, hex_to_base64, hex_to_utf8, utf8_to_hex,
};
use crate::generated_id::{timestamp_to_generated_id, timestamp_to_hex_generated_id};
use crate::EncodingError;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown conversion: {0}")]
    UnknownConversion(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

// ── Conversions ───────────────────────────────────────────────────────────

/// Names accepted by [`convert`], in the order they are listed in usage output.
pub const CONVERSIONS: &[&str] = &[
    "hex-to-base64",
    "base64-to-hex",
    "hex-to-utf8",
    "utf8-to-hex",
    "base64-to-base64-url",
    "base64-url-to-base64",
    "base64-to-base64-ext",
    "base64-ext-to-base64",
    "timestamp-to-hex-generated-id",
    "timestamp-to-generated-id",
];

fn parse_timestamp(input: &str) -> Result<i64, CliError> {
    input
        .parse::<i64>()
        .map_err(|_| CliError::InvalidTimestamp(input.to_string()))
}

/// Applies the conversion called `conversion` to `input`.
///
/// # Example
///
/// ```
/// use encoding_converter::cli::convert;
///
/// assert_eq!(convert("hex-to-base64", "4d616e").unwrap(), "TWFu");
/// assert_eq!(convert("timestamp-to-generated-id", "0").unwrap(), "------------");
/// ```
pub fn convert(conversion: &str, input: &str) -> Result<String, CliError> {
    let output = match conversion {
        "hex-to-base64" => hex_to_base64(input)?,
        "base64-to-hex" => base64_to_hex(input)?,
        "hex-to-utf8" => hex_to_utf8(input)?,
        "utf8-to-hex" => utf8_to_hex(input),
        "base64-to-base64-url" => base64_to_base64_url(input),
        "base64-url-to-base64" => base64_url_to_base64(input)?,
        "base64-to-base64-ext" => base64_to_base64_ext(input)?,
        "base64-ext-to-base64" => base64_ext_to_base64(input)?,
        "timestamp-to-hex-generated-id" => {
            timestamp_to_hex_generated_id(parse_timestamp(input)?)?
        }
        "timestamp-to-generated-id" => timestamp_to_generated_id(parse_timestamp(input)?)?,
        other => return Err(CliError::UnknownConversion(other.to_string())),
    };
    Ok(output)
}

/// Usage text printed when the conversion argument is missing.
pub fn usage() -> String {
    let mut out = String::from("Usage: encoding-convert <conversion> < input\n\nConversions:\n");
    for name in CONVERSIONS {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

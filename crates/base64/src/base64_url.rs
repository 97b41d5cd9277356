//! URL-safe base64: conversions between padded standard strings and the
//! unpadded `-`/`_` variant.

use crate::constants::PAD;
use crate::{from_base64, to_base64, Base64Error};

/// Restores `=` padding to an unpadded base64 body.
///
/// A body length of `4n + 1` can never be produced by an encoder and is
/// rejected with [`Base64Error::InvalidLength`].
pub(crate) fn pad_base64(mut body: String) -> Result<String, Base64Error> {
    match body.len() % 4 {
        0 => {}
        2 => body.push_str("=="),
        3 => body.push(PAD),
        _ => return Err(Base64Error::InvalidLength),
    }
    Ok(body)
}

/// Converts a standard base64 string into its URL-safe form.
///
/// `+` becomes `-`, `/` becomes `_`, and all `=` padding is removed. Other
/// characters pass through unchanged.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::base64_to_base64_url;
///
/// assert_eq!(base64_to_base64_url("ab+c/de="), "ab-c_de");
/// ```
pub fn base64_to_base64_url(base64: &str) -> String {
    base64
        .chars()
        .filter(|&c| c != PAD)
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

/// Converts a URL-safe base64 string back into padded standard base64.
///
/// `-` becomes `+`, `_` becomes `/`, and padding is restored from the
/// length: a remainder of 2 gets `==`, a remainder of 3 gets `=`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] when `length % 4 == 1`.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::{base64_url_to_base64, Base64Error};
///
/// assert_eq!(base64_url_to_base64("ab").unwrap(), "ab==");
/// assert_eq!(base64_url_to_base64("a"), Err(Base64Error::InvalidLength));
/// ```
pub fn base64_url_to_base64(base64url: &str) -> Result<String, Base64Error> {
    let body = base64url
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    pad_base64(body)
}

/// Encodes bytes to a URL-safe base64 string without padding.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    base64_to_base64_url(&to_base64(uint8))
}

/// Decodes an unpadded URL-safe base64 string to bytes.
///
/// # Errors
///
/// Fails like [`from_base64`] does on the re-padded standard form.
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    from_base64(&base64_url_to_base64(encoded)?)
}

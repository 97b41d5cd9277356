//! Error taxonomy shared by every conversion.

use encoding_converter_base64::Base64Error;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The input is not valid for the encoding it claims to be in.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
    /// A numeric input does not fit the target layout.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<Base64Error> for EncodingError {
    fn from(e: Base64Error) -> Self {
        EncodingError::InvalidEncoding(e.to_string())
    }
}

//! Sortable, time-ordered identifiers derived from a millisecond timestamp.
//!
//! A generated id is nine bytes: the timestamp in the high 42 bits, a 2-bit
//! counter (always zero here), then 28 zero bits. Rendered as Base64-Ext it
//! is twelve characters that sort chronologically.

use crate::converter::{base64_to_base64_ext, hex_to_base64};
use crate::EncodingError;

/// Largest timestamp, in milliseconds, that fits the 42-bit field.
pub const MAX_TIMESTAMP: i64 = (1 << 42) - 1;

/// Size of a generated id in bytes.
pub const GENERATED_ID_BYTES: usize = 9;

/// Length of a generated id rendered as hex.
pub const GENERATED_ID_HEX_LENGTH: usize = GENERATED_ID_BYTES * 2;

/// Length of a generated id rendered as Base64-Ext.
pub const GENERATED_ID_LENGTH: usize = GENERATED_ID_BYTES / 3 * 4;

/// Hex digits below the timestamp and counter: one nibble to byte-align the
/// 44-bit value plus three reserved bytes.
const LOW_ZERO_DIGITS: &str = "0000000";

/// Renders the generated id for `timestamp` (counter zero) as 18 hex digits.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidArgument`] if `timestamp` is negative or
/// larger than [`MAX_TIMESTAMP`].
///
/// # Example
///
/// ```
/// use encoding_converter::timestamp_to_hex_generated_id;
///
/// assert_eq!(timestamp_to_hex_generated_id(0).unwrap(), "000000000000000000");
/// assert_eq!(timestamp_to_hex_generated_id(1).unwrap(), "000000000040000000");
/// ```
pub fn timestamp_to_hex_generated_id(timestamp: i64) -> Result<String, EncodingError> {
    if !(0..=MAX_TIMESTAMP).contains(&timestamp) {
        return Err(EncodingError::InvalidArgument(format!(
            "timestamp {} is outside 0..={}",
            timestamp, MAX_TIMESTAMP
        )));
    }
    // Low two bits hold the counter.
    let id = timestamp << 2;
    let hex = format!("{:x}{}", id, LOW_ZERO_DIGITS);
    Ok(format!("{:0>width$}", hex, width = GENERATED_ID_HEX_LENGTH))
}

/// Renders the generated id for `timestamp` (counter zero) as Base64-Ext.
///
/// Ids for later timestamps compare greater as plain strings.
///
/// # Errors
///
/// Returns [`EncodingError::InvalidArgument`] if `timestamp` is out of range.
///
/// # Example
///
/// ```
/// use encoding_converter::timestamp_to_generated_id;
///
/// assert_eq!(timestamp_to_generated_id(0).unwrap(), "------------");
/// assert!(timestamp_to_generated_id(1).unwrap() < timestamp_to_generated_id(2).unwrap());
/// ```
pub fn timestamp_to_generated_id(timestamp: i64) -> Result<String, EncodingError> {
    let hex = timestamp_to_hex_generated_id(timestamp)?;
    base64_to_base64_ext(&hex_to_base64(&hex)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_zero() {
        assert_eq!(timestamp_to_hex_generated_id(0).unwrap(), "000000000000000000");
    }

    #[test]
    fn test_hex_known_values() {
        assert_eq!(
            timestamp_to_hex_generated_id(1_370_563_200_000).unwrap(),
            "4fc6fbb10000000000"
        );
        assert_eq!(
            timestamp_to_hex_generated_id(MAX_TIMESTAMP).unwrap(),
            "ffffffffffc0000000"
        );
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(timestamp_to_generated_id(1).unwrap(), "------0-----");
        assert_eq!(
            timestamp_to_generated_id(1_370_563_200_000).unwrap(),
            "IwQvgF------"
        );
        assert_eq!(timestamp_to_generated_id(MAX_TIMESTAMP).unwrap(), "zzzzzzz-----");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            timestamp_to_hex_generated_id(-1),
            Err(EncodingError::InvalidArgument(_))
        ));
        assert!(matches!(
            timestamp_to_hex_generated_id(MAX_TIMESTAMP + 1),
            Err(EncodingError::InvalidArgument(_))
        ));
        assert!(matches!(
            timestamp_to_generated_id(i64::MAX),
            Err(EncodingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lengths() {
        assert_eq!(GENERATED_ID_HEX_LENGTH, 18);
        assert_eq!(GENERATED_ID_LENGTH, 12);
    }
}

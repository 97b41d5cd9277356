//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Appends the alphabet character for the low six bits of `sextet`.
#[inline]
fn push_sextet(out: &mut String, sextet: u32) {
    out.push(ALPHABET_BYTES[(sextet & 0b11_1111) as usize] as char);
}

/// Encodes a byte slice to a standard base64 string.
///
/// Every full three-byte window is packed into one 24-bit integer and split
/// into four six-bit groups. A trailing single byte yields two characters and
/// `==`; a trailing pair yields three characters and `=`. The unused low bits
/// of the last character are zero.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with standard padding. Its length is always a
/// multiple of 4.
///
/// # Example
///
/// ```
/// use encoding_converter_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(uint8.len().div_ceil(3) * 4);

    let mut chunks = uint8.chunks_exact(3);
    for triplet in &mut chunks {
        let chunk =
            (u32::from(triplet[0]) << 16) | (u32::from(triplet[1]) << 8) | u32::from(triplet[2]);
        push_sextet(&mut out, chunk >> 18);
        push_sextet(&mut out, chunk >> 12);
        push_sextet(&mut out, chunk >> 6);
        push_sextet(&mut out, chunk);
    }

    match *chunks.remainder() {
        [o1] => {
            let chunk = u32::from(o1);
            push_sextet(&mut out, chunk >> 2);
            push_sextet(&mut out, (chunk & 0b11) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            let chunk = (u32::from(o1) << 8) | u32::from(o2);
            push_sextet(&mut out, chunk >> 10);
            push_sextet(&mut out, chunk >> 4);
            push_sextet(&mut out, (chunk & 0b1111) << 2);
            out.push(PAD);
        }
        _ => {}
    }

    out
}

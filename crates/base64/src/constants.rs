/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Sortable base64 alphabet. Characters are in ascending ASCII order, so
/// comparing two encoded strings compares the underlying bytes.
pub const ALPHABET_EXT: &str = "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Sortable base64 alphabet as a byte array.
pub const ALPHABET_EXT_BYTES: &[u8; 64] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';

/// Marks a byte that has no entry in a lookup table.
pub(crate) const INVALID: u8 = 0xff;

/// Builds a 256-entry table mapping each byte of `from` to the byte of `to`
/// at the same position. Bytes not in `from` map to [`INVALID`].
pub(crate) const fn permutation(from: &[u8; 64], to: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[from[i] as usize] = to[i];
        i += 1;
    }
    table
}

/// Builds a 256-entry table mapping each alphabet byte to its sextet value.
pub(crate) const fn reverse(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

//! Tests for the sortable Base64-Ext variant.

use std::collections::HashSet;

use encoding_converter_base64::{
    base64_ext_to_base64, base64_to_base64_ext, to_base64, ALPHABET, ALPHABET_EXT,
};
use proptest::prelude::*;

#[test]
fn is_a_bijection_on_the_alphabet() {
    let mapped: HashSet<char> = ALPHABET
        .chars()
        .map(|c| {
            let ext = base64_to_base64_ext(&c.to_string()).unwrap();
            assert_eq!(ext.len(), 1);
            ext.chars().next().unwrap()
        })
        .collect();
    assert_eq!(mapped.len(), 64);
    assert_eq!(mapped, ALPHABET_EXT.chars().collect::<HashSet<_>>());
}

#[test]
fn never_pads() {
    for len in 0..32usize {
        let blob = vec![0xa5u8; len];
        assert!(!base64_to_base64_ext(&to_base64(&blob)).unwrap().contains('='));
    }
}

proptest! {
    #[test]
    fn preserves_byte_order(
        a in proptest::collection::vec(any::<u8>(), 9),
        b in proptest::collection::vec(any::<u8>(), 9),
    ) {
        let ext_a = base64_to_base64_ext(&to_base64(&a)).unwrap();
        let ext_b = base64_to_base64_ext(&to_base64(&b)).unwrap();
        prop_assert_eq!(a.cmp(&b), ext_a.cmp(&ext_b));
    }

    #[test]
    fn round_trips(blob in proptest::collection::vec(any::<u8>(), 0..128)) {
        let standard = to_base64(&blob);
        let ext = base64_to_base64_ext(&standard).unwrap();
        prop_assert_eq!(base64_ext_to_base64(&ext).unwrap(), standard);
    }
}

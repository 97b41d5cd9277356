//! Property tests for generated identifiers.

use encoding_converter::{
    base64_ext_to_base64, base64_to_hex, timestamp_to_generated_id,
    timestamp_to_hex_generated_id, GENERATED_ID_HEX_LENGTH, GENERATED_ID_LENGTH, MAX_TIMESTAMP,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ids_sort_chronologically(a in 0..=MAX_TIMESTAMP, b in 0..=MAX_TIMESTAMP) {
        let id_a = timestamp_to_generated_id(a).unwrap();
        let id_b = timestamp_to_generated_id(b).unwrap();
        prop_assert_eq!(a.cmp(&b), id_a.cmp(&id_b));
    }

    #[test]
    fn adjacent_ids_are_strictly_ordered(t in 0..MAX_TIMESTAMP) {
        let earlier = timestamp_to_generated_id(t).unwrap();
        let later = timestamp_to_generated_id(t + 1).unwrap();
        prop_assert!(earlier < later);
    }

    #[test]
    fn ids_have_fixed_length(t in 0..=MAX_TIMESTAMP) {
        prop_assert_eq!(timestamp_to_hex_generated_id(t).unwrap().len(), GENERATED_ID_HEX_LENGTH);
        prop_assert_eq!(timestamp_to_generated_id(t).unwrap().len(), GENERATED_ID_LENGTH);
    }

    #[test]
    fn ext_id_decodes_to_hex_id(t in 0..=MAX_TIMESTAMP) {
        let ext = timestamp_to_generated_id(t).unwrap();
        let hex = base64_to_hex(&base64_ext_to_base64(&ext).unwrap()).unwrap();
        prop_assert_eq!(hex, timestamp_to_hex_generated_id(t).unwrap());
    }

    #[test]
    fn hex_id_carries_timestamp_in_high_bits(t in 0..=MAX_TIMESTAMP) {
        let hex = timestamp_to_hex_generated_id(t).unwrap();
        let value = u128::from_str_radix(&hex, 16).unwrap();
        prop_assert_eq!(value >> 30, t as u128);
        prop_assert_eq!(value & ((1 << 30) - 1), 0);
    }
}

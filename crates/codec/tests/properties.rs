use byte_codec::{
    apply_block_padding, bytes_to_hex, bytes_to_printable_string, bytes_to_string, hex_to_bytes,
    legacy, remove_block_padding, string_to_bytes,
};
use proptest::prelude::*;

#[test]
fn sm4_pipeline_key_and_plaintext() {
    let key: [u8; 16] = byte_codec::hex_to_array("0123456789abcdeffedcba9876543210").unwrap();
    assert_eq!(bytes_to_hex(&key), "0123456789ABCDEFFEDCBA9876543210");

    let padded = apply_block_padding(&string_to_bytes("HELLO"), 16).unwrap();
    assert_eq!(bytes_to_hex(&padded), "48454C4C4F0B0B0B0B0B0B0B0B0B0B0B");
}

proptest! {
    #[test]
    fn prop_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = bytes_to_hex(&bytes);
        prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn prop_hex_is_uppercase_and_double_length(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = bytes_to_hex(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert!(encoded.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    }

    #[test]
    fn prop_lowercase_hex_decodes_like_uppercase(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let lower = bytes_to_hex(&bytes).to_ascii_lowercase();
        prop_assert_eq!(hex_to_bytes(&lower).unwrap(), bytes);
    }

    #[test]
    fn prop_string_round_trip(text in any::<String>()) {
        prop_assert_eq!(bytes_to_string(&string_to_bytes(&text)), text);
    }

    #[test]
    fn prop_legacy_string_round_trip(text in "[^\\x00]*") {
        let buf = legacy::string_to_cbytes(&text).unwrap();
        prop_assert_eq!(buf.last(), Some(&0));
        prop_assert_eq!(legacy::cbytes_to_string(&buf).unwrap(), text);
    }

    #[test]
    fn prop_printable_is_filtered_subsequence(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let expected: Vec<u8> = bytes.iter().copied().filter(|&b| (32..=126).contains(&b)).collect();

        let printable = bytes_to_printable_string(&bytes);
        prop_assert!(printable.len() <= bytes.len());
        prop_assert_eq!(printable.into_bytes(), expected);
    }

    #[test]
    fn prop_bytes_to_string_accepts_any_buffer(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let text = bytes_to_string(&bytes);
        if let Ok(valid) = std::str::from_utf8(&bytes) {
            prop_assert_eq!(text, valid);
        }
    }

    #[test]
    fn prop_padding_fills_to_block_multiple(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        block_size in 1usize..=255,
    ) {
        let padded = apply_block_padding(&data, block_size).unwrap();
        let value = block_size - data.len() % block_size;

        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(padded.len(), data.len() + value);
        prop_assert_eq!(&padded[..data.len()], &data[..]);
        prop_assert_eq!(*padded.last().unwrap() as usize, value);
        prop_assert!(padded[data.len()..].iter().all(|&b| b as usize == value));
    }

    #[test]
    fn prop_padding_removes_cleanly(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        block_size in 1usize..=255,
    ) {
        let padded = apply_block_padding(&data, block_size).unwrap();
        prop_assert_eq!(remove_block_padding(&padded, block_size).unwrap(), data);
    }
}

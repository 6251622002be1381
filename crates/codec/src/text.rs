//! Conversions between text and raw byte buffers.
//!
//! Both byte-to-text directions are total: decrypted SM4 output is arbitrary
//! binary, so no buffer is rejected for its encoding.

use std::borrow::Cow;

/// Copy the bytes of `text` into a new buffer.
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Reinterpret `bytes` as text without filtering.
///
/// Valid UTF-8, and so every buffer produced by [`string_to_bytes`], converts
/// back unchanged. Each invalid sequence becomes `U+FFFD`.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_owned(),
        Cow::Owned(text) => {
            tracing::debug!(input_len = bytes.len(), "replaced invalid UTF-8 sequences");
            text
        }
    }
}

/// Keep only the printable ASCII bytes (`0x20..=0x7E`) of `bytes`.
///
/// Control characters, DEL and bytes at or above `0x80` are dropped, so
/// embedded zeros are fine and the surviving bytes keep their order.
///
/// ```
/// let text = byte_codec::bytes_to_printable_string(&[0x41, 0x00, 0x1F, 0x42]);
/// assert_eq!(text, "AB");
/// ```
pub fn bytes_to_printable_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .copied()
        .filter(|&b| is_printable(b))
        .map(char::from)
        .collect()
}

fn is_printable(byte: u8) -> bool {
    (0x20..0x7F).contains(&byte)
}

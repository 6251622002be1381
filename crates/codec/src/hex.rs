//! Uppercase hex encoding and odd-length tolerant hex decoding.
//!
//! Hex is how keys and ciphertext are displayed and exchanged by the SM4
//! pipeline. Decoding is strict: any character outside `0-9a-fA-F` is
//! rejected rather than decoded to an arbitrary value.

use std::borrow::Cow;

use hex::FromHexError;

use crate::error::{CodecError, Result};

/// Encode `bytes` as an uppercase hex string, two digits per byte.
///
/// ```
/// assert_eq!(byte_codec::bytes_to_hex(&[0x00, 0xFF, 0x07]), "00FF07");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Decode a hex string into bytes.
///
/// An odd-length input is decoded as if a leading `'0'` were present, so
/// `"ABC"` yields `[0x0A, 0xBC]`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHexDigit`] for the first character that is not
/// a hex digit. The reported index refers to `hex`, not to the padded copy.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let odd = hex.len() % 2 != 0;
    let padded: Cow<'_, str> = if odd {
        Cow::Owned(format!("0{hex}"))
    } else {
        Cow::Borrowed(hex)
    };

    hex::decode(padded.as_ref()).map_err(|e| {
        let err = map_hex_error(e, hex, odd);
        tracing::debug!(input_len = hex.len(), error = %err, "rejected hex input");
        err
    })
}

/// Decode a hex string into a fixed-size array, e.g. a 16-byte SM4 key.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHexDigit`] on a non-hex character, or
/// [`CodecError::InvalidLength`] if the decoded length is not `N`.
pub fn hex_to_array<const N: usize>(hex: &str) -> Result<[u8; N]> {
    let bytes = hex_to_bytes(hex)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        tracing::debug!(found = bytes.len(), expected = N, "rejected hex key length");
        CodecError::InvalidLength {
            found: bytes.len(),
            expected: N,
        }
    })
}

fn map_hex_error(error: FromHexError, input: &str, odd: bool) -> CodecError {
    match error {
        FromHexError::InvalidHexCharacter { c, index } => {
            // The prepended '0' shifts every position by one.
            let offset = if odd { index - 1 } else { index };
            // Everything before `offset` is an ASCII hex digit, so `offset` is a
            // char boundary. The hex crate reports a lone byte, not the char.
            CodecError::InvalidHexDigit {
                character: input[offset..].chars().next().unwrap_or(c),
                index: input[..offset].chars().count(),
            }
        }
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            unreachable!("hex input is padded to an even length before decoding")
        }
    }
}

//! NUL-terminated buffer variants for C-style callers.
//!
//! These mirror the explicit-length API but follow the C string convention:
//! input length is found by scanning to the first zero byte, and produced
//! buffers carry one trailing zero after the payload. Binary data can contain
//! zero bytes, so new code should use the explicit-length functions.

use std::ffi::{CStr, CString};

use crate::error::{CodecError, Result};
use crate::{hex, padding, text};

/// Payload of a NUL-terminated buffer, excluding the terminator.
fn payload(buf: &[u8]) -> Result<&[u8]> {
    CStr::from_bytes_until_nul(buf)
        .map(CStr::to_bytes)
        .map_err(|_| {
            tracing::debug!(input_len = buf.len(), "rejected unterminated buffer");
            CodecError::MissingNulTerminator
        })
}

fn terminated(mut bytes: Vec<u8>) -> Vec<u8> {
    bytes.push(0);
    bytes
}

/// Copy `text` into a new buffer followed by a zero byte.
///
/// # Errors
///
/// Returns [`CodecError::InteriorNul`] if `text` contains a NUL.
pub fn string_to_cbytes(text: &str) -> Result<Vec<u8>> {
    CString::new(text)
        .map(CString::into_bytes_with_nul)
        .map_err(|e| CodecError::InteriorNul {
            position: e.nul_position(),
        })
}

/// Decode `hex` and append a zero byte to the result.
///
/// # Errors
///
/// See [`hex_to_bytes`](crate::hex_to_bytes).
pub fn hex_to_cbytes(hex: &str) -> Result<Vec<u8>> {
    hex::hex_to_bytes(hex).map(terminated)
}

/// Convert the bytes before the first zero in `buf` to text.
///
/// # Errors
///
/// Returns [`CodecError::MissingNulTerminator`] if `buf` holds no zero byte.
pub fn cbytes_to_string(buf: &[u8]) -> Result<String> {
    payload(buf).map(text::bytes_to_string)
}

/// Uppercase hex of the bytes before the first zero in `buf`.
///
/// # Errors
///
/// Returns [`CodecError::MissingNulTerminator`] if `buf` holds no zero byte.
pub fn cbytes_to_hex(buf: &[u8]) -> Result<String> {
    payload(buf).map(hex::bytes_to_hex)
}

/// Pad the bytes before the first zero in `buf` and append a zero byte.
///
/// Payload bytes after an embedded zero are lost; use
/// [`apply_block_padding`](crate::apply_block_padding) for binary data.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBlockSize`] for an unusable block size, or
/// [`CodecError::MissingNulTerminator`] if `buf` holds no zero byte.
pub fn apply_cpadding(buf: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let padder = padding::BlockPadding::new(block_size)?;
    Ok(terminated(padder.pad(payload(buf)?)))
}

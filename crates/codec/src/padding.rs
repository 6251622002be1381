//! PKCS#7 block padding.
//!
//! Each padding byte holds the number of padding bytes appended, a value in
//! `1..=block_size`. Data that is already block-aligned gains a full extra
//! block, so padding can always be removed unambiguously.

use crate::error::{CodecError, Result};

/// Block size of the SM4 cipher (128 bits).
pub const SM4_BLOCK_SIZE: usize = 16;

/// Largest block size whose padding value still fits in one byte.
pub const MAX_BLOCK_SIZE: usize = u8::MAX as usize;

/// A validated PKCS#7 block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPadding {
    block_size: u8,
}

impl BlockPadding {
    /// Create a padder for `block_size`-byte blocks.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidBlockSize`] if `block_size` is zero or
    /// greater than [`MAX_BLOCK_SIZE`].
    pub fn new(block_size: usize) -> Result<Self> {
        match u8::try_from(block_size) {
            Ok(size) if size > 0 => Ok(Self { block_size: size }),
            _ => {
                tracing::debug!(block_size, "rejected block size");
                Err(CodecError::InvalidBlockSize(block_size))
            }
        }
    }

    /// Padder for the SM4 block size.
    pub fn sm4() -> Self {
        Self {
            block_size: SM4_BLOCK_SIZE as u8,
        }
    }

    pub fn block_size(&self) -> usize {
        usize::from(self.block_size)
    }

    /// Length of `data_len` bytes once padded.
    pub fn padded_len(&self, data_len: usize) -> usize {
        data_len + self.padding_value(data_len) as usize
    }

    fn padding_value(&self, data_len: usize) -> u8 {
        let block_size = self.block_size();
        // Always in 1..=block_size, which fits in a u8.
        (block_size - data_len % block_size) as u8
    }

    /// Return a copy of `data` with PKCS#7 padding appended.
    pub fn pad(&self, data: &[u8]) -> Vec<u8> {
        let value = self.padding_value(data.len());
        let mut padded = Vec::with_capacity(data.len() + value as usize);
        padded.extend_from_slice(data);
        padded.resize(data.len() + value as usize, value);
        padded
    }

    /// Verify the PKCS#7 padding on `padded` and return the payload before it.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidPadding`] if `padded` is empty, is not a
    /// whole number of blocks, or does not end in a consistent padding run.
    pub fn unpad<'a>(&self, padded: &'a [u8]) -> Result<&'a [u8]> {
        let reject = |reason: &'static str| {
            tracing::debug!(
                input_len = padded.len(),
                block_size = self.block_size(),
                reason,
                "rejected padded input"
            );
            Err(CodecError::InvalidPadding(reason))
        };

        let Some(&value) = padded.last() else {
            return reject("empty input");
        };
        if padded.len() % self.block_size() != 0 {
            return reject("length is not a multiple of the block size");
        }
        if value == 0 || value > self.block_size {
            return reject("padding value out of range");
        }

        let payload_len = padded.len() - value as usize;
        if padded[payload_len..].iter().any(|&b| b != value) {
            return reject("inconsistent padding bytes");
        }
        Ok(&padded[..payload_len])
    }
}

impl Default for BlockPadding {
    fn default() -> Self {
        Self::sm4()
    }
}

/// Pad `data` to a multiple of `block_size` bytes.
///
/// ```
/// let padded = byte_codec::apply_block_padding(b"HELLO", 16).unwrap();
/// assert_eq!(padded.len(), 16);
/// assert_eq!(padded[5..], [0x0Bu8; 11]);
/// ```
///
/// # Errors
///
/// Returns [`CodecError::InvalidBlockSize`] if `block_size` is zero or
/// greater than [`MAX_BLOCK_SIZE`].
pub fn apply_block_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    Ok(BlockPadding::new(block_size)?.pad(data))
}

/// Strip and verify the padding added by [`apply_block_padding`].
///
/// # Errors
///
/// Returns [`CodecError::InvalidBlockSize`] for an unusable block size and
/// [`CodecError::InvalidPadding`] if the padding does not verify.
pub fn remove_block_padding(padded: &[u8], block_size: usize) -> Result<Vec<u8>> {
    BlockPadding::new(block_size)?
        .unpad(padded)
        .map(<[u8]>::to_vec)
}

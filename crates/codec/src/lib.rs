//! Byte/string conversions, hex encoding and PKCS#7 block padding used around
//! the SM4 cipher pipeline.
//!
//! All functions are stateless and return newly allocated values. Inputs are
//! validated up front and failures are reported as [`CodecError`].

pub mod config;
pub mod error;
pub mod hex;
pub mod legacy;
pub mod padding;
pub mod telemetry;
pub mod text;

pub use crate::config::CodecConfig;
pub use crate::error::{CodecError, Result};
pub use crate::hex::{bytes_to_hex, hex_to_array, hex_to_bytes};
pub use crate::padding::{
    apply_block_padding, remove_block_padding, BlockPadding, MAX_BLOCK_SIZE, SM4_BLOCK_SIZE,
};
pub use crate::text::{bytes_to_printable_string, bytes_to_string, string_to_bytes};

//! Configuration loading and validation for codec consumers.
//!
//! Values are read from `CODEC_`-prefixed environment variables. Everything has
//! a default, so an empty environment yields the SM4 settings.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::padding::{BlockPadding, MAX_BLOCK_SIZE, SM4_BLOCK_SIZE};

/// Validated codec configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Block size used for padding (`CODEC_BLOCK_SIZE`).
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// Tracing log level (`CODEC_LOG_LEVEL`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_block_size() -> usize {
    SM4_BLOCK_SIZE
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("CODEC"))
            .build()
            .context("failed to build codec configuration from environment")?;

        Self::from_config(cfg)
    }

    /// Deserialise and validate an already-built configuration source.
    fn from_config(cfg: config::Config) -> Result<Self> {
        let c: CodecConfig = cfg
            .try_deserialize()
            .context("failed to deserialise codec configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The padder for the configured block size.
    pub fn padding(&self) -> Result<BlockPadding> {
        BlockPadding::new(self.block_size).context("CODEC_BLOCK_SIZE is not usable for padding")
    }

    fn validate(&self) -> Result<()> {
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            anyhow::bail!("CODEC_BLOCK_SIZE must be between 1 and {MAX_BLOCK_SIZE}");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("CODEC_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_block_size(), 16);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = CodecConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.padding().unwrap(), BlockPadding::sm4());
    }

    #[test]
    fn validate_rejects_zero_block_size() {
        let cfg = CodecConfig {
            block_size: 0,
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_err());
        assert!(cfg.padding().is_err());
    }

    #[test]
    fn validate_rejects_oversized_block_size() {
        let cfg = CodecConfig {
            block_size: 256,
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_log_level() {
        let cfg = CodecConfig {
            block_size: 8,
            log_level: " ".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_source_uses_defaults() {
        let source = config::Config::builder().build().unwrap();
        let cfg = CodecConfig::from_config(source).unwrap();
        assert_eq!(cfg.block_size, SM4_BLOCK_SIZE);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn source_values_override_defaults() {
        let source = config::Config::builder()
            .set_override("block_size", 8)
            .unwrap()
            .set_override("log_level", "debug")
            .unwrap()
            .build()
            .unwrap();
        let cfg = CodecConfig::from_config(source).unwrap();
        assert_eq!(cfg.block_size, 8);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn source_with_zero_block_size_is_rejected() {
        let source = config::Config::builder()
            .set_override("block_size", 0)
            .unwrap()
            .build()
            .unwrap();
        assert!(CodecConfig::from_config(source).is_err());
    }
}

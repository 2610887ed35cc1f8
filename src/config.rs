// In: src/config.rs

//! The single source of truth for codec configuration.
//!
//! A `CodecConfig` is created once at the application boundary (usually from a
//! JSON document or `CodecConfig::default()`) and handed to
//! `Encoder::from_config` or the stateless bridge functions.

use serde::{Deserialize, Serialize};

use crate::error::{RadixPackError, Result};

/// What an encoder does when asked to snapshot a window that holds no digits.
///
/// Such a window serializes to a bare 2-byte header, which the decoder refuses
/// because it carries no data bytes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptyWindowPolicy {
    /// **Default:** an explicit `flush()` fails with `RadixPackError::EmptyWindow`,
    /// and a flush triggered from inside `encode` emits nothing.
    #[default]
    Reject,

    /// Emit the header-only packet anyway.
    Emit,
}

/// Configuration for one encoded stream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Lower bound of the initial window.
    #[serde(default = "default_min")]
    pub min: u8,

    /// Upper bound of the initial window. The initial radix is `max - min + 1`.
    #[serde(default = "default_max")]
    pub max: u8,

    #[serde(default)]
    pub empty_window: EmptyWindowPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            empty_window: EmptyWindowPolicy::default(),
        }
    }
}

impl CodecConfig {
    /// Builds a config with the given bounds and the default empty-window policy.
    pub fn with_bounds(min: u8, max: u8) -> Result<Self> {
        let config = Self {
            min,
            max,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document such as
    /// `{"min": 32, "max": 226, "empty_window": "emit"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(RadixPackError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// The radix of the first window opened under this config.
    pub fn initial_radix(&self) -> u16 {
        u16::from(self.max) - u16::from(self.min) + 1
    }
}

fn default_min() -> u8 {
    0
}

fn default_max() -> u8 {
    u8::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_spans_full_byte_range() {
        let config = CodecConfig::default();
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 255);
        assert_eq!(config.initial_radix(), 256);
        assert_eq!(config.empty_window, EmptyWindowPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_with_partial_fields() {
        let config = CodecConfig::from_json(r#"{"min": 32, "max": 226}"#).unwrap();
        assert_eq!(config.initial_radix(), 195);
        assert_eq!(config.empty_window, EmptyWindowPolicy::Reject);

        let config = CodecConfig::from_json(r#"{"max": 1, "empty_window": "emit"}"#).unwrap();
        assert_eq!(config.min, 0);
        assert_eq!(config.empty_window, EmptyWindowPolicy::Emit);
    }

    #[test]
    fn test_from_json_rejects_bad_bounds() {
        let result = CodecConfig::from_json(r#"{"min": 9, "max": 9}"#);
        assert!(matches!(
            result,
            Err(RadixPackError::InvalidBounds { min: 9, max: 9 })
        ));

        // 300 does not fit the u8 field, so serde refuses it.
        let result = CodecConfig::from_json(r#"{"min": 0, "max": 300}"#);
        assert!(matches!(result, Err(RadixPackError::Config(_))));
    }

    #[test]
    fn test_config_serializes_snake_case() {
        let json = serde_json::to_string(&CodecConfig::default()).unwrap();
        assert!(json.contains("\"empty_window\":\"reject\""));
    }
}

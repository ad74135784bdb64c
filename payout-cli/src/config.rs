//! Optional TOML configuration for the `payout` command.
//!
//! Every key is optional; a missing file section falls back to the built-in
//! defaults.
//!
//! ```toml
//! log_level = "debug"
//!
//! [defaults]
//! mrp = 1500
//! discount = 0
//! ```
//!
//! The fee schedule itself is fixed and cannot be set here.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Input values used when `quote` is run without `--mrp` or `--discount`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteDefaults {
    pub mrp: Decimal,
    pub discount: Decimal,
}

impl Default for QuoteDefaults {
    fn default() -> Self {
        Self {
            mrp: dec!(1500),
            discount: Decimal::ZERO,
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayoutConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"payout_core=debug"`.
    pub log_level: Option<String>,

    pub defaults: QuoteDefaults,
}

impl PayoutConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = PayoutConfig::from_toml("").unwrap();

        assert_eq!(config, PayoutConfig::default());
        assert_eq!(config.defaults.mrp, dec!(1500));
        assert_eq!(config.defaults.discount, dec!(0));
        assert!(config.log_level.is_none());
    }

    #[test]
    fn full_file_overrides_everything() {
        let config = PayoutConfig::from_toml(
            r#"
log_level = "debug"

[defaults]
mrp = 2000
discount = 250
"#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.defaults.mrp, dec!(2000));
        assert_eq!(config.defaults.discount, dec!(250));
    }

    #[test]
    fn partial_defaults_keep_remaining_values() {
        let config = PayoutConfig::from_toml(
            r#"
[defaults]
discount = "99.50"
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.mrp, dec!(1500));
        assert_eq!(config.defaults.discount, dec!(99.50));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = PayoutConfig::from_toml("commission_rate = 0.1");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PayoutConfig::load(Path::new("/this/path/does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/this/path/does/not/exist.toml"));
    }
}

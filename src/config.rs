//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/zcalc/config.toml`. A missing file means
//! defaults; every key is optional.

use crate::calculator::DEFAULT_SIGNIFICANT_DIGITS;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("significant_digits must be between 1 and 17, got {0}")]
    InvalidPrecision(usize),

    #[error("width must be at least 1")]
    InvalidWidth,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Significant digits results are rounded to.
    pub significant_digits: usize,
    /// Thousands separator used by the display formatter.
    pub group_separator: String,
    /// Width of the terminal display panel in columns.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            group_separator: ",".to_string(),
            width: 24,
        }
    }
}

impl Config {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("loading config from {}", path.display());
                Self::parse(&text).map_err(|err| match err {
                    ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
                    other => other,
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Parse and validate config text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=17).contains(&self.significant_digits) {
            return Err(ConfigError::InvalidPrecision(self.significant_digits));
        }
        if self.width == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("group_separator = \".\"\n").unwrap();
        assert_eq!(config.group_separator, ".");
        assert_eq!(config.significant_digits, 12);
        assert_eq!(config.width, 24);
    }

    #[test]
    fn test_invalid_precision() {
        assert!(matches!(
            Config::parse("significant_digits = 0"),
            Err(ConfigError::InvalidPrecision(0))
        ));
        assert!(matches!(
            Config::parse("significant_digits = 18"),
            Err(ConfigError::InvalidPrecision(18))
        ));
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(
            Config::parse("width = 0"),
            Err(ConfigError::InvalidWidth)
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::parse("theme = \"dark\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("zcalc-test-missing").join("config.toml");
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("zcalc-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "significant_digits = 6\nwidth = 30\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.significant_digits, 6);
        assert_eq!(config.width, 30);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

//! TOML configuration for `wealth-projector`.
//!
//! ```toml
//! jurisdiction = "UK"
//! savings_rate = 0.2
//! log_level = "debug"
//! log_file = "wealth-projector.log"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use wealth_core::{DEFAULT_SAVINGS_RATE, Jurisdiction, UnknownJurisdiction};

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wealth-projector.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    UnknownJurisdiction(#[from] UnknownJurisdiction),

    #[error("savings rate {0} is outside [0, 1]")]
    InvalidSavingsRate(Decimal),
}

/// Raw file contents, before command-line overrides and validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub jurisdiction: String,
    pub savings_rate: Decimal,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            jurisdiction: Jurisdiction::UnitedStates.as_str().to_string(),
            savings_rate: DEFAULT_SAVINGS_RATE,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl FileConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it exists,
    /// otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "read config");
        Self::from_toml(&text)
    }

    /// Applies command-line overrides and validates the result.
    pub fn resolve(
        self,
        overrides: &ConfigOverrides,
    ) -> Result<Settings, ConfigError> {
        let code = overrides.jurisdiction.as_deref().unwrap_or(&self.jurisdiction);
        let jurisdiction: Jurisdiction = code.parse()?;

        let savings_rate = overrides.savings_rate.unwrap_or(self.savings_rate);
        if savings_rate < Decimal::ZERO || savings_rate > Decimal::ONE {
            return Err(ConfigError::InvalidSavingsRate(savings_rate));
        }

        Ok(Settings {
            jurisdiction,
            savings_rate,
            log_level: overrides.log_level.clone().unwrap_or(self.log_level),
            log_file: overrides.log_file.clone().or(self.log_file),
        })
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub jurisdiction: Option<String>,
    pub savings_rate: Option<Decimal>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub jurisdiction: Jurisdiction,
    pub savings_rate: Decimal,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

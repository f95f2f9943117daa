//! Layered configuration: built-in defaults, optional TOML file, `LANTOPO_`
//! environment overrides.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Extraction or merge failure from any configuration layer.
    #[error("configuration error: {0}")]
    Invalid(#[from] figment::Error),
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graph sizing.
    pub graph: GraphSettings,
    /// Log verbosity.
    pub logging: LoggingSettings,
}

/// Graph sizing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Fixed maximum device count for a topology session.
    pub capacity: usize,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` env-filter directive, e.g. `info` or `lantopo_core=debug`.
    pub level: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        // Matches the capacity the interactive session has always used.
        Self { capacity: 50 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings: defaults, then the TOML file if given, then
    /// `LANTOPO_*` environment variables (e.g. `LANTOPO_GRAPH_CAPACITY`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a layer fails to parse or the
    /// merged figure does not match the settings shape.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        let settings = figment
            .merge(Env::prefixed("LANTOPO_").split("_"))
            .extract()?;
        Ok(settings)
    }
}

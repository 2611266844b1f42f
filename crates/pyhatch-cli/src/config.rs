//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate only sees the pieces it is handed
//! ([`FieldDefaults`] and [`Toolchain`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PYHATCH_DEFAULTS__AUTHOR`, `PYHATCH_TOOLS__PYTHON`, ...
//! 3. Config file (`--config FILE`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [defaults]
//! author = "Ada Lovelace"
//! email = "ada@example.com"
//! license = "apache2"
//!
//! [tools]
//! python = "python3.12"
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use pyhatch_core::application::{FieldDefaults, Toolchain};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides; `__` separates nested keys.
pub const ENV_PREFIX: &str = "PYHATCH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used by `create --yes` and shown as prompt defaults.
    pub defaults: FieldDefaults,
    /// Program names of the external tools.
    pub tools: Toolchain,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the file and environment, over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the platform config file is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => Some((path.clone(), true)),
            None => Self::config_path().map(|path| (path, false)),
        };
        Self::load_from(file.as_ref().map(|(p, required)| (p.as_path(), *required)))
    }

    fn load_from(file: Option<(&Path, bool)>) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some((path, required)) = file {
            tracing::debug!(path = %path.display(), required, "Reading config file");
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
            );
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file, when the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pyhatch")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and only steers ambient concerns
//! (logging). Nothing in it changes what `hello` prints on stdout.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `GREETER__LOGGING__LEVEL`, `GREETER__LOGGING__FORMAT`,
//!    `GREETER__LOGGING__FILE`
//! 2. Config file: `$GREETER_CONFIG` (must exist) or the platform default
//!    location (optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::{CliError, CliResult};

/// Names an explicit config file; a missing file is then an error.
pub const CONFIG_ENV: &str = "GREETER_CONFIG";

/// Prefix for per-key environment overrides (`GREETER__LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "GREETER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`.
    pub level: String,
    pub format: LogFormat,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// How log lines are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> CliResult<LevelFilter> {
        self.level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|e| CliError::ConfigError {
                message: format!("unknown log level '{}'", self.level),
                source: Some(Box::new(e)),
            })
    }

    /// `true` when the configured level shows debug output. Only consulted
    /// when logging could not be initialised; otherwise the live filter
    /// decides (see `logging::debug_enabled`).
    pub fn is_verbose(&self) -> bool {
        self.level_filter()
            .map(|level| level >= LevelFilter::DEBUG)
            .unwrap_or(false)
    }
}

impl AppConfig {
    /// Load configuration from the process environment and config file.
    pub fn load() -> CliResult<Self> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");

        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Some(Path::new(&path)), true, env),
            None => Self::load_from(Some(&Self::config_path()), false, env),
        }
    }

    /// Load configuration from an optional file plus an environment source.
    pub fn load_from(
        file: Option<&Path>,
        required: bool,
        env: Environment,
    ) -> CliResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let cfg: Self = builder
            .add_source(env)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        cfg.logging.level_filter()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.greeter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "greeter", "greeter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".greeter.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .source(Some(map))
    }

    fn toml_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_level_is_warn() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert!(cfg.logging.file.is_none());
    }

    #[test]
    fn load_without_sources_returns_defaults() {
        let cfg = AppConfig::load_from(None, false, env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let cfg = AppConfig::load_from(
            Some(Path::new("/definitely/not/here/config.toml")),
            false,
            env(&[]),
        )
        .unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_config_error() {
        let err = AppConfig::load_from(
            Some(Path::new("/definitely/not/here/config.toml")),
            true,
            env(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn file_values_are_read() {
        let file = toml_file("[logging]\nlevel = \"debug\"\nformat = \"json\"\n");
        let cfg = AppConfig::load_from(Some(file.path()), true, env(&[])).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[logging]\nlevel = \"debug\"\n");
        let cfg = AppConfig::load_from(
            Some(file.path()),
            true,
            env(&[("GREETER__LOGGING__LEVEL", "trace")]),
        )
        .unwrap();
        assert_eq!(cfg.logging.level, "trace");
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = AppConfig::load_from(None, false, env(&[("GREETER__LOGGING__LEVEL", "loud")]))
            .unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn verbosity_follows_level() {
        let mut logging = LoggingConfig::default();
        assert!(!logging.is_verbose());
        logging.level = "debug".into();
        assert!(logging.is_verbose());
        logging.level = "TRACE".into();
        assert!(logging.is_verbose());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

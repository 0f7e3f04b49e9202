//! Front-end configuration parsed from environment variables.
//!
//! `CUKEX_LOG_LEVEL` selects the log level and `CUKEX_PARAMETER_TYPES` the
//! custom parameter-type definitions file. Command line flags override both.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use cukex::RegistryConfig;

use crate::error::CliError;

/// Environment variable holding the default log level.
pub const LOG_LEVEL_ENV: &str = "CUKEX_LOG_LEVEL";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn`, so a plain run only reports problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every translated expression.
    Trace,
    /// Debug-level information such as loaded definitions.
    Debug,
    /// Standard informational messages.
    Info,
    /// Degraded definitions files and other recoverable problems.
    #[default]
    Warn,
    /// Rejected expressions and configuration failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for a `cukex` run.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Where custom parameter types are loaded from.
    pub registry: RegistryConfig,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if `CUKEX_LOG_LEVEL` holds an
    /// unknown level or is not valid Unicode.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`CliConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(value) => value
                .to_str()
                .ok_or_else(|| {
                    CliError::InvalidConfig(format!("{LOG_LEVEL_ENV} is not valid Unicode"))
                })?
                .parse()?,
            None => LogLevel::default(),
        };

        Ok(Self {
            log_level,
            registry: RegistryConfig::from_lookup(lookup),
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        parameter_types: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(path) = parameter_types {
            self.registry = self.registry.with_parameter_types_path(path);
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

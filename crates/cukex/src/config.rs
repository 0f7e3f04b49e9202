//! Registry configuration resolved from the environment.
//!
//! The only setting is where custom parameter types are read from. It
//! defaults to `custom_parameter_types.json` in the working directory and can
//! be overridden with `CUKEX_PARAMETER_TYPES`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::registry::ParameterTypeRegistry;
use crate::source::load_custom_definitions;

/// Environment variable overriding [`DEFAULT_PARAMETER_TYPES_PATH`].
pub const PARAMETER_TYPES_ENV: &str = "CUKEX_PARAMETER_TYPES";

/// File consulted when [`PARAMETER_TYPES_ENV`] is unset.
pub const DEFAULT_PARAMETER_TYPES_PATH: &str = "custom_parameter_types.json";

/// Where a [`ParameterTypeRegistry`] gets its custom definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Path of the JSON definitions file. It need not exist.
    pub parameter_types_path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            parameter_types_path: PathBuf::from(DEFAULT_PARAMETER_TYPES_PATH),
        }
    }
}

impl RegistryConfig {
    /// Read `CUKEX_PARAMETER_TYPES`, falling back to the default path when the
    /// variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolve the configuration through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match lookup(PARAMETER_TYPES_ENV) {
            Some(path) if !path.is_empty() => Self {
                parameter_types_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }

    /// Replace the definitions path.
    #[must_use]
    pub fn with_parameter_types_path(mut self, path: impl AsRef<Path>) -> Self {
        self.parameter_types_path = path.as_ref().to_path_buf();
        self
    }

    /// Build a registry from the built-ins and whatever the definitions file
    /// supplies.
    #[must_use]
    pub fn load_registry(&self) -> ParameterTypeRegistry {
        ParameterTypeRegistry::with_custom_types(load_custom_definitions(
            &self.parameter_types_path,
        ))
    }
}

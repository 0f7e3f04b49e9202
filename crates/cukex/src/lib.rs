//! Compile Cucumber Expressions into anchored regular expressions.
//!
//! A Cucumber Expression is the compact step syntax used by behaviour-driven
//! test frameworks: `{int}`-style parameter types, `(optional)` text,
//! `word/alternatives` and backslash escapes. [`transform`] turns one into a
//! regular-expression source such as `^I have (-?\d+) cucumber(?:s)?$`.
//!
//! Parameter types come from a [`ParameterTypeRegistry`]. The free functions
//! use a process-wide registry loaded once from
//! [`RegistryConfig::from_env`]; the `*_with` variants take an explicit one.

mod config;
mod errors;
mod expression;
mod registry;
mod source;

pub use config::{DEFAULT_PARAMETER_TYPES_PATH, PARAMETER_TYPES_ENV, RegistryConfig};
pub use errors::ExpressionError;
pub use expression::{compile, compile_with, transform, transform_with};
pub use registry::{BUILTIN_PARAMETER_TYPES, ParameterTypeRegistry, default_registry};
pub use source::{CustomTypeDefinition, load_custom_definitions, parse_custom_definitions};

/// Re-exported so callers can name the compiled regex type.
pub use fancy_regex;

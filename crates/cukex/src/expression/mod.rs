//! Cucumber Expression validation, lexing and compilation.

mod compiler;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;
mod validator;

use fancy_regex::Regex;
use tracing::trace;

use crate::errors::ExpressionError;
use crate::registry::{ParameterTypeRegistry, default_registry};

use compiler::{build_regex, compile_source};

/// Translate a Cucumber Expression into an anchored regular expression,
/// resolving parameter types through `registry`.
///
/// The returned source starts with `^`, ends with `$`, and has been compiled
/// once as a final check.
///
/// # Errors
/// Returns [`ExpressionError`] for empty or malformed expressions, unknown
/// parameter types, empty optionals, and sources the regex engine rejects.
///
/// # Examples
/// ```
/// use cukex::{ParameterTypeRegistry, transform_with};
/// let registry = ParameterTypeRegistry::builtin();
/// let regex = transform_with(&registry, "there is/are {int} flight(s)")
///     .expect("example expression is valid");
/// assert_eq!(regex, r"^there (?:is|are) (-?\d+) flight(?:s)?$");
/// ```
pub fn transform_with(
    registry: &ParameterTypeRegistry,
    expression: &str,
) -> Result<String, ExpressionError> {
    let source = build_regex(expression, registry)?;
    compile_source(&source)?;
    trace!(expression, regex = %source, "transformed cucumber expression");
    Ok(source)
}

/// Translate a Cucumber Expression using the process-wide default registry.
///
/// The default registry holds the built-in parameter types plus any custom
/// types found when it is first used (see [`default_registry`]).
///
/// # Errors
/// See [`transform_with`].
///
/// # Examples
/// ```
/// use cukex::transform;
/// assert_eq!(transform("I have {int} cucumbers").as_deref().ok(), Some(r"^I have (-?\d+) cucumbers$"));
/// assert!(transform("").is_err());
/// ```
pub fn transform(expression: &str) -> Result<String, ExpressionError> {
    transform_with(default_registry(), expression)
}

/// Translate and compile a Cucumber Expression with `registry`.
///
/// # Errors
/// See [`transform_with`].
pub fn compile_with(
    registry: &ParameterTypeRegistry,
    expression: &str,
) -> Result<Regex, ExpressionError> {
    let source = build_regex(expression, registry)?;
    compile_source(&source)
}

/// Translate and compile a Cucumber Expression with the default registry.
///
/// # Errors
/// See [`transform_with`].
pub fn compile(expression: &str) -> Result<Regex, ExpressionError> {
    compile_with(default_registry(), expression)
}

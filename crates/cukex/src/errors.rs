//! Error types surfaced while compiling Cucumber Expressions.

use thiserror::Error;

/// Errors raised while turning a Cucumber Expression into a regular
/// expression.
///
/// Every variant is a permanent authoring error: compilation stops at the
/// first one detected and retrying the same input yields the same error.
///
/// # Examples
/// ```
/// use cukex::ExpressionError;
/// let err = ExpressionError::UnknownParameterType { name: "colour".into() };
/// assert_eq!(err.to_string(), "unknown parameter type `{colour}`");
/// assert_eq!(err.name(), Some("colour"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExpressionError {
    /// The expression was the empty string.
    #[error("cucumber expression cannot be empty")]
    EmptyExpression,

    /// A `{` was never closed.
    #[error("unclosed parameter type: missing '}}' for '{{' at byte {position} (zero-based)")]
    UnclosedParameter {
        /// Byte offset of the unclosed `{`.
        position: usize,
    },

    /// A `(` was never closed.
    #[error("unclosed optional text: missing ')' for '(' at byte {position} (zero-based)")]
    UnclosedOptional {
        /// Byte offset of the unclosed `(`.
        position: usize,
    },

    /// A `}` appeared without a matching `{`.
    #[error(
        "unexpected closing brace '}}' without matching opening brace at byte {position} (zero-based)"
    )]
    UnmatchedClosingBrace {
        /// Byte offset of the stray `}`.
        position: usize,
    },

    /// A `)` appeared without a matching `(`.
    #[error(
        "unexpected closing parenthesis ')' without matching opening parenthesis at byte {position} (zero-based)"
    )]
    UnmatchedClosingParenthesis {
        /// Byte offset of the stray `)`.
        position: usize,
    },

    /// The braces named a type the registry does not know.
    #[error("unknown parameter type `{{{name}}}`")]
    UnknownParameterType {
        /// The text between the braces, verbatim.
        name: String,
    },

    /// `()` with nothing inside.
    #[error("an optional must contain some text (at byte {position}, zero-based)")]
    EmptyOptional {
        /// Byte offset of the `(`.
        position: usize,
    },

    /// A `{` opened while another parameter was still open.
    #[error("nested parameter types are not allowed (at byte {position}, zero-based)")]
    NestedParameterType {
        /// Byte offset of the inner `{`.
        position: usize,
    },

    /// Reserved: optional text inside optional text.
    #[error("nested optional text is not allowed")]
    NestedOptional,

    /// Reserved: alternation inside optional text.
    #[error("alternation is not allowed inside optional text")]
    AlternationInOptional,

    /// Reserved: an alternation with an empty alternative.
    #[error("alternation may not have empty alternatives{}", at_position(.position.as_ref()))]
    EmptyAlternative {
        /// Byte offset of the offending separator, when known.
        position: Option<usize>,
    },

    /// Reserved: a parameter type inside optional text.
    #[error("an optional may not contain a parameter type{}", at_position(.position.as_ref()))]
    OptionalParameterType {
        /// Byte offset of the parameter, when known.
        position: Option<usize>,
    },

    /// The generated pattern was rejected by the regex engine.
    #[error("failed to create valid regex `{pattern}`: {source}")]
    CompilationError {
        /// The anchored pattern that failed to compile.
        pattern: String,
        /// The engine's own diagnosis.
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

impl ExpressionError {
    /// The offending parameter-type name, for errors that carry one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::UnknownParameterType { name } => Some(name),
            _ => None,
        }
    }

    /// The zero-based byte offset of the offending character, for errors that
    /// carry one.
    ///
    /// # Examples
    /// ```
    /// use cukex::ExpressionError;
    /// let err = ExpressionError::UnmatchedClosingBrace { position: 7 };
    /// assert_eq!(err.position(), Some(7));
    /// assert_eq!(ExpressionError::EmptyExpression.position(), None);
    /// ```
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnclosedParameter { position }
            | Self::UnclosedOptional { position }
            | Self::UnmatchedClosingBrace { position }
            | Self::UnmatchedClosingParenthesis { position }
            | Self::EmptyOptional { position }
            | Self::NestedParameterType { position } => Some(*position),
            Self::EmptyAlternative { position } | Self::OptionalParameterType { position } => {
                *position
            }
            Self::EmptyExpression
            | Self::UnknownParameterType { .. }
            | Self::NestedOptional
            | Self::AlternationInOptional
            | Self::CompilationError { .. } => None,
        }
    }
}

fn at_position(position: Option<&usize>) -> String {
    position.map_or_else(String::new, |pos| {
        format!(" (at byte {pos}, zero-based)")
    })
}

pub(crate) fn compilation_error(pattern: String, source: fancy_regex::Error) -> ExpressionError {
    ExpressionError::CompilationError {
        pattern,
        source: Box::new(source),
    }
}

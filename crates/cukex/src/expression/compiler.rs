//! Render lexed segments into anchored regular-expression sources.

use fancy_regex::Regex;

use crate::errors::{ExpressionError, compilation_error};
use crate::registry::ParameterTypeRegistry;

use super::lexer::{Piece, Segment, lex_expression};
use super::validator::validate;

/// Characters prefixed with a backslash when they appear in literal text.
const REGEX_METACHARACTERS: [char; 14] = [
    '.', '^', '$', '|', '(', ')', '[', ']', '{', '}', '*', '+', '?', '\\',
];

fn push_escaped(regex: &mut String, text: &str) {
    for ch in text.chars() {
        if REGEX_METACHARACTERS.contains(&ch) {
            regex.push('\\');
        }
        regex.push(ch);
    }
}

fn push_optional(regex: &mut String, text: &str) {
    regex.push_str("(?:");
    push_escaped(regex, text);
    regex.push_str(")?");
}

fn render(segments: &[Segment<'_>], capacity: usize) -> String {
    let mut regex = String::with_capacity(capacity);
    regex.push('^');
    for segment in segments {
        match segment {
            Segment::Literal(text) => push_escaped(&mut regex, text),
            Segment::Parameter { fragment, .. } => {
                regex.push('(');
                regex.push_str(fragment);
                regex.push(')');
            }
            Segment::Optional(text) => push_optional(&mut regex, text),
            Segment::Alternation(alternatives) => {
                regex.push_str("(?:");
                for (index, alternative) in alternatives.iter().enumerate() {
                    if index > 0 {
                        regex.push('|');
                    }
                    for piece in alternative {
                        match piece {
                            Piece::Text(text) => push_escaped(&mut regex, text),
                            Piece::Optional(text) => push_optional(&mut regex, text),
                        }
                    }
                }
                regex.push(')');
            }
        }
    }
    regex.push('$');
    regex
}

/// Validate, lex and render `expression` without compiling the result.
///
/// # Errors
/// Returns [`ExpressionError`] for empty or unbalanced input, unknown
/// parameter types and empty optionals.
pub(crate) fn build_regex(
    expression: &str,
    registry: &ParameterTypeRegistry,
) -> Result<String, ExpressionError> {
    validate(expression)?;
    let segments = lex_expression(expression, registry)?;
    Ok(render(
        &segments,
        expression.len().saturating_mul(2).saturating_add(2),
    ))
}

/// Compile an anchored source with the regex engine.
///
/// # Errors
/// Returns [`ExpressionError::CompilationError`] when the engine rejects the
/// source.
pub(crate) fn compile_source(source: &str) -> Result<Regex, ExpressionError> {
    Regex::new(source).map_err(|err| compilation_error(source.to_string(), err))
}

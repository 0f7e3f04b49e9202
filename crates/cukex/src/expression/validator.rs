//! Structural checks run before an expression is lexed.
//!
//! The scan only looks at brace and parenthesis balance. Characters directly
//! preceded by a backslash are skipped, whatever precedes that backslash, so
//! `\\{` hides the brace exactly as the lexer does.

use crate::errors::ExpressionError;

/// Reject empty input and globally unbalanced braces or parentheses.
pub(crate) fn validate(expression: &str) -> Result<(), ExpressionError> {
    if expression.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }

    let mut open_brace: Option<usize> = None;
    let mut open_parens: Vec<usize> = Vec::new();
    let mut after_backslash = false;

    for (index, ch) in expression.char_indices() {
        let skip = after_backslash;
        after_backslash = ch == '\\';
        if skip {
            continue;
        }
        match ch {
            '{' => {
                if open_brace.is_some() {
                    return Err(ExpressionError::NestedParameterType { position: index });
                }
                open_brace = Some(index);
            }
            '}' => {
                if open_brace.take().is_none() {
                    return Err(ExpressionError::UnmatchedClosingBrace { position: index });
                }
            }
            '(' => open_parens.push(index),
            ')' => {
                if open_parens.pop().is_none() {
                    return Err(ExpressionError::UnmatchedClosingParenthesis { position: index });
                }
            }
            _ => {}
        }
    }

    if let Some(position) = open_brace {
        return Err(ExpressionError::UnclosedParameter { position });
    }
    if let Some(&position) = open_parens.last() {
        return Err(ExpressionError::UnclosedOptional { position });
    }
    Ok(())
}

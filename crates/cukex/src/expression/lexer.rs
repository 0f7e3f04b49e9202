//! Expression lexer converting Cucumber Expressions into typed segments.
//!
//! Alternation needs to reclaim the word written just before a `/`. That word
//! is taken back from the segments lexed so far, so nothing that has already
//! been rendered is ever rewritten.

use crate::errors::ExpressionError;
use crate::registry::ParameterTypeRegistry;

/// One piece of an alternative: plain text or an optional span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Text(String),
    Optional(String),
}

/// The pieces making up one `/`-separated alternative.
pub(crate) type Alternative = Vec<Piece>;

/// A lexed unit of an expression. Text is kept unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'r> {
    Literal(String),
    Parameter { name: String, fragment: &'r str },
    Optional(String),
    Alternation(Vec<Alternative>),
}

/// Characters that may follow a backslash to lose their special meaning.
fn is_escapable(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | '/')
}

/// Byte cursor over the expression; only ever moves forward.
struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn rest(&self) -> &'s str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after a backslash at the cursor, when it forms an escape.
    fn escaped(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        match (chars.next(), chars.next()) {
            (Some('\\'), Some(next)) if is_escapable(next) => Some(next),
            _ => None,
        }
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    /// Byte offset of the next `needle` at or after the cursor.
    fn find(&self, needle: char) -> Option<usize> {
        self.rest().find(needle).map(|offset| self.pos + offset)
    }

    fn slice(&self, start: usize, end: usize) -> &'s str {
        self.src.get(start..end).unwrap_or_default()
    }
}

struct Lexer<'s, 'r> {
    cursor: Cursor<'s>,
    registry: &'r ParameterTypeRegistry,
    segments: Vec<Segment<'r>>,
}

/// Split `expression` into segments, resolving parameter types through
/// `registry`.
pub(crate) fn lex_expression<'r>(
    expression: &str,
    registry: &'r ParameterTypeRegistry,
) -> Result<Vec<Segment<'r>>, ExpressionError> {
    let mut lexer = Lexer {
        cursor: Cursor {
            src: expression,
            pos: 0,
        },
        registry,
        segments: Vec::new(),
    };
    lexer.run()?;
    Ok(lexer.segments)
}

impl<'r> Lexer<'_, 'r> {
    fn run(&mut self) -> Result<(), ExpressionError> {
        while let Some(ch) = self.cursor.peek() {
            if let Some(escaped) = self.cursor.escaped() {
                self.push_literal(escaped);
                self.cursor.bump('\\');
                self.cursor.bump(escaped);
                continue;
            }
            match ch {
                '{' => self.lex_parameter()?,
                '(' => {
                    let text = self.lex_optional()?;
                    self.segments.push(Segment::Optional(text));
                }
                '/' => self.lex_alternation()?,
                _ => {
                    self.push_literal(ch);
                    self.cursor.bump(ch);
                }
            }
        }
        Ok(())
    }

    fn push_literal(&mut self, ch: char) {
        if let Some(Segment::Literal(text)) = self.segments.last_mut() {
            text.push(ch);
        } else {
            self.segments.push(Segment::Literal(ch.to_string()));
        }
    }

    fn lex_parameter(&mut self) -> Result<(), ExpressionError> {
        let start = self.cursor.pos;
        let close = self
            .cursor
            .find('}')
            .ok_or(ExpressionError::UnclosedParameter { position: start })?;
        let name = self.cursor.slice(start + 1, close);
        let fragment =
            self.registry
                .lookup(name)
                .ok_or_else(|| ExpressionError::UnknownParameterType {
                    name: name.to_string(),
                })?;
        self.segments.push(Segment::Parameter {
            name: name.to_string(),
            fragment,
        });
        self.cursor.pos = close + 1;
        Ok(())
    }

    /// Consume `(text)` at the cursor and return `text` with escapes
    /// resolved. The first unescaped `)` closes the span.
    fn lex_optional(&mut self) -> Result<String, ExpressionError> {
        let start = self.cursor.pos;
        self.cursor.bump('(');
        let mut text = String::new();
        loop {
            if let Some(escaped) = self.cursor.escaped() {
                text.push(escaped);
                self.cursor.bump('\\');
                self.cursor.bump(escaped);
                continue;
            }
            match self.cursor.peek() {
                Some(')') => break,
                Some(ch) => {
                    text.push(ch);
                    self.cursor.bump(ch);
                }
                None => return Err(ExpressionError::UnclosedOptional { position: start }),
            }
        }
        if text.is_empty() {
            return Err(ExpressionError::EmptyOptional { position: start });
        }
        self.cursor.bump(')');
        Ok(text)
    }

    fn lex_alternation(&mut self) -> Result<(), ExpressionError> {
        let mut alternatives = Vec::new();
        let word = self.take_trailing_word();
        if !word.is_empty() {
            alternatives.push(word);
        }
        self.cursor.bump('/');

        let mut current = Alternative::new();
        while let Some(ch) = self.cursor.peek() {
            if let Some(escaped) = self.cursor.escaped() {
                push_piece_text(&mut current, escaped);
                self.cursor.bump('\\');
                self.cursor.bump(escaped);
                continue;
            }
            match ch {
                ' ' | '{' => break,
                // An optional straight after a separator is not part of the
                // alternation.
                '(' if current.is_empty() => break,
                '(' => {
                    let text = self.lex_optional()?;
                    current.push(Piece::Optional(text));
                }
                '/' => {
                    if !current.is_empty() {
                        alternatives.push(std::mem::take(&mut current));
                    }
                    self.cursor.bump(ch);
                }
                _ => {
                    push_piece_text(&mut current, ch);
                    self.cursor.bump(ch);
                }
            }
        }
        if !current.is_empty() {
            alternatives.push(current);
        }

        if alternatives.len() > 1 {
            self.segments.push(Segment::Alternation(alternatives));
        } else {
            for piece in alternatives.into_iter().flatten() {
                self.push_piece(piece);
            }
        }
        Ok(())
    }

    /// Remove and return the word ending at the cursor.
    ///
    /// The word runs back to the nearest space, parameter, earlier
    /// alternation or the start of the expression. Optional spans inside it
    /// stay attached.
    fn take_trailing_word(&mut self) -> Alternative {
        let mut reversed = Vec::new();
        while let Some(segment) = self.segments.pop() {
            match segment {
                Segment::Optional(text) => reversed.push(Piece::Optional(text)),
                Segment::Literal(text) => {
                    if let Some(space) = text.rfind(' ') {
                        let (head, tail) = text.split_at(space + 1);
                        if !tail.is_empty() {
                            reversed.push(Piece::Text(tail.to_string()));
                        }
                        self.segments.push(Segment::Literal(head.to_string()));
                        break;
                    }
                    reversed.push(Piece::Text(text));
                }
                other @ (Segment::Parameter { .. } | Segment::Alternation(_)) => {
                    self.segments.push(other);
                    break;
                }
            }
        }
        reversed.reverse();
        reversed
    }

    fn push_piece(&mut self, piece: Piece) {
        match piece {
            Piece::Text(text) => text.chars().for_each(|ch| self.push_literal(ch)),
            Piece::Optional(text) => self.segments.push(Segment::Optional(text)),
        }
    }
}

fn push_piece_text(alternative: &mut Alternative, ch: char) {
    if let Some(Piece::Text(text)) = alternative.last_mut() {
        text.push(ch);
    } else {
        alternative.push(Piece::Text(ch.to_string()));
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise lexing fallibility")]
mod tests {
    use super::*;

    fn lex(expression: &str) -> Vec<Segment<'static>> {
        static REGISTRY: std::sync::LazyLock<ParameterTypeRegistry> =
            std::sync::LazyLock::new(ParameterTypeRegistry::builtin);
        lex_expression(expression, &REGISTRY).unwrap()
    }

    fn literal(text: &str) -> Segment<'static> {
        Segment::Literal(text.into())
    }

    fn text(text: &str) -> Piece {
        Piece::Text(text.into())
    }

    #[test]
    fn merges_plain_characters_into_one_literal() {
        assert_eq!(lex("array [0]"), vec![literal("array [0]")]);
    }

    #[test]
    fn resolves_parameters_through_the_registry() {
        assert_eq!(
            lex("I have {int} cukes"),
            vec![
                literal("I have "),
                Segment::Parameter {
                    name: "int".into(),
                    fragment: r"-?\d+",
                },
                literal(" cukes"),
            ]
        );
    }

    #[test]
    fn escapes_become_literal_characters() {
        assert_eq!(
            lex(r"test \( \{ \/ escaped"),
            vec![literal("test ( { / escaped")]
        );
    }

    #[test]
    fn backslash_before_other_characters_is_literal() {
        assert_eq!(lex(r"a\b"), vec![literal(r"a\b")]);
    }

    #[test]
    fn optional_text_becomes_its_own_segment() {
        assert_eq!(
            lex("cucumber(s)!"),
            vec![
                literal("cucumber"),
                Segment::Optional("s".into()),
                literal("!"),
            ]
        );
    }

    #[test]
    fn escaped_parenthesis_does_not_close_optional() {
        assert_eq!(
            lex(r"(a\)b)c"),
            vec![Segment::Optional("a)b".into()), literal("c")]
        );
        assert_eq!(lex(r"x(\/)"), vec![literal("x"), Segment::Optional("/".into())]);
    }

    #[test]
    fn alternation_reclaims_the_previous_word() {
        assert_eq!(
            lex("in my belly/stomach now"),
            vec![
                literal("in my "),
                Segment::Alternation(vec![vec![text("belly")], vec![text("stomach")]]),
                literal(" now"),
            ]
        );
    }

    #[test]
    fn alternation_keeps_optionals_attached_to_words() {
        assert_eq!(
            lex("rat(s)/mouse/mice"),
            vec![Segment::Alternation(vec![
                vec![text("rat"), Piece::Optional("s".into())],
                vec![text("mouse")],
                vec![text("mice")],
            ])]
        );
    }

    #[test]
    fn trailing_optional_belongs_to_last_alternative() {
        assert_eq!(
            lex("a/b(c)"),
            vec![Segment::Alternation(vec![
                vec![text("a")],
                vec![text("b"), Piece::Optional("c".into())],
            ])]
        );
    }

    #[test]
    fn optional_straight_after_separator_ends_alternation() {
        assert_eq!(
            lex("a/(b)"),
            vec![literal("a"), Segment::Optional("b".into())]
        );
    }

    #[test]
    fn escaped_slash_inside_alternative_is_literal() {
        assert_eq!(
            lex(r"a/b\/c"),
            vec![Segment::Alternation(vec![
                vec![text("a")],
                vec![text("b/c")],
            ])]
        );
    }

    #[test]
    fn parameter_bounds_the_reclaimed_word() {
        assert_eq!(
            lex("{word}x/y"),
            vec![
                Segment::Parameter {
                    name: "word".into(),
                    fragment: r"[^\s]+",
                },
                Segment::Alternation(vec![vec![text("x")], vec![text("y")]]),
            ]
        );
    }

    #[test]
    fn alternation_stops_at_brace() {
        assert_eq!(
            lex("a/b{int}"),
            vec![
                Segment::Alternation(vec![vec![text("a")], vec![text("b")]]),
                Segment::Parameter {
                    name: "int".into(),
                    fragment: r"-?\d+",
                },
            ]
        );
    }

    #[test]
    fn lone_separator_is_dropped() {
        assert_eq!(lex("test/"), vec![literal("test")]);
        assert_eq!(lex("/test"), vec![literal("test")]);
        assert_eq!(lex("a / b"), vec![literal("a  b")]);
    }

    #[test]
    fn empty_alternatives_are_skipped() {
        assert_eq!(
            lex("test//other"),
            vec![Segment::Alternation(vec![
                vec![text("test")],
                vec![text("other")],
            ])]
        );
    }

    #[test]
    fn reports_empty_optional_inside_alternative() {
        let registry = ParameterTypeRegistry::builtin();
        let Err(err) = lex_expression("a/b()", &registry) else {
            panic!("empty optional should be rejected");
        };
        assert!(matches!(err, ExpressionError::EmptyOptional { position: 3 }));
    }

    #[test]
    fn reports_unknown_parameter_type_verbatim() {
        let registry = ParameterTypeRegistry::builtin();
        let Err(err) = lex_expression("{ int }", &registry) else {
            panic!("unknown type should be rejected");
        };
        assert_eq!(err.name(), Some(" int "));
    }
}

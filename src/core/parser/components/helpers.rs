//! Helpers shared by the line-oriented components.
//!
//! Indentation, end-of-line handling and identifier lists look the same in
//! every entity child, so they live here. Identifier helpers return AST
//! identifier nodes with spans; list helpers enforce the one-or-more rule.

use crate::core::parser::ast::{FieldIdent, TypeIdent};
use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::parser::context::ParseContext;
use crate::core::scanner::recognizers::{
    is_horizontal_space, is_line_terminator, scan_field_identifier,
    scan_strictness_marker, scan_type_identifier, skip_horizontal_space1,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

/// Require one-or-more horizontal whitespace characters of indentation.
pub(crate) fn expect_indentation(
    stream: &mut dyn CharacterStream,
) -> ParseResult<()> {
    if skip_horizontal_space1(stream) {
        Ok(())
    } else {
        Err(ParseError::structural(stream, "indentation"))
    }
}

/// Require one-or-more horizontal whitespace characters as a separator.
pub(crate) fn expect_separator(
    stream: &mut dyn CharacterStream,
    before: &str,
) -> ParseResult<()> {
    if skip_horizontal_space1(stream) {
        Ok(())
    } else {
        Err(ParseError::structural(
            stream,
            format!("whitespace before {before}"),
        ))
    }
}

/// The unread input after the current indentation, if there is any
/// indentation at all.
pub(crate) fn after_indentation(stream: &dyn CharacterStream) -> Option<&str> {
    let rest = stream.remaining();
    let trimmed = rest.trim_start_matches(is_horizontal_space);
    (trimmed.len() < rest.len()).then_some(trimmed)
}

/// Consume a line terminator, or accept end of input.
pub(crate) fn expect_line_end(
    stream: &mut dyn CharacterStream,
) -> ParseResult<()> {
    match stream.current() {
        None => Ok(()),
        Some(ch) if is_line_terminator(ch) => {
            stream.advance();
            Ok(())
        }
        Some(_) => Err(ParseError::unterminated_line(stream)),
    }
}

/// Discard whatever is left on the current line, then consume its
/// terminator (or accept end of input).
///
/// Unrecognized trailing content (including a repeated modifier) ends up
/// here and is dropped without an error.
pub(crate) fn finish_line(stream: &mut dyn CharacterStream) -> ParseResult<()> {
    stream.eat_while(|ch| !is_line_terminator(ch));
    expect_line_end(stream)
}

/// Skip the ignored strictness prefix on a composite-clause name when the
/// options allow it.
fn skip_name_prefix(stream: &mut dyn CharacterStream, cx: &ParseContext) {
    if cx.options().name_strictness_prefix {
        scan_strictness_marker(stream);
    }
}

/// Parse a type identifier into a node.
pub(crate) fn type_ident(
    stream: &mut dyn CharacterStream,
    expected: &str,
) -> ParseResult<TypeIdent> {
    let start = stream.checkpoint();
    match scan_type_identifier(stream) {
        Some(text) => {
            Ok(TypeIdent::new(text, start.span_to(&stream.position())))
        }
        None => Err(ParseError::structural(stream, expected)),
    }
}

/// Parse a field identifier into a node.
pub(crate) fn field_ident(
    stream: &mut dyn CharacterStream,
    expected: &str,
) -> ParseResult<FieldIdent> {
    let start = stream.checkpoint();
    match scan_field_identifier(stream) {
        Some(text) => {
            Ok(FieldIdent::new(text, start.span_to(&stream.position())))
        }
        None => Err(ParseError::structural(stream, expected)),
    }
}

/// Parse a type identifier inside a composite clause, honoring the
/// strictness-prefix option.
pub(crate) fn clause_type_ident(
    stream: &mut dyn CharacterStream,
    cx: &ParseContext,
    expected: &str,
) -> ParseResult<TypeIdent> {
    skip_name_prefix(stream, cx);
    type_ident(stream, expected)
}

/// Parse `(whitespace+ name)+` for names read by `item`.
///
/// Stops at the first position where the separator or the name is missing
/// and leaves the stream before that separator. Zero names is an error.
fn name_list<T>(
    stream: &mut dyn CharacterStream,
    cx: &ParseContext,
    expected: &str,
    item: fn(&mut dyn CharacterStream, &str) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let mut names = Vec::new();
    loop {
        let before = stream.checkpoint();
        let next = expect_separator(stream, expected).and_then(|()| {
            skip_name_prefix(stream, cx);
            item(stream, expected)
        });
        match next {
            Ok(name) => names.push(name),
            Err(error) if names.is_empty() => return Err(error),
            Err(_) => {
                stream.restore(before);
                return Ok(names);
            }
        }
    }
}

/// One-or-more field identifiers, each preceded by whitespace.
pub(crate) fn field_name_list(
    stream: &mut dyn CharacterStream,
    cx: &ParseContext,
) -> ParseResult<Vec<FieldIdent>> {
    name_list(stream, cx, "field name", field_ident)
}

/// One-or-more type identifiers, each preceded by whitespace.
pub(crate) fn type_name_list(
    stream: &mut dyn CharacterStream,
    cx: &ParseContext,
) -> ParseResult<Vec<TypeIdent>> {
    name_list(stream, cx, "class name", type_ident)
}

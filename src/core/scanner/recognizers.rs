//! Character classes and identifier recognizers.
//!
//! Recognizers are the leaves of the grammar. Each one either consumes a
//! complete lexeme and returns it, or leaves the stream untouched and
//! returns `None`; turning a miss into a parse error is left to the parser
//! component that called it.
//!
//! Two identifier grammars exist:
//!
//! - type identifiers: an uppercase letter, then letters, digits or `_`;
//! - field identifiers: a lowercase letter or `_`, then letters, digits or
//!   `_`, never the keyword `deriving`.
//!
//! Both must end at a name boundary (whitespace, `]`, or end of input),
//! which is checked without being consumed.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::scanner::{
//! #     CharacterStream, StringCharacterStream, recognizers,
//! # };
//! let mut s = StringCharacterStream::new("[Text]");
//! s.advance();
//! let name = recognizers::scan_type_identifier(&mut s);
//! assert_eq!(name.as_deref(), Some("Text"));
//! assert_eq!(s.current(), Some(']'));
//! ```

use crate::core::scanner::stream::{CharacterStream, CharacterStreamExt};

/// Keyword that can never be used as a field name.
pub const DERIVING_KEYWORD: &str = "deriving";

/// Whitespace other than the line terminator (`\r` included).
#[must_use]
pub fn is_horizontal_space(ch: char) -> bool {
    ch.is_whitespace() && ch != '\n'
}

/// The only line terminator the grammar recognizes.
#[must_use]
pub fn is_line_terminator(ch: char) -> bool {
    ch == '\n'
}

/// Letters, digits and underscore.
#[must_use]
pub fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// First character of a type identifier.
#[must_use]
pub fn is_type_ident_start(ch: char) -> bool {
    ch.is_uppercase()
}

/// First character of a field identifier.
#[must_use]
pub fn is_field_ident_start(ch: char) -> bool {
    ch.is_lowercase() || ch == '_'
}

/// Whether an identifier may end right before `next`.
#[must_use]
pub fn is_name_boundary(next: Option<char>) -> bool {
    next.is_none_or(|ch| ch.is_whitespace() || ch == ']')
}

/// Consume horizontal whitespace and return how many characters were skipped.
pub fn skip_horizontal_space(stream: &mut dyn CharacterStream) -> usize {
    stream.eat_while(is_horizontal_space).chars().count()
}

/// Consume one-or-more horizontal whitespace characters.
///
/// Returns `false` (without consuming) when the current character is not
/// horizontal whitespace.
pub fn skip_horizontal_space1(stream: &mut dyn CharacterStream) -> bool {
    skip_horizontal_space(stream) > 0
}

/// Recognize a run of one-or-more identifier characters.
///
/// Used for modifier values and table names, which carry no boundary or
/// case requirement.
pub fn scan_token(stream: &mut dyn CharacterStream) -> Option<String> {
    let token = stream.eat_while(is_ident_char);
    (!token.is_empty()).then_some(token)
}

fn scan_identifier(
    stream: &mut dyn CharacterStream,
    starts: fn(char) -> bool,
) -> Option<String> {
    let start = stream.checkpoint();
    if !stream.current().is_some_and(starts) {
        return None;
    }
    let text = stream.eat_while(is_ident_char);
    if is_name_boundary(stream.current()) {
        Some(text)
    } else {
        stream.restore(start);
        None
    }
}

/// Recognize a type identifier such as `Person` or `Text`.
pub fn scan_type_identifier(
    stream: &mut dyn CharacterStream,
) -> Option<String> {
    scan_identifier(stream, is_type_ident_start)
}

/// Recognize a field identifier such as `name` or `_id`.
///
/// The keyword `deriving` is rejected so that a derive clause is never read
/// as a field declaration.
pub fn scan_field_identifier(
    stream: &mut dyn CharacterStream,
) -> Option<String> {
    let start = stream.checkpoint();
    let text = scan_identifier(stream, is_field_ident_start)?;
    if text == DERIVING_KEYWORD {
        stream.restore(start);
        return None;
    }
    Some(text)
}

/// Consume a strictness marker (`!` or `~`) and return it.
pub fn scan_strictness_marker(
    stream: &mut dyn CharacterStream,
) -> Option<char> {
    match stream.current() {
        Some(marker @ ('!' | '~')) => {
            stream.advance();
            Some(marker)
        }
        _ => None,
    }
}

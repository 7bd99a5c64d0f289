//! Parse blank lines and comment lines.
//!
//! Both productions keep the exact source text they consumed, terminator
//! included, so that concatenating their `text` fields reproduces the input
//! they cover. They are valid both at top level and inside an entity body.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::parser::components::lines::{
//! #     CommentLineParser, WhiteSpaceLineParser,
//! # };
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::traits::Parser;
//! # use persist_rs::core::scanner::StringCharacterStream;
//! let mut s = StringCharacterStream::new(" \t\n-- owner table\n");
//! let mut cx = ParseContext::default();
//! let blank = WhiteSpaceLineParser.parse(&mut s, &mut cx).unwrap();
//! assert_eq!(blank.text, " \t\n");
//! let comment = CommentLineParser.parse(&mut s, &mut cx).unwrap();
//! assert_eq!(comment.text, "-- owner table\n");
//! ```

use crate::core::parser::ast::{CommentLine, WhiteSpaceLine};
use crate::core::parser::components::helpers::expect_line_end;
use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::parser::context::ParseContext;
use crate::core::parser::traits::Parser;
use crate::core::scanner::recognizers::{
    is_horizontal_space, is_line_terminator,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

/// Marker that starts a comment.
pub const COMMENT_PREFIX: &str = "--";

/// Parse a line holding nothing but horizontal whitespace.
///
/// The run may be empty, so a bare `\n` is a blank line. The terminator is
/// mandatory: a whitespace run at end of input passes `can_parse` but fails
/// with `UnterminatedLine`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhiteSpaceLineParser;

impl Parser<WhiteSpaceLine> for WhiteSpaceLineParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        _cx: &mut ParseContext,
    ) -> ParseResult<WhiteSpaceLine> {
        let start = stream.checkpoint();
        stream.eat_while(is_horizontal_space);
        if !stream.current().is_some_and(is_line_terminator) {
            return Err(ParseError::unterminated_line(stream));
        }
        expect_line_end(stream)?;
        Ok(WhiteSpaceLine {
            text: stream.text_since(&start).to_string(),
            span: start.span_to(&stream.position()),
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        let rest = stream.remaining();
        let trimmed = rest.trim_start_matches(is_horizontal_space);
        trimmed.starts_with('\n') || (trimmed.is_empty() && !rest.is_empty())
    }
}

/// Parse a `--` comment running to the end of the line.
///
/// Leading indentation is accepted and kept in the captured text, so
/// comments can be indented to match the entity body they sit in. The
/// terminator is mandatory.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentLineParser;

impl Parser<CommentLine> for CommentLineParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        _cx: &mut ParseContext,
    ) -> ParseResult<CommentLine> {
        let start = stream.checkpoint();
        stream.eat_while(is_horizontal_space);
        if !stream.eat_literal(COMMENT_PREFIX) {
            return Err(ParseError::structural(stream, "`--`"));
        }
        stream.eat_while(|ch| !is_line_terminator(ch));
        if stream.is_at_end() {
            return Err(ParseError::unterminated_line(stream));
        }
        expect_line_end(stream)?;
        Ok(CommentLine {
            text: stream.text_since(&start).to_string(),
            span: start.span_to(&stream.position()),
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        stream
            .remaining()
            .trim_start_matches(is_horizontal_space)
            .starts_with(COMMENT_PREFIX)
    }
}

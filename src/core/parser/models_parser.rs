//! Entry points: parse a whole models file or an embedded models block.
//!
//! Both operations run the same item loop (entity, blank line, comment) over
//! a fresh `StringCharacterStream` and `ParseContext`; no state outlives a
//! call, so a `ModelsParser` can be shared freely.
//!
//! - Full-file parse: items repeat until end of input. Text that no item
//!   accepts is a `StructuralMismatch`, reported at the farthest point any
//!   abandoned alternative reached.
//! - Embedded parse: characters are skipped until an opening marker appears,
//!   then items repeat until the closing marker. A missing marker is a
//!   `MarkerNotFound`; unparseable text before the closing marker is a
//!   `StructuralMismatch`.
//!
//! ## Examples
//! ```
//! # use persist_rs::{parse_embedded_models_block, parse_models_file};
//! let file = parse_models_file("-- people\nPerson\n  name Text\n").unwrap();
//! assert_eq!(file.entities().count(), 1);
//!
//! let block = parse_embedded_models_block(
//!     "share [persistLowerCase|\nPerson\n  name Text\n|] more",
//! )
//! .unwrap();
//! assert_eq!(block.entity("Person").unwrap().fields().count(), 1);
//! ```

use crate::core::parser::ast::{ModelsFile, ModelsFileItem, WhiteSpaceLine};
use crate::core::parser::components::declarations::ModelsFileItemParser;
use crate::core::parser::config::{ParseError, ParseResult, ParserOptions};
use crate::core::parser::context::ParseContext;
use crate::core::parser::traits::Parser;
use crate::core::scanner::recognizers::is_horizontal_space;
use crate::core::scanner::{
    CharacterStream, CharacterStreamExt, StringCharacterStream,
};

const ITEM_EXPECTED: &str = "entity, blank line or comment";

/// Parser for models files and embedded models blocks.
#[derive(Debug, Clone, Default)]
pub struct ModelsParser {
    options: ParserOptions,
}

impl ModelsParser {
    /// Create a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the entire input as a models file.
    ///
    /// Empty input yields an empty `ModelsFile`; whitespace-only input
    /// yields nothing but blank-line items.
    ///
    /// ## Errors
    /// Returns the first fatal error, or the farthest failure when some
    /// text is left that no item accepts.
    pub fn parse_file(&self, text: &str) -> ParseResult<ModelsFile> {
        let mut stream = StringCharacterStream::new(text);
        let mut cx = ParseContext::new(self.options.clone());
        let start = stream.checkpoint();
        let mut items = Vec::new();

        while !stream.is_at_end() {
            if let Some(line) = self.trailing_space(&mut stream) {
                items.push(ModelsFileItem::WhiteSpace(line));
                break;
            }
            items.push(next_item(&mut stream, &mut cx, ITEM_EXPECTED)?);
        }

        tracing::debug!(items = items.len(), "parsed models file");
        Ok(ModelsFile {
            items,
            span: start.span_to(&stream.position()),
        })
    }

    /// Find the first embedded block in `text` and parse its contents.
    ///
    /// Everything before the opening marker and after the closing marker is
    /// ignored. Spans are relative to the whole of `text`.
    ///
    /// ## Errors
    /// Returns `MarkerNotFound` when no opening marker appears or the
    /// closing marker is never reached, a fatal error from inside the block,
    /// or the farthest failure when unparseable text precedes the closing
    /// marker.
    pub fn parse_embedded(&self, text: &str) -> ParseResult<ModelsFile> {
        let mut stream = StringCharacterStream::new(text);
        let mut cx = ParseContext::new(self.options.clone());
        let close = self.options.markers.close.as_str();

        let opened = self.skip_to_open_marker(&mut stream)?;
        tracing::debug!(
            marker = %opened,
            at = %stream.position().to_symbol_location(),
            "entered embedded block"
        );

        let start = stream.checkpoint();
        let mut items = Vec::new();
        let end = loop {
            let before_close = stream.position();
            if stream.eat_literal(close) {
                break before_close;
            }
            if stream.is_at_end() {
                return Err(cx.finish_error(ParseError::marker_not_found(
                    &stream,
                    format!("`{close}`"),
                )));
            }
            let expected = format!("{ITEM_EXPECTED} or `{close}`");
            items.push(next_item(&mut stream, &mut cx, &expected)?);
        };

        tracing::debug!(items = items.len(), "parsed embedded block");
        Ok(ModelsFile {
            items,
            span: start.span_to(&end),
        })
    }

    /// Advance one character at a time until an opening marker matches,
    /// consume it and return it.
    fn skip_to_open_marker(
        &self,
        stream: &mut dyn CharacterStream,
    ) -> ParseResult<String> {
        let open = &self.options.markers.open;
        loop {
            if let Some(marker) = open.iter().find(|m| stream.starts_with(m)) {
                stream.eat_literal(marker);
                return Ok(marker.clone());
            }
            if stream.advance().is_none() {
                let expected = open
                    .iter()
                    .map(|m| format!("`{m}`"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(ParseError::marker_not_found(stream, expected));
            }
        }
    }

    /// Consume a final unterminated whitespace run, when allowed.
    fn trailing_space(
        &self,
        stream: &mut dyn CharacterStream,
    ) -> Option<WhiteSpaceLine> {
        let rest = stream.remaining();
        if !self.options.allow_trailing_space_at_eof
            || rest.is_empty()
            || !rest.chars().all(is_horizontal_space)
        {
            return None;
        }
        let start = stream.checkpoint();
        stream.eat_while(is_horizontal_space);
        Some(WhiteSpaceLine {
            text: stream.text_since(&start).to_string(),
            span: start.span_to(&stream.position()),
        })
    }
}

/// Parse one top-level item, or fail with the farthest failure seen.
fn next_item(
    stream: &mut dyn CharacterStream,
    cx: &mut ParseContext,
    expected: &str,
) -> ParseResult<ModelsFileItem> {
    match cx.attempt(stream, |s, cx| ModelsFileItemParser.parse(s, cx))? {
        Some(item) => Ok(item),
        None => {
            let error =
                cx.finish_error(ParseError::structural(stream, expected));
            tracing::trace!(%error, "no item matched");
            Err(error)
        }
    }
}

/// Parse `text` as a models file with default options.
///
/// ## Errors
/// See [`ModelsParser::parse_file`].
pub fn parse_models_file(text: &str) -> ParseResult<ModelsFile> {
    ModelsParser::default().parse_file(text)
}

/// Parse `text` as a models file with the given options.
///
/// ## Errors
/// See [`ModelsParser::parse_file`].
pub fn parse_models_file_with(
    text: &str,
    options: &ParserOptions,
) -> ParseResult<ModelsFile> {
    ModelsParser::new(options.clone()).parse_file(text)
}

/// Parse the first embedded models block in `text` with default options.
///
/// ## Errors
/// See [`ModelsParser::parse_embedded`].
pub fn parse_embedded_models_block(text: &str) -> ParseResult<ModelsFile> {
    ModelsParser::default().parse_embedded(text)
}

/// Parse the first embedded models block in `text` with the given options.
///
/// ## Errors
/// See [`ModelsParser::parse_embedded`].
pub fn parse_embedded_models_block_with(
    text: &str,
    options: &ParserOptions,
) -> ParseResult<ModelsFile> {
    ModelsParser::new(options.clone()).parse_embedded(text)
}

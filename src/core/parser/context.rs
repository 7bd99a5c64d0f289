//! Carry options and failure bookkeeping through one parse.
//!
//! A `ParseContext` lives for a single invocation of an entry point. It
//! holds the `ParserOptions` and remembers the farthest failure among the
//! alternatives that were tried and abandoned. When the parse finally gets
//! stuck, that farthest failure usually names the real problem (a bad type
//! three columns into a field line) better than the position where the
//! enclosing repetition stopped.
//!
//! ## Examples
//! Try an alternative, rewind on failure, and keep its error.
//! ```
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::config::{ParseError, ParserOptions};
//! # use persist_rs::core::scanner::{
//! #     CharacterStream, CharacterStreamExt, StringCharacterStream,
//! # };
//! let mut cx = ParseContext::new(ParserOptions::default());
//! let mut s = StringCharacterStream::new("Primary\n");
//! let attempt = cx.attempt(&mut s, |s, _| {
//!     s.eat_literal("Primary");
//!     Err::<(), _>(ParseError::structural(s, "field identifier"))
//! });
//! assert!(attempt.unwrap().is_none());
//! assert_eq!(s.position().offset, 0);
//! assert_eq!(cx.farthest_failure().unwrap().offset, 7);
//! ```

use crate::core::parser::config::{ParseError, ParseResult, ParserOptions};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

/// Per-parse state shared by all components.
#[derive(Debug, Default)]
pub struct ParseContext {
    options: ParserOptions,
    farthest: Option<ParseError>,
}

impl ParseContext {
    /// Create a context with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            farthest: None,
        }
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Remember an abandoned failure if it got farther than any before it.
    pub fn record_failure(&mut self, error: ParseError) {
        self.farthest = Some(match self.farthest.take() {
            Some(previous) => previous.farthest(error),
            None => error,
        });
    }

    /// The farthest abandoned failure so far.
    #[must_use]
    pub fn farthest_failure(&self) -> Option<&ParseError> {
        self.farthest.as_ref()
    }

    /// Combine a final error with the farthest abandoned failure.
    ///
    /// Fatal errors are returned as they are.
    pub fn finish_error(&mut self, error: ParseError) -> ParseError {
        if error.is_fatal() {
            return error;
        }
        match self.farthest.take() {
            Some(previous) => error.farthest(previous),
            None => error,
        }
    }

    /// Run one alternative from the current position.
    ///
    /// Success returns `Some`. A non-fatal failure rewinds the stream,
    /// is remembered, and returns `None` so the caller can try the next
    /// alternative. A fatal failure is returned as an error.
    ///
    /// ## Errors
    /// Returns the alternative's error when it is fatal.
    pub fn attempt<T, F>(
        &mut self,
        stream: &mut dyn CharacterStream,
        parse: F,
    ) -> ParseResult<Option<T>>
    where
        F: FnOnce(&mut dyn CharacterStream, &mut Self) -> ParseResult<T>,
    {
        let start = stream.checkpoint();
        match parse(stream, self) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => {
                stream.restore(start);
                self.record_failure(error);
                Ok(None)
            }
        }
    }
}

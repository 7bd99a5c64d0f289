//! Core parser trait.
//!
//! Every grammar production is a small component implementing `Parser<T>`.
//! `parse` consumes the construct and returns it, or returns a `ParseError`;
//! `can_parse` is a cheap, conservative lookahead that composite parsers use
//! to skip alternatives that cannot possibly start at the current position.
//!
//! ## Examples
//! A parser for the literal `json` flag.
//! ```
//! # use persist_rs::core::parser::traits::Parser;
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::config::{ParseError, ParseResult};
//! # use persist_rs::core::scanner::{
//! #     CharacterStream, CharacterStreamExt, StringCharacterStream,
//! # };
//! struct JsonFlag;
//! impl Parser<()> for JsonFlag {
//!     fn parse(
//!         &mut self,
//!         s: &mut dyn CharacterStream,
//!         _: &mut ParseContext,
//!     ) -> ParseResult<()> {
//!         if s.eat_literal("json") {
//!             Ok(())
//!         } else {
//!             Err(ParseError::structural(s, "`json`"))
//!         }
//!     }
//!     fn can_parse(&self, s: &dyn CharacterStream) -> bool {
//!         s.starts_with("json")
//!     }
//! }
//! let mut s = StringCharacterStream::new("json");
//! assert!(JsonFlag.can_parse(&s));
//! assert!(JsonFlag.parse(&mut s, &mut ParseContext::default()).is_ok());
//! ```

use crate::core::parser::config::ParseResult;
use crate::core::parser::context::ParseContext;
use crate::core::scanner::CharacterStream;

/// Parse a language construct from a character stream.
///
/// Implementations may leave the stream anywhere on failure; callers that
/// want to try something else rewind through `ParseContext::attempt`.
pub trait Parser<T> {
    /// Parse the target construct at the current position.
    ///
    /// ## Errors
    /// Returns a `ParseError` when the construct is not present or is
    /// malformed.
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<T>;

    /// Check whether the construct can start at the current position.
    ///
    /// Must never return `false` for input that `parse` would accept.
    fn can_parse(&self, stream: &dyn CharacterStream) -> bool;
}

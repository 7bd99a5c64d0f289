//! Read model-definition text one character at a time.
//!
//! The scanner is the lowest layer of the parser. The models language is
//! indentation- and line-structured, so instead of producing a token list it
//! offers a rewindable `CharacterStream` and a small set of recognizers for
//! the lexemes the grammar is built from (identifiers, value tokens,
//! strictness markers, horizontal whitespace).
//!
//! This module provides the stream abstraction and its string-backed
//! implementation (`stream`), the lexeme recognizers (`recognizers`), and
//! source coordinates (`span`). Common items are re-exported so callers can
//! import from `persist_rs::core::scanner::{StringCharacterStream, ...}`.
//!
//! All spans use 1-based line and column.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::scanner::{recognizers, StringCharacterStream};
//! let mut s = StringCharacterStream::new("userId PersonId");
//! let name = recognizers::scan_field_identifier(&mut s);
//! assert_eq!(name.as_deref(), Some("userId"));
//! ```
pub mod recognizers;
pub mod span;
pub mod stream;

pub use span::*;
pub use stream::*;

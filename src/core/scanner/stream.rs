//! Navigate source text character by character with backtracking.
//!
//! The models grammar is whitespace- and line-sensitive, so the parser reads
//! characters directly instead of a pre-built token list. A
//! `CharacterStream` exposes read, peek and advance operations, reports the
//! current `Position`, and can be rewound to any earlier position. Ordered
//! alternation relies on that rewind: an alternative that fails restores the
//! stream before the next one is attempted.
//!
//! Positions are 1-based (line, column); `offset` is a byte offset into the
//! source text.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::scanner::{
//! #     CharacterStream, CharacterStreamExt, StringCharacterStream,
//! # };
//! let mut s = StringCharacterStream::new("Person json\n");
//! let cp = s.checkpoint();
//! assert!(s.eat_literal("Person"));
//! assert_eq!(s.position().column, 7);
//! s.restore(cp);
//! assert_eq!(s.current(), Some('P'));
//! ```

use crate::core::scanner::span::{SymbolLocation, SymbolSpan};

/// Track the stream's current location in the input.
///
/// Stores 1-based `line` and `column` and a byte `offset`. Two positions
/// taken from the same stream compare by how far they are into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    /// Create a position with explicit line, column, and byte offset.
    #[must_use]
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Convert to a `SymbolLocation` (line and column only).
    #[must_use]
    pub fn to_symbol_location(&self) -> SymbolLocation {
        SymbolLocation {
            line: self.line,
            column: self.column,
        }
    }

    /// Build the span running from `self` to `end`.
    #[must_use]
    pub fn span_to(&self, end: &Position) -> SymbolSpan {
        SymbolSpan {
            start: self.to_symbol_location(),
            end: end.to_symbol_location(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Read characters with position tracking and rewind support.
///
/// `peek(0)` is equivalent to `current()`. `advance()` returns the character
/// that `current()` produced immediately before. `restore` accepts any
/// position previously returned by `position()` on the same stream.
pub trait CharacterStream: std::fmt::Debug {
    /// Returns the current character without advancing, or `None` at end of
    /// input.
    fn current(&self) -> Option<char>;

    /// Advances by one character and returns the character that was current,
    /// or `None` at end.
    fn advance(&mut self) -> Option<char>;

    /// Returns the character `offset` positions ahead without advancing.
    fn peek(&self, offset: usize) -> Option<char>;

    /// Returns the current position.
    fn position(&self) -> Position;

    /// Rewinds (or fast-forwards) the stream to `position`.
    fn restore(&mut self, position: Position);

    /// The unread part of the input.
    fn remaining(&self) -> &str;

    /// The whole input the stream was created over.
    fn source(&self) -> &str;
}

/// Provide a `CharacterStream` over a UTF-8 string.
///
/// Tracks newlines and columns as Unicode scalar values are advanced.
#[derive(Debug, Clone)]
pub struct StringCharacterStream {
    input: String,
    position: Position,
}

impl StringCharacterStream {
    /// Creates a stream over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            position: Position::default(),
        }
    }
}

impl CharacterStream for StringCharacterStream {
    fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.position.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn restore(&mut self, position: Position) {
        self.position = position;
    }

    fn remaining(&self) -> &str {
        self.input.get(self.position.offset..).unwrap_or("")
    }

    fn source(&self) -> &str {
        &self.input
    }
}

/// Convenience methods shared by every parser component.
///
/// Implemented for all `CharacterStream`s, trait objects included, so
/// callers can write `use persist_rs::core::scanner::CharacterStreamExt;`.
pub trait CharacterStreamExt: CharacterStream {
    /// Capture the current position for a later `restore`.
    fn checkpoint(&self) -> Position {
        self.position()
    }

    /// Check if the stream has no characters left.
    fn is_at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Check if the unread input starts with `literal`.
    fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume `expected` if it is the current character.
    fn eat_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `literal` if the unread input starts with it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        for _ in literal.chars() {
            self.advance();
        }
        true
    }

    /// Consume characters while `pred` holds and return them.
    fn eat_while(&mut self, pred: fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(ch) = self.current()
            && pred(ch)
        {
            taken.push(ch);
            self.advance();
        }
        taken
    }

    /// The source text between `start` and the current position.
    fn text_since(&self, start: &Position) -> &str {
        self.source()
            .get(start.offset..self.position().offset)
            .unwrap_or("")
    }
}

impl<T: ?Sized + CharacterStream> CharacterStreamExt for T {}

//! Configure the parser and describe parse failures.
//!
//! `ParserOptions` holds the few knobs the grammar has: the markers that
//! delimit an embedded block, whether composite clauses tolerate a stray
//! strictness prefix on their names, and whether a final unterminated
//! whitespace run is accepted. `ParseError` is the single failure value every
//! parser returns; there is no partial result.
//!
//! ## Examples
//! Create custom options and inspect an error.
//! ```
//! # use persist_rs::core::parser::config::*;
//! # use persist_rs::parse_models_file;
//! let opts = ParserOptions::default()
//!     .with_markers(BlockMarkers::new(["[models|"], "|]"))
//!     .with_name_strictness_prefix(true);
//! assert_eq!(opts.markers.open, vec!["[models|".to_string()]);
//!
//! let err = parse_models_file("Person\n  age Int maxlen=ten\n").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::IntegerLiteralInvalid);
//! assert_eq!(err.location.line, 2);
//! ```

use crate::core::scanner::{CharacterStream, Position, SymbolLocation};
use std::fmt;

/// Opening marker for a lower-case-table block.
pub const PERSIST_LOWER_CASE: &str = "[persistLowerCase|";
/// Opening marker for an upper-case-table block.
pub const PERSIST_UPPER_CASE: &str = "[persistUpperCase|";
/// Closing marker shared by both block kinds.
pub const BLOCK_CLOSE: &str = "|]";

/// Literal markers delimiting an embedded block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    /// Any of these opens a block; earlier entries win on a tie.
    pub open: Vec<String>,
    /// Closes the block.
    pub close: String,
}

impl BlockMarkers {
    /// Create a marker set.
    #[must_use]
    pub fn new<I, S>(open: I, close: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            open: open.into_iter().map(Into::into).collect(),
            close: close.into(),
        }
    }
}

impl Default for BlockMarkers {
    fn default() -> Self {
        Self::new([PERSIST_LOWER_CASE, PERSIST_UPPER_CASE], BLOCK_CLOSE)
    }
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Accept and ignore one leading `!` or `~` on the names inside
    /// `Unique`, `deriving`, `Primary` and `Foreign` lines.
    pub name_strictness_prefix: bool,
    /// Markers used by the embedded-block parse.
    pub markers: BlockMarkers,
    /// Accept a last line made of horizontal whitespace with no terminator.
    pub allow_trailing_space_at_eof: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            name_strictness_prefix: false,
            markers: BlockMarkers::default(),
            allow_trailing_space_at_eof: true,
        }
    }
}

impl ParserOptions {
    /// Toggle the strictness prefix on composite-clause names.
    #[must_use]
    pub fn with_name_strictness_prefix(mut self, enabled: bool) -> Self {
        self.name_strictness_prefix = enabled;
        self
    }

    /// Replace the embedded-block markers.
    #[must_use]
    pub fn with_markers(mut self, markers: BlockMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Toggle acceptance of a final unterminated whitespace run.
    #[must_use]
    pub fn with_trailing_space_at_eof(mut self, allowed: bool) -> Self {
        self.allow_trailing_space_at_eof = allowed;
        self
    }
}

/// Category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A required keyword, identifier or delimiter is missing.
    StructuralMismatch,
    /// A `maxlen=` value is not a base-10 integer.
    IntegerLiteralInvalid,
    /// A line reached neither a terminator nor end of input.
    UnterminatedLine,
    /// An embedded-block marker never appears.
    MarkerNotFound,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseErrorKind::StructuralMismatch => "syntax error",
            ParseErrorKind::IntegerLiteralInvalid => "invalid integer",
            ParseErrorKind::UnterminatedLine => "unterminated line",
            ParseErrorKind::MarkerNotFound => "missing block marker",
        };
        f.write_str(text)
    }
}

/// A parse failure: what was expected, what was found, and where.
///
/// Fatal errors stop ordered alternation immediately; non-fatal ones let the
/// next alternative run from the same position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}: expected {expected}, found {found}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The construct that was required.
    pub expected: String,
    /// A short description of the input at `location`.
    pub found: String,
    pub location: SymbolLocation,
    /// Byte offset of `location`.
    pub offset: usize,
    fatal: bool,
}

/// Result alias used by every parser component.
pub type ParseResult<T> = Result<T, ParseError>;

const FOUND_PREVIEW_CHARS: usize = 16;

/// Describe the input at the stream's current position.
fn describe_input(stream: &dyn CharacterStream) -> String {
    let rest = stream.remaining();
    match rest.chars().next() {
        None => "end of input".to_string(),
        Some('\n') => "end of line".to_string(),
        Some(ch) if ch.is_whitespace() => "whitespace".to_string(),
        Some(_) => {
            let word: String = rest
                .chars()
                .take_while(|c| !c.is_whitespace())
                .take(FOUND_PREVIEW_CHARS)
                .collect();
            format!("`{word}`")
        }
    }
}

impl ParseError {
    /// Create an error at an explicit position.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        expected: impl Into<String>,
        found: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            expected: expected.into(),
            found: found.into(),
            location: position.to_symbol_location(),
            offset: position.offset,
            fatal: false,
        }
    }

    /// A missing keyword, identifier or delimiter at the current position.
    #[must_use]
    pub fn structural(
        stream: &dyn CharacterStream,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(
            ParseErrorKind::StructuralMismatch,
            expected,
            describe_input(stream),
            stream.position(),
        )
    }

    /// A line that has no terminator at the current position.
    #[must_use]
    pub fn unterminated_line(stream: &dyn CharacterStream) -> Self {
        Self::new(
            ParseErrorKind::UnterminatedLine,
            "line terminator",
            describe_input(stream),
            stream.position(),
        )
    }

    /// A block marker that does not appear.
    #[must_use]
    pub fn marker_not_found(
        stream: &dyn CharacterStream,
        marker: impl Into<String>,
    ) -> Self {
        Self::new(
            ParseErrorKind::MarkerNotFound,
            marker,
            describe_input(stream),
            stream.position(),
        )
    }

    /// A `maxlen=` value that does not parse; always fatal.
    #[must_use]
    pub fn invalid_integer(text: &str, position: Position) -> Self {
        Self::new(
            ParseErrorKind::IntegerLiteralInvalid,
            "base-10 integer",
            format!("`{text}`"),
            position,
        )
        .into_fatal()
    }

    /// Mark this error as fatal.
    #[must_use]
    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Whether this error stops ordered alternation.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Keep whichever of the two errors got farther into the input.
    ///
    /// On a tie the fatal one wins, then `self`.
    #[must_use]
    pub fn farthest(self, other: ParseError) -> ParseError {
        let other_wins = other.offset > self.offset
            || (other.offset == self.offset && other.fatal && !self.fatal);
        if other_wins { other } else { self }
    }
}

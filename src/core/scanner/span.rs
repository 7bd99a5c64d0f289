//! Source coordinates for AST nodes and parse errors.
//!
//! `SymbolLocation` records a single `(line, column)` position and
//! `SymbolSpan` records the region `[start, end)` covered by a construct.
//! Lines and columns are 1-based and counted in Unicode scalar values, as
//! reported by the active `CharacterStream`.

use std::fmt;

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolLocation {
    /// Line number of the position.
    pub line: u32,
    /// Column number of the position.
    pub column: u32,
}

impl SymbolLocation {
    /// Create a location from a 1-based line and column.
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SymbolLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<(u32, u32)> for SymbolLocation {
    fn from((line, column): (u32, u32)) -> Self {
        Self { line, column }
    }
}

/// A contiguous range in the source text.
///
/// `start` is the first character of the construct and `end` the position
/// just past its last consumed character (the terminator included for line
/// productions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSpan {
    /// The start location of the span.
    pub start: SymbolLocation,
    /// The end location of the span.
    pub end: SymbolLocation,
}

impl SymbolSpan {
    /// Build a span from two `(line, column)` pairs.
    ///
    /// ## Examples
    /// ```
    /// # use persist_rs::core::scanner::SymbolSpan;
    /// let span = SymbolSpan::new((1, 1), (1, 7));
    /// assert_eq!(span.start.column, 1);
    /// assert_eq!(span.end.column, 7);
    /// ```
    #[must_use]
    pub fn new(
        start: impl Into<SymbolLocation>,
        end: impl Into<SymbolLocation>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Return true when the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for SymbolSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

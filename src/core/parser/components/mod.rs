//! Pluggable parser components for entity-model parsing.
//!
//! These components implement the grammar from `src/core/parser/grammar/v1.md`
//! in small, composable units. Each component handles one production and
//! exposes a `Parser<T>` implementation with:
//!
//! - `parse(&mut self, stream, cx) -> ParseResult<T>`: consumes the
//!   construct and produces an AST node with its span.
//! - `can_parse(&self, stream) -> bool`: fast, conservative lookahead used by
//!   composite parsers before they commit to an attempt.
//!
//! Composite parsers try their alternatives in a fixed priority order through
//! `ParseContext::attempt`, which rewinds the stream when an alternative
//! fails. Spans use 1-based line/column.
//!
//! Parsing strategy is bottom-up and layered:
//!
//! - `helpers`: indentation, end-of-line handling and identifier lists.
//! - `lines`: blank lines and `--` comments.
//! - `types`: field type signatures (`[!Text] Maybe`).
//! - `modifiers`: the order-independent, at-most-once modifier engine.
//! - `members`: entity children (field, derive, primary, foreign, unique).
//! - `declarations`: entities and top-level items.
//!
//! Every line-oriented production ends by discarding unrecognized text up to
//! the line terminator, then requires the terminator or end of input.
//!
//! ## Examples
//! Parse a field declaration directly with the component parser.
//! ```
//! # use persist_rs::core::parser::components::members::FieldParser;
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::traits::Parser;
//! # use persist_rs::core::scanner::StringCharacterStream;
//! let mut s = StringCharacterStream::new(
//!     "  email Text Maybe sqltype=varchar maxlen=120\n",
//! );
//! let mut cx = ParseContext::default();
//! let f = FieldParser.parse(&mut s, &mut cx).unwrap();
//! assert_eq!(f.name.text, "email");
//! assert!(f.r#type.is_maybe);
//! assert_eq!(f.sql_type.as_deref(), Some("varchar"));
//! assert_eq!(f.max_len, Some(120));
//! ```

pub mod declarations;
pub mod helpers;
pub mod lines;
pub mod members;
pub mod modifiers;
pub mod types;

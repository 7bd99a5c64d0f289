//! Parsers for top-level declarations.
//!
//! An entity is a header line followed by its indented children:
//!
//! ```text
//! Person json sql=people
//!   name Text
//!   age Int Maybe
//!   UniqueName name
//!   deriving Show
//! ```
//!
//! The header is `TypeName [json] [sql=table]`, starting at the first
//! column. The body repeats `EntityChildParser` until nothing matches; the
//! entity then ends and control returns to the enclosing item loop, which
//! resumes from the same position. A header with no children is a valid,
//! empty entity.

use crate::core::parser::ast::{Entity, ModelsFileItem};
use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::parser::context::ParseContext;
use crate::core::parser::traits::Parser;
use crate::core::scanner::recognizers::{
    is_type_ident_start, scan_token, skip_horizontal_space,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

use super::helpers::{finish_line, type_ident};
use super::lines::{CommentLineParser, WhiteSpaceLineParser};
use super::members::EntityChildParser;

/// Header flag that marks an entity as JSON-serializable.
pub const JSON_KEYWORD: &str = "json";
/// Header key that overrides the table name.
pub const SQL_KEYWORD: &str = "sql";

/// Parse an entity header and body.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityParser;

impl EntityParser {
    /// `[whitespace*] json`, rewinding when absent.
    fn json_flag(stream: &mut dyn CharacterStream) -> bool {
        let before = stream.checkpoint();
        skip_horizontal_space(stream);
        let found = stream.eat_literal(JSON_KEYWORD);
        if !found {
            stream.restore(before);
        }
        found
    }

    /// `[whitespace*] sql [whitespace*] = [whitespace*] table`, rewinding
    /// when any part is absent.
    fn sql_table(stream: &mut dyn CharacterStream) -> Option<String> {
        let before = stream.checkpoint();
        let table = Self::sql_assignment(stream);
        if table.is_none() {
            stream.restore(before);
        }
        table
    }

    fn sql_assignment(stream: &mut dyn CharacterStream) -> Option<String> {
        skip_horizontal_space(stream);
        if !stream.eat_literal(SQL_KEYWORD) {
            return None;
        }
        skip_horizontal_space(stream);
        if !stream.eat_char('=') {
            return None;
        }
        skip_horizontal_space(stream);
        scan_token(stream)
    }
}

impl Parser<Entity> for EntityParser {
    /// Parse one entity.
    ///
    /// ## Examples
    /// ```
    /// # use persist_rs::core::parser::components::declarations::EntityParser;
    /// # use persist_rs::core::parser::context::ParseContext;
    /// # use persist_rs::core::parser::traits::Parser;
    /// # use persist_rs::core::scanner::StringCharacterStream;
    /// let mut s = StringCharacterStream::new("Person json sql=ppl\n");
    /// let mut cx = ParseContext::default();
    /// let entity = EntityParser.parse(&mut s, &mut cx).unwrap();
    /// assert_eq!(entity.name.text, "Person");
    /// assert!(entity.derives_json);
    /// assert_eq!(entity.sql_table_name.as_deref(), Some("ppl"));
    /// assert!(entity.children.is_empty());
    /// ```
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<Entity> {
        let start = stream.checkpoint();
        let name = type_ident(stream, "entity name")?;
        let derives_json = Self::json_flag(stream);
        let sql_table_name = Self::sql_table(stream);
        finish_line(stream)?;

        let mut children = Vec::new();
        while EntityChildParser.can_parse(stream) {
            let before = stream.position();
            let child =
                cx.attempt(stream, |s, cx| EntityChildParser.parse(s, cx))?;
            match child {
                Some(child) if stream.position() > before => {
                    children.push(child);
                }
                _ => break,
            }
        }

        tracing::debug!(
            entity = %name.text,
            children = children.len(),
            at = %start.to_symbol_location(),
            "parsed entity"
        );
        Ok(Entity {
            name,
            derives_json,
            sql_table_name,
            children,
            span: start.span_to(&stream.position()),
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        stream.current().is_some_and(is_type_ident_start)
    }
}

/// Parse any top-level item: entity, blank line or comment line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelsFileItemParser;

impl Parser<ModelsFileItem> for ModelsFileItemParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<ModelsFileItem> {
        if EntityParser.can_parse(stream)
            && let Some(entity) =
                cx.attempt(stream, |s, cx| EntityParser.parse(s, cx))?
        {
            return Ok(ModelsFileItem::Entity(entity));
        }
        if WhiteSpaceLineParser.can_parse(stream)
            && let Some(line) =
                cx.attempt(stream, |s, cx| WhiteSpaceLineParser.parse(s, cx))?
        {
            return Ok(ModelsFileItem::WhiteSpace(line));
        }
        if CommentLineParser.can_parse(stream)
            && let Some(line) =
                cx.attempt(stream, |s, cx| CommentLineParser.parse(s, cx))?
        {
            return Ok(ModelsFileItem::Comment(line));
        }
        Err(ParseError::structural(stream, "entity, blank line or comment"))
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        EntityParser.can_parse(stream)
            || WhiteSpaceLineParser.can_parse(stream)
            || CommentLineParser.can_parse(stream)
    }
}

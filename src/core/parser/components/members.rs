//! Parsers for the indented lines of an entity body.
//!
//! Every child starts with one-or-more horizontal whitespace characters of
//! indentation and ends by discarding whatever the grammar did not consume
//! up to the line terminator (or end of input):
//!
//! - field:   `name Type [flags] [key=value ...]`
//! - derive:  `deriving Class+`
//! - primary: `Primary field+`
//! - foreign: `Foreign Target field+`
//! - unique:  `ConstraintName field+`
//!
//! Blank and comment lines are children too; `EntityChildParser` tries all
//! seven productions in that priority order.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::parser::components::members::EntityChildParser;
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::traits::Parser;
//! # use persist_rs::core::parser::ast::EntityChild;
//! # use persist_rs::core::scanner::StringCharacterStream;
//! let mut s = StringCharacterStream::new("  UniqueEmail email\n");
//! let mut cx = ParseContext::default();
//! let child = EntityChildParser.parse(&mut s, &mut cx).unwrap();
//! let EntityChild::Unique(unique) = child else {
//!     panic!("expected a unique constraint")
//! };
//! assert_eq!(unique.name.text, "UniqueEmail");
//! assert_eq!(unique.field_names[0].text, "email");
//! ```

use crate::core::parser::ast::{
    EntityChild, EntityDerive, EntityField, EntityForeign, EntityPrimary,
    EntityUnique,
};
use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::parser::context::ParseContext;
use crate::core::parser::traits::Parser;
use crate::core::scanner::recognizers::{
    DERIVING_KEYWORD, is_field_ident_start, is_type_ident_start,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

use super::helpers::{
    after_indentation, clause_type_ident, expect_indentation, expect_separator,
    field_ident, field_name_list, finish_line, type_name_list,
};
use super::lines::{CommentLineParser, WhiteSpaceLineParser};
use super::modifiers::{
    FlagModifier, KeyValueModifier, ModifierValue, scan_modifiers,
};
use super::types::FieldTypeParser;

/// Keyword that starts a primary-key line.
pub const PRIMARY_KEYWORD: &str = "Primary";
/// Keyword that starts a foreign-key line.
pub const FOREIGN_KEYWORD: &str = "Foreign";

fn after_indentation_starts_with(
    stream: &dyn CharacterStream,
    keyword: &str,
) -> bool {
    after_indentation(stream).is_some_and(|rest| rest.starts_with(keyword))
}

fn after_indentation_first(
    stream: &dyn CharacterStream,
    class: fn(char) -> bool,
) -> bool {
    after_indentation(stream)
        .and_then(|rest| rest.chars().next())
        .is_some_and(class)
}

/// Require a keyword right after the indentation.
fn expect_keyword(
    stream: &mut dyn CharacterStream,
    keyword: &str,
) -> ParseResult<()> {
    if stream.eat_literal(keyword) {
        Ok(())
    } else {
        Err(ParseError::structural(stream, format!("`{keyword}`")))
    }
}

/// Parse a field declaration line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldParser;

impl FieldParser {
    fn apply_flags(field: &mut EntityField, flags: Vec<(FlagModifier, ())>) {
        for (flag, ()) in flags {
            match flag {
                FlagModifier::MigrationOnly => field.migration_only = true,
                FlagModifier::SafeToRemove => field.safe_to_remove = true,
            }
        }
    }

    fn apply_annotations(
        field: &mut EntityField,
        annotations: Vec<(KeyValueModifier, ModifierValue)>,
    ) {
        for (key, value) in annotations {
            match key {
                KeyValueModifier::Default => {
                    field.default_value = value.into_text();
                }
                KeyValueModifier::Sql => field.sql_row = value.into_text(),
                KeyValueModifier::SqlType => field.sql_type = value.into_text(),
                KeyValueModifier::MaxLen => field.max_len = value.as_integer(),
            }
        }
    }
}

impl Parser<EntityField> for FieldParser {
    /// Parse `  name Type [flags] [key=value ...]`.
    ///
    /// The span runs from the field name to the last modifier; discarded
    /// trailing text is not covered.
    ///
    /// ## Examples
    /// ```
    /// # use persist_rs::core::parser::components::members::FieldParser;
    /// # use persist_rs::core::parser::context::ParseContext;
    /// # use persist_rs::core::parser::traits::Parser;
    /// # use persist_rs::core::scanner::StringCharacterStream;
    /// let mut s =
    ///     StringCharacterStream::new("  name Text default=1 default=2\n");
    /// let mut cx = ParseContext::default();
    /// let field = FieldParser.parse(&mut s, &mut cx).unwrap();
    /// assert_eq!(field.default_value.as_deref(), Some("1"));
    /// ```
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityField> {
        expect_indentation(stream)?;
        let start = stream.checkpoint();
        let name = field_ident(stream, "field name")?;
        expect_separator(stream, "field type")?;
        let ty = FieldTypeParser.parse(stream, cx)?;

        let mut field = EntityField::new(name, ty, start.span_to(&start));
        Self::apply_flags(&mut field, scan_modifiers::<FlagModifier>(stream)?);
        Self::apply_annotations(
            &mut field,
            scan_modifiers::<KeyValueModifier>(stream)?,
        );
        field.span = start.span_to(&stream.position());

        finish_line(stream)?;
        Ok(field)
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        after_indentation_first(stream, is_field_ident_start)
    }
}

/// Parse `  deriving Class+`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeriveParser;

impl Parser<EntityDerive> for DeriveParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityDerive> {
        expect_indentation(stream)?;
        let start = stream.checkpoint();
        expect_keyword(stream, DERIVING_KEYWORD)?;
        let class_names = type_name_list(stream, cx)?;
        let span = start.span_to(&stream.position());
        finish_line(stream)?;
        Ok(EntityDerive { class_names, span })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        after_indentation_starts_with(stream, DERIVING_KEYWORD)
    }
}

/// Parse `  Primary field+`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimaryParser;

impl Parser<EntityPrimary> for PrimaryParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityPrimary> {
        expect_indentation(stream)?;
        let start = stream.checkpoint();
        expect_keyword(stream, PRIMARY_KEYWORD)?;
        let field_names = field_name_list(stream, cx)?;
        let span = start.span_to(&stream.position());
        finish_line(stream)?;
        Ok(EntityPrimary { field_names, span })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        after_indentation_starts_with(stream, PRIMARY_KEYWORD)
    }
}

/// Parse `  Foreign Target field+`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForeignParser;

impl Parser<EntityForeign> for ForeignParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityForeign> {
        expect_indentation(stream)?;
        let start = stream.checkpoint();
        expect_keyword(stream, FOREIGN_KEYWORD)?;
        expect_separator(stream, "target entity")?;
        let foreign_entity = clause_type_ident(stream, cx, "target entity")?;
        let field_names = field_name_list(stream, cx)?;
        let span = start.span_to(&stream.position());
        finish_line(stream)?;
        Ok(EntityForeign {
            foreign_entity,
            field_names,
            span,
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        after_indentation_starts_with(stream, FOREIGN_KEYWORD)
    }
}

/// Parse `  ConstraintName field+`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueParser;

impl Parser<EntityUnique> for UniqueParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityUnique> {
        expect_indentation(stream)?;
        let start = stream.checkpoint();
        let name = clause_type_ident(stream, cx, "constraint name")?;
        let field_names = field_name_list(stream, cx)?;
        let span = start.span_to(&stream.position());
        finish_line(stream)?;
        Ok(EntityUnique {
            name,
            field_names,
            span,
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        let prefix_ok = |ch: char| {
            is_type_ident_start(ch) || matches!(ch, '!' | '~')
        };
        after_indentation(stream)
            .and_then(|rest| rest.chars().next())
            .is_some_and(prefix_ok)
    }
}

/// Parse any entity child, trying each production in priority order.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityChildParser;

/// Try one child production; return from the enclosing function on success.
macro_rules! try_child {
    ($stream:ident, $cx:ident, $parser:ident => $variant:ident) => {
        if $parser.can_parse($stream)
            && let Some(node) =
                $cx.attempt($stream, |s, cx| $parser.parse(s, cx))?
        {
            return Ok(EntityChild::$variant(node));
        }
    };
}

impl Parser<EntityChild> for EntityChildParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        cx: &mut ParseContext,
    ) -> ParseResult<EntityChild> {
        try_child!(stream, cx, FieldParser => Field);
        try_child!(stream, cx, DeriveParser => Derive);
        try_child!(stream, cx, PrimaryParser => Primary);
        try_child!(stream, cx, ForeignParser => Foreign);
        try_child!(stream, cx, UniqueParser => Unique);
        try_child!(stream, cx, WhiteSpaceLineParser => WhiteSpace);
        try_child!(stream, cx, CommentLineParser => Comment);
        Err(ParseError::structural(stream, "entity member"))
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        FieldParser.can_parse(stream)
            || DeriveParser.can_parse(stream)
            || PrimaryParser.can_parse(stream)
            || ForeignParser.can_parse(stream)
            || UniqueParser.can_parse(stream)
            || WhiteSpaceLineParser.can_parse(stream)
            || CommentLineParser.can_parse(stream)
    }
}

//! Parse a field's type signature.
//!
//! Grammar: `['['] strictness TypeName [']'] [whitespace+ 'Maybe']`, where
//! strictness is `!` (explicit strict), `~` (lazy) or nothing (strict).
//!
//! Once a `[` or a strictness marker has been consumed the signature is
//! committed: a missing type name or a missing `]` is a fatal error rather
//! than a reason to try another production.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::parser::components::types::FieldTypeParser;
//! # use persist_rs::core::parser::context::ParseContext;
//! # use persist_rs::core::parser::traits::Parser;
//! # use persist_rs::core::parser::ast::Strictness;
//! # use persist_rs::core::scanner::StringCharacterStream;
//! let mut s = StringCharacterStream::new("[!Text] Maybe");
//! let mut cx = ParseContext::default();
//! let ty = FieldTypeParser.parse(&mut s, &mut cx).unwrap();
//! assert_eq!(ty.type_name.text, "Text");
//! assert_eq!(ty.strictness, Strictness::ExplicitStrict);
//! assert!(ty.is_list && ty.is_maybe);
//! ```

use crate::core::parser::ast::{EntityFieldType, Strictness};
use crate::core::parser::components::helpers::type_ident;
use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::parser::context::ParseContext;
use crate::core::parser::traits::Parser;
use crate::core::scanner::recognizers::{
    is_type_ident_start, scan_strictness_marker, skip_horizontal_space1,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

/// Nullability suffix.
pub const MAYBE_KEYWORD: &str = "Maybe";

/// Parse `[!Text] Maybe` and its simpler forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldTypeParser;

impl Parser<EntityFieldType> for FieldTypeParser {
    fn parse(
        &mut self,
        stream: &mut dyn CharacterStream,
        _cx: &mut ParseContext,
    ) -> ParseResult<EntityFieldType> {
        let start = stream.checkpoint();
        let is_list = stream.eat_char('[');
        let marker = scan_strictness_marker(stream);
        let committed = is_list || marker.is_some();

        let type_name = match type_ident(stream, "type name") {
            Ok(name) => name,
            Err(error) if committed => return Err(error.into_fatal()),
            Err(error) => return Err(error),
        };

        if is_list && !stream.eat_char(']') {
            return Err(ParseError::structural(stream, "`]`").into_fatal());
        }

        let before_maybe = stream.checkpoint();
        let is_maybe =
            skip_horizontal_space1(stream) && stream.eat_literal(MAYBE_KEYWORD);
        if !is_maybe {
            stream.restore(before_maybe);
        }

        Ok(EntityFieldType {
            type_name,
            strictness: Strictness::from_marker(marker),
            is_list,
            is_maybe,
            span: start.span_to(&stream.position()),
        })
    }

    fn can_parse(&self, stream: &dyn CharacterStream) -> bool {
        stream.current().is_some_and(|ch| {
            matches!(ch, '[' | '!' | '~') || is_type_ident_start(ch)
        })
    }
}

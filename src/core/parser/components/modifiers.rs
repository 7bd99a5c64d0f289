//! Order-independent, at-most-once field modifiers.
//!
//! A field's type may be followed by two groups of modifiers, flags first and
//! key/value annotations second. Inside a group the modifiers may appear in
//! any order, but each kind binds at most once. The engine keeps a shrinking
//! list of candidate kinds: after a separator it tries the remaining kinds in
//! declaration order, removes the one that matched, and repeats. When no
//! candidate matches it rewinds to before the separator and stops; that is a
//! successful end of the group, and whatever is left on the line is dropped
//! by the caller.
//!
//! A keyword that repeats on the same line therefore binds only the first
//! time. The second occurrence is no longer a candidate and ends up in the
//! discarded trailing text.
//!
//! ## Examples
//! ```
//! # use persist_rs::core::parser::components::modifiers::*;
//! # use persist_rs::core::scanner::{CharacterStream, StringCharacterStream};
//! let mut s =
//!     StringCharacterStream::new(" maxlen = 40 default=1 default=2\n");
//! let found = scan_modifiers::<KeyValueModifier>(&mut s).unwrap();
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].0, KeyValueModifier::MaxLen);
//! assert_eq!(found[0].1, ModifierValue::Integer(40));
//! assert_eq!(found[1].1, ModifierValue::Text("1".into()));
//! assert_eq!(s.remaining(), " default=2\n");
//! ```

use std::fmt;

use crate::core::parser::config::{ParseError, ParseResult};
use crate::core::scanner::recognizers::{
    scan_token, skip_horizontal_space, skip_horizontal_space1,
};
use crate::core::scanner::{CharacterStream, CharacterStreamExt};

/// One group of modifiers understood by [`scan_modifiers`].
pub trait ModifierKind: Copy + Eq + fmt::Debug + 'static {
    /// What a matched modifier carries.
    type Value;

    /// Every kind in the group, in the order they are attempted.
    const ALL: &'static [Self];

    /// The literal that introduces this modifier.
    fn keyword(self) -> &'static str;

    /// Try to read this modifier at the current position.
    ///
    /// `Ok(None)` means the modifier is not here; the engine rewinds.
    ///
    /// ## Errors
    /// Returns a fatal error when the modifier is present but its value is
    /// unusable.
    fn try_parse(
        self,
        stream: &mut dyn CharacterStream,
    ) -> ParseResult<Option<Self::Value>>;
}

/// Scan zero-or-more modifiers of one group, each preceded by horizontal
/// whitespace.
///
/// ## Errors
/// Only fatal errors from [`ModifierKind::try_parse`] are returned; a
/// position where nothing matches ends the scan successfully.
pub fn scan_modifiers<K: ModifierKind>(
    stream: &mut dyn CharacterStream,
) -> ParseResult<Vec<(K, K::Value)>> {
    let mut candidates: Vec<K> = K::ALL.to_vec();
    let mut found = Vec::new();

    loop {
        let before_separator = stream.checkpoint();
        if !skip_horizontal_space1(stream) {
            break;
        }

        let mut matched = None;
        for (index, &kind) in candidates.iter().enumerate() {
            let at = stream.checkpoint();
            match kind.try_parse(stream)? {
                Some(value) => {
                    matched = Some((index, value));
                    break;
                }
                None => stream.restore(at),
            }
        }

        let Some((index, value)) = matched else {
            stream.restore(before_separator);
            break;
        };
        let kind = candidates.remove(index);
        tracing::trace!(
            ?kind,
            at = %stream.position().to_symbol_location(),
            "modifier"
        );
        found.push((kind, value));
    }

    Ok(found)
}

/// Boolean field annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagModifier {
    MigrationOnly,
    SafeToRemove,
}

impl ModifierKind for FlagModifier {
    type Value = ();

    const ALL: &'static [Self] = &[Self::MigrationOnly, Self::SafeToRemove];

    fn keyword(self) -> &'static str {
        match self {
            Self::MigrationOnly => "MigrationOnly",
            Self::SafeToRemove => "SafeToRemove",
        }
    }

    fn try_parse(
        self,
        stream: &mut dyn CharacterStream,
    ) -> ParseResult<Option<()>> {
        Ok(stream.eat_literal(self.keyword()).then_some(()))
    }
}

/// `key=value` field annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyValueModifier {
    Default,
    Sql,
    SqlType,
    MaxLen,
}

/// Value of a key/value modifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierValue {
    Text(String),
    Integer(i64),
}

impl ModifierValue {
    /// The textual value, if this is one.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    /// The integer value, if this is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl ModifierKind for KeyValueModifier {
    type Value = ModifierValue;

    const ALL: &'static [Self] =
        &[Self::Default, Self::Sql, Self::SqlType, Self::MaxLen];

    fn keyword(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sql => "sql",
            Self::SqlType => "sqltype",
            Self::MaxLen => "maxlen",
        }
    }

    fn try_parse(
        self,
        stream: &mut dyn CharacterStream,
    ) -> ParseResult<Option<ModifierValue>> {
        if !stream.eat_literal(self.keyword()) {
            return Ok(None);
        }
        skip_horizontal_space(stream);
        if !stream.eat_char('=') {
            return Ok(None);
        }
        skip_horizontal_space(stream);

        let value_start = stream.position();
        let Some(token) = scan_token(stream) else {
            return Ok(None);
        };
        match self {
            Self::MaxLen => token
                .parse::<i64>()
                .map(|len| Some(ModifierValue::Integer(len)))
                .map_err(|_| ParseError::invalid_integer(&token, value_start)),
            Self::Default | Self::Sql | Self::SqlType => {
                Ok(Some(ModifierValue::Text(token)))
            }
        }
    }
}

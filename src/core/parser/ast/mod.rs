//! Abstract Syntax Tree (AST) for model-definition files.
//!
//! The parser produces an order-preserving, span-carrying tree. A
//! `ModelsFile` is a sequence of items (entities, blank lines and comment
//! lines) in document order; an `Entity` owns its children (fields,
//! constraints, derive clauses, blank and comment lines) in the order they
//! were written. Blank and comment lines keep their exact source text,
//! terminator included, so the item stream is lossless for them.
//!
//! Every node exposes a `SymbolSpan` and a stable node kind through the
//! `AstNode` interface. The tree is a plain value: no back-references, no
//! shared state, built in one pass and owned by the caller.
//!
//! ## Examples
//! Build a one-entity file by hand.
//! ```
//! # use persist_rs::core::parser::ast::*;
//! # use persist_rs::core::scanner::SymbolSpan;
//! let sp = |s: (u32, u32), e: (u32, u32)| SymbolSpan::new(s, e);
//! let entity = Entity {
//!     name: TypeIdent::new("Person", sp((1, 1), (1, 7))),
//!     derives_json: false,
//!     sql_table_name: None,
//!     children: vec![],
//!     span: sp((1, 1), (2, 1)),
//! };
//! let file = ModelsFile {
//!     items: vec![ModelsFileItem::Entity(entity)],
//!     span: sp((1, 1), (2, 1)),
//! };
//! assert_eq!(file.entities().count(), 1);
//! assert!(file.entity("Person").is_some());
//! ```

use crate::core::scanner::SymbolSpan;
use crate::{AstContainerNode, AstLeafNode, EnumKindName};
use std::fmt::Debug;

/// Marker trait for types that have a span field.
pub trait HasSpan {
    /// Return the source span covered by this value.
    fn span(&self) -> &SymbolSpan;
}

/// Marker trait for types that have a node type name.
pub trait HasNodeType {
    /// Return a stable node-kind name for debugging and traversal.
    fn node_type(&self) -> &'static str;
}

/// Common interface for all AST nodes.
///
/// Container nodes override `is_container` to signal that they may hold
/// children.
pub trait AstNode: Debug + HasSpan + HasNodeType {
    /// Returns true if this node can contain child nodes.
    fn is_container(&self) -> bool {
        false
    }
}

/// Trait for nodes that support visitor traversal.
///
/// Containers visit themselves, then their children in document order.
/// Leaves visit only themselves. Tagged unions delegate to the wrapped node
/// without being visited on their own.
pub trait AstVisitable: AstNode {
    /// Accepts a visitor for traversal operations.
    fn accept(&self, _visitor: &mut dyn AstVisitor) {}
}

/// Visitor trait for AST traversal operations.
pub trait AstVisitor {
    /// Called when entering any AST node.
    fn visit_node(&mut self, _node: &dyn AstNode) {}
}

/// Delegate the node traits of a tagged union to its single-field variants.
macro_rules! delegate_node_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl HasSpan for $name {
            fn span(&self) -> &SymbolSpan {
                match self {
                    $( $name::$variant(node) => node.span(), )+
                }
            }
        }

        impl HasNodeType for $name {
            fn node_type(&self) -> &'static str {
                match self {
                    $( $name::$variant(node) => node.node_type(), )+
                }
            }
        }

        impl AstNode for $name {
            fn is_container(&self) -> bool {
                match self {
                    $( $name::$variant(node) => node.is_container(), )+
                }
            }
        }

        impl AstVisitable for $name {
            fn accept(&self, visitor: &mut dyn AstVisitor) {
                match self {
                    $( $name::$variant(node) => node.accept(visitor), )+
                }
            }
        }
    };
}

/// A type-like identifier: uppercase first letter (`Person`, `Text`).
#[derive(Debug, Clone, PartialEq, Eq, AstLeafNode)]
pub struct TypeIdent {
    pub text: String,
    pub span: SymbolSpan,
}

impl TypeIdent {
    /// Create an identifier node.
    #[must_use]
    pub fn new(text: impl Into<String>, span: SymbolSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A field-like identifier: lowercase or `_` first character (`name`).
#[derive(Debug, Clone, PartialEq, Eq, AstLeafNode)]
pub struct FieldIdent {
    pub text: String,
    pub span: SymbolSpan,
}

impl FieldIdent {
    /// Create an identifier node.
    #[must_use]
    pub fn new(text: impl Into<String>, span: SymbolSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A parsed model-definition file (or embedded block).
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct ModelsFile {
    /// Top-level items in document order.
    pub items: Vec<ModelsFileItem>,
    /// The span covering everything the parse consumed.
    pub span: SymbolSpan,
}

impl ModelsFile {
    /// Iterate over the entities, skipping blank and comment lines.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter().filter_map(|item| match item {
            ModelsFileItem::Entity(entity) => Some(entity),
            _ => None,
        })
    }

    /// Find the first entity called `name`.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities().find(|entity| entity.name.text == name)
    }

    /// Concatenate the captured text of the top-level blank and comment
    /// lines, in order.
    #[must_use]
    pub fn trivia_text(&self) -> String {
        self.items
            .iter()
            .filter_map(|item| match item {
                ModelsFileItem::WhiteSpace(line) => Some(line.text.as_str()),
                ModelsFileItem::Comment(line) => Some(line.text.as_str()),
                ModelsFileItem::Entity(_) => None,
            })
            .collect()
    }

    /// Return true when the file has no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AstVisitable for ModelsFile {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        for item in &self.items {
            item.accept(visitor);
        }
    }
}

/// One top-level unit of a models file.
#[derive(Debug, Clone, PartialEq, Eq, EnumKindName)]
pub enum ModelsFileItem {
    /// An entity declaration with its children.
    Entity(Entity),
    /// A blank (whitespace-only) line.
    WhiteSpace(WhiteSpaceLine),
    /// A `--` comment line.
    Comment(CommentLine),
}

delegate_node_enum!(ModelsFileItem { Entity, WhiteSpace, Comment });

/// An entity declaration: header line plus indented children.
///
/// ## Examples
/// ```
/// # use persist_rs::parse_models_file;
/// let file = parse_models_file("Person json sql=ppl\n  name Text\n").unwrap();
/// let person = file.entity("Person").unwrap();
/// assert!(person.derives_json);
/// assert_eq!(person.sql_table_name.as_deref(), Some("ppl"));
/// assert_eq!(person.fields().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct Entity {
    /// The entity name.
    pub name: TypeIdent,
    /// Whether the header carried the `json` flag.
    pub derives_json: bool,
    /// Table name from `sql=<name>` on the header line.
    pub sql_table_name: Option<String>,
    /// Children in document order.
    pub children: Vec<EntityChild>,
    /// From the first character of the header to the end of the last child.
    pub span: SymbolSpan,
}

impl Entity {
    /// Iterate over the field declarations.
    pub fn fields(&self) -> impl Iterator<Item = &EntityField> {
        self.children.iter().filter_map(|child| match child {
            EntityChild::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Find the first field called `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&EntityField> {
        self.fields().find(|field| field.name.text == name)
    }

    /// Iterate over the unique constraints.
    pub fn uniques(&self) -> impl Iterator<Item = &EntityUnique> {
        self.children.iter().filter_map(|child| match child {
            EntityChild::Unique(unique) => Some(unique),
            _ => None,
        })
    }

    /// Iterate over the derive clauses.
    pub fn derives(&self) -> impl Iterator<Item = &EntityDerive> {
        self.children.iter().filter_map(|child| match child {
            EntityChild::Derive(derive) => Some(derive),
            _ => None,
        })
    }

    /// The first `Primary` declaration, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&EntityPrimary> {
        self.children.iter().find_map(|child| match child {
            EntityChild::Primary(primary) => Some(primary),
            _ => None,
        })
    }

    /// Iterate over the `Foreign` declarations.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &EntityForeign> {
        self.children.iter().filter_map(|child| match child {
            EntityChild::Foreign(foreign) => Some(foreign),
            _ => None,
        })
    }
}

impl AstVisitable for Entity {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        self.name.accept(visitor);
        for child in &self.children {
            child.accept(visitor);
        }
    }
}

/// One line inside an entity body.
#[derive(Debug, Clone, PartialEq, Eq, EnumKindName)]
pub enum EntityChild {
    /// `name Type [modifiers]`
    Field(EntityField),
    /// `deriving Show Eq`
    Derive(EntityDerive),
    /// `Primary field1 field2`
    Primary(EntityPrimary),
    /// `Foreign Target field1 field2`
    Foreign(EntityForeign),
    /// `UniqueName field1 field2`
    Unique(EntityUnique),
    /// A blank line inside the body.
    WhiteSpace(WhiteSpaceLine),
    /// A comment line inside the body.
    Comment(CommentLine),
}

delegate_node_enum!(EntityChild {
    Field,
    Derive,
    Primary,
    Foreign,
    Unique,
    WhiteSpace,
    Comment,
});

/// A field declaration.
///
/// Modifiers are each recorded at most once; see
/// `components::modifiers` for how repeats are treated.
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct EntityField {
    pub name: FieldIdent,
    pub r#type: EntityFieldType,
    /// `MigrationOnly` flag.
    pub migration_only: bool,
    /// `SafeToRemove` flag.
    pub safe_to_remove: bool,
    /// `default=<token>`
    pub default_value: Option<String>,
    /// `sql=<token>`
    pub sql_row: Option<String>,
    /// `sqltype=<token>`
    pub sql_type: Option<String>,
    /// `maxlen=<integer>`
    pub max_len: Option<i64>,
    pub span: SymbolSpan,
}

impl EntityField {
    /// A field with the given name and type and no modifiers.
    #[must_use]
    pub fn new(
        name: FieldIdent,
        r#type: EntityFieldType,
        span: SymbolSpan,
    ) -> Self {
        Self {
            name,
            r#type,
            migration_only: false,
            safe_to_remove: false,
            default_value: None,
            sql_row: None,
            sql_type: None,
            max_len: None,
            span,
        }
    }
}

impl AstVisitable for EntityField {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        self.name.accept(visitor);
        self.r#type.accept(visitor);
    }
}

/// Evaluation strictness of a field type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumKindName)]
pub enum Strictness {
    /// No marker.
    #[default]
    Strict,
    /// `!` marker.
    ExplicitStrict,
    /// `~` marker.
    Lazy,
}

impl Strictness {
    /// Map an optional strictness marker to its strictness.
    #[must_use]
    pub fn from_marker(marker: Option<char>) -> Self {
        match marker {
            Some('!') => Strictness::ExplicitStrict,
            Some('~') => Strictness::Lazy,
            _ => Strictness::Strict,
        }
    }
}

/// A field's type signature: `[!Text] Maybe`.
#[derive(Debug, Clone, PartialEq, Eq, AstLeafNode)]
pub struct EntityFieldType {
    pub type_name: TypeIdent,
    pub strictness: Strictness,
    /// Written inside `[` `]`.
    pub is_list: bool,
    /// Followed by `Maybe`.
    pub is_maybe: bool,
    pub span: SymbolSpan,
}

/// A named uniqueness constraint over one or more fields.
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct EntityUnique {
    pub name: TypeIdent,
    /// Never empty.
    pub field_names: Vec<FieldIdent>,
    pub span: SymbolSpan,
}

impl AstVisitable for EntityUnique {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        self.name.accept(visitor);
        for field in &self.field_names {
            field.accept(visitor);
        }
    }
}

/// A `deriving` clause listing class names.
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct EntityDerive {
    /// Never empty.
    pub class_names: Vec<TypeIdent>,
    pub span: SymbolSpan,
}

impl AstVisitable for EntityDerive {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        for class in &self.class_names {
            class.accept(visitor);
        }
    }
}

/// A `Primary` key declaration.
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct EntityPrimary {
    /// Never empty.
    pub field_names: Vec<FieldIdent>,
    pub span: SymbolSpan,
}

impl AstVisitable for EntityPrimary {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        for field in &self.field_names {
            field.accept(visitor);
        }
    }
}

/// A `Foreign` key declaration referencing another entity.
#[derive(Debug, Clone, PartialEq, Eq, AstContainerNode)]
pub struct EntityForeign {
    pub foreign_entity: TypeIdent,
    /// Never empty.
    pub field_names: Vec<FieldIdent>,
    pub span: SymbolSpan,
}

impl AstVisitable for EntityForeign {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_node(self);
        self.foreign_entity.accept(visitor);
        for field in &self.field_names {
            field.accept(visitor);
        }
    }
}

/// A whitespace-only line, stored verbatim with its terminator.
#[derive(Debug, Clone, PartialEq, Eq, AstLeafNode)]
pub struct WhiteSpaceLine {
    pub text: String,
    pub span: SymbolSpan,
}

/// A `--` comment line, stored verbatim with its terminator.
#[derive(Debug, Clone, PartialEq, Eq, AstLeafNode)]
pub struct CommentLine {
    pub text: String,
    pub span: SymbolSpan,
}

impl CommentLine {
    /// The comment body: text after `--`, without indentation or the
    /// terminator.
    #[must_use]
    pub fn body(&self) -> &str {
        let text = self
            .text
            .trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
        let text = text.strip_prefix("--").unwrap_or(text);
        text.strip_suffix('\n').unwrap_or(text)
    }
}

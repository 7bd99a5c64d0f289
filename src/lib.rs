#![deny(clippy::expect_used)] // using deny so that test code can use it
#![deny(clippy::style)]
#![deny(clippy::unwrap_used)] // using deny so that test code can use it
#![deny(unsafe_code)]
#![forbid(clippy::allow_attributes)]
#![forbid(clippy::complexity)]
#![forbid(clippy::correctness)]
#![forbid(clippy::pedantic)]
#![forbid(clippy::perf)]
#![forbid(clippy::suspicious)]
#![forbid(future_incompatible)]

pub mod core;

// Re-export proc macros for AST derivation
pub use compiler_macros::{AstContainerNode, AstLeafNode, EnumKindName};

// Re-export the entry points and the types they return
pub use crate::core::parser::ast::{
    Entity, EntityChild, EntityField, ModelsFile,
};
pub use crate::core::parser::{
    ModelsParser, ParseError, ParseErrorKind, ParserOptions,
    parse_embedded_models_block, parse_embedded_models_block_with,
    parse_models_file, parse_models_file_with,
};

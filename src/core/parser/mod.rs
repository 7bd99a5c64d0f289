//! Parser module for turning entity-model text into an Abstract Syntax Tree.
//!
//! This module contains the complete parser implementation including AST
//! definitions, the component parsers for each production, configuration,
//! and the two entry points.

pub mod ast;
pub mod components;
pub mod config;
pub mod context;
pub mod grammar;
pub mod models_parser;
pub mod traits;

// Re-export main types for convenience
pub use config::{
    BlockMarkers, ParseError, ParseErrorKind, ParseResult, ParserOptions,
};
pub use context::ParseContext;
pub use models_parser::{
    ModelsParser, parse_embedded_models_block,
    parse_embedded_models_block_with, parse_models_file,
    parse_models_file_with,
};
pub use traits::Parser;

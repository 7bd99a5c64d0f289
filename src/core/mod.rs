//! Scanner and parser for persistent entity model definitions.

pub mod parser;
pub mod scanner;

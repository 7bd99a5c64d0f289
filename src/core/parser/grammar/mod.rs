// This module exists to give the entity-model grammar a place in the
// generated documentation.

// v1.md holds the EBNF grammar the component parsers implement.

#![doc = include_str!("./v1.md")]

//! Models Parser Integration Test Utilities
//!
//! Shared helpers for end-to-end validation of both entry points: fixture
//! loading, AST shape assertions, node-kind collection through the visitor,
//! and concurrent determinism checks.

use persist_rs::core::parser::ast::{
    AstNode, AstVisitable, AstVisitor, Entity, HasNodeType, ModelsFile,
};
use persist_rs::{ParseError, ParserOptions, parse_models_file_with};
use std::fs;

/// Load a fixture from `tests/fixtures/models`.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/models/{name}"))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {name}"))
}

/// Parse with default options and fail the test with the error text.
pub fn parse_ok(input: &str) -> ModelsFile {
    parse_ok_with(input, &ParserOptions::default())
}

/// Parse with the given options and fail the test with the error text.
pub fn parse_ok_with(input: &str, options: &ParserOptions) -> ModelsFile {
    parse_models_file_with(input, options)
        .unwrap_or_else(|err| panic!("expected {input:?} to parse: {err}"))
}

/// Parse with default options and return the error.
pub fn parse_err(input: &str) -> ParseError {
    match persist_rs::parse_models_file(input) {
        Ok(file) => panic!("expected {input:?} to fail, got {file:#?}"),
        Err(err) => err,
    }
}

/// Look up an entity by name or fail the test.
pub fn entity<'a>(file: &'a ModelsFile, name: &str) -> &'a Entity {
    file.entity(name)
        .unwrap_or_else(|| panic!("entity {name} not found"))
}

/// Check the number of fields and the child kinds of an entity.
pub fn assert_entity_shape(
    entity: &Entity,
    fields: usize,
    child_kinds: &[&str],
) {
    assert_eq!(
        entity.fields().count(),
        fields,
        "Field count mismatch for {}",
        entity.name.text
    );
    let kinds: Vec<_> = entity.children.iter().map(|c| c.name()).collect();
    assert_eq!(
        kinds, child_kinds,
        "Child kinds mismatch for {}",
        entity.name.text
    );
}

/// Collects node kinds in visiting order.
#[derive(Default)]
pub struct KindCollector {
    pub kinds: Vec<&'static str>,
}

impl AstVisitor for KindCollector {
    fn visit_node(&mut self, node: &dyn AstNode) {
        self.kinds.push(node.node_type());
    }
}

/// Node kinds of the whole tree in document order.
pub fn node_kinds(file: &ModelsFile) -> Vec<&'static str> {
    let mut collector = KindCollector::default();
    file.accept(&mut collector);
    collector.kinds
}

/// Parse concurrently and compare every result with a sequential parse.
pub fn assert_concurrent_deterministic(input: &str, thread_count: usize) {
    use std::thread;

    let sequential = persist_rs::parse_models_file(input);

    let handles: Vec<_> = (0..thread_count)
        .map(|_| {
            let input_clone = input.to_string();
            thread::spawn(move || persist_rs::parse_models_file(&input_clone))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(
            result, sequential,
            "Thread {i} result should match sequential"
        );
    }
}

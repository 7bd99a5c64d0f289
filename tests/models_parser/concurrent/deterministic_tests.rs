//! Concurrent Parsing Determinism Tests
//!
//! The entry points keep no state between calls, so parsing the same input
//! from many threads must give identical results.

use crate::models_parser::{assert_concurrent_deterministic, load_fixture};

#[test]
#[ignore = "concurrent test - run with: cargo test -- --include-ignored"]
fn concurrent_empty_input() {
    assert_concurrent_deterministic("", 4);
}

#[test]
#[ignore = "concurrent test - run with: cargo test -- --include-ignored"]
fn concurrent_fixture() {
    let input = load_fixture("blog.persistentmodels");
    assert_concurrent_deterministic(&input, 8);
}

#[test]
#[ignore = "concurrent test - run with: cargo test -- --include-ignored"]
fn concurrent_error_input() {
    assert_concurrent_deterministic("Person\n  name Text maxlen=abc\n", 6);
}

#[test]
fn shared_parser_across_threads() {
    use persist_rs::ModelsParser;
    use std::sync::Arc;
    use std::thread;

    let parser = Arc::new(ModelsParser::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                parser
                    .parse_file(&format!("Entity{i}\n  name Text\n"))
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let file = handle.join().unwrap();
        assert!(file.entity(&format!("Entity{i}")).is_some());
    }
}

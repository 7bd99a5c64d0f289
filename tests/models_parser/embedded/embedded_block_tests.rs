//! Embedded Block Tests
//!
//! Parsing a models block out of surrounding host text.

use persist_rs::core::parser::config::BlockMarkers;
use persist_rs::{
    ParseErrorKind, ParserOptions, parse_embedded_models_block,
    parse_embedded_models_block_with,
};

#[test]
fn skips_text_around_the_block() {
    let file = parse_embedded_models_block(
        "foo bar [persistLowerCase|\nPerson\n  name Text\n|] baz",
    )
    .unwrap();
    let entities: Vec<_> = file.entities().collect();
    assert_eq!(entities.len(), 1);
    let person = entities[0];
    assert_eq!(person.name.text, "Person");
    assert_eq!(person.fields().count(), 1);
    let name = person.field("name").unwrap();
    assert_eq!(name.r#type.type_name.text, "Text");
    assert!(!name.r#type.is_list);
    assert!(!name.r#type.is_maybe);
}

#[test]
fn first_block_wins() {
    let file = parse_embedded_models_block(
        "[persistUpperCase|\nFirst\n|]\n[persistLowerCase|\nSecond\n|]",
    )
    .unwrap();
    assert!(file.entity("First").is_some());
    assert!(file.entity("Second").is_none());
}

#[test]
fn empty_block() {
    let file = parse_embedded_models_block("x [persistLowerCase||] y").unwrap();
    assert!(file.is_empty());
}

#[test]
fn missing_open_marker() {
    let err = parse_embedded_models_block("Person\n  name Text\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MarkerNotFound);
}

#[test]
fn missing_close_marker() {
    let err =
        parse_embedded_models_block("[persistLowerCase|\nPerson\n  name Text\n")
            .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MarkerNotFound);
    assert_eq!(err.location.line, 4);
}

#[test]
fn unparseable_text_inside_the_block() {
    let err = parse_embedded_models_block(
        "[persistLowerCase|\nPerson\n  name Text\n  what?\n|]",
    )
    .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!(err.location.line, 4);
}

#[test]
fn fatal_error_inside_the_block() {
    let err = parse_embedded_models_block(
        "[persistLowerCase|\nPerson\n  name Text maxlen=big\n|]",
    )
    .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::IntegerLiteralInvalid);
}

#[test]
fn custom_markers() {
    let options = ParserOptions::default()
        .with_markers(BlockMarkers::new(["{{models"], "}}"));
    let file = parse_embedded_models_block_with(
        "let m = {{models\nPerson\n  name Text\n}};",
        &options,
    )
    .unwrap();
    assert_eq!(file.entities().count(), 1);

    let err = parse_embedded_models_block_with(
        "[persistLowerCase|\nPerson\n|]",
        &options,
    )
    .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MarkerNotFound);
}

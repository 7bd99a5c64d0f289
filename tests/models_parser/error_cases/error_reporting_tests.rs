//! Error Reporting Tests
//!
//! Checks the kind, location and wording of parse failures.

use crate::models_parser::parse_err;

use persist_rs::ParseErrorKind;

#[test]
fn invalid_maxlen_fails_the_whole_parse() {
    let err = parse_err("Person\n  name Text maxlen=abc\n");
    assert_eq!(err.kind, ParseErrorKind::IntegerLiteralInvalid);
    assert_eq!(err.location.line, 2);
    assert_eq!(err.found, "`abc`");
}

#[test]
fn invalid_maxlen_in_a_later_entity() {
    let err = parse_err("Person\n  name Text\n\nDog\n  name Text maxlen=1x\n");
    assert_eq!(err.kind, ParseErrorKind::IntegerLiteralInvalid);
    assert_eq!(err.location.line, 5);
}

#[test]
fn primary_without_fields() {
    let err = parse_err("Person\n  Primary\n");
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!(err.location.line, 2);
}

#[test]
fn foreign_without_fields() {
    let err = parse_err("Person\n  Foreign Org\n");
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!((err.location.line, err.location.column), (2, 14));
    assert!(err.expected.contains("field name"));
}

#[test]
fn deriving_without_classes() {
    let err = parse_err("Person\n  deriving\n");
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!(err.location.line, 2);
}

#[test]
fn missing_close_bracket() {
    let err = parse_err("Person\n  tags [Text\n");
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!(err.expected, "`]`");
    assert_eq!((err.location.line, err.location.column), (2, 13));
}

#[test]
fn missing_type_after_strictness_marker() {
    let err = parse_err("Person\n  name !\n");
    assert_eq!(err.expected, "type name");
    assert_eq!((err.location.line, err.location.column), (2, 9));
}

#[test]
fn lowercase_type_points_at_the_type() {
    let err = parse_err("Person\n  name text\n");
    assert_eq!(err.expected, "type name");
    assert_eq!((err.location.line, err.location.column), (2, 8));
    assert_eq!(err.found, "`text`");
}

#[test]
fn field_without_entity() {
    let err = parse_err("  name Text\n");
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
    assert_eq!(err.location.line, 1);
}

#[test]
fn unterminated_comment_at_end_of_input() {
    let err = parse_err("-- no newline");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedLine);
}

#[test]
fn error_display_names_position_and_expectation() {
    let err = parse_err("Person\n  name text\n");
    assert_eq!(
        err.to_string(),
        "2:8: syntax error: expected type name, found `text`"
    );
}

//! Parser Configuration and Options Tests
//!
//! Effects of each `ParserOptions` knob on accepted input.

use crate::models_parser::{entity, parse_ok, parse_ok_with};

use persist_rs::{ParseErrorKind, ParserOptions, parse_models_file_with};

#[test]
fn default_options_reject_prefixed_clause_names() {
    let input = "Person\n  deriving !Show\n";
    let err =
        parse_models_file_with(input, &ParserOptions::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::StructuralMismatch);
}

#[test]
fn prefixed_clause_names_when_enabled() {
    let options = ParserOptions::default().with_name_strictness_prefix(true);
    let input = "\
Person
  deriving !Show ~Eq
  Primary !name
  Foreign ~Org fk_org !org
  ~UniqueName name
";
    let file = parse_ok_with(input, &options);
    let person = entity(&file, "Person");
    let classes: Vec<_> = person
        .derives()
        .flat_map(|d| d.class_names.iter().map(|c| c.text.as_str()))
        .collect();
    assert_eq!(classes, ["Show", "Eq"]);
    assert_eq!(person.primary().unwrap().field_names[0].text, "name");
    let foreign = person.foreign_keys().next().unwrap();
    assert_eq!(foreign.foreign_entity.text, "Org");
    assert_eq!(foreign.field_names[1].text, "org");
    assert_eq!(person.uniques().next().unwrap().name.text, "UniqueName");
}

#[test]
fn field_types_keep_their_marker_regardless_of_options() {
    let options = ParserOptions::default().with_name_strictness_prefix(true);
    let file = parse_ok_with("Person\n  name !Text\n", &options);
    let name = entity(&file, "Person").field("name").unwrap();
    assert_eq!(name.r#type.strictness.name(), "ExplicitStrict");
}

#[test]
fn trailing_space_at_end_of_input() {
    let input = "Person\n  name Text\n  ";
    let file = parse_ok(input);
    assert_eq!(file.entities().count(), 1);

    let strict = ParserOptions::default().with_trailing_space_at_eof(false);
    let err = parse_models_file_with(input, &strict).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedLine);
    assert_eq!(err.location.line, 3);
}

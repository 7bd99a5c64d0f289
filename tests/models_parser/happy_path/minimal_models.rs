//! Minimal Models Integration Tests
//!
//! Small but complete inputs covering each construct of the grammar.

use crate::models_parser::{assert_entity_shape, entity, node_kinds, parse_ok};

use persist_rs::core::parser::ast::{ModelsFileItem, Strictness};

#[test]
fn empty_input() {
    let file = parse_ok("");
    assert!(file.items.is_empty(), "Empty input should have no items");
}

#[test]
fn blank_and_comment_lines_only() {
    let input = "\n-- header\n   \n--\n";
    let file = parse_ok(input);
    assert_eq!(file.items.len(), 4);
    assert_eq!(file.entities().count(), 0);
    assert_eq!(file.trivia_text(), input);
}

#[test]
fn header_with_json_and_table() {
    let file = parse_ok("Person json sql=ppl\n");
    let person = entity(&file, "Person");
    assert!(person.derives_json);
    assert_eq!(person.sql_table_name.as_deref(), Some("ppl"));
    assert!(person.children.is_empty());
}

#[test]
fn header_without_terminator() {
    let file = parse_ok("Person");
    assert!(entity(&file, "Person").children.is_empty());
}

#[test]
fn single_field() {
    let file = parse_ok("Person\n  name Text\n");
    let person = entity(&file, "Person");
    assert_entity_shape(person, 1, &["Field"]);
    let name = person.field("name").unwrap();
    assert_eq!(name.r#type.type_name.text, "Text");
    assert_eq!(name.r#type.strictness, Strictness::Strict);
    assert!(!name.r#type.is_list);
    assert!(!name.r#type.is_maybe);
}

#[test]
fn all_child_kinds() {
    let input = "\
Person
  name Text
  deriving Show Read
  Primary name
  Foreign Org fk_org org
  UniqueName name

  -- end
";
    let file = parse_ok(input);
    let person = entity(&file, "Person");
    assert_entity_shape(
        person,
        1,
        &[
            "Field",
            "Derive",
            "Primary",
            "Foreign",
            "Unique",
            "WhiteSpace",
            "Comment",
        ],
    );
    assert_eq!(person.primary().unwrap().field_names[0].text, "name");
    let foreign = person.foreign_keys().next().unwrap();
    assert_eq!(foreign.foreign_entity.text, "Org");
    assert_eq!(person.derives().next().unwrap().class_names.len(), 2);
    assert_eq!(person.uniques().next().unwrap().name.text, "UniqueName");
}

#[test]
fn repeated_modifier_keeps_first() {
    let file = parse_ok("Person\n  name Text default=1 default=2\n");
    let name = entity(&file, "Person").field("name").unwrap();
    assert_eq!(name.default_value.as_deref(), Some("1"));
}

#[test]
fn consecutive_entities() {
    let file = parse_ok("Person\n  name Text\nDog\n  bark Bool\n");
    let names: Vec<_> = file.entities().map(|e| e.name.text.as_str()).collect();
    assert_eq!(names, ["Person", "Dog"]);
    assert_eq!(entity(&file, "Dog").span.start.line, 3);
}

#[test]
fn blank_lines_between_entities_belong_to_the_first() {
    let file = parse_ok("Person\n\nDog\n");
    assert_entity_shape(entity(&file, "Person"), 0, &["WhiteSpace"]);
    assert!(matches!(file.items[1], ModelsFileItem::Entity(_)));
}

#[test]
fn visitor_walks_in_document_order() {
    let file = parse_ok("-- c\nPerson\n  tags [Text]\n");
    assert_eq!(
        node_kinds(&file),
        [
            "ModelsFile",
            "CommentLine",
            "Entity",
            "TypeIdent",
            "EntityField",
            "FieldIdent",
            "EntityFieldType",
        ]
    );
}

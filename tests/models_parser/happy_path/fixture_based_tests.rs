//! Fixture-Based Integration Tests
//!
//! Parses realistic model files from `tests/fixtures/models`.

use crate::models_parser::{assert_entity_shape, entity, load_fixture, parse_ok};

use persist_rs::core::parser::ast::Strictness;
use persist_rs::parse_embedded_models_block;

#[test]
fn blog_models_top_level_items() {
    let file = parse_ok(&load_fixture("blog.persistentmodels"));
    let kinds: Vec<_> = file.items.iter().map(|i| i.name()).collect();
    assert_eq!(kinds, ["Comment", "WhiteSpace", "Entity", "Entity", "Entity"]);
    let names: Vec<_> = file.entities().map(|e| e.name.text.as_str()).collect();
    assert_eq!(names, ["User", "Post", "Comment"]);
}

#[test]
fn blog_user_entity() {
    let file = parse_ok(&load_fixture("blog.persistentmodels"));
    let user = entity(&file, "User");
    assert!(user.derives_json);
    assert_eq!(user.sql_table_name.as_deref(), Some("users"));
    assert_entity_shape(
        user,
        3,
        &["Field", "Field", "Field", "Unique", "Derive", "WhiteSpace"],
    );

    let ident = user.field("ident").unwrap();
    assert_eq!(ident.sql_type.as_deref(), Some("varchar"));
    assert_eq!(ident.max_len, Some(64));
    assert!(user.field("password").unwrap().r#type.is_maybe);
    assert_eq!(
        user.field("displayName").unwrap().default_value.as_deref(),
        Some("anonymous")
    );
}

#[test]
fn blog_post_entity() {
    let file = parse_ok(&load_fixture("blog.persistentmodels"));
    let post = entity(&file, "Post");
    assert!(!post.derives_json);
    assert_eq!(post.sql_table_name, None);
    assert_eq!(post.fields().count(), 6);

    assert!(post.field("tags").unwrap().r#type.is_list);
    let legacy = post.field("legacyId").unwrap();
    assert!(legacy.migration_only);
    assert!(legacy.safe_to_remove);
    assert_eq!(legacy.sql_row.as_deref(), Some("legacy_id"));

    let unique = post.uniques().next().unwrap();
    assert_eq!(unique.name.text, "UniqueTitle");
    assert_eq!(unique.field_names.len(), 2);
}

#[test]
fn blog_comment_entity() {
    let file = parse_ok(&load_fixture("blog.persistentmodels"));
    let comment = entity(&file, "Comment");
    assert_eq!(comment.sql_table_name.as_deref(), Some("comments"));
    assert_eq!(
        comment.field("body").unwrap().r#type.strictness,
        Strictness::Lazy
    );
    let foreign = comment.foreign_keys().next().unwrap();
    assert_eq!(foreign.foreign_entity.text, "Post");
    let primary = comment.primary().unwrap();
    let keys: Vec<_> =
        primary.field_names.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(keys, ["post", "author"]);
}

#[test]
fn host_module_embedded_block() {
    let host = load_fixture("host_module.txt");
    let file = parse_embedded_models_block(&host).unwrap();
    let names: Vec<_> = file.entities().map(|e| e.name.text.as_str()).collect();
    assert_eq!(names, ["Person", "BlogPost"]);
    assert_entity_shape(
        entity(&file, "Person"),
        2,
        &["Field", "Field", "Derive", "WhiteSpace"],
    );
    assert_eq!(file.span.start.line, 5);
}

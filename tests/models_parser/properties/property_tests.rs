//! Property-Based Tests
//!
//! Losslessness of blank and comment lines, determinism, modifier order
//! independence, and robustness on arbitrary input.

use persist_rs::{parse_embedded_models_block, parse_models_file};
use proptest::prelude::*;

fn arb_blank_line() -> impl Strategy<Value = String> {
    "[ \t]{0,4}".prop_map(|indent| format!("{indent}\n"))
}

fn arb_comment_line() -> impl Strategy<Value = String> {
    ("[ \t]{0,2}", "[a-zA-Z0-9 _.,-]{0,20}")
        .prop_map(|(indent, body)| format!("{indent}--{body}\n"))
}

fn arb_trivia() -> impl Strategy<Value = String> {
    let line = prop_oneof![arb_blank_line(), arb_comment_line()];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.concat())
}

fn arb_modifier_line() -> impl Strategy<Value = (Vec<String>, String, u16)> {
    ("[a-z0-9_]{1,8}", any::<u16>()).prop_flat_map(|(default, len)| {
        let modifiers = vec![
            format!("default={default}"),
            format!("maxlen = {len}"),
            "sqltype=text".to_string(),
            "sql=col".to_string(),
        ];
        (Just(modifiers).prop_shuffle(), Just(default), Just(len))
    })
}

proptest! {
    #[test]
    fn trivia_is_lossless(input in arb_trivia()) {
        let file = parse_models_file(&input).unwrap();
        prop_assert_eq!(file.entities().count(), 0);
        prop_assert_eq!(file.trivia_text(), input);
    }

    #[test]
    fn parsing_is_deterministic(input in "[A-Za-z_ \n\\[\\]!~=0-9-]{0,60}") {
        prop_assert_eq!(parse_models_file(&input), parse_models_file(&input));
        prop_assert_eq!(
            parse_embedded_models_block(&input),
            parse_embedded_models_block(&input)
        );
    }

    #[test]
    fn key_value_modifiers_in_any_order(
        (modifiers, default, len) in arb_modifier_line()
    ) {
        let input = format!("Person\n  field Text {}\n", modifiers.join(" "));
        let file = parse_models_file(&input).unwrap();
        let field = file.entity("Person").unwrap().field("field").unwrap();
        prop_assert_eq!(field.default_value.as_deref(), Some(default.as_str()));
        prop_assert_eq!(field.max_len, Some(i64::from(len)));
        prop_assert_eq!(field.sql_type.as_deref(), Some("text"));
        prop_assert_eq!(field.sql_row.as_deref(), Some("col"));
    }

    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        let _ = parse_models_file(&input);
        let _ = parse_embedded_models_block(&input);
    }
}

//! Property-based tests for line classification and assignment location.

use super::{classify, locate, LineKind, Syntax, EXTENDED_OPERATORS};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._/-]{0,20}"
}

fn operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(EXTENDED_OPERATORS)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A well-formed line splits back into exactly its parts
    #[test]
    fn locate_recovers_parts(
        indent in "[ \t]{0,4}",
        key in key_strategy(),
        operator in operator_strategy(),
        value in value_strategy(),
    ) {
        let line = Syntax::format_line(&indent, &key, operator, &value);
        let found = locate(&line, Syntax::extended().operators()).unwrap();
        prop_assert_eq!(found.indent, indent.as_str());
        prop_assert_eq!(found.key, key.as_str());
        prop_assert_eq!(found.operator.trim(), operator.trim());
        prop_assert_eq!(found.value, value.as_str());
    }

    // Anything after a single-line comment marker is opaque
    #[test]
    fn commented_assignments_are_comments(
        marker in prop::sample::select(vec!["#", "//", "--"]),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let line = format!("{marker} {key} = {value}");
        prop_assert_eq!(classify(&line, &Syntax::extended(), false), (LineKind::Comment, false));
    }

    // Inside a block, only the close token matters
    #[test]
    fn block_interior_is_opaque(text in "[a-z =:]{0,30}") {
        let (kind, in_block) = classify(&text, &Syntax::extended(), true);
        prop_assert_eq!(kind, LineKind::Comment);
        prop_assert!(in_block);
    }

    // The simple syntax never sees an operator other than '='
    #[test]
    fn simple_syntax_only_splits_on_equals(line in "[a-z:> ]{1,30}") {
        prop_assert!(locate(&line, Syntax::simple().operators()).is_none());
    }
}

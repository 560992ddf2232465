//! Property-based tests for document parsing and updates.

use super::{ConfigDocument, UpdateResult};
use crate::syntax::Syntax;
use proptest::prelude::*;

fn comment_or_blank_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "# [a-z =:]{0,20}",
        "  // [a-z =:]{0,20}",
        "-- [a-z =]{0,20}",
        "/\\* [a-z =]{0,20} \\*/",
    ]
}

fn assignment_line() -> impl Strategy<Value = String> {
    ("[ ]{0,2}", "[a-z][a-z0-9-]{0,8}", "[a-z0-9][a-z0-9.]{0,8}(:[a-z0-9]{1,4})?")
        .prop_map(|(indent, key, value)| format!("{indent}{key} = {value}"))
}

fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![comment_or_blank_line(), assignment_line()]
}

fn join(lines: &[String], terminator: &str) -> String {
    lines.iter().map(|l| format!("{l}{terminator}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // A file of comments and blank lines survives a parse/render cycle
    #[test]
    fn comment_only_file_round_trips(lines in prop::collection::vec(comment_or_blank_line(), 0..20)) {
        let content = join(&lines, "\n");
        let doc = ConfigDocument::parse(&content, Syntax::extended());
        prop_assert_eq!(doc.render(), content);
        prop_assert!(doc.entries().0.is_empty());
    }

    // Rendering only normalizes terminators
    #[test]
    fn render_normalizes_terminators(lines in prop::collection::vec(any_line(), 1..20)) {
        let crlf = join(&lines, "\r\n");
        let doc = ConfigDocument::parse(&crlf, Syntax::extended());
        prop_assert_eq!(doc.render(), join(&lines, "\n"));
    }

    // Setting the same pair twice changes nothing the second time
    #[test]
    fn upsert_is_idempotent(
        lines in prop::collection::vec(any_line(), 0..20),
        key in "[a-z][a-z0-9-]{0,8}",
        value in "[a-z0-9][a-z0-9.]{0,8}(:[a-z0-9]{1,4})?",
    ) {
        let mut doc = ConfigDocument::parse(&join(&lines, "\n"), Syntax::extended());
        doc.upsert(&key, &value);
        let first = doc.render();

        let mut again = ConfigDocument::parse(&first, Syntax::extended());
        prop_assert_eq!(again.upsert(&key, &value), UpdateResult::Updated);
        prop_assert_eq!(again.render(), first);
    }

    // An update touches at most one line and keeps the line count
    #[test]
    fn upsert_changes_one_line(
        lines in prop::collection::vec(any_line(), 0..20),
        key in "[a-z][a-z0-9-]{0,8}",
        value in "[a-z0-9][a-z0-9.]{0,8}(:[a-z0-9]{1,4})?",
    ) {
        let before = join(&lines, "\n");
        let mut doc = ConfigDocument::parse(&before, Syntax::extended());
        let result = doc.upsert(&key, &value);
        let after = doc.render();

        let old: Vec<&str> = before.lines().collect();
        let new: Vec<&str> = after.lines().collect();
        match result {
            UpdateResult::Updated => {
                prop_assert_eq!(old.len(), new.len());
                let changed = old.iter().zip(&new).filter(|(a, b)| a != b).count();
                prop_assert!(changed <= 1);
            }
            UpdateResult::Created => {
                prop_assert_eq!(&new[..old.len()], &old[..]);
                prop_assert_eq!(new.len(), old.len() + 1);
            }
        }
    }

    // A value set through the document is what the document reads back
    #[test]
    fn upsert_then_read(
        lines in prop::collection::vec(comment_or_blank_line(), 0..10),
        key in "[a-z][a-z0-9-]{0,8}",
        value in "[a-z0-9][a-z0-9.]{0,8}(:[a-z0-9]{1,4})?",
    ) {
        let mut doc = ConfigDocument::parse(&join(&lines, "\n"), Syntax::extended());
        doc.upsert(&key, &value);
        let (map, _) = doc.entries();
        prop_assert_eq!(map.get(&key), Some(&value));
    }
}

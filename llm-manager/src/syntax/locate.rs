//! Assignment location: splitting a line into key, operator and value.

/// A `<key><operator><value>` split of one line, borrowing from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Leading whitespace of the line.
    pub indent: &'a str,
    /// Text before the operator, trimmed. May be empty.
    pub key: &'a str,
    /// The operator token as it appears in the line.
    pub operator: &'a str,
    /// Text after the operator, trimmed (terminator included). May be empty.
    pub value: &'a str,
}

impl Assignment<'_> {
    /// Whether both key and value are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// Find the first operator of `operators` occurring in `line` and split there.
///
/// The table is scanned in order and the first token found anywhere in the
/// line wins, even when a later token would match further left. The line is
/// split at that token's first occurrence.
///
/// Returns `None` when no operator occurs in the line.
///
/// # Examples
///
/// ```
/// use llm_manager::syntax::locate;
///
/// let found = locate("  text-generation = gemma2:2b\n", &["=", ":"]).unwrap();
/// assert_eq!(found.indent, "  ");
/// assert_eq!(found.key, "text-generation");
/// assert_eq!(found.operator, "=");
/// assert_eq!(found.value, "gemma2:2b");
///
/// assert!(locate("no operator here", &["="]).is_none());
/// ```
#[must_use]
pub fn locate<'a, S: AsRef<str>>(line: &'a str, operators: &[S]) -> Option<Assignment<'a>> {
    operators
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|op| !op.is_empty())
        .find_map(|op| line.find(op).map(|at| (at, op.len())))
        .map(|(at, len)| {
            let indent_len = line.len() - line.trim_start().len();
            Assignment {
                indent: &line[..indent_len.min(at)],
                key: line[..at].trim(),
                operator: &line[at..at + len],
                value: line[at + len..].trim(),
            }
        })
}

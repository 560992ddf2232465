//! Line classification.

use std::fmt;

use crate::syntax::{locate, Syntax};

/// What a single configuration line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// A single-line comment, or a line inside a block comment.
    Comment,
    /// Opens a block comment that continues on later lines.
    CommentBlockStart,
    /// Closes the current block comment.
    CommentBlockEnd,
    /// `<key><operator><value>` with a recognized operator.
    Assignment,
    /// Anything else. Passed through on write, skipped on read.
    Malformed,
}

impl LineKind {
    /// Whether the line belongs to a comment of any form.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::CommentBlockStart | Self::CommentBlockEnd
        )
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::CommentBlockStart => "comment-block-start",
            Self::CommentBlockEnd => "comment-block-end",
            Self::Assignment => "assignment",
            Self::Malformed => "malformed",
        };
        f.write_str(name)
    }
}

/// Classify one line given whether the previous line left a block comment open.
///
/// Returns the line's kind and whether a block comment is open after it. A
/// line that opens and closes a block comment on the same line is a plain
/// [`LineKind::Comment`] and leaves no block open.
///
/// # Examples
///
/// ```
/// use llm_manager::syntax::{classify, LineKind, Syntax};
///
/// let syntax = Syntax::extended();
/// assert_eq!(classify("/* models", &syntax, false), (LineKind::CommentBlockStart, true));
/// assert_eq!(classify("vision = llava", &syntax, true), (LineKind::Comment, true));
/// assert_eq!(classify("*/", &syntax, true), (LineKind::CommentBlockEnd, false));
/// assert_eq!(classify("vision = llava", &syntax, false), (LineKind::Assignment, false));
/// ```
#[must_use]
pub fn classify(line: &str, syntax: &Syntax, in_block: bool) -> (LineKind, bool) {
    if in_block {
        let closes = syntax
            .block_comment()
            .is_some_and(|(_, close)| line.contains(close));
        return if closes {
            (LineKind::CommentBlockEnd, false)
        } else {
            (LineKind::Comment, true)
        };
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (LineKind::Blank, false);
    }

    if let Some((open, close)) = syntax.block_comment() {
        if let Some(rest) = trimmed.strip_prefix(open) {
            return if rest.contains(close) {
                (LineKind::Comment, false)
            } else {
                (LineKind::CommentBlockStart, true)
            };
        }
    }

    if syntax.is_comment(trimmed) {
        return (LineKind::Comment, false);
    }

    if locate(line, syntax.operators()).is_some() {
        (LineKind::Assignment, false)
    } else {
        (LineKind::Malformed, false)
    }
}

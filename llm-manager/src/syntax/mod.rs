//! Configuration file syntax: operators, comment markers, and line parsing.
//!
//! A [`Syntax`] bundles every token the parser recognizes:
//!
//! - a precedence-ordered operator table,
//! - single-line comment markers,
//! - an optional block comment (`/*` ... `*/`),
//! - the canonical operator used when a brand-new line is synthesized.
//!
//! The classifier ([`classify`]) and the locator ([`locate`]) take a syntax by
//! reference, so one parser covers every dialect the tool has shipped with.
//!
//! # Operator precedence
//!
//! Operators are tried in table order and the first one found anywhere in the
//! line wins. A token must therefore be declared before any token that is its
//! strict prefix (`==` before `=`), otherwise the shorter token shadows it:
//!
//! ```
//! use llm_manager::syntax::{locate, Syntax};
//!
//! let extended = Syntax::extended();
//! let found = locate("a == b", extended.operators()).unwrap();
//! assert_eq!((found.key, found.operator, found.value), ("a", "==", "b"));
//!
//! let shadowed = locate("a == b", &["=", "=="]).unwrap();
//! assert_eq!((shadowed.key, shadowed.operator, shadowed.value), ("a", "=", "= b"));
//! ```

mod classify;
mod locate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use classify::{classify, LineKind};
pub use locate::{locate, Assignment};

/// Operator table of the extended dialect, in precedence order.
pub const EXTENDED_OPERATORS: &[&str] = &[
    "==", "=>", "+=", "-=", "?=", ":=", "::", "=", ":", " is ",
];

/// Operator used when a new assignment line is appended.
pub const CANONICAL_OPERATOR: &str = "=";

/// The set of tokens that drive line classification and assignment parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    operators: Vec<String>,
    comment_markers: Vec<String>,
    block_comment: Option<(String, String)>,
    canonical_operator: String,
}

impl Syntax {
    /// Create a syntax from an operator table and comment markers.
    ///
    /// The canonical operator defaults to `=` when the table contains it,
    /// otherwise to the first operator of the table.
    ///
    /// # Panics
    ///
    /// Panics if `operators` is empty.
    #[must_use]
    pub fn new<O, C>(operators: O, comment_markers: C) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let operators: Vec<String> = operators.into_iter().map(Into::into).collect();
        assert!(!operators.is_empty(), "a syntax needs at least one operator");

        let canonical_operator = if operators.iter().any(|op| op == CANONICAL_OPERATOR) {
            CANONICAL_OPERATOR.to_string()
        } else {
            operators[0].clone()
        };

        Self {
            operators,
            comment_markers: comment_markers.into_iter().map(Into::into).collect(),
            block_comment: None,
            canonical_operator,
        }
    }

    /// Enable block comments delimited by `open` and `close`.
    #[must_use]
    pub fn with_block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_comment = Some((open.into(), close.into()));
        self
    }

    /// Override the operator used for appended lines.
    ///
    /// # Panics
    ///
    /// Panics if `operator` is not part of the operator table.
    #[must_use]
    pub fn with_canonical_operator(mut self, operator: impl Into<String>) -> Self {
        let operator = operator.into();
        assert!(
            self.operators.contains(&operator),
            "canonical operator '{operator}' is not in the operator table"
        );
        self.canonical_operator = operator;
        self
    }

    /// The single-operator dialect: `key = value`, `#` and `//` comments.
    #[must_use]
    pub fn simple() -> Self {
        Self::new(["="], ["#", "//"])
    }

    /// The multi-operator dialect with `--` comments and `/* */` blocks.
    #[must_use]
    pub fn extended() -> Self {
        Self::new(EXTENDED_OPERATORS.iter().copied(), ["#", "//", "--", "/*"])
            .with_block_comment("/*", "*/")
    }

    /// Operators in precedence order.
    #[must_use]
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Single-line comment markers.
    #[must_use]
    pub fn comment_markers(&self) -> &[String] {
        &self.comment_markers
    }

    /// Block comment delimiters, if block comments are enabled.
    #[must_use]
    pub fn block_comment(&self) -> Option<(&str, &str)> {
        self.block_comment
            .as_ref()
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    /// Operator used when appending a new line.
    #[must_use]
    pub fn canonical_operator(&self) -> &str {
        &self.canonical_operator
    }

    /// Whether `text` (already trimmed) starts with a comment marker.
    #[must_use]
    pub fn is_comment(&self, text: &str) -> bool {
        self.comment_markers
            .iter()
            .any(|marker| text.starts_with(marker.as_str()))
            || self
                .block_comment()
                .is_some_and(|(open, _)| text.starts_with(open))
    }

    /// Operators that rank at or before the canonical operator.
    ///
    /// A value containing one of these would be split at the wrong place
    /// when a canonical line is parsed back.
    pub fn operators_shadowing_canonical(&self) -> impl Iterator<Item = &str> {
        let position = self
            .operators
            .iter()
            .position(|op| *op == self.canonical_operator)
            .unwrap_or(0);
        self.operators[..=position].iter().map(String::as_str)
    }

    /// Render an assignment line (without terminator).
    ///
    /// Word operators such as ` is ` carry their own spacing in the table and
    /// are trimmed before being padded.
    #[must_use]
    pub fn format_line(indent: &str, key: &str, operator: &str, value: &str) -> String {
        format!("{indent}{key} {} {value}", operator.trim())
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::extended()
    }
}

/// Named syntax presets, as selected from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyntaxPreset {
    /// See [`Syntax::simple`].
    Simple,
    /// See [`Syntax::extended`].
    #[default]
    Extended,
}

impl SyntaxPreset {
    /// Build the syntax this preset names.
    #[must_use]
    pub fn syntax(self) -> Syntax {
        match self {
            Self::Simple => Syntax::simple(),
            Self::Extended => Syntax::extended(),
        }
    }
}

impl fmt::Display for SyntaxPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for SyntaxPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "extended" => Ok(Self::Extended),
            _ => Err(Error::InvalidSyntax { name: s.to_string() }),
        }
    }
}

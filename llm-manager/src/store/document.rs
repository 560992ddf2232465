//! In-memory model of one configuration file.
//!
//! A [`ConfigDocument`] keeps every line of the file, classified, so that an
//! update can rewrite a single assignment and hand every other line back
//! untouched.

use crate::syntax::{classify, locate, LineKind, Syntax};
use crate::tier::ConfigMap;

/// How a line ended on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Last line of a file without a trailing newline.
    Missing,
}

impl Terminator {
    /// The terminator as text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Missing => "",
        }
    }
}

/// One line of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    text: String,
    terminator: Terminator,
    kind: LineKind,
}

impl ConfigLine {
    /// Line content without its terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The terminator the line had when it was read.
    #[must_use]
    pub const fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// The line's classification.
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// The line exactly as it was read.
    #[must_use]
    pub fn raw(&self) -> String {
        format!("{}{}", self.text, self.terminator.as_str())
    }
}

/// Outcome of [`ConfigDocument::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// A new line was appended.
    Created,
    /// An existing line was rewritten.
    Updated,
}

/// A problem noticed while folding a document into a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// Malformed line, or assignment with an empty key or value.
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Trimmed line content.
        text: String,
    },
    /// A block comment was opened and never closed.
    UnclosedBlockComment {
        /// 1-based line number of the opening line.
        line: usize,
    },
}

/// A parsed configuration file.
///
/// # Examples
///
/// ```
/// use llm_manager::store::{ConfigDocument, UpdateResult};
/// use llm_manager::Syntax;
///
/// let mut doc = ConfigDocument::parse("text-generation = gemma2:2b\n# notes\n", Syntax::extended());
/// assert_eq!(doc.upsert("text-generation", "llama3"), UpdateResult::Updated);
/// assert_eq!(doc.render(), "text-generation = llama3\n# notes\n");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    syntax: Syntax,
    lines: Vec<ConfigLine>,
    unclosed_block: Option<usize>,
}

impl ConfigDocument {
    /// Split `content` into lines and classify each of them.
    #[must_use]
    pub fn parse(content: &str, syntax: Syntax) -> Self {
        let mut lines = Vec::new();
        let mut in_block = false;
        let mut block_opened_at = None;

        for (index, piece) in content.split_inclusive('\n').enumerate() {
            let (text, terminator) = if let Some(text) = piece.strip_suffix("\r\n") {
                (text, Terminator::CrLf)
            } else if let Some(text) = piece.strip_suffix('\n') {
                (text, Terminator::Lf)
            } else {
                (piece, Terminator::Missing)
            };

            let (kind, still_in_block) = classify(text, &syntax, in_block);
            if kind == LineKind::CommentBlockStart {
                block_opened_at = Some(index + 1);
            }
            in_block = still_in_block;

            lines.push(ConfigLine {
                text: text.to_string(),
                terminator,
                kind,
            });
        }

        Self {
            syntax,
            lines,
            unclosed_block: if in_block { block_opened_at } else { None },
        }
    }

    /// An empty document, as for a file that does not exist yet.
    #[must_use]
    pub fn empty(syntax: Syntax) -> Self {
        Self {
            syntax,
            lines: Vec::new(),
            unclosed_block: None,
        }
    }

    /// The syntax the document was parsed with.
    #[must_use]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// All lines in file order.
    #[must_use]
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    /// Fold assignment lines into a map, later lines overwriting earlier ones.
    ///
    /// Malformed lines and assignments with an empty key or value are left
    /// out and reported as issues.
    #[must_use]
    pub fn entries(&self) -> (ConfigMap, Vec<ParseIssue>) {
        let mut map = ConfigMap::new();
        let mut issues = Vec::new();

        for (index, line) in self.lines.iter().enumerate() {
            let found = match line.kind {
                LineKind::Assignment => locate(&line.text, self.syntax.operators()),
                LineKind::Malformed => None,
                _ => continue,
            };

            match found {
                Some(assignment) if assignment.is_complete() => {
                    map.insert(assignment.key.to_string(), assignment.value.to_string());
                }
                _ => issues.push(ParseIssue::InvalidLine {
                    line: index + 1,
                    text: line.text.trim().to_string(),
                }),
            }
        }

        if let Some(line) = self.unclosed_block {
            issues.push(ParseIssue::UnclosedBlockComment { line });
        }

        (map, issues)
    }

    /// Point `key` at `value`.
    ///
    /// The first assignment line whose key equals `key` is rewritten, keeping
    /// its indent and operator. When no such line exists a new line using the
    /// canonical operator is appended. No other line changes.
    pub fn upsert(&mut self, key: &str, value: &str) -> UpdateResult {
        let rewrite = self.lines.iter().enumerate().find_map(|(index, line)| {
            if line.kind != LineKind::Assignment {
                return None;
            }
            let found = locate(&line.text, self.syntax.operators())?;
            (found.key == key).then(|| (index, self.rewrite_line(&line.text, found.operator, key, value)))
        });

        if let Some((index, text)) = rewrite {
            log::debug!("rewriting line {} for '{key}'", index + 1);
            self.lines[index].text = text;
            return UpdateResult::Updated;
        }

        if let Some(last) = self.lines.last_mut() {
            if last.terminator == Terminator::Missing {
                last.terminator = Terminator::Lf;
            }
        }

        log::debug!("appending line {} for '{key}'", self.lines.len() + 1);
        self.lines.push(ConfigLine {
            text: Syntax::format_line("", key, self.syntax.canonical_operator(), value),
            terminator: Terminator::Lf,
            kind: LineKind::Assignment,
        });
        UpdateResult::Created
    }

    /// Build the replacement for an existing line.
    ///
    /// Everything up to the value (indent, key, operator and the spacing
    /// around it) is kept as written. If the new value would make the line
    /// parse differently, the line is rebuilt with the canonical operator.
    fn rewrite_line(&self, text: &str, operator: &str, key: &str, value: &str) -> String {
        let candidate = text.find(operator).map(|at| {
            let after = &text[at + operator.len()..];
            let spacing = after.len() - after.trim_start().len();
            format!("{}{value}", &text[..at + operator.len() + spacing])
        });
        let reparses = |line: &str| {
            locate(line, self.syntax.operators())
                .is_some_and(|found| found.key == key && found.value == value)
        };

        match candidate {
            Some(line) if reparses(&line) => line,
            _ => {
                let indent = &text[..text.len() - text.trim_start().len()];
                Syntax::format_line(indent, key, self.syntax.canonical_operator(), value)
            }
        }
    }

    /// Render the document with every line terminated by exactly one `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.text.len() + 1).sum());
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

//! Non-fatal problems found while parsing.
//!
//! Both parsers are best-effort: a bad line or record never aborts the pass.
//! Instead a [`Diagnostic`] is pushed into the [`Diagnostics`] sink owned by
//! that pass, and also logged at `warn` level.

use std::fmt::{Display, Formatter};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A comment was followed by another comment before any key/value line
    /// consumed it. Holds the comment that was dropped.
    OrphanedComment(String),
    /// A key was followed by `=` but no quoted value.
    MissingValue(String),
    /// A non-blank line that is neither a comment nor a key/value pair.
    UnrecognizedLine(String),
    /// A tabular record with a field count other than 3.
    FieldCount(usize),
}

/// A warning tied to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::OrphanedComment(comment) => write!(
                f,
                "comment '{}' has no translation, replaced at line {}",
                comment, self.line
            ),
            DiagnosticKind::MissingValue(key) => {
                write!(f, "value not found for key '{}' at line {}", key, self.line)
            }
            DiagnosticKind::UnrecognizedLine(content) => {
                write!(f, "skipping '{}' at line {}", content, self.line)
            }
            DiagnosticKind::FieldCount(count) => write!(
                f,
                "expected 3 fields but found {} at line {}",
                count, self.line
            ),
        }
    }
}

/// Collects the diagnostics of a single parse pass, in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and forwards it to the `log` facade.
    pub fn warn(&mut self, line: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { line, kind };
        log::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

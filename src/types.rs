//! Core, format-agnostic types for csv2strings.
//! Parsers decode into these; serializers render these.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

/// A single localization unit: a key, its translated value and the developer
/// comment that preceded it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// The translation key.
    pub key: String,

    /// The translated value. Empty when the value could not be recovered.
    pub value: String,

    /// Raw comment text, delimiters included (`/* ... */` or `// ...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub comment: Option<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// An ordered collection of entries, one file's worth of translations.
///
/// Order is the order in which entries were parsed and is kept through every
/// conversion. Duplicate keys are not merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    pub entries: Vec<Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Document { entries }
    }
}

impl FromIterator<Entry> for Document {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Document {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Result of a parse pass: the recovered document plus everything that had
/// to be skipped or guessed along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

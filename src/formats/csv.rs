//! Support for the 3-column CSV format used for spreadsheet editing.
//!
//! Every row is `key,value,comment`. Keys and values are written verbatim,
//! without CSV escaping, so a key or value holding a comma or a double quote
//! produces a malformed row. Comments are quoted when they need it.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    error::Error,
    traits::Parser,
    types::{Document, Entry, Parsed},
};

/// One row of the tabular format.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    pub key: String,
    pub value: String,
    /// Raw comment cell; empty when the entry has no comment.
    #[serde(default)]
    pub comment: String,
}

impl CSVRecord {
    /// Converts the row into an entry.
    ///
    /// A comment cell wrapped in double quotes loses exactly one quote on
    /// each side; an empty comment becomes `None`.
    pub fn into_entry(self) -> Entry {
        let mut comment = self.comment.as_str();
        if comment.len() >= 2 && comment.starts_with('"') && comment.ends_with('"') {
            comment = &comment[1..comment.len() - 1];
        }

        Entry {
            key: self.key,
            value: self.value,
            comment: if comment.is_empty() {
                None
            } else {
                Some(comment.to_string())
            },
        }
    }
}

impl From<&Entry> for CSVRecord {
    fn from(entry: &Entry) -> Self {
        CSVRecord {
            key: entry.key.clone(),
            value: entry.value.clone(),
            comment: entry.comment.clone().unwrap_or_default(),
        }
    }
}

impl Display for CSVRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.comment.contains([',', '"', '\n', '\r']) {
            write!(
                f,
                "{},{},\"{}\"",
                self.key,
                self.value,
                self.comment.replace('"', "\"\"")
            )
        } else {
            write!(f, "{},{},{}", self.key, self.value, self.comment)
        }
    }
}

/// The 3-column CSV format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format;

impl Parser for Format {
    fn parse(text: &str) -> Result<Parsed, Error> {
        parse(text)
    }

    fn serialize(document: &Document) -> String {
        serialize(document)
    }
}

/// Splits CSV text into records with the `csv` reader and builds a document
/// from them.
pub fn parse(text: &str) -> Result<Parsed, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut document = Document::new();
    let mut diagnostics = Diagnostics::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(index + 1, |position| position.line() as usize);
        let fields: Vec<&str> = record.iter().collect();
        push_record(&mut document, &mut diagnostics, line, &fields);
    }

    Ok(Parsed {
        document,
        diagnostics,
    })
}

/// Builds a document from already split records, one `(key, value, comment)`
/// row each. Line numbers in diagnostics are the 1-based record index.
///
/// ```rust
/// let parsed = csv2strings::formats::csv::parse_records([["ok", "ठीक", ""]]);
/// let entry = &parsed.document.entries[0];
/// assert_eq!((entry.key.as_str(), entry.value.as_str()), ("ok", "ठीक"));
/// assert_eq!(entry.comment, None);
/// ```
pub fn parse_records<I, R, S>(records: I) -> Parsed
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut document = Document::new();
    let mut diagnostics = Diagnostics::new();

    for (index, record) in records.into_iter().enumerate() {
        let fields: Vec<&str> = record.as_ref().iter().map(|field| field.as_ref()).collect();
        push_record(&mut document, &mut diagnostics, index + 1, &fields);
    }

    Parsed {
        document,
        diagnostics,
    }
}

fn push_record(
    document: &mut Document,
    diagnostics: &mut Diagnostics,
    line: usize,
    fields: &[&str],
) {
    if fields.len() != 3 {
        diagnostics.warn(line, DiagnosticKind::FieldCount(fields.len()));
    }
    if let [key, value, comment, ..] = fields {
        let record = CSVRecord {
            key: key.to_string(),
            value: value.to_string(),
            comment: comment.to_string(),
        };
        document.push(record.into_entry());
    }
}

/// Renders a document as CSV text, one `\n`-terminated row per entry.
pub fn serialize(document: &Document) -> String {
    let mut content = String::new();
    for entry in document {
        content.push_str(&CSVRecord::from(entry).to_string());
        content.push('\n');
    }
    content
}

//! The two localization file formats csv2strings converts between.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum for generic format handling across the crate.

pub mod csv;
pub mod strings;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

// Reexporting the formats for easier access
pub use self::csv::{CSVRecord, Format as CsvFormat};
pub use self::strings::{Format as StringsFormat, LineKind};

use crate::{
    Error,
    traits::Parser,
    types::{Document, Parsed},
};

/// Represents the supported localization file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// Apple `.strings` resource text.
    Strings,
    /// 3-column `key,value,comment` CSV.
    Csv,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// ```rust
/// use csv2strings::formats::FormatType;
/// assert_eq!(FormatType::Strings.to_string(), "strings");
/// assert_eq!(FormatType::Csv.to_string(), "csv");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Strings => write!(f, "strings"),
            FormatType::Csv => write!(f, "csv"),
        }
    }
}

/// Accepts `"strings"` and `"csv"`, case-insensitive and ignoring
/// surrounding whitespace. Returns [`Error::UnknownFormat`] otherwise.
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "strings" => Ok(FormatType::Strings),
            "csv" => Ok(FormatType::Csv),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Strings => "strings",
            FormatType::Csv => "csv",
        }
    }

    /// The format a file of this format is converted into.
    pub fn counterpart(&self) -> FormatType {
        match self {
            FormatType::Strings => FormatType::Csv,
            FormatType::Csv => FormatType::Strings,
        }
    }

    /// Infers the format from a file extension.
    ///
    /// ```rust
    /// use csv2strings::formats::FormatType;
    /// let format = FormatType::from_path("en.lproj/Localizable.strings").unwrap();
    /// assert_eq!(format, FormatType::Strings);
    /// assert!(FormatType::from_path("strings.xml").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        path.extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?
            .parse::<FormatType>()
            .map_err(|_| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Parses text in this format.
    pub fn parse(&self, text: &str) -> Result<Parsed, Error> {
        match self {
            FormatType::Strings => StringsFormat::parse(text),
            FormatType::Csv => CsvFormat::parse(text),
        }
    }

    /// Parses the file at `path` as this format.
    pub fn read_from<P: AsRef<Path>>(&self, path: P) -> Result<Parsed, Error> {
        match self {
            FormatType::Strings => StringsFormat::read_from(path),
            FormatType::Csv => CsvFormat::read_from(path),
        }
    }

    /// Renders a document in this format.
    pub fn serialize(&self, document: &Document) -> String {
        match self {
            FormatType::Strings => StringsFormat::serialize(document),
            FormatType::Csv => CsvFormat::serialize(document),
        }
    }
}

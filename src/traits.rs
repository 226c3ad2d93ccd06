//! Traits for format-agnostic parsing and serialization in csv2strings.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::{
    error::Error,
    types::{Document, Parsed},
};

/// A trait for parsing and writing one localization file format.
///
/// Implementors only provide the in-memory [`Parser::parse`] and
/// [`Parser::serialize`]; reading from paths and writing through writers
/// and paths is built on top of those.
///
/// # Example
///
/// ```rust,no_run
/// use csv2strings::{traits::Parser, formats::{CsvFormat, StringsFormat}};
/// let parsed = StringsFormat::read_from("en.lproj/Localizable.strings")?;
/// CsvFormat::write_to(&parsed.document, "Localizable.csv")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse a whole document held in memory.
    fn parse(text: &str) -> Result<Parsed, Error>;

    /// Render a document as text in this format.
    fn serialize(document: &Document) -> String;

    /// Parse from file path.
    ///
    /// A byte-order mark selects UTF-8 or UTF-16 decoding; input without one
    /// is decoded as UTF-8, with malformed sequences replaced.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Parsed, Error> {
        let file = File::open(path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;
        Self::parse(&decoded)
    }

    /// Write to any writer (file, memory, etc.) as UTF-8.
    fn to_writer<W: Write>(document: &Document, mut writer: W) -> Result<(), Error> {
        writer.write_all(Self::serialize(document).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(document: &Document, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Self::to_writer(document, writer)
    }
}

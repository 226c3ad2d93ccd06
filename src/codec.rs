//! File-level conversion between `.strings` and CSV.
//!
//! The format of the input is inferred from its extension and the output is
//! always the other format. Unless an output path is given, it is the input
//! path with its extension swapped.

use std::path::{Path, PathBuf};

use crate::{
    diagnostics::Diagnostics,
    error::Error,
    formats::{CsvFormat, FormatType, StringsFormat},
    options::{ConvertOptions, OutputEncoding},
    traits::Parser,
    types::{Document, Parsed},
};

/// What a conversion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input_format: FormatType,
    pub output_format: FormatType,
    pub output: PathBuf,
    /// Number of entries written.
    pub entries: usize,
    pub diagnostics: Diagnostics,
}

/// Returns `input` with its extension replaced by the one of `target`.
///
/// ```rust
/// use csv2strings::{codec::output_path_for, formats::FormatType};
/// use std::path::Path;
/// assert_eq!(
///     output_path_for("fr.lproj/Localizable.strings", FormatType::Csv),
///     Path::new("fr.lproj/Localizable.csv")
/// );
/// ```
pub fn output_path_for<P: AsRef<Path>>(input: P, target: FormatType) -> PathBuf {
    input.as_ref().with_extension(target.extension())
}

/// Converts text of format `from` into its counterpart format, in memory.
///
/// # Example
///
/// ```rust
/// use csv2strings::{codec::convert_text, formats::FormatType};
/// let (csv, diagnostics) = convert_text("/* greeting */\n\"hi\" = \"hello\";\n", FormatType::Strings)?;
/// assert_eq!(csv, "hi,hello,/* greeting */\n");
/// assert!(diagnostics.is_empty());
/// # Ok::<(), csv2strings::Error>(())
/// ```
pub fn convert_text(text: &str, from: FormatType) -> Result<(String, Diagnostics), Error> {
    let Parsed {
        document,
        diagnostics,
    } = from.parse(text)?;
    Ok((from.counterpart().serialize(&document), diagnostics))
}

/// Reads `input`, converts it into the counterpart format and writes the
/// result.
///
/// Diagnostics never stop the conversion unless `options.strict` is set, in
/// which case nothing is written and [`Error::Validation`] is returned.
///
/// # Example
///
/// ```rust,no_run
/// use csv2strings::{codec::convert, options::ConvertOptions};
/// let report = convert("en.lproj/Localizable.strings", &ConvertOptions::new())?;
/// println!("wrote {} translations to {}", report.entries, report.output.display());
/// # Ok::<(), csv2strings::Error>(())
/// ```
pub fn convert<P: AsRef<Path>>(
    input: P,
    options: &ConvertOptions,
) -> Result<ConversionReport, Error> {
    let input = input.as_ref();
    let input_format = FormatType::from_path(input)?;
    let output_format = input_format.counterpart();
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(input, output_format));

    log::info!("reading from {}", input.display());
    let Parsed {
        document,
        diagnostics,
    } = input_format.read_from(input)?;

    if options.strict && !diagnostics.is_empty() {
        return Err(Error::validation_error(format!(
            "{} problem(s) found in {}",
            diagnostics.len(),
            input.display()
        )));
    }

    log::info!(
        "writing {} translations to {}",
        document.len(),
        output.display()
    );
    write_document(&document, &output, output_format, options.encoding)?;

    Ok(ConversionReport {
        input_format,
        output_format,
        output,
        entries: document.len(),
        diagnostics,
    })
}

/// Writes `document` to `path` in `format`. The encoding only applies to
/// `.strings` output.
pub fn write_document<P: AsRef<Path>>(
    document: &Document,
    path: P,
    format: FormatType,
    encoding: OutputEncoding,
) -> Result<(), Error> {
    match (format, encoding) {
        (FormatType::Strings, OutputEncoding::Utf16) => {
            let content = StringsFormat::serialize(document);
            std::fs::write(path, encode_utf16_with_bom(&content))?;
        }
        (FormatType::Strings, OutputEncoding::Utf8) => StringsFormat::write_to(document, path)?,
        (FormatType::Csv, _) => CsvFormat::write_to(document, path)?,
    }
    Ok(())
}

fn encode_utf16_with_bom(content: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + content.len() * 2);
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    for unit in content.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

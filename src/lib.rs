#![forbid(unsafe_code)]
//! Convert Apple `.strings` localization files to and from CSV.
//!
//! The CSV side has three columns, `key,value,comment`, so that translators
//! can work on the strings in a spreadsheet and the result can be turned back
//! into a `.strings` file with the developer comments in place.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use csv2strings::{ConvertOptions, convert};
//!
//! // Writes en.lproj/Localizable.csv next to the input.
//! let report = convert("en.lproj/Localizable.strings", &ConvertOptions::new())?;
//! for diagnostic in &report.diagnostics {
//!     eprintln!("warning: {}", diagnostic);
//! }
//! # Ok::<(), csv2strings::Error>(())
//! ```
//!
//! Both formats parse into the same [`Document`], an ordered list of
//! [`Entry`] values, and parsing is best-effort: malformed lines or records
//! are skipped and reported as [`Diagnostic`]s instead of failing.

pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod options;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    codec::{ConversionReport, convert, convert_text, output_path_for},
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics},
    error::Error,
    formats::FormatType,
    options::{ConvertOptions, OutputEncoding},
    types::{Document, Entry, Parsed},
};

//! Options controlling a file-to-file conversion.

use std::path::PathBuf;

/// Text encoding used when writing `.strings` output.
///
/// CSV output is always UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    #[default]
    Utf8,
    /// UTF-16 little endian with a byte-order mark, as Xcode writes it.
    Utf16,
}

/// Behavior options for [`crate::codec::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Where to write the result. Defaults to the input path with the
    /// extension of the target format.
    pub output: Option<PathBuf>,
    /// Fails the conversion, writing nothing, when parsing produced any
    /// diagnostic.
    pub strict: bool,
    /// Encoding of `.strings` output.
    pub encoding: OutputEncoding,
}

impl ConvertOptions {
    /// Creates default convert options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit output path.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the `.strings` output encoding.
    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

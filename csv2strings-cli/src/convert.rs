use std::path::PathBuf;

use csv2strings::{ConvertOptions, Error, OutputEncoding, convert};

/// Run the convert command: one file in, the other format out.
pub fn run_convert_command(
    input: String,
    output: Option<String>,
    strict: bool,
    utf16: bool,
) -> Result<(), Error> {
    let options = ConvertOptions::new()
        .with_output(output.map(PathBuf::from))
        .with_strict(strict)
        .with_encoding(if utf16 {
            OutputEncoding::Utf16
        } else {
            OutputEncoding::Utf8
        });

    println!("Reading from {}", input);
    let report = convert(&input, &options)?;

    for diagnostic in &report.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    println!(
        "✅ Wrote {} translations to {} ({} -> {})",
        report.entries,
        report.output.display(),
        report.input_format,
        report.output_format
    );
    Ok(())
}

use std::fs::File;
use std::io::Write;

use csv2strings::{Error, FormatType};

/// Run the debug command: read a localization file and output its entries as JSON.
pub fn run_debug_command(input: &str, output: Option<String>) -> Result<(), Error> {
    let parsed = FormatType::from_path(input)?.read_from(input)?;
    for diagnostic in &parsed.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let json = serde_json::to_string_pretty(&parsed.document)?;

    match output {
        Some(output_path) => {
            File::create(&output_path).and_then(|mut f| f.write_all(json.as_bytes()))?;
            println!("✅ Debug output written to: {}", output_path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

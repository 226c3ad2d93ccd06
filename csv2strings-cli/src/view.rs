use csv2strings::{Error, FormatType, Parsed};

const TRUNCATE_AT: usize = 50;

/// Print the entries of a `.strings` or CSV file.
pub fn print_view(input: &str, full: bool) -> Result<(), Error> {
    let Parsed {
        document,
        diagnostics,
    } = FormatType::from_path(input)?.read_from(input)?;

    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    println!("Entries: {}", document.len());

    for (i, entry) in document.iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, entry.key);

        if let Some(comment) = &entry.comment {
            println!("    Comment: {}", comment);
        }

        if full || entry.value.chars().count() <= TRUNCATE_AT {
            println!("    Value: {}", entry.value);
        } else {
            let truncated: String = entry.value.chars().take(TRUNCATE_AT).collect();
            println!("    Value: {}...", truncated);
        }
    }

    Ok(())
}

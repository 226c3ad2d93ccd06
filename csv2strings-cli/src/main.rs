mod convert;
mod debug;
mod logger;
mod view;

use clap::{Parser, Subcommand};

use crate::convert::run_convert_command;
use crate::debug::run_debug_command;
use crate::logger::{LogLevel, init_logger};
use crate::view::print_view;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show library log records at this level and above on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Error)]
    log_level: LogLevel,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a .strings file to CSV, or a CSV file to .strings.
    Convert {
        /// The input file; its extension selects the direction
        #[arg(short, long)]
        input: String,
        /// The output file. Defaults to the input with the other extension
        #[arg(short, long)]
        output: Option<String>,
        /// Fail without writing when any line or record had to be skipped
        #[arg(long)]
        strict: bool,
        /// Write .strings output as UTF-16 instead of UTF-8
        #[arg(long)]
        utf16: bool,
    },

    /// View the entries of a .strings or CSV file.
    View {
        /// The input file to view
        #[arg(short, long)]
        input: String,

        /// Display full value without truncation
        #[arg(long)]
        full: bool,
    },

    /// Dump the parsed entries as JSON.
    Debug {
        /// The input file to read
        #[arg(short, long)]
        input: String,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level);

    let result = match args.commands {
        Commands::Convert {
            input,
            output,
            strict,
            utf16,
        } => run_convert_command(input, output, strict, utf16),
        Commands::View { input, full } => print_view(&input, full),
        Commands::Debug { input, output } => run_debug_command(&input, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

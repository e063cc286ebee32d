use std::process::ExitCode;

use braille_coding::tables::CodeTables;
use clap::{Parser, ValueEnum};

/// Convert between ASCII text, Braille cell bit patterns, and Unicode
/// Braille characters.
#[derive(Parser)]
#[command(name = "braille")]
struct Cli {
    /// Target encoding for the conversion.
    #[arg(value_enum, ignore_case = true)]
    target: Target,

    /// Text to encode (braille), or a single cell bit pattern to decode
    /// (ascii, unicode).
    source: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Braille,
    Ascii,
    Unicode,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems exit 1 with nothing on stdout; --help and
            // --version print to stdout and exit 0.
            let failure = err.use_stderr();
            let _ = err.print();
            return if failure {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let tables = CodeTables::new();
    match cli.target {
        Target::Braille => {
            for letter in cli.source.chars() {
                match tables.to_braille(letter) {
                    Ok(bits) => print!("{bits}"),
                    Err(err) => {
                        println!("Error: {err}");
                        return ExitCode::SUCCESS;
                    }
                }
            }
            println!();
        }
        Target::Ascii => match tables.to_ascii(&cli.source) {
            Ok(letter) => println!("{letter}"),
            Err(err) => println!("Error: {err}"),
        },
        Target::Unicode => match tables.to_unicode(&cli.source) {
            Ok(cell) => println!("{cell}"),
            Err(err) => println!("Error: {err}"),
        },
    }

    ExitCode::SUCCESS
}

//! CLI Tool Example
//!
//! This example demonstrates how to build a command-line tool using
//! xlsx2avito for converting listing spreadsheets to the Avito XML feed.

use std::fs::File;
use std::io::{self, Write};
use std::process;
use xlsx2avito::{ConverterBuilder, SheetSelector, XlsxToAvitoError, FEED_FILE_NAME};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.xlsx> [output.xml] [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --sheet-index <n>    Select sheet by index (0-based)");
        eprintln!("  --sheet-name <name>  Select sheet by name");
        eprintln!("  --stdout             Write feed to stdout instead of a file");
        eprintln!("\nExamples:");
        eprintln!("  {} listings.xlsx", args[0]);
        eprintln!("  {} listings.xlsx feed.xml --sheet-index 0", args[0]);
        eprintln!("  {} listings.xlsx - --stdout", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 2 && !args[2].starts_with("--") {
        args[2].clone()
    } else {
        FEED_FILE_NAME.to_string()
    };
    let use_stdout = output_path == "-" || args.contains(&"--stdout".to_string());

    // Parse options
    let mut sheet_selector = SheetSelector::Auto;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--sheet-index" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-index requires a value");
                    process::exit(1);
                }
                let index = args[i + 1].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: Invalid sheet index: {}", args[i + 1]);
                    process::exit(1);
                });
                sheet_selector = SheetSelector::Index(index);
                i += 2;
            }
            "--sheet-name" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-name requires a value");
                    process::exit(1);
                }
                sheet_selector = SheetSelector::Name(args[i + 1].clone());
                i += 2;
            }
            "--stdout" => {
                // Already handled above
                i += 1;
            }
            other if !other.starts_with("--") && i == 2 => {
                // Positional output path, already handled
                i += 1;
            }
            _ => {
                eprintln!("Error: Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
    }

    match convert_feed(input_path, &output_path, &sheet_selector, use_stdout) {
        Ok(_) => {
            if !use_stdout {
                println!("Conversion completed: {} -> {}", input_path, output_path);
            }
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn convert_feed(
    input_path: &str,
    output_path: &str,
    sheet_selector: &SheetSelector,
    use_stdout: bool,
) -> Result<(), XlsxToAvitoError> {
    let converter = ConverterBuilder::new()
        .with_sheet_selector(sheet_selector.clone())
        .build()?;

    let input = File::open(input_path)?;

    if use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        converter.convert(input, &mut handle)?;
        handle.flush()?;
    } else {
        let output = File::create(output_path)?;
        converter.convert(input, output)?;
    }

    Ok(())
}

fn handle_error(error: XlsxToAvitoError) {
    match error {
        XlsxToAvitoError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        XlsxToAvitoError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid spreadsheet or may be corrupted.");
        }
        XlsxToAvitoError::MissingSheet(detail) => {
            eprintln!("Missing Sheet: {}", detail);
            eprintln!("Check the sheet name or index against the workbook.");
        }
        XlsxToAvitoError::InsufficientRows { found } => {
            eprintln!("Insufficient Rows: the listing sheet has only {} rows.", found);
            eprintln!("The sheet needs a banner row, a title row, two service rows and data.");
        }
        XlsxToAvitoError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
    }
}

//! Command-line configuration for the huffpress driver.
//!
//! Two operations, each taking exactly three paths. Anything else
//! (missing arguments, unknown subcommand, --help) falls back to the
//! usage text and a clean exit.

use std::path::PathBuf;

/// Parsed invocation.
#[derive(Debug, Clone)]
pub enum Command {
    Compress(IoPaths),
    Decompress(IoPaths),
}

/// The three paths every operation works with.
#[derive(Debug, Clone)]
pub struct IoPaths {
    /// File to read (raw text when compressing, packed stream when
    /// decompressing)
    pub input_path: PathBuf,

    /// File to write (packed stream or reconstructed text)
    pub target_path: PathBuf,

    /// Where the decode table is written (compress) or read from
    /// (decompress)
    pub decode_table_path: PathBuf,

    /// Pretty-print the tables involved in the operation
    pub print_tables: bool,
}

/// Parse command-line arguments (without the program name).
///
/// Returns `None` when the usage text should be shown instead of running
/// an operation.
pub fn parse(args: &[String]) -> Option<Command> {
    let mut positional: Vec<&str> = Vec::new();
    let mut print_tables = false;

    for arg in args {
        match arg.as_str() {
            "--print-tables" => print_tables = true,
            "--help" | "-h" => return None,
            other => positional.push(other),
        }
    }

    let &[operation, input, target, table] = positional.as_slice() else {
        return None;
    };

    let paths = IoPaths {
        input_path: PathBuf::from(input),
        target_path: PathBuf::from(target),
        decode_table_path: PathBuf::from(table),
        print_tables,
    };

    match operation {
        "compress" => Some(Command::Compress(paths)),
        "decompress" => Some(Command::Decompress(paths)),
        _ => None,
    }
}

/// Print the usage text to stdout.
pub fn print_usage() {
    println!("huffpress: lossless text compression with Huffman prefix codes");
    println!();
    println!("USAGE:");
    println!("    huffpress compress <input_path> <target_path> <decode_table_path>");
    println!("    huffpress decompress <input_path> <target_path> <decode_table_path>");
    println!();
    println!("OPTIONS:");
    println!("    --print-tables    Pretty-print the frequency and code tables");
    println!("    --help, -h        Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpress compress book.txt book.hpk book.table.json");
    println!("    huffpress decompress book.hpk restored.txt book.table.json");
    println!();
}

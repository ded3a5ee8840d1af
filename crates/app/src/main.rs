//! huffpress: whole-file Huffman compression driver.
//!
//! The pipeline is single-threaded and synchronous: each stage runs to
//! completion and hands its result to the next by value. Compression
//! derives the code tables from the input, writes the packed stream, and
//! persists the decode table; decompression starts from the persisted
//! table alone, the way a separate process would.

mod config;
mod display;

use std::fs;
use std::process;

use huffpress_core::{
    stream, table_io, tree, DecodeTable, EncodeTable, FrequencyTable, Result,
};

use config::{Command, IoPaths};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match config::parse(&args) {
        Some(command) => command,
        None => {
            config::print_usage();
            return;
        }
    };

    let result = match command {
        Command::Compress(paths) => compress(&paths),
        Command::Decompress(paths) => decompress(&paths),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn compress(paths: &IoPaths) -> Result<()> {
    let input = fs::read(&paths.input_path)?;

    let freqs = FrequencyTable::scan(&input);
    if freqs.unsupported() > 0 {
        eprintln!(
            "warning: {} byte(s) outside the supported 0-127 range were skipped; \
             the decompressed output will not match this input exactly",
            freqs.unsupported()
        );
    }

    let (encode_table, decode_table) = if freqs.is_empty() {
        (EncodeTable::default(), DecodeTable::default())
    } else {
        let root = tree::build(&freqs)?;
        let encode_table = EncodeTable::from_tree(&root);
        let decode_table = encode_table.invert();
        (encode_table, decode_table)
    };

    if paths.print_tables {
        display::print_frequency_table(&freqs);
        display::print_code_table(&encode_table);
    }

    let packed = stream::encode(&input, &encode_table)?;

    table_io::save_to_path(&decode_table, &paths.decode_table_path)?;
    fs::write(&paths.target_path, &packed)?;

    let ratio = if input.is_empty() {
        100.0
    } else {
        packed.len() as f64 / input.len() as f64 * 100.0
    };
    println!(
        "compressed {} bytes into {} bytes ({ratio:.1}%), decode table at {}",
        input.len(),
        packed.len(),
        paths.decode_table_path.display()
    );

    Ok(())
}

fn decompress(paths: &IoPaths) -> Result<()> {
    let decode_table = table_io::load_from_path(&paths.decode_table_path)?;

    if paths.print_tables {
        display::print_decode_table(&decode_table);
    }

    let packed = fs::read(&paths.input_path)?;
    let output = stream::decode(&packed, &decode_table)?;
    fs::write(&paths.target_path, &output)?;

    println!(
        "decompressed {} bytes into {} bytes",
        packed.len(),
        output.len()
    );

    Ok(())
}

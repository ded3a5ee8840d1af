//! Human-readable rendering of frequency and code tables.

use huffpress_core::{DecodeTable, EncodeTable, FrequencyTable};

const CHAR_COL_WIDTH: usize = 10;

/// Printable label for a byte value. Common control characters get their
/// short names; other non-printables are shown in hex.
fn symbol_label(byte: u8) -> String {
    match byte {
        9 => "TAB".to_string(),
        10 => "LF".to_string(),
        11 => "VT".to_string(),
        13 => "CR".to_string(),
        b if b < 32 || b == 127 => format!("0x{b:02x}"),
        b => (b as char).to_string(),
    }
}

fn print_rule(width: usize) {
    println!("{}", "-".repeat(CHAR_COL_WIDTH + width));
}

/// Pretty-print byte occurrence counts.
pub fn print_frequency_table(freqs: &FrequencyTable) {
    let count_width = 10;
    print_rule(count_width);
    println!("{:<CHAR_COL_WIDTH$}{:<count_width$}", "Char", "Count");
    print_rule(count_width);
    for (byte, count) in freqs.iter() {
        println!("{:<CHAR_COL_WIDTH$}{:<count_width$}", symbol_label(byte), count);
    }
    println!();
}

/// Pretty-print byte-to-code assignments.
pub fn print_code_table(table: &EncodeTable) {
    let code_width = table
        .iter()
        .map(|(_, code)| code.len())
        .max()
        .unwrap_or(0)
        .max(4);
    print_rule(code_width);
    println!("{:<CHAR_COL_WIDTH$}{:<code_width$}", "Char", "Code");
    print_rule(code_width);
    for (byte, code) in table.iter() {
        println!("{:<CHAR_COL_WIDTH$}{:<code_width$}", symbol_label(byte), code);
    }
    println!();
}

/// Pretty-print a loaded decode table, code first.
pub fn print_decode_table(table: &DecodeTable) {
    let code_width = table
        .iter()
        .map(|(code, _)| code.len())
        .max()
        .unwrap_or(0)
        .max(4);
    print_rule(code_width);
    println!("{:<code_width$}{:<CHAR_COL_WIDTH$}", "Code", "Char");
    print_rule(code_width);
    for (code, byte) in table.iter() {
        println!("{:<code_width$}{:<CHAR_COL_WIDTH$}", code, symbol_label(byte));
    }
    println!();
}

//! Decode table persistence.
//!
//! The decode table is the sole channel between an encoding run and a
//! later, independent decoding run, so its persisted form must round-trip
//! exactly. It is stored as a JSON object mapping bit-string keys to byte
//! values, e.g. `{"0": 97, "10": 98, "11": 99}`: structured, human
//! readable, and stable across runs (keys serialize in lexicographic
//! order).
//!
//! Loading validates the table before handing it to the decoder: a
//! missing file, malformed JSON, a key that is not a non-empty '0'/'1'
//! string, or two keys where one prefixes the other are all fatal.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::code::DecodeTable;
use crate::error::{Result, TableError};

/// Serialize the table to a writer as pretty-printed JSON.
pub fn save<W: Write>(table: &DecodeTable, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, table).map_err(TableError::from)?;
    Ok(())
}

/// Deserialize and validate a table from a reader.
pub fn load<R: Read>(reader: R) -> Result<DecodeTable> {
    let table: DecodeTable =
        serde_json::from_reader(reader).map_err(TableError::from)?;
    validate(&table)?;
    Ok(table)
}

/// Serialize the table to a file, creating or truncating it.
pub fn save_to_path(table: &DecodeTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load and validate a table from a file.
///
/// # Errors
/// `TableError::Unavailable` if the file cannot be opened; the load
/// failures of [`load`] otherwise.
pub fn load_from_path(path: &Path) -> Result<DecodeTable> {
    let file = File::open(path).map_err(|source| TableError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load(BufReader::new(file))
}

/// Reject tables the decoder could misinterpret.
fn validate(table: &DecodeTable) -> Result<()> {
    let mut prev: Option<&str> = None;

    for (code, _) in table.iter() {
        if code.is_empty() || code.bytes().any(|b| b != b'0' && b != b'1') {
            return Err(TableError::InvalidCode {
                code: code.to_string(),
            }
            .into());
        }

        // Codes iterate in sorted order, and any prefix of a code sorts
        // directly between it and the previous non-prefix key, so
        // checking adjacent pairs covers every prefix relation.
        if let Some(prefix) = prev {
            if code.starts_with(prefix) {
                return Err(TableError::AmbiguousCode {
                    prefix: prefix.to_string(),
                    code: code.to_string(),
                }
                .into());
            }
        }
        prev = Some(code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::EncodeTable;
    use crate::error::Error;
    use crate::freq::FrequencyTable;
    use crate::tree;

    fn decode_table_for(input: &[u8]) -> DecodeTable {
        let root = tree::build(&FrequencyTable::scan(input)).unwrap();
        EncodeTable::from_tree(&root).invert()
    }

    fn round_trip(table: &DecodeTable) -> DecodeTable {
        let mut buffer = Vec::new();
        save(table, &mut buffer).unwrap();
        load(buffer.as_slice()).unwrap()
    }

    #[test]
    fn test_serialize_deserialize_round_trip() {
        // Three codes: {"00": c, "01": b, "1": a}
        let table = decode_table_for(b"aaaabbc");
        assert_eq!(table.len(), 3);

        let restored = round_trip(&table);
        assert_eq!(restored, table);
    }

    #[test]
    fn test_literal_table_round_trip() {
        let table = load(&b"{\"0\": 97, \"10\": 98, \"11\": 99}"[..]).unwrap();
        assert_eq!(table.get("0"), Some(b'a'));
        assert_eq!(table.get("10"), Some(b'b'));
        assert_eq!(table.get("11"), Some(b'c'));

        let restored = round_trip(&table);
        assert_eq!(restored, table);
    }

    #[test]
    fn test_persisted_form_is_readable_json() {
        let table = decode_table_for(b"aaab");
        let mut buffer = Vec::new();
        save(&table, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"0\""));
        assert!(text.contains("\"1\""));
    }

    #[test]
    fn test_empty_table_round_trip() {
        let restored = round_trip(&DecodeTable::default());
        assert!(restored.is_empty());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let result = load(&b"{\"0\": 97,"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::Malformed(_)))
        ));
    }

    #[test]
    fn test_wrong_shape_is_fatal() {
        let result = load(&b"[1, 2, 3]"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::Malformed(_)))
        ));
    }

    #[test]
    fn test_non_bit_key_is_fatal() {
        let result = load(&b"{\"0x\": 97}"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::InvalidCode { .. }))
        ));
    }

    #[test]
    fn test_empty_key_is_fatal() {
        let result = load(&b"{\"\": 97}"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::InvalidCode { .. }))
        ));
    }

    #[test]
    fn test_ambiguous_table_is_fatal() {
        let result = load(&b"{\"0\": 97, \"01\": 98}"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::AmbiguousCode { .. }))
        ));
    }

    #[test]
    fn test_non_adjacent_prefix_is_caught() {
        // "0" prefixes "011" with "010" sorting between them
        let result = load(&b"{\"0\": 97, \"010\": 98, \"011\": 99}"[..]);
        assert!(matches!(
            result,
            Err(Error::Table(TableError::AmbiguousCode { .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = load_from_path(Path::new("/nonexistent/decode_table.json"));
        assert!(matches!(
            result,
            Err(Error::Table(TableError::Unavailable { .. }))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let table = decode_table_for(b"persisted across independent runs");

        let path = std::env::temp_dir().join(format!(
            "huffpress_table_io_test_{}.json",
            std::process::id()
        ));
        save_to_path(&table, &path).unwrap();
        let restored = load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(restored, table);
    }
}

//! Error types for the huffpress coding engine.
//!
//! All operations return structured errors rather than panicking.
//! Errors surface immediately to the caller; the only deliberate
//! warning-and-continue case is input bytes outside the supported range,
//! which is a condition recorded on the frequency table, not an error.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Tree: Huffman tree construction failures
/// - Stream: packed bit-stream encoding/decoding failures
/// - Table: decode table persistence failures
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction error (e.g., empty frequency table)
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Packed stream error (e.g., missing code, corrupt header)
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// Decode table persistence error
    #[error("decode table error: {0}")]
    Table(#[from] TableError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Huffman tree construction errors.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No symbols with non-zero frequency (nothing to merge)
    #[error("empty frequency table: cannot build a coding tree")]
    EmptyFrequencyTable,
}

/// Packed bit-stream errors.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The encode table has no entry for a supported input byte
    #[error("no code for byte {byte:#04x}: encode table does not cover the input")]
    MissingCode { byte: u8 },

    /// Invalid magic number in the stream header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Stream is too short to contain a valid header
    #[error("stream too short: need at least {required} bytes, got {actual}")]
    StreamTooShort { required: usize, actual: usize },

    /// Payload size disagrees with the bit count declared in the header
    #[error("payload length mismatch: header implies {expected} bytes, got {actual}")]
    PayloadLengthMismatch { expected: usize, actual: usize },

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },
}

/// Decode table persistence errors.
///
/// A decode table that fails to load, for any of these reasons, is fatal:
/// decoding must never proceed with a partial or ambiguous table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file is missing or unreadable
    #[error("cannot read decode table at {path:?}: {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted form is not valid JSON for a bit-string -> byte map
    #[error("malformed decode table: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A table key contains characters other than '0' and '1', or is empty
    #[error("decode table entry {code:?} is not a non-empty bit-string")]
    InvalidCode { code: String },

    /// One table key is a prefix of another, so decoding would be ambiguous
    #[error("decode table is ambiguous: code {prefix:?} is a prefix of {code:?}")]
    AmbiguousCode { prefix: String, code: String },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

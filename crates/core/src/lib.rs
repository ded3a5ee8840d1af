//! huffpress-core: Lossless Huffman prefix-code compression for byte text
//!
//! This library provides the coding engine for a whole-file compressor:
//! - Counts byte frequencies over raw input
//! - Builds a Huffman tree by repeated minimum-weight merge
//! - Derives prefix-free encode and decode tables from the tree
//! - Packs and unpacks variable-length codes as a framed bit stream
//! - Persists the decode table so decoding runs independently of the encoder
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: Byte frequency analysis
//! - `tree`: Huffman tree construction
//! - `code`: Encode/decode table generation
//! - `bitio`: Low-level bit packing and unpacking
//! - `stream`: Framed bit-stream encoding and decoding
//! - `table_io`: Decode table persistence
//!
//! # Design Principles
//!
//! - **No panics**: All failures are structured errors
//! - **Deterministic**: Identical input always yields identical codes
//! - **Single-threaded**: Each stage runs to completion and hands its
//!   result to the next stage by value
//! - **Self-describing streams**: The packed stream records its exact bit
//!   length, so trailing padding never corrupts a round trip

pub mod bitio;
pub mod code;
pub mod error;
pub mod freq;
pub mod stream;
pub mod table_io;
pub mod tree;

// Re-export commonly used types
pub use code::{DecodeTable, EncodeTable};
pub use error::{Error, Result};
pub use freq::FrequencyTable;

//! Framed bit-stream encoding and decoding.
//!
//! The packed stream is self-describing: a small header records the exact
//! number of meaningful bits, so the zero padding of the final byte can
//! never be mistaken for data, and an integrity checksum rejects corrupt
//! streams before any decoding happens.
//!
//! # Stream Format
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x50 0x4B 0x31 ("HPK1")
//! +------------------+
//! | bit_len (8)      |  u64 little-endian, meaningful payload bits
//! +------------------+
//! | crc32 (4)        |  u32 little-endian, over bit_len + payload
//! +------------------+
//! | payload          |  packed Huffman codes, MSB-first,
//! | (variable)       |  ceil(bit_len / 8) bytes
//! +------------------+
//! ```
//!
//! Empty input is a valid stream: `bit_len = 0` and no payload, which
//! decodes back to empty output.

use crate::bitio::{BitReader, BitWriter};
use crate::code::{DecodeTable, EncodeTable};
use crate::error::{Result, StreamError};
use crate::freq::MAX_SUPPORTED_BYTE;

/// Magic number for packed streams: "HPK1" (Huffman pack, version 1)
const MAGIC: [u8; 4] = [0x48, 0x50, 0x4B, 0x31];

/// Size of the stream header in bytes
const HEADER_SIZE: usize = 16;

/// Encode `input` against the table into a framed packed stream.
///
/// Bytes above the supported range emit nothing; they were flagged during
/// frequency analysis and the caller has already warned that fidelity is
/// lost for such input.
///
/// # Errors
/// Returns `StreamError::MissingCode` if a supported byte has no code,
/// which means the table was not derived from this input.
pub fn encode(input: &[u8], table: &EncodeTable) -> Result<Vec<u8>> {
    let mut writer = BitWriter::new();

    for &byte in input {
        if byte > MAX_SUPPORTED_BYTE {
            continue;
        }
        let code = table
            .get(byte)
            .ok_or(StreamError::MissingCode { byte })?;
        writer.push_code(code);
    }

    let (payload, bit_len) = writer.finish();
    let crc32 = compute_crc(bit_len, &payload);

    let mut stream = Vec::with_capacity(HEADER_SIZE + payload.len());
    stream.extend_from_slice(&MAGIC);
    stream.extend_from_slice(&bit_len.to_le_bytes());
    stream.extend_from_slice(&crc32.to_le_bytes());
    stream.extend_from_slice(&payload);

    Ok(stream)
}

/// Decode a framed packed stream back into the original bytes.
///
/// Payload bits are expanded MSB-first and matched as growing prefixes
/// against the table; the first match emits a byte and matching resumes
/// from the remainder. Codes are prefix-free, so at most one match is
/// possible per position and no backtracking is needed.
///
/// A remainder that ends mid-code (possible only when the table does not
/// belong to this stream) is discarded; the bytes already decoded are
/// returned as-is.
///
/// # Errors
/// - `StreamError::StreamTooShort` if the header is incomplete
/// - `StreamError::InvalidMagic` if the magic number doesn't match
/// - `StreamError::PayloadLengthMismatch` if the payload size disagrees
///   with the declared bit count
/// - `StreamError::Crc` if the checksum fails
pub fn decode(stream: &[u8], table: &DecodeTable) -> Result<Vec<u8>> {
    if stream.len() < HEADER_SIZE {
        return Err(StreamError::StreamTooShort {
            required: HEADER_SIZE,
            actual: stream.len(),
        }
        .into());
    }

    let magic: [u8; 4] = stream[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(StreamError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let bit_len = u64::from_le_bytes(stream[4..12].try_into().unwrap());
    let crc32 = u32::from_le_bytes(stream[12..16].try_into().unwrap());
    let payload = &stream[HEADER_SIZE..];

    let expected_payload = bit_len.div_ceil(8);
    if payload.len() as u64 != expected_payload {
        return Err(StreamError::PayloadLengthMismatch {
            expected: expected_payload as usize,
            actual: payload.len(),
        }
        .into());
    }

    let computed_crc = compute_crc(bit_len, payload);
    if computed_crc != crc32 {
        return Err(StreamError::Crc {
            expected: crc32,
            actual: computed_crc,
        }
        .into());
    }

    let mut reader = BitReader::new(payload, bit_len);
    let mut output = Vec::new();
    let mut pending = String::new();

    while let Some(bit) = reader.read_bit() {
        pending.push(if bit { '1' } else { '0' });
        if let Some(byte) = table.get(&pending) {
            output.push(byte);
            pending.clear();
        }
    }

    Ok(output)
}

/// Compute CRC32 over the protected fields.
fn compute_crc(bit_len: u64, payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&bit_len.to_le_bytes());
    hasher.update(payload);
    hasher.finalize()
}

// In: src/bridge/format.rs

//! Defines the stream container constants and the public statistics struct.
//!
//! A stream container holds one packet collection in production order:
//!
//! ```text
//! magic "RDXP" | version u16 LE | packet count (LEB128) | { len (LEB128) | packet bytes }*
//! ```

use serde::{Deserialize, Serialize};

/// The magic number to identify the start of a radixpack stream.
pub const STREAM_MAGIC: &[u8; 4] = b"RDXP";
/// The current version of the stream container format.
pub const STREAM_FORMAT_VERSION: u16 = 1;
/// magic(4) + version(2) + count(>= 1 byte)
pub const MIN_STREAM_LEN: usize = 7;

/// Size accounting for one encoded stream, returned by `analyze`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompressionStats {
    pub original_size: usize,
    pub packet_count: usize,
    /// Bytes spent on `(radix, min)` headers.
    pub header_size: usize,
    /// Bytes spent on accumulator data.
    pub data_size: usize,
    pub total_size: usize,
    /// `(1 - total_size / original_size) * 100`; negative when packing grew the input.
    pub savings_percent: f64,
}

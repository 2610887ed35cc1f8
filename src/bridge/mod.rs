// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` wraps the stateful `codec::Encoder` and the stateless decoder in
// whole-buffer calls, and adds a container format for shipping a packet
// collection as a single byte buffer.
//
//   input bytes -> [compress] -> Vec<Packet> -> [stream::write_stream] -> Vec<u8>
//   Vec<u8> -> [stream::read_stream] -> Vec<Packet> -> [decompress] -> bytes
//
// ====================================================================================
pub mod format;
pub mod stateless_api;
pub mod stream;

pub use format::CompressionStats;
pub use stateless_api::{analyze, compress, compress_to_stream, decompress, decompress_stream};

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Engine
// ====================================================================================
//
// Encoding (stateful, one `Encoder` per stream):
//
//   byte -> [Window::check] --fits--> [Accumulator::fold] + [Window::record]
//                  |
//                  `--trigger--> snapshot (Packet) -> reset -> reopen(successor) -> fold
//
//   end of stream -> [Encoder::flush] -> Packet
//
// Decoding (stateless):
//
//   Vec<Packet> --pop from tail--> digits of alpha in base `radix` (+ min) -> bytes
//
// ====================================================================================
pub mod accumulator;
pub mod decoder;
pub mod encoder;
pub mod packet;
pub mod window;

pub use decoder::{decode, decode_buffers};
pub use encoder::Encoder;
pub use packet::Packet;
pub use window::FlushTrigger;

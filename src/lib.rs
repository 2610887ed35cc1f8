//! This file is the root of the `radixpack` Rust crate.
//!
//! `radixpack` packs a stream of byte values into mixed-radix packets backed by
//! arbitrary-precision integers, and reconstructs an approximation of the
//! stream from them. The scheme is lossy by construction: see `codec::decoder`.
//!
//! ```
//! use radixpack::{decode, Encoder};
//!
//! let mut encoder = Encoder::new(0, 1)?;
//! let mut packets: Vec<_> = [0, 1, 0, 1].iter().filter_map(|&b| encoder.encode(b)).collect();
//! packets.push(encoder.flush()?);
//! assert_eq!(decode(packets)?, vec![0, 1, 0, 1]);
//! # Ok::<(), radixpack::RadixPackError>(())
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod codec;
pub mod config;
pub mod kernels;

mod error;
mod utils;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use codec::{decode, decode_buffers, Encoder, FlushTrigger, Packet};
pub use config::{CodecConfig, EmptyWindowPolicy};
pub use error::{RadixPackError, Result};
pub use observability::enable_verbose_logging;
pub use utils::{checked_bounds, checked_byte};

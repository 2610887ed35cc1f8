//! Pure, stateless helpers shared by the codec and the stream container.

/// Arbitrary-precision <-> little-endian byte conversion.
pub mod bignum;

/// Varint length prefixes.
pub mod leb128;

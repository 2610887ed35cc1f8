//! Little-endian byte serialization for arbitrary-precision accumulators.
//!
//! `num-bigint` encodes zero as a single `0x00` byte; packets need the minimal
//! form instead, where zero occupies no bytes at all.

use num_bigint::BigUint;
use num_traits::Zero;

/// Serializes `value` into its minimal little-endian byte form,
/// `ceil(bits / 8)` bytes long.
pub fn to_le_bytes(value: &BigUint) -> Vec<u8> {
    if value.is_zero() {
        return Vec::new();
    }
    value.to_bytes_le()
}

/// Rebuilds a value from little-endian bytes (`Σ byte_i · 256^i`).
/// Trailing zero bytes are accepted and contribute nothing.
pub fn from_le_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

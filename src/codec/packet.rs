//! The serialized form of one flushed window.
//!
//! Layout: `[radix, min, data...]`, where `data` is the minimal little-endian
//! encoding of the window's accumulator. A radix of 256 (a window spanning the
//! whole byte range) does not fit the header byte and is stored as `0`.

use num_bigint::BigUint;

use crate::error::{RadixPackError, Result};
use crate::kernels::bignum;

/// Size of the `(radix, min)` header in bytes.
pub const HEADER_LEN: usize = 2;
/// The shortest buffer the decoder accepts: header plus one data byte.
pub const MIN_PACKET_LEN: usize = HEADER_LEN + 1;
/// The largest radix a header can describe.
pub const MAX_RADIX: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    radix: u16,
    min: u8,
    data: Vec<u8>,
}

impl Packet {
    /// Builds a packet from its parts. `radix` must lie in `1..=MAX_RADIX`.
    pub fn new(radix: u16, min: u8, data: Vec<u8>) -> Result<Self> {
        if radix == 0 || radix > MAX_RADIX {
            return Err(RadixPackError::PacketFormat(format!(
                "radix {radix} does not fit a packet header"
            )));
        }
        Ok(Self::from_parts(radix, min, data))
    }

    /// Infallible constructor for headers taken from an opened encoder window,
    /// whose radix is always in `1..=MAX_RADIX`.
    pub(crate) fn from_parts(radix: u16, min: u8, data: Vec<u8>) -> Self {
        debug_assert!((1..=MAX_RADIX).contains(&radix), "radix {radix} out of header range");
        Self { radix, min, data }
    }

    /// Parses a `[radix, min, data...]` buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_PACKET_LEN {
            return Err(RadixPackError::PacketFormat(format!(
                "expected at least {MIN_PACKET_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            radix: radix_from_header(bytes[0]),
            min: bytes[1],
            data: bytes[HEADER_LEN..].to_vec(),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.push(radix_to_header(self.radix));
        bytes.push(self.min);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    pub fn radix(&self) -> u16 {
        self.radix
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The accumulator value carried by this packet.
    pub fn alpha(&self) -> BigUint {
        bignum::from_le_bytes(&self.data)
    }

    /// Serialized length in bytes, header included.
    pub fn len(&self) -> usize {
        HEADER_LEN + self.data.len()
    }

    /// True for a header-only packet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TryFrom<&[u8]> for Packet {
    type Error = RadixPackError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<Packet> for Vec<u8> {
    fn from(packet: Packet) -> Self {
        packet.to_bytes()
    }
}

fn radix_to_header(radix: u16) -> u8 {
    (radix % MAX_RADIX) as u8
}

fn radix_from_header(byte: u8) -> u16 {
    match byte {
        0 => MAX_RADIX,
        b => u16::from(b),
    }
}

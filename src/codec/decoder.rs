//! Stateless reconstruction of a value sequence from a packet collection.
//!
//! Packets are consumed from the tail of the collection toward its head, so the
//! last window produced is decoded first. Inside a packet the digits come out
//! least-significant first, which is the order they were folded in. With more
//! than one packet the window blocks therefore appear in reverse.
//!
//! Digit extraction stops as soon as the remaining accumulator is zero, so a
//! run of `min`-valued values at the end of a window is not reproduced.

use num_traits::ToPrimitive;

use crate::codec::packet::Packet;
use crate::error::{RadixPackError, Result};

/// Decodes a packet collection, taking ownership of it.
pub fn decode(packets: Vec<Packet>) -> Result<Vec<u8>> {
    let mut queue = packets;
    let mut output = Vec::new();
    while let Some(packet) = queue.pop() {
        decode_packet(&packet, &mut output)?;
    }
    Ok(output)
}

/// Decodes a collection of raw `[radix, min, data...]` buffers.
/// Every buffer must be at least 3 bytes long.
pub fn decode_buffers<B>(buffers: Vec<B>) -> Result<Vec<u8>>
where
    B: AsRef<[u8]>,
{
    let mut queue = buffers;
    let mut output = Vec::new();
    while let Some(buffer) = queue.pop() {
        let packet = Packet::from_bytes(buffer.as_ref())?;
        decode_packet(&packet, &mut output)?;
    }
    Ok(output)
}

/// Appends the digits of one packet to `output`.
pub fn decode_packet(packet: &Packet, output: &mut Vec<u8>) -> Result<()> {
    if packet.is_empty() {
        return Err(RadixPackError::PacketFormat(
            "packet carries no data bytes".to_string(),
        ));
    }
    let radix = packet.radix();
    // Radix 1 would never shrink the accumulator.
    if radix < 2 {
        return Err(RadixPackError::PacketFormat(format!(
            "radix {radix} cannot be decoded"
        )));
    }

    // `to_radix_le` yields the digits least-significant first and stops at the
    // highest non-zero digit; a zero accumulator still yields one digit.
    let digits = packet.alpha().to_radix_le(u32::from(radix));
    output.reserve(digits.len());
    for digit in digits {
        let value = u16::from(digit) + u16::from(packet.min());
        let byte = value
            .to_u8()
            .ok_or_else(|| RadixPackError::ValueOutOfRange {
                what: "Decoded value",
                value: value.to_string(),
            })?;
        output.push(byte);
    }
    Ok(())
}

//! Serialization of a whole packet collection into one self-describing buffer.

use std::io::Cursor;

use crate::bridge::format::{MIN_STREAM_LEN, STREAM_FORMAT_VERSION, STREAM_MAGIC};
use crate::codec::Packet;
use crate::error::{RadixPackError, Result};
use crate::kernels::leb128;

/// Writes `packets` into a stream container, preserving their order.
pub fn write_stream(packets: &[Packet]) -> Result<Vec<u8>> {
    let payload: usize = packets.iter().map(Packet::len).sum();
    let mut buf = Vec::with_capacity(MIN_STREAM_LEN + payload + packets.len());

    buf.extend_from_slice(STREAM_MAGIC);
    buf.extend_from_slice(&STREAM_FORMAT_VERSION.to_le_bytes());
    leb128::write_varint(packets.len() as u64, &mut buf)?;

    for packet in packets {
        leb128::write_varint(packet.len() as u64, &mut buf)?;
        buf.extend_from_slice(&packet.to_bytes());
    }
    Ok(buf)
}

/// Reads a stream container back into its packet collection.
pub fn read_stream(bytes: &[u8]) -> Result<Vec<Packet>> {
    if bytes.len() < MIN_STREAM_LEN {
        return Err(RadixPackError::PacketFormat(
            "stream is too short to hold a header".to_string(),
        ));
    }
    if &bytes[0..4] != STREAM_MAGIC {
        return Err(RadixPackError::PacketFormat(
            "invalid stream magic number".to_string(),
        ));
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != STREAM_FORMAT_VERSION {
        return Err(RadixPackError::PacketFormat(format!(
            "unsupported stream version {version}"
        )));
    }

    let mut cursor = Cursor::new(bytes);
    cursor.set_position(6);
    let count: u64 = leb128::read_varint(&mut cursor)?;

    // Each packet needs at least two bytes, which bounds any sane count.
    let remaining = bytes.len() - cursor.position() as usize;
    if count > remaining as u64 {
        return Err(RadixPackError::PacketFormat(format!(
            "stream claims {count} packets but only {remaining} bytes follow"
        )));
    }

    let mut packets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let len: u64 = leb128::read_varint(&mut cursor)?;
        let start = cursor.position() as usize;
        let end = start
            .checked_add(len as usize)
            .filter(|&end| end <= bytes.len())
            .ok_or_else(|| RadixPackError::PacketFormat("truncated packet".to_string()))?;
        packets.push(Packet::from_bytes(&bytes[start..end])?);
        cursor.set_position(end as u64);
    }

    if cursor.position() as usize != bytes.len() {
        return Err(RadixPackError::PacketFormat(
            "trailing bytes after the last packet".to_string(),
        ));
    }
    Ok(packets)
}

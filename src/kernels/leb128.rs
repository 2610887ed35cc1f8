//! LEB128 (Little-Endian Base 128) varints for the length prefixes of the
//! stream container. Fully panic-free.

use num_traits::{PrimInt, Unsigned};
use std::io::Cursor;

use crate::error::{RadixPackError, Result};

const PAYLOAD_MASK: u8 = 0x7F;
const CONTINUATION_BIT: u8 = 0x80;

/// Appends `value` to `buffer` as a LEB128 varint.
pub fn write_varint<T>(value: T, buffer: &mut Vec<u8>) -> Result<()>
where
    T: PrimInt + Unsigned,
{
    let mask = T::from(PAYLOAD_MASK)
        .ok_or_else(|| RadixPackError::Leb128("7-bit mask does not fit the type".to_string()))?;

    let mut rest = value;
    loop {
        let low = (rest & mask)
            .to_u8()
            .ok_or_else(|| RadixPackError::Leb128("payload does not fit a byte".to_string()))?;
        rest = rest >> 7;
        if rest.is_zero() {
            buffer.push(low);
            return Ok(());
        }
        buffer.push(low | CONTINUATION_BIT);
    }
}

/// Reads one LEB128 varint from `cursor`, advancing it past the varint.
pub fn read_varint<T>(cursor: &mut Cursor<&[u8]>) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    let total_bits = std::mem::size_of::<T>() * 8;
    let mut result = T::zero();
    let mut shift = 0usize;

    loop {
        let pos = cursor.position() as usize;
        let byte = *cursor
            .get_ref()
            .get(pos)
            .ok_or_else(|| RadixPackError::Leb128("unexpected end of buffer".to_string()))?;
        cursor.set_position((pos + 1) as u64);

        let payload = byte & PAYLOAD_MASK;
        // Bits shifted past the top of `T` would be silently lost.
        if shift >= total_bits || (shift + 7 > total_bits && (payload >> (total_bits - shift)) != 0) {
            return Err(RadixPackError::Leb128("integer overflow".to_string()));
        }
        let payload = T::from(payload)
            .ok_or_else(|| RadixPackError::Leb128("payload does not fit the type".to_string()))?;
        result = result | (payload << shift);

        if byte & CONTINUATION_BIT == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}

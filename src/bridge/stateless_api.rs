// In: src/bridge/stateless_api.rs

use crate::bridge::format::CompressionStats;
use crate::bridge::stream;
use crate::codec::{self, Encoder, Packet};
use crate::config::CodecConfig;
use crate::error::Result;

/// Packs a whole buffer: every emitted packet plus the final flush.
/// An empty input produces no packets.
pub fn compress(input: &[u8], config: &CodecConfig) -> Result<Vec<Packet>> {
    let mut encoder = Encoder::from_config(config)?;
    let mut packets = encoder.encode_all(input);
    if !encoder.is_empty() {
        packets.push(encoder.flush()?);
    }
    log::debug!(
        "packed {} bytes into {} packets",
        input.len(),
        packets.len()
    );
    Ok(packets)
}

/// Reconstructs the values of a packet collection (see `codec::decode`).
pub fn decompress(packets: Vec<Packet>) -> Result<Vec<u8>> {
    codec::decode(packets)
}

/// `compress` followed by `stream::write_stream`.
pub fn compress_to_stream(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    stream::write_stream(&compress(input, config)?)
}

/// `stream::read_stream` followed by `decompress`.
pub fn decompress_stream(bytes: &[u8]) -> Result<Vec<u8>> {
    decompress(stream::read_stream(bytes)?)
}

/// Size accounting for a packet collection produced from `original_size` bytes.
pub fn analyze(original_size: usize, packets: &[Packet]) -> CompressionStats {
    let header_size = packets.iter().map(|p| p.len() - p.data().len()).sum();
    let data_size = packets.iter().map(|p| p.data().len()).sum();
    let total_size = header_size + data_size;
    let savings_percent = if original_size == 0 {
        0.0
    } else {
        (1.0 - total_size as f64 / original_size as f64) * 100.0
    };

    CompressionStats {
        original_size,
        packet_count: packets.len(),
        header_size,
        data_size,
        total_size,
        savings_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_after_compression() {
        let input = vec![1u8, 0, 1, 1, 0, 1, 1, 1];
        let config = CodecConfig::with_bounds(0, 1).unwrap();
        let packets = compress(&input, &config).unwrap();

        let stats = analyze(input.len(), &packets);
        assert_eq!(stats.packet_count, 1);
        assert_eq!(stats.header_size, 2);
        assert_eq!(stats.data_size, 1);
        assert_eq!(stats.total_size, 3);
        assert!((stats.savings_percent - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_empty_input() {
        let stats = analyze(0, &[]);
        assert_eq!(stats.total_size, 0);
        assert_eq!(stats.savings_percent, 0.0);
    }
}

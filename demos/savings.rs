//! Packs a paragraph of UTF-8 text, unpacks it again and reports the savings.
//!
//! Run with `cargo run --example savings`.

use colored::Colorize;
use radixpack::bridge::{analyze, decompress};
use radixpack::{enable_verbose_logging, Encoder, RadixPackError};

const CLEAR_TEXT: &str = "€Lorem Ipsum is simply dummy text of the printing and typesetting industry. \
Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, when an unknown printer \
took a galley of type and scrambled it to make a type specimen book. It has survived not only five \
centuries, but also the leap into electronic typesetting, remaining essentially unchanged. It was \
popularised in the 1960s with the release of Letraset sheets containing Lorem Ipsum passages, and \
more recently with desktop publishing software like Aldus PageMaker including versions of Lorem Ipsum.";

fn main() -> Result<(), RadixPackError> {
    enable_verbose_logging(None);

    let bytes = CLEAR_TEXT.as_bytes();
    let mut encoder = Encoder::new(32, 226)?;
    let mut packets = encoder.encode_all(bytes);
    packets.push(encoder.flush()?);

    let stats = analyze(bytes.len(), &packets);
    let decompressed = decompress(packets)?;
    let actual = String::from_utf8_lossy(&decompressed);

    let passed = actual == CLEAR_TEXT;
    let verdict = if passed { "true".green() } else { "false".red() };
    println!("Passed: {verdict}");
    println!(
        "Savings: {:.2}% ({}B) of original size.\n",
        stats.savings_percent,
        stats.original_size as i64 - stats.total_size as i64
    );
    println!("Expected ({}bytes): {}\n", bytes.len(), CLEAR_TEXT);
    println!("Actual ({}bytes): {}", stats.total_size, actual);
    Ok(())
}

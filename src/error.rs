// In: src/error.rs

//! This module defines the single, unified error type for the entire radixpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadixPackError {
    // =========================================================================
    // === Validation Errors (fatal to the call, never to the encoder)
    // =========================================================================
    #[error("{what} has to be a number between 0 and 255, got {value}")]
    ValueOutOfRange { what: &'static str, value: String },

    #[error("Window bounds are invalid: min ({min}) has to be less than max ({max})")]
    InvalidBounds { min: u8, max: u8 },

    // =========================================================================
    // === Format Errors (decode-time, abort the whole call)
    // =========================================================================
    #[error("Packet is malformed: {0}")]
    PacketFormat(String),

    #[error("LEB128 decoding error: {0}")]
    Leb128(String),

    // =========================================================================
    // === Encoder State Errors
    // =========================================================================
    /// An explicit flush was requested on a window holding no digits.
    #[error("Cannot flush an empty window: the resulting packet would be undecodable")]
    EmptyWindow,

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from the Serde JSON library, typically while loading a `CodecConfig`.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RadixPackError>;

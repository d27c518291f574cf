//! # Error Types
//!
//! Every failure a conversion can hit. None of them are recoverable: the
//! caller surfaces the error and stops.

use thiserror::Error;

/// Errors that can occur while decoding, encoding or converting a WIF key.
#[derive(Debug, Error)]
pub enum WifError {
    /// Input contains a character outside the Base58 alphabet; `position` is a byte offset
    #[error("Invalid Base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Any other Base58 decoding failure
    #[error("Base58 decoding error: {0}")]
    Base58(bs58::decode::Error),

    /// Trailing checksum does not match the double SHA-256 of the payload.
    /// `found` holds the trailing bytes, fewer than four when the input is too short.
    #[error("Invalid checksum: expected {}, found {}", hex::encode(expected), hex::encode(found))]
    InvalidChecksum { expected: [u8; 4], found: Vec<u8> },

    /// Payload is neither 33 bytes nor 34 bytes ending in the compression marker
    #[error("Malformed WIF payload of {length} bytes")]
    MalformedPayload { length: usize },

    /// Wrong number of command-line arguments
    #[error("Invalid number of arguments")]
    InvalidArgumentCount,

    /// Target version is not a two-digit hex byte
    #[error("Invalid target version {0:?}: expected two hex digits (e.g. 80, ef)")]
    InvalidHexVersion(String),

    /// The converted key could not be rendered as a QR code
    #[error("QR code error: {0}")]
    QrCode(#[from] qrcode::types::QrError),

    /// Writing the result failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for WIF operations.
pub type Result<T> = std::result::Result<T, WifError>;

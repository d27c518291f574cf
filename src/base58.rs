//! # Base58Check
//!
//! Base58 text encoding of arbitrary byte strings, plus the 4-byte double
//! SHA-256 checksum layered on top of it. The text conversion itself is
//! `bs58` with the Bitcoin alphabet; leading zero bytes map to one `1` each.

use log::debug;
use zeroize::Zeroizing;

use crate::constants::*;
use crate::crypto::checksum;
use crate::error::{Result, WifError};

/// Encode `data` as Base58 text.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode Base58 text back into bytes. No checksum handling.
pub fn decode(input: &str) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = bs58::decode(input).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, index } => WifError::InvalidCharacter { character, position: index },
        bs58::decode::Error::NonAsciiCharacter { index } => {
            let character = input.get(index..).and_then(|rest| rest.chars().next()).unwrap_or(char::REPLACEMENT_CHARACTER);
            WifError::InvalidCharacter { character, position: index }
        }
        other => WifError::Base58(other),
    })?;
    Ok(Zeroizing::new(bytes))
}

/// Append the checksum of `payload` and Base58-encode the result.
pub fn encode_check(payload: &[u8]) -> String {
    let mut full = Zeroizing::new(Vec::with_capacity(payload.len() + CHECKSUM_SIZE));
    full.extend_from_slice(payload);
    full.extend_from_slice(&checksum(payload));
    encode(&full)
}

/// Split `raw` into payload and trailing checksum, failing unless the
/// checksum matches the payload.
pub fn verify_checksum(raw: &[u8]) -> Result<&[u8]> {
    if raw.len() < CHECKSUM_SIZE {
        // a truncated checksum can never match
        let expected = checksum(&[]);
        debug!("Decoded data is only {} bytes, too short to hold a checksum", raw.len());
        return Err(WifError::InvalidChecksum { expected, found: raw.to_vec() });
    }
    let (payload, found) = raw.split_at(raw.len() - CHECKSUM_SIZE);
    let expected = checksum(payload);
    if expected[..] != *found {
        debug!("Checksum mismatch: expected {}, found {}", hex::encode(expected), hex::encode(found));
        return Err(WifError::InvalidChecksum { expected, found: found.to_vec() });
    }
    Ok(payload)
}

/// Decode Base58Check text and return the verified payload without its checksum.
pub fn decode_check(input: &str) -> Result<Zeroizing<Vec<u8>>> {
    let raw = decode(input)?;
    let payload = verify_checksum(&raw)?;
    Ok(Zeroizing::new(payload.to_vec()))
}
